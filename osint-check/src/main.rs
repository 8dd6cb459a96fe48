//! OSINT Check CLI Application
//!
//! A command-line interface for phone number metadata lookup and sequential
//! social-username probing. This CLI application provides a user-friendly
//! interface to the osint-check-lib library.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use osint_check_lib::{
    default_platforms, lookup_phone, summarize_social, ConfigManager, FileConfig, ProbeConfig,
    SocialChecker,
};
use std::process;
use std::time::Duration;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for osint-check
#[derive(Parser, Debug)]
#[command(name = "osint-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OSINT helper for phone numbers and social media usernames")]
#[command(
    long_about = "OSINT helper for phone numbers and social media usernames.\n\nPhone lookups run entirely offline against bundled numbering-plan data.\nUsername probes issue one HTTP request per platform, sequentially, with a\nfixed delay between requests."
)]
#[command(styles = STYLES)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Use specific config file instead of automatic discovery
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help_heading = "Configuration"
    )]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help_heading = "Configuration"
    )]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a phone number
    Phone {
        /// Phone number to parse (E.164 or national format)
        #[arg(value_name = "NUMBER")]
        number: String,

        /// Region hint for numbers without a country code (default: US)
        #[arg(long = "region", value_name = "CODE")]
        region: Option<String>,

        /// Output the result in JSON format
        #[arg(short = 'j', long = "json", help_heading = "Output Format")]
        json: bool,

        /// Enable colored, formatted output
        #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
        pretty: bool,
    },

    /// Check social media username presence
    Social {
        /// Username to check across the platform registry
        #[arg(value_name = "USERNAME")]
        username: String,

        /// HTTP timeout per platform in seconds (default: 8)
        #[arg(long = "timeout", value_name = "SECONDS")]
        timeout: Option<f64>,

        /// Delay between requests in seconds (default: 0.5)
        #[arg(long = "delay", value_name = "SECONDS")]
        delay: Option<f64>,

        /// Output the results in JSON format
        #[arg(short = 'j', long = "json", help_heading = "Output Format")]
        json: bool,

        /// Enable colored, formatted output
        #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        eprintln!("osint-check v{} starting...", env!("CARGO_PKG_VERSION"));
    }

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Dispatch the subcommand after resolving config-file defaults.
async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = load_file_config(&args)?;

    match &args.command {
        Command::Phone {
            number,
            region,
            json,
            pretty,
        } => {
            let region = resolve_region(region.as_deref(), &file_config);
            run_phone(number, &region, *json, *pretty)
        }
        Command::Social {
            username,
            timeout,
            delay,
            json,
            pretty,
        } => {
            let probe_config = resolve_probe_config(*timeout, *delay, &file_config)?;
            run_social(username, probe_config, *json, *pretty).await
        }
    }
}

/// Load the config file: explicit --config wins over automatic discovery.
fn load_file_config(args: &Args) -> Result<FileConfig, Box<dyn std::error::Error>> {
    let manager = ConfigManager::new(args.verbose);

    if let Some(explicit_path) = &args.config {
        if args.verbose {
            eprintln!("Using explicit config file: {}", explicit_path);
        }
        let config = manager
            .load_file(explicit_path)
            .map_err(|e| format!("Failed to load config file '{}': {}", explicit_path, e))?;
        return Ok(config);
    }

    // Silently continue with defaults if no config files found
    Ok(manager.discover_and_load().unwrap_or_default())
}

/// Region precedence: CLI flag > config file > "US".
fn resolve_region(cli_region: Option<&str>, file_config: &FileConfig) -> String {
    if let Some(region) = cli_region {
        return region.to_string();
    }

    file_config
        .defaults
        .as_ref()
        .and_then(|d| d.region.clone())
        .unwrap_or_else(|| "US".to_string())
}

/// Timeout/delay precedence: CLI flags > config file > built-in defaults.
fn resolve_probe_config(
    cli_timeout: Option<f64>,
    cli_delay: Option<f64>,
    file_config: &FileConfig,
) -> Result<ProbeConfig, Box<dyn std::error::Error>> {
    let defaults = file_config.defaults.as_ref();

    let mut config = ProbeConfig::default();

    if let Some(timeout) = cli_timeout.or_else(|| defaults.and_then(|d| d.timeout)) {
        if !timeout.is_finite() || timeout <= 0.0 {
            return Err("Timeout must be a positive number of seconds".into());
        }
        let timeout = Duration::try_from_secs_f64(timeout)
            .map_err(|_| "Timeout exceeds the supported range")?;
        config = config.with_timeout(timeout);
    }

    if let Some(delay) = cli_delay.or_else(|| defaults.and_then(|d| d.delay)) {
        if !delay.is_finite() || delay < 0.0 {
            return Err("Delay must be zero or a positive number of seconds".into());
        }
        let delay = Duration::try_from_secs_f64(delay)
            .map_err(|_| "Delay exceeds the supported range")?;
        config = config.with_delay(delay);
    }

    Ok(config)
}

/// Run the phone lookup and print the result.
fn run_phone(
    number: &str,
    region: &str,
    json: bool,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = lookup_phone(number, region)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui::print_phone_result(&result, pretty);
    }

    Ok(())
}

/// Run the username probe, streaming per-platform lines in text mode.
async fn run_social(
    username: &str,
    probe_config: ProbeConfig,
    json: bool,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let checker = SocialChecker::with_config(probe_config)?;
    let platforms = default_platforms();

    if json {
        let results = checker.check_username_on(username, &platforms).await?;
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "results": results }))?
        );
        return Ok(());
    }

    if pretty {
        ui::print_probe_header(username, platforms.len());
    }

    let total = platforms.len();
    let mut results = Vec::with_capacity(total);
    let mut stream = checker.check_username_stream(username, &platforms)?;

    let mut completed = 0usize;
    while let Some(result) = stream.next().await {
        completed += 1;
        ui::print_probe_line(&result, Some((completed, total)), pretty);
        results.push(result);
    }
    drop(stream);

    let summary = summarize_social(results);
    println!();
    ui::print_social_summary(&summary, pretty);

    Ok(())
}
