//! Display logic for the osint-check CLI.
//!
//! This module handles all human-readable output: plain field listings for
//! phone lookups, per-platform result lines during a username probe, and the
//! grouped summary at the end. Colored `--pretty` output uses only the
//! `console` crate (already a dependency); plain mode sticks to bare text.

use console::{pad_str, style, Alignment};
use osint_check_lib::{Existence, PhoneResult, SocialResult, SocialSummary};

// ── Phone output ─────────────────────────────────────────────────────────────

/// Print a phone lookup result as one line per field.
///
/// Absent optional fields are shown as `n/a` rather than omitted, so the
/// output shape is stable across numbers.
pub fn print_phone_result(result: &PhoneResult, pretty: bool) {
    let rows = [
        ("Raw", result.raw.clone()),
        ("E164", opt_str(result.e164.as_deref())),
        ("Valid", bool_str(result.valid)),
        ("Possible", bool_str(result.possible)),
        ("Region", opt_str(result.region.as_deref())),
        ("Description", opt_str(result.description.as_deref())),
        ("Carrier", opt_str(result.carrier.as_deref())),
        ("Timezones", list_str(&result.timezones)),
    ];

    for (label, value) in rows {
        if pretty {
            let padded = pad_str(label, 12, Alignment::Left, None);
            let styled_value = if value == "n/a" {
                style(value).dim()
            } else {
                style(value).white()
            };
            println!("  {} {}", style(padded).bold(), styled_value);
        } else {
            println!("{}: {}", label, value);
        }
    }
}

// ── Probe header ─────────────────────────────────────────────────────────────

/// Print a styled header at the start of a pretty probe run.
pub fn print_probe_header(username: &str, platform_count: usize) {
    println!(
        "{} {} {}",
        style("osint-check").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— Checking '{}' on {} platform{}",
            username,
            platform_count,
            if platform_count == 1 { "" } else { "s" }
        ))
        .dim(),
    );
    println!();
}

// ── Single result line ───────────────────────────────────────────────────────

/// Format and print a single platform result.
///
/// If `counter` is Some((current, total)), a progress prefix like `[3/9]` is
/// shown in pretty mode.
pub fn print_probe_line(result: &SocialResult, counter: Option<(usize, usize)>, pretty: bool) {
    if !pretty {
        println!(
            "{}: {} ({}) {}",
            result.platform,
            existence_label(result.exists),
            format_status(result.status_code),
            result.url,
        );
        return;
    }

    let platform_width = 12;
    let padded_platform = pad_str(&result.platform, platform_width, Alignment::Left, Some(".."));

    let prefix = match counter {
        Some((cur, total)) => {
            format!("{} ", style(format!("[{}/{}]", cur, total)).dim())
        }
        None => String::new(),
    };

    let status_note = style(format!("({})", format_status(result.status_code))).dim();

    match result.exists {
        Existence::Found => {
            println!(
                "  {}{}  {} {}  {}",
                prefix,
                style(&padded_platform).white(),
                style("FOUND").green().bold(),
                status_note,
                style(&result.url).dim(),
            );
        }
        Existence::NotFound => {
            println!(
                "  {}{}  {} {}",
                prefix,
                style(&padded_platform).white(),
                style("NOT FOUND").red(),
                status_note,
            );
        }
        Existence::Unknown => {
            println!(
                "  {}{}  {} {}",
                prefix,
                style(&padded_platform).white(),
                style("UNKNOWN").yellow(),
                status_note,
            );
        }
    }
}

// ── Grouped summary ──────────────────────────────────────────────────────────

/// Print results grouped by outcome: Found, Not found, Unknown.
/// Empty sections are omitted entirely.
pub fn print_social_summary(summary: &SocialSummary, pretty: bool) {
    if !pretty {
        print_plain_summary(summary);
        return;
    }

    if !summary.found.is_empty() {
        println!(
            "  {} {}",
            style(format!("── Found ({}) ", summary.found.len()))
                .green()
                .bold(),
            style("─".repeat(44)).green().dim(),
        );
        for r in &summary.found {
            print_summary_line(r);
        }
        println!();
    }

    if !summary.not_found.is_empty() {
        println!(
            "  {} {}",
            style(format!("── Not found ({}) ", summary.not_found.len()))
                .red()
                .bold(),
            style("─".repeat(40)).red().dim(),
        );
        for r in &summary.not_found {
            print_summary_line(r);
        }
        println!();
    }

    if !summary.unknown.is_empty() {
        println!(
            "  {} {}",
            style(format!("── Unknown ({}) ", summary.unknown.len()))
                .yellow()
                .bold(),
            style("─".repeat(42)).yellow().dim(),
        );
        for r in &summary.unknown {
            print_summary_line(r);
        }
        println!();
    }

    println!(
        "  {} platform{}  {}  {}  {}  {}  {}  {}",
        style(summary.total()).bold(),
        if summary.total() == 1 { "" } else { "s" },
        style("|").dim(),
        style(format!("{} found", summary.found.len())).green(),
        style("|").dim(),
        style(format!("{} not found", summary.not_found.len())).red(),
        style("|").dim(),
        style(format!("{} unknown", summary.unknown.len())).yellow(),
    );
}

/// Plain-text summary for non-pretty mode. Same grouping, no colors.
fn print_plain_summary(summary: &SocialSummary) {
    if !summary.found.is_empty() {
        println!("Found ({}):", summary.found.len());
        for r in &summary.found {
            println!("  {} {}", r.platform, r.url);
        }
    }
    if !summary.not_found.is_empty() {
        println!("Not found ({}):", summary.not_found.len());
        for r in &summary.not_found {
            println!("  {}", r.platform);
        }
    }
    if !summary.unknown.is_empty() {
        println!("Unknown ({}):", summary.unknown.len());
        for r in &summary.unknown {
            println!("  {} ({})", r.platform, format_status(r.status_code));
        }
    }
}

/// Print a single line inside a grouped section.
fn print_summary_line(result: &SocialResult) {
    let padded = pad_str(&result.platform, 12, Alignment::Left, Some(".."));
    println!(
        "    {}  {}",
        style(&padded).white(),
        style(&result.url).dim(),
    );
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Render an HTTP status code, or `n/a` when no response was received.
pub fn format_status(status_code: Option<u16>) -> String {
    match status_code {
        Some(code) => code.to_string(),
        None => "n/a".to_string(),
    }
}

fn existence_label(exists: Existence) -> &'static str {
    match exists {
        Existence::Found => "FOUND",
        Existence::NotFound => "NOT FOUND",
        Existence::Unknown => "UNKNOWN",
    }
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or("n/a").to_string()
}

fn bool_str(value: bool) -> String {
    value.to_string()
}

fn list_str(values: &[String]) -> String {
    if values.is_empty() {
        "n/a".to_string()
    } else {
        values.join(", ")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_with_code() {
        assert_eq!(format_status(Some(200)), "200");
        assert_eq!(format_status(Some(503)), "503");
    }

    #[test]
    fn test_format_status_absent() {
        assert_eq!(format_status(None), "n/a");
    }

    #[test]
    fn test_existence_labels() {
        assert_eq!(existence_label(Existence::Found), "FOUND");
        assert_eq!(existence_label(Existence::NotFound), "NOT FOUND");
        assert_eq!(existence_label(Existence::Unknown), "UNKNOWN");
    }

    #[test]
    fn test_opt_str_fallback() {
        assert_eq!(opt_str(Some("US")), "US");
        assert_eq!(opt_str(None), "n/a");
    }

    #[test]
    fn test_list_str() {
        assert_eq!(list_str(&[]), "n/a");
        let tzs = vec!["Europe/London".to_string(), "Europe/Paris".to_string()];
        assert_eq!(list_str(&tzs), "Europe/London, Europe/Paris");
    }
}
