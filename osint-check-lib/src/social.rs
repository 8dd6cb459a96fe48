//! Social-username probing over HTTP.
//!
//! This module provides the `SocialChecker` struct that probes a registry of
//! platforms for the existence of a username, one blocking-style request at a
//! time with a fixed delay between requests. The serialization is deliberate:
//! parallel bursts trip anti-bot defenses, so concurrency here would be a
//! feature change, not an optimization.

use crate::error::OsintCheckError;
use crate::types::{Existence, Platform, ProbeConfig, SocialResult, SocialSummary};
use crate::utils::{fill_template, validate_username};
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;

/// Default platform registry, in probe order.
///
/// The URL templates use a `{username}` placeholder. Order matters: results
/// are produced in registry iteration order.
const DEFAULT_PLATFORMS: &[(&str, &str)] = &[
    ("github", "https://github.com/{username}"),
    ("twitter", "https://twitter.com/{username}"),
    ("instagram", "https://www.instagram.com/{username}/"),
    ("linkedin", "https://www.linkedin.com/in/{username}/"),
    ("reddit", "https://www.reddit.com/user/{username}/"),
    ("tiktok", "https://www.tiktok.com/@{username}"),
    ("medium", "https://medium.com/@{username}"),
    ("pinterest", "https://www.pinterest.com/{username}/"),
    ("youtube", "https://www.youtube.com/@{username}"),
];

/// Get the default platform registry as an owned, ordered list.
///
/// Callers may probe a registry of their own instead; see
/// [`SocialChecker::check_username_on`].
pub fn default_platforms() -> Vec<Platform> {
    DEFAULT_PLATFORMS
        .iter()
        .map(|(name, template)| Platform::new(*name, *template))
        .collect()
}

/// Username prober that walks a platform registry sequentially.
///
/// Holds one `reqwest::Client` so connections are pooled across the probe
/// loop, and a `ProbeConfig` for the per-request timeout and inter-request
/// delay.
///
/// # Example
///
/// ```rust,no_run
/// use osint_check_lib::SocialChecker;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = SocialChecker::new()?;
///     for result in checker.check_username("octocat").await? {
///         println!("{}: {}", result.platform, result.exists);
///     }
///     Ok(())
/// }
/// ```
pub struct SocialChecker {
    /// HTTP client for platform probes, redirect-following enabled
    http_client: reqwest::Client,
    /// Timeout and delay settings for this checker instance
    config: ProbeConfig,
}

impl SocialChecker {
    /// Create a new checker with default configuration (8s timeout, 500ms delay).
    pub fn new() -> Result<Self, OsintCheckError> {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a new checker with custom timeout and delay settings.
    pub fn with_config(config: ProbeConfig) -> Result<Self, OsintCheckError> {
        // reqwest follows up to 10 redirects by default, which is the
        // behavior the classification policy expects.
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                OsintCheckError::network_with_source(
                    "Failed to create probe HTTP client",
                    e.to_string(),
                )
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe the default platform registry for a username.
    ///
    /// # Returns
    ///
    /// One `SocialResult` per platform, in registry order.
    ///
    /// # Errors
    ///
    /// Returns `OsintCheckError::InvalidUsername` if the username fails
    /// validation. Network failures never error: they are classified as
    /// `Existence::Unknown` on the affected platform and probing continues.
    pub async fn check_username(
        &self,
        username: &str,
    ) -> Result<Vec<SocialResult>, OsintCheckError> {
        self.check_username_on(username, &default_platforms()).await
    }

    /// Probe a caller-supplied platform registry for a username.
    ///
    /// Issues exactly one GET per registry entry, in iteration order, and
    /// sleeps the configured delay after every request — including the last
    /// one. No retries, no backoff, no jitter.
    pub async fn check_username_on(
        &self,
        username: &str,
        platforms: &[Platform],
    ) -> Result<Vec<SocialResult>, OsintCheckError> {
        validate_username(username)?;

        let mut results = Vec::with_capacity(platforms.len());
        for platform in platforms {
            let result = self.probe_platform(platform, username).await;
            results.push(result);
            tokio::time::sleep(self.config.delay).await;
        }

        Ok(results)
    }

    /// Probe a registry and yield results as they arrive.
    ///
    /// Same sequential, delayed semantics as [`check_username_on`](Self::check_username_on):
    /// strictly one request in flight at a time, so the external traffic
    /// signature is identical. Useful for rendering per-platform progress
    /// while the fixed delays tick by.
    pub fn check_username_stream<'a>(
        &'a self,
        username: &'a str,
        platforms: &'a [Platform],
    ) -> Result<Pin<Box<dyn Stream<Item = SocialResult> + Send + 'a>>, OsintCheckError> {
        validate_username(username)?;

        let stream = futures::stream::iter(platforms).then(move |platform| async move {
            let result = self.probe_platform(platform, username).await;
            tokio::time::sleep(self.config.delay).await;
            result
        });

        Ok(Box::pin(stream))
    }

    /// Issue a single GET and classify the outcome.
    ///
    /// Network-level failures (timeout, DNS, connection, TLS) are recovered
    /// here as `Unknown` with no status code — the only local-recovery policy
    /// in the system.
    async fn probe_platform(&self, platform: &Platform, username: &str) -> SocialResult {
        let url = fill_template(&platform.url_template, username);

        match self.http_client.get(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                SocialResult {
                    platform: platform.name.clone(),
                    url,
                    exists: classify_status(status),
                    status_code: Some(status),
                }
            }
            Err(_) => SocialResult {
                platform: platform.name.clone(),
                url,
                exists: Existence::Unknown,
                status_code: None,
            },
        }
    }
}

impl Default for SocialChecker {
    fn default() -> Self {
        Self::new().expect("Failed to create default social checker")
    }
}

/// Map an HTTP status code to the existence tri-state.
///
/// The {301, 302, 403, 404} set is a heuristic for anti-bot/existence
/// signaling, preserved exactly for behavior parity even though it is known
/// to be incomplete (e.g. platforms answering 429).
pub fn classify_status(status: u16) -> Existence {
    match status {
        200 => Existence::Found,
        301 | 302 | 403 => Existence::Found,
        404 => Existence::NotFound,
        _ => Existence::Unknown,
    }
}

/// Partition probe results into found / not_found / unknown buckets.
///
/// Per-bucket insertion order follows the input order.
pub fn summarize_social<I>(results: I) -> SocialSummary
where
    I: IntoIterator<Item = SocialResult>,
{
    let mut summary = SocialSummary::default();

    for result in results {
        match result.exists {
            Existence::Found => summary.found.push(result),
            Existence::NotFound => summary.not_found.push(result),
            Existence::Unknown => summary.unknown.push(result),
        }
    }

    summary
}
