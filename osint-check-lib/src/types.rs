//! Core data types for OSINT lookups.
//!
//! This module defines all the main data structures used throughout the
//! library, including phone lookup results, probe results, the platform
//! registry, and probe configuration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Result of a phone number lookup.
///
/// Contains everything the numbering-plan data can say about a number.
/// All metadata fields are best-effort: absent data is an explicit `None`
/// (or an empty timezone list), never an empty-string sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneResult {
    /// The raw input string, exactly as supplied
    pub raw: String,

    /// Canonical E.164 form ("+<countrycode><subscriber>"), when formattable
    pub e164: Option<String>,

    /// Whether the number is valid for its region's numbering plan
    pub valid: bool,

    /// Whether the number is possible (length/shape check only)
    pub possible: bool,

    /// Detected two-letter region code (e.g. "US")
    pub region: Option<String>,

    /// Human-readable geographic description
    pub description: Option<String>,

    /// Carrier name, when the numbering plan carries one
    pub carrier: Option<String>,

    /// Timezone identifiers associated with the number's region
    pub timezones: Vec<String>,
}

/// Tri-state answer to "does this username exist on this platform?".
///
/// Kept as a three-variant enum rather than `Option<bool>` so that "unknown"
/// stays explicit in all consuming code. The JSON form is a nullable boolean
/// (`true` / `false` / `null`) to match the result record's wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    /// Profile exists (HTTP 200, 301, 302, or 403)
    Found,
    /// Profile does not exist (HTTP 404)
    NotFound,
    /// Could not be determined (other status or network failure)
    Unknown,
}

impl Serialize for Existence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Existence::Found => serializer.serialize_bool(true),
            Existence::NotFound => serializer.serialize_bool(false),
            Existence::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Existence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<bool>::deserialize(deserializer)? {
            Some(true) => Existence::Found,
            Some(false) => Existence::NotFound,
            None => Existence::Unknown,
        })
    }
}

impl std::fmt::Display for Existence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Existence::Found => write!(f, "found"),
            Existence::NotFound => write!(f, "not found"),
            Existence::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of probing a single platform for a username.
///
/// One instance per platform per invocation. `status_code` is the actual
/// HTTP status when a response was received, absent on network failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialResult {
    /// Platform name from the registry (e.g. "github")
    pub platform: String,

    /// The URL that was probed, with the username substituted in
    pub url: String,

    /// Tri-state existence classification
    pub exists: Existence,

    /// HTTP status code, absent when no response was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// A single entry in the platform registry.
///
/// The URL template contains a `{username}` placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Platform name (e.g. "github")
    pub name: String,

    /// URL template with a `{username}` placeholder
    pub url_template: String,
}

impl Platform {
    /// Create a new platform entry.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, url_template: T) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
        }
    }
}

/// Probe results partitioned into the three existence buckets.
///
/// Per-bucket insertion order matches the order results were produced in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialSummary {
    /// Results with `exists == Found`
    pub found: Vec<SocialResult>,

    /// Results with `exists == NotFound`
    pub not_found: Vec<SocialResult>,

    /// Results with `exists == Unknown`
    pub unknown: Vec<SocialResult>,
}

impl SocialSummary {
    /// Total number of results across all buckets.
    pub fn total(&self) -> usize {
        self.found.len() + self.not_found.len() + self.unknown.len()
    }
}

/// Configuration options for username probing.
///
/// This struct allows tuning of the probe behavior: per-request timeout
/// and the fixed inter-request delay.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Timeout for each individual HTTP request
    /// Default: 8 seconds
    pub timeout: Duration,

    /// Fixed delay slept after every request (including the last one).
    /// A simple self-imposed rate limit, not adaptive throttling.
    /// Default: 500 milliseconds
    pub delay: Duration,
}

impl Default for ProbeConfig {
    /// Create a sensible default configuration.
    ///
    /// These defaults match the tool's conservative traffic profile:
    /// generous per-request timeout, half a second between requests.
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            delay: Duration::from_millis(500),
        }
    }
}

impl ProbeConfig {
    /// Set a custom per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom inter-request delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}
