//! # OSINT Check Library
//!
//! Two independent lookups for open-source-intelligence workflows: phone
//! number metadata derived from static numbering-plan data, and sequential
//! HTTP probing of social-media platforms for a username.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use osint_check_lib::{lookup_phone, SocialChecker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let phone = lookup_phone("+14155552671", "US")?;
//!     println!("{} valid: {}", phone.raw, phone.valid);
//!
//!     let checker = SocialChecker::new()?;
//!     let results = checker.check_username("octocat").await?;
//!     for result in results {
//!         println!("{}: {}", result.platform, result.exists);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Phone lookup**: pure function over bundled numbering-plan data
//! - **Username probe**: strictly sequential requests with a fixed delay
//!   between them — a deliberate traffic signature, not an oversight
//! - **Tri-state existence**: found / not-found / unknown, kept explicit
//!   everywhere instead of a nullable boolean

// Re-export main public API types and functions
// This makes them available as osint_check_lib::TypeName
pub use config::{ConfigManager, DefaultsConfig, FileConfig};
pub use error::OsintCheckError;
pub use phone::lookup_phone;
pub use social::{classify_status, default_platforms, summarize_social, SocialChecker};
pub use types::{
    Existence, Platform, PhoneResult, ProbeConfig, SocialResult, SocialSummary,
};
pub use utils::validate_username;

// Internal modules - these are not part of the public API
mod config;
mod error;
mod phone;
mod regions;
mod social;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, OsintCheckError>;

// Library version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
