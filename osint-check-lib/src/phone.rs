//! Phone number lookup against static numbering-plan data.
//!
//! This module wraps the `phonenumber` crate (the Rust libphonenumber port)
//! and assembles a single `PhoneResult` record per lookup. Parsing failures
//! propagate to the caller; there is no retry or recovery. Everything here is
//! a pure function over data bundled at compile time — no I/O.

use crate::error::OsintCheckError;
use crate::regions::region_details;
use crate::types::PhoneResult;

use phonenumber::{country, metadata, Mode};

/// E.164 numbers carry at most 15 digits (country code included).
const E164_MAX_DIGITS: usize = 15;
const E164_MIN_DIGITS: usize = 3;

/// Look up a phone number and derive its metadata.
///
/// The region hint is a two-letter code (any case) used only when the number
/// lacks an explicit `+<countrycode>` prefix.
///
/// # Arguments
///
/// * `number` - The raw number string (e.g. "+14155552671" or "020 7183 8750")
/// * `region` - Region hint for numbers without a country code (e.g. "US")
///
/// # Returns
///
/// A `PhoneResult` with validity flags and best-effort metadata. Fields with
/// no data behind them come back as `None` / empty, never as empty strings.
///
/// # Errors
///
/// Returns `OsintCheckError::InvalidNumber` if:
/// - The region hint is not a known two-letter code
/// - The input cannot be parsed as a phone number at all
pub fn lookup_phone(number: &str, region: &str) -> Result<PhoneResult, OsintCheckError> {
    let hint: country::Id = region.to_uppercase().parse().map_err(|_| {
        OsintCheckError::invalid_number(number, format!("unknown region hint '{}'", region))
    })?;

    let parsed = phonenumber::parse(Some(hint), number)
        .map_err(|e| OsintCheckError::invalid_number(number, e.to_string()))?;

    let valid = phonenumber::is_valid(&parsed);
    let e164 = parsed.format().mode(Mode::E164).to_string();
    let possible = valid || is_plausible_length(&e164);

    let region_code = parsed
        .metadata(&metadata::DATABASE)
        .map(|m| m.id().to_string());

    let (description, timezones) = match region_code.as_deref().and_then(region_details) {
        Some((name, zones)) => (
            Some(name.to_string()),
            zones.iter().map(|z| z.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };

    // Carrier data in the numbering plan is sparse; absent stays None.
    let carrier = parsed.carrier().map(|c| c.to_string());

    Ok(PhoneResult {
        raw: number.to_string(),
        e164: Some(e164),
        valid,
        possible,
        region: region_code,
        description,
        carrier,
        timezones,
    })
}

/// Length/shape possibility check over the canonical form.
///
/// A number can be possible without being valid (right length, unassigned
/// range). Valid numbers are always possible, handled by the caller.
fn is_plausible_length(e164: &str) -> bool {
    let digits = e164.chars().filter(|c| c.is_ascii_digit()).count();
    (E164_MIN_DIGITS..=E164_MAX_DIGITS).contains(&digits)
}
