//! Bundled region metadata for phone lookups.
//!
//! The `phonenumber` crate carries the numbering-plan data (parsing,
//! validation, formatting, region resolution) but not the geocoding, carrier,
//! or timezone side tables. This module bundles a region-granularity table:
//! two-letter region code -> English name and canonical tz database
//! identifiers. Best-effort by design: regions not listed here surface as
//! absent metadata, never as an error.

use std::collections::HashMap;

/// English name plus tz database identifiers for one region.
pub(crate) type RegionEntry = (&'static str, &'static [&'static str]);

/// Get the built-in region metadata table.
///
/// Multi-timezone countries list their zones in the tz database's zone.tab
/// grouping for that country; west-to-east order is not guaranteed.
///
/// # Returns
///
/// A HashMap mapping region codes (like "US", "GB") to (name, timezones).
pub(crate) fn get_region_table() -> HashMap<&'static str, RegionEntry> {
    HashMap::from([
        // North America (NANP)
        (
            "US",
            (
                "United States",
                &[
                    "America/New_York",
                    "America/Chicago",
                    "America/Denver",
                    "America/Phoenix",
                    "America/Los_Angeles",
                    "America/Anchorage",
                    "Pacific/Honolulu",
                ][..],
            ),
        ),
        (
            "CA",
            (
                "Canada",
                &[
                    "America/St_Johns",
                    "America/Halifax",
                    "America/Toronto",
                    "America/Winnipeg",
                    "America/Edmonton",
                    "America/Vancouver",
                ][..],
            ),
        ),
        ("MX", ("Mexico", &["America/Mexico_City", "America/Tijuana"][..])),
        ("PR", ("Puerto Rico", &["America/Puerto_Rico"][..])),
        ("JM", ("Jamaica", &["America/Jamaica"][..])),
        ("BS", ("Bahamas", &["America/Nassau"][..])),
        // South America
        (
            "BR",
            (
                "Brazil",
                &["America/Sao_Paulo", "America/Manaus", "America/Rio_Branco"][..],
            ),
        ),
        ("AR", ("Argentina", &["America/Argentina/Buenos_Aires"][..])),
        ("CL", ("Chile", &["America/Santiago"][..])),
        ("CO", ("Colombia", &["America/Bogota"][..])),
        ("PE", ("Peru", &["America/Lima"][..])),
        ("VE", ("Venezuela", &["America/Caracas"][..])),
        ("EC", ("Ecuador", &["America/Guayaquil"][..])),
        ("UY", ("Uruguay", &["America/Montevideo"][..])),
        ("PY", ("Paraguay", &["America/Asuncion"][..])),
        ("BO", ("Bolivia", &["America/La_Paz"][..])),
        // Western Europe
        ("GB", ("United Kingdom", &["Europe/London"][..])),
        ("IE", ("Ireland", &["Europe/Dublin"][..])),
        ("FR", ("France", &["Europe/Paris"][..])),
        ("DE", ("Germany", &["Europe/Berlin"][..])),
        ("NL", ("Netherlands", &["Europe/Amsterdam"][..])),
        ("BE", ("Belgium", &["Europe/Brussels"][..])),
        ("LU", ("Luxembourg", &["Europe/Luxembourg"][..])),
        ("CH", ("Switzerland", &["Europe/Zurich"][..])),
        ("AT", ("Austria", &["Europe/Vienna"][..])),
        ("ES", ("Spain", &["Europe/Madrid", "Atlantic/Canary"][..])),
        ("PT", ("Portugal", &["Europe/Lisbon", "Atlantic/Azores"][..])),
        ("IT", ("Italy", &["Europe/Rome"][..])),
        ("MT", ("Malta", &["Europe/Malta"][..])),
        // Northern Europe
        ("DK", ("Denmark", &["Europe/Copenhagen"][..])),
        ("NO", ("Norway", &["Europe/Oslo"][..])),
        ("SE", ("Sweden", &["Europe/Stockholm"][..])),
        ("FI", ("Finland", &["Europe/Helsinki"][..])),
        ("IS", ("Iceland", &["Atlantic/Reykjavik"][..])),
        ("EE", ("Estonia", &["Europe/Tallinn"][..])),
        ("LV", ("Latvia", &["Europe/Riga"][..])),
        ("LT", ("Lithuania", &["Europe/Vilnius"][..])),
        // Central and Eastern Europe
        ("PL", ("Poland", &["Europe/Warsaw"][..])),
        ("CZ", ("Czechia", &["Europe/Prague"][..])),
        ("SK", ("Slovakia", &["Europe/Bratislava"][..])),
        ("HU", ("Hungary", &["Europe/Budapest"][..])),
        ("RO", ("Romania", &["Europe/Bucharest"][..])),
        ("BG", ("Bulgaria", &["Europe/Sofia"][..])),
        ("GR", ("Greece", &["Europe/Athens"][..])),
        ("HR", ("Croatia", &["Europe/Zagreb"][..])),
        ("SI", ("Slovenia", &["Europe/Ljubljana"][..])),
        ("RS", ("Serbia", &["Europe/Belgrade"][..])),
        ("UA", ("Ukraine", &["Europe/Kyiv"][..])),
        (
            "RU",
            (
                "Russia",
                &[
                    "Europe/Kaliningrad",
                    "Europe/Moscow",
                    "Asia/Yekaterinburg",
                    "Asia/Novosibirsk",
                    "Asia/Vladivostok",
                ][..],
            ),
        ),
        ("TR", ("Turkey", &["Europe/Istanbul"][..])),
        // Middle East
        ("IL", ("Israel", &["Asia/Jerusalem"][..])),
        ("SA", ("Saudi Arabia", &["Asia/Riyadh"][..])),
        ("AE", ("United Arab Emirates", &["Asia/Dubai"][..])),
        ("QA", ("Qatar", &["Asia/Qatar"][..])),
        ("KW", ("Kuwait", &["Asia/Kuwait"][..])),
        ("JO", ("Jordan", &["Asia/Amman"][..])),
        ("LB", ("Lebanon", &["Asia/Beirut"][..])),
        ("IR", ("Iran", &["Asia/Tehran"][..])),
        ("IQ", ("Iraq", &["Asia/Baghdad"][..])),
        // Africa
        ("EG", ("Egypt", &["Africa/Cairo"][..])),
        ("MA", ("Morocco", &["Africa/Casablanca"][..])),
        ("DZ", ("Algeria", &["Africa/Algiers"][..])),
        ("TN", ("Tunisia", &["Africa/Tunis"][..])),
        ("NG", ("Nigeria", &["Africa/Lagos"][..])),
        ("GH", ("Ghana", &["Africa/Accra"][..])),
        ("KE", ("Kenya", &["Africa/Nairobi"][..])),
        ("ET", ("Ethiopia", &["Africa/Addis_Ababa"][..])),
        ("TZ", ("Tanzania", &["Africa/Dar_es_Salaam"][..])),
        ("UG", ("Uganda", &["Africa/Kampala"][..])),
        ("ZA", ("South Africa", &["Africa/Johannesburg"][..])),
        ("ZW", ("Zimbabwe", &["Africa/Harare"][..])),
        ("SN", ("Senegal", &["Africa/Dakar"][..])),
        ("CI", ("Ivory Coast", &["Africa/Abidjan"][..])),
        // South and Central Asia
        (
            "IN",
            ("India", &["Asia/Kolkata"][..]),
        ),
        ("PK", ("Pakistan", &["Asia/Karachi"][..])),
        ("BD", ("Bangladesh", &["Asia/Dhaka"][..])),
        ("LK", ("Sri Lanka", &["Asia/Colombo"][..])),
        ("NP", ("Nepal", &["Asia/Kathmandu"][..])),
        ("AF", ("Afghanistan", &["Asia/Kabul"][..])),
        ("KZ", ("Kazakhstan", &["Asia/Almaty", "Asia/Aqtobe"][..])),
        ("UZ", ("Uzbekistan", &["Asia/Tashkent"][..])),
        // East and Southeast Asia
        ("CN", ("China", &["Asia/Shanghai"][..])),
        ("HK", ("Hong Kong", &["Asia/Hong_Kong"][..])),
        ("MO", ("Macau", &["Asia/Macau"][..])),
        ("TW", ("Taiwan", &["Asia/Taipei"][..])),
        ("JP", ("Japan", &["Asia/Tokyo"][..])),
        ("KR", ("South Korea", &["Asia/Seoul"][..])),
        ("MN", ("Mongolia", &["Asia/Ulaanbaatar"][..])),
        ("VN", ("Vietnam", &["Asia/Ho_Chi_Minh"][..])),
        ("TH", ("Thailand", &["Asia/Bangkok"][..])),
        ("MY", ("Malaysia", &["Asia/Kuala_Lumpur"][..])),
        ("SG", ("Singapore", &["Asia/Singapore"][..])),
        (
            "ID",
            (
                "Indonesia",
                &["Asia/Jakarta", "Asia/Makassar", "Asia/Jayapura"][..],
            ),
        ),
        ("PH", ("Philippines", &["Asia/Manila"][..])),
        ("KH", ("Cambodia", &["Asia/Phnom_Penh"][..])),
        ("MM", ("Myanmar", &["Asia/Yangon"][..])),
        // Oceania
        (
            "AU",
            (
                "Australia",
                &[
                    "Australia/Sydney",
                    "Australia/Brisbane",
                    "Australia/Adelaide",
                    "Australia/Darwin",
                    "Australia/Perth",
                ][..],
            ),
        ),
        (
            "NZ",
            ("New Zealand", &["Pacific/Auckland", "Pacific/Chatham"][..]),
        ),
        ("FJ", ("Fiji", &["Pacific/Fiji"][..])),
        ("PG", ("Papua New Guinea", &["Pacific/Port_Moresby"][..])),
    ])
}

/// Look up the bundled metadata for a region code.
///
/// # Arguments
///
/// * `region` - Two-letter region code, any case
///
/// # Returns
///
/// `Some((name, timezones))` when the region is in the bundled table.
pub(crate) fn region_details(region: &str) -> Option<RegionEntry> {
    get_region_table().get(region.to_uppercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_details_known() {
        let (name, timezones) = region_details("US").unwrap();
        assert_eq!(name, "United States");
        assert!(timezones.contains(&"America/New_York"));
        assert!(timezones.contains(&"America/Los_Angeles"));
    }

    #[test]
    fn test_region_details_case_insensitive() {
        assert_eq!(region_details("gb"), region_details("GB"));
        assert!(region_details("gb").is_some());
    }

    #[test]
    fn test_region_details_unknown_is_none() {
        assert!(region_details("ZZ").is_none());
        assert!(region_details("").is_none());
    }

    #[test]
    fn test_single_timezone_regions() {
        let (_, timezones) = region_details("IN").unwrap();
        assert_eq!(timezones, &["Asia/Kolkata"]);

        let (_, timezones) = region_details("JP").unwrap();
        assert_eq!(timezones, &["Asia/Tokyo"]);
    }
}
