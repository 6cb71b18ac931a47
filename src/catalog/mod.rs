//! Country records and the name filter.
//!
//! The REST Countries payload is deserialized into [`Country`] records; only
//! the fields this application renders are kept, everything else in the
//! payload is ignored. [`filter_countries`] implements the live name filter
//! driving the card grid.

use serde::Deserialize;

/// Glyph shown in place of the emoji flag when the payload omits it.
pub const FALLBACK_FLAG: &str = "⚑";

/// A single country as returned by the REST Countries v3.1 API.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub flags: CountryFlags,
    /// Unique three-letter country code; the record's identity.
    pub cca3: String,
    /// Emoji flag. Present in the live payload but not guaranteed.
    #[serde(default)]
    pub flag: Option<String>,
}

/// Name variants for a country. Only the common form is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// Flag image URLs for a country.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryFlags {
    pub png: String,
}

impl Country {
    /// Name used for both rendering and filtering.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    /// Emoji flag, falling back to a neutral glyph when absent.
    #[must_use]
    pub fn flag_glyph(&self) -> &str {
        self.flag.as_deref().unwrap_or(FALLBACK_FLAG)
    }
}

/// Return the indices of countries whose display name contains `query`
/// case-insensitively, preserving the original order.
///
/// The empty query matches everything. Whitespace is significant: `" "` is a
/// real query, not a match-all.
#[must_use]
pub fn filter_countries(countries: &[Country], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..countries.len()).collect();
    }

    let needle = query.to_lowercase();
    countries
        .iter()
        .enumerate()
        .filter(|(_, country)| country.display_name().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, cca3: &str) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
            },
            flags: CountryFlags {
                png: format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase()),
            },
            cca3: cca3.to_string(),
            flag: None,
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("France", "FRA"),
            country("Germany", "DEU"),
            country("French Polynesia", "PYF"),
            country("Iceland", "ISL"),
        ]
    }

    #[test]
    fn empty_query_returns_every_index_in_order() {
        let countries = sample();
        assert_eq!(filter_countries(&countries, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let countries = sample();
        assert_eq!(filter_countries(&countries, "fr"), vec![0, 2]);
        assert_eq!(filter_countries(&countries, "fren"), vec![2]);
        assert_eq!(filter_countries(&countries, "FREN"), vec![2]);
        assert_eq!(filter_countries(&countries, "LAND"), vec![3]);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let countries = sample();
        let matches = filter_countries(&countries, "an");
        assert_eq!(matches, vec![0, 1, 3]);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let countries = sample();
        assert!(filter_countries(&countries, "zzzz").is_empty());
    }

    #[test]
    fn whitespace_query_is_a_real_query() {
        let countries = sample();
        assert_eq!(filter_countries(&countries, " p"), vec![2]);
        assert!(filter_countries(&countries, "   ").is_empty());
    }

    #[test]
    fn missing_emoji_falls_back_to_neutral_glyph() {
        let mut entry = country("France", "FRA");
        assert_eq!(entry.flag_glyph(), FALLBACK_FLAG);
        entry.flag = Some("🇫🇷".to_string());
        assert_eq!(entry.flag_glyph(), "🇫🇷");
    }
}
