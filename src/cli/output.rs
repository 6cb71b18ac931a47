use anyhow::Result;
use serde_json::json;
use vexi::BrowseOutcome;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	if !outcome.accepted {
		println!("Browse cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(country) => println!("{}", country.display_name()),
		None => println!("No selection"),
	}
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(country) => json!({
			"name": country.display_name(),
			"cca3": country.cca3,
			"flag": country.flags.png,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use vexi::Country;

	use super::*;

	fn france() -> Country {
		serde_json::from_str(
			r#"{
				"name": {"common": "France"},
				"cca3": "FRA",
				"flags": {"png": "https://flagcdn.com/w320/fr.png"}
			}"#,
		)
		.expect("country decodes")
	}

	#[test]
	fn json_format_includes_the_selection() {
		let outcome = BrowseOutcome {
			accepted: true,
			query: "fra".into(),
			selection: Some(france()),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["name"], "France");
		assert_eq!(value["selection"]["cca3"], "FRA");
		assert_eq!(value["selection"]["flag"], "https://flagcdn.com/w320/fr.png");
	}

	#[test]
	fn cancelled_outcome_serializes_a_null_selection() {
		let outcome = BrowseOutcome {
			accepted: false,
			query: "fra".into(),
			selection: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
