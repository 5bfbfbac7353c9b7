//! Pretty output formatting.

use ratings_core::api::Readiness;
use ratings_core::rating::RatedEntry;

use crate::client::entries::WriteOutcome;

/// Format an entry for display.
pub fn format_entry(entry: &RatedEntry) -> String {
    format!("{}\n  Rating: {}", entry.name, entry.rating)
}

/// Format entries for display.
pub fn format_entries(entries: &[RatedEntry]) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }
    let mut output = format!("ENTRIES ({})\n", entries.len());
    output.push_str(&"-".repeat(40));
    for entry in entries {
        output.push_str(&format!("\n{}", format_entry(entry)));
        output.push('\n');
    }
    output
}

/// Format the result of a rating write.
pub fn format_write(outcome: &WriteOutcome) -> String {
    let verb = if outcome.created { "Created" } else { "Updated" };
    match &outcome.location {
        Some(location) => format!("{} {}\n  Location: {}", verb, outcome.name, location),
        None => format!("{} {}", verb, outcome.name),
    }
}

/// Format a readiness report.
pub fn format_readiness(readiness: &Readiness) -> String {
    if readiness.ready {
        "Ready".to_string()
    } else {
        "Not ready: storage unavailable".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rating: i64) -> RatedEntry {
        RatedEntry {
            name: name.to_string(),
            rating,
        }
    }

    #[test]
    fn test_format_entries_empty() {
        assert_eq!(format_entries(&[]), "No entries found.");
    }

    #[test]
    fn test_format_entries_lists_each_entry() {
        let output = format_entries(&[entry("python", 5), entry("cassandra", 1)]);
        assert!(output.starts_with("ENTRIES (2)\n"));
        assert!(output.contains("python\n  Rating: 5"));
        assert!(output.contains("cassandra\n  Rating: 1"));
    }

    #[test]
    fn test_format_write() {
        let outcome = WriteOutcome {
            name: "python".to_string(),
            created: false,
            location: Some("entry/python".to_string()),
        };
        assert_eq!(
            format_write(&outcome),
            "Updated python\n  Location: entry/python"
        );
    }
}
