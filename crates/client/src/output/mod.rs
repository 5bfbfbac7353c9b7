//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use ratings_core::rating::RatedEntry;

    use super::*;

    #[test]
    fn test_json_output_is_compact() {
        let entry = RatedEntry {
            name: "python".to_string(),
            rating: 5,
        };
        assert_eq!(
            format_output(&entry, OutputFormat::Json),
            r#"{"name":"python","rating":5}"#
        );
    }
}
