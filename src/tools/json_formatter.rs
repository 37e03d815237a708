//! JSON formatter - parse then re-serialize, pretty or minified.

use crate::pipeline::Pipeline;

/// Output shape for the formatter
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum JsonMode {
    /// 2-space indentation
    #[default]
    Pretty,
    Minified,
}

/// Raw input of the JSON screen; the mode takes part in recomputation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonInput {
    pub text: String,
    pub mode: JsonMode,
}

impl JsonInput {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Reformat the input document.
///
/// The parse error text is surfaced verbatim; on failure no partially
/// formatted output exists.
pub fn reformat(input: &JsonInput) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(&input.text).map_err(|e| e.to_string())?;
    let rendered = match input.mode {
        JsonMode::Pretty => serde_json::to_string_pretty(&value),
        JsonMode::Minified => serde_json::to_string(&value),
    };
    rendered.map_err(|e| e.to_string())
}

/// Pipeline instance for the JSON screen
pub fn pipeline() -> Pipeline<JsonInput, String> {
    Pipeline::new(JsonInput::is_blank, reformat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str, mode: JsonMode) -> JsonInput {
        JsonInput {
            text: text.to_owned(),
            mode,
        }
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let out = reformat(&input(r#"{"a":1}"#, JsonMode::Pretty)).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_minified_strips_whitespace() {
        let out = reformat(&input("{ \"a\" : 1 }", JsonMode::Minified)).unwrap();
        assert_eq!(out, r#"{"a":1}"#);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let source = r#"{"user":{"profile":{"name":"Alice","tags":[1,2,3],"active":true}}}"#;
        let original: serde_json::Value = serde_json::from_str(source).unwrap();

        let pretty = reformat(&input(source, JsonMode::Pretty)).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_invalid_json_is_failure() {
        assert!(reformat(&input("{not json", JsonMode::Pretty)).is_err());
    }

    #[test]
    fn test_pipeline_never_shows_partial_output() {
        let mut pipeline = pipeline();

        pipeline.refresh(&input(r#"{"a":1}"#, JsonMode::Pretty));
        assert!(pipeline.outcome().is_success());

        // Truncated document: failure, and the earlier output is gone
        pipeline.refresh(&input(r#"{"a":1"#, JsonMode::Pretty));
        assert!(pipeline.outcome().is_failure());
        assert!(pipeline.outcome().success().is_none());
    }

    #[test]
    fn test_pipeline_blank_input_is_idle() {
        let mut pipeline = pipeline();
        pipeline.refresh(&input("  \n ", JsonMode::Pretty));
        assert!(pipeline.outcome().is_idle());
    }

    #[test]
    fn test_sample_documents_parse() {
        for sample in crate::constants::JSON_SAMPLES {
            assert!(
                reformat(&input(sample.value, JsonMode::Pretty)).is_ok(),
                "sample {} must be valid JSON",
                sample.name
            );
        }
    }
}
