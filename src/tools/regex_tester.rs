//! Regex tester - compiles a pattern and collects every match of the
//! test text, in order.

use regex::Regex;

use crate::pipeline::Pipeline;

/// Raw input of the regex screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegexInput {
    pub pattern: String,
    pub haystack: String,
}

impl RegexInput {
    /// A blank pattern means "nothing to test" regardless of the text
    pub fn is_blank(&self) -> bool {
        self.pattern.trim().is_empty()
    }
}

/// All non-overlapping matches of the pattern in the test text.
///
/// A pattern that fails to compile yields the compile error; the caller
/// never sees matches from an earlier, valid pattern.
pub fn find_matches(input: &RegexInput) -> Result<Vec<String>, String> {
    let re = Regex::new(&input.pattern).map_err(|e| e.to_string())?;
    Ok(re
        .find_iter(&input.haystack)
        .map(|m| m.as_str().to_owned())
        .collect())
}

/// Pipeline instance for the regex screen
pub fn pipeline() -> Pipeline<RegexInput, Vec<String>> {
    Pipeline::new(RegexInput::is_blank, find_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pattern: &str, haystack: &str) -> RegexInput {
        RegexInput {
            pattern: pattern.to_owned(),
            haystack: haystack.to_owned(),
        }
    }

    #[test]
    fn test_global_matches_in_order() {
        let matches = find_matches(&input("a+", "aa b aaa")).unwrap();
        assert_eq!(matches, vec!["aa", "aaa"]);
    }

    #[test]
    fn test_no_matches_is_success_with_empty_list() {
        let matches = find_matches(&input("z+", "aa b aaa")).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let i = input(r"\d{4}-\d{2}-\d{2}", "born 1990-01-02, hired 2015-09-30");
        assert_eq!(find_matches(&i).unwrap(), find_matches(&i).unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_failure() {
        assert!(find_matches(&input("a(", "text")).is_err());
    }

    #[test]
    fn test_pipeline_clears_matches_on_invalid_pattern() {
        let mut pipeline = pipeline();

        pipeline.refresh(&input("a+", "aa b aaa"));
        assert_eq!(
            pipeline.outcome().success(),
            Some(&vec![String::from("aa"), String::from("aaa")])
        );

        // Editing into a broken pattern must not leave stale matches
        pipeline.refresh(&input("a+(", "aa b aaa"));
        assert!(pipeline.outcome().is_failure());
        assert!(pipeline.outcome().success().is_none());
    }

    #[test]
    fn test_pipeline_blank_pattern_is_idle() {
        let mut pipeline = pipeline();
        pipeline.refresh(&input("", "some text"));
        assert!(pipeline.outcome().is_idle());
    }

    #[test]
    fn test_example_patterns_compile() {
        for example in crate::constants::REGEX_EXAMPLES {
            assert!(
                Regex::new(example.value).is_ok(),
                "example pattern {} must compile",
                example.name
            );
        }
    }
}
