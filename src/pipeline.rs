//! Reactive validate-and-transform pipeline.
//!
//! Every tool screen repeats the same wiring: take raw input, attempt a
//! transformation that can fail, show either the result or the error,
//! recompute on every change. This module owns that wiring once, so the
//! screens only supply a transform function and a blank predicate.

/// Outcome of the most recent transform run.
///
/// Exactly one variant is observable at a time; `refresh` replaces the
/// whole value, never part of it.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// Blank input; the transform was not invoked
    Idle,
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Outcome::Idle)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Outcome::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Re-runs a fallible transform whenever its input changes and exposes
/// exactly one current [`Outcome`].
///
/// Blank input short-circuits to [`Outcome::Idle`] without invoking the
/// transform. Transform errors are captured as [`Outcome::Failure`];
/// nothing escapes the pipeline boundary.
pub struct Pipeline<I, O> {
    is_blank: Box<dyn Fn(&I) -> bool + Send>,
    transform: Box<dyn Fn(&I) -> Result<O, String> + Send>,
    outcome: Outcome<O>,
}

impl<I, O> Pipeline<I, O> {
    pub fn new(
        is_blank: impl Fn(&I) -> bool + Send + 'static,
        transform: impl Fn(&I) -> Result<O, String> + Send + 'static,
    ) -> Self {
        Pipeline {
            is_blank: Box::new(is_blank),
            transform: Box::new(transform),
            outcome: Outcome::Idle,
        }
    }

    /// Recompute from the current input, replacing the previous outcome
    /// in full.
    pub fn refresh(&mut self, input: &I) -> &Outcome<O> {
        self.outcome = if (self.is_blank)(input) {
            Outcome::Idle
        } else {
            match (self.transform)(input) {
                Ok(output) => Outcome::Success(output),
                Err(message) => Outcome::Failure(message),
            }
        };
        &self.outcome
    }

    /// The latest outcome, untouched since the last `refresh`/`reset`.
    pub fn outcome(&self) -> &Outcome<O> {
        &self.outcome
    }

    /// Forget the current outcome, as if the input were blank.
    pub fn reset(&mut self) {
        self.outcome = Outcome::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn uppercase_pipeline() -> Pipeline<String, String> {
        Pipeline::new(
            |input: &String| input.trim().is_empty(),
            |input: &String| {
                if input.contains('!') {
                    Err(String::from("no shouting"))
                } else {
                    Ok(input.to_uppercase())
                }
            },
        )
    }

    #[test]
    fn test_starts_idle() {
        let pipeline = uppercase_pipeline();
        assert!(pipeline.outcome().is_idle());
    }

    #[test]
    fn test_refresh_success() {
        let mut pipeline = uppercase_pipeline();
        pipeline.refresh(&String::from("hello"));
        assert_eq!(pipeline.outcome().success().map(String::as_str), Some("HELLO"));
    }

    #[test]
    fn test_refresh_failure_captures_message() {
        let mut pipeline = uppercase_pipeline();
        pipeline.refresh(&String::from("hey!"));
        assert_eq!(pipeline.outcome().failure(), Some("no shouting"));
    }

    #[test]
    fn test_blank_input_skips_transform() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let mut pipeline: Pipeline<String, String> = Pipeline::new(
            |input: &String| input.trim().is_empty(),
            move |input: &String| {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(input.clone())
            },
        );

        pipeline.refresh(&String::from("   "));
        assert!(pipeline.outcome().is_idle());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        pipeline.refresh(&String::from("x"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_outcome_replaced_wholesale() {
        let mut pipeline = uppercase_pipeline();

        pipeline.refresh(&String::from("first"));
        assert!(pipeline.outcome().is_success());

        // A failure must fully displace the earlier success
        pipeline.refresh(&String::from("bad!"));
        assert!(pipeline.outcome().is_failure());
        assert!(pipeline.outcome().success().is_none());

        // And going blank displaces the failure
        pipeline.refresh(&String::new());
        assert!(pipeline.outcome().is_idle());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut pipeline = uppercase_pipeline();
        pipeline.refresh(&String::from("hello"));
        pipeline.reset();
        assert!(pipeline.outcome().is_idle());
    }
}
