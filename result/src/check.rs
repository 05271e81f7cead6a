//! Check system for validating individual outcomes.

use {
    crate::{
        config::{compare, throw, Config},
        types::Outcome,
    },
    std::fmt::Debug,
    upshot_error::error::UpshotError,
};

enum CheckType<'a, T, E> {
    /// Check that the outcome is a success.
    Success,
    /// Check that the outcome is a failure.
    Failure,
    /// Check the value held by a success.
    Value(&'a T),
    /// Check the error held by a failure.
    Error(&'a E),
}

pub struct Check<'a, T, E> {
    check: CheckType<'a, T, E>,
}

impl<'a, T, E> Check<'a, T, E> {
    fn new(check: CheckType<'a, T, E>) -> Self {
        Self { check }
    }

    /// Assert that the outcome is a success.
    pub fn success() -> Self {
        Check::new(CheckType::Success)
    }

    /// Assert that the outcome is a failure.
    pub fn failure() -> Self {
        Check::new(CheckType::Failure)
    }

    /// Assert that the outcome is a success holding `value`.
    pub fn value(value: &'a T) -> Self {
        Check::new(CheckType::Value(value))
    }

    /// Assert that the outcome is a failure holding `error`.
    pub fn error(error: &'a E) -> Self {
        Check::new(CheckType::Error(error))
    }
}

impl<T: PartialEq + Debug, E: PartialEq + Debug> Outcome<T, E> {
    /// Perform checks on the outcome. Every check runs; the return is `true`
    /// only if all of them passed.
    ///
    /// Outcomes from `try_catch` carry an opaque error; map it to something
    /// comparable (for instance its message) before checking.
    pub fn run_checks(&self, checks: &[Check<T, E>], config: &Config) -> bool {
        let c = config;
        let mut pass = true;
        for check in checks {
            match &check.check {
                CheckType::Success => {
                    pass &= compare!(c, "is_success", true, self.is_success());
                }
                CheckType::Failure => {
                    pass &= compare!(c, "is_failure", true, self.is_failure());
                }
                CheckType::Value(value) => {
                    let Some(actual_value) = self.value() else {
                        pass &= throw!(c, UpshotError::NoValue("value"));
                        continue;
                    };
                    pass &= compare!(c, "value", *value, actual_value);
                }
                CheckType::Error(error) => {
                    let Some(actual_error) = self.error() else {
                        pass &= throw!(c, UpshotError::NoError("error"));
                        continue;
                    };
                    pass &= compare!(c, "error", *error, actual_error);
                }
            }
        }
        pass
    }
}
