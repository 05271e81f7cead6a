//! Comparison of two outcomes.

use {
    crate::{
        config::{compare, Config},
        types::Outcome,
    },
    std::fmt::Debug,
};

/// An aspect of two outcomes to compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compare {
    /// Both are successes, or both are failures.
    Variant,
    /// Both hold the same value, or neither holds one.
    Value,
    /// Both hold the same error, or neither holds one.
    Error,
}

impl Compare {
    pub fn everything() -> Vec<Self> {
        vec![Compare::Variant, Compare::Value, Compare::Error]
    }
}

impl<T: PartialEq + Debug, E: PartialEq + Debug> Outcome<T, E> {
    /// Compare this outcome against `other`, treating `self` as the
    /// expectation.
    pub fn compare_with(&self, other: &Self, checks: &[Compare], config: &Config) -> bool {
        let c = config;
        let mut pass = true;
        for check in checks {
            match check {
                Compare::Variant => {
                    pass &= compare!(c, "variant", self.is_success(), other.is_success());
                }
                Compare::Value => {
                    pass &= compare!(c, "value", self.value(), other.value());
                }
                Compare::Error => {
                    pass &= compare!(c, "error", self.error(), other.error());
                }
            }
        }
        pass
    }
}
