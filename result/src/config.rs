//! Configuration for outcome checks.

/// How a failed check is reported.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panic on the first failed check.
    pub panic: bool,
    /// Log failed checks at `error` level when not panicking.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panic: true,
            verbose: false,
        }
    }
}

/// Reports a failed check and evaluates to `false`.
macro_rules! throw {
    ($c:expr, $err:expr $(,)?) => {{
        let err = $err;
        if $c.panic {
            panic!("{}", err);
        }
        if $c.verbose {
            log::error!("{}", err);
        }
        false
    }};
}

/// Compares `expected` against `actual`, reporting a mismatch through
/// `throw!`.
macro_rules! compare {
    ($c:expr, $check:expr, $expected:expr, $actual:expr $(,)?) => {{
        let expected = $expected;
        let actual = $actual;
        if expected == actual {
            true
        } else {
            $crate::config::throw!(
                $c,
                upshot_error::error::UpshotError::Mismatch {
                    check: $check,
                    expected: format!("{:?}", expected),
                    actual: format!("{:?}", actual),
                },
            )
        }
    }};
}

pub(crate) use {compare, throw};
