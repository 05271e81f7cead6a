//! Combinators for inspecting, transforming, and chaining outcomes.
//!
//! Callbacks run synchronously on the caller's stack. None of the
//! combinators catch a panic raised by their callback; only
//! [`try_catch`](crate::try_catch) captures.

use {
    crate::types::{Failure, Outcome, Settled, Success},
    std::any::Any,
    upshot_error::error::raise,
};

impl<T> Success<T> {
    /// Returns the value.
    pub fn get_or_throw(self) -> T {
        self.into_value()
    }

    pub fn if_success<U>(self, f: impl FnOnce(T) -> U) -> U {
        f(self.into_value())
    }

    /// Always `None`; `f` is never called.
    pub fn if_failure<A, U>(self, _f: impl FnOnce(A) -> U) -> Option<U> {
        None
    }

    /// Calls `f` with the value. `g` is never called.
    pub fn match_with<A, U>(self, f: impl FnOnce(T) -> U, _g: impl FnOnce(A) -> U) -> U {
        f(self.into_value())
    }

    pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Success<T2> {
        Success::new(f(self.into_value()))
    }

    /// Returns `self` unchanged; `f` is never called.
    pub fn map_error<A, E2>(self, _f: impl FnOnce(A) -> E2) -> Self {
        self
    }

    /// Hands the value to `f` and returns whatever `f` returns, untouched.
    ///
    /// A step that always succeeds keeps its [`Success`] type, a step that
    /// always fails keeps its [`Failure`] type, and a general step yields its
    /// [`Outcome`].
    pub fn flat_map<R: Settled>(self, f: impl FnOnce(T) -> R) -> R {
        f(self.into_value())
    }
}

// A failure has no value, so the value-side callbacks below are never called
// and their argument type is left to the caller.
impl<E> Failure<E> {
    /// Raises the error by unwinding. See [`raise`].
    pub fn get_or_throw(self) -> !
    where
        E: Any + Send,
    {
        raise(self.into_error())
    }

    /// Always `None`; `f` is never called.
    pub fn if_success<A, U>(self, _f: impl FnOnce(A) -> U) -> Option<U> {
        None
    }

    pub fn if_failure<U>(self, f: impl FnOnce(E) -> U) -> U {
        f(self.into_error())
    }

    /// Calls `g` with the error. `f` is never called.
    pub fn match_with<A, U>(self, _f: impl FnOnce(A) -> U, g: impl FnOnce(E) -> U) -> U {
        g(self.into_error())
    }

    /// Returns `self` unchanged; `f` is never called.
    pub fn map<A, T2>(self, _f: impl FnOnce(A) -> T2) -> Self {
        self
    }

    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Failure<E2> {
        Failure::new(f(self.into_error()))
    }

    /// Returns `self` unchanged; `f` is never called.
    pub fn flat_map<A, R: Settled>(self, _f: impl FnOnce(A) -> R) -> Self {
        self
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns the value of a success, or raises the error of a failure.
    ///
    /// This is the escape hatch back into unwinding: the error is raised
    /// as-is, and an error captured by `try_catch` is re-raised with its
    /// original payload.
    pub fn get_or_throw(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Outcome::Success(success) => success.get_or_throw(),
            Outcome::Failure(failure) => failure.get_or_throw(),
        }
    }

    /// Applies `f` to the value of a success. `None` on a failure.
    pub fn if_success<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Outcome::Success(success) => Some(success.if_success(f)),
            Outcome::Failure(_) => None,
        }
    }

    /// Applies `f` to the error of a failure. `None` on a success.
    pub fn if_failure<U>(self, f: impl FnOnce(E) -> U) -> Option<U> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.if_failure(f)),
        }
    }

    /// Eliminates the outcome: `f` runs on a success, `g` on a failure.
    /// Exactly one of them is called.
    pub fn match_with<U>(self, f: impl FnOnce(T) -> U, g: impl FnOnce(E) -> U) -> U {
        match self {
            Outcome::Success(success) => success.if_success(f),
            Outcome::Failure(failure) => failure.if_failure(g),
        }
    }

    /// Transforms the value of a success. A failure passes through as-is
    /// and `f` is not called.
    pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Outcome<T2, E> {
        match self {
            Outcome::Success(success) => Outcome::Success(success.map(f)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the error of a failure. A success passes through as-is
    /// and `f` is not called.
    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<T, E2> {
        match self {
            Outcome::Success(success) => Outcome::Success(success),
            Outcome::Failure(failure) => Outcome::Failure(failure.map_error(f)),
        }
    }

    /// Chains a dependent fallible step.
    ///
    /// On a success the step returned by `f` becomes the result, without
    /// re-wrapping its payload. `f` may return an [`Outcome`], a bare
    /// [`Success`] (the error channel stays `E`), or a [`Failure`] whose error
    /// converts into `E`. On a failure `f` is not called and the original
    /// failure passes through.
    pub fn flat_map<T2, R>(self, f: impl FnOnce(T) -> R) -> Outcome<T2, E>
    where
        R: Into<Outcome<T2, E>>,
    {
        match self {
            Outcome::Success(success) => f(success.into_value()).into(),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{cell::Cell, panic::catch_unwind},
    };

    #[test]
    fn test_concrete_success_keeps_its_type() {
        let success: Success<usize> = Success::new("four").map(str::len);
        assert_eq!(success.value(), &4);

        let chained: Success<usize> = success.flat_map(|n| Success::new(n * 2));
        assert_eq!(chained.get_or_throw(), 8);

        let failed: Failure<&str> = chained.flat_map(|_| Failure::new("stop"));
        assert_eq!(failed.error(), &"stop");
    }

    #[test]
    fn test_concrete_failure_keeps_its_type() {
        let failure: Failure<String> = Failure::new(3).map_error(|code| format!("code {}", code));
        assert_eq!(failure.error(), "code 3");
        assert_eq!(failure.if_failure(|e| e.len()), 6);
    }

    #[test]
    fn test_concrete_failure_get_or_throw() {
        let payload = catch_unwind(|| Failure::new(9i32).get_or_throw()).unwrap_err();
        assert_eq!(payload.downcast_ref::<i32>(), Some(&9));
    }

    #[test]
    fn test_map_error_skips_success() {
        let calls = Cell::new(0);
        let outcome = Outcome::<u8, u8>::success(1).map_error(|e| {
            calls.set(calls.get() + 1);
            e + 1
        });
        assert_eq!(outcome, Outcome::success(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_flat_map_short_circuits() {
        let calls = Cell::new(0);
        let outcome = Outcome::<u8, &str>::success(1)
            .flat_map(|_| Outcome::<u8, &str>::failure("first"))
            .flat_map(|v| {
                calls.set(calls.get() + 1);
                Outcome::success(v)
            });
        assert_eq!(outcome, Outcome::failure("first"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_success_error_side_is_inert() {
        let calls = Cell::new(0);
        let bump = |_e: &str| calls.set(calls.get() + 1);

        let success: Success<i32> = Success::new(1).map_error(|e: &str| bump(e));
        assert_eq!(success, Success::new(1));
        assert_eq!(success.if_failure(|e: &str| bump(e)), None);
        assert_eq!(success.match_with(|x| x + 1, |_e: &str| 0), 2);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_failure_value_side_is_inert() {
        let calls = Cell::new(0);
        let bump = |_x: i32| calls.set(calls.get() + 1);

        let failure: Failure<u8> = Failure::new(5).map(|x: i32| bump(x));
        assert_eq!(failure, Failure::new(5));
        let failure: Failure<u8> = failure.flat_map(|x: i32| {
            bump(x);
            Success::new(x)
        });
        assert_eq!(failure, Failure::new(5));
        assert_eq!(failure.if_success(|x: i32| bump(x)), None);
        assert_eq!(failure.match_with(|_x: i32| 0u8, |e| e * 2), 10);
        assert_eq!(calls.get(), 0);
    }
}
