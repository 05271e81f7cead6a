//! Core outcome types.

use {std::convert::Infallible, upshot_error::error::Caught};

/// A successful outcome. Holds a value and has no error slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Success<T>(T);

/// A failed outcome. Holds an error and has no value slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Failure<E>(E);

/// Either a [`Success`] or a [`Failure`], never both.
///
/// The error channel defaults to [`Caught`], the opaque payload produced by
/// [`try_catch`](crate::try_catch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = Caught> {
    /// The computation produced a value.
    Success(Success<T>),
    /// The computation produced an error.
    Failure(Failure<E>),
}

mod sealed {
    pub trait Sealed {}
}

/// The shapes a fallible step may return: [`Success`], [`Failure`], or
/// [`Outcome`].
pub trait Settled: sealed::Sealed {}

impl<T> sealed::Sealed for Success<T> {}
impl<E> sealed::Sealed for Failure<E> {}
impl<T, E> sealed::Sealed for Outcome<T, E> {}

impl<T> Settled for Success<T> {}
impl<E> Settled for Failure<E> {}
impl<T, E> Settled for Outcome<T, E> {}

impl<T> Success<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> &T {
        &self.0
    }

    pub fn into_value(self) -> T {
        self.0
    }

    /// Always `None`: a success has no error.
    pub const fn error(&self) -> Option<&Infallible> {
        None
    }

    pub const fn is_success(&self) -> bool {
        true
    }

    pub const fn is_failure(&self) -> bool {
        false
    }

    /// Widens this success into an [`Outcome`] with any error type.
    pub fn into_outcome<E>(self) -> Outcome<T, E> {
        Outcome::Success(self)
    }
}

impl<E> Failure<E> {
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    pub const fn error(&self) -> &E {
        &self.0
    }

    pub fn into_error(self) -> E {
        self.0
    }

    /// Always `None`: a failure has no value.
    pub const fn value(&self) -> Option<&Infallible> {
        None
    }

    pub const fn is_success(&self) -> bool {
        false
    }

    pub const fn is_failure(&self) -> bool {
        true
    }

    /// Widens this failure into an [`Outcome`] with any value type.
    pub fn into_outcome<T>(self) -> Outcome<T, E> {
        Outcome::Failure(self)
    }
}

impl<T, E> Outcome<T, E> {
    /// Builds a successful outcome directly.
    pub const fn success(value: T) -> Self {
        Outcome::Success(Success::new(value))
    }

    /// Builds a failed outcome directly.
    pub const fn failure(error: E) -> Self {
        Outcome::Failure(Failure::new(error))
    }

    /// Returns `true` if the outcome is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is a failure.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value, or `None` on a failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(success) => Some(success.value()),
            Outcome::Failure(_) => None,
        }
    }

    /// The error, or `None` on a success.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.error()),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(success) => Some(success.into_value()),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.into_error()),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(success) => Outcome::success(success.value()),
            Outcome::Failure(failure) => Outcome::failure(failure.error()),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(success) => Ok(success.into_value()),
            Outcome::Failure(failure) => Err(failure.into_error()),
        }
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    fn from(success: Success<T>) -> Self {
        success.into_outcome()
    }
}

/// A failure whose error converts into `E` folds into the `E` channel.
impl<T, E, E2: Into<E>> From<Failure<E2>> for Outcome<T, E> {
    fn from(failure: Failure<E2>) -> Self {
        Outcome::failure(failure.into_error().into())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
