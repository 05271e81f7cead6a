//! Captured payloads, the raise primitive, and check diagnostics.

use {
    std::{
        any::Any,
        fmt,
        panic::{self, UnwindSafe},
    },
    thiserror::Error,
};

/// An opaque error captured from an unwinding computation.
///
/// The payload is whatever value the computation panicked with. Nothing is
/// filtered or converted: `panic!("boom")` yields a `&'static str` payload,
/// `panic!("{}", x)` a `String`, and `std::panic::panic_any(v)` the value `v`
/// itself.
#[derive(Error)]
#[error("{}", payload_message(.payload).unwrap_or("opaque panic payload"))]
pub struct Caught {
    payload: Box<dyn Any + Send>,
}

impl Caught {
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Runs `f`, capturing the payload if it unwinds.
    pub fn capture<T, F>(f: F) -> Result<T, Self>
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        panic::catch_unwind(f).map_err(|payload| {
            let caught = Self::new(payload);
            log::debug!("captured unwinding payload: {:?}", caught);
            caught
        })
    }

    /// The panic message, when the payload is a `&str` or a `String`.
    pub fn message(&self) -> Option<&str> {
        payload_message(&self.payload)
    }

    pub fn is<X: Any>(&self) -> bool {
        self.payload.is::<X>()
    }

    pub fn downcast_ref<X: Any>(&self) -> Option<&X> {
        self.payload.downcast_ref::<X>()
    }

    /// Takes the payload out as `X`, handing back `self` untouched on a
    /// type mismatch.
    pub fn downcast<X: Any>(self) -> Result<X, Self> {
        self.payload
            .downcast::<X>()
            .map(|boxed| *boxed)
            .map_err(Self::new)
    }

    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Unwinds again with the original payload.
    pub fn resume(self) -> ! {
        log::trace!("resuming captured payload: {:?}", self);
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Caught").field(&message).finish(),
            None => f.write_str("Caught(<opaque>)"),
        }
    }
}

impl From<Caught> for Box<dyn Any + Send> {
    fn from(caught: Caught) -> Self {
        caught.into_payload()
    }
}

#[allow(clippy::borrowed_box)]
fn payload_message(payload: &Box<dyn Any + Send>) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(message)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

/// Raises `error` by unwinding the current thread.
///
/// A [`Caught`] is resumed with the payload it originally captured, so a
/// value that went through `try_catch` comes back out exactly as it was
/// raised. Any other value becomes the panic payload itself.
pub fn raise<E: Any + Send>(error: E) -> ! {
    let payload: Box<dyn Any + Send> = Box::new(error);
    match payload.downcast::<Caught>() {
        Ok(caught) => caught.resume(),
        Err(payload) => {
            log::trace!("raising failure payload");
            panic::resume_unwind(payload)
        }
    }
}

/// Diagnostics reported by outcome checks.
#[derive(Debug, Error)]
pub enum UpshotError<'a> {
    #[error("    [UPSHOT]: CHECK {check}: expected {expected}, got {actual}")]
    Mismatch {
        check: &'a str,
        expected: String,
        actual: String,
    },
    #[error("    [UPSHOT]: CHECK {0}: outcome is a failure and holds no value")]
    NoValue(&'a str),
    #[error("    [UPSHOT]: CHECK {0}: outcome is a success and holds no error")]
    NoError(&'a str),
}
