//! Entry points for building outcomes.

use {
    crate::types::{Failure, Outcome, Success},
    std::panic::AssertUnwindSafe,
    upshot_error::error::Caught,
};

/// Wraps a known-good value.
pub fn success<T>(value: T) -> Success<T> {
    Success::new(value)
}

/// Wraps a known error.
pub fn failure<E>(error: E) -> Failure<E> {
    Failure::new(error)
}

/// Runs `f`, turning a normal return into a success and any panic into a
/// failure holding the panic payload.
///
/// Every payload is captured, whatever its type. State that `f` mutated
/// before unwinding is left as it was at the point of the panic. Nothing
/// can be captured in a build using `panic = "abort"`.
///
/// The process panic hook still runs before the payload is captured, so the
/// default hook prints its `thread '..' panicked at ..` line to stderr. The
/// hook is global state and is left alone; install a quiet one with
/// [`std::panic::set_hook`] where that output is unwanted.
pub fn try_catch<T>(f: impl FnOnce() -> T) -> Outcome<T, Caught> {
    Caught::capture(AssertUnwindSafe(f)).into()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{
            cell::Cell,
            panic::{panic_any, set_hook, take_hook},
        },
    };

    #[test]
    fn test_try_catch_keeps_payload_type() {
        #[derive(Debug, PartialEq)]
        struct Timeout {
            millis: u64,
        }

        let outcome = try_catch(|| -> u8 { panic_any(Timeout { millis: 250 }) });
        let caught = outcome.into_error().unwrap();
        assert_eq!(
            caught.downcast_ref::<Timeout>(),
            Some(&Timeout { millis: 250 })
        );
    }

    #[test]
    fn test_try_catch_leaves_mutations_visible() {
        let mut steps = vec![];
        let outcome = try_catch(|| {
            steps.push("started");
            if steps.len() == 1 {
                panic!("halfway");
            }
            steps.push("finished");
        });
        assert!(outcome.is_failure());
        assert_eq!(steps, vec!["started"]);
    }

    #[test]
    fn test_try_catch_leaves_panic_hook_in_place() {
        thread_local! {
            static HOOK_CALLS: Cell<u32> = const { Cell::new(0) };
        }

        let previous = take_hook();
        set_hook(Box::new(move |info| {
            HOOK_CALLS.with(|calls| calls.set(calls.get() + 1));
            previous(info);
        }));

        let outcome = try_catch(|| -> u8 { panic!("noisy") });
        assert!(outcome.is_failure());
        assert_eq!(HOOK_CALLS.with(Cell::get), 1);
    }
}
