// src/domain/outcome/outcome.rs
use super::error::Error;
use serde::{Serialize, Serializer, ser::SerializeStruct};

const VALUE_ON_FAILURE: &str = "value cannot be accessed on a failed outcome";

/// Result of an operation whose expected failures are values, not panics.
///
/// `Outcome<()>` covers operations with nothing to hand back; any other `T`
/// carries a payload on success. The state is decided by the variant used to
/// build it and never changes afterwards.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

/// Outcome of an operation that produces no payload.
pub type UnitOutcome = Outcome<()>;

impl Outcome<()> {
    pub fn completed() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The error, present exactly when the outcome failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Borrows the payload.
    ///
    /// # Panics
    ///
    /// Panics when the outcome failed. Reading the value without checking
    /// `is_success` first (or going through [`Outcome::match_with`]) is a bug
    /// in the caller, not a domain failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(err) => panic!("{VALUE_ON_FAILURE} ({})", err.code()),
        }
    }

    /// Takes the payload out.
    ///
    /// # Panics
    ///
    /// Same contract as [`Outcome::value`].
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(err) => panic!("{VALUE_ON_FAILURE} ({})", err.code()),
        }
    }

    /// Runs exactly one of the two branches and returns what it produced.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Error) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(err) => on_failure(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        self.into()
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(err: Error) -> Self {
        Self::Failure(err)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

/// Wraps a bare value as a successful outcome.
///
/// A blanket `From<T>` would overlap with `From<Error>`, so the success side
/// of the conversion lives here instead.
///
/// # Note
///
/// This covers [`Error`] too: `err.succeed()` is a *successful*
/// `Outcome<Error>`. To report a failure use `Outcome::from(err)` or
/// `err.into()`.
pub trait Succeed: Sized {
    fn succeed(self) -> Outcome<Self> {
        Outcome::Success(self)
    }
}

impl<T> Succeed for T {}

// Success is the bare payload; failure is `{"error": {code, description}}`.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(value) => value.serialize(serializer),
            Self::Failure(err) => {
                let mut state = serializer.serialize_struct("Outcome", 1)?;
                state.serialize_field("error", err)?;
                state.end()
            }
        }
    }
}
