//! Escape hatches that turn an absent value back into a failure.
//!
//! Nothing here is in scope until [`Unchecked`] is imported.
use crate::error::ValueMissing;
use crate::fallible::Fallible;
use crate::maybe::Maybe;

pub trait Unchecked: Sized {
    type Value;
    /// What the message factory of [`Unchecked::value_or_failure_lazy`] receives.
    type Reason;

    fn to_nullable(self) -> Option<Self::Value>;

    fn value_or_failure_lazy<F, S>(self, message_fn: F) -> Result<Self::Value, ValueMissing>
    where
        F: FnOnce(Self::Reason) -> S,
        S: Into<String>;

    fn value_or_failure(self) -> Result<Self::Value, ValueMissing> {
        self.value_or_failure_lazy(|_| ValueMissing::DEFAULT_MESSAGE)
    }

    fn value_or_failure_with<S: Into<String>>(self, message: S) -> Result<Self::Value, ValueMissing> {
        self.value_or_failure_lazy(|_| message)
    }

    /// Loses the distinction between an absent value and a present default.
    fn value_or_default(self) -> Self::Value
    where
        Self::Value: Default,
    {
        self.to_nullable().unwrap_or_default()
    }

    #[track_caller]
    fn unwrap(self) -> Self::Value {
        match self.value_or_failure() {
            Ok(value) => value,
            Err(missing) => unwrap_failed(missing.message()),
        }
    }

    #[track_caller]
    fn expect(self, message: &str) -> Self::Value {
        match self.to_nullable() {
            Some(value) => value,
            None => unwrap_failed(message),
        }
    }
}

impl<T> Unchecked for Maybe<T> {
    type Value = T;
    type Reason = ();

    fn to_nullable(self) -> Option<T> {
        self.into()
    }

    fn value_or_failure_lazy<F, S>(self, message_fn: F) -> Result<T, ValueMissing>
    where
        F: FnOnce(()) -> S,
        S: Into<String>,
    {
        match self {
            Maybe::Some(t) => Ok(t),
            Maybe::None => Err(ValueMissing::new(message_fn(()))),
        }
    }
}

impl<T, E> Unchecked for Fallible<T, E> {
    type Value = T;
    type Reason = E;

    fn to_nullable(self) -> Option<T> {
        self.without_exception().into()
    }

    fn value_or_failure_lazy<F, S>(self, message_fn: F) -> Result<T, ValueMissing>
    where
        F: FnOnce(E) -> S,
        S: Into<String>,
    {
        match self {
            Fallible::Some(t) => Ok(t),
            Fallible::None(e) => Err(ValueMissing::new(message_fn(e))),
        }
    }
}

#[cold]
#[track_caller]
#[inline(never)]
fn unwrap_failed(message: &str) -> ! {
    panic!("unwrap failed: {}", message);
}
