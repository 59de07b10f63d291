//! Free constructors and conversions from [`Option`] into the crate's option types.
use crate::fallible::Fallible;
use crate::maybe::Maybe;

pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

pub const fn none<T>() -> Maybe<T> {
    Maybe::None
}

/// Adds conversions from a nullable [`Option`] to [`Maybe`] and [`Fallible`].
pub trait OptionExt {
    type Value;

    fn to_maybe(self) -> Maybe<Self::Value>;

    fn to_fallible<E>(self, reason: E) -> Fallible<Self::Value, E>;

    fn to_fallible_lazy<E, F>(self, reason_fn: F) -> Fallible<Self::Value, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt for Option<T> {
    type Value = T;

    fn to_maybe(self) -> Maybe<T> {
        Maybe::some_not_null(self)
    }

    fn to_fallible<E>(self, reason: E) -> Fallible<T, E> {
        Fallible::some_not_null(self, reason)
    }

    fn to_fallible_lazy<E, F>(self, reason_fn: F) -> Fallible<T, E>
    where
        F: FnOnce() -> E,
    {
        Fallible::some_not_null_lazy(self, reason_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_conversions() {
        assert_eq!(Some(1).to_maybe(), some(1));
        assert_eq!(None::<i32>.to_maybe(), none());
        assert_eq!(None::<i32>.to_fallible("missing"), Fallible::none("missing"));
        assert_eq!(Some(2).to_fallible_lazy(|| -> &'static str { panic!("factory ran") }), Fallible::some(2));

        let mut calls = 0;
        let reason = None::<i32>.to_fallible_lazy(|| {
            calls += 1;
            calls
        });
        assert_eq!(reason, Fallible::none(1));
        assert_eq!(calls, 1);
    }
}
