//! ```ignore
//! Fallible<T, E>
//!
//! value_or(T)                 -> T ?Drops E
//! value_or_lazy(|| T)         -> T ?Drops E
//! value_or_else(|E| T)        -> T
//!
//! or(T) / or_lazy(|| T) / or_else(|E| T)                    -> Fallible<T, E>
//! otherwise(Fallible) / otherwise_lazy(|| ..) / otherwise_else(|E| ..) -> Fallible<T, E>
//!
//! map(|T| U)                  -> Fallible<U, E>
//! map_exception(|E| F)        -> Fallible<T, F>
//! flat_map(|T| Fallible<U, E>) -> Fallible<U, E>
//! flat_map_maybe(|T| Maybe<U>, E) / flat_map_maybe_lazy(.., || E) -> Fallible<U, E>
//!
//! filter(|&T| bool, E) / filter_lazy(.., || E)              -> Fallible<T, E>
//! filter_when(bool, E) / filter_when_lazy(bool, || E)       -> Fallible<T, E>
//! where T = Option<U>
//! not_null(E) / not_null_lazy(|| E)                         -> Fallible<U, E>
//!
//! without_exception()         -> Maybe<T> Drops E
//! where T = E
//! value_or_exception()        -> T
//! where T = Fallible<U, E>
//! flatten()                   -> Fallible<U, E>
//! ```
use crate::maybe::{Maybe, NONE_HASH};
use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::option;
use core::result::Result;

/// A value that is either present ([`Fallible::Some`]) or absent with a
/// reason ([`Fallible::None`]).
#[derive(Copy, Clone, Eq, Debug)]
#[must_use]
pub enum Fallible<T, E> {
    Some(T),
    None(E),
}

impl<T, E> Fallible<T, E> {
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub const fn none(reason: E) -> Self {
        Self::None(reason)
    }

    pub fn some_when<P>(value: T, predicate: P, reason: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) { Self::Some(value) } else { Self::None(reason) }
    }

    pub fn some_when_lazy<P, F>(value: T, predicate: P, reason_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        if predicate(&value) { Self::Some(value) } else { Self::None(reason_fn()) }
    }

    pub fn none_when<P>(value: T, predicate: P, reason: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) { Self::None(reason) } else { Self::Some(value) }
    }

    pub fn none_when_lazy<P, F>(value: T, predicate: P, reason_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        if predicate(&value) { Self::None(reason_fn()) } else { Self::Some(value) }
    }

    pub fn some_not_null(value: Option<T>, reason: E) -> Self {
        match value {
            Some(t) => Self::Some(t),
            None => Self::None(reason),
        }
    }

    pub fn some_not_null_lazy<F>(value: Option<T>, reason_fn: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(t) => Self::Some(t),
            None => Self::None(reason_fn()),
        }
    }

    pub const fn is_some(&self) -> bool {
        matches!(*self, Self::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_ref(&self) -> Fallible<&T, &E> {
        match *self {
            Self::Some(ref t) => Fallible::Some(t),
            Self::None(ref e) => Fallible::None(e),
        }
    }

    pub fn value_or(self, alternative: T) -> T {
        match self {
            Self::Some(t) => t,
            Self::None(_) => alternative,
        }
    }

    pub fn value_or_lazy<F>(self, alternative_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(t) => t,
            Self::None(_) => alternative_fn(),
        }
    }

    /// Computes the fallback from the absence reason.
    pub fn value_or_else<F>(self, alternative_fn: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Some(t) => t,
            Self::None(e) => alternative_fn(e),
        }
    }

    pub fn contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Some(t) => t == candidate,
            Self::None(_) => false,
        }
    }

    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(t) => predicate(t),
            Self::None(_) => false,
        }
    }

    pub fn or(self, alternative: T) -> Self {
        match self {
            x @ Self::Some(_) => x,
            Self::None(_) => Self::Some(alternative),
        }
    }

    pub fn or_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            x @ Self::Some(_) => x,
            Self::None(_) => Self::Some(alternative_fn()),
        }
    }

    pub fn or_else<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            x @ Self::Some(_) => x,
            Self::None(e) => Self::Some(alternative_fn(e)),
        }
    }

    pub fn otherwise(self, alternative: Self) -> Self {
        match self {
            x @ Self::Some(_) => x,
            Self::None(_) => alternative,
        }
    }

    pub fn otherwise_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            x @ Self::Some(_) => x,
            Self::None(_) => alternative_fn(),
        }
    }

    pub fn otherwise_else<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            x @ Self::Some(_) => x,
            Self::None(e) => alternative_fn(e),
        }
    }

    pub fn map<U, F>(self, mapping: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(t) => Fallible::Some(mapping(t)),
            Self::None(e) => Fallible::None(e),
        }
    }

    pub fn map_exception<G, F>(self, mapping: F) -> Fallible<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Some(t) => Fallible::Some(t),
            Self::None(e) => Fallible::None(mapping(e)),
        }
    }

    /// Chains into another `Fallible`; an absent receiver keeps its own reason.
    pub fn flat_map<U, F>(self, mapping: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        match self {
            Self::Some(t) => mapping(t),
            Self::None(e) => Fallible::None(e),
        }
    }

    /// Chains into a [`Maybe`], attaching `reason` if the chained result is absent.
    pub fn flat_map_maybe<U, F>(self, mapping: F, reason: E) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(|t| mapping(t).with_exception(reason))
    }

    pub fn flat_map_maybe_lazy<U, F, R>(self, mapping: F, reason_fn: R) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Maybe<U>,
        R: FnOnce() -> E,
    {
        self.flat_map(|t| mapping(t).with_exception_lazy(reason_fn))
    }

    pub fn filter<P>(self, predicate: P, reason: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter_lazy(predicate, || reason)
    }

    pub fn filter_lazy<P, F>(self, predicate: P, reason_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(t) => {
                if predicate(&t) {
                    Self::Some(t)
                } else {
                    Self::None(reason_fn())
                }
            }
            x @ Self::None(_) => x,
        }
    }

    pub fn filter_when(self, condition: bool, reason: E) -> Self {
        self.filter_when_lazy(condition, || reason)
    }

    pub fn filter_when_lazy<F>(self, condition: bool, reason_fn: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match self {
            x @ Self::Some(_) if condition => x,
            Self::Some(_) => Self::None(reason_fn()),
            x @ Self::None(_) => x,
        }
    }

    pub fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce(E) -> U,
    {
        match self {
            Self::Some(t) => some(t),
            Self::None(e) => none(e),
        }
    }

    pub fn match_some<F>(self, some: F)
    where
        F: FnOnce(T),
    {
        if let Self::Some(t) = self {
            some(t);
        }
    }

    pub fn match_none<F>(self, none: F)
    where
        F: FnOnce(E),
    {
        if let Self::None(e) = self {
            none(e);
        }
    }

    /// Forgets the absence reason.
    pub fn without_exception(self) -> Maybe<T> {
        match self {
            Self::Some(t) => Maybe::Some(t),
            Self::None(_) => Maybe::None,
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Some(t) => Result::Ok(t),
            Self::None(e) => Result::Err(e),
        }
    }

    pub fn iter(&self) -> option::IntoIter<&T> {
        self.as_ref().without_exception().into_iter()
    }
}

impl<T, E> Fallible<Option<T>, E> {
    pub fn not_null(self, reason: E) -> Fallible<T, E> {
        self.not_null_lazy(|| reason)
    }

    pub fn not_null_lazy<F>(self, reason_fn: F) -> Fallible<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(Some(t)) => Fallible::Some(t),
            Self::Some(None) => Fallible::None(reason_fn()),
            Self::None(e) => Fallible::None(e),
        }
    }
}

impl<T> Fallible<T, T> {
    /// Returns the payload, or the reason itself when absent.
    pub fn value_or_exception(self) -> T {
        match self {
            Self::Some(t) | Self::None(t) => t,
        }
    }
}

impl<T, E> Fallible<Fallible<T, E>, E> {
    pub fn flatten(self) -> Fallible<T, E> {
        match self {
            Self::Some(inner) => inner,
            Self::None(e) => Fallible::None(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(t) => Self::Some(t),
            Result::Err(e) => Self::None(e),
        }
    }
}

impl<T, E> From<Fallible<T, E>> for Result<T, E> {
    fn from(value: Fallible<T, E>) -> Self {
        value.into_result()
    }
}

impl<T, E> IntoIterator for Fallible<T, E> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.without_exception().into_iter()
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Fallible<T, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(l), Self::Some(r)) => *l == *r,
            (Self::None(l), Self::None(r)) => *l == *r,
            (Self::Some(_), Self::None(_)) | (Self::None(_), Self::Some(_)) => false,
        }
    }
}

impl<T: PartialOrd, E: PartialOrd> PartialOrd for Fallible<T, E> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        match (self, other) {
            (Self::Some(l), Self::Some(r)) => l.partial_cmp(r),
            (Self::None(l), Self::None(r)) => l.partial_cmp(r),
            (Self::Some(_), Self::None(_)) => Some(cmp::Ordering::Greater),
            (Self::None(_), Self::Some(_)) => Some(cmp::Ordering::Less),
        }
    }
}

impl<T: Ord, E: Ord> Ord for Fallible<T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        match (self, other) {
            (Self::Some(l), Self::Some(r)) => l.cmp(r),
            (Self::None(l), Self::None(r)) => l.cmp(r),
            (Self::Some(_), Self::None(_)) => cmp::Ordering::Greater,
            (Self::None(_), Self::Some(_)) => cmp::Ordering::Less,
        }
    }
}

impl<T: Hash, E: Hash> Hash for Fallible<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Some(t) => t.hash(state),
            Self::None(e) => {
                state.write_u64(NONE_HASH);
                e.hash(state);
            }
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Fallible<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(t) => write!(f, "Some({t})"),
            Self::None(e) => write!(f, "None({e})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn value_or_round_trip() {
        assert_eq!(Fallible::<_, &str>::some(1).value_or(2), 1);
        assert_eq!(Fallible::<i32, _>::none("e").value_or(2), 2);
        assert_eq!(Fallible::<i32, &str>::none("abc").value_or_else(|e| e.len() as i32), 3);
        assert_eq!(Fallible::<_, &str>::some(1).value_or_else(|_| panic!("factory ran")), 1);
    }

    #[test]
    fn equality_depends_on_reason() {
        assert_eq!(Fallible::<i32, _>::none("a"), Fallible::none("a"));
        assert_ne!(Fallible::<i32, _>::none("a"), Fallible::none("b"));
        assert_ne!(Fallible::some(1), Fallible::none(1));
        assert_eq!(Fallible::<_, ()>::some(1), Fallible::some(1));
        assert_eq!(hash_of(&Fallible::<i32, _>::none("a")), hash_of(&Fallible::<i32, _>::none("a")));
        assert_eq!(hash_of(&Fallible::<_, &str>::some(9)), hash_of(&9));
    }

    #[test]
    fn ordering() {
        assert!(Fallible::<i32, i32>::none(100) < Fallible::some(-100));
        assert!(Fallible::<i32, i32>::none(1) < Fallible::none(2));
        assert!(Fallible::<i32, i32>::some(1) < Fallible::some(2));
    }

    #[test]
    fn display() {
        assert_eq!(Fallible::<_, &str>::some(1).to_string(), "Some(1)");
        assert_eq!(Fallible::<i32, _>::none("boom").to_string(), "None(boom)");
    }

    #[test]
    fn flat_map_keeps_original_reason() {
        let chained = Fallible::<i32, &str>::none("first").flat_map(|_| -> Fallible<i32, &str> { panic!("mapping ran") });
        assert_eq!(chained, Fallible::none("first"));
        assert_eq!(
            Fallible::<i32, &str>::some(1).flat_map(|_| Fallible::<i32, _>::none("second")),
            Fallible::none("second")
        );
        assert_eq!(Fallible::<_, &str>::some(2).flat_map(|x| Fallible::some(x + 1)), Fallible::some(3));
    }

    #[test]
    fn flat_map_maybe_attaches_reason() {
        assert_eq!(
            Fallible::<i32, &str>::some(1).flat_map_maybe(|_| Maybe::<i32>::none(), "empty"),
            Fallible::none("empty")
        );
        assert_eq!(
            Fallible::<i32, &str>::none("orig").flat_map_maybe_lazy(|x| Maybe::some(x), || panic!("factory ran")),
            Fallible::none("orig")
        );
        assert_eq!(
            Fallible::<i32, &str>::some(1).flat_map_maybe_lazy(|x| Maybe::some(x * 5), || panic!("factory ran")),
            Fallible::some(5)
        );
    }

    #[test]
    fn filter_replaces_or_preserves_reason() {
        let positive = |x: &i32| *x > 0;
        assert_eq!(Fallible::some(-1).filter(positive, "negative"), Fallible::none("negative"));
        assert_eq!(Fallible::some(1).filter(positive, "negative"), Fallible::some(1));
        assert_eq!(Fallible::<i32, _>::none("orig").filter(positive, "negative"), Fallible::none("orig"));
        assert_eq!(
            Fallible::some(1).filter(positive, "negative").filter(positive, "negative"),
            Fallible::some(1).filter(positive, "negative")
        );
        assert_eq!(Fallible::<_, &str>::some(1).filter_when(false, "off"), Fallible::none("off"));
        assert_eq!(
            Fallible::<_, &str>::some(1).filter_when_lazy(true, || panic!("factory ran")),
            Fallible::some(1)
        );
    }

    #[test]
    fn not_null_and_conversions() {
        assert_eq!(Fallible::<Option<i32>, _>::some(None).not_null("null"), Fallible::none("null"));
        assert_eq!(Fallible::<_, &str>::some(Some(3)).not_null("null"), Fallible::some(3));
        assert_eq!(Fallible::<Option<i32>, _>::none("orig").not_null("null"), Fallible::none("orig"));

        assert_eq!(Fallible::<i32, _>::none("e").without_exception(), Maybe::none());
        assert_eq!(Fallible::<_, &str>::some(1).without_exception(), Maybe::some(1));
        assert_eq!(Fallible::<String, String>::none("fallback".into()).value_or_exception(), "fallback");
        assert_eq!(Fallible::<i32, _>::none(7).map_exception(|e| e * 2), Fallible::none(14));
        assert_eq!(Fallible::from(Result::<i32, &str>::Err("e")), Fallible::none("e"));
    }

    #[test]
    fn fallbacks_use_reason() {
        assert_eq!(Fallible::<usize, &str>::none("four").or_else(str::len), Fallible::some(4));
        assert_eq!(
            Fallible::<i32, i32>::none(1).otherwise_else(|e| Fallible::none(e + 1)),
            Fallible::none(2)
        );
        assert_eq!(Fallible::<i32, &str>::none("a").otherwise(Fallible::some(1)), Fallible::some(1));
        assert_eq!(Fallible::<i32, &str>::some(0).or_lazy(|| panic!("factory ran")), Fallible::some(0));
    }

    #[test]
    fn flatten_and_match() {
        assert_eq!(Fallible::<Fallible<i32, &str>, &str>::some(Fallible::none("inner")).flatten(), Fallible::none("inner"));
        assert_eq!(Fallible::<Fallible<i32, &str>, &str>::none("outer").flatten(), Fallible::none("outer"));
        assert_eq!(Fallible::<i32, &str>::none("abc").match_with(|x| x as usize, str::len), 3);

        let mut reason = "";
        Fallible::<i32, &str>::none("why").match_none(|e| reason = e);
        Fallible::<i32, &str>::some(1).match_none(|_| panic!("none branch ran"));
        assert_eq!(reason, "why");
    }

    #[test]
    fn creation_helpers() {
        assert_eq!(Fallible::some_when(5, |x| *x > 3, "small"), Fallible::some(5));
        assert_eq!(Fallible::some_when(1, |x| *x > 3, "small"), Fallible::none("small"));
        assert_eq!(Fallible::none_when(5, |x| *x > 3, "big"), Fallible::none("big"));
        assert_eq!(Fallible::some_when_lazy(5, |x| *x > 3, || -> &'static str { panic!("factory ran") }), Fallible::some(5));
        assert_eq!(Fallible::<i32, _>::some_not_null(None, "null"), Fallible::none("null"));
    }
}
