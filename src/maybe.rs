use crate::fallible::Fallible;
use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::option;

/// Written by [`Maybe::None`] when hashing, so that an absent value hashes
/// differently from most present payloads.
pub(crate) const NONE_HASH: u64 = 0x6e6f_6e65;

/// A value that is either present ([`Maybe::Some`]) or absent ([`Maybe::None`]).
///
/// Every combinator consumes `self` and produces a new `Maybe`; closures
/// passed to a combinator are only ever called on the branch that needs them.
#[derive(Copy, Clone, Eq, Debug)]
#[must_use]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps `value` only if `predicate` holds for it.
    pub fn some_when<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) { Self::Some(value) } else { Self::None }
    }

    /// Wraps `value` only if `predicate` does not hold for it.
    pub fn none_when<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) { Self::None } else { Self::Some(value) }
    }

    /// Wraps a nullable value, treating [`Option::None`] as absent.
    pub fn some_not_null(value: Option<T>) -> Self {
        match value {
            Some(t) => Self::Some(t),
            None => Self::None,
        }
    }

    pub const fn is_some(&self) -> bool {
        matches!(*self, Self::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match *self {
            Self::Some(ref t) => Maybe::Some(t),
            Self::None => Maybe::None,
        }
    }

    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match *self {
            Self::Some(ref mut t) => Maybe::Some(t),
            Self::None => Maybe::None,
        }
    }

    pub fn value_or(self, alternative: T) -> T {
        match self {
            Self::Some(t) => t,
            Self::None => alternative,
        }
    }

    pub fn value_or_lazy<F>(self, alternative_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(t) => t,
            Self::None => alternative_fn(),
        }
    }

    pub fn contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Some(t) => t == candidate,
            Self::None => false,
        }
    }

    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(t) => predicate(t),
            Self::None => false,
        }
    }

    /// Replaces an absent value with `alternative`.
    pub fn or(self, alternative: T) -> Self {
        match self {
            x @ Self::Some(_) => x,
            Self::None => Self::Some(alternative),
        }
    }

    pub fn or_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            x @ Self::Some(_) => x,
            Self::None => Self::Some(alternative_fn()),
        }
    }

    /// Replaces an absent value with another `Maybe`, which may itself be absent.
    pub fn otherwise(self, alternative: Self) -> Self {
        match self {
            x @ Self::Some(_) => x,
            Self::None => alternative,
        }
    }

    pub fn otherwise_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            x @ Self::Some(_) => x,
            Self::None => alternative_fn(),
        }
    }

    pub fn map<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(t) => Maybe::Some(mapping(t)),
            Self::None => Maybe::None,
        }
    }

    pub fn flat_map<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(t) => mapping(t),
            Self::None => Maybe::None,
        }
    }

    /// Like [`Maybe::flat_map`], but chains into a [`Fallible`] and forgets its reason.
    pub fn flat_map_fallible<U, E, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        self.flat_map(|t| mapping(t).without_exception())
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(t) = self {
            if predicate(&t) {
                return Self::Some(t);
            }
        }
        Self::None
    }

    pub fn filter_when(self, condition: bool) -> Self {
        if condition { self } else { Self::None }
    }

    /// Calls exactly one of the two branches and returns its result.
    pub fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(t) => some(t),
            Self::None => none(),
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
        F: FnOnce(),
    {
        if let Self::None = self {
            none();
        }
    }

    /// Attaches `reason` to an absent value. The reason is dropped when present.
    pub fn with_exception<E>(self, reason: E) -> Fallible<T, E> {
        match self {
            Self::Some(t) => Fallible::Some(t),
            Self::None => Fallible::None(reason),
        }
    }

    pub fn with_exception_lazy<E, F>(self, reason_fn: F) -> Fallible<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(t) => Fallible::Some(t),
            Self::None => Fallible::None(reason_fn()),
        }
    }

    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (a @ Self::Some(_), Self::None) => a,
            (Self::None, b @ Self::Some(_)) => b,
            _ => Self::None,
        }
    }

    pub fn iter(&self) -> option::IntoIter<&T> {
        Option::<&T>::from(self.as_ref()).into_iter()
    }
}

impl<T> Maybe<&T> {
    pub fn cloned(self) -> Maybe<T>
    where
        T: Clone,
    {
        self.map(Clone::clone)
    }

    pub const fn copied(self) -> Maybe<T>
    where
        T: Copy,
    {
        match self {
            Maybe::Some(&t) => Maybe::Some(t),
            Maybe::None => Maybe::None,
        }
    }
}

impl<T> Maybe<Option<T>> {
    /// Treats a present-but-null payload as absent.
    pub fn not_null(self) -> Maybe<T> {
        match self {
            Self::Some(Some(t)) => Maybe::Some(t),
            Self::Some(None) | Self::None => Maybe::None,
        }
    }

    /// Renders `Some(null)` for a present null payload instead of requiring
    /// `Option<T>: Display`.
    pub const fn display_nullable(&self) -> DisplayNullable<'_, T> {
        DisplayNullable(self)
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::some_not_null(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(t) => Some(t),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(l), Self::Some(r)) => *l == *r,
            (Self::Some(_), Self::None) | (Self::None, Self::Some(_)) => false,
            (Self::None, Self::None) => true,
        }
    }
}

impl<T: PartialOrd> PartialOrd for Maybe<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        match (self, other) {
            (Self::Some(l), Self::Some(r)) => l.partial_cmp(r),
            (Self::Some(_), Self::None) => Some(cmp::Ordering::Greater),
            (Self::None, Self::Some(_)) => Some(cmp::Ordering::Less),
            (Self::None, Self::None) => Some(cmp::Ordering::Equal),
        }
    }
}

impl<T: Ord> Ord for Maybe<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        match (self, other) {
            (Self::Some(l), Self::Some(r)) => l.cmp(r),
            (Self::Some(_), Self::None) => cmp::Ordering::Greater,
            (Self::None, Self::Some(_)) => cmp::Ordering::Less,
            (Self::None, Self::None) => cmp::Ordering::Equal,
        }
    }
}

// A present value hashes exactly like its payload.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Some(t) => t.hash(state),
            Self::None => state.write_u64(NONE_HASH),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(t) => write!(f, "Some({t})"),
            Self::None => f.write_str("None"),
        }
    }
}

/// [`fmt::Display`] adapter returned by [`Maybe::display_nullable`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayNullable<'a, T>(&'a Maybe<Option<T>>);

impl<T: fmt::Display> fmt::Display for DisplayNullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Maybe::Some(Some(t)) => write!(f, "Some({t})"),
            Maybe::Some(None) => f.write_str("Some(null)"),
            Maybe::None => f.write_str("None"),
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
        assert_eq!(Maybe::some(1).value_or(2), 1);
        assert_eq!(Maybe::<i32>::none().value_or(2), 2);
        assert_eq!(Maybe::some("a").value_or_lazy(|| panic!("factory ran")), "a");
        assert_eq!(Maybe::<&str>::none().value_or_lazy(|| "b"), "b");
    }

    #[test]
    fn equality_and_hash() {
        assert_eq!(Maybe::some(3), Maybe::some(3));
        assert_ne!(Maybe::some(3), Maybe::some(4));
        assert_eq!(Maybe::<i32>::none(), Maybe::none());
        assert_ne!(Maybe::some(3), Maybe::none());
        assert_eq!(hash_of(&Maybe::some(3)), hash_of(&Maybe::some(3)));
        assert_eq!(hash_of(&Maybe::some(3)), hash_of(&3));
        assert_eq!(hash_of(&Maybe::<i32>::none()), hash_of(&Maybe::<i32>::none()));
    }

    #[test]
    fn null_payload_is_distinct_from_absent() {
        let null: Maybe<Option<String>> = Maybe::some(None);
        assert_eq!(null, Maybe::some(None));
        assert_ne!(null, Maybe::none());
        assert_ne!(hash_of(&null), hash_of(&Maybe::<Option<String>>::none()));
        assert_eq!(null.clone().not_null(), Maybe::none());
        assert_eq!(Maybe::some(Some(1)).not_null(), Maybe::some(1));
    }

    #[test]
    fn ordering_puts_none_first() {
        assert!(Maybe::<i32>::none() < Maybe::some(i32::MIN));
        assert!(Maybe::some(1) < Maybe::some(2));
        assert_eq!(Maybe::<i32>::none().cmp(&Maybe::none()), cmp::Ordering::Equal);
        assert_eq!(Maybe::some(f64::NAN).partial_cmp(&Maybe::some(1.0)), None);
        assert_eq!(
            Maybe::<f64>::none().partial_cmp(&Maybe::none()),
            Some(cmp::Ordering::Equal)
        );
    }

    #[test]
    fn display() {
        assert_eq!(Maybe::some(42).to_string(), "Some(42)");
        assert_eq!(Maybe::<i32>::none().to_string(), "None");
        let null: Maybe<Option<i32>> = Maybe::some(None);
        assert_eq!(null.display_nullable().to_string(), "Some(null)");
        assert_eq!(Maybe::some(Some(7)).display_nullable().to_string(), "Some(7)");
        assert_eq!(Maybe::<Option<i32>>::none().display_nullable().to_string(), "None");
    }

    #[test]
    fn map_laws() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 10;
        for opt in [Maybe::some(5), Maybe::none()] {
            assert_eq!(opt.map(|x| x), opt);
            assert_eq!(opt.map(f).map(g), opt.map(|x| g(f(x))));
        }
        let _ = Maybe::<i32>::none().map(|_| -> i32 { panic!("mapping ran on none") });
    }

    #[test]
    fn flat_map_absorbs_none() {
        let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
        assert_eq!(Maybe::<i32>::none().flat_map(half), Maybe::none());
        assert_eq!(Maybe::some(8).flat_map(half), half(8));
        assert_eq!(Maybe::some(7).flat_map(half), Maybe::none());
        assert_eq!(
            Maybe::some(7).flat_map_fallible(|x| Fallible::<i32, &str>::None("odd").map(|y: i32| y + x)),
            Maybe::none()
        );
        assert_eq!(Maybe::some(2).flat_map_fallible(|x| Fallible::<_, ()>::Some(x * 3)), Maybe::some(6));
    }

    #[test]
    fn filter_is_idempotent() {
        let positive = |x: &i32| *x > 0;
        for opt in [Maybe::some(1), Maybe::some(-1), Maybe::none()] {
            assert_eq!(opt.filter(positive).filter(positive), opt.filter(positive));
        }
        assert_eq!(Maybe::some(1).filter_when(false), Maybe::none());
        assert_eq!(Maybe::some(1).filter_when(true), Maybe::some(1));
    }

    #[test]
    fn fallbacks() {
        assert_eq!(Maybe::some(1).or(2), Maybe::some(1));
        assert_eq!(Maybe::none().or(2), Maybe::some(2));
        assert_eq!(Maybe::some(1).or_lazy(|| panic!("factory ran")), Maybe::some(1));
        assert_eq!(Maybe::<i32>::none().otherwise(Maybe::none()), Maybe::none());
        assert_eq!(Maybe::none().otherwise_lazy(|| Maybe::some(3)), Maybe::some(3));
        assert_eq!(Maybe::some(1).otherwise_lazy(|| panic!("factory ran")), Maybe::some(1));
    }

    #[test]
    fn contains_and_exists() {
        assert!(Maybe::some(3).contains(&3));
        assert!(!Maybe::some(3).contains(&4));
        assert!(!Maybe::none().contains(&3));
        assert!(Maybe::some(Option::<i32>::None).contains(&None));
        assert!(Maybe::some(3).exists(|x| *x > 2));
        assert!(!Maybe::<i32>::none().exists(|_| panic!("predicate ran")));
    }

    #[test]
    fn matching_runs_one_branch() {
        assert_eq!(Maybe::some(2).match_with(|x| x * 2, || 0), 4);
        assert_eq!(Maybe::<i32>::none().match_with(|x| x * 2, || 0), 0);

        let mut seen = 0;
        Maybe::some(5).match_some(|x| seen = x);
        Maybe::<i32>::none().match_some(|_| panic!("some branch ran"));
        assert_eq!(seen, 5);
        Maybe::<i32>::none().match_none(|| seen = -1);
        assert_eq!(seen, -1);
    }

    #[test]
    fn flatten_and_reason() {
        assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
        assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
        assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());

        assert_eq!(Maybe::some(1).with_exception("e"), Fallible::Some(1));
        assert_eq!(Maybe::<i32>::none().with_exception("e"), Fallible::None("e"));
        assert_eq!(Maybe::some(1).with_exception_lazy(|| -> &'static str { panic!("factory ran") }), Fallible::Some(1));
    }

    #[test]
    fn creation_helpers() {
        assert_eq!(Maybe::some_when(4, |x| *x > 3), Maybe::some(4));
        assert_eq!(Maybe::some_when(2, |x| *x > 3), Maybe::none());
        assert_eq!(Maybe::none_when(2, |x| *x > 3), Maybe::some(2));
        assert_eq!(Maybe::some_not_null(Option::<i32>::None), Maybe::none());
        assert_eq!(Maybe::from(Some(1)), Maybe::some(1));
        assert_eq!(Maybe::some(1).zip(Maybe::some('a')), Maybe::some((1, 'a')));
        assert_eq!(Maybe::some(1).xor(Maybe::some(2)), Maybe::none());
        assert_eq!(Maybe::some(1).into_iter().count(), 1);
    }
}
