//! Parsing into [`Maybe`] and [`Fallible`] through [`FromStr`].
use crate::fallible::Fallible;
use crate::maybe::Maybe;
use core::str::FromStr;

pub trait ParseExt {
    /// Parses `self`, forgetting why parsing failed.
    fn parse_maybe<T: FromStr>(&self) -> Maybe<T>;

    /// Parses `self`, keeping the parse error as the absence reason.
    fn parse_fallible<T: FromStr>(&self) -> Fallible<T, T::Err>;
}

impl ParseExt for str {
    fn parse_maybe<T: FromStr>(&self) -> Maybe<T> {
        self.parse_fallible().without_exception()
    }

    fn parse_fallible<T: FromStr>(&self) -> Fallible<T, T::Err> {
        Fallible::from(self.parse::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::IntErrorKind;

    #[test]
    fn numeric_parse_pipeline() {
        let pipeline = |input: &str| input.parse_maybe::<i32>().filter(|x| *x > 0).map(|x| x * 2);
        assert_eq!(pipeline("42"), Maybe::some(84));
        assert_eq!(pipeline("-1"), Maybe::none());
        assert_eq!(pipeline("forty-two"), Maybe::none());
    }

    #[test]
    fn parse_keeps_error() {
        let parsed = "".parse_fallible::<u8>().map_exception(|e| e.kind().clone());
        assert_eq!(parsed, Fallible::none(IntErrorKind::Empty));
        assert_eq!("7".parse_fallible::<u8>().value_or(0), 7);
        assert_eq!("x".parse_maybe::<f64>(), Maybe::none());
    }
}
