//! Explicit optional values.
//!
//! [`Maybe<T>`] is a value that is present or absent, [`Fallible<T, E>`] is a
//! value that is present or absent for a reason. Both come with the same
//! combinator vocabulary (`map`, `flat_map`, `filter`, `or`, `otherwise`,
//! `match_with`, ...), and [`future`] lifts that vocabulary over
//! single-threaded futures.
//!
//! ```
//! use better_maybe::parse::ParseExt;
//! use better_maybe::Maybe;
//!
//! let doubled = "42".parse_maybe::<i32>().filter(|x| *x > 0).map(|x| x * 2);
//! assert_eq!(doubled, Maybe::some(84));
//! ```
//!
//! Escape hatches that turn absence back into a failure live behind
//! [`unchecked::Unchecked`] and have to be imported explicitly.

pub mod catch;
pub mod collections;
pub mod create;
mod error;
mod fallible;
#[cfg(feature = "async")]
pub mod future;
mod maybe;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod unchecked;

pub use create::{OptionExt, none, some};
pub use error::{BoxError, ValueMissing};
pub use fallible::Fallible;
pub use maybe::{DisplayNullable, Maybe};

#[cfg(feature = "aliases")]
pub use aliases::*;

#[cfg(feature = "aliases")]
mod aliases {
    use crate::error::BoxError;
    use crate::fallible::Fallible;
    use crate::maybe::Maybe;

    pub type Opt<T> = Maybe<T>;
    pub type OptErr<T, E> = Fallible<T, E>;
    /// What [`crate::catch::Catch::run`] produces on success.
    pub type BoxFallible<T> = Fallible<T, BoxError>;
}
