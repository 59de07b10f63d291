//! Asynchronous counterparts of [`Maybe`](crate::Maybe) and [`Fallible`](crate::Fallible).
//!
//! Both wrappers hold a single-threaded [`LocalBoxFuture`](futures::future::LocalBoxFuture)
//! and implement [`IntoFuture`](core::future::IntoFuture), so a pipeline is
//! driven by awaiting it. The held future is resolved at most once.
mod fallible;
mod maybe;
mod state;

pub use fallible::{AsyncFallible, FallibleAsyncExt, FutureFallibleExt};
pub use maybe::{AsyncMaybe, FutureMaybeExt, MaybeAsyncExt};
pub use state::Resolve;
