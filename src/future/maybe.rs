use crate::fallible::Fallible;
use crate::future::fallible::AsyncFallible;
use crate::future::state::{Resolve, State};
use crate::maybe::Maybe;
use core::fmt;
use core::future::{Future, IntoFuture};
use futures::future::{self, FutureExt, LocalBoxFuture};

/// A [`Maybe`] that becomes available once a future resolves.
///
/// Combinators never poll the held future; they wrap it in a new future that
/// runs the continuation after it resolves. A continuation is never called on
/// the absent path.
///
/// Awaiting by value consumes the wrapper. Awaiting through `&mut` keeps it,
/// and every later await yields a clone of the value the first one resolved to.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct AsyncMaybe<'a, T> {
    state: State<'a, Maybe<T>>,
}

impl<'a, T: 'a> AsyncMaybe<'a, T> {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Maybe<T>> + 'a,
    {
        Self { state: State::pending(future) }
    }

    pub fn some(value: T) -> Self {
        Self::new(future::ready(Maybe::Some(value)))
    }

    pub fn none() -> Self {
        Self::new(future::ready(Maybe::None))
    }

    /// Wraps a future of a plain value; the result is always present.
    pub fn from_value_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'a,
    {
        Self::new(future.map(Maybe::Some))
    }

    pub fn from_nullable_future<F>(future: F) -> Self
    where
        F: Future<Output = Option<T>> + 'a,
    {
        Self::new(future.map(Maybe::some_not_null))
    }

    fn resolve(self) -> LocalBoxFuture<'a, Maybe<T>> {
        self.state.into_boxed()
    }

    fn chain<U, F>(self, step: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(Maybe<T>) -> Maybe<U> + 'a,
    {
        AsyncMaybe::new(self.resolve().map(step))
    }

    pub fn map<U, F>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        self.chain(move |maybe| maybe.map(mapping))
    }

    pub fn map_async<U, F, Fut>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = U> + 'a,
    {
        AsyncMaybe::new(async move {
            match self.resolve().await {
                Maybe::Some(t) => Maybe::Some(mapping(t).await),
                Maybe::None => Maybe::None,
            }
        })
    }

    pub fn flat_map<U, F>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(T) -> Maybe<U> + 'a,
    {
        self.chain(move |maybe| maybe.flat_map(mapping))
    }

    pub fn flat_map_async<U, F, Fut>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Maybe<U>> + 'a,
    {
        AsyncMaybe::new(async move {
            match self.resolve().await {
                Maybe::Some(t) => mapping(t).await,
                Maybe::None => Maybe::None,
            }
        })
    }

    pub fn flat_map_fallible<U, E, F>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        E: 'a,
        F: FnOnce(T) -> Fallible<U, E> + 'a,
    {
        self.chain(move |maybe| maybe.flat_map_fallible(mapping))
    }

    pub fn flat_map_fallible_async<U, E, F, Fut>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        E: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Fallible<U, E>> + 'a,
    {
        self.flat_map_async(move |t| mapping(t).map(Fallible::without_exception))
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + 'a,
    {
        self.chain(move |maybe| maybe.filter(predicate))
    }

    /// The predicate's future is awaited before deciding whether to keep the value.
    pub fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut + 'a,
        Fut: Future<Output = bool> + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                Maybe::Some(t) => {
                    let keep = predicate(&t).await;
                    Maybe::Some(t).filter_when(keep)
                }
                Maybe::None => Maybe::None,
            }
        })
    }

    pub fn filter_when(self, condition: bool) -> Self {
        self.chain(move |maybe| maybe.filter_when(condition))
    }

    pub fn or(self, alternative: T) -> Self {
        self.chain(move |maybe| maybe.or(alternative))
    }

    pub fn or_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        self.chain(move |maybe| maybe.or_lazy(alternative_fn))
    }

    pub fn or_async<F, Fut>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = T> + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                x @ Maybe::Some(_) => x,
                Maybe::None => Maybe::Some(alternative_fn().await),
            }
        })
    }

    pub fn otherwise(self, alternative: Maybe<T>) -> Self {
        self.chain(move |maybe| maybe.otherwise(alternative))
    }

    pub fn otherwise_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Maybe<T> + 'a,
    {
        self.chain(move |maybe| maybe.otherwise_lazy(alternative_fn))
    }

    pub fn otherwise_async<F, Fut>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Maybe<T>> + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                x @ Maybe::Some(_) => x,
                Maybe::None => alternative_fn().await,
            }
        })
    }

    pub fn with_exception<E: 'a>(self, reason: E) -> AsyncFallible<'a, T, E> {
        AsyncFallible::new(self.resolve().map(move |maybe| maybe.with_exception(reason)))
    }

    pub fn with_exception_lazy<E, F>(self, reason_fn: F) -> AsyncFallible<'a, T, E>
    where
        E: 'a,
        F: FnOnce() -> E + 'a,
    {
        AsyncFallible::new(self.resolve().map(move |maybe| maybe.with_exception_lazy(reason_fn)))
    }

    pub async fn value_or(self, alternative: T) -> T {
        self.resolve().await.value_or(alternative)
    }

    pub async fn value_or_lazy<F>(self, alternative_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.resolve().await.value_or_lazy(alternative_fn)
    }

    pub async fn value_or_async<F, Fut>(self, alternative_fn: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.resolve().await {
            Maybe::Some(t) => t,
            Maybe::None => alternative_fn().await,
        }
    }

    pub async fn contains(self, candidate: T) -> bool
    where
        T: PartialEq,
    {
        self.resolve().await.contains(&candidate)
    }

    pub async fn exists<P>(self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.resolve().await.exists(predicate)
    }

    pub async fn exists_async<P, Fut>(self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self.resolve().await {
            Maybe::Some(t) => predicate(&t).await,
            Maybe::None => false,
        }
    }

    /// Awaits the value, then calls exactly one branch.
    pub async fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        self.resolve().await.match_with(some, none)
    }

    pub async fn match_with_async<U, S, N, SFut, NFut>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        N: FnOnce() -> NFut,
        SFut: Future<Output = U>,
        NFut: Future<Output = U>,
    {
        match self.resolve().await {
            Maybe::Some(t) => some(t).await,
            Maybe::None => none().await,
        }
    }

    pub async fn match_some<F>(self, some: F)
    where
        F: FnOnce(T),
    {
        self.resolve().await.match_some(some);
    }

    pub async fn match_none<F>(self, none: F)
    where
        F: FnOnce(),
    {
        self.resolve().await.match_none(none);
    }
}

impl<'a, T: 'a> AsyncMaybe<'a, Option<T>> {
    pub fn not_null(self) -> AsyncMaybe<'a, T> {
        self.chain(Maybe::not_null)
    }
}

impl<'a, T: 'a> AsyncMaybe<'a, Maybe<T>> {
    pub fn flatten(self) -> AsyncMaybe<'a, T> {
        self.chain(Maybe::flatten)
    }
}

impl<'a, T: 'a> IntoFuture for AsyncMaybe<'a, T> {
    type Output = Maybe<T>;
    type IntoFuture = LocalBoxFuture<'a, Maybe<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.resolve()
    }
}

impl<'r, 'a, T: Clone> IntoFuture for &'r mut AsyncMaybe<'a, T> {
    type Output = Maybe<T>;
    type IntoFuture = Resolve<'r, 'a, Maybe<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Resolve::new(&mut self.state)
    }
}

impl<'a, T: 'a> From<Maybe<T>> for AsyncMaybe<'a, T> {
    fn from(value: Maybe<T>) -> Self {
        Self { state: State::Resolved(value) }
    }
}

impl<T> fmt::Debug for AsyncMaybe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncMaybe").finish_non_exhaustive()
    }
}

/// Lifts a synchronous [`Maybe`] into an [`AsyncMaybe`] pipeline.
pub trait MaybeAsyncExt<'a, T: 'a>: Sized {
    fn to_async(self) -> AsyncMaybe<'a, T>;

    fn map_async<U, F, Fut>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = U> + 'a,
    {
        self.to_async().map_async(mapping)
    }

    fn flat_map_async<U, F, Fut>(self, mapping: F) -> AsyncMaybe<'a, U>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Maybe<U>> + 'a,
    {
        self.to_async().flat_map_async(mapping)
    }

    fn filter_async<P, Fut>(self, predicate: P) -> AsyncMaybe<'a, T>
    where
        P: FnOnce(&T) -> Fut + 'a,
        Fut: Future<Output = bool> + 'a,
    {
        self.to_async().filter_async(predicate)
    }

    fn or_async<F, Fut>(self, alternative_fn: F) -> AsyncMaybe<'a, T>
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = T> + 'a,
    {
        self.to_async().or_async(alternative_fn)
    }

    fn match_with_async<U, S, N, SFut, NFut>(self, some: S, none: N) -> impl Future<Output = U> + 'a
    where
        U: 'a,
        S: FnOnce(T) -> SFut + 'a,
        N: FnOnce() -> NFut + 'a,
        SFut: Future<Output = U> + 'a,
        NFut: Future<Output = U> + 'a,
    {
        self.to_async().match_with_async(some, none)
    }
}

impl<'a, T: 'a> MaybeAsyncExt<'a, T> for Maybe<T> {
    fn to_async(self) -> AsyncMaybe<'a, T> {
        self.into()
    }
}

/// Continues a chain from any future that resolves to a [`Maybe`].
pub trait FutureMaybeExt<'a, T: 'a>: Future<Output = Maybe<T>> + Sized + 'a {
    fn to_async_maybe(self) -> AsyncMaybe<'a, T> {
        AsyncMaybe::new(self)
    }
}

impl<'a, T: 'a, F> FutureMaybeExt<'a, T> for F where F: Future<Output = Maybe<T>> + 'a {}
