use crate::fallible::Fallible;
use crate::future::maybe::AsyncMaybe;
use crate::future::state::{Resolve, State};
use crate::maybe::Maybe;
use core::fmt;
use core::future::{Future, IntoFuture};
use futures::future::{self, FutureExt, LocalBoxFuture};

/// A [`Fallible`] that becomes available once a future resolves.
///
/// Same sequencing rules as [`AsyncMaybe`]: the receiver is awaited first,
/// and a continuation only runs on the branch it belongs to.
/// Awaiting through `&mut` caches the resolved value for later awaits.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct AsyncFallible<'a, T, E> {
    state: State<'a, Fallible<T, E>>,
}

impl<'a, T: 'a, E: 'a> AsyncFallible<'a, T, E> {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Fallible<T, E>> + 'a,
    {
        Self { state: State::pending(future) }
    }

    pub fn some(value: T) -> Self {
        Self::new(future::ready(Fallible::Some(value)))
    }

    pub fn none(reason: E) -> Self {
        Self::new(future::ready(Fallible::None(reason)))
    }

    pub fn from_value_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'a,
    {
        Self::new(future.map(Fallible::Some))
    }

    pub fn from_result_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + 'a,
    {
        Self::new(future.map(Fallible::<T, E>::from))
    }

    fn resolve(self) -> LocalBoxFuture<'a, Fallible<T, E>> {
        self.state.into_boxed()
    }

    fn chain<U, G, F>(self, step: F) -> AsyncFallible<'a, U, G>
    where
        U: 'a,
        G: 'a,
        F: FnOnce(Fallible<T, E>) -> Fallible<U, G> + 'a,
    {
        AsyncFallible::new(self.resolve().map(step))
    }

    pub fn map<U, F>(self, mapping: F) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        self.chain(move |fallible| fallible.map(mapping))
    }

    pub fn map_async<U, F, Fut>(self, mapping: F) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = U> + 'a,
    {
        AsyncFallible::new(async move {
            match self.resolve().await {
                Fallible::Some(t) => Fallible::Some(mapping(t).await),
                Fallible::None(e) => Fallible::None(e),
            }
        })
    }

    pub fn map_exception<G, F>(self, mapping: F) -> AsyncFallible<'a, T, G>
    where
        G: 'a,
        F: FnOnce(E) -> G + 'a,
    {
        self.chain(move |fallible| fallible.map_exception(mapping))
    }

    pub fn map_exception_async<G, F, Fut>(self, mapping: F) -> AsyncFallible<'a, T, G>
    where
        G: 'a,
        F: FnOnce(E) -> Fut + 'a,
        Fut: Future<Output = G> + 'a,
    {
        AsyncFallible::new(async move {
            match self.resolve().await {
                Fallible::Some(t) => Fallible::Some(t),
                Fallible::None(e) => Fallible::None(mapping(e).await),
            }
        })
    }

    pub fn flat_map<U, F>(self, mapping: F) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fallible<U, E> + 'a,
    {
        self.chain(move |fallible| fallible.flat_map(mapping))
    }

    pub fn flat_map_async<U, F, Fut>(self, mapping: F) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Fallible<U, E>> + 'a,
    {
        AsyncFallible::new(async move {
            match self.resolve().await {
                Fallible::Some(t) => mapping(t).await,
                Fallible::None(e) => Fallible::None(e),
            }
        })
    }

    pub fn flat_map_maybe<U, F>(self, mapping: F, reason: E) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Maybe<U> + 'a,
    {
        self.chain(move |fallible| fallible.flat_map_maybe(mapping, reason))
    }

    pub fn flat_map_maybe_lazy<U, F, R>(self, mapping: F, reason_fn: R) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Maybe<U> + 'a,
        R: FnOnce() -> E + 'a,
    {
        self.chain(move |fallible| fallible.flat_map_maybe_lazy(mapping, reason_fn))
    }

    pub fn flat_map_maybe_async<U, F, Fut>(self, mapping: F, reason: E) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Maybe<U>> + 'a,
    {
        self.flat_map_async(move |t| mapping(t).map(move |maybe| maybe.with_exception(reason)))
    }

    pub fn flat_map_maybe_lazy_async<U, F, Fut, R>(self, mapping: F, reason_fn: R) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Maybe<U>> + 'a,
        R: FnOnce() -> E + 'a,
    {
        self.flat_map_async(move |t| mapping(t).map(move |maybe| maybe.with_exception_lazy(reason_fn)))
    }

    pub fn filter<P>(self, predicate: P, reason: E) -> Self
    where
        P: FnOnce(&T) -> bool + 'a,
    {
        self.chain(move |fallible| fallible.filter(predicate, reason))
    }

    pub fn filter_lazy<P, F>(self, predicate: P, reason_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool + 'a,
        F: FnOnce() -> E + 'a,
    {
        self.chain(move |fallible| fallible.filter_lazy(predicate, reason_fn))
    }

    pub fn filter_async<P, Fut>(self, predicate: P, reason: E) -> Self
    where
        P: FnOnce(&T) -> Fut + 'a,
        Fut: Future<Output = bool> + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                Fallible::Some(t) => {
                    let keep = predicate(&t).await;
                    Fallible::Some(t).filter_when(keep, reason)
                }
                x @ Fallible::None(_) => x,
            }
        })
    }

    /// Like [`AsyncFallible::filter_async`], computing the reason only when
    /// the predicate rejects the value.
    pub fn filter_lazy_async<P, Fut, F>(self, predicate: P, reason_fn: F) -> Self
    where
        P: FnOnce(&T) -> Fut + 'a,
        Fut: Future<Output = bool> + 'a,
        F: FnOnce() -> E + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                Fallible::Some(t) => {
                    let keep = predicate(&t).await;
                    Fallible::Some(t).filter_when_lazy(keep, reason_fn)
                }
                x @ Fallible::None(_) => x,
            }
        })
    }

    pub fn filter_when(self, condition: bool, reason: E) -> Self {
        self.chain(move |fallible| fallible.filter_when(condition, reason))
    }

    pub fn filter_when_lazy<F>(self, condition: bool, reason_fn: F) -> Self
    where
        F: FnOnce() -> E + 'a,
    {
        self.chain(move |fallible| fallible.filter_when_lazy(condition, reason_fn))
    }

    pub fn or(self, alternative: T) -> Self {
        self.chain(move |fallible| fallible.or(alternative))
    }

    pub fn or_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        self.chain(move |fallible| fallible.or_lazy(alternative_fn))
    }

    pub fn or_else<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce(E) -> T + 'a,
    {
        self.chain(move |fallible| fallible.or_else(alternative_fn))
    }

    pub fn or_async<F, Fut>(self, alternative_fn: F) -> Self
    where
        F: FnOnce(E) -> Fut + 'a,
        Fut: Future<Output = T> + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                x @ Fallible::Some(_) => x,
                Fallible::None(e) => Fallible::Some(alternative_fn(e).await),
            }
        })
    }

    /// Like [`AsyncFallible::or_async`], but the alternative does not look at the reason.
    pub fn or_lazy_async<F, Fut>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = T> + 'a,
    {
        self.or_async(move |_| alternative_fn())
    }

    pub fn otherwise(self, alternative: Fallible<T, E>) -> Self {
        self.chain(move |fallible| fallible.otherwise(alternative))
    }

    pub fn otherwise_lazy<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Fallible<T, E> + 'a,
    {
        self.chain(move |fallible| fallible.otherwise_lazy(alternative_fn))
    }

    pub fn otherwise_else<F>(self, alternative_fn: F) -> Self
    where
        F: FnOnce(E) -> Fallible<T, E> + 'a,
    {
        self.chain(move |fallible| fallible.otherwise_else(alternative_fn))
    }

    pub fn otherwise_async<F, Fut>(self, alternative_fn: F) -> Self
    where
        F: FnOnce(E) -> Fut + 'a,
        Fut: Future<Output = Fallible<T, E>> + 'a,
    {
        Self::new(async move {
            match self.resolve().await {
                x @ Fallible::Some(_) => x,
                Fallible::None(e) => alternative_fn(e).await,
            }
        })
    }

    pub fn otherwise_lazy_async<F, Fut>(self, alternative_fn: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Fallible<T, E>> + 'a,
    {
        self.otherwise_async(move |_| alternative_fn())
    }

    pub fn without_exception(self) -> AsyncMaybe<'a, T> {
        AsyncMaybe::new(self.resolve().map(Fallible::without_exception))
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

    pub async fn value_or_else<F>(self, alternative_fn: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.resolve().await.value_or_else(alternative_fn)
    }

    pub async fn value_or_async<F, Fut>(self, alternative_fn: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.resolve().await {
            Fallible::Some(t) => t,
            Fallible::None(e) => alternative_fn(e).await,
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
            Fallible::Some(t) => predicate(&t).await,
            Fallible::None(_) => false,
        }
    }

    pub async fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce(E) -> U,
    {
        self.resolve().await.match_with(some, none)
    }

    pub async fn match_with_async<U, S, N, SFut, NFut>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        N: FnOnce(E) -> NFut,
        SFut: Future<Output = U>,
        NFut: Future<Output = U>,
    {
        match self.resolve().await {
            Fallible::Some(t) => some(t).await,
            Fallible::None(e) => none(e).await,
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
        F: FnOnce(E),
    {
        self.resolve().await.match_none(none);
    }
}

impl<'a, T: 'a, E: 'a> AsyncFallible<'a, Option<T>, E> {
    pub fn not_null(self, reason: E) -> AsyncFallible<'a, T, E> {
        self.chain(move |fallible| fallible.not_null(reason))
    }

    pub fn not_null_lazy<F>(self, reason_fn: F) -> AsyncFallible<'a, T, E>
    where
        F: FnOnce() -> E + 'a,
    {
        self.chain(move |fallible| fallible.not_null_lazy(reason_fn))
    }
}

impl<'a, T: 'a, E: 'a> AsyncFallible<'a, Fallible<T, E>, E> {
    pub fn flatten(self) -> AsyncFallible<'a, T, E> {
        self.chain(Fallible::flatten)
    }
}

impl<'a, T: 'a> AsyncFallible<'a, T, T> {
    pub async fn value_or_exception(self) -> T {
        self.resolve().await.value_or_exception()
    }
}

impl<'a, T: 'a, E: 'a> IntoFuture for AsyncFallible<'a, T, E> {
    type Output = Fallible<T, E>;
    type IntoFuture = LocalBoxFuture<'a, Fallible<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.resolve()
    }
}

impl<'r, 'a, T: Clone, E: Clone> IntoFuture for &'r mut AsyncFallible<'a, T, E> {
    type Output = Fallible<T, E>;
    type IntoFuture = Resolve<'r, 'a, Fallible<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        Resolve::new(&mut self.state)
    }
}

impl<'a, T: 'a, E: 'a> From<Fallible<T, E>> for AsyncFallible<'a, T, E> {
    fn from(value: Fallible<T, E>) -> Self {
        Self { state: State::Resolved(value) }
    }
}

impl<T, E> fmt::Debug for AsyncFallible<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFallible").finish_non_exhaustive()
    }
}

/// Lifts a synchronous [`Fallible`] into an [`AsyncFallible`] pipeline.
pub trait FallibleAsyncExt<'a, T: 'a, E: 'a>: Sized {
    fn to_async(self) -> AsyncFallible<'a, T, E>;

    fn map_async<U, F, Fut>(self, mapping: F) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = U> + 'a,
    {
        self.to_async().map_async(mapping)
    }

    fn flat_map_async<U, F, Fut>(self, mapping: F) -> AsyncFallible<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> Fut + 'a,
        Fut: Future<Output = Fallible<U, E>> + 'a,
    {
        self.to_async().flat_map_async(mapping)
    }

    fn filter_async<P, Fut>(self, predicate: P, reason: E) -> AsyncFallible<'a, T, E>
    where
        P: FnOnce(&T) -> Fut + 'a,
        Fut: Future<Output = bool> + 'a,
    {
        self.to_async().filter_async(predicate, reason)
    }

    fn or_async<F, Fut>(self, alternative_fn: F) -> AsyncFallible<'a, T, E>
    where
        F: FnOnce(E) -> Fut + 'a,
        Fut: Future<Output = T> + 'a,
    {
        self.to_async().or_async(alternative_fn)
    }

    fn match_with_async<U, S, N, SFut, NFut>(self, some: S, none: N) -> impl Future<Output = U> + 'a
    where
        U: 'a,
        S: FnOnce(T) -> SFut + 'a,
        N: FnOnce(E) -> NFut + 'a,
        SFut: Future<Output = U> + 'a,
        NFut: Future<Output = U> + 'a,
    {
        self.to_async().match_with_async(some, none)
    }
}

impl<'a, T: 'a, E: 'a> FallibleAsyncExt<'a, T, E> for Fallible<T, E> {
    fn to_async(self) -> AsyncFallible<'a, T, E> {
        self.into()
    }
}

/// Continues a chain from any future that resolves to a [`Fallible`].
pub trait FutureFallibleExt<'a, T: 'a, E: 'a>: Future<Output = Fallible<T, E>> + Sized + 'a {
    fn to_async_fallible(self) -> AsyncFallible<'a, T, E> {
        AsyncFallible::new(self)
    }
}

impl<'a, T: 'a, E: 'a, F> FutureFallibleExt<'a, T, E> for F where F: Future<Output = Fallible<T, E>> + 'a {}
