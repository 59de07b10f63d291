use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, ready};
use futures::future::{self, FutureExt, LocalBoxFuture};

/// Completion state shared by the async wrappers. Once the held future
/// resolves, its output replaces it and the future is dropped.
pub(crate) enum State<'a, O> {
    Pending(LocalBoxFuture<'a, O>),
    Resolved(O),
}

impl<'a, O: 'a> State<'a, O> {
    pub(crate) fn pending<F>(future: F) -> Self
    where
        F: Future<Output = O> + 'a,
    {
        Self::Pending(future.boxed_local())
    }

    /// Future yielding the output, without polling the held future again
    /// if it already resolved.
    pub(crate) fn into_boxed(self) -> LocalBoxFuture<'a, O> {
        match self {
            Self::Pending(future) => future,
            Self::Resolved(output) => future::ready(output).boxed_local(),
        }
    }
}

impl<O: Clone> State<'_, O> {
    fn poll_cached(&mut self, cx: &mut Context<'_>) -> Poll<O> {
        match self {
            Self::Pending(future) => {
                let output = ready!(future.poll_unpin(cx));
                *self = Self::Resolved(output.clone());
                Poll::Ready(output)
            }
            Self::Resolved(output) => Poll::Ready(output.clone()),
        }
    }
}

/// Future returned when awaiting an async option through `&mut`.
///
/// The first await that completes stores the resolved value in the option;
/// every later await hands back a clone of it.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Resolve<'r, 'a, O> {
    state: &'r mut State<'a, O>,
}

impl<'r, 'a, O> Resolve<'r, 'a, O> {
    pub(crate) fn new(state: &'r mut State<'a, O>) -> Self {
        Self { state }
    }
}

impl<O: Clone> Future for Resolve<'_, '_, O> {
    type Output = O;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<O> {
        self.state.poll_cached(cx)
    }
}
