//! Future wrapper resolving a `Result` into an [`Outcome`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::Outcome;

pin_project! {
    /// A Future wrapper that reifies the inner future's result as an [`Outcome`].
    ///
    /// The error conversion runs only when the inner future resolves to an
    /// error.
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::OutcomeFuture;
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() -> Outcome<u8, String> {
    ///     OutcomeFuture::new(async { Err::<u8, _>("refused") }, |e: &str| e.to_uppercase()).await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut, F> {
        #[pin]
        future: Fut,
        convert: Option<F>,
    }
}

impl<Fut, F> OutcomeFuture<Fut, F> {
    /// Creates a new `OutcomeFuture` converting errors with `convert`.
    #[inline]
    pub fn new(future: Fut, convert: F) -> Self {
        Self { future, convert: Some(convert) }
    }
}

impl<Fut, F, V, X, E> Future for OutcomeFuture<Fut, F>
where
    Fut: Future<Output = Result<V, X>>,
    F: FnOnce(X) -> E,
{
    type Output = Outcome<V, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let convert = this
                .convert
                .take()
                .expect("OutcomeFuture polled after completion; this is a bug");
            match res {
                Ok(value) => Outcome::Success(value),
                Err(error) => Outcome::Failure(convert(error)),
            }
        })
    }
}

impl<Fut, F, V, X, E> FusedFuture for OutcomeFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<V, X>>,
    F: FnOnce(X) -> E,
{
    fn is_terminated(&self) -> bool {
        // convert is taken on completion, whatever the variant
        self.convert.is_none() || self.future.is_terminated()
    }
}
