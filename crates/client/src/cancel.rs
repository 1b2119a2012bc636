//! Cooperative request cancellation.
//!
//! A lookup whose input changed mid-flight (the user picked a different obra)
//! must be dropped rather than applied. [`abort_pair`] hands the view a
//! handle it can fire on re-selection; [`abortable`] races a request future
//! against that signal.

use tokio::sync::oneshot;

/// The request was cancelled before it produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Fires the abort signal. Dropping the handle without calling
/// [`AbortHandle::abort`] leaves the request running.
#[derive(Debug)]
pub struct AbortHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl AbortHandle {
    /// Cancel the associated request. Harmless if it already finished.
    pub fn abort(mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

/// The receiving side, held by the in-flight request.
#[derive(Debug)]
pub struct AbortRegistration {
    rx: oneshot::Receiver<()>,
}

impl AbortRegistration {
    /// Resolves when the handle fires. A dropped handle never resolves, so
    /// the request runs to completion.
    async fn aborted(self) {
        if self.rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// New handle/registration pair for one request.
pub fn abort_pair() -> (AbortHandle, AbortRegistration) {
    let (tx, rx) = oneshot::channel();
    (AbortHandle { tx: Some(tx) }, AbortRegistration { rx })
}

/// Run `fut` until it completes or the registration fires, whichever comes
/// first.
pub async fn abortable<F, T>(fut: F, registration: AbortRegistration) -> Result<T, Aborted>
where
    F: Future<Output = T>,
{
    tokio::select! {
        out = fut => Ok(out),
        _ = registration.aborted() => Err(Aborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn abort_interrupts_a_pending_request() {
        let (handle, registration) = abort_pair();
        handle.abort();

        let out = abortable(std::future::pending::<u32>(), registration).await;
        assert_eq!(out, Err(Aborted));
    }

    #[tokio::test]
    async fn completed_futures_win_over_a_dropped_handle() {
        let (handle, registration) = abort_pair();
        drop(handle);

        let out = abortable(async { 7u32 }, registration).await;
        assert_eq!(out, Ok(7));
    }

    #[tokio::test]
    async fn dropping_the_handle_does_not_cancel() {
        let (handle, registration) = abort_pair();
        drop(handle);

        let slow = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            "done"
        };
        assert_eq!(abortable(slow, registration).await, Ok("done"));
    }

    #[tokio::test]
    async fn abort_after_completion_is_harmless() {
        let (handle, registration) = abort_pair();
        let out = abortable(async { 1 }, registration).await;
        assert_eq!(out, Ok(1));
        handle.abort();
    }
}
