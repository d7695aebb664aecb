use std::{
    future::Future,
    pin::Pin,
    task::{
        Context,
        Poll,
    },
};

use futures::{
    future::{
        AbortHandle,
        Abortable,
        Aborted,
    },
    FutureExt,
};
use tokio::sync::oneshot;

/// Spawns a future on the browser's event loop.
///
/// Dropping the returned handle detaches the task.
pub fn spawn_local<F: Future<Output = ()> + 'static>(fut: F) -> JoinHandle {
    let (task, join_handle) = task(fut);
    wasm_bindgen_futures::spawn_local(task);
    join_handle
}

/// Wraps `fut` so that it can be aborted and its outcome awaited through the
/// returned handle. The wrapped future must be driven by an executor.
pub fn task<F: Future<Output = ()>>(fut: F) -> (impl Future<Output = ()>, JoinHandle) {
    let (abort_handle, abort_registration) = AbortHandle::new_pair();
    let (tx_result, rx_result) = oneshot::channel();

    let task = async move {
        let result = Abortable::new(fut, abort_registration).await;
        if result.is_err() {
            tracing::debug!("task cancelled");
        }
        let _ = tx_result.send(result);
    };

    let join_handle = JoinHandle {
        rx_result,
        abort_handle,
    };

    (task, join_handle)
}

#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    #[error("task was cancelled")]
    Cancelled,
    #[error("task panicked")]
    Panic,
}

#[derive(Debug)]
pub struct JoinHandle {
    rx_result: oneshot::Receiver<Result<(), Aborted>>,
    abort_handle: AbortHandle,
}

impl JoinHandle {
    pub fn abort(&self) {
        self.abort_handle.abort()
    }

    pub fn is_aborted(&self) -> bool {
        self.abort_handle.is_aborted()
    }
}

impl Future for JoinHandle {
    type Output = Result<(), JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx_result.poll_unpin(cx).map(|result| {
            match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(Aborted)) => Err(JoinError::Cancelled),
                Err(_) => Err(JoinError::Panic),
            }
        })
    }
}

/// Spawns a fallible task and logs its error, if any.
pub fn spawn_local_and_handle_error<
    F: Future<Output = Result<(), E>> + 'static,
    E: std::error::Error,
>(
    fut: F,
) -> JoinHandle {
    spawn_local(fut.map(|result| {
        if let Err(error) = result {
            super::log_error(&error);
        }
    }))
}
