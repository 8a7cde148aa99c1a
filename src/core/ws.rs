//! Shared WebSocket write-half handle with idempotent close.
//!
//! Each relay session splits its two sockets and wraps the write halves in
//! [`SharedSink`] so that a relay loop and the session supervisor can both
//! reach them. Closing is take-and-close: the first caller performs the
//! close, every later caller gets a no-op. There is no cancellation signal
//! in the relay; closing a peer's sink is what unblocks its read loop.

use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::{Sink, SinkExt};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors from sending through a shared sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The handle was already closed
    #[error("sink already closed")]
    Closed,

    /// The underlying transport rejected the write
    #[error("send failed: {0}")]
    Transport(String),
}

/// Cloneable handle to a WebSocket write half.
///
/// At most one relay writes through a given handle in steady state; clones
/// exist so the supervisor and the peer relay can force the close.
pub struct SharedSink<S, M> {
    inner: Arc<Mutex<Option<S>>>,
    _frame: PhantomData<fn(M)>,
}

impl<S, M> Clone for SharedSink<S, M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _frame: PhantomData,
        }
    }
}

impl<S, M> SharedSink<S, M>
where
    S: Sink<M> + Unpin,
    <S as Sink<M>>::Error: Display,
{
    /// Wrap a write half.
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(sink))),
            _frame: PhantomData,
        }
    }

    /// Send one frame, flushing it to the transport.
    pub async fn send(&self, frame: M) -> Result<(), SinkError> {
        let mut guard = self.inner.lock().await;
        match guard.as_mut() {
            Some(sink) => sink
                .send(frame)
                .await
                .map_err(|e| SinkError::Transport(e.to_string())),
            None => Err(SinkError::Closed),
        }
    }

    /// Close the underlying sink. Safe to call any number of times; returns
    /// whether this call performed the close.
    pub async fn close(&self) -> bool {
        let mut guard = self.inner.lock().await;
        match guard.take() {
            Some(mut sink) => {
                // Transport errors here mean the connection is already gone.
                let _ = sink.close().await;
                true
            }
            None => false,
        }
    }

    /// Whether the handle has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}
