use crate::error::ClientError;
use crate::stores::alert::{Alert, AlertChannel};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::error;

/// Clears a loading flag when dropped, so the reset cannot be skipped by
/// an early return.
pub(crate) struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn hold(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// In-memory cache of one resource kind with loading bookkeeping.
///
/// Overlapping operations against the same cache are neither sequenced
/// nor cancelled; the last settling operation wins.
#[derive(Debug, Default)]
pub struct ResourceStore<C> {
    value: RwLock<C>,
    loading: AtomicBool,
}

impl<C: Clone + Default> ResourceStore<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an operation against this cache is in flight.
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Current cache contents.
    pub async fn current(&self) -> C {
        self.value.read().await.clone()
    }

    /// Runs a fetch operation and replaces the cache wholesale with its
    /// result.
    pub(crate) async fn refresh<F>(&self, alerts: &AlertChannel, op: F) -> Result<C, ClientError>
    where
        F: Future<Output = Result<C, ClientError>>,
    {
        self.apply(alerts, op, |value, fetched| *value = fetched.clone())
            .await
    }

    /// Runs an operation without touching the cache; callers re-fetch to
    /// observe any change.
    pub(crate) async fn perform<R, F>(&self, alerts: &AlertChannel, op: F) -> Result<R, ClientError>
    where
        F: Future<Output = Result<R, ClientError>>,
    {
        self.apply(alerts, op, |_, _| {}).await
    }

    /// Runs an operation and, on success, folds its result into the cache
    /// with `update`. On failure the cache is left untouched, a normalized
    /// alert is published, and the original error is returned.
    pub(crate) async fn apply<R, F, U>(
        &self,
        alerts: &AlertChannel,
        op: F,
        update: U,
    ) -> Result<R, ClientError>
    where
        F: Future<Output = Result<R, ClientError>>,
        U: FnOnce(&mut C, &R),
    {
        let _loading = LoadingGuard::hold(&self.loading);
        match op.await {
            Ok(result) => {
                update(&mut *self.value.write().await, &result);
                Ok(result)
            }
            Err(err) => {
                error!("Store operation failed: {err}");
                alerts.publish(Alert::from_error(&err));
                Err(err)
            }
        }
    }
}
