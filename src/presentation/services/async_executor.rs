use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;

/// Drives application-layer futures from the blocking menu loop.
///
/// Single-threaded runtime: subprocesses run on the blocking pool but are
/// awaited one after another.
pub struct AsyncExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn execute<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        self.runtime.block_on(future)
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}
