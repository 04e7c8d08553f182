//! Shared Runtime

use anyhow::anyhow;
use once_cell::sync::Lazy;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Multi-thread runtime shared by every command of the binary.
static RUNTIME: Lazy<std::io::Result<Runtime>> =
    Lazy::new(|| Builder::new_multi_thread().enable_all().build());

/// Run a future to completion on the shared runtime.
pub fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = RUNTIME
        .as_ref()
        .map_err(|e| anyhow!("failed to build runtime: {e}"))?;
    Ok(runtime.block_on(future))
}
