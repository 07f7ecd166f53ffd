// File: crates/tshist-server/src/main.rs
// Summary: Server binary: read env config, install logging, run on a fixed-size worker pool.

use anyhow::{Context, Result};
use tshist_server::{config::ServerConfig, logging, serve};

fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;
    logging::init_logging(&config.log_level);

    // One blocking thread per worker bounds concurrent renders the way
    // one process per CPU would.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .max_blocking_threads(config.workers)
        .thread_name("tshist-worker")
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    runtime.block_on(serve(config))
}
