use std::sync::Arc;
use tokio::sync::Notify;

use servedir::config::{AppState, Config};
use servedir::logger;
use servedir::server::{create_listener, run_accept_loop, signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // One connection is handled to completion before the next accept,
    // so a single-threaded runtime is all the server needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let state = Arc::new(AppState::new(cfg)?);

    // Bind failure is fatal; the error propagates out of main.
    let listener = create_listener(addr)?;

    logger::log_server_start(&addr, &state.root);

    let shutdown = Arc::new(Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown));

    run_accept_loop(listener, state, shutdown).await;

    logger::log_shutdown();
    Ok(())
}
