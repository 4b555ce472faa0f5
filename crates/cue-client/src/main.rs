//! Cue-Live Client
//!
//! Browser front end for the billiards table page.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "cue-client only supports wasm32 target. Use: cargo check -p cue-client --target wasm32-unknown-unknown"
);

mod config;
mod driver;
mod scene;
mod shot_client;

use std::cell::RefCell;

use driver::Game;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

thread_local! {
    /// Keeps the mounted table and its listeners alive after `main` returns.
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();

    let document = gloo::utils::document();
    let (config, config_error) = match config::load(&document) {
        Ok(config) => (config, None),
        Err(e) => (cue_core::TurnConfig::default(), Some(e)),
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid #cue-config, using defaults");
    }

    match Game::mount(&document, config) {
        Ok(game) => GAME.with(|slot| *slot.borrow_mut() = Some(game)),
        Err(e) => tracing::error!(error = %e, "Failed to mount table"),
    }
}
