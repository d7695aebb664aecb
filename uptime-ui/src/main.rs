#![allow(dead_code)]

pub mod counter;
pub mod error;
pub mod init;
pub mod targets;
pub mod utils;

use tracing::Level;
use tracing_wasm::{
    WASMLayerConfig,
    WASMLayerConfigBuilder,
};
use uptime_core::{
    Config,
    ReferenceInstant,
};

use crate::{
    error::Error,
    utils::futures::spawn_local_and_handle_error,
};

/// When the bot was started, in the browser's local time (`YYYY-MM-DDTHH:MM:SS`).
///
/// Update this whenever the bot is restarted.
const START_DATE: &str = "2025-12-29T20:00:00";

fn main() {
    tracing_wasm::set_as_global_default_with_config(log_config());
    console_error_panic_hook::set_once();

    tracing::info!("starting uptime counter");

    spawn_local_and_handle_error(run());
}

fn log_config() -> WASMLayerConfig {
    WASMLayerConfigBuilder::new()
        .set_max_level(Level::DEBUG)
        .build()
}

async fn run() -> Result<(), Error> {
    let reference = ReferenceInstant::parse_local(START_DATE)?;
    let config = Config::new(reference);

    // runs until the page goes away
    let _handle = init::init(config).await?;

    Ok(())
}
