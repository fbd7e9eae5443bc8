#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod command;
mod config;
mod date;
mod error;
mod fetch;
mod format;
mod parse;
mod resolve;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{command::CommandHandler, config::Config};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Stands in for the chat runtime: every stdin line is a chat message, every
/// reply goes to stdout.
#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::load()?;
    log::info!(
        "lang={} default_canteen={:?} max_items={} timeout={}s",
        config.lang,
        config.default_canteen,
        config.max_items,
        config.request_timeout
    );
    let handler = CommandHandler::new(config)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted, shutting down");
                break;
            }
        };
        let Some(line) = line else { break };
        if let Some(reply) = handler.handle(&line, date::local_today()).await {
            println!("{reply}\n");
        }
    }
    Ok(())
}
