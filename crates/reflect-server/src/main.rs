#![cfg_attr(test, allow(unused_crate_dependencies))]

use clap::crate_version;
use tokio::runtime;

use config::Config;
use server::AppState;

mod args;
mod config;
mod error;
mod pets;
mod server;

const THREAD_NAME: &str = "reflect-server";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_target(true)
        .init();

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        let crate_version = crate_version!();
        tracing::info!("Reflect server {crate_version}");

        let state = AppState::new(pets::dogs(), pets::cats(), config.schema);
        server::serve(args.listen_address, state).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
