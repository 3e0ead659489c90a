use std::process::ExitCode;

use clap::Parser;
use items_api::config::Config;
use items_api::{logging, server};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    logging::init(config.log_format);

    match server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "items-api exited with an error");
            ExitCode::FAILURE
        }
    }
}
