//! `microhttpd`: serve the working directory over HTTP/1.0.

use std::process::ExitCode;
use env_logger::Env;
use log::error;

use microhttpd_rs::cli::{self, USAGE};
use microhttpd_rs::{HttpServer, MimeRegistry, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let registry = match MimeRegistry::load(&args.mime_path).await {
        Ok(registry) => registry,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let server = HttpServer::new(ServerConfig::default(), registry);
    if let Err(e) = server.start().await {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
