use anyhow::Result;
use clap::Parser;
use sample_eda::cli::{log_filter, Cli};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    cli.run()
}
