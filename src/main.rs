use anyhow::Result;
use backstart::{supervisor, LaunchConfig, Platform};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "backstart")]
#[command(about = "Start and supervise the backend service", long_about = None)]
struct Args {
    /// Backend directory (defaults to `backend/` next to the launcher)
    #[arg(long)]
    backend_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("Starting backend service...");

    let platform = Platform::detect();
    let backend_dir = match args.backend_dir {
        Some(dir) => dir,
        None => LaunchConfig::default_backend_dir()?,
    };

    let config = match LaunchConfig::resolve(platform, backend_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("Detected platform: {platform}");
    println!("Running script: {}", platform.script_name());

    let mut supervised = match supervisor::spawn(&config) {
        Ok(supervised) => supervised,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let status = supervised.supervise().await?;
    let code = supervisor::exit_code(status);

    println!("Backend service stopped (exit code: {code})");
    std::process::exit(code);
}
