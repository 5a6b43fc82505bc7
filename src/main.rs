//! gwstats - Main entry point

use clap::Parser;
use log::{debug, info};
use std::io;
use std::process::ExitCode;

use gwstats::{run_direct, Cli, CredentialResolver, InteractiveSession, MistClient, Prompt, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gwstats v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: site={:?}, device_id={:?}, format={}, limit={}, credentials={:?}",
        cli.site,
        cli.device_id,
        cli.output_format(),
        cli.limit,
        cli.credentials
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = if e.is_transport() { "transport" } else { "configuration" };
            debug!("Fatal {} error: {:?}", kind, e);
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let resolver = CredentialResolver::locate(cli.credentials.as_deref());
    info!("Reading credentials from {}", resolver.path().display());
    let credentials = resolver.resolve()?;

    // Banners go to stderr
    if let Some(org_id) = credentials.org_id.as_deref() {
        eprintln!("Using org_id from credential file: {}", org_id);
    }
    eprintln!("Using base_url: {}", credentials.base_url);

    let client = MistClient::new(&credentials);
    let format = cli.output_format();

    match cli.site.as_deref() {
        Some(site_id) => {
            let mut stdout = io::stdout().lock();
            run_direct(
                &client,
                site_id,
                cli.device_id.as_deref(),
                format,
                cli.limit,
                &mut stdout,
            )
            .await
        }
        None => {
            let prompt = Prompt::new(io::stdin().lock(), io::stdout());
            let mut session = InteractiveSession::new(
                &client,
                credentials.org_id.as_deref(),
                format,
                cli.limit,
                prompt,
            )
            .show_progress(true);
            session.run().await
        }
    }
}
