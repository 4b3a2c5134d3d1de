//! Props web part workbench
//!
//! Runs the web part the way a page would, without a page:
//!   propspane-workbench --mode local --set textboxField=hello
//!   propspane-workbench --mode connected --site-url https://contoso.sharepoint.com/sites/dev
//!
//! Prints the property pane descriptor (JSON) followed by the rendered HTML.

use anyhow::Result;
use clap::Parser;
use propspane_workbench::{Args, WorkbenchConfig, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = WorkbenchConfig::from_args(&args)?;
    let edits = args.edits()?;
    info!("Workbench starting in {} mode", config.environment);

    let output = run(&config, &edits).await?;

    println!("{}", serde_json::to_string_pretty(&output.pane)?);
    println!();
    println!("{}", output.html);
    Ok(())
}
