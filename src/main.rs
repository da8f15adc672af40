use clap::Parser;
use ingest_pipeline::{app, cli::Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = app::load_config(&cli)?;
    app::init_tracing(&cli, &config)?;

    let summary = app::run(&cli, &config)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
