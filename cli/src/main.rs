use crate::cli::Args;
use clap::Parser;
use mtg_rdf::config::PipelineConfig;
use mtg_rdf::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stages = args.stages();
    let config = PipelineConfig::from(args);
    Pipeline::new(&config).run(stages).await?;
    Ok(())
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            data_dir: args.data_dir,
            source_url: args.source_url,
            meta_url: args.meta_url,
            input: args.input,
            output: args.output,
            force: args.force,
        }
    }
}
