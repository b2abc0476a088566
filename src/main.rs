use cfn_hook::Commands;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cfn-hook")]
#[command(about = "Manage CloudFormation Hook type registrations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cfn_hook::cli::dispatch(cli.command).await?;
    Ok(())
}
