pub mod update;

use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    update: update::UpdateArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        update::cmd(cli.update).await
    }
}
