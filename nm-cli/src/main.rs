//! nm-cli - inspect dashboard page data and the charts built from it.

mod cmd;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "nm-cli",
    version,
    about = "News monitor dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command)
}
