use clap::{Parser, Subcommand};
use vitrine_lib::Repository;

mod project;
mod theme;

#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on portfolio projects
    #[command(subcommand)]
    Project(project::Command),
    /// Inspect or toggle the colour theme
    #[command(subcommand)]
    Theme(theme::Command),
}

fn main() {
    human_panic::setup_panic!();
    tracing_subscriber::fmt::init();

    let repo = Repository::new();
    repo.ensure_seeded();

    let cli = Cli::parse();

    match &cli.command {
        Command::Project(cmd) => project::handle(&repo, cmd),
        Command::Theme(cmd) => theme::handle(&repo, cmd),
    }
}
