use clap::Subcommand;
use colored::Colorize;
use vitrine_lib::Repository;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

pub fn handle(repo: &Repository, cmd: &Command) {
    match cmd {
        Command::Show => println!("{}", label(repo.dark_mode())),
        Command::Toggle => {
            let dark = !repo.dark_mode();
            repo.set_dark_mode(dark);
            println!("{} {}", "Switched to".green(), label(dark));
        }
    }
}

fn label(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
