use clap::Subcommand;
use colored::Colorize;
use vitrine_lib::{
    Repository,
    repository::{Category, Filter, ProjectDraft, ProjectId, Status},
};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List projects
    List {
        /// Only show featured projects
        #[arg(long)]
        featured: bool,
    },
    /// Add a new project
    Add {
        title: String,
        description: String,
        /// Project category (frontend, backend, fullstack)
        #[arg(long, default_value_t = Category::Frontend)]
        category: Category,
        /// Project status (completed, in-progress, planned)
        #[arg(long, default_value_t = Status::Completed)]
        status: Status,
        /// Mark the project as featured
        #[arg(long)]
        featured: bool,
        /// Technology tag, repeatable
        #[arg(long = "tech")]
        technologies: Vec<String>,
    },
    /// Remove a project by id
    Remove { id: u64 },
}

pub fn handle(repo: &Repository, cmd: &Command) {
    match cmd {
        Command::List { featured } => {
            let filter = if *featured { Filter::Featured } else { Filter::All };

            for project in repo.filtered(filter) {
                let marker = if project.featured { "★".yellow() } else { " ".into() };
                println!(
                    "{} {} {} [{} · {}]",
                    project.id.to_string().dimmed(),
                    marker,
                    project.title.bold(),
                    project.category,
                    project.status,
                );
            }
        }
        Command::Add {
            title,
            description,
            category,
            status,
            featured,
            technologies,
        } => {
            let mut draft = ProjectDraft {
                title: title.clone(),
                description: description.clone(),
                category: *category,
                status: *status,
                featured: *featured,
                ..ProjectDraft::default()
            };
            for tech in technologies {
                draft.push_technology(tech);
            }

            let project = repo.add(draft);
            println!("{} {}", "Added".green(), project.id);
        }
        Command::Remove { id } => match repo.remove(ProjectId::from(*id)) {
            Ok(()) => println!("{} {id}", "Removed".green()),
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
    }
}
