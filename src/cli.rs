//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use inspecta::output::OutputMode;

/// inspecta - Checklist scoring for safety inspections
#[derive(Parser, Debug)]
#[command(
    name = "inspecta",
    version,
    about = "Checklist scoring for safety inspections",
    long_about = "Score EHS inspection checklists and keep a local inspection history.\n\n\
                  Start a session, mark each item pass, fail or na, then submit.\n\
                  A failed critical item, or too many failed items, fails the inspection."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter .inspecta.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect checklists
    Checklist {
        #[command(subcommand)]
        action: ChecklistAction,
    },

    /// Score statuses against a checklist without starting a session
    Score {
        /// Inspection domain (ammonia, compressed-gas, ppe, or a project domain)
        domain: String,

        /// Item status as id=status (repeatable)
        #[arg(short, long = "status", value_name = "ID=STATUS")]
        statuses: Vec<String>,

        /// JSON file with an {"id": "status"} object
        #[arg(long, value_name = "FILE")]
        from: Option<String>,
    },

    /// Run an inspection session (start, mark, submit)
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// List submitted inspections
    History {
        /// Only show this domain
        #[arg(short, long)]
        domain: Option<String>,

        /// Only show failed inspections
        #[arg(long)]
        failed: bool,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ChecklistAction {
    /// List domains, or the items of one domain
    List {
        /// Domain to show
        domain: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Start a new session
    Start {
        /// Inspection domain
        domain: String,

        /// Equipment or asset tag
        #[arg(short, long)]
        equipment: Option<String>,

        /// Site, building or area
        #[arg(short, long)]
        location: Option<String>,

        /// Person performing the inspection
        #[arg(short, long)]
        inspector: Option<String>,

        /// Inspection date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-form remarks
        #[arg(short, long)]
        notes: Option<String>,

        /// Replace an active session
        #[arg(short, long)]
        force: bool,
    },

    /// Record a status for an item
    Mark {
        /// Item id
        id: String,

        /// pass, fail or na
        status: String,
    },

    /// Remove the status for an item
    Unmark {
        /// Item id
        id: String,
    },

    /// Set a header field
    Set {
        /// equipment_id, location, inspector, date or notes
        field: String,

        /// New value
        value: String,
    },

    /// Show the active session
    Show,

    /// Submit the active session
    Submit,

    /// Discard the active session
    Discard,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Checklist { action }) => match action {
            ChecklistAction::List { domain } => {
                commands::checklist_list(domain.as_deref(), output_mode)
            },
        },
        Some(Command::Score {
            domain,
            statuses,
            from,
        }) => commands::score(&domain, &statuses, from.as_deref(), output_mode),
        Some(Command::Session { action }) => commands::session_cmd(action, output_mode),
        Some(Command::History { domain, failed }) => {
            commands::history(domain.as_deref(), failed, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": inspecta::VERSION
                    })
                );
            } else {
                println!("inspecta v{}", inspecta::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": inspecta::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("inspecta v{}", inspecta::VERSION);
                println!("\nRun 'inspecta --help' for usage");
                println!("Run 'inspecta session start <domain>' to begin an inspection");
            }
            Ok(())
        },
    }
}
