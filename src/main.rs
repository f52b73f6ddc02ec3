use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use econome::audit::AuditLog;
use econome::cli::{
    handle_allocate_command, handle_audit_command, handle_budget_command, handle_need_command,
    handle_profile_command, handle_project_command, handle_tasks_command, handle_want_command,
    AllocateArgs, NeedCommands, ProfileCommands, WantCommands,
};
use econome::config::{paths::EconomePaths, settings::Settings};
use econome::storage::ProfileStore;

#[derive(Parser)]
#[command(
    name = "econome",
    version,
    about = "Personal budgeting: needs, wants, and savings goals",
    long_about = "EconoMe splits a monthly income into needs, wants, and savings, \
                  tracks bills and savings goals per profile, and estimates how \
                  long each goal takes to reach."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Need (bill) management commands
    #[command(subcommand)]
    Need(NeedCommands),

    /// Want (savings goal) management commands
    #[command(subcommand)]
    Want(WantCommands),

    /// Show all needs and wants for a profile
    Tasks {
        /// Profile name
        profile: String,
    },

    /// Set the needs/wants/savings split for a profile
    Allocate(AllocateArgs),

    /// Show the computed needs/wants/savings amounts for a profile
    Budget {
        /// Profile name
        profile: String,
        /// Add the savings amount to the profile's savings balance
        #[arg(long)]
        apply: bool,
    },

    /// Estimate how many months until a want is affordable
    Project {
        /// Profile name
        profile: String,
        /// Want number from `want list`
        number: usize,
        /// Monthly contribution (defaults to the profile's savings allocation)
        #[arg(short, long)]
        monthly: Option<String>,
    },

    /// Show recent budget history (income, savings, allocation, and item changes)
    Audit {
        /// Only show history for this profile
        #[arg(short, long)]
        profile: Option<String>,
        /// Number of records to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("econome=warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = EconomePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut store = ProfileStore::open(&paths);
    if settings.audit_enabled {
        store = store.with_audit(AuditLog::new(paths.audit_log()));
    }

    match cli.command {
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Need(cmd)) => {
            handle_need_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Want(cmd)) => {
            handle_want_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Tasks { profile }) => {
            handle_tasks_command(&store, &settings, &profile)?;
        }
        Some(Commands::Allocate(args)) => {
            handle_allocate_command(&mut store, &settings, args)?;
        }
        Some(Commands::Budget { profile, apply }) => {
            handle_budget_command(&mut store, &settings, &profile, apply)?;
        }
        Some(Commands::Project {
            profile,
            number,
            monthly,
        }) => {
            handle_project_command(&store, &settings, &profile, number, monthly)?;
        }
        Some(Commands::Audit { profile, limit }) => {
            let log = AuditLog::new(paths.audit_log());
            handle_audit_command(&log, &settings, profile.as_deref(), limit)?;
        }
        Some(Commands::Config) => {
            println!("EconoMe Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Profiles file:  {}", paths.profiles_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("EconoMe - needs, wants, and savings goals");
            println!();
            println!("Run 'econome --help' for usage information.");
            println!("Run 'econome profile create <name>' to get started.");
        }
    }

    Ok(())
}
