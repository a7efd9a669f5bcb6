use clap::{Parser, Subcommand};
use habitkeep_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "habitkeep-cli", version, about = "habitkeep CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a day or show the streak containing it
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Calendar views
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Streak and practice statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// All habits on one day
    Dashboard(commands::dashboard::DashboardArgs),
    /// Create and update habit documents
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so stdout stays clean JSON.
fn init_tracing(config: &Config) {
    let directive =
        std::env::var("HABITKEEP_LOG").unwrap_or_else(|_| config.log.level.clone());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&config);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using default configuration");
    }

    let result = match cli.command {
        Commands::Day { action } => commands::day::run(action, &config),
        Commands::Calendar { action } => commands::calendar::run(action, &config),
        Commands::Stats { action } => commands::stats::run(action, &config),
        Commands::Dashboard(args) => commands::dashboard::run(args, &config),
        Commands::Habit { action } => commands::habit::run(action, &config),
        Commands::Config { action } => commands::config::run(action, loaded),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
