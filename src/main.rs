//! Careerpath CLI - collect career interests and suggest next steps

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use careerpath::config::{self, CareerpathConfig};
use careerpath::storage::CareerStore;
use careerpath::ui::{self, Icons};
use careerpath::{NewUser, generate_career_path, prompt};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "careerpath")]
#[command(version)]
#[command(about = "Career roadmap helper - records your interests and suggests next steps")]
#[command(long_about = r#"
Careerpath asks about your interests, skills and availability, stores your
profile in a local SQLite database, and recommends a path to follow.

Example usage:
  careerpath recommend
  careerpath stats --format json
  careerpath careers --limit 10
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a few questions and get a recommended career path
    Recommend {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the CSV file used to seed career paths on first run
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Don't store the profile, only print the recommendation
        #[arg(long)]
        no_save: bool,
    },

    /// Show statistics about the stored data
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the CSV file used to seed career paths on first run
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List stored career paths
    Careers {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the CSV file used to seed career paths on first run
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Maximum number of career paths to show
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a careerpath.toml with the default paths
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let settings = config::load_config(Some(&config_path))?.unwrap_or_default();

    match cli.command {
        Commands::Recommend { database, seed, no_save } => {
            ui::banner("Career Guide Generator");

            let stdin = std::io::stdin();
            let profile = prompt::collect_user_details(stdin.lock(), std::io::stdout())?;
            let recommendation = generate_career_path(&profile.interests);

            if !no_save {
                let store = open_store(&settings, database.as_deref(), seed.as_deref())?;
                let user_id = store.insert_user(&NewUser::from(profile.clone()))?;
                store.close();
                tracing::info!("Stored profile for {} as user {}", profile.email, user_id);
                ui::success(&format!("Saved your profile (id {})", user_id));
            }

            let title = match recommendation.career {
                Some(career) => format!("Recommended Career Path for You: {}", career),
                None => "Recommended Career Path for You:".to_string(),
            };
            ui::section(Icons::TARGET, &title);
            for step in recommendation.steps {
                ui::step(step);
            }
        }

        Commands::Stats { database, seed, format } => {
            let db_path = settings.database_path(database.as_deref());
            let store = open_store(&settings, Some(db_path.as_path()), seed.as_deref())?;
            let stats = store.database_stats()?;
            store.close();

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Text => {
                    ui::header(&format!("Careerpath Statistics ({})", db_path.display()));
                    println!("{}", ui::stats_table(&stats));
                }
            }
        }

        Commands::Careers { database, seed, limit, format } => {
            let store = open_store(&settings, database.as_deref(), seed.as_deref())?;
            let paths = store.sample_career_paths(limit)?;
            store.close();

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
                OutputFormat::Text if paths.is_empty() => {
                    ui::warn("No career paths stored. Add data/sample_career_map.csv and run again.");
                }
                OutputFormat::Text => {
                    ui::section(Icons::BOOKS, &format!("Career paths (showing up to {})", limit));
                    println!("{}", ui::careers_table(&paths));
                }
            }
        }

        Commands::Init { force } => {
            config::write_config(&config_path, &CareerpathConfig::with_defaults(), force)?;
            ui::success(&format!("Wrote {}", config_path.display()));
            ui::summary_row("database:", careerpath::storage::DEFAULT_DATABASE_PATH);
            ui::summary_row("seed:", careerpath::storage::DEFAULT_SEED_PATH);
        }
    }

    Ok(())
}

/// Open the store, resolving paths as flag > config > default
fn open_store(
    settings: &CareerpathConfig,
    database: Option<&Path>,
    seed: Option<&Path>,
) -> anyhow::Result<CareerStore> {
    let db_path = settings.database_path(database);
    let seed_path = settings.seed_path(seed);
    tracing::debug!("Using database {:?} and seed {:?}", db_path, seed_path);
    Ok(CareerStore::open_with_seed(&db_path, &seed_path)?)
}
