//! cooked - recipe discovery companion backed by the Spoonacular API

use clap::{CommandFactory, Parser};

mod aggregator;
mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod preferences;
mod storage;

use cli::account::PreferenceUpdate;
use cli::args::GlobalOptions;
use cli::{Cli, Commands, PrefsCommands, ProfileCommands, SavedCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("cooked version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Search {
            filters,
            pagination,
        } => cli::recipes::search(&opts, &filters, &pagination).await,
        Commands::Random { tags, count } => cli::recipes::random(&opts, &tags, count).await,
        Commands::ForYou { limit } => cli::recipes::for_you(&opts, limit).await,
        Commands::Ingredients { ingredients, limit } => {
            cli::recipes::ingredients(&opts, &ingredients, limit).await
        }
        Commands::ByNutrients { bounds, limit } => {
            cli::recipes::by_nutrients(&opts, &bounds, limit).await
        }
        Commands::Recipe { id } => cli::recipes::recipe(&opts, &id).await,
        Commands::Similar { id, count } => cli::recipes::similar(&opts, &id, count).await,
        Commands::Autocomplete { query, count } => {
            cli::recipes::autocomplete(&opts, &query, count).await
        }
        Commands::Nutrition { id } => cli::recipes::nutrition(&opts, &id).await,
        Commands::Daily => cli::recipes::daily(&opts).await,
        Commands::Login { email } => cli::account::login(&opts, email.as_deref()).await,
        Commands::Register { email, name } => {
            cli::account::register(&opts, email.as_deref(), name.as_deref()).await
        }
        Commands::Logout => cli::account::logout(&opts),
        Commands::Profile(profile_cmd) => match profile_cmd {
            ProfileCommands::Show => cli::account::show(&opts).await,
            ProfileCommands::Set { name, birthday } => {
                cli::account::profile_set(&opts, name.as_deref(), birthday).await
            }
        },
        Commands::Prefs(prefs_cmd) => match prefs_cmd {
            PrefsCommands::Show => cli::account::show(&opts).await,
            PrefsCommands::Set {
                cuisine,
                diet,
                allergy,
                allergy_other,
                recipe_type,
            } => {
                let update = PreferenceUpdate {
                    cuisines: cuisine,
                    diets: diet,
                    allergies: allergy,
                    allergy_other,
                    recipe_types: recipe_type,
                };
                cli::account::prefs_set(&opts, update).await
            }
        },
        Commands::Saved(saved_cmd) => match saved_cmd {
            SavedCommands::List { ids } => cli::saved::list(&opts, ids).await,
            SavedCommands::Add { id } => cli::saved::add(&opts, &id).await,
            SavedCommands::Remove { id } => cli::saved::remove(&opts, &id).await,
            SavedCommands::Check { id } => cli::saved::check(&opts, &id).await,
        },
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cooked", &mut std::io::stdout());
            Ok(())
        }
    }
}
