//! CLI command definitions and handlers

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod account;
pub mod args;
pub mod context;
pub mod init;
pub mod recipes;
pub mod saved;
pub mod status;

pub use args::{NutrientArgs, OutputFormat, PaginationArgs, SearchFilterArgs};
pub use context::CommandContext;

/// cooked - find something to cook, backed by the Spoonacular API
#[derive(Parser, Debug)]
#[command(name = "cooked")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "COOKED_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "COOKED_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "COOKED_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Keep login and recipe of the day in memory for this run only
    #[arg(long, global = true, env = "COOKED_EPHEMERAL", hide_env = true)]
    pub ephemeral: bool,

    /// Override the recipe provider base URL
    #[arg(long, global = true, hide = true)]
    pub provider_url: Option<String>,

    /// Override the profile backend base URL
    #[arg(long, global = true, hide = true)]
    pub backend_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up the Spoonacular API key and backend URL
    Init,

    /// Show configuration, login and cache status
    Status,

    /// Display version information
    Version,

    /// Search recipes with optional filters
    Search {
        #[command(flatten)]
        filters: SearchFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Random recipes, optionally restricted by tags
    Random {
        /// Tags such as vegetarian or dessert
        #[arg(long, short = 't', value_delimiter = ',')]
        tags: Vec<String>,

        /// Number of recipes
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },

    /// Popular recipes matching your saved preferences
    #[command(name = "for-you")]
    ForYou {
        /// Number of recipes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Recipes you can make with the ingredients on hand
    Ingredients {
        /// Ingredients, separated by spaces or commas
        #[arg(required = true, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Number of recipes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Recipes within per-serving nutrient bounds
    #[command(name = "by-nutrients")]
    ByNutrients {
        #[command(flatten)]
        bounds: NutrientArgs,

        /// Number of recipes
        #[arg(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Show full details for a recipe
    Recipe {
        /// Recipe ID
        id: String,
    },

    /// Recipes similar to a given one
    Similar {
        /// Recipe ID
        id: String,

        /// Number of recipes
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },

    /// Complete a partial recipe title
    Autocomplete {
        /// Partial title
        query: String,

        /// Number of suggestions
        #[arg(long, short = 'n', default_value_t = 5)]
        count: usize,
    },

    /// Nutrition summary for a recipe
    Nutrition {
        /// Recipe ID
        id: String,
    },

    /// Today's recipe, picked once per day
    Daily,

    /// Log in to the profile backend
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,
    },

    /// Create a profile backend account
    Register {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Forget the stored login
    Logout,

    /// View or edit your account details
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// View or edit your food preferences
    #[command(subcommand)]
    Prefs(PrefsCommands),

    /// Manage saved recipes
    #[command(subcommand)]
    Saved(SavedCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   cooked completion bash > /etc/bash_completion.d/cooked
  zsh:    cooked completion zsh > \"${fpath[1]}/_cooked\"
  fish:   cooked completion fish > ~/.config/fish/completions/cooked.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your account and preferences
    Show,

    /// Update your name or birthday
    #[command(group(ArgGroup::new("fields").required(true).multiple(true)))]
    Set {
        /// Display name
        #[arg(long, group = "fields")]
        name: Option<String>,

        /// Birthday as YYYY-MM-DD
        #[arg(long, group = "fields")]
        birthday: Option<NaiveDate>,
    },
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show stored preferences
    Show,

    /// Replace the given preference lists; omitted lists are kept
    Set {
        /// Cuisines (e.g. "Italian,Thai")
        #[arg(long, value_delimiter = ',')]
        cuisine: Option<Vec<String>>,

        /// Diets (e.g. "Vegetarian,Low-Carb / Keto")
        #[arg(long, value_delimiter = ',')]
        diet: Option<Vec<String>>,

        /// Allergies (e.g. "Gluten-Free,Nut-Free")
        #[arg(long, value_delimiter = ',')]
        allergy: Option<Vec<String>>,

        /// Free-text allergies
        #[arg(long)]
        allergy_other: Option<String>,

        /// Meal types (e.g. "Breakfast,Dinner")
        #[arg(long = "type", value_delimiter = ',')]
        recipe_type: Option<Vec<String>>,
    },
}

/// Saved recipe subcommands
#[derive(Subcommand, Debug)]
pub enum SavedCommands {
    /// List saved recipes with details
    List {
        /// Print recipe IDs only
        #[arg(long)]
        ids: bool,
    },

    /// Save a recipe
    Add {
        /// Recipe ID
        id: String,
    },

    /// Remove a saved recipe
    Remove {
        /// Recipe ID
        id: String,
    },

    /// Check whether a recipe is saved
    Check {
        /// Recipe ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_filters() {
        let cli = Cli::parse_from([
            "cooked", "search", "pasta", "--cuisine", "italian", "-i", "gluten,dairy", "--page",
            "2",
        ]);
        match cli.command {
            Commands::Search {
                filters,
                pagination,
            } => {
                assert_eq!(filters.query.as_deref(), Some("pasta"));
                assert_eq!(filters.intolerances, vec!["gluten", "dairy"]);
                assert_eq!(pagination.page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_ingredients_comma_and_space() {
        let cli = Cli::parse_from(["cooked", "ingredients", "egg,flour", "milk"]);
        match cli.command {
            Commands::Ingredients { ingredients, .. } => {
                assert_eq!(ingredients, vec!["egg", "flour", "milk"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::parse_from(["cooked", "daily", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_prefs_set_omitted_lists_are_none() {
        let cli = Cli::parse_from(["cooked", "prefs", "set", "--diet", "Vegan"]);
        match cli.command {
            Commands::Prefs(PrefsCommands::Set {
                cuisine, diet, ..
            }) => {
                assert!(cuisine.is_none());
                assert_eq!(diet, Some(vec!["Vegan".to_string()]));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_by_nutrients() {
        let cli = Cli::parse_from(["cooked", "by-nutrients", "--max-calories", "500", "-n", "3"]);
        match cli.command {
            Commands::ByNutrients { bounds, limit } => {
                assert_eq!(bounds.max_calories, Some(500));
                assert_eq!(limit, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_by_nutrients_requires_a_bound() {
        assert!(Cli::try_parse_from(["cooked", "by-nutrients"]).is_err());
    }

    #[test]
    fn test_profile_set_parses_birthday() {
        let cli = Cli::parse_from(["cooked", "profile", "set", "--birthday", "1990-04-01"]);
        match cli.command {
            Commands::Profile(ProfileCommands::Set { name, birthday }) => {
                assert!(name.is_none());
                assert_eq!(birthday, NaiveDate::from_ymd_opt(1990, 4, 1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_profile_set_rejects_bad_input() {
        assert!(Cli::try_parse_from(["cooked", "profile", "set"]).is_err());
        assert!(Cli::try_parse_from(["cooked", "profile", "set", "--birthday", "04/01/1990"]).is_err());
    }

    #[test]
    fn test_ingredients_required() {
        assert!(Cli::try_parse_from(["cooked", "ingredients"]).is_err());
    }
}
