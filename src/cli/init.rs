//! Init command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{RecipeProvider, SpoonacularClient};
use crate::config::Config;
use crate::error::Result;

/// Timeout for the key check; init should not hang on a slow network
const KEY_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the init command
///
/// Prompts for the Spoonacular API key and the profile backend URL, checks
/// the key with a one-result autocomplete call, and writes the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let path = opts.config_path()?;

    println!("{}", "Welcome to cooked!".bold().green());
    println!("Let's set up your recipe sources.\n");

    // Start from whatever is already on disk so tuning fields survive re-init
    let mut config = Config::load_from(path.clone()).unwrap_or_default();
    opts.apply_to(&mut config);

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Enter your Spoonacular API key")
        .interact()?;
    let api_key = api_key.trim().to_string();

    let backend_url: String = Input::with_theme(&theme)
        .with_prompt("Profile backend URL")
        .default(config.backend_url.clone())
        .interact_text()?;

    println!("\n{}", "Checking API key...".cyan());
    let client = SpoonacularClient::new(api_key.clone(), KEY_CHECK_TIMEOUT)?
        .with_base_url(config.provider_url.clone());

    match client.autocomplete_recipe_search("pasta", 1).await {
        Ok(_) => println!("{}", "✓ API key works!".green()),
        Err(e) => {
            println!("{} {}", "⚠ Key check failed:".yellow(), e);
            let keep = Confirm::with_theme(&theme)
                .with_prompt("Save this key anyway?")
                .default(false)
                .interact()?;
            if !keep {
                println!("Nothing saved.");
                return Ok(());
            }
        }
    }

    config.api_key = Some(api_key);
    config.backend_url = backend_url.trim().to_string();
    config.save_to(path.clone())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Today's recipe", "cooked daily".cyan());
    println!("  {} - Search recipes", "cooked search pasta".cyan());
    println!("  {} - Log in for personalized picks", "cooked login".cyan());

    Ok(())
}
