//! Profile backend commands: login, registration, profile and preferences

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::info;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::ProfileApi;
use crate::error::{ApiError, Result};
use crate::models::{ProfileUpdate, UserPreferences, UserProfile};
use crate::output::json;

fn prompt_email(email: Option<&str>) -> Result<String> {
    match email {
        Some(email) => Ok(email.trim().to_string()),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?),
    }
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, email: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;

    let email = prompt_email(email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    let auth = backend.login(&email, &password).await?;
    info!("Logged in as {}", auth.user.email);
    println!("{} Logged in as {}", "✓".green(), auth.user.email.bold());
    Ok(())
}

/// Run the register command
pub async fn register(opts: &GlobalOptions, email: Option<&str>, name: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;

    let email = prompt_email(email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let auth = backend.register(&email, &password, name).await?;
    println!(
        "{} Account created for {}",
        "✓".green(),
        auth.user.email.bold()
    );
    println!(
        "  Set your preferences with {}",
        "cooked prefs set --diet ... --type ...".cyan()
    );
    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if ctx.backend()?.logout()? {
        println!("{} Logged out", "✓".green());
    } else {
        println!("Not logged in");
    }
    Ok(())
}

fn print_profile(user: &UserProfile, format: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", json::format_json(user)?);
        return Ok(());
    }

    let list = |items: &[String]| {
        if items.is_empty() {
            "-".dimmed().to_string()
        } else {
            items.join(", ")
        }
    };
    let prefs = &user.preferences;

    match &user.name {
        Some(name) => println!("{} <{}>", name.bold(), user.email),
        None => println!("{}", user.email.bold()),
    }
    if let Some(birthday) = &user.birthday {
        println!("  Birthday:   {}", birthday);
    }
    println!("  Cuisines:   {}", list(&prefs.cuisines));
    println!("  Diets:      {}", list(&prefs.diets));
    println!("  Allergies:  {}", list(&prefs.allergies));
    if let Some(other) = &prefs.allergy_other {
        println!("  Other:      {}", other);
    }
    println!("  Meal types: {}", list(&prefs.recipe_types));
    Ok(())
}

/// Run the profile set command. Blank names are not sent.
pub async fn profile_set(
    opts: &GlobalOptions,
    name: Option<&str>,
    birthday: Option<NaiveDate>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;

    let update = ProfileUpdate {
        name: name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        birthday: birthday.map(|d| d.format("%Y-%m-%d").to_string()),
    };
    if update.is_empty() {
        return Err(ApiError::BadRequest("nothing to update".into()).into());
    }
    let user = backend.update_profile(&update).await?;

    if ctx.format != OutputFormat::Json {
        println!("{} Profile updated\n", "✓".green());
    }
    print_profile(&user, ctx.format)
}

/// Run the profile show and prefs show commands
pub async fn show(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let user = ctx.backend()?.current_user().await?;
    print_profile(&user, ctx.format)
}

/// Preference lists given on the command line; `None` keeps the stored list
#[derive(Debug, Default, Clone)]
pub struct PreferenceUpdate {
    pub cuisines: Option<Vec<String>>,
    pub diets: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
    pub allergy_other: Option<String>,
    pub recipe_types: Option<Vec<String>>,
}

impl PreferenceUpdate {
    /// Merge into the stored preferences. An empty `allergy_other` clears it.
    pub fn apply(self, mut prefs: UserPreferences) -> UserPreferences {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        if let Some(cuisines) = self.cuisines {
            prefs.cuisines = clean(cuisines);
        }
        if let Some(diets) = self.diets {
            prefs.diets = clean(diets);
        }
        if let Some(allergies) = self.allergies {
            prefs.allergies = clean(allergies);
        }
        if let Some(other) = self.allergy_other {
            let other = other.trim();
            prefs.allergy_other = (!other.is_empty()).then(|| other.to_string());
        }
        if let Some(types) = self.recipe_types {
            prefs.recipe_types = clean(types);
        }
        prefs
    }
}

/// Run the prefs set command.
///
/// Cached responses were built from the old preferences, so the response
/// cache is dropped after a successful update.
pub async fn prefs_set(opts: &GlobalOptions, update: PreferenceUpdate) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;

    let current = backend.current_user().await?;
    let prefs = update.apply(current.preferences);
    let user = backend.update_preferences(&prefs).await?;

    if let Ok(agg) = ctx.aggregator() {
        agg.clear_cache();
    }

    if ctx.format != OutputFormat::Json {
        println!("{} Preferences updated\n", "✓".green());
    }
    print_profile(&user, ctx.format)
}
