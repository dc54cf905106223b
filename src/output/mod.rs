//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{Recipe, RecipeDisplay, SearchPage};

pub mod json;
pub mod pretty;
pub mod table;

/// Types that can be rendered in any of the CLI output formats
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table | OutputFormat::Pretty => Ok(table::format_table(self)),
        }
    }
}

/// A borrowed list of recipes: cards in pretty mode, rows in table mode, and
/// the full recipe objects in JSON.
pub struct RecipeList<'a>(pub &'a [Recipe]);

impl Formattable for RecipeList<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self.0)?),
            OutputFormat::Table => {
                let rows: Vec<RecipeDisplay> = self.0.iter().map(RecipeDisplay::from).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Pretty => Ok(pretty::recipe_cards(self.0)),
        }
    }
}

impl Formattable for Recipe {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(&[RecipeDisplay::from(self)])),
            OutputFormat::Pretty => Ok(pretty::recipe_detail(self)),
        }
    }
}

impl Formattable for SearchPage {
    fn format(&self, format: OutputFormat) -> Result<String> {
        if let OutputFormat::Json = format {
            return Ok(json::format_json(self)?);
        }

        let mut out = RecipeList(&self.recipes).format(format)?;
        if !self.recipes.is_empty() {
            out.push_str(&format!(
                "\n\nShowing {}-{} of {}",
                self.offset.saturating_add(1),
                self.offset.saturating_add(self.recipes.len()),
                self.total_results
            ));
            if self.has_more {
                out.push_str(" (more with --page)");
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::fallback_recipes;

    #[test]
    fn test_recipe_list_formats() {
        colored::control::set_override(false);
        let recipes = fallback_recipes(2);
        let list = RecipeList(&recipes);

        assert!(list.format(OutputFormat::Table).unwrap().contains("DIFFICULTY"));
        assert!(list.format(OutputFormat::Pretty).unwrap().contains("(offline)"));
        assert!(list.format(OutputFormat::Json).unwrap().contains("\"data\""));
    }

    #[test]
    fn test_search_page_footer() {
        let page = SearchPage {
            recipes: fallback_recipes(2),
            total_results: 12,
            offset: 10,
            has_more: false,
        };
        let out = page.format(OutputFormat::Table).unwrap();
        assert!(out.contains("Showing 11-12 of 12"));
        assert!(!out.contains("--page"));
    }

    #[test]
    fn test_search_page_json_keeps_paging_fields() {
        let page = SearchPage {
            has_more: true,
            ..SearchPage::empty(0)
        };
        let out = page.format(OutputFormat::Json).unwrap();
        assert!(out.contains("\"hasMore\": true"));
        assert!(out.contains("\"totalResults\": 0"));
    }
}
