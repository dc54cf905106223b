//! Common CLI types shared across commands

use crate::models::{SortDirection, SortKey};

/// Sort direction for search results
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortDir {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl From<SortDir> for SortDirection {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => SortDirection::Asc,
            SortDir::Desc => SortDirection::Desc,
        }
    }
}

/// Sort keys exposed on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortBy {
    Popularity,
    Healthiness,
    Price,
    Time,
    Random,
    MaxUsedIngredients,
    MinMissingIngredients,
    Calories,
    MetaScore,
}

impl From<SortBy> for SortKey {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::Popularity => SortKey::Popularity,
            SortBy::Healthiness => SortKey::Healthiness,
            SortBy::Price => SortKey::Price,
            SortBy::Time => SortKey::Time,
            SortBy::Random => SortKey::Random,
            SortBy::MaxUsedIngredients => SortKey::MaxUsedIngredients,
            SortBy::MinMissingIngredients => SortKey::MinMissingIngredients,
            SortBy::Calories => SortKey::Calories,
            SortBy::MetaScore => SortKey::MetaScore,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - recipe cards with color (global default)
    #[default]
    Pretty,
    /// Table format - one row per recipe
    Table,
    /// JSON format - structured for scripts
    Json,
}
