//! Pagination argument types for CLI commands

use clap::Args;

/// Page selection for the search command
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (0-indexed)
    #[arg(long, short = 'p', default_value_t = 0)]
    pub page: usize,

    /// Results per page (defaults to `page_size` from config)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u16).range(1..=100))]
    pub page_size: Option<u16>,
}

impl PaginationArgs {
    /// Resolve `(page, page_size)` against the configured default size
    pub fn resolve(&self, default_size: usize) -> (usize, usize) {
        let size = self.page_size.map(usize::from).unwrap_or(default_size);
        (self.page, size)
    }
}
