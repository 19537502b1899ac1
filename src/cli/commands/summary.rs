use crate::cli::commands::list::print_summary;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{filter, summarize};
use crate::errors::AppResult;
use crate::models::category::CategoryFilter;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { category, search } = cmd {
        let store = open_store(cfg)?;
        let cat = CategoryFilter::from_arg(category.as_deref());
        let view = filter(store.all(), &cat, search);
        print_summary(&summarize(view), &cfg.currency);
    }
    Ok(())
}
