use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::category::CategoryFilter;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        search,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let cat = CategoryFilter::from_arg(category.as_deref());

        if let Some(path) =
            ExportLogic::export(&store, *format, file.as_deref(), &cat, search, *force)?
        {
            ttlog_soft(
                store.kv().conn(),
                "export",
                format.as_str(),
                &format!("exported to {}", path.display()),
            );
        }
    }
    Ok(())
}
