use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm_or_assume;
use crate::utils::money::format_price;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        let Some(record) = store.get(*id) else {
            warning(format!("No record with id {}; nothing deleted.", id));
            return Ok(());
        };

        let prompt = format!(
            "Delete record {} ({} {} by {})? This action is irreversible.",
            id,
            record.item,
            format_price(record.price),
            record.technician
        );

        if !confirm_or_assume(&prompt, *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        if store.delete(*id)? {
            success(format!("Record {} has been deleted.", id));
            ttlog_soft(store.kv().conn(), "del", &id.to_string(), "record deleted");
        }
    }

    Ok(())
}
