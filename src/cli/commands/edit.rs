use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordFields;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm_or_assume;
use crate::utils::date::parse_service_at;
use crate::utils::money::{format_price, parse_price};

/// Edit an existing record. Flags left out keep the current value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        item,
        price,
        technician,
        notes,
        service_date,
        service_time,
        clear_service,
        yes,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let current = store.get(*id).ok_or(AppError::NotFound(*id))?;

        let mut fields = RecordFields::from_record(current);
        if let Some(v) = item {
            fields.item = v.clone();
        }
        if let Some(v) = price {
            fields.price = parse_price(v)?;
        }
        if let Some(v) = technician {
            fields.technician = v.clone();
        }
        if let Some(v) = notes {
            fields.notes = v.clone();
        }
        if *clear_service {
            fields.service_at = None;
        } else if service_date.is_some() {
            fields.service_at = parse_service_at(service_date.as_deref(), service_time.as_deref())?;
        }

        if fields == RecordFields::from_record(current) {
            info(format!("Record {} unchanged.", id));
            return Ok(());
        }

        let prompt = format!(
            "Update record {}: {} {} ({})?",
            id,
            fields.item,
            format_price(fields.price),
            fields.technician
        );
        if !confirm_or_assume(&prompt, *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        let record = store.update(*id, fields)?.clone();
        success(format!("Record {} updated.", record.id));

        ttlog_soft(
            store.kv().conn(),
            "edit",
            &record.id.to_string(),
            &format!(
                "{} | {} | {}",
                record.item,
                format_price(record.price),
                record.technician
            ),
        );
    }

    Ok(())
}
