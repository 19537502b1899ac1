use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::models::record::RecordFields;
use crate::ui::messages::success;
use crate::utils::date::parse_service_at;
use crate::utils::money::{format_price, parse_price};

/// Log a new maintenance record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        item,
        price,
        technician,
        notes,
        service_date,
        service_time,
    } = cmd
    {
        let price = parse_price(price)?;
        let service_at = parse_service_at(service_date.as_deref(), service_time.as_deref())?;

        let fields = RecordFields::new(item, price, technician, notes).with_service_at(service_at);

        let mut store = open_store(cfg)?;
        let record = store.create(fields)?.clone();

        success(format!(
            "Record {} saved: {} {} {} ({})",
            record.id,
            record.item,
            format_price(record.price),
            cfg.currency,
            record.technician
        ));

        ttlog_soft(
            store.kv().conn(),
            "add",
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
