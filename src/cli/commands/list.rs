use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Summary, filter, summarize};
use crate::errors::AppResult;
use crate::models::category::CategoryFilter;
use crate::models::record::Record;
use crate::ui::messages::{header, info};
use crate::utils::money::format_price;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { category, search } = cmd {
        let store = open_store(cfg)?;
        let cat = CategoryFilter::from_arg(category.as_deref());
        let view = filter(store.all(), &cat, search);

        if view.is_empty() {
            info("No records found.");
            return Ok(());
        }

        header(format!("Maintenance records ({})", view.len()));
        print!("{}", records_table(&view, cfg.notes_width).render());
        println!();
        print_summary(&summarize(view.iter().copied()), &cfg.currency);
    }
    Ok(())
}

fn records_table(view: &[&Record], notes_width: usize) -> Table {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Recorded"),
        Column::left("Service"),
        Column::left("Item"),
        Column::right("Price"),
        Column::left("Technician"),
        Column::left("Notes").wrapped(notes_width),
    ]);

    for r in view {
        table.add_row(vec![
            r.id.to_string(),
            r.recorded_str(),
            r.service_str(),
            r.item.clone(),
            format_price(r.price),
            r.technician.clone(),
            r.notes.clone(),
        ]);
    }

    table
}

/// Totals block shared with the `summary` command.
pub(crate) fn print_summary(summary: &Summary, currency: &str) {
    let mut table = Table::new(vec![Column::left("Category"), Column::right("Subtotal")]);
    for (item, sub) in &summary.by_category {
        table.add_row(vec![item.clone(), format_price(*sub)]);
    }
    print!("{}", table.render());

    println!(
        "Total: {} {} ({} record(s))",
        summary.total_display(),
        currency,
        summary.count
    );
}
