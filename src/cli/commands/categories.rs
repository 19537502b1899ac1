use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the category vocabulary accepted by `add` and `edit`.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let set = cfg.category_set();
    if set.is_open() {
        info("No categories configured: any item name is accepted.");
        return Ok(());
    }

    println!("Categories:");
    for c in set.iter() {
        println!("- {}", c);
    }
    Ok(())
}
