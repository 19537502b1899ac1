pub mod add;
pub mod categories;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::config::Config;
use crate::core::RecordStore;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open the configured database and load the record store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteKv>> {
    let kv = SqliteKv::open(&cfg.database_path())?;
    let store = RecordStore::load(kv, cfg.category_set());
    if let Some(w) = store.load_warning() {
        warning(w);
    }
    Ok(store)
}
