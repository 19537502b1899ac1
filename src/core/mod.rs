pub mod log;
pub mod query;
pub mod store;
pub mod summary;

pub use query::filter;
pub use store::{RECORDS_KEY, RecordStore};
pub use summary::{Summary, summarize};
