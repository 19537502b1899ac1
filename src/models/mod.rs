pub mod category;
pub mod record;
