use crate::errors::AppResult;
use crate::models::record::Record;

/// Pretty JSON array of the records, in their stored shape.
pub fn to_json<'a, I>(records: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let view: Vec<&Record> = records.into_iter().collect();
    Ok(serde_json::to_string_pretty(&view)?)
}
