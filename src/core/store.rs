//! Record store: the ordered collection of maintenance records and the only
//! place where records are created, changed or removed.

use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::category::CategorySet;
use crate::models::record::{Record, RecordFields};
use chrono::Local;

/// Key under which the whole record sequence is persisted.
pub const RECORDS_KEY: &str = "maintenanceRecords";

pub struct RecordStore<S: KeyValueStore> {
    kv: S,
    categories: CategorySet,
    records: Vec<Record>,
    load_warning: Option<String>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Read the persisted sequence.
    ///
    /// Never fails: a missing key gives an empty store, an unreadable or
    /// corrupt blob gives an empty store plus a load warning, and single
    /// records breaking the record invariants are skipped with a warning.
    pub fn load(kv: S, categories: CategorySet) -> Self {
        let (records, load_warning) = match kv.get(RECORDS_KEY) {
            Ok(None) => (Vec::new(), None),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Record>>(&raw) {
                Ok(v) => sanitize(v),
                Err(e) => (
                    Vec::new(),
                    Some(format!("stored records could not be parsed ({e}); starting empty")),
                ),
            },
            Err(e) => (
                Vec::new(),
                Some(format!("stored records could not be read ({e}); starting empty")),
            ),
        };

        Self {
            kv,
            categories,
            records,
            load_warning,
        }
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Full ordered sequence.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Validate, append and persist a new record.
    pub fn create(&mut self, fields: RecordFields) -> AppResult<&Record> {
        let fields = fields.normalized();
        self.validate(&fields)?;

        let record = Record {
            id: self.next_id()?,
            item: fields.item,
            price: fields.price,
            technician: fields.technician,
            notes: fields.notes,
            recorded_at: Local::now(),
            service_at: fields.service_at,
        };

        self.records.push(record);

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        let idx = self.records.len() - 1;
        Ok(&self.records[idx])
    }

    /// Replace the editable fields of record `id`.
    pub fn update(&mut self, id: i64, fields: RecordFields) -> AppResult<&Record> {
        let idx = self.position(id).ok_or(AppError::NotFound(id))?;

        let fields = fields.normalized();
        self.validate(&fields)?;

        let previous = self.records[idx].clone();
        self.records[idx].apply(fields);

        if let Err(e) = self.persist() {
            self.records[idx] = previous;
            return Err(e);
        }

        Ok(&self.records[idx])
    }

    /// Remove record `id`. Returns whether something was removed; an
    /// unknown id is not an error and writes nothing.
    pub fn delete(&mut self, id: i64) -> AppResult<bool> {
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };

        let removed = self.records.remove(idx);

        if let Err(e) = self.persist() {
            self.records.insert(idx, removed);
            return Err(e);
        }

        Ok(true)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Millisecond timestamp, bumped past the largest id already used.
    fn next_id(&self) -> AppResult<i64> {
        let now = Local::now().timestamp_millis();
        match self.records.iter().map(|r| r.id).max() {
            Some(max) if now <= max => max.checked_add(1).ok_or_else(|| {
                AppError::Persistence(format!("no id left after {max}; cannot add records"))
            }),
            _ => Ok(now),
        }
    }

    fn validate(&self, f: &RecordFields) -> AppResult<()> {
        let mut invalid = Vec::new();

        if f.item.is_empty() {
            invalid.push("item".to_string());
        } else if !self.categories.allows(&f.item) {
            invalid.push(format!("item (unknown category '{}')", f.item));
        }

        if !f.price.is_finite() || f.price < 0.0 {
            invalid.push("price".to_string());
        }

        if f.technician.is_empty() {
            invalid.push("technician".to_string());
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(invalid))
        }
    }

    /// Rewrite the whole sequence.
    fn persist(&mut self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.kv
            .set(RECORDS_KEY, &blob)
            .map_err(|e| match e {
                AppError::Persistence(msg) => AppError::Persistence(msg),
                other => AppError::Persistence(other.to_string()),
            })
    }
}

/// Drop stored records that break the record invariants: duplicate id
/// (first one wins), empty item or technician, negative or non-finite price.
/// Category membership is not checked here, the vocabulary may have changed
/// since the record was written.
fn sanitize(stored: Vec<Record>) -> (Vec<Record>, Option<String>) {
    let mut kept: Vec<Record> = Vec::with_capacity(stored.len());
    let mut dropped: Vec<String> = Vec::new();

    for mut r in stored {
        let reason = if kept.iter().any(|k| k.id == r.id) {
            Some("duplicate id")
        } else if r.item.trim().is_empty() {
            Some("empty item")
        } else if r.technician.trim().is_empty() {
            Some("empty technician")
        } else if !r.price.is_finite() || r.price < 0.0 {
            Some("invalid price")
        } else {
            None
        };

        match reason {
            Some(why) => dropped.push(format!("{} ({why})", r.id)),
            None => {
                r.price += 0.0;
                kept.push(r);
            }
        }
    }

    let warning = (!dropped.is_empty()).then(|| {
        format!(
            "{} stored record(s) skipped: {}",
            dropped.len(),
            dropped.join(", ")
        )
    });

    (kept, warning)
}
