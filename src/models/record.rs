use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One maintenance event, as persisted in the `maintenanceRecords` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub item: String,
    pub price: f64,
    pub technician: String,
    #[serde(default)]
    pub notes: String,
    /// Set once by the store when the record is created.
    pub recorded_at: DateTime<Local>,
    /// When the serviced work actually happened, if the user said so.
    #[serde(default)]
    pub service_at: Option<NaiveDateTime>,
}

impl Record {
    pub fn recorded_str(&self) -> String {
        self.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn service_str(&self) -> String {
        self.service_at
            .map(|s| s.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }

    /// Copy the editable part of `fields` into the record.
    /// `id` and `recorded_at` are left alone.
    pub(crate) fn apply(&mut self, fields: RecordFields) {
        self.item = fields.item;
        self.price = fields.price;
        self.technician = fields.technician;
        self.notes = fields.notes;
        self.service_at = fields.service_at;
    }
}

/// User-supplied fields of a record (form submit / edit confirm).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordFields {
    pub item: String,
    pub price: f64,
    pub technician: String,
    pub notes: String,
    pub service_at: Option<NaiveDateTime>,
}

impl RecordFields {
    pub fn new(item: &str, price: f64, technician: &str, notes: &str) -> Self {
        Self {
            item: item.to_string(),
            price,
            technician: technician.to_string(),
            notes: notes.to_string(),
            service_at: None,
        }
    }

    pub fn with_service_at(mut self, at: Option<NaiveDateTime>) -> Self {
        self.service_at = at;
        self
    }

    /// Start an edit from the current values of a record.
    pub fn from_record(r: &Record) -> Self {
        Self {
            item: r.item.clone(),
            price: r.price,
            technician: r.technician.clone(),
            notes: r.notes.clone(),
            service_at: r.service_at,
        }
    }

    /// Trim the text fields the way the form does before validation.
    pub(crate) fn normalized(mut self) -> Self {
        self.item = self.item.trim().to_string();
        self.technician = self.technician.trim().to_string();
        // -0 is stored as 0
        self.price += 0.0;
        self
    }
}
