use crate::{domain::primary_key::PrimaryKeyColumn, model::product::ProductRow};
use serde::Serialize;

/// A product as returned to callers: the raw row plus a guaranteed `id` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductResponse(pub ProductRow);

impl ProductResponse {
    /// Adds `id` from the primary-key column unless the row already has an
    /// `id` key or the key column is null/missing. Never renames or removes.
    pub fn normalize(row: ProductRow, primary_key: &PrimaryKeyColumn) -> Self {
        let mut row = row;

        if !row.contains_key("id") {
            let key_value = row
                .get(primary_key.as_str())
                .filter(|value| !value.is_null())
                .cloned();

            if let Some(value) = key_value {
                row.insert("id".to_string(), value);
            }
        }

        Self(row)
    }

    pub fn into_inner(self) -> ProductRow {
        self.0
    }
}
