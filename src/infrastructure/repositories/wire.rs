// src/infrastructure/repositories/wire.rs
use serde::Deserialize;
use std::fmt;

/// Backends hand out ids either as strings or as integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum RemoteId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteId::Text(id) => f.write_str(id),
            RemoteId::Number(id) => write!(f, "{id}"),
        }
    }
}

/// Decodes each row, dropping (and logging) those that fail.
pub(super) fn decode_rows<R, T, F>(collection: &str, rows: Vec<R>, mut decode: F) -> Vec<T>
where
    F: FnMut(R) -> crate::domain::errors::DomainResult<T>,
{
    rows.into_iter()
        .filter_map(|row| match decode(row) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(collection, error = %err, "skipping malformed record");
                None
            }
        })
        .collect()
}
