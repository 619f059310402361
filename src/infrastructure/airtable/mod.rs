mod client;
mod query;
mod record;

pub use client::{AirtableClient, DEFAULT_API_URL, DELETE_BATCH_SIZE};
pub use query::{ListOptions, SortDirection, SortSpec, field_equals, field_or_record_id};
pub use record::{AirtablePage, AirtableRecord, CatalogFields};
