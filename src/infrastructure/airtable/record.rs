// src/infrastructure/airtable/record.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirtableRecord<T> {
    pub id: String,
    pub fields: T,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct AirtablePage<T> {
    pub records: Vec<AirtableRecord<T>>,
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct FieldsPayload<'a, T: ?Sized> {
    pub fields: &'a T,
}

#[derive(Debug, Serialize)]
pub(super) struct CreatePayload<'a, T: ?Sized> {
    pub records: [FieldsPayload<'a, T>; 1],
}

#[derive(Debug, Deserialize)]
pub(super) struct RecordsResponse<T> {
    pub records: Vec<AirtableRecord<T>>,
}

/// Columns of a catalog table. Every column may be blank in Airtable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFields {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Slug", default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_records_and_offset() {
        let page: AirtablePage<CatalogFields> = serde_json::from_str(
            r#"{"records":[{"id":"rec1","createdTime":"2025-01-02T03:04:05.000Z","fields":{"Name":"Y tế","Slug":"y-te"}}],"offset":"itr1"}"#,
        )
        .unwrap();
        assert_eq!(page.offset.as_deref(), Some("itr1"));
        assert_eq!(page.records[0].fields.slug.as_deref(), Some("y-te"));
        assert!(page.records[0].fields.status.is_none());
        assert!(page.records[0].created_time.is_some());
    }

    #[test]
    fn blank_fields_are_not_sent() {
        let fields = CatalogFields {
            status: Some("Disabled".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(FieldsPayload { fields: &fields }).unwrap();
        assert_eq!(json, serde_json::json!({"fields": {"Status": "Disabled"}}));
    }
}
