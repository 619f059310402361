// src/infrastructure/airtable/client.rs
use reqwest::{RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::query::ListOptions;
use super::record::{
    AirtablePage, AirtableRecord, CreatePayload, FieldsPayload, RecordsResponse,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::http::error::{map_reqwest, map_status};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Airtable accepts at most this many record ids per batch delete.
pub const DELETE_BATCH_SIZE: usize = 10;

/// Thin client over the Airtable REST API for one base.
#[derive(Clone)]
pub struct AirtableClient {
    api_url: Url,
    base_id: String,
    token: String,
    http_client: reqwest::Client,
}

impl AirtableClient {
    pub fn new(
        api_url: &str,
        base_id: impl Into<String>,
        token: impl Into<String>,
        http_client: reqwest::Client,
    ) -> DomainResult<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|err| DomainError::validation(format!("invalid Airtable API URL: {err}")))?;
        if api_url.cannot_be_a_base() {
            return Err(DomainError::validation("Airtable API URL cannot be a base"));
        }
        Ok(Self {
            api_url,
            base_id: base_id.into(),
            token: token.into(),
            http_client,
        })
    }

    fn table_url(&self, table: &str, record_id: Option<&str>) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.base_id).push(table);
            if let Some(id) = record_id {
                segments.push(id);
            }
        }
        url
    }

    fn with_query(mut url: Url, pairs: &[(String, String)]) -> DomainResult<Url> {
        if !pairs.is_empty() {
            let query = serde_urlencoded::to_string(pairs)
                .map_err(|err| DomainError::Backend(format!("failed to encode query: {err}")))?;
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// Lists every record matching `options`, following `offset` pagination.
    pub async fn list<T: DeserializeOwned>(
        &self,
        table: &str,
        options: &ListOptions,
    ) -> DomainResult<Vec<AirtableRecord<T>>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let url = Self::with_query(
                self.table_url(table, None),
                &options.query_pairs(offset.as_deref()),
            )?;
            let page: AirtablePage<T> = self.send_json(self.http_client.get(url)).await?;
            records.extend(page.records);

            if options
                .max_records
                .is_some_and(|max| records.len() >= max as usize)
            {
                break;
            }
            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        tracing::debug!(table, count = records.len(), "airtable records listed");
        Ok(records)
    }

    pub async fn create<F, T>(&self, table: &str, fields: &F) -> DomainResult<AirtableRecord<T>>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = CreatePayload {
            records: [FieldsPayload { fields }],
        };
        let response: RecordsResponse<T> = self
            .send_json(self.http_client.post(self.table_url(table, None)).json(&payload))
            .await?;
        response
            .records
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Backend("Airtable returned no created record".into()))
    }

    pub async fn update<F, T>(
        &self,
        table: &str,
        record_id: &str,
        fields: &F,
    ) -> DomainResult<AirtableRecord<T>>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table, Some(record_id));
        self.send_json(self.http_client.patch(url).json(&FieldsPayload { fields }))
            .await
    }

    pub async fn delete(&self, table: &str, record_id: &str) -> DomainResult<()> {
        let url = self.table_url(table, Some(record_id));
        self.send(self.http_client.delete(url)).await.map(drop)
    }

    /// Deletes in chunks of [`DELETE_BATCH_SIZE`]; stops at the first failed chunk.
    pub async fn delete_many(&self, table: &str, record_ids: &[String]) -> DomainResult<()> {
        for chunk in record_ids.chunks(DELETE_BATCH_SIZE) {
            let pairs: Vec<(String, String)> = chunk
                .iter()
                .map(|id| ("records[]".to_string(), id.clone()))
                .collect();
            let url = Self::with_query(self.table_url(table, None), &pairs)?;
            self.send(self.http_client.delete(url)).await?;
            tracing::debug!(table, count = chunk.len(), "airtable records deleted");
        }
        Ok(())
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> DomainResult<T> {
        self.send(builder).await?.json().await.map_err(map_reqwest)
    }

    async fn send(&self, builder: RequestBuilder) -> DomainResult<Response> {
        let response = builder
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| status.to_string());
        tracing::warn!(status = %status, message = %message, "airtable request failed");
        Err(map_status(status, message))
    }
}

/// Airtable reports `{"error": {"type", "message"}}` or `{"error": "TYPE"}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    error
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| error.get("type").and_then(|t| t.as_str()))
        .or_else(|| error.as_str())
        .map(str::to_string)
}
