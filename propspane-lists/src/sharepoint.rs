//! SharePoint REST list source.
//!
//! Reads the site's non-hidden lists from `/_api/web/lists`.

use crate::error::{ListsError, ListsResult};
use crate::source::ListSource;
use async_trait::async_trait;
use propspane_schema::DropdownOption;
use reqwest::{Client, header};
use serde::Deserialize;
use tracing::{debug, info};

const LISTS_PATH: &str = "/_api/web/lists";
const HIDDEN_FILTER: &str = "Hidden eq false";
const ODATA_ACCEPT: &str = "application/json;odata=nometadata";
const ODATA_VERSION: &str = "4.0";

/// REST response structures.
#[derive(Debug, Deserialize)]
struct ListCollection {
    value: Vec<ListEntry>,
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Title")]
    title: String,
}

/// Lists the current site's visible lists over the host's authenticated client.
#[derive(Debug, Clone)]
pub struct SharePointListSource {
    client: Client,
    web_url: String,
}

impl SharePointListSource {
    /// `web_url` is the site's absolute URL; a trailing slash is ignored.
    pub fn new(client: Client, web_url: impl Into<String>) -> Self {
        let web_url = web_url.into().trim_end_matches('/').to_string();
        Self { client, web_url }
    }

    /// Endpoint without the filter query.
    pub fn lists_url(&self) -> String {
        format!("{}{}", self.web_url, LISTS_PATH)
    }
}

#[async_trait]
impl ListSource for SharePointListSource {
    fn source_name(&self) -> &'static str {
        "sharepoint"
    }

    async fn load_options(&self) -> ListsResult<Vec<DropdownOption>> {
        let url = self.lists_url();
        debug!("Requesting visible lists from {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, ODATA_ACCEPT)
            .header("OData-Version", ODATA_VERSION)
            .query(&[("$filter", HIDDEN_FILTER)])
            .send()
            .await
            .map_err(|e| ListsError::Network(format!("list request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ListsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ListsError::Network(format!("failed to read list response: {e}")))?;
        let collection: ListCollection = serde_json::from_str(&body)
            .map_err(|e| ListsError::MalformedResponse(e.to_string()))?;

        let options: Vec<DropdownOption> = collection
            .value
            .into_iter()
            .map(|entry| DropdownOption::new(entry.id, entry.title))
            .collect();

        info!("Loaded {} lists from {}", options.len(), self.web_url);
        Ok(options)
    }
}
