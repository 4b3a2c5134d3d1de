//! Host-supplied execution context.

use propspane_lists::{EnvironmentType, ListSource, ListsResult, select_list_source};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Page the web part is placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Absolute URL of the current site, e.g. `https://contoso.sharepoint.com/sites/dev`.
    pub web_absolute_url: String,
}

/// Everything the host hands the web part at construction.
#[derive(Debug, Clone)]
pub struct WebPartContext {
    pub environment: EnvironmentType,
    pub page_context: Option<PageContext>,
    /// Authenticated client used for site requests in connected mode.
    pub http_client: Client,
}

impl WebPartContext {
    /// Offline workbench context. No site and an unauthenticated client.
    pub fn local() -> Self {
        Self {
            environment: EnvironmentType::Local,
            page_context: None,
            http_client: Client::new(),
        }
    }

    pub fn connected(web_absolute_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            environment: EnvironmentType::Connected,
            page_context: Some(PageContext {
                web_absolute_url: web_absolute_url.into(),
            }),
            http_client,
        }
    }

    pub fn web_absolute_url(&self) -> Option<&str> {
        self.page_context
            .as_ref()
            .map(|p| p.web_absolute_url.as_str())
    }

    /// List source matching this context's environment.
    pub fn list_source(&self) -> ListsResult<Box<dyn ListSource>> {
        select_list_source(self.environment, self.web_absolute_url(), &self.http_client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_context_has_no_site() {
        let ctx = WebPartContext::local();
        assert_eq!(ctx.environment, EnvironmentType::Local);
        assert!(ctx.web_absolute_url().is_none());
        assert_eq!(ctx.list_source().unwrap().source_name(), "mock");
    }

    #[test]
    fn connected_context_exposes_site() {
        let ctx = WebPartContext::connected("https://contoso.sharepoint.com", Client::new());
        assert_eq!(ctx.web_absolute_url(), Some("https://contoso.sharepoint.com"));
        assert_eq!(ctx.list_source().unwrap().source_name(), "sharepoint");
    }

    #[test]
    fn connected_without_page_context_cannot_pick_a_source() {
        let ctx = WebPartContext {
            environment: EnvironmentType::Connected,
            page_context: None,
            http_client: Client::new(),
        };
        assert!(ctx.list_source().is_err());
    }
}
