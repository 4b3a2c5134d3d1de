//! List source abstraction.
//!
//! Defines the capability every list provider implements and the dispatch
//! from [`EnvironmentType`] to a concrete provider.

use crate::environment::EnvironmentType;
use crate::error::{ListsError, ListsResult};
use crate::mock::MockListSource;
use crate::sharepoint::SharePointListSource;
use async_trait::async_trait;
use propspane_schema::DropdownOption;
use reqwest::Client;

/// Produces the ordered set of lists a user may pick from.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Short name used in log output.
    fn source_name(&self) -> &'static str;

    /// Loads every selectable list, in the order the source returns them.
    async fn load_options(&self) -> ListsResult<Vec<DropdownOption>>;
}

/// Picks the list source for an execution mode.
///
/// Connected mode needs the site's absolute URL and the host's authenticated
/// client. Local mode ignores both.
pub fn select_list_source(
    environment: EnvironmentType,
    site_url: Option<&str>,
    client: &Client,
) -> ListsResult<Box<dyn ListSource>> {
    match environment {
        EnvironmentType::Local => Ok(Box::new(MockListSource)),
        EnvironmentType::Connected => {
            let site_url = site_url
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| {
                    ListsError::Config("connected environment requires a site URL".to_string())
                })?;
            Ok(Box::new(SharePointListSource::new(client.clone(), site_url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_selects_mock() {
        let source = select_list_source(EnvironmentType::Local, None, &Client::new()).unwrap();
        assert_eq!(source.source_name(), "mock");
    }

    #[test]
    fn connected_selects_sharepoint() {
        let source = select_list_source(
            EnvironmentType::Connected,
            Some("https://contoso.sharepoint.com/sites/dev"),
            &Client::new(),
        )
        .unwrap();
        assert_eq!(source.source_name(), "sharepoint");
    }

    #[test]
    fn connected_without_site_is_config_error() {
        let result = select_list_source(EnvironmentType::Connected, None, &Client::new());
        assert!(matches!(result, Err(ListsError::Config(_))));

        let result = select_list_source(EnvironmentType::Connected, Some("  "), &Client::new());
        assert!(matches!(result, Err(ListsError::Config(_))));
    }
}
