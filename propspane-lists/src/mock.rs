//! Offline list source.

use crate::error::ListsResult;
use crate::source::ListSource;
use async_trait::async_trait;
use propspane_schema::DropdownOption;
use tracing::debug;

/// Fixed placeholder lists for local execution. No I/O, never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockListSource;

impl MockListSource {
    pub fn lists() -> Vec<DropdownOption> {
        vec![
            DropdownOption::new("1", "Mock List 1"),
            DropdownOption::new("2", "Mock List 2"),
        ]
    }
}

#[async_trait]
impl ListSource for MockListSource {
    fn source_name(&self) -> &'static str {
        "mock"
    }

    async fn load_options(&self) -> ListsResult<Vec<DropdownOption>> {
        debug!("Serving mock lists");
        Ok(Self::lists())
    }
}
