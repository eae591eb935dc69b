//! Product group lister backed by `GET /api/product-groups`.

use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, error, info};

use crate::error::WidgetError;
use crate::http::Transport;
use crate::model::ProductGroupList;
use crate::widgets::ToolReply;

pub const PRODUCT_GROUPS_PATH: &str = "/api/product-groups";

#[derive(Clone)]
pub struct ProductGroups {
    transport: Arc<dyn Transport>,
}

impl ProductGroups {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch every product group the catalog knows about.
    pub async fn list(&self) -> Result<ToolReply<ProductGroupList>, WidgetError> {
        debug!(path = PRODUCT_GROUPS_PATH, "fetching product groups");

        let response = self
            .transport
            .get(PRODUCT_GROUPS_PATH, &[])
            .await
            .inspect_err(|e| error!("product-groups transport failure: {}", e))?;

        if !response.is_success() {
            let body = response.text();
            error!(status = response.status, body = %body, "product-groups upstream error");
            return Err(WidgetError::upstream(
                response.status,
                format!(
                    "Failed to fetch product groups: {} - {}",
                    response.status, body
                ),
            ));
        }

        let groups: Vec<String> = response
            .json()
            .inspect_err(|e| error!("product-groups decode failure: {}", e))?;
        info!(count = groups.len(), "fetched product groups");

        let summary = format!(
            "Found {} product groups: {}",
            groups.len(),
            groups.iter().join(", ")
        );
        Ok(ToolReply::new(ProductGroupList::new(groups)).with_summary(summary))
    }
}
