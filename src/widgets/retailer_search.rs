//! Paginated retailer search backed by `GET /api/retailers/search`.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::WidgetError;
use crate::http::{RawResponse, Transport};
use crate::model::{
    ApiErrorBody, RetailerSearchQuery, SearchEnvelope, SearchResult, DEFAULT_LIMIT,
};
use crate::widgets::ToolReply;

pub const RETAILER_SEARCH_PATH: &str = "/api/retailers/search";

#[derive(Clone)]
pub struct RetailerSearch {
    transport: Arc<dyn Transport>,
}

impl RetailerSearch {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Reject input the upstream would never match, before any outbound call.
    pub fn validate(query: &RetailerSearchQuery) -> Result<(), WidgetError> {
        if query.product_group.is_empty() {
            return Err(WidgetError::validation("productGroup must not be empty"));
        }
        if query.page < 1 {
            return Err(WidgetError::validation(format!(
                "page must be at least 1, got {}",
                query.page
            )));
        }
        Ok(())
    }

    pub async fn search(
        &self,
        query: RetailerSearchQuery,
    ) -> Result<ToolReply<SearchResult>, WidgetError> {
        Self::validate(&query)?;

        let params = [
            ("productGroup", query.product_group.clone()),
            ("page", query.page.to_string()),
        ];
        debug!(product_group = %query.product_group, page = query.page, "searching retailers");

        let response = self
            .transport
            .get(RETAILER_SEARCH_PATH, &params)
            .await
            .inspect_err(|e| error!("retailer-search transport failure: {}", e))?;

        if !response.is_success() {
            let err = upstream_error(&response);
            error!(status = response.status, "retailer-search upstream error: {}", err);
            return Err(err);
        }

        let envelope: SearchEnvelope = response
            .json()
            .inspect_err(|e| error!("retailer-search decode failure: {}", e))?;

        let retailers = envelope.data.unwrap_or_default();
        let count = retailers.len();
        let result = SearchResult {
            retailers,
            product_group: query.product_group.clone(),
            page: envelope.page.filter(|p| *p > 0).unwrap_or(query.page),
            limit: envelope.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT),
            count,
        };
        info!(count, page = result.page, "retailer search complete");

        let summary = format!(
            "Found {} retailers for \"{}\" (Page {})",
            count, query.product_group, query.page
        );
        Ok(ToolReply::new(result).with_summary(summary))
    }
}

fn upstream_error(response: &RawResponse) -> WidgetError {
    let message = serde_json::from_slice::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| format!("Failed to search retailers: {}", response.status));
    WidgetError::upstream(response.status, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::widgets::testing::MockTransport;
    use serde_json::json;

    fn searcher(mock: &MockTransport) -> RetailerSearch {
        RetailerSearch::new(Arc::new(mock.clone()))
    }

    fn retailer_json(name: &str) -> serde_json::Value {
        json!({
            "id": format!("id-{name}"),
            "name": name,
            "category": { "kind": "Textile", "product": "Silk" },
            "country": "China",
            "contact": { "email": format!("{name}@example.com") },
            "exhibition": []
        })
    }

    #[tokio::test]
    async fn passes_retailers_through() {
        let body = json!({
            "data": [retailer_json("r1"), retailer_json("r2")],
            "page": 1,
            "limit": 10
        });
        let mock = MockTransport::replying(200, &body.to_string());
        let reply = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk"))
            .await
            .unwrap();

        let result = &reply.structured;
        assert_eq!(result.count, 2);
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 10);
        assert_eq!(result.product_group, "Silk");
        assert_eq!(
            serde_json::to_value(&result.retailers).unwrap(),
            json!([retailer_json("r1"), retailer_json("r2")])
        );
        assert_eq!(
            reply.summary.as_deref(),
            Some(r#"Found 2 retailers for "Silk" (Page 1)"#)
        );
    }

    #[tokio::test]
    async fn sends_product_group_and_page() {
        let mock = MockTransport::replying(200, r#"{"data": []}"#);
        searcher(&mock)
            .search(RetailerSearchQuery::new("Wool & Cashmere").with_page(3))
            .await
            .unwrap();

        let requests = mock.recorded();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/api/retailers/search");
        assert_eq!(
            requests[0].query,
            vec![
                ("productGroup".to_string(), "Wool & Cashmere".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn missing_envelope_fields_fall_back() {
        let mock = MockTransport::replying(200, r#"{"data": []}"#);
        let reply = searcher(&mock)
            .search(RetailerSearchQuery::new("Cotton").with_page(4))
            .await
            .unwrap();

        assert_eq!(reply.structured.count, 0);
        assert_eq!(reply.structured.page, 4);
        assert_eq!(reply.structured.limit, 10);
    }

    #[tokio::test]
    async fn missing_data_is_empty() {
        let mock = MockTransport::replying(200, r#"{"page": 2, "limit": 5}"#);
        let reply = searcher(&mock)
            .search(RetailerSearchQuery::new("Cotton").with_page(2))
            .await
            .unwrap();

        assert!(reply.structured.retailers.is_empty());
        assert_eq!(reply.structured.page, 2);
        assert_eq!(reply.structured.limit, 5);
    }

    #[tokio::test]
    async fn summary_uses_requested_page() {
        let mock = MockTransport::replying(200, r#"{"data": [], "page": 7}"#);
        let reply = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk").with_page(2))
            .await
            .unwrap();

        assert_eq!(reply.structured.page, 7);
        assert_eq!(
            reply.summary.as_deref(),
            Some(r#"Found 0 retailers for "Silk" (Page 2)"#)
        );
    }

    #[tokio::test]
    async fn upstream_error_field_is_surfaced() {
        let mock = MockTransport::replying(429, r#"{"error":"rate limited"}"#);
        let err = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Upstream);
        assert_eq!(err.status, Some(429));
        assert_eq!(err.message, "rate limited");
    }

    #[tokio::test]
    async fn non_json_error_body_uses_generic_message() {
        let mock = MockTransport::replying(502, "<html>Bad Gateway</html>");
        let err = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk"))
            .await
            .unwrap_err();

        assert_eq!(err.message, "Failed to search retailers: 502");
    }

    #[tokio::test]
    async fn empty_product_group_is_rejected_without_a_call() {
        let mock = MockTransport::replying(200, r#"{"data": []}"#);
        let err = searcher(&mock)
            .search(RetailerSearchQuery::new(""))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(mock.recorded().is_empty());
    }

    #[tokio::test]
    async fn whitespace_product_group_is_forwarded() {
        let mock = MockTransport::replying(200, r#"{"data": []}"#);
        searcher(&mock)
            .search(RetailerSearchQuery::new("  "))
            .await
            .unwrap();
        assert_eq!(mock.recorded()[0].query[0].1, "  ");
    }

    #[tokio::test]
    async fn null_contact_and_exhibitions_pass_through() {
        let body = json!({
            "data": [{
                "name": "A",
                "category": { "kind": "Textile", "product": "Silk" },
                "country": "CN",
                "contact": null,
                "exhibition": null
            }]
        });
        let mock = MockTransport::replying(200, &body.to_string());
        let reply = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk"))
            .await
            .unwrap();

        let retailer = &reply.structured.retailers[0];
        assert_eq!(reply.structured.count, 1);
        assert!(retailer.contact.is_none());
        assert!(retailer.exhibitions.is_empty());
    }

    #[tokio::test]
    async fn numeric_id_is_kept_verbatim() {
        let body = json!({
            "data": [{
                "id": 42,
                "name": "A",
                "category": { "kind": "Textile", "product": "Silk" },
                "country": "CN"
            }]
        });
        let mock = MockTransport::replying(200, &body.to_string());
        let reply = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk"))
            .await
            .unwrap();

        let retailer = &reply.structured.retailers[0];
        assert_eq!(retailer.id, Some(json!(42)));
        assert_eq!(serde_json::to_value(retailer).unwrap()["id"], json!(42));
    }

    #[tokio::test]
    async fn json_error_body_without_message_uses_generic_message() {
        for body in ["{}", r#"{"error":""}"#] {
            let mock = MockTransport::replying(500, body);
            let err = searcher(&mock)
                .search(RetailerSearchQuery::new("Silk"))
                .await
                .unwrap_err();

            assert_eq!(err.kind, ErrorKind::Upstream);
            assert_eq!(err.status, Some(500));
            assert_eq!(err.message, "Failed to search retailers: 500");
        }
    }

    #[tokio::test]
    async fn page_zero_is_rejected() {
        let mock = MockTransport::replying(200, r#"{"data": []}"#);
        let err = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk").with_page(0))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(mock.recorded().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_passed_through() {
        let mock = MockTransport::failing(WidgetError::transport("dns error"));
        let err = searcher(&mock)
            .search(RetailerSearchQuery::new("Silk"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.message, "dns error");
    }
}
