//! # chainbridge-widgets
//!
//! Tool widgets for the ChainBridge retailer catalog, served over MCP, plus the
//! views that render their results.
//!
//! ## Tools
//! - **`magic-8-ball`**: deterministic canned answer for a question, no I/O.
//! - **`product-groups`**: lists the catalog's product categories
//!   (`GET {base}/api/product-groups`).
//! - **`retailer-search`**: paginated retailer lookup by product group
//!   (`GET {base}/api/retailers/search?productGroup=..&page=..`).
//!
//! ## Architecture
//!
//! 1. **Widgets** are stateless handlers returning `Result<ToolReply<T>, WidgetError>`.
//! 2. A **`Transport`** performs the single outbound GET; `HttpTransport` is the reqwest one.
//! 3. **`ChainBridgeTools`** adapts widgets to rmcp tool results.
//! 4. **Renderers** turn `(input, output)` into a `View` tree.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use chainbridge_widgets::config::WidgetConfig;
//! use chainbridge_widgets::http::HttpTransport;
//! use chainbridge_widgets::model::RetailerSearchQuery;
//! use chainbridge_widgets::render::render_retailer_search;
//! use chainbridge_widgets::widgets::RetailerSearch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WidgetConfig::from_env();
//!     let search = RetailerSearch::new(Arc::new(HttpTransport::new(&config)?));
//!
//!     let query = RetailerSearchQuery::new("Silk");
//!     let reply = search.search(query.clone()).await?;
//!     println!("{}", render_retailer_search(Some(&query), Some(&reply.structured)).to_html());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod options;
pub mod render;
pub mod server;
pub mod widgets;

pub use config::WidgetConfig;
pub use error::{ErrorKind, WidgetError};
pub use http::{HttpTransport, RawResponse, Transport};
pub use server::ChainBridgeTools;
pub use widgets::ToolReply;

// Re-export rmcp for convenience
pub use rmcp;
