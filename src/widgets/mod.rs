//! The three tool widgets.
//!
//! Each widget is a stateless handler: it takes a typed input, makes at most one
//! outbound call through a [`Transport`](crate::http::Transport), and returns a
//! [`ToolReply`] or a [`WidgetError`](crate::error::WidgetError).

pub mod fortune;
pub mod product_groups;
pub mod retailer_search;

pub use fortune::{MagicEightBall, ANSWER_TABLE};
pub use product_groups::ProductGroups;
pub use retailer_search::RetailerSearch;

/// Successful widget output.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolReply<T> {
    /// Structured content handed to the host and the renderers.
    pub structured: T,
    /// Human-readable summary, sent as the single text content item.
    pub summary: Option<String>,
}

impl<T> ToolReply<T> {
    pub fn new(structured: T) -> Self {
        Self {
            structured,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
