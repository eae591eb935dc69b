//! Tool inputs and outputs, plus the ChainBridge retailer records they carry.

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull, DisplayFromStr, PickFirst};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

/// Input of the `magic-8-ball` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct FortuneQuery {
    #[schemars(description = "The user question.")]
    pub question: String,
}

/// Output of the `magic-8-ball` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

/// Output of the `product-groups` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroupList {
    pub product_groups: Vec<String>,
    pub count: usize,
}

impl ProductGroupList {
    pub fn new(product_groups: Vec<String>) -> Self {
        let count = product_groups.len();
        Self {
            product_groups,
            count,
        }
    }
}

/// Input of the `retailer-search` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
#[serde(rename_all = "camelCase")]
pub struct RetailerSearchQuery {
    #[schemars(
        description = "The product category to filter by (e.g., 'Functional', 'Cotton', 'Silk', 'Wool'). Use the product-groups tool first to get available options."
    )]
    pub product_group: String,

    #[serde(default = "default_page")]
    #[schemars(
        description = "Page number for pagination (default: 1)",
        range(min = 1)
    )]
    pub page: u32,
}

impl RetailerSearchQuery {
    pub fn new(product_group: impl Into<String>) -> Self {
        Self {
            product_group: product_group.into(),
            page: DEFAULT_PAGE,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub kind: String,
    pub product: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub factory_address: Option<String>,
    pub shop_address: Option<String>,
    pub wechat: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }

    /// Whether any of the linkable fields (website, email, phone) is set and non-empty.
    pub fn has_links(&self) -> bool {
        self.website().is_some() || self.email().is_some() || self.phone().is_some()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub name: String,
    pub address: String,
    pub booth_number: Option<String>,
    pub booth_code: Option<String>,
}

impl Exhibition {
    /// Tag text: `"{name}"`, or `"{name} ({boothNumber})"` when a booth number is set.
    pub fn label(&self) -> String {
        match non_empty(&self.booth_number) {
            Some(booth) => format!("{} ({})", self.name, booth),
            None => self.name.clone(),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A retailer record as returned by the ChainBridge API.
///
/// Records are passed through untouched: fields this crate does not model
/// are kept in `extra` and serialised back out. `id` is whatever JSON the
/// upstream sent (string or number); a `null` exhibition list reads as empty.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retailer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    pub name: String,
    pub category: Category,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "exhibition", default)]
    pub exhibitions: Vec<Exhibition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Retailer {
    /// Name to show first: the English name when present, otherwise the native one.
    pub fn display_name(&self) -> &str {
        match self.english_name.as_deref() {
            Some(english) if !english.is_empty() => english,
            _ => &self.name,
        }
    }

    /// Native name, only when it differs from the English one shown first.
    pub fn secondary_name(&self) -> Option<&str> {
        match self.english_name.as_deref() {
            Some(english) if !english.is_empty() && english != self.name => Some(&self.name),
            _ => None,
        }
    }
}

/// Output of the `retailer-search` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub retailers: Vec<Retailer>,
    pub product_group: String,
    pub page: u32,
    pub limit: u32,
    pub count: usize,
}

/// Paginated envelope of `GET /api/retailers/search`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Retailer>>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub page: Option<u32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Error body of the ChainBridge API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiErrorBody {
    /// The `error` field, when it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}
