//! Presentational views for the widget outputs.
//!
//! Renderers are pure functions of a tool's `(input, output)` pair. They return
//! a [`View`] tree that the host can serialise as JSON or turn into HTML with
//! [`View::to_html`]. Each renderer has three states: loading (no output yet),
//! empty (output with zero results) and populated.

pub mod product_groups;
pub mod retailer_search;

pub use product_groups::render_product_groups;
pub use retailer_search::render_retailer_search;

use serde::Serialize;

/// A node in a rendered view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum View {
    Element {
        tag: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<&'static str>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        attrs: Vec<(&'static str, String)>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<View>,
    },
    Text {
        text: String,
    },
}

impl View {
    pub fn element(tag: &'static str) -> Self {
        View::Element {
            tag,
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        View::Text { text: text.into() }
    }

    /// Shorthand for an element with a class.
    pub fn block(tag: &'static str, class: &'static str) -> Self {
        View::element(tag).class(class)
    }

    pub fn class(mut self, name: &'static str) -> Self {
        if let View::Element { class, .. } = &mut self {
            *class = Some(name);
        }
        self
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        if let View::Element { attrs, .. } = &mut self {
            attrs.push((key, value.into()));
        }
        self
    }

    pub fn child(mut self, node: View) -> Self {
        if let View::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = View>) -> Self {
        if let View::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.child(View::text(text))
    }

    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            View::Element { class, .. } => *class,
            View::Text { .. } => None,
        }
    }

    pub fn attr_value(&self, key: &str) -> Option<&str> {
        match self {
            View::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str()),
            View::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Text { text } => out.push_str(text),
            View::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All descendant elements (and self) carrying `class`, in document order.
    pub fn find_all(&self, class: &str) -> Vec<&View> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    pub fn find(&self, class: &str) -> Option<&View> {
        self.find_all(class).into_iter().next()
    }

    fn collect_class<'a>(&'a self, wanted: &str, found: &mut Vec<&'a View>) {
        if let View::Element {
            class, children, ..
        } = self
        {
            if *class == Some(wanted) {
                found.push(self);
            }
            for child in children {
                child.collect_class(wanted, found);
            }
        }
    }

    /// Serialise to an HTML fragment. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            View::Text { text } => out.push_str(&escape(text)),
            View::Element {
                tag,
                class,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(class) = class {
                    out.push_str(&format!(" class=\"{}\"", escape(class)));
                }
                for (key, value) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Loading indicator shared by both renderers.
pub(crate) fn loading(message: impl Into<String>) -> View {
    View::block("div", "container").child(
        View::block("div", "loading")
            .child(View::block("div", "spinner"))
            .child(View::element("span").with_text(message)),
    )
}
