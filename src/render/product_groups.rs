use crate::model::ProductGroupList;
use crate::render::{loading, View};

/// Render the `product-groups` tool output.
pub fn render_product_groups(output: Option<&ProductGroupList>) -> View {
    let Some(output) = output else {
        return loading("Loading product groups...");
    };

    let header = View::block("div", "header")
        .child(View::block("h2", "title").with_text("Product Groups"))
        .child(View::block("span", "badge").with_text(format!("{} categories", output.count)));

    let body = if output.product_groups.is_empty() {
        View::block("div", "empty-state")
            .child(View::element("p").with_text("No product groups found"))
    } else {
        View::block("div", "groups-grid").children(output.product_groups.iter().map(|group| {
            View::block("div", "group-card")
                .child(View::block("span", "group-name").with_text(group.clone()))
        }))
    };

    View::block("div", "container").child(header).child(body)
}
