use crate::model::{Contact, Exhibition, Retailer, RetailerSearchQuery, SearchResult};
use crate::render::{loading, View};

/// Render the `retailer-search` tool output.
///
/// `input` is only consulted while the output is pending, to echo the query.
pub fn render_retailer_search(
    input: Option<&RetailerSearchQuery>,
    output: Option<&SearchResult>,
) -> View {
    let Some(output) = output else {
        let group = input.map(|q| q.product_group.as_str()).unwrap_or_default();
        return loading(format!("Searching retailers for \"{}\"...", group));
    };

    let header = View::block("div", "header")
        .child(
            View::block("div", "header-info")
                .child(View::block("h2", "title").with_text("Retailer Search Results"))
                .child(
                    View::block("span", "subtitle")
                        .with_text("Product Group: ")
                        .child(View::element("strong").with_text(output.product_group.clone())),
                ),
        )
        .child(
            View::block("div", "meta")
                .child(View::block("span", "badge").with_text(format!("{} results", output.count)))
                .child(View::block("span", "page-info").with_text(format!("Page {}", output.page))),
        );

    let body = if output.retailers.is_empty() {
        empty_state(&output.product_group)
    } else {
        View::block("div", "retailers-list").children(output.retailers.iter().map(retailer_card))
    };

    View::block("div", "container").child(header).child(body)
}

fn empty_state(product_group: &str) -> View {
    View::block("div", "empty-state")
        .child(View::block("span", "empty-icon").with_text("🔍"))
        .child(View::element("p").with_text(format!("No retailers found for \"{}\"", product_group)))
        .child(View::block("p", "hint").with_text("Try a different product group"))
}

fn retailer_card(retailer: &Retailer) -> View {
    let mut header = View::block("div", "retailer-header")
        .child(View::block("h3", "retailer-name").with_text(retailer.display_name()));
    if let Some(native) = retailer.secondary_name() {
        header = header.child(View::block("span", "retailer-local-name").with_text(native));
    }

    let mut details = View::block("div", "retailer-details")
        .child(detail_row("Category", &retailer.category.product))
        .child(detail_row("Country", &retailer.country));

    if let Some(contact) = retailer.contact.as_ref().filter(|c| c.has_links()) {
        details = details.child(contact_section(contact));
    }
    if !retailer.exhibitions.is_empty() {
        details = details.child(exhibitions(&retailer.exhibitions));
    }

    View::block("div", "retailer-card").child(header).child(details)
}

fn detail_row(label: &str, value: &str) -> View {
    View::block("div", "detail-row")
        .child(View::block("span", "detail-label").with_text(label))
        .child(View::block("span", "detail-value").with_text(value))
}

fn contact_section(contact: &Contact) -> View {
    let mut section = View::block("div", "contact-section");
    if let Some(website) = contact.website() {
        section = section.child(
            View::block("a", "contact-link")
                .attr("href", website)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .with_text("🌐 Website"),
        );
    }
    if let Some(email) = contact.email() {
        section = section.child(
            View::block("a", "contact-link")
                .attr("href", format!("mailto:{}", email))
                .with_text(format!("✉️ {}", email)),
        );
    }
    if let Some(phone) = contact.phone() {
        section = section.child(View::block("span", "contact-link").with_text(format!("📞 {}", phone)));
    }
    section
}

fn exhibitions(list: &[Exhibition]) -> View {
    View::block("div", "exhibitions")
        .child(View::block("span", "detail-label").with_text("Exhibitions"))
        .child(
            View::block("div", "exhibition-tags").children(
                list.iter()
                    .map(|ex| View::block("span", "exhibition-tag").with_text(ex.label())),
            ),
        )
}
