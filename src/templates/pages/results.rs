use crate::domain::Listing;
use crate::templates::{
    components::{property_card, search_form},
    desktop_layout,
};
use maud::{html, Markup};

pub struct ResultsVm<'a> {
    pub query: &'a str,
    pub summary: &'a str,
    // Pretty-printed applied-filter mapping, shown so the user can see what
    // the parser understood.
    pub filters_json: &'a str,
    pub listings: &'a [Listing],
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    let export_href = format!(
        "/export?{}",
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", vm.query)
            .finish()
    );

    desktop_layout(
        "Search Results",
        html! {
            h1 { "Property Search" }

            (search_form(vm.query))

            p { (vm.summary) }

            details class="filters" {
                summary { "Filters applied" }
                pre { (vm.filters_json) }
            }

            @if vm.listings.is_empty() {
                div class="info-box" {
                    "No properties found matching your criteria. Try widening the budget or dropping a constraint."
                }
            } @else {
                p {
                    a class="cta-link" href=(export_href) { "Download as spreadsheet" }
                }
                @for listing in vm.listings {
                    (property_card(listing))
                }
            }
        },
    )
}
