use crate::domain::Listing;
use crate::templates::{components::property_card, desktop_layout};
use maud::{html, Markup};

/// Detail page for one project: all of its priced BHK variants.
/// Callers guarantee `listings` is non-empty (unknown slugs 404 upstream).
pub fn project_page(listings: &[Listing]) -> Markup {
    let first = &listings[0];

    desktop_layout(
        &first.name,
        html! {
            h1 { (first.name) }
            p class="subtitle" {
                (first.city) " - " (first.locality.as_deref().unwrap_or("Unknown"))
            }

            @for listing in listings {
                (property_card(listing))
            }
        },
    )
}
