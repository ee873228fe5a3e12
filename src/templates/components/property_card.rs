use crate::domain::{format_price_inr, Listing, ProjectStatus};
use maud::{html, Markup};

/// One result card. Every field comes straight off the listing; nothing is
/// invented at display time.
pub fn property_card(listing: &Listing) -> Markup {
    let price = match listing.price_inr {
        Some(p) => format_price_inr(p),
        None => "Price on request".to_string(),
    };

    let status_class = match listing.status {
        ProjectStatus::ReadyToMove => "property-detail status-ready",
        ProjectStatus::UnderConstruction => "property-detail status-construction",
        ProjectStatus::Other(_) => "property-detail",
    };

    html! {
        div class="property-card" {
            div class="property-title" { (listing.name) }
            div class="property-price" { (price) }
            div {
                span class="property-detail" { strong { (listing.bhk_label) } }
                span class=(status_class) { (listing.status.display()) }
                span class="property-detail" {
                    (listing.city) " - " (listing.locality.as_deref().unwrap_or("Unknown"))
                }
            }
            a class="cta-link" href={ "/project/" (listing.slug) } { "View Full Details" }
        }
    }
}
