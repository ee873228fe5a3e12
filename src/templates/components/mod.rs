use maud::{html, Markup};

pub mod error;
pub mod property_card;

pub use error::html_error_response;
pub use property_card::property_card;

pub fn search_form(query: &str) -> Markup {
    html! {
        form class="search-form" action="/search" method="get" {
            input
                type="text"
                name="q"
                value=(query)
                placeholder="Ask about properties... (e.g., '3BHK in Mumbai under 5 Cr')";
            button type="submit" { "Search" }
        }
    }
}
