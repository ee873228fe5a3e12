use crate::cities::SUPPORTED_CITIES;
use crate::templates::{components::search_form, desktop_layout};
use maud::{html, Markup};

pub struct HomeVm {
    pub total_listings: usize,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let cities = SUPPORTED_CITIES
        .iter()
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" & ");

    desktop_layout(
        "Property Search",
        html! {
            h1 { "Property Search" }
            p class="subtitle" { "Describe what you want to live in, in plain words" }

            (search_form(""))

            section class="card" {
                h3 { "Try asking" }
                ul {
                    li { "3BHK flat in Mumbai under 5 Cr" }
                    li { "2BHK ready to move in Pune" }
                    li { "Properties in Gurukripa project" }
                    li { "1BHK in Chembur under 2 Cr" }
                    li { "4BHK between 3 Cr and 7 Cr" }
                }
            }

            section class="card" {
                h3 { "Inventory" }
                p {
                    strong { (vm.total_listings) }
                    " properties across "
                    (cities)
                }
            }
        },
    )
}
