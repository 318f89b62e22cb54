// templates/pages/home.rs
use crate::api::Property;
use crate::filters::FilterForm;
use crate::forms::FieldErrors;
use crate::geos::builtin_lookup;
use crate::templates::{
    components::{property_grid, search_form},
    desktop_layout,
    layouts::desktop::SITE_NAME,
};
use maud::{html, Markup};

pub struct NewsArticle {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const NEWS: &[NewsArticle] = &[
    NewsArticle {
        title: "Where the property market stands",
        summary: "Home prices keep climbing and the rental market is as busy as ever.",
    },
    NewsArticle {
        title: "Urban renewal projects pick up speed",
        summary: "New living spaces are taking shape across the big cities.",
    },
    NewsArticle {
        title: "The most promising areas to invest in",
        summary: "Experts name the districts with the most upside for property investors.",
    },
];

pub struct HomeVm {
    pub is_authenticated: bool,
    pub search: FilterForm,
    pub search_errors: FieldErrors,
    /// `Err` holds the message to show instead of the featured grid.
    pub featured: Result<Vec<Property>, String>,
    pub year: i32,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        vm.is_authenticated,
        html! {
            section class="hero" {
                h1 { "Your dream home, one click away" }
                p class="lead" { "Find what you are looking for in our wide portfolio." }
                (search_form(&vm.search, &builtin_lookup(), &vm.search_errors))
            }

            section class="container" {
                h2 class="section-title" { "Featured properties" }
                @match &vm.featured {
                    Err(msg) => p class="form-error" { (msg) },
                    Ok(list) if list.is_empty() => p class="muted center" { "No featured properties yet." },
                    Ok(list) => (property_grid(list)),
                }
                p class="center" {
                    a href="/properties/listing" class="button primary" { "See all properties" }
                }
            }

            section class="container" {
                h2 class="section-title" { "Latest property news" }
                div class="grid" {
                    @for article in NEWS {
                        article class="card" {
                            div class="card-body" {
                                h3 { (article.title) }
                                p { (article.summary) }
                            }
                        }
                    }
                }
            }

            footer class="footer" {
                p { "© " (vm.year) " " (SITE_NAME) ". All rights reserved." }
            }
        },
    )
}
