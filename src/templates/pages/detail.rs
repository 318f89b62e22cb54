use crate::api::Property;
use crate::domain::format_price;
use crate::paths::property_path;
use crate::templates::{components::property_card::PLACEHOLDER_IMAGE, desktop_layout};
use maud::{html, Markup};

pub const NOT_FOUND: &str = "Property not found.";
pub const FETCH_ERROR: &str = "Something went wrong while loading the property.";

pub fn detail_page(is_authenticated: bool, result: &Result<Property, String>) -> Markup {
    let title = match result {
        Ok(p) => p.title.clone().unwrap_or_else(|| "Untitled".into()),
        Err(_) => "Property".into(),
    };

    desktop_layout(
        &title,
        is_authenticated,
        html! {
            main class="container narrow" {
                @match result {
                    Err(msg) => p class="form-error center" role="alert" { (msg) },
                    Ok(p) => {
                        article class="detail" {
                            img
                                src=(p.photos.first().map(String::as_str).unwrap_or(PLACEHOLDER_IMAGE))
                                alt=(title);
                            h1 { (title) }
                            p class="muted" { "Location: " (p.location.as_deref().unwrap_or("No location")) }
                            @if let (Some(d), Some(n)) = (&p.district, &p.neighborhood) {
                                p class="muted" { (d) " / " (n) }
                            }
                            p class="price" { (format_price(p.price)) }
                            p { (p.description.as_deref().unwrap_or("")) }
                        }

                        @if is_authenticated {
                            div class="actions" {
                                a href=(format!("{}/edit", property_path(&p.id))) class="button" { "Edit" }
                                form method="post" action=(format!("{}/delete", property_path(&p.id))) class="inline" {
                                    button type="submit" class="danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
                p { a href="/properties/listing" { "← Back to listings" } }
            }
        },
    )
}
