use crate::api::Property;
use crate::domain::format_price;
use crate::paths::property_path;
use maud::{html, Markup};

pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

pub fn property_card(property: &Property) -> Markup {
    let title = property.title.as_deref().filter(|t| !t.is_empty());
    let location = property.location.as_deref().filter(|l| !l.is_empty());
    let image = property
        .photos
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        a href=(property_path(&property.id)) class="property-card" {
            img src=(image) alt=(format!("Photo of {}", title.unwrap_or("this property"))) loading="lazy";
            div class="card-body" {
                h2 { (title.unwrap_or("Untitled")) }
                p class="muted" { "Location: " (location.unwrap_or("No location")) }
                p class="price" { (format_price(property.price)) }
            }
        }
    }
}

pub fn property_grid(properties: &[Property]) -> Markup {
    html! {
        div class="grid" {
            @for property in properties {
                (property_card(property))
            }
        }
    }
}
