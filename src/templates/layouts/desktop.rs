use crate::templates::components::navbar;
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "RealtyTunax";

pub fn desktop_layout(title: &str, is_authenticated: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Find the home you are looking for, in a few clicks.";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                (navbar(is_authenticated))
                (content)
            }
        }
    }
}
