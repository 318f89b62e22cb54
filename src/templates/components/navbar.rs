use crate::templates::layouts::desktop::SITE_NAME;
use maud::{html, Markup};

pub fn navbar(is_authenticated: bool) -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="brand" { (SITE_NAME) }
            nav {
                ul {
                    li { a href="/properties/listing" { "Listings" } }
                    @if is_authenticated {
                        li { a href="/properties/create" { "New listing" } }
                        li {
                            form method="post" action="/auth/logout" class="inline" {
                                button type="submit" class="danger" { "Log out" }
                            }
                        }
                    } @else {
                        li { a href="/auth/login" { "Log in" } }
                        li { a href="/auth/register" { "Register" } }
                    }
                }
            }
        }
    }
}
