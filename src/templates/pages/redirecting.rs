use maud::{html, Markup, DOCTYPE};

/// Body of the guard's redirect, shown by browsers that don't follow it
/// straight away.
pub fn redirecting_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content="0; url=/auth/login";
                title { "Redirecting" }
            }
            body {
                p { "Redirecting to sign in…" }
            }
        }
    }
}
