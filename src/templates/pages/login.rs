use crate::forms::{FieldErrors, LoginForm};
use crate::templates::{
    components::{form_messages, text_field},
    desktop_layout,
};
use maud::{html, Markup};

pub fn login_page(form: &LoginForm, errors: &FieldErrors, error: Option<&str>) -> Markup {
    desktop_layout(
        "Log in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Log in" }
                form method="post" action="/auth/login" class="panel" {
                    (form_messages(error, None))
                    (text_field("username", "Username", "text", &form.username, errors.get("username")))
                    // Never echo the password back.
                    (text_field("password", "Password", "password", "", errors.get("password")))
                    div class="actions" {
                        button type="submit" class="primary" { "Log in" }
                        a href="/auth/register" { "No account yet? Register" }
                    }
                }
            }
        },
    )
}
