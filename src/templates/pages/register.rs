use crate::forms::{FieldErrors, RegisterForm};
use crate::templates::{
    components::{form_messages, text_field},
    desktop_layout,
};
use maud::{html, Markup};

pub struct RegisterVm<'a> {
    pub form: &'a RegisterForm,
    pub errors: &'a FieldErrors,
    pub error: Option<&'a str>,
    pub success: Option<&'a str>,
}

pub fn register_page(vm: &RegisterVm) -> Markup {
    desktop_layout(
        "Register",
        false,
        html! {
            main class="container narrow" {
                h1 { "Register" }
                form method="post" action="/auth/register" class="panel" {
                    (form_messages(vm.error, vm.success))
                    (text_field("username", "Username", "text", &vm.form.username, vm.errors.get("username")))
                    (text_field("email", "Email", "email", &vm.form.email, vm.errors.get("email")))
                    (text_field("password", "Password", "password", "", vm.errors.get("password")))
                    div class="actions" {
                        button type="submit" class="primary" { "Register" }
                        a href="/auth/login" { "Already have an account? Log in" }
                    }
                }
            }
        },
    )
}
