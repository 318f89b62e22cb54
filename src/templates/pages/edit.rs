use crate::forms::{FieldErrors, PropertyForm};
use crate::paths::property_path;
use crate::templates::{
    components::{form_messages, property_form::property_fields},
    desktop_layout,
};
use maud::{html, Markup};

pub fn edit_page(id: &str, form: &PropertyForm, errors: &FieldErrors, error: Option<&str>) -> Markup {
    desktop_layout(
        "Edit listing",
        true,
        html! {
            main class="container narrow" {
                h1 { "Edit property" }
                form method="post" action=(format!("{}/edit", property_path(id))) class="panel" {
                    (form_messages(error, None))
                    (property_fields(form, errors))
                    div class="actions" {
                        button type="submit" class="primary" { "Save changes" }
                        a href=(property_path(id)) { "Cancel" }
                    }
                }
            }
        },
    )
}
