use crate::forms::{FieldErrors, PropertyForm};
use crate::templates::{
    components::{form_messages, property_form::property_fields},
    desktop_layout,
};
use maud::{html, Markup};

pub const CREATE_PATH: &str = "/properties/create";

pub fn create_page(form: &PropertyForm, errors: &FieldErrors, error: Option<&str>) -> Markup {
    desktop_layout(
        "New listing",
        true,
        html! {
            main class="container narrow" {
                h1 { "Add a new property" }
                form method="post" action=(CREATE_PATH) enctype="multipart/form-data" class="panel" {
                    (form_messages(error, None))
                    (property_fields(form, errors))
                    div class="field" {
                        label for="photo" { "Photo" }
                        input type="file" id="photo" name="photo" accept="image/*";
                    }
                    div class="actions" {
                        button type="submit" class="primary" { "Add property" }
                    }
                }
            }
        },
    )
}
