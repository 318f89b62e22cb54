use maud::{html, Markup};

/// Label + input + the field's validation message, if any.
pub fn text_field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    error: Option<&str>,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input
                type=(input_type)
                id=(name)
                name=(name)
                value=(value)
                class=[error.map(|_| "invalid")];
            (field_error(error))
        }
    }
}

pub fn textarea_field(name: &str, label: &str, value: &str, error: Option<&str>) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            textarea id=(name) name=(name) rows="4" class=[error.map(|_| "invalid")] { (value) }
            (field_error(error))
        }
    }
}

/// `<select>` with an "All" entry for the sentinel followed by `options`.
pub fn select_field(
    name: &str,
    label: &str,
    all_label: &str,
    all_value: &str,
    options: &[String],
    selected: &str,
    error: Option<&str>,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) class=[error.map(|_| "invalid")] {
                option value=(all_value) selected[selected == all_value] { (all_label) }
                @for opt in options {
                    option value=(opt) selected[selected == opt] { (capitalize(opt)) }
                }
            }
            (field_error(error))
        }
    }
}

pub fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = error {
            p class="field-error" { (msg) }
        }
    }
}

/// Banner for errors that don't belong to a single field.
pub fn form_messages(error: Option<&str>, success: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = error {
            p class="form-error" role="alert" { (msg) }
        }
        @if let Some(msg) = success {
            p class="form-success" { (msg) }
        }
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
