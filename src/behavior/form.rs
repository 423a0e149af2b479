//! Per-field and per-submit form validation with inline error display.
//!
//! DESIGN
//! ======
//! Validation is split into a pure rule core over [`FieldSnapshot`] values
//! and browser wiring that snapshots live fields. A field is validated on
//! blur and on submit; the next input event clears its error optimistically
//! without re-validating (the field stays clean until the next blur or
//! submit). Submission is suppressed when any required field fails, and
//! every failing field shows its message simultaneously.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "browser")]
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Largest accepted upload, 16 MiB. A file of exactly this size passes.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Minimum password length in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Marker id guarding the injected error-display styles.
pub const VALIDATION_STYLE_ID: &str = "validation-styles";

#[cfg(feature = "browser")]
const VALIDATION_CSS: &str = "\
    .form-group input.error,\n\
    .form-group textarea.error,\n\
    .form-group select.error {\n\
        border-color: var(--danger-color);\n\
        box-shadow: 0 0 0 3px rgba(250, 112, 154, 0.1);\n\
    }\n\
    .field-error {\n\
        color: var(--danger-color);\n\
        font-size: var(--font-size-sm);\n\
        margin-top: var(--spacing-xs);\n\
        display: flex;\n\
        align-items: center;\n\
        gap: var(--spacing-xs);\n\
    }\n\
    .field-error::before {\n\
        content: \"\\26A0\";\n\
        font-size: var(--font-size-xs);\n\
    }\n";

/// Field flavor as far as the rules care; everything else is `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
    DateTimeLocal,
    File,
    #[default]
    Other,
}

impl FieldKind {
    pub fn from_type_attr(type_attr: &str) -> Self {
        match type_attr {
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            "datetime-local" => FieldKind::DateTimeLocal,
            "file" => FieldKind::File,
            _ => FieldKind::Other,
        }
    }
}

/// Everything the rules need to know about one field, captured at
/// validation time.
#[derive(Clone, Debug, Default)]
pub struct FieldSnapshot {
    pub kind: FieldKind,
    pub required: bool,
    /// Trimmed field value.
    pub value: String,
    /// Byte size of the first selected file, for file inputs.
    pub file_size: Option<u64>,
    /// Selected instant in epoch milliseconds, for date-time inputs with a
    /// value. `NaN` (unparseable) passes, matching an empty selection.
    pub picked_ms: Option<f64>,
}

/// Run the rules in priority order and return the first failure, if any.
///
/// `now_ms` is the current instant in epoch milliseconds; the date-time
/// rule requires a strictly future selection.
pub fn validate(field: &FieldSnapshot, now_ms: f64) -> Option<&'static str> {
    if field.required && field.value.is_empty() {
        return Some("This field is required");
    }
    // Optional fields left empty are valid regardless of kind.
    if field.value.is_empty() && field.file_size.is_none() {
        return None;
    }
    match field.kind {
        FieldKind::Email => {
            (!is_plausible_email(&field.value)).then_some("Please enter a valid email address")
        }
        FieldKind::Password => (field.value.chars().count() < MIN_PASSWORD_CHARS)
            .then_some("Password must be at least 6 characters long"),
        FieldKind::DateTimeLocal => match field.picked_ms {
            Some(picked) if picked <= now_ms => Some("Please select a future date and time"),
            _ => None,
        },
        FieldKind::File => match field.file_size {
            Some(size) if size > MAX_UPLOAD_BYTES => Some("File size must be less than 16MB"),
            _ => None,
        },
        FieldKind::Other => None,
    }
}

/// Conventional `local@domain.tld` shape: no whitespace, exactly one `@`
/// with a nonempty local part, and a dot somewhere inside the domain with
/// characters on both sides.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Wire blur/input/submit validation for every form on the page.
#[cfg(feature = "browser")]
pub fn attach(doc: &Document) {
    dom::inject_style_once(doc, VALIDATION_STYLE_ID, VALIDATION_CSS);

    for form in dom::query_all(doc, "form") {
        for field in dom::query_all_within(&form, "input, textarea, select") {
            let field_for_blur = field.clone();
            dom::listen(&field, "blur", move |_| {
                validate_and_mark(&field_for_blur);
            });
            let field_for_input = field.clone();
            dom::listen(&field, "input", move |_| clear_error(&field_for_input));
        }

        let form_el = form.clone();
        dom::listen(&form, "submit", move |ev| {
            if !validate_form(&form_el) {
                ev.prevent_default();
            }
        });
    }
}

/// Re-validate every required field; failures mark, passes clear. Returns
/// whether the form may submit.
#[cfg(feature = "browser")]
fn validate_form(form: &Element) -> bool {
    let mut ok = true;
    for field in dom::query_all_within(form, "input[required], textarea[required], select[required]")
    {
        if !validate_and_mark(&field) {
            ok = false;
        }
    }
    ok
}

#[cfg(feature = "browser")]
fn validate_and_mark(field: &Element) -> bool {
    match validate(&snapshot(field), js_sys::Date::now()) {
        Some(message) => {
            show_error(field, message);
            false
        }
        None => {
            clear_error(field);
            true
        }
    }
}

#[cfg(feature = "browser")]
fn snapshot(el: &Element) -> FieldSnapshot {
    let mut kind = FieldKind::Other;
    let mut raw_value = String::new();
    let mut file_size = None;

    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        kind = FieldKind::from_type_attr(&input.type_());
        raw_value = input.value();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            file_size = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.size() as u64);
        }
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        raw_value = area.value();
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        raw_value = select.value();
    }

    let value = raw_value.trim().to_owned();
    let picked_ms = (kind == FieldKind::DateTimeLocal && !value.is_empty())
        .then(|| js_sys::Date::new(&JsValue::from_str(&value)).get_time());

    FieldSnapshot {
        kind,
        required: el.has_attribute("required"),
        value,
        file_size,
        picked_ms,
    }
}

/// Mark the field and place a single error label right after it. Any prior
/// label is removed first so at most one exists per field.
#[cfg(feature = "browser")]
fn show_error(field: &Element, message: &str) {
    clear_error(field);
    let _ = field.class_list().add_1("error");

    let Some(doc) = field.owner_document() else {
        return;
    };
    let Ok(label) = doc.create_element("div") else {
        return;
    };
    label.set_class_name("field-error");
    label.set_text_content(Some(message));
    let _ = field.after_with_node_1(&label);
}

#[cfg(feature = "browser")]
fn clear_error(field: &Element) {
    let _ = field.class_list().remove_1("error");
    if let Some(next) = field.next_element_sibling() {
        if next.class_list().contains("field-error") {
            next.remove();
        }
    }
}
