//! Materials page: drag-and-drop staging into the upload form.
//!
//! Dropping files onto the upload zone mirrors the first file into the
//! native file input and shows its name and size in the display label.
//! Extra files in the same drop are silently ignored.

use crate::util::format::format_file_size;

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{DataTransfer, Document, DragEvent, Element, File, HtmlInputElement};

#[cfg(test)]
#[path = "materials_test.rs"]
mod materials_test;

/// Marker id guarding the injected drag-highlight styles.
pub const DRAG_STYLE_ID: &str = "drag-drop-styles";

#[cfg(feature = "browser")]
const DRAG_CSS: &str = "\
    .file-upload.drag-highlight {\n\
        border-color: var(--primary-color);\n\
        background: rgba(102, 126, 234, 0.05);\n\
        transform: scale(1.02);\n\
    }\n";

/// Display label for a staged file: name plus human-readable size.
pub fn staged_label(name: &str, size_bytes: u64) -> String {
    format!("{name} ({})", format_file_size(size_bytes))
}

/// Capability handle for the upload zone on the materials page.
#[cfg(feature = "browser")]
pub struct UploadZone {
    zone: Element,
    input: HtmlInputElement,
}

#[cfg(feature = "browser")]
impl UploadZone {
    pub fn probe(doc: &Document) -> Option<Self> {
        doc.query_selector(".materials-page").ok().flatten()?;
        let zone = doc.query_selector(".file-upload").ok().flatten()?;
        let input = zone
            .query_selector("input[type=file]")
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        Some(Self { zone, input })
    }

    pub fn attach(self, doc: &Document) {
        dom::inject_style_once(doc, DRAG_STYLE_ID, DRAG_CSS);

        // The browser must never open a dropped file itself.
        for event in ["dragenter", "dragover", "dragleave", "drop"] {
            dom::listen(&self.zone, event, |ev| {
                ev.prevent_default();
                ev.stop_propagation();
            });
        }

        for event in ["dragenter", "dragover"] {
            let zone = self.zone.clone();
            dom::listen(&self.zone, event, move |_| {
                let _ = zone.class_list().add_1("drag-highlight");
            });
        }
        for event in ["dragleave", "drop"] {
            let zone = self.zone.clone();
            dom::listen(&self.zone, event, move |_| {
                let _ = zone.class_list().remove_1("drag-highlight");
            });
        }

        let zone = self.zone.clone();
        let input = self.input.clone();
        dom::listen(&self.zone, "drop", move |ev| {
            let Some(drag) = ev.dyn_ref::<DragEvent>() else {
                return;
            };
            let Some(first) = drag
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            stage_file(&zone, &input, &first);
        });
    }
}

/// Mirror `file` into the input as a single-entry list and update the
/// display label.
#[cfg(feature = "browser")]
fn stage_file(zone: &Element, input: &HtmlInputElement, file: &File) {
    if let Ok(staged) = DataTransfer::new() {
        let _ = staged.items().add_with_file(file);
        if let Some(single) = staged.files() {
            input.set_files(Some(&single));
        }
    }

    if let Ok(Some(display)) = zone.query_selector(".file-upload-display span") {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        display.set_text_content(Some(&staged_label(&file.name(), size)));
    }
}
