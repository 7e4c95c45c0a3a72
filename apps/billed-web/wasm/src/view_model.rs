//! Typed handles on the rendered pages
//!
//! Each page is rendered as markup first, then bound once here. A missing
//! element is an error at bind time rather than a silent no-op later.

use billed_core::containers::{EyeIcon, JustificatoryModal, ModalCommand};
use billed_core::NewBillForm;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, File, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

fn test_id_selector(id: &str) -> String {
    format!(r#"[data-testid="{}"]"#, id)
}

/// First element under `parent` carrying `data-testid=id`
pub fn by_test_id<T: JsCast>(parent: &Element, id: &str) -> Result<T, JsValue> {
    parent
        .query_selector(&test_id_selector(id))?
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Unexpected element type: {}", id)))
}

/// Like [`by_test_id`] for elements only some pages have
pub fn maybe_by_test_id<T: JsCast>(parent: &Element, id: &str) -> Option<T> {
    by_test_id(parent, id).ok()
}

fn all_by_test_id(parent: &Element, id: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = parent.query_selector_all(&test_id_selector(id))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub struct EyeIconElement(pub HtmlElement);

impl EyeIcon for EyeIconElement {
    fn bill_url(&self) -> Option<String> {
        self.0
            .get_attribute("data-bill-url")
            .filter(|url| !url.is_empty())
    }
}

/// The `#modaleFile` dialog
#[derive(Clone)]
pub struct ModalElement {
    root: HtmlElement,
}

impl ModalElement {
    pub fn bind(parent: &Element) -> Result<Self, JsValue> {
        let root = parent
            .query_selector("#modaleFile")?
            .ok_or("Missing element: modaleFile")?
            .dyn_into::<HtmlElement>()?;
        Ok(Self { root })
    }

    pub fn close_button(&self) -> Option<HtmlElement> {
        self.root
            .query_selector("button.close")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into().ok())
    }

    pub fn is_shown(&self) -> bool {
        self.root.class_name().split_whitespace().any(|c| c == "show")
    }

    pub fn hide(&self) {
        self.root.set_class_name("modal fade");
        let _ = self.root.style().set_property("display", "none");
        let _ = self.root.set_attribute("aria-hidden", "true");
    }
}

impl JustificatoryModal for ModalElement {
    fn width(&self) -> f64 {
        let width = f64::from(self.root.client_width());
        if width > 0.0 {
            return width;
        }
        // hidden dialogs have no layout; fall back to the viewport
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn set_body(&self, markup: &str) {
        if let Ok(Some(body)) = self.root.query_selector(".modal-body") {
            body.set_inner_html(markup);
        }
    }

    fn modal(&self, command: ModalCommand) {
        match command {
            ModalCommand::Show => {
                self.root.set_class_name("modal fade show");
                let _ = self.root.style().set_property("display", "block");
                let _ = self.root.set_attribute("aria-hidden", "false");
            }
        }
    }
}

/// Loaded bills page
pub struct BillsView {
    pub new_bill_button: HtmlElement,
    pub eye_icons: Vec<HtmlElement>,
    pub modal: ModalElement,
}

impl BillsView {
    pub fn bind(parent: &Element) -> Result<Self, JsValue> {
        Ok(Self {
            new_bill_button: by_test_id(parent, "btn-new-bill")?,
            eye_icons: all_by_test_id(parent, "icon-eye")?,
            modal: ModalElement::bind(parent)?,
        })
    }
}

/// New bill form
pub struct NewBillFormView {
    pub form: HtmlFormElement,
    expense_type: HtmlSelectElement,
    name: HtmlInputElement,
    date: HtmlInputElement,
    amount: HtmlInputElement,
    vat: HtmlInputElement,
    pct: HtmlInputElement,
    commentary: HtmlTextAreaElement,
    pub file: HtmlInputElement,
    file_error: HtmlElement,
}

impl NewBillFormView {
    pub fn bind(parent: &Element) -> Result<Self, JsValue> {
        Ok(Self {
            form: by_test_id(parent, "form-new-bill")?,
            expense_type: by_test_id(parent, "expense-type")?,
            name: by_test_id(parent, "expense-name")?,
            date: by_test_id(parent, "datepicker")?,
            amount: by_test_id(parent, "amount")?,
            vat: by_test_id(parent, "vat")?,
            pct: by_test_id(parent, "pct")?,
            commentary: by_test_id(parent, "commentary")?,
            file: by_test_id(parent, "file")?,
            file_error: by_test_id(parent, "file-error")?,
        })
    }

    pub fn values(&self) -> NewBillForm {
        NewBillForm {
            expense_type: self.expense_type.value(),
            name: self.name.value(),
            date: self.date.value(),
            amount: self.amount.value(),
            vat: self.vat.value(),
            pct: self.pct.value(),
            commentary: self.commentary.value(),
        }
    }

    pub fn selected_file(&self) -> Option<File> {
        self.file.files().and_then(|files| files.get(0))
    }

    pub fn show_file_error(&self, message: &str) {
        self.file_error.set_text_content(Some(message));
    }

    pub fn clear_file_error(&self) {
        self.file_error.set_text_content(None);
    }

    /// Empty the file input so the rejected file cannot be submitted
    pub fn clear_file(&self) {
        self.file.set_value("");
    }
}
