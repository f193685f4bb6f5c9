//! Thin wrappers over the handful of window APIs the app touches.

use wasm_bindgen::JsCast;
use web_sys::window;

/// Modal alert for failed remote actions.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Confirmation prompt for destructive actions. `false` when the window is
/// unavailable, so nothing destructive can proceed by accident.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload_page() {
    if let Some(w) = window() {
        let _ = w.location().reload();
    }
}

/// Focus the element with the given id, if it is in the DOM.
pub fn focus_field(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    }
}
