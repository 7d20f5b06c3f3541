use crate::constants::PANEL_FADE_MS;
use crate::core::panel::PanelVisibility;
use crate::core::scene::Marker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM-side controller for the info overlay. The visibility state machine
/// (including the generation counter that guards the deferred hide) lives in
/// `core::panel`; this wrapper drives the classes and text content.
#[derive(Clone)]
pub struct InfoPanel {
    state: Rc<RefCell<PanelVisibility>>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(PanelVisibility::new())),
        }
    }

    /// Fill the panel from the marker and transition it to visible. The
    /// layout flush between un-hiding and adding the `visible` class makes
    /// the enter transition animate reliably.
    pub fn show(&self, document: &web::Document, marker: &Marker) {
        set_text(document, "info-title", marker.title);
        set_text(document, "info-description", marker.description);
        if let Some(el) = document.get_element_by_id("info-panel") {
            let cl = el.class_list();
            _ = cl.remove_1("hidden");
            dom::flush_layout(&el);
            _ = cl.add_1("visible");
        }
        self.state.borrow_mut().show();
    }

    /// Start the exit transition; after the fade duration the panel leaves
    /// layout entirely unless a `show` re-entered visibility in the meantime.
    pub fn hide(&self, document: &web::Document) {
        let token = match self.state.borrow_mut().begin_hide() {
            Some(t) => t,
            None => return,
        };
        if let Some(el) = document.get_element_by_id("info-panel") {
            _ = el.class_list().remove_1("visible");
        }
        let state = self.state.clone();
        let document = document.clone();
        dom::set_timeout_once(PANEL_FADE_MS, move || {
            if state.borrow_mut().finish_hide(token) {
                if let Some(el) = document.get_element_by_id("info-panel") {
                    _ = el.class_list().add_1("hidden");
                }
            }
        });
    }

    pub fn wire_close(&self, document: &web::Document) {
        let panel = self.clone();
        dom::add_click_listener(document, "info-close", move || {
            if let Some(doc) = dom::window_document() {
                panel.hide(&doc);
            }
        });
    }
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the event's target is the info panel or one of its
/// descendants; such releases are left for the panel to handle.
pub fn event_targets_panel(ev: &web::PointerEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("#info-panel").ok().flatten())
        .is_some()
}

fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}
