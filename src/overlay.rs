use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
