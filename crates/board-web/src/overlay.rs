use web_sys as web;

// ---------------- Help panel ----------------

#[inline]
pub fn show_help(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("help-overlay") {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_help(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("help-overlay") {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn help_is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id("help-overlay")
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle_help(document: &web::Document) {
    if help_is_hidden(document) {
        show_help(document);
    } else {
        hide_help(document);
    }
}

// ---------------- Scroll indicator ----------------

/// Map scroll progress in [0,1) onto the indicator's fill width.
pub fn set_scroll_progress(document: &web::Document, progress: f32) {
    if let Some(el) = document.get_element_by_id("scroll-indicator-fill") {
        let pct = (progress.clamp(0.0, 1.0) * 100.0) as u32;
        let _ = el.set_attribute("style", &format!("width:{pct}%"));
    }
}

// ---------------- Terminal error panel ----------------

/// One-way for the component's lifetime; the reload button is the only
/// recovery path.
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("error-message") {
        el.set_text_content(Some(message));
    }
    if let Some(el) = document.get_element_by_id("error-overlay") {
        let _ = el.set_attribute("style", "");
    }
}
