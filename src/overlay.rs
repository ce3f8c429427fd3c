use crate::constants::HINT_ID;
use crate::debug::DebugView;
use ripple_core::PulsePolicy;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Snapshot of what the hint line reports.
pub struct HintStatus<'a> {
    pub view: DebugView,
    pub pulse: PulsePolicy,
    pub surfaces: usize,
    pub status: &'a str,
}

/// Update the hint overlay with current viewer state
pub fn update_hint(document: &web::Document, hint: &HintStatus<'_>) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let pulse = match hint.pulse {
            PulsePolicy::SinglePulse => "single pulse",
            PulsePolicy::Repeating => "repeating",
        };
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>View: {} • Pulse: {} • Surfaces: {} • {}</div>",
            hint.view.label(),
            pulse,
            hint.surfaces,
            hint.status
        );
        el.set_inner_html(&hint_html);
    }
}
