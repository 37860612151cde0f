// Accessibility helpers

/// Id of the persistent live region used for theme announcements.
pub const LIVE_REGION_ID: &str = "theme-announcement";

/// Critical focus and screen-reader CSS that should be part of the page
/// from the first paint: visible focus rings and the `.sr-only` utility.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    "a:focus-visible,button:focus-visible,input:focus-visible,select:focus-visible{outline:3px solid var(--color-focus);outline-offset:3px}\
     .sr-only{position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;border-width:0;}"
}

/// Mount the live-announcement region if it does not exist yet.
///
/// The region is created once and stays in the document for the life of
/// the session, so assistive technology keeps a stable reference to it and
/// detects text mutations. Announcements replace its text content.
pub fn ensure_announcement_region() {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    if doc.get_element_by_id(LIVE_REGION_ID).is_some() {
        return;
    }
    let Ok(region) = doc.create_element("div") else {
        return;
    };
    region.set_id(LIVE_REGION_ID);
    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", "polite");
    let _ = region.set_attribute("class", "sr-only");
    if let Some(body) = doc.body() {
        let _ = body.append_child(&region);
    }
}

/// Replace the live region's text. Returns `false` when the region is not
/// mounted, so callers can report the miss.
pub fn announce(message: &str) -> bool {
    match crate::dom::document().and_then(|doc| doc.get_element_by_id(LIVE_REGION_ID)) {
        Some(node) => {
            node.set_text_content(Some(message));
            true
        }
        None => false,
    }
}
