use crate::i18n::locales::{LOCALE_META, is_rtl_lang, load_translations};
use serde_json::Value;
use std::cell::RefCell;

/// localStorage key the language choice is persisted under.
pub const LOCALE_STORAGE_KEY: &str = "a11ytips.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let rtl = is_rtl_lang(lang);

    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl,
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("en").unwrap_or_else(fallback_bundle))
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Switch the active language.
///
/// Replaces the bundle, mirrors lang/dir onto `<html>`, and persists the
/// choice for the next session. Unknown codes are ignored.
pub fn set_lang(lang: &str) {
    if !LOCALE_META.iter().any(|meta| meta.code == lang) {
        return;
    }
    if let Some(bundle) = build_bundle(lang) {
        replace_bundle(bundle);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
                with_bundle(|read| {
                    let _ = el.set_attribute("lang", &read.lang);
                    let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
                });
            }
            if let Ok(storage) = crate::dom::local_storage() {
                let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
            }
        }
    }
}

/// Two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

/// Whether the active locale reads right to left.
#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.rtl)
}
