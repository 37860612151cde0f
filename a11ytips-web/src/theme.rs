//! Browser side of the theme system: the shared controller instance plus
//! the environment that mirrors the active mode into localStorage, the
//! document root, and the live-announcement region.

use a11ytips_core::controller::{ThemeController, ThemeEnvironment};
use a11ytips_core::theme::ThemeMode;
use std::cell::{Cell, RefCell};

/// localStorage key the mode's wire string is persisted under.
pub const THEME_STORAGE_KEY: &str = "a11ytips.theme";

#[derive(Debug, thiserror::Error)]
pub enum BrowserThemeError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("document root unavailable")]
    MissingRoot,
    #[error("announcement region not mounted")]
    MissingRegion,
    #[error("DOM write failed: {0}")]
    Dom(String),
}

/// Environment backed by the real browser. Each effect degrades to an
/// error the controller logs and skips; none of them can take the page
/// down.
#[derive(Default)]
pub struct BrowserThemeEnvironment;

impl ThemeEnvironment for BrowserThemeEnvironment {
    type Error = BrowserThemeError;

    fn load_preference(&self) -> Result<Option<String>, Self::Error> {
        let storage = crate::dom::local_storage()
            .map_err(|err| BrowserThemeError::Storage(crate::dom::js_error_message(&err)))?;
        storage
            .get_item(THEME_STORAGE_KEY)
            .map_err(|err| BrowserThemeError::Storage(crate::dom::js_error_message(&err)))
    }

    fn store_preference(&self, mode: ThemeMode) -> Result<(), Self::Error> {
        let storage = crate::dom::local_storage()
            .map_err(|err| BrowserThemeError::Storage(crate::dom::js_error_message(&err)))?;
        storage
            .set_item(THEME_STORAGE_KEY, mode.as_str())
            .map_err(|err| BrowserThemeError::Storage(crate::dom::js_error_message(&err)))
    }

    fn system_prefers_dark(&self) -> bool {
        crate::dom::window()
            .and_then(|win| {
                win.match_media("(prefers-color-scheme: dark)")
                    .ok()
                    .flatten()
            })
            .is_some_and(|list| list.matches())
    }

    fn apply_scope_marker(&self, mode: ThemeMode) -> Result<(), Self::Error> {
        let root = crate::dom::document()
            .and_then(|doc| doc.document_element())
            .ok_or(BrowserThemeError::MissingRoot)?;
        let classes = root.class_list();
        // One scope marker at a time: clear the siblings before adding.
        for other in ThemeMode::ALL {
            if other != mode {
                let _ = classes.remove_1(&other.scope_class());
            }
        }
        classes
            .add_1(&mode.scope_class())
            .map_err(|err| BrowserThemeError::Dom(crate::dom::js_error_message(&err)))
    }

    fn announce(&self, mode: ThemeMode) -> Result<(), Self::Error> {
        if crate::a11y::announce(&announcement_for(mode)) {
            Ok(())
        } else {
            Err(BrowserThemeError::MissingRegion)
        }
    }
}

/// Localized sentence written to the live region for a mode.
fn announcement_for(mode: ThemeMode) -> String {
    crate::i18n::t(match mode {
        ThemeMode::Light => "theme.announced.light",
        ThemeMode::Dark => "theme.announced.dark",
        ThemeMode::HighContrast => "theme.announced.high_contrast",
    })
}

/// Headless stand-in used when the crate is compiled natively (server
/// rendering and tests): the preference lives in memory, the scope marker
/// and announcement are no-ops.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct HeadlessThemeEnvironment {
    stored: RefCell<Option<String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeEnvironment for HeadlessThemeEnvironment {
    type Error = std::convert::Infallible;

    fn load_preference(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.stored.borrow().clone())
    }

    fn store_preference(&self, mode: ThemeMode) -> Result<(), Self::Error> {
        *self.stored.borrow_mut() = Some(mode.as_str().to_string());
        Ok(())
    }

    fn system_prefers_dark(&self) -> bool {
        false
    }

    fn apply_scope_marker(&self, _mode: ThemeMode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn announce(&self, _mode: ThemeMode) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
type ActiveEnvironment = BrowserThemeEnvironment;
#[cfg(not(target_arch = "wasm32"))]
type ActiveEnvironment = HeadlessThemeEnvironment;

thread_local! {
    static CONTROLLER: RefCell<Option<ThemeController<ActiveEnvironment>>> =
        const { RefCell::new(None) };
    // True only while no valid preference was stored at startup and the
    // user has not picked a mode this session; the system signal may only
    // drive the theme in that window.
    static SYSTEM_DRIVEN: Cell<bool> = const { Cell::new(false) };
}

fn with_controller<R>(f: impl FnOnce(&mut ThemeController<ActiveEnvironment>) -> R) -> R {
    CONTROLLER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let controller = slot.get_or_insert_with(|| {
            let env = ActiveEnvironment::default();
            let stored_is_valid = env
                .load_preference()
                .ok()
                .flatten()
                .as_deref()
                .and_then(ThemeMode::parse)
                .is_some();
            SYSTEM_DRIVEN.with(|flag| flag.set(!stored_is_valid));
            ThemeController::new(env)
        });
        f(controller)
    })
}

/// Force the shared controller into existence, resolving and applying the
/// startup mode (persist + scope marker + announcement) exactly once.
pub fn init() {
    with_controller(|_| {});
}

#[must_use]
pub fn current_mode() -> ThemeMode {
    with_controller(|controller| controller.mode())
}

/// Explicit mode selection. Ends system-driven mode for the rest of the
/// session.
pub fn set_mode(mode: ThemeMode) {
    with_controller(|controller| controller.set_mode(mode));
    SYSTEM_DRIVEN.with(|flag| flag.set(false));
}

/// Advance to the successor mode and return it. Counts as an explicit
/// choice, like [`set_mode`].
pub fn cycle() -> ThemeMode {
    let next = with_controller(|controller| controller.cycle_mode());
    SYSTEM_DRIVEN.with(|flag| flag.set(false));
    next
}

/// React to a change of the system dark signal. Only applies while the
/// session is still system-driven; an explicit or persisted choice wins.
pub fn apply_system_mode(prefers_dark: bool) {
    init();
    if !SYSTEM_DRIVEN.with(Cell::get) {
        return;
    }
    let mode = if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    with_controller(|controller| controller.set_mode(mode));
}

/// Subscribe to the system color-scheme signal for live updates.
#[cfg(target_arch = "wasm32")]
pub fn watch_system_theme() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(list) = crate::dom::window().and_then(|win| {
        win.match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
    }) else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        |event: web_sys::MediaQueryListEvent| {
            apply_system_mode(event.matches());
        },
    );
    list.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}
