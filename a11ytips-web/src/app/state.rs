use a11ytips_core::filter::TipFilter;
use a11ytips_core::theme::ThemeMode;
use yew::prelude::*;

/// Render-layer mirrors of the shared state: the theme controller owns
/// the mode, the i18n bundle owns the language; these handles exist so
/// Yew re-renders when either changes.
#[derive(Clone)]
pub struct AppState {
    pub theme: UseStateHandle<ThemeMode>,
    pub filter: UseStateHandle<TipFilter>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        theme: use_state(crate::theme::current_mode),
        filter: use_state(TipFilter::default),
        current_language: use_state(crate::i18n::current_lang),
    }
}
