use crate::app::state::AppState;
use crate::router::Route;
use a11ytips_core::filter::{CategoryFilter, DifficultyFilter, TipFilter};
use a11ytips_core::tip::Category;
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub theme_cycle: Callback<()>,
    pub lang_change: Callback<String>,
    pub category_change: Callback<CategoryFilter>,
    pub difficulty_change: Callback<DifficultyFilter>,
    pub search_change: Callback<String>,
    pub clear_filters: Callback<()>,
    pub browse_category: Callback<Category>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            theme_cycle: build_theme_cycle(state),
            lang_change: build_lang_change(state),
            category_change: build_category_change(state),
            difficulty_change: build_difficulty_change(state),
            search_change: build_search_change(state),
            clear_filters: build_clear_filters(state),
            browse_category: build_browse_category(state, navigator),
        }
    }
}

pub fn build_theme_cycle(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    Callback::from(move |()| {
        let next = crate::theme::cycle();
        theme.set(next);
    })
}

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

pub fn build_category_change(state: &AppState) -> Callback<CategoryFilter> {
    let filter = state.filter.clone();
    Callback::from(move |category: CategoryFilter| {
        let mut next = (*filter).clone();
        next.category = category;
        filter.set(next);
    })
}

pub fn build_difficulty_change(state: &AppState) -> Callback<DifficultyFilter> {
    let filter = state.filter.clone();
    Callback::from(move |difficulty: DifficultyFilter| {
        let mut next = (*filter).clone();
        next.difficulty = difficulty;
        filter.set(next);
    })
}

pub fn build_search_change(state: &AppState) -> Callback<String> {
    let filter = state.filter.clone();
    Callback::from(move |query: String| {
        let mut next = (*filter).clone();
        next.query = query;
        filter.set(next);
    })
}

pub fn build_clear_filters(state: &AppState) -> Callback<()> {
    let filter = state.filter.clone();
    Callback::from(move |()| {
        filter.set(TipFilter::default());
    })
}

pub fn build_browse_category(state: &AppState, navigator: Option<Navigator>) -> Callback<Category> {
    let filter = state.filter.clone();
    Callback::from(move |category: Category| {
        filter.set(TipFilter::for_category(category));
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}
