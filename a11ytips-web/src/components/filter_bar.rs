use crate::i18n::t;
use a11ytips_core::filter::{CategoryFilter, DifficultyFilter, TipFilter};
use a11ytips_core::tip::{Category, Difficulty};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub categories: Vec<Category>,
    pub difficulties: Vec<Difficulty>,
    pub filter: TipFilter,
    pub on_category_change: Callback<CategoryFilter>,
    pub on_difficulty_change: Callback<DifficultyFilter>,
    pub on_search_change: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &Props) -> Html {
    let on_category = {
        let cb = p.on_category_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(CategoryFilter::parse(&sel.value()));
            }
        })
    };
    let on_difficulty = {
        let cb = p.on_difficulty_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(DifficultyFilter::parse(&sel.value()));
            }
        })
    };
    let on_search = {
        let cb = p.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());
    html! {
        <form class="filter-bar" role="search" onsubmit={on_submit}>
            <div class="field">
                <label for="category-filter">{ t("filters.category") }</label>
                <select id="category-filter" onchange={on_category}>
                    <option value="all" selected={p.filter.category == CategoryFilter::All}>
                        { t("filters.category_all") }
                    </option>
                    { for p.categories.iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={p.filter.category == CategoryFilter::Only(*category)}
                        >
                            { category.as_str() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="difficulty-filter">{ t("filters.difficulty") }</label>
                <select id="difficulty-filter" onchange={on_difficulty}>
                    <option value="all" selected={p.filter.difficulty == DifficultyFilter::All}>
                        { t("filters.difficulty_all") }
                    </option>
                    { for p.difficulties.iter().map(|difficulty| html! {
                        <option
                            value={difficulty.as_str()}
                            selected={p.filter.difficulty == DifficultyFilter::Only(*difficulty)}
                        >
                            { t(&format!("difficulty.{}", difficulty.key())) }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="search-filter">{ t("filters.search") }</label>
                <input
                    id="search-filter"
                    type="search"
                    placeholder={t("filters.search_placeholder")}
                    value={p.filter.query.clone()}
                    oninput={on_search}
                />
            </div>
            <div class="field">
                <button type="button" class="clear-filters" onclick={on_clear}>
                    { t("filters.clear") }
                </button>
            </div>
        </form>
    }
}
