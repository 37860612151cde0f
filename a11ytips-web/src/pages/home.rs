use crate::components::filter_bar::FilterBar;
use crate::components::tip_card::TipCard;
use crate::i18n::{t, tr};
use a11ytips_core::filter::{CategoryFilter, DifficultyFilter, TipFilter};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filter: TipFilter,
    pub on_category_change: Callback<CategoryFilter>,
    pub on_difficulty_change: Callback<DifficultyFilter>,
    pub on_search_change: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let catalog = crate::data::catalog();
    let visible = p.filter.apply(catalog.tips());
    let results_line = if visible.is_empty() {
        t("home.results_none")
    } else {
        let count = visible.len().to_string();
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("home.results", Some(&args))
    };
    let listing = if visible.is_empty() {
        html! {
            <div class="empty-state">
                <p>{ t("home.empty_title") }</p>
                <p>{ t("home.empty_hint") }</p>
            </div>
        }
    } else {
        html! {
            <div class="tips-grid">
                { for visible.into_iter().map(|tip| html! { <TipCard tip={(*tip).clone()} /> }) }
            </div>
        }
    };
    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{ t("site.title") }</h1>
                <p>{ t("site.tagline") }</p>
            </section>
            <FilterBar
                categories={catalog.categories()}
                difficulties={catalog.difficulties()}
                filter={p.filter.clone()}
                on_category_change={p.on_category_change.clone()}
                on_difficulty_change={p.on_difficulty_change.clone()}
                on_search_change={p.on_search_change.clone()}
                on_clear={p.on_clear.clone()}
            />
            <p class="results-count">{ results_line }</p>
            { listing }
        </div>
    }
}
