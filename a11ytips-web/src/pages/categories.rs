use crate::i18n::{t, tr};
use crate::router::Route;
use a11ytips_core::tip::Category;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Applies the category filter and navigates to the listing.
    pub on_browse: Callback<Category>,
}

#[function_component(CategoriesPage)]
pub fn categories_page(p: &Props) -> Html {
    let query = use_state(String::new);
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                query.set(input.value());
            }
        })
    };
    let needle = query.trim().to_lowercase();
    let visible: Vec<(Category, usize)> = crate::data::catalog()
        .category_counts()
        .into_iter()
        .filter(|(category, _)| {
            needle.is_empty() || category.as_str().to_lowercase().contains(&needle)
        })
        .collect();
    html! {
        <div class="categories-page">
            <h1>{ t("categories.title") }</h1>
            <p>{ t("categories.intro") }</p>
            <div class="category-search">
                <label for="category-search" class="sr-only">{ t("categories.search_label") }</label>
                <input
                    id="category-search"
                    type="search"
                    placeholder={t("categories.search_placeholder")}
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>
            <div class="category-grid">
                { for visible.into_iter().map(|(category, count)| render_card(category, count, &p.on_browse)) }
            </div>
        </div>
    }
}

fn render_card(category: Category, count: usize, on_browse: &Callback<Category>) -> Html {
    let onclick = {
        let on_browse = on_browse.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_browse.emit(category);
        })
    };
    let count_text = {
        let count = count.to_string();
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("categories.count", Some(&args))
    };
    html! {
        <a
            class="category-card"
            href={Route::Home.to_path()}
            style={format!("background-color:{}", category.tint())}
            onclick={onclick}
        >
            <div class="icon" aria-hidden="true">{ category.icon() }</div>
            <h2>{ category.as_str() }</h2>
            <p>{ count_text }</p>
        </a>
    }
}
