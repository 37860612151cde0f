pub mod handlers;
pub mod state;

pub use handlers::AppHandlers;

use crate::router::Route;
use state::AppState;
use yew::prelude::*;
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let state = state::use_app_state();
    let navigator = use_navigator();
    let handlers = AppHandlers::new(&state, navigator);
    render_shell(&state, &handlers)
}

/// Header, routed main landmark, and footer around the current page.
pub fn render_shell(state: &AppState, handlers: &AppHandlers) -> Html {
    let render = {
        let state = state.clone();
        let handlers = handlers.clone();
        Callback::from(move |route: Route| render_route(&state, &handlers, route))
    };
    html! {
        <>
            <style>{ crate::styles::global_css() }</style>
            <crate::components::header::Header
                current_theme={*state.theme}
                on_cycle_theme={handlers.theme_cycle.clone()}
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <Switch<Route> render={render} />
            </main>
            <crate::components::footer::Footer />
        </>
    }
}

/// The page body for a route.
#[must_use]
pub fn render_route(state: &AppState, handlers: &AppHandlers, route: Route) -> Html {
    match route {
        Route::Home => html! {
            <crate::pages::home::HomePage
                filter={(*state.filter).clone()}
                on_category_change={handlers.category_change.clone()}
                on_difficulty_change={handlers.difficulty_change.clone()}
                on_search_change={handlers.search_change.clone()}
                on_clear={handlers.clear_filters.clone()}
            />
        },
        Route::Categories => html! {
            <crate::pages::categories::CategoriesPage
                on_browse={handlers.browse_category.clone()}
            />
        },
        Route::TipDetail { id } => html! {
            <crate::pages::tip_detail::TipDetailPage id={AttrValue::from(id)} />
        },
        Route::About => html! { <crate::pages::about::AboutPage /> },
        Route::NotFound => html! { <crate::pages::not_found::NotFoundPage /> },
    }
}
