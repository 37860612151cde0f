use crate::components::nav_link::NavLink;
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ t("notfound.title") }</h1>
            <p>{ t("notfound.body") }</p>
            <NavLink to={Route::Home}>{ t("notfound.home") }</NavLink>
        </div>
    }
}
