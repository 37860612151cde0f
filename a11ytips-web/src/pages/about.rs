use crate::i18n::t;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="about-page">
            <h1>{ t("about.title") }</h1>
            <p class="lead">{ t("about.lead") }</p>
            <p>{ t("about.body1") }</p>
            <p>{ t("about.body2") }</p>
        </div>
    }
}
