use crate::components::nav_link::NavLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::i18n::t;
use crate::router::Route;
use a11ytips_core::theme::ThemeMode;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_theme: ThemeMode,
    pub on_cycle_theme: Callback<()>,
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header class="site-header" role="banner">
            <a href="#main" class="skip-link">{ t("ui.skip_to_content") }</a>
            <div class="site-header__content">
                <NavLink to={Route::Home} class="site-header__brand">
                    <span aria-hidden="true">{ "🌐 " }</span>
                    <span>{ t("site.title") }</span>
                </NavLink>
                <nav aria-label={t("nav.main")}>
                    <NavLink to={Route::Home}>{ t("nav.home") }</NavLink>
                    <NavLink to={Route::Categories}>{ t("nav.categories") }</NavLink>
                    <NavLink to={Route::About}>{ t("nav.about") }</NavLink>
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select
                        id="lang-select"
                        class="lang-select"
                        onchange={on_change}
                        aria-label={t("nav.language")}
                    >
                        { for crate::i18n::locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>
                                { meta.name }
                            </option>
                        }) }
                    </select>
                    <ThemeToggle mode={p.current_theme} on_cycle={p.on_cycle_theme.clone()} />
                </nav>
            </div>
        </header>
    }
}
