use crate::components::code_block::{CodeBlock, CodeKind};
use crate::components::nav_link::NavLink;
use crate::i18n::{fmt_date_iso, t, tr};
use crate::router::Route;
use a11ytips_core::tip::{Tip, wcag_quickref_url};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
}

#[function_component(TipDetailPage)]
pub fn tip_detail_page(p: &Props) -> Html {
    match crate::data::catalog().tip_by_id(&p.id) {
        Some(tip) => render_tip(tip),
        None => html! {
            <div class="tip-detail">
                <h1>{ t("tip.missing_title") }</h1>
                <p>{ t("tip.missing_body") }</p>
                <NavLink to={Route::Home} class="back-link">{ t("tip.back") }</NavLink>
            </div>
        },
    }
}

fn render_tip(tip: &Tip) -> Html {
    let updated = {
        let date = fmt_date_iso(&tip.updated);
        let mut args = BTreeMap::new();
        args.insert("date", date.as_str());
        tr("tip.updated", Some(&args))
    };
    html! {
        <article class="tip-detail">
            <NavLink to={Route::Home} class="back-link">
                { format!("\u{2190} {}", t("tip.back")) }
            </NavLink>
            <header>
                <h1>{ tip.title.clone() }</h1>
                <div class="meta">
                    <div>
                        { t("tip.category") }{ ": " }
                        <strong>{ tip.category.as_str() }</strong>
                    </div>
                    <div>
                        { t("tip.difficulty") }{ ": " }
                        <strong>{ t(&format!("difficulty.{}", tip.difficulty.key())) }</strong>
                    </div>
                    <div>{ updated }</div>
                </div>
                <div class="tags">
                    { for tip.tags.iter().map(|tag| html! { <span>{ tag.clone() }</span> }) }
                </div>
            </header>
            <p class="lead">{ tip.description.clone() }</p>
            <section>
                <h2>{ t("tip.examples") }</h2>
                <CodeBlock code={AttrValue::from(tip.bad_code.clone())} kind={CodeKind::Bad} />
                <CodeBlock code={AttrValue::from(tip.good_code.clone())} kind={CodeKind::Good} />
            </section>
            <section>
                <h2>{ t("tip.explanation") }</h2>
                <p>{ tip.explanation.clone() }</p>
            </section>
            { render_wcag(tip) }
            { render_resources(tip) }
        </article>
    }
}

fn render_wcag(tip: &Tip) -> Html {
    if tip.wcag_criteria.is_empty() {
        return Html::default();
    }
    html! {
        <section class="wcag-criteria">
            <h2>{ t("tip.wcag") }</h2>
            <ul>
                { for tip.wcag_criteria.iter().map(|criterion| html! {
                    <li>
                        <a
                            href={wcag_quickref_url(criterion)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { criterion.clone() }
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}

fn render_resources(tip: &Tip) -> Html {
    if tip.resources.is_empty() {
        return Html::default();
    }
    html! {
        <section class="resources">
            <h2>{ t("tip.resources") }</h2>
            <ul>
                { for tip.resources.iter().map(|resource| html! {
                    <li>
                        <a
                            href={resource.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { resource.title.clone() }
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}
