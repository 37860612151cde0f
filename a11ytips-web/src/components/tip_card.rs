use crate::components::nav_link::NavLink;
use crate::i18n::t;
use crate::router::Route;
use a11ytips_core::tip::Tip;
use yew::prelude::*;

const VISIBLE_TAGS: usize = 3;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub tip: Tip,
}

/// Listing card linking to a tip's detail page.
#[function_component(TipCard)]
pub fn tip_card(p: &Props) -> Html {
    let tip = &p.tip;
    let overflow = tip.tags.len().saturating_sub(VISIBLE_TAGS);
    html! {
        <NavLink to={Route::tip(&tip.id)} class="tip-card">
            <div class="tip-card__header">
                <div class="tip-card__category">{ tip.category.as_str() }</div>
                <h3>{ tip.title.clone() }</h3>
            </div>
            <div class="tip-card__body">
                <p>{ tip.description.clone() }</p>
                <div class="tags">
                    { for tip.tags.iter().take(VISIBLE_TAGS).map(|tag| html! {
                        <span>{ tag.clone() }</span>
                    }) }
                    { (overflow > 0)
                        .then(|| html! { <span>{ format!("+{overflow}") }</span> })
                        .unwrap_or_default() }
                </div>
            </div>
            <div class="tip-card__footer">
                <span class={classes!("badge", tip.difficulty.badge_class())}>
                    { t(&format!("difficulty.{}", tip.difficulty.key())) }
                </span>
            </div>
        </NavLink>
    }
}
