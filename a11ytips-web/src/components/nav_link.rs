use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates client-side when a router is mounted and falls
/// back to a plain href otherwise (server rendering, tests). Marks itself
/// `aria-current="page"` on the active route.
#[function_component(NavLink)]
pub fn nav_link(props: &Props) -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let href = props.to.to_path();
    let aria_current = (route.as_ref() == Some(&props.to)).then(|| AttrValue::from("page"));
    let onclick = {
        let navigator = navigator.clone();
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(nav) = navigator.as_ref() {
                e.prevent_default();
                nav.push(&to);
            }
        })
    };
    html! {
        <a href={href} class={props.class.clone()} aria-current={aria_current} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
