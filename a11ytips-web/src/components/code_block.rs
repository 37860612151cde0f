use crate::i18n::t;
use yew::prelude::*;

/// Role of a code pane inside a tip. Each kind carries its own heading,
/// glyph, and styling class; there is no fallthrough styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Bad,
    Good,
    Plain,
}

impl CodeKind {
    const fn css_class(self) -> &'static str {
        match self {
            Self::Bad => "code-block--bad",
            Self::Good => "code-block--good",
            Self::Plain => "code-block--plain",
        }
    }

    const fn glyph(self) -> &'static str {
        match self {
            Self::Bad => "✗",
            Self::Good => "✓",
            Self::Plain => "",
        }
    }

    const fn title_key(self) -> &'static str {
        match self {
            Self::Bad => "tip.bad",
            Self::Good => "tip.good",
            Self::Plain => "tip.plain",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub code: AttrValue,
    pub kind: CodeKind,
}

/// Code pane with an accessible copy button. The copy feedback is
/// cosmetic and clears itself after a moment.
#[function_component(CodeBlock)]
pub fn code_block(props: &Props) -> Html {
    let copied = use_state(|| false);
    let on_copy = {
        let code = props.code.clone();
        let copied = copied.clone();
        Callback::from(move |_| {
            if let Some(win) = crate::dom::window() {
                let clipboard = win.navigator().clipboard();
                let _ = clipboard.write_text(&code);
            }
            copied.set(true);
            #[cfg(target_arch = "wasm32")]
            {
                let copied = copied.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = crate::dom::sleep_ms(2000).await;
                    copied.set(false);
                });
            }
        })
    };
    html! {
        <div class={classes!("code-block", props.kind.css_class())}>
            <div class="code-block__header">
                <span class="code-block__title">
                    <span aria-hidden="true">{ props.kind.glyph() }</span>
                    { t(props.kind.title_key()) }
                </span>
                <button
                    type="button"
                    class="code-block__copy"
                    onclick={on_copy}
                    aria-label={t("tip.copy")}
                >
                    { t("tip.copy") }
                </button>
            </div>
            <span class="code-block__feedback" aria-live="polite">
                { if *copied { t("tip.copied") } else { String::new() } }
            </span>
            <pre><code>{ props.code.clone() }</code></pre>
        </div>
    }
}
