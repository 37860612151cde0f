use crate::i18n::t;
use a11ytips_core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: ThemeMode,
    pub on_cycle: Callback<()>,
}

/// Button cycling light -> dark -> high contrast. The accessible name
/// announces the mode a press switches TO, not the current one.
#[function_component(ThemeToggle)]
pub fn theme_toggle(p: &Props) -> Html {
    let label = t(switch_key(p.mode.next()));
    let glyph = match p.mode {
        ThemeMode::Light => "🌙",
        ThemeMode::Dark => "🌞",
        ThemeMode::HighContrast => "🔆",
    };
    let onclick = {
        let cb = p.on_cycle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button
            type="button"
            class="theme-toggle"
            onclick={onclick}
            aria-label={label.clone()}
            title={label}
            data-testid="theme-toggle"
        >
            <span aria-hidden="true">{ glyph }</span>
        </button>
    }
}

const fn switch_key(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "theme.switch_to.light",
        ThemeMode::Dark => "theme.switch_to.dark",
        ThemeMode::HighContrast => "theme.switch_to.high_contrast",
    }
}
