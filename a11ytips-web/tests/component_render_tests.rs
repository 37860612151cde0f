use a11ytips_core::filter::TipFilter;
use a11ytips_core::theme::ThemeMode;
use a11ytips_core::tip::{Category, Difficulty, Tip};
use a11ytips_web::components::code_block::{CodeBlock, CodeKind};
use a11ytips_web::components::filter_bar::FilterBar;
use a11ytips_web::components::footer::Footer;
use a11ytips_web::components::header::Header;
use a11ytips_web::components::theme_toggle::ThemeToggle;
use a11ytips_web::components::tip_card::TipCard;
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn fixture_tip() -> Tip {
    Tip {
        id: "semantic-buttons".to_string(),
        title: "Use semantic buttons".to_string(),
        category: Category::Html,
        difficulty: Difficulty::Beginner,
        description: "Buttons should be button elements.".to_string(),
        bad_code: "<div onclick=\"go()\">Go</div>".to_string(),
        good_code: "<button onclick=\"go()\">Go</button>".to_string(),
        explanation: "Native buttons are focusable.".to_string(),
        wcag_criteria: vec!["2.1.1 Keyboard".to_string()],
        tags: vec![
            "buttons".to_string(),
            "semantics".to_string(),
            "html".to_string(),
            "forms".to_string(),
        ],
        resources: Vec::new(),
        created: "2025-06-01".to_string(),
        updated: "2025-06-01".to_string(),
    }
}

#[test]
fn header_renders_skip_link_nav_and_controls() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::components::header::Props {
        current_theme: ThemeMode::Light,
        on_cycle_theme: Callback::noop(),
        on_lang_change: Callback::noop(),
        current_lang: "en".to_string(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("#main"));
    assert!(html.contains("skip-link"));
    assert!(html.contains("lang-select"));
    assert!(html.contains("theme-toggle"));
    assert!(html.contains("Categories"));
}

#[test]
fn footer_renders_copy() {
    a11ytips_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("A11yTips"));
}

#[test]
fn theme_toggle_names_the_next_mode() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::components::theme_toggle::Props {
        mode: ThemeMode::Light,
        on_cycle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThemeToggle>::with_props(props).render());
    assert!(html.contains("Switch to dark theme"));

    let props = a11ytips_web::components::theme_toggle::Props {
        mode: ThemeMode::HighContrast,
        on_cycle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThemeToggle>::with_props(props).render());
    assert!(html.contains("Switch to light theme"));
}

#[test]
fn tip_card_shows_meta_and_truncates_tags() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::components::tip_card::Props { tip: fixture_tip() };
    let html = block_on(LocalServerRenderer::<TipCard>::with_props(props).render());
    assert!(html.contains("Use semantic buttons"));
    assert!(html.contains("HTML"));
    assert!(html.contains("Beginner"));
    assert!(html.contains("/tips/semantic-buttons"));
    assert!(html.contains("+1"), "fourth tag collapses into an overflow chip");
}

#[test]
fn filter_bar_lists_labelled_controls() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::components::filter_bar::Props {
        categories: vec![Category::Html, Category::Images],
        difficulties: vec![Difficulty::Beginner, Difficulty::Advanced],
        filter: TipFilter::default(),
        on_category_change: Callback::noop(),
        on_difficulty_change: Callback::noop(),
        on_search_change: Callback::noop(),
        on_clear: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
    assert!(html.contains("category-filter"));
    assert!(html.contains("difficulty-filter"));
    assert!(html.contains("search-filter"));
    assert!(html.contains("All categories"));
    assert!(html.contains("All levels"));
    assert!(html.contains("Clear filters"));
}

#[test]
fn code_block_styles_bad_and_good_panes_distinctly() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::components::code_block::Props {
        code: AttrValue::from("<div>bad</div>"),
        kind: CodeKind::Bad,
    };
    let html = block_on(LocalServerRenderer::<CodeBlock>::with_props(props).render());
    assert!(html.contains("code-block--bad"));
    assert!(html.contains("Not recommended"));
    assert!(html.contains("Copy code"));

    let props = a11ytips_web::components::code_block::Props {
        code: AttrValue::from("<button>good</button>"),
        kind: CodeKind::Good,
    };
    let html = block_on(LocalServerRenderer::<CodeBlock>::with_props(props).render());
    assert!(html.contains("code-block--good"));
    assert!(html.contains("Recommended"));
}
