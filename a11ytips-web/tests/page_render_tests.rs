use a11ytips_core::filter::{CategoryFilter, TipFilter};
use a11ytips_core::tip::Category;
use a11ytips_web::pages::about::AboutPage;
use a11ytips_web::pages::categories::CategoriesPage;
use a11ytips_web::pages::home::HomePage;
use a11ytips_web::pages::not_found::NotFoundPage;
use a11ytips_web::pages::tip_detail::TipDetailPage;
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn home_props(filter: TipFilter) -> a11ytips_web::pages::home::Props {
    a11ytips_web::pages::home::Props {
        filter,
        on_category_change: Callback::noop(),
        on_difficulty_change: Callback::noop(),
        on_search_change: Callback::noop(),
        on_clear: Callback::noop(),
    }
}

#[test]
fn home_lists_the_whole_catalog_unfiltered() {
    a11ytips_web::i18n::set_lang("en");
    let total = a11ytips_web::data::catalog().len();
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(TipFilter::default())).render(),
    );
    assert!(html.contains("tips-grid"));
    assert!(html.contains(&format!("{total} tips found")));
    assert!(html.contains("Use semantic buttons"));
}

#[test]
fn home_narrows_by_category_filter() {
    a11ytips_web::i18n::set_lang("en");
    let filter = TipFilter {
        category: CategoryFilter::Only(Category::Images),
        ..TipFilter::default()
    };
    let html =
        block_on(LocalServerRenderer::<HomePage>::with_props(home_props(filter)).render());
    assert!(html.contains("1 tip found"));
    assert!(html.contains("alternative text"));
    assert!(!html.contains("Use semantic buttons"));
}

#[test]
fn home_shows_the_empty_state_when_nothing_matches() {
    a11ytips_web::i18n::set_lang("en");
    let filter = TipFilter {
        query: "zzz-no-such-tip".to_string(),
        ..TipFilter::default()
    };
    let html =
        block_on(LocalServerRenderer::<HomePage>::with_props(home_props(filter)).render());
    assert!(html.contains("No tips found"));
    assert!(html.contains("empty-state"));
    assert!(!html.contains("tips-grid"));
}

#[test]
fn categories_page_lists_every_category_with_counts() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::pages::categories::Props {
        on_browse: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CategoriesPage>::with_props(props).render());
    for category in a11ytips_web::data::catalog().categories() {
        assert!(html.contains(category.as_str()), "missing {category}");
    }
    assert!(html.contains("category-card"));
    assert!(html.contains("1 tip"));
}

#[test]
fn tip_detail_renders_examples_wcag_and_resources() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::pages::tip_detail::Props {
        id: AttrValue::from("alt-text"),
    };
    let html = block_on(LocalServerRenderer::<TipDetailPage>::with_props(props).render());
    assert!(html.contains("Provide alternative text for images"));
    assert!(html.contains("code-block--bad"));
    assert!(html.contains("code-block--good"));
    assert!(html.contains("quickref/#1.1.1"));
    assert!(html.contains("Further resources"));
    assert!(html.contains("Updated 2025-06-02"));
}

#[test]
fn tip_detail_handles_unknown_ids() {
    a11ytips_web::i18n::set_lang("en");
    let props = a11ytips_web::pages::tip_detail::Props {
        id: AttrValue::from("no-such-tip"),
    };
    let html = block_on(LocalServerRenderer::<TipDetailPage>::with_props(props).render());
    assert!(html.contains("Tip not found"));
    assert!(html.contains("Back to all tips"));
}

#[test]
fn about_page_renders_in_both_locales() {
    a11ytips_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<AboutPage>::new().render());
    assert!(html.contains("About A11yTips"));

    a11ytips_web::i18n::set_lang("pt");
    let html = block_on(LocalServerRenderer::<AboutPage>::new().render());
    assert!(html.contains("Sobre o A11yTips"));
}

#[test]
fn not_found_page_links_home() {
    a11ytips_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<NotFoundPage>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("href=\"/\""));
}
