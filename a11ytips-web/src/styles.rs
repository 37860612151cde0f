//! Global stylesheet assembly. The palettes come from the core token
//! tables; the scope-marker class on the document root decides which one
//! paints the page.

use a11ytips_core::theme::ThemeMode;
use a11ytips_core::tokens::{FONT_BASE, FONT_CODE, LINE_HEIGHT_BASE, Palette};

/// The full global stylesheet, injected once at the app root.
#[must_use]
pub fn global_css() -> String {
    let mut css = String::new();
    // The light palette doubles as the `:root` default so markup painted
    // before the controller applies its scope class is already readable.
    css.push_str(&format!(
        ":root{{{}--font-family-base:{FONT_BASE};--font-family-code:{FONT_CODE};--line-height-base:{LINE_HEIGHT_BASE};}}",
        Palette::for_mode(ThemeMode::Light).css_variables()
    ));
    for mode in ThemeMode::ALL {
        css.push_str(&format!(
            ".{}{{{}}}",
            mode.scope_class(),
            Palette::for_mode(mode).css_variables()
        ));
    }
    css.push_str(crate::a11y::visible_focus_css());
    css.push_str(BASE_RULES);
    css
}

const BASE_RULES: &str = "\
*{box-sizing:border-box;margin:0;padding:0}\
html{font-size:18px;scroll-behavior:smooth}\
body{font-family:var(--font-family-base);background-color:var(--color-background);color:var(--color-text);line-height:var(--line-height-base);transition:background-color .3s,color .3s;min-height:100vh}\
code,pre{font-family:var(--font-family-code)}\
.skip-link{position:absolute;top:-40px;left:0;background:var(--color-primary);color:var(--color-text-on-primary);padding:8px 16px;z-index:100;text-decoration:none;transition:top .3s}\
.skip-link:focus{top:0}\
.site-header{background-color:var(--color-background);box-shadow:0 2px 4px rgba(0,0,0,.1);position:sticky;top:0;z-index:10}\
.site-header__content{display:flex;justify-content:space-between;align-items:center;gap:1rem;padding:1rem;max-width:1200px;margin:0 auto}\
.site-header__brand{font-size:1.5rem;font-weight:700;color:var(--color-primary);text-decoration:none}\
.site-header nav{display:flex;align-items:center;gap:1.5rem}\
.site-header nav a{color:var(--color-text);text-decoration:none;padding:.5rem;border-radius:4px}\
.site-header nav a:hover,.site-header nav a[aria-current=page]{color:var(--color-primary)}\
.theme-toggle{background:none;border:none;cursor:pointer;color:var(--color-text);padding:.5rem;border-radius:50%;font-size:1.25rem}\
.theme-toggle:hover{background-color:var(--color-background-hover)}\
.lang-select,.filter-bar select,.filter-bar input,.category-search input{padding:.5rem;border-radius:4px;border:1px solid var(--color-border);background-color:var(--color-input-bg);color:var(--color-text);font-size:1rem}\
main{max-width:1200px;width:100%;margin:0 auto;padding:2rem 1rem}\
.hero{text-align:center;margin-bottom:3rem}\
.hero p{font-size:1.25rem;color:var(--color-text-secondary);max-width:800px;margin:0 auto}\
.filter-bar{background-color:var(--color-background-alt);padding:1rem;border-radius:8px;margin-bottom:2rem;display:grid;grid-template-columns:repeat(auto-fit,minmax(250px,1fr));gap:1rem}\
.filter-bar .field{display:flex;flex-direction:column;gap:.5rem}\
.filter-bar label{font-weight:500;font-size:.875rem}\
.filter-bar .clear-filters{background:none;border:none;color:var(--color-primary);font-size:.875rem;cursor:pointer;padding:.5rem;align-self:flex-start}\
.filter-bar .clear-filters:hover{text-decoration:underline}\
.results-count{margin-bottom:1.5rem;color:var(--color-text-secondary);font-size:.875rem}\
.tips-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:2rem}\
.tip-card{display:block;background-color:var(--color-card-bg);border:1px solid var(--color-border);border-radius:8px;overflow:hidden;text-decoration:none;color:var(--color-text);height:100%}\
.tip-card:hover{transform:translateY(-4px)}\
.tip-card__header{background-color:var(--color-primary);padding:1rem;color:var(--color-text-on-primary)}\
.tip-card__category{font-size:.75rem;text-transform:uppercase;letter-spacing:.5px;margin-bottom:.5rem}\
.tip-card__body{padding:1rem}\
.tip-card__body p{font-size:.875rem;color:var(--color-text-secondary)}\
.tip-card__footer{padding:0 1rem 1rem;display:flex;justify-content:flex-start}\
.tags{display:flex;flex-wrap:wrap;gap:.5rem;margin-top:1rem}\
.tags span{font-size:.75rem;background-color:var(--color-background-alt);color:var(--color-text-secondary);padding:.25rem .5rem;border-radius:4px}\
.badge{font-size:.75rem;padding:.25rem .5rem;border-radius:4px}\
.badge-success{background-color:var(--color-success-bg);color:var(--color-success)}\
.badge-warning{background-color:var(--color-warning-bg);color:var(--color-warning)}\
.badge-danger{background-color:var(--color-danger-bg);color:var(--color-danger)}\
.empty-state{text-align:center;padding:3rem 0;color:var(--color-text-secondary)}\
.category-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(250px,1fr));gap:2rem}\
.category-card{border-radius:8px;padding:2rem;text-align:center;text-decoration:none;color:var(--color-text);border:1px solid var(--color-border)}\
.category-card .icon{font-size:3rem;margin-bottom:1rem}\
.category-card h2{font-size:1.25rem;margin-bottom:.5rem}\
.category-card p{font-size:.875rem;color:var(--color-text-secondary)}\
.category-search{margin-bottom:2rem}\
.category-search input{width:100%}\
.tip-detail .back-link{display:inline-flex;gap:.5rem;color:var(--color-primary);text-decoration:none;margin-bottom:2rem;font-weight:500}\
.tip-detail .back-link:hover{text-decoration:underline}\
.tip-detail .meta{display:flex;flex-wrap:wrap;gap:1rem;margin:1rem 0;font-size:.875rem;color:var(--color-text-secondary)}\
.tip-detail .meta strong{color:var(--color-text)}\
.tip-detail section{margin-bottom:3rem}\
.tip-detail .lead{font-size:1.125rem;margin:1.5rem 0}\
.wcag-criteria{background-color:var(--color-background-alt);padding:1rem;border-radius:8px;margin-bottom:2rem}\
.wcag-criteria ul,.resources ul{list-style:none;padding:0;margin:0}\
.wcag-criteria li,.resources li{margin-bottom:.5rem}\
.wcag-criteria a,.resources a{color:var(--color-primary);text-decoration:none}\
.wcag-criteria a:hover,.resources a:hover{text-decoration:underline}\
.code-block{margin:1rem 0;border-radius:8px;overflow:hidden;border:1px solid var(--color-border)}\
.code-block__header{display:flex;justify-content:space-between;align-items:center;padding:.5rem 1rem;border-bottom:1px solid var(--color-border);background-color:var(--color-code-header-bg)}\
.code-block__title{font-weight:500;font-size:.875rem;display:flex;align-items:center;gap:.5rem}\
.code-block--bad .code-block__header{background-color:var(--color-danger-bg)}\
.code-block--bad .code-block__title{color:var(--color-danger)}\
.code-block--good .code-block__header{background-color:var(--color-success-bg)}\
.code-block--good .code-block__title{color:var(--color-success)}\
.code-block pre{margin:0;padding:1rem;overflow-x:auto;background-color:var(--color-code-bg);font-size:.875rem;line-height:1.5}\
.code-block__copy{background:none;border:1px solid var(--color-border);border-radius:4px;color:var(--color-text);font-size:.75rem;padding:4px 8px;cursor:pointer}\
.code-block__feedback{font-size:.75rem;color:var(--color-success);padding:0 1rem}\
.site-footer{background-color:var(--color-background-alt);padding:1.5rem 0;margin-top:2rem;text-align:center;color:var(--color-text-secondary);font-size:.875rem}\
@media (max-width:768px){html{font-size:16px}.site-header__content{flex-direction:column}}\
@media (prefers-reduced-motion:reduce){*{animation-duration:.01ms!important;animation-iteration-count:1!important;transition-duration:.01ms!important;scroll-behavior:auto!important}}\
";
