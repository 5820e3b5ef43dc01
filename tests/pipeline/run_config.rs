//! Template-driven runs as the binary performs them.

use reqwest::Url;
use scholarsite::app::{RunConfig, render_output, run};
use scholarsite::state::{SortMode, TargetId};
use scholarsite::theme::{ThemeMode, ThemeStore};

use crate::fixtures::{attrs, full_site, texts, write_template};

fn config(source: scholarsite::sources::DataSource) -> RunConfig {
    RunConfig {
        source,
        origin: Url::parse("http://localhost/").expect("origin"),
        template: None,
        sort: None,
        query: None,
        toggle_theme: false,
        text: false,
        theme_store: None,
    }
}

#[tokio::test]
/// What: A template restricts surfaces and supplies the initial sort.
///
/// Inputs:
/// - Template with only the publications list and a selector preselecting `oldest`.
///
/// Output:
/// - Only publications rendered, oldest first; teaching and news absent from the page.
async fn template_limits_surfaces() {
    let (tmp, source) = full_site();
    let template = write_template(
        tmp.path(),
        r#"<select id="pub-sort"><option value="newest">N</option><option value="oldest" selected>O</option></select>
           <div id="publications-list"></div>"#,
    );
    let mut cfg = config(source);
    cfg.template = Some(template);
    let view = run(&cfg).await.expect("run");
    assert_eq!(view.controls().sort, SortMode::Oldest);
    assert!(!view.page().has(TargetId::TeachingList));
    assert!(view.teaching().is_none());
    let html = render_output(&view, false);
    assert_eq!(
        texts(&html, "#publications-list .publication h3"),
        vec!["Beta bounds", "Gamma notes", "alpha sketches"]
    );
    assert!(texts(&html, "#news-list").is_empty());
}

#[tokio::test]
/// What: Query and theme toggle are applied after load and the theme persists.
///
/// Inputs:
/// - Run with query `seminar`, theme toggle and a temp theme store.
///
/// Output:
/// - One course; dark theme on the document root; `dark` stored; text output lists it.
async fn query_and_theme_toggle() {
    let (tmp, source) = full_site();
    let store = ThemeStore::new(tmp.path().join("theme"));
    let mut cfg = config(source);
    cfg.query = Some("seminar".into());
    cfg.toggle_theme = true;
    cfg.theme_store = Some(store.clone());
    let view = run(&cfg).await.expect("run");
    assert_eq!(view.theme(), ThemeMode::Dark);
    assert_eq!(store.stored(), Some(ThemeMode::Dark));

    let html = render_output(&view, false);
    assert_eq!(attrs(&html, "html", "data-theme"), vec![Some("dark".to_string())]);
    assert_eq!(
        attrs(&html, "#theme-toggle", "aria-pressed"),
        vec![Some("true".to_string())]
    );
    assert_eq!(texts(&html, "#teaching-list article h3"), vec!["Logic Seminar"]);

    let text = render_output(&view, true);
    assert!(text.contains("# teaching-list\nLogic Seminar Fall 2024"));
}
