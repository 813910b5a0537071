use scraper::{Html, Selector};

use rusty_footy::view::index::{DEFAULT_INDEX_TITLE, render_index_template};

#[test]
fn test5_index_shell_points_at_static_assets() -> Result<(), Box<dyn std::error::Error>> {
    let markup = render_index_template(DEFAULT_INDEX_TITLE).into_string();
    let document = Html::parse_document(&markup);

    let title = Selector::parse("title").expect("valid selector");
    let text: String = document
        .select(&title)
        .next()
        .ok_or("missing title")?
        .text()
        .collect();
    assert_eq!(text, "Matchday");

    let app = Selector::parse("div#app").expect("valid selector");
    let root = document.select(&app).next().ok_or("missing #app")?;
    assert_eq!(root.value().attr("data-api-base"), Some("api"));

    let script = Selector::parse("script[type=module]").expect("valid selector");
    let src = document
        .select(&script)
        .next()
        .and_then(|s| s.value().attr("src"));
    assert_eq!(src, Some("static/app.js"));

    let css = Selector::parse("link[rel=stylesheet]").expect("valid selector");
    assert_eq!(
        document.select(&css).next().and_then(|l| l.value().attr("href")),
        Some("static/app.css")
    );
    Ok(())
}

#[test]
fn test5_title_is_escaped() {
    let markup = render_index_template("<Derby & Co>").into_string();
    assert!(markup.contains("&lt;Derby &amp; Co&gt;"));
    assert!(!markup.contains("<Derby"));
}
