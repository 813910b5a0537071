use maud::{Markup, html};

pub const DEFAULT_INDEX_TITLE: &str = "Matchday";

/// Page shell for the browser ui. Everything past `#app` is drawn client side.
#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href="static/app.css";
                title { (title) }
                script type="module" src="static/app.js" defer {}
            }
            body {
                div id="app" data-api-base="api" {
                    h1 { (title) }
                    noscript { "This page needs JavaScript to load fixtures and match data." }
                }
            }
        }
    }
}
