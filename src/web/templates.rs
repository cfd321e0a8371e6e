//! HTML templates.

use axum::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::web::assets::{PAGE_CSS, PAGE_SCRIPT};

/// A freshly rendered hash to embed in the page.
pub struct GeneratedView<'a> {
    pub name: &'a str,
    pub data_url: &'a str,
    pub width: u32,
    pub height: u32,
}

/// Base layout shared by every page.
#[must_use]
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Visual Hash" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                h1 { "Visual Hash" }
                (content)
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    }
}

fn name_form(name: &str) -> Markup {
    html! {
        form class="name-form" method="post" action="/generate-plot" {
            input type="text" id="name" name="name" placeholder="Enter a name" value=(name) required;
            button type="submit" class="generate" { "Generate" }
            button type="button" id="random-name-btn" class="random-name" { "Random name" }
        }
    }
}

/// Landing page, optionally showing a generated image.
#[must_use]
pub fn index_page(view: Option<&GeneratedView<'_>>) -> Markup {
    let content = html! {
        (name_form(view.map_or("", |v| v.name)))
        @if let Some(view) = view {
            div class="result" {
                canvas id="visual-hash-canvas"
                    width=(view.width)
                    height=(view.height)
                    data-image=(view.data_url)
                    data-name=(view.name) {}
                noscript {
                    img src=(view.data_url) alt=(format!("Visual hash of {}", view.name));
                }
                div id="download-btn-container" {}
            }
        }
    };
    let title = view.map_or("Home", |v| v.name);
    layout(title, content)
}

/// Error page with the status and a short message.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let content = html! {
        (name_form(""))
        div class="error" {
            strong { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p { (message) }
        }
    };
    layout("Error", content)
}
