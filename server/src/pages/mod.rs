pub mod anomalous;
pub mod dangerous;

pub use anomalous::anomalous_record_page;
pub use dangerous::dangerous_record_page;

use crate::responder::SendError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::Route;

const LAYOUT_CSS: &str = include_str!("../../static/layout.css");

/// Colours injected as CSS custom properties
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: &'static str,
    pub tile_background: &'static str,
    pub tile_count: &'static str,
}

/// One entry of the bottom navigation bar
#[derive(Debug, Clone)]
pub struct NavLink {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl NavLink {
    /// All navigation entries with `current` marked active
    pub fn for_page(current: Route) -> Vec<NavLink> {
        Route::NAV
            .iter()
            .map(|&route| NavLink {
                path: route.path(),
                icon: route.icon(),
                label: route.label(),
                active: route == current,
            })
            .collect()
    }
}

/// Everything `layout.html` needs around a page's cards
#[derive(Debug, Clone)]
pub struct PageFrame {
    pub title: &'static str,
    pub theme: Theme,
    pub layout_css: &'static str,
    pub extra_css: &'static str,
    pub nav: Vec<NavLink>,
}

impl PageFrame {
    pub fn new(title: &'static str, route: Route, theme: Theme, extra_css: &'static str) -> Self {
        Self {
            title,
            theme,
            layout_css: LAYOUT_CSS,
            extra_css,
            nav: NavLink::for_page(route),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError<E> {
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to send page: {0}")]
    Send(E),
}

impl IntoResponse for PageError<SendError> {
    fn into_response(self) -> Response {
        match self {
            PageError::Send(err) => err.into_response(),
            PageError::Render(err) => {
                tracing::error!("Failed to render page: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Elements that never take a closing tag
    const VOID: &[&str] = &["meta", "br", "hr", "img", "input", "link"];

    /// Check that every opened tag is closed in order.
    ///
    /// Good enough for the markup these pages produce: quoted attributes
    /// never contain `>` and the only raw-text element is `<style>`.
    pub fn assert_well_formed(html: &str) {
        let mut stack: Vec<String> = Vec::new();
        let mut rest = html;

        while let Some(start) = rest.find('<') {
            rest = &rest[start..];
            let end = rest.find('>').expect("unterminated tag");
            let tag = &rest[1..end];
            rest = &rest[end + 1..];

            if tag.starts_with('!') {
                continue;
            }

            if let Some(name) = tag.strip_prefix('/') {
                let open = stack.pop().unwrap_or_else(|| panic!("stray </{}>", name));
                assert_eq!(open, name, "mismatched closing tag");
                continue;
            }

            let name = tag
                .split_whitespace()
                .next()
                .expect("empty tag")
                .to_ascii_lowercase();
            if VOID.contains(&name.as_str()) {
                continue;
            }
            if name == "style" {
                let close = rest.find("</style>").expect("unterminated style");
                rest = &rest[close + "</style>".len()..];
                continue;
            }
            stack.push(name);
        }

        assert!(stack.is_empty(), "unclosed tags: {:?}", stack);
    }

    /// Hrefs of the bottom navigation links and whether each is active
    pub fn nav_links(html: &str) -> Vec<(String, bool)> {
        let start = html.find("<div class='bottom-nav'>").expect("no bottom nav");
        let nav = &html[start..];
        let nav = &nav[..nav.find("</div></body>").expect("nav not at end of body")];

        nav.split("<a href='")
            .skip(1)
            .map(|link| {
                let (href, rest) = link.split_once('\'').expect("unterminated href");
                let active = rest.starts_with(" class='nav-item active'");
                (href.to_string(), active)
            })
            .collect()
    }
}
