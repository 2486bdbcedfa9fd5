use super::{PageError, PageFrame, Theme};
use crate::responder::ResponseWriter;
use askama::Template;
use axum::http::StatusCode;
use shared::{DangerousRecord, Route, TEXT_HTML};

const PAGE_CSS: &str = include_str!("../../static/dangerous.css");

const THEME: Theme = Theme {
    accent: "#ff9800",
    tile_background: "#fff3e0",
    tile_count: "#e65100",
};

#[derive(Template)]
#[template(path = "dangerous.html")]
struct DangerousPage<'a> {
    page: PageFrame,
    record: &'a DangerousRecord,
}

/// Render the dangerous behavior summary page
pub fn render(record: &DangerousRecord) -> askama::Result<String> {
    DangerousPage {
        page: PageFrame::new("위험행동 기록", Route::DangerousRecord, THEME, PAGE_CSS),
        record,
    }
    .render()
}

/// Handle `GET /dangerous_record`
pub fn dangerous_record_page<W: ResponseWriter>(
    writer: &mut W,
    record: &DangerousRecord,
) -> Result<(), PageError<W::Error>> {
    let html = render(record)?;
    tracing::debug!(
        "Rendered dangerous record page ({} incidents, {} bytes)",
        record.incidents.len(),
        html.len()
    );
    writer
        .send(StatusCode::OK, TEXT_HTML, html)
        .map_err(PageError::Send)
}
