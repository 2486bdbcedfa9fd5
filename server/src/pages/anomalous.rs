use super::{PageError, PageFrame, Theme};
use crate::responder::ResponseWriter;
use askama::Template;
use axum::http::StatusCode;
use shared::{AnomalousRecord, Route, TEXT_HTML};

const PAGE_CSS: &str = include_str!("../../static/anomalous.css");

const THEME: Theme = Theme {
    accent: "#00BCD4",
    tile_background: "#e0f2f7",
    tile_count: "#00796b",
};

#[derive(Template)]
#[template(path = "anomalous.html")]
struct AnomalousPage<'a> {
    page: PageFrame,
    record: &'a AnomalousRecord,
}

/// Render the anomalous behavior summary page
pub fn render(record: &AnomalousRecord) -> askama::Result<String> {
    AnomalousPage {
        page: PageFrame::new("이상행동 기록", Route::AnomalousRecord, THEME, PAGE_CSS),
        record,
    }
    .render()
}

/// Handle `GET /anomalous_record`
pub fn anomalous_record_page<W: ResponseWriter>(
    writer: &mut W,
    record: &AnomalousRecord,
) -> Result<(), PageError<W::Error>> {
    let html = render(record)?;
    tracing::debug!("Rendered anomalous record page ({} bytes)", html.len());
    writer
        .send(StatusCode::OK, TEXT_HTML, html)
        .map_err(PageError::Send)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::{assert_well_formed, nav_links};

    /// Writer that records every send
    #[derive(Default)]
    struct Recorder {
        sent: Vec<(StatusCode, String, String)>,
    }

    impl ResponseWriter for Recorder {
        type Error = std::convert::Infallible;

        fn send(
            &mut self,
            status: StatusCode,
            content_type: &str,
            body: String,
        ) -> Result<(), Self::Error> {
            self.sent.push((status, content_type.to_string(), body));
            Ok(())
        }
    }

    fn placeholder_page() -> String {
        render(&AnomalousRecord::placeholder()).unwrap()
    }

    #[test]
    fn test_sends_html_once() {
        let mut writer = Recorder::default();
        anomalous_record_page(&mut writer, &AnomalousRecord::placeholder()).unwrap();

        assert_eq!(writer.sent.len(), 1);
        let (status, content_type, body) = &writer.sent[0];
        assert_eq!(*status, StatusCode::OK);
        assert_eq!(content_type, "text/html");
        assert_eq!(body, &placeholder_page());
    }

    #[test]
    fn test_total_count() {
        let html = placeholder_page();
        assert!(html.contains(
            "<h2>감지된 이상행동 기록</h2><p>총 횟수</p></div><div class='count'>9<span>회</span></div>"
        ));
    }

    #[test]
    fn test_location_counts() {
        let html = placeholder_page();
        for (label, count) in [("주방", 5), ("거실", 3), ("복도", 1), ("다용도실", 0)] {
            let tile = format!(
                "<p>{}에서</p><p>감지됨</p><h3>{}<span>번</span></h3>",
                label, count
            );
            assert!(html.contains(&tile), "missing tile {}", tile);
        }
    }

    #[test]
    fn test_chart_placeholder_and_no_incident_list() {
        let html = placeholder_page();
        assert!(html.contains("<div class='graph-placeholder'>그래프 영역</div>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_cyan_theme() {
        let html = placeholder_page();
        assert!(html.contains("--accent: #00BCD4;"));
        assert!(html.contains("<title>이상행동 기록</title>"));
    }

    #[test]
    fn test_nav_marks_own_route() {
        let links = nav_links(&placeholder_page());
        let hrefs: Vec<_> = links.iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/anomalous_record", "/dangerous_record", "/report"]
        );

        let active: Vec<_> = links.iter().filter(|(_, a)| *a).map(|(h, _)| h).collect();
        assert_eq!(active, vec!["/anomalous_record"]);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(placeholder_page(), placeholder_page());
    }

    #[test]
    fn test_well_formed() {
        assert_well_formed(&placeholder_page());
    }
}
