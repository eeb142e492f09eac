//! Server-rendered HTML for the crawl pages.
//!
//! One page template covers the form, the "job running" state (which polls
//! the status endpoint from the browser), and the paginated result table.

use std::fmt::Write;

use crate::common::PageInfo;
use crate::domains::crawling::{Platform, ResultRecord};
use crate::domains::export::format_timestamp;

/// Inline message for platforms without an actor.
pub const UNSUPPORTED_PLATFORM_MESSAGE: &str = "Platform belum didukung";

/// Delay between status polls in the browser, in milliseconds.
const POLL_INTERVAL_MS: u32 = 3000;

/// Everything the crawling page can show. All parts are optional.
#[derive(Debug, Default)]
pub struct CrawlingView<'a> {
    pub error: Option<&'a str>,
    /// Job currently being polled
    pub running: Option<(&'a str, Platform)>,
    pub results: Option<ResultsView<'a>>,
}

#[derive(Debug)]
pub struct ResultsView<'a> {
    pub job_id: &'a str,
    pub records: &'a [ResultRecord],
    pub page_info: PageInfo,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_crawling_page(view: &CrawlingView<'_>) -> String {
    let mut body = String::new();
    body.push_str(FORM);

    if let Some(error) = view.error {
        let _ = write!(body, r#"<p class="error">{}</p>"#, escape_html(error));
    }

    if let Some((job_id, platform)) = view.running {
        render_running(&mut body, job_id, platform);
    }

    if let Some(results) = &view.results {
        render_results(&mut body, results);
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Crawling</title>
    <style>
        body {{ font-family: sans-serif; margin: 2rem; }}
        .error {{ color: #b00020; }}
        table {{ border-collapse: collapse; margin-top: 1rem; }}
        td, th {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}
        .pagination a, .pagination span {{ margin-right: 6px; }}
    </style>
</head>
<body>
{}
</body>
</html>"#,
        body
    )
}

const FORM: &str = r#"<h1>Crawling</h1>
<form method="post" action="/crawl/start">
    <label>Platform
        <select name="platform">
            <option value="instagram">Instagram</option>
        </select>
    </label>
    <label>URL <input type="url" name="url" required></label>
    <label>Limit <input type="number" name="limit" min="1" value="15"></label>
    <button type="submit">Start</button>
</form>"#;

fn render_running(body: &mut String, job_id: &str, platform: Platform) {
    let id = escape_html(job_id);
    let _ = write!(
        body,
        r#"<div id="job" data-job-id="{id}">
    <p>Crawling {platform} job <code>{id}</code>: <span id="job-status">starting</span></p>
</div>
<script>
    const jobId = document.getElementById("job").dataset.jobId;
    const statusEl = document.getElementById("job-status");
    const terminal = ["FAILED", "ABORTED", "TIMED-OUT"];
    const timer = setInterval(async () => {{
        const resp = await fetch("/crawl/status/" + encodeURIComponent(jobId));
        if (!resp.ok) {{ return; }}
        const data = await resp.json();
        statusEl.textContent = data.status + " (" + data.item_count + " items)";
        if (data.status === "SUCCEEDED") {{
            clearInterval(timer);
            window.location = "/crawl/result/" + encodeURIComponent(jobId);
        }} else if (terminal.includes(data.status)) {{
            clearInterval(timer);
        }}
    }}, {interval});
</script>"#,
        id = id,
        platform = platform.display_name(),
        interval = POLL_INTERVAL_MS,
    );
}

fn render_results(body: &mut String, results: &ResultsView<'_>) {
    let id = escape_html(results.job_id);
    let info = &results.page_info;

    let _ = write!(
        body,
        r#"<h2>Hasil ({} komentar)</h2>
<p><a href="/crawl/download/{id}">Download Excel</a></p>
<table>
<tr><th>Platform</th><th>URL</th><th>Username</th><th>Komentar</th><th>Created At</th></tr>"#,
        info.total_items,
        id = id,
    );

    for record in results.records {
        let _ = write!(
            body,
            "\n<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(record.platform),
            escape_html(record.post_url.as_deref().unwrap_or("")),
            escape_html(record.username.as_deref().unwrap_or("")),
            escape_html(record.comment.as_deref().unwrap_or("")),
            escape_html(&format_timestamp(record.created_at.as_ref())),
        );
    }
    body.push_str("\n</table>");

    if results.records.is_empty() {
        body.push_str("\n<p>Tidak ada data.</p>");
    }

    render_pagination(body, &id, info);
}

fn render_pagination(body: &mut String, escaped_id: &str, info: &PageInfo) {
    if info.total_pages == 0 {
        return;
    }

    body.push_str("\n<div class=\"pagination\">");
    if info.has_previous_page() {
        let _ = write!(
            body,
            r#"<a href="/crawl/result/{}?page={}">&laquo;</a>"#,
            escaped_id,
            info.page - 1
        );
    }
    for page in 1..=info.total_pages {
        if page == info.page {
            let _ = write!(body, "<span>{}</span>", page);
        } else {
            let _ = write!(
                body,
                r#"<a href="/crawl/result/{}?page={}">{}</a>"#,
                escaped_id, page, page
            );
        }
    }
    if info.has_next_page() {
        let _ = write!(
            body,
            r#"<a href="/crawl/result/{}?page={}">&raquo;</a>"#,
            escaped_id,
            info.page + 1
        );
    }
    body.push_str("</div>");
}
