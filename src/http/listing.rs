//! Directory listing rendering
//!
//! Produces the fallback HTML page for directories with no index
//! document. Best-effort: entry names are escaped and hrefs encoded,
//! but this is a development convenience, not a hardened browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::Write;
use std::path::Path;
use tokio::fs;

// Characters that must not appear raw inside an href attribute.
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%');

/// Render an HTML page enumerating `dir`, titled with the request path.
/// Directories are shown with a trailing slash; entries sort by name.
pub async fn directory_listing(dir: &Path, url_path: &str) -> std::io::Result<String> {
    let mut names = Vec::new();
    let mut reader = fs::read_dir(dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
        if is_dir {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let title = format!("Directory listing for {}", html_escape(url_path));
    let mut page = String::new();
    page.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{title}</title>");
    let _ = writeln!(page, "</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>");
    for name in &names {
        let href = utf8_percent_encode(name, HREF_ENCODE);
        let _ = writeln!(page, "<li><a href=\"{href}\">{}</a></li>", html_escape(name));
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Ok(page)
}

fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
