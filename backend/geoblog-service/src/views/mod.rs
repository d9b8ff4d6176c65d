/// Server-rendered HTML pages
///
/// Each function returns a complete page. All user-provided text goes
/// through [`escape`] before it is interpolated.
pub mod auth;
pub mod markers;
pub mod pages;
pub mod posts;

use axum::http::StatusCode;
use axum::response::Html;

use crate::forms::FieldErrors;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
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

pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Map</a> | <a href="/markers">Markers</a> | <a href="/posts">Posts</a> | <a href="/plot">Plot</a> | <a href="/dashboard">Dashboard</a></nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        body = body,
    ))
}

/// Render the messages for one form field, if any.
pub(crate) fn field_errors(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .iter()
        .map(|msg| format!(r#"<span class="error">{}</span>"#, escape(msg)))
        .collect::<Vec<_>>()
        .join("")
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    layout(
        &heading,
        &format!(
            "<h1>{}</h1>\n<p>{}</p>",
            escape(&heading),
            escape(message)
        ),
    )
}
