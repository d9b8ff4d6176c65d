use axum::response::Html;

use super::{escape, layout};
use crate::models::Marker;

fn greeting(name: &str) -> String {
    if name.is_empty() {
        r#"<p><a href="/login">Log in</a> or <a href="/signup">sign up</a> to add markers.</p>"#
            .to_string()
    } else {
        format!(
            r#"<p>Welcome, {}! Click the map to add a marker. <a href="/logout">Log out</a></p>"#,
            escape(name)
        )
    }
}

/// Map home page: every marker as a data row the map script reads.
pub fn home_page(markers: &[Marker], name: &str) -> Html<String> {
    let rows: Vec<String> = markers
        .iter()
        .map(|m| {
            format!(
                r#"<li class="marker" data-id="{id}" data-lat="{lat}" data-lng="{lng}"><a href="/marker/{id}">{title}</a> by {author}</li>"#,
                id = m.id,
                lat = m.latitude,
                lng = m.longitude,
                title = escape(&m.title),
                author = escape(&m.author),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Map</h1>
{greeting}
<div id="map"></div>
<ul id="markers">
{rows}
</ul>"#,
        greeting = greeting(name),
        rows = rows.join("\n"),
    );
    layout("Map", &body)
}

pub fn dashboard_page(name: &str) -> Html<String> {
    layout(
        "Dashboard",
        &format!(
            r#"<h1>Welcome, {}</h1>
<p><a href="/">Open the map</a> | <a href="/logout">Log out</a></p>"#,
            escape(name)
        ),
    )
}

pub fn plot_page(name: &str) -> Html<String> {
    let body = format!(
        r#"<h1>Plot</h1>
{greeting}
<div id="plot"></div>"#,
        greeting = greeting(name),
    );
    layout("Plot", &body)
}
