use axum::response::Html;

use super::{escape, layout};
use crate::models::{Comment, LatLng, Marker};

fn marker_fields(marker: Option<&Marker>, coords: Option<LatLng>) -> String {
    let (title, author, content) = marker
        .map(|m| (escape(&m.title), escape(&m.author), escape(&m.content)))
        .unwrap_or_default();
    let coords = coords.or_else(|| marker.map(Marker::coordinates));

    format!(
        r#"<label>Title <input type="text" name="title" value="{title}" required></label>
<label>Author <input type="text" name="author" value="{author}" required></label>
<label>Content <textarea name="content" required>{content}</textarea></label>
<label>Latitude <input type="number" step="any" name="latitude" value="{lat}" required></label>
<label>Longitude <input type="number" step="any" name="longitude" value="{lng}" required></label>"#,
        lat = coords.map(|c| c.lat.to_string()).unwrap_or_default(),
        lng = coords.map(|c| c.lng.to_string()).unwrap_or_default(),
    )
}

pub fn markers_page(markers: &[Marker]) -> Html<String> {
    let rows: Vec<String> = markers
        .iter()
        .map(|m| {
            format!(
                r#"<tr><td><a href="/marker/{id}">{title}</a></td><td>{author}</td><td>{lat}, {lng}</td><td>{date}</td><td><a href="/markers/edit/{id}">Edit</a> <a href="/markers/delete/{id}">Delete</a></td></tr>"#,
                id = m.id,
                title = escape(&m.title),
                author = escape(&m.author),
                lat = m.latitude,
                lng = m.longitude,
                date = m.date_posted.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>All markers</h1>
<form method="post" action="/markers">
{fields}
<button type="submit">Add marker</button>
</form>
<table>
<tr><th>Title</th><th>Author</th><th>Position</th><th>Posted</th><th></th></tr>
{rows}
</table>"#,
        fields = marker_fields(None, None),
        rows = rows.join("\n"),
    );
    layout("Markers", &body)
}

pub fn edit_marker_page(marker: &Marker) -> Html<String> {
    let body = format!(
        r#"<h1>Edit marker</h1>
<form method="post" action="/markers/edit/{id}">
{fields}
<button type="submit">Save</button>
</form>"#,
        id = marker.id,
        fields = marker_fields(Some(marker), None),
    );
    layout("Edit marker", &body)
}

pub fn add_marker_page(coords: LatLng) -> Html<String> {
    let body = format!(
        r#"<h1>New marker</h1>
<form method="post" action="/addmarker/{path}">
{fields}
<button type="submit">Add marker</button>
</form>"#,
        path = escape(&coords.to_string()),
        fields = marker_fields(None, Some(coords)),
    );
    layout("Add marker", &body)
}

pub fn marker_page(marker: &Marker, comments: &[Comment]) -> Html<String> {
    let items: Vec<String> = comments
        .iter()
        .map(|c| {
            format!(
                r#"<li><p>{content}</p><small>{author}, {date}</small> <a href="/comment/edit/{id}">Edit</a> <a href="/comment/delete/{id}">Delete</a></li>"#,
                id = c.id,
                content = escape(&c.content),
                author = escape(&c.author),
                date = c.date_posted.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>{title}</h1>
<small>By {author} on {date} at {lat}, {lng}</small>
<p>{content}</p>
<h2>Comments</h2>
<ul>
{items}
</ul>
<form method="post" action="/marker/{id}">
<label>Author <input type="text" name="author" required></label>
<label>Comment <textarea name="content" required></textarea></label>
<button type="submit">Comment</button>
</form>"#,
        id = marker.id,
        title = escape(&marker.title),
        author = escape(&marker.author),
        date = marker.date_posted.format("%Y-%m-%d %H:%M"),
        lat = marker.latitude,
        lng = marker.longitude,
        content = escape(&marker.content),
        items = items.join("\n"),
    );
    layout(&marker.title, &body)
}

pub fn edit_comment_page(comment: &Comment) -> Html<String> {
    let body = format!(
        r#"<h1>Edit comment</h1>
<form method="post" action="/comment/edit/{id}">
<label>Author <input type="text" name="author" value="{author}" required></label>
<label>Comment <textarea name="content" required>{content}</textarea></label>
<button type="submit">Save</button>
</form>
<a href="/marker/{parent_id}">Back to marker</a>"#,
        id = comment.id,
        parent_id = comment.parent_id,
        author = escape(&comment.author),
        content = escape(&comment.content),
    );
    layout("Edit comment", &body)
}
