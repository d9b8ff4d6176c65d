use axum::response::Html;

use super::{escape, layout};
use crate::models::Post;

fn post_item(post: &Post) -> String {
    format!(
        r#"<article>
<h2>{title}</h2>
<small>Written by {author} on {date}</small>
<p>{content}</p>
<a href="/posts/edit/{id}">Edit</a> <a href="/posts/delete/{id}">Delete</a>
</article>"#,
        id = post.id,
        title = escape(&post.title),
        author = escape(&post.author),
        date = post.date_posted.format("%Y-%m-%d %H:%M"),
        content = escape(&post.content),
    )
}

pub fn posts_page(posts: &[Post]) -> Html<String> {
    let items: Vec<String> = posts.iter().map(post_item).collect();

    let body = format!(
        r#"<h1>All posts</h1>
<form method="post" action="/posts">
<label>Title <input type="text" name="title" required></label>
<label>Author <input type="text" name="author" required></label>
<label>Content <textarea name="content" required></textarea></label>
<button type="submit">Post</button>
</form>
{items}"#,
        items = items.join("\n"),
    );
    layout("Posts", &body)
}

pub fn edit_post_page(post: &Post) -> Html<String> {
    let body = format!(
        r#"<h1>Edit post</h1>
<form method="post" action="/posts/edit/{id}">
<label>Title <input type="text" name="title" value="{title}" required></label>
<label>Author <input type="text" name="author" value="{author}" required></label>
<label>Content <textarea name="content" required>{content}</textarea></label>
<button type="submit">Save</button>
</form>"#,
        id = post.id,
        title = escape(&post.title),
        author = escape(&post.author),
        content = escape(&post.content),
    );
    layout("Edit post", &body)
}
