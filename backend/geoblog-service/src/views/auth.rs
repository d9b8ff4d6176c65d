use axum::response::Html;

use super::{escape, field_errors, layout};
use crate::forms::FieldErrors;

pub fn login_page(username: &str, errors: &FieldErrors) -> Html<String> {
    let body = format!(
        r#"<h1>Please sign in</h1>
<form method="post" action="/login">
<label>username <input type="text" name="username" value="{username}" required minlength="4" maxlength="15"></label>
{username_errors}
<label>password <input type="password" name="password" required minlength="8" maxlength="80"></label>
{password_errors}
<label><input type="checkbox" name="remember" value="y"> remember me</label>
<button type="submit">Sign in</button>
</form>
<p>No account? <a href="/signup">Sign up</a></p>"#,
        username = escape(username),
        username_errors = field_errors(errors, "username"),
        password_errors = field_errors(errors, "password"),
    );
    layout("Login", &body)
}

pub fn signup_page(
    username: &str,
    email: &str,
    errors: &FieldErrors,
    notice: Option<&str>,
) -> Html<String> {
    let notice = notice
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Sign up</h1>
{notice}
<form method="post" action="/signup">
<label>email <input type="email" name="email" value="{email}" required maxlength="50"></label>
{email_errors}
<label>username <input type="text" name="username" value="{username}" required minlength="4" maxlength="15"></label>
{username_errors}
<label>password <input type="password" name="password" required minlength="8" maxlength="80"></label>
{password_errors}
<button type="submit">Sign up</button>
</form>"#,
        notice = notice,
        email = escape(email),
        username = escape(username),
        email_errors = field_errors(errors, "email"),
        username_errors = field_errors(errors, "username"),
        password_errors = field_errors(errors, "password"),
    );
    layout("Sign up", &body)
}

pub fn invalid_credentials() -> Html<String> {
    Html("<h1>Invalid username or password</h1>".to_string())
}
