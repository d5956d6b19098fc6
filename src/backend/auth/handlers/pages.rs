/**
 * Form Pages
 *
 * Static forms for GET /register and GET /login. They post back to the same
 * path; nothing is rendered from request data.
 */

use axum::response::Html;

const REGISTER_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Register</title></head>
<body>
<h1>Register</h1>
<form method="post" action="/register">
<label>Username <input name="username" minlength="3" required></label>
<label>Password <input name="password" type="password" minlength="3" required></label>
<button type="submit">Create account</button>
</form>
<p><a href="/login">Already registered? Log in</a></p>
</body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Log in</title></head>
<body>
<h1>Log in</h1>
<form method="post" action="/login">
<label>Username <input name="username" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Log in</button>
</form>
<p><a href="/register">No account yet? Register</a></p>
</body>
</html>
"#;

/// GET /register
pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
