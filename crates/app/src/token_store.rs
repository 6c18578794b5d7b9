//! Bearer token kept in the webview's `localStorage`, so a reload keeps the
//! user signed in.

use dioxus::prelude::*;

const TOKEN_KEY: &str = "clinic.auth.token";

/// The saved token, if any. Renderers without a script host have none.
pub async fn load() -> Option<String> {
    let eval = document::eval(&format!("return localStorage.getItem(\"{TOKEN_KEY}\");"));
    match eval.join::<Option<String>>().await {
        Ok(token) => token.filter(|t| !t.trim().is_empty()),
        Err(err) => {
            tracing::debug!(?err, "Token storage unavailable");
            None
        }
    }
}

/// Save the token, or forget it with `None`.
pub fn store(token: Option<&str>) {
    let eval = document::eval(&format!(
        r#"const token = await dioxus.recv();
if (token === null) {{
    localStorage.removeItem("{TOKEN_KEY}");
}} else {{
    localStorage.setItem("{TOKEN_KEY}", token);
}}"#
    ));
    if let Err(err) = eval.send(token) {
        tracing::debug!(?err, "Token not saved");
    }
}
