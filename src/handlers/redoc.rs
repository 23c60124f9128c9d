use axum::{extract::State, response::Html};

use crate::routes::AppState;

/// ReDoc page rendering the OpenAPI document with a locally hosted script
pub async fn redoc_html(State(state): State<AppState>) -> Html<String> {
    Html(render_redoc(
        &format!("{} - ReDoc", state.config.api_title),
        state.openapi_url,
        &state.config.redoc_js_url,
    ))
}

fn render_redoc(title: &str, openapi_url: &str, redoc_js_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title}</title>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link href="https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700" rel="stylesheet">
<style>
  body {{
    margin: 0;
    padding: 0;
  }}
</style>
</head>
<body>
<noscript>
  ReDoc requires Javascript to function. Please enable it to browse the documentation.
</noscript>
<redoc spec-url="{openapi_url}"></redoc>
<script src="{redoc_js_url}"></script>
</body>
</html>
"#,
        title = escape(title),
        openapi_url = escape(openapi_url),
        redoc_js_url = escape(redoc_js_url),
    )
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
