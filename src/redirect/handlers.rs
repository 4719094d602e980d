use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use super::resolver::{ResolutionOutcome, Resolver};

/// Resolve a short code and answer with a redirect or a small status page.
pub async fn resolve_short_code(
    State(resolver): State<Arc<Resolver>>,
    Path(code): Path<String>,
) -> Response {
    match resolver.resolve(&code).await {
        ResolutionOutcome::Redirect { location } => {
            // Always redirect with 302, even when the backend answered 301:
            // the backend's choice of permanence is not passed through.
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        ResolutionOutcome::NotFound { short_code } => {
            (StatusCode::NOT_FOUND, Html(render_not_found(&short_code))).into_response()
        }
        ResolutionOutcome::Error {
            short_code,
            message,
        } => (
            StatusCode::BAD_GATEWAY,
            Html(render_error(&short_code, &message)),
        )
            .into_response(),
    }
}

fn render_not_found(short_code: &str) -> String {
    render_page(
        "Link not found",
        &format!(
            "The short link <strong>/{}</strong> does not exist. \
             It may have been mistyped or never created.",
            html_escape(short_code)
        ),
    )
}

fn render_error(short_code: &str, message: &str) -> String {
    render_page(
        "Something went wrong",
        &format!(
            "The short link <strong>/{}</strong> could not be resolved: {}",
            html_escape(short_code),
            html_escape(message)
        ),
    )
}

fn render_page(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f8fafc;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }}
        .card {{
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 12px;
            max-width: 480px;
            width: 100%;
            padding: 32px;
        }}
        h1 {{
            font-size: 1.25rem;
            color: #334155;
            margin-bottom: 12px;
        }}
        p {{
            color: #64748b;
            word-break: break-all;
        }}
        a {{
            display: inline-block;
            margin-top: 20px;
            color: #6366f1;
            text-decoration: none;
            font-weight: 600;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h1>{title}</h1>
        <p>{body}</p>
        <a href="/">&larr; Shorten another URL</a>
    </div>
</body>
</html>"##
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_escape_untrusted_input() {
        let page = render_not_found("<script>alert(1)</script>");
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));

        let page = render_error("abc", "<img src=x>");
        assert!(!page.contains("<img src=x>"));
    }

    #[test]
    fn test_views_mention_the_short_code() {
        assert!(render_not_found("abc123").contains("/abc123"));
        assert!(render_error("abc123", "boom").contains("/abc123"));
        assert!(render_error("abc123", "boom").contains("boom"));
    }
}
