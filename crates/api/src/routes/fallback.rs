//! Handling for paths that match no route.

use axum::http::header::LOCATION;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

/// Redirects `/path/` to `/path`; anything else is a 404 with an empty body.
///
/// GET requests are redirected with 301, other methods with 307 so clients
/// resend the body.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    match trailing_slash_target(&uri) {
        Some(target) => {
            let status = if method == Method::GET {
                StatusCode::MOVED_PERMANENTLY
            } else {
                StatusCode::TEMPORARY_REDIRECT
            };
            tracing::debug!(from = %uri, to = %target, "redirecting trailing slash");
            (status, [(LOCATION, target)]).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn trailing_slash_target(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }

    let trimmed = path.trim_end_matches('/');
    let mut target = if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    };
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let uri: Uri = "/v1/jokes/".parse().unwrap();
        assert_eq!(trailing_slash_target(&uri).as_deref(), Some("/v1/jokes"));
    }

    #[test]
    fn keeps_query_string() {
        let uri: Uri = "/v1/jokes/?page=2".parse().unwrap();
        assert_eq!(
            trailing_slash_target(&uri).as_deref(),
            Some("/v1/jokes?page=2")
        );
    }

    #[test]
    fn root_and_plain_paths_are_not_redirected() {
        assert_eq!(trailing_slash_target(&"/".parse().unwrap()), None);
        assert_eq!(trailing_slash_target(&"/nope".parse().unwrap()), None);
    }
}
