pub mod a002_organization;
pub mod enums;
pub mod order_search;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::shared::json::JsonCodec;

/// Ответ в JSON через настроенный кодек
pub(crate) fn json_response<T: Serialize + ?Sized>(
    codec: JsonCodec,
    value: &T,
) -> Result<Response, StatusCode> {
    match codec.try_to_json(value) {
        Ok(body) => Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response()),
        Err(e) => {
            tracing::error!("Failed to encode response with {} codec: {}", codec, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// JSONP-ответ `callback(json)`
pub(crate) fn jsonp_response<T: Serialize + ?Sized>(
    codec: JsonCodec,
    callback: &str,
    value: &T,
) -> Result<Response, StatusCode> {
    if !is_valid_callback(callback) {
        return Err(StatusCode::BAD_REQUEST);
    }
    match codec.to_json_p(callback, value) {
        Some(body) => Ok(([(header::CONTENT_TYPE, "application/javascript")], body).into_response()),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Имя функции JSONP: идентификатор JS, допускаются точки
fn is_valid_callback(name: &str) -> bool {
    !name.is_empty()
        && name
            .split('.')
            .all(|part| {
                let mut chars = part.chars();
                matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_names() {
        assert!(is_valid_callback("cb"));
        assert!(is_valid_callback("jQuery.cb_1"));
        assert!(!is_valid_callback(""));
        assert!(!is_valid_callback("1cb"));
        assert!(!is_valid_callback("alert(1)"));
        assert!(!is_valid_callback("a..b"));
    }

    #[test]
    fn test_jsonp_rejects_bad_callback() {
        let result = jsonp_response(JsonCodec::NonEmpty, "x;y", &vec![1]);
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }
}
