//! Authenticated JSON helpers over `gloo-net`.
//!
//! Every helper returns `Result<_, String>`; the error text is what the
//! screen shows in its banner.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FormData;

use super::api_utils::{api_url, api_url_with_query};

type Signer = Rc<dyn Fn() -> Option<String>>;

thread_local! {
    static SIGNER: RefCell<Option<Signer>> = const { RefCell::new(None) };
}

/// Register the source of the `Authorization` header. The session context
/// installs itself here once; requests issued before that go unsigned.
pub fn install_signer(signer: impl Fn() -> Option<String> + 'static) {
    SIGNER.with(|s| *s.borrow_mut() = Some(Rc::new(signer)));
}

/// Current `Authorization` value, e.g. `Bearer <token>`.
pub fn bearer() -> Option<String> {
    let signer = SIGNER.with(|s| s.borrow().clone())?;
    signer()
}

/// Attach the session's bearer header when signed in.
pub fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match bearer() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Banner text for a failed response: the body's `message` or `error`
/// field when present, else `HTTP <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error", "title"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

async fn send(builder: RequestBuilder) -> Result<Response, String> {
    builder
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn send_request(request: Request) -> Result<Response, String> {
    request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

/// Parse a successful body. An empty body reads as `null`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let response = ensure_ok(response).await?;
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(authorized(Request::get(&api_url(path)))).await?;
    read_json(response).await
}

pub async fn get_json_query<T, Q>(path: &str, query: &Q) -> Result<T, String>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let url = api_url_with_query(path, query)?;
    let response = send(authorized(Request::get(&url))).await?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let request = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    read_json(send_request(request).await?).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let request = authorized(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    read_json(send_request(request).await?).await
}

/// PUT/PATCH/POST whose response body is ignored.
pub async fn send_json<B: Serialize>(method: &str, path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path);
    let builder = match method {
        "PUT" => Request::put(&url),
        "PATCH" => Request::patch(&url),
        _ => Request::post(&url),
    };
    let request = authorized(builder)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    ensure_ok(send_request(request).await?).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = send(authorized(Request::delete(&api_url(path)))).await?;
    ensure_ok(response).await.map(|_| ())
}

/// Multipart upload. The browser sets the boundary header itself.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, String> {
    let request = authorized(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    read_json(send_request(request).await?).await
}

pub async fn post_form_unit(path: &str, form: FormData) -> Result<(), String> {
    let request = authorized(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    ensure_ok(send_request(request).await?).await.map(|_| ())
}

/// Raw bytes, for file downloads.
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, String> {
    let response = ensure_ok(send(authorized(Request::get(&api_url(path)))).await?).await?;
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

pub async fn get_text(path: &str) -> Result<String, String> {
    let response = ensure_ok(send(authorized(Request::get(&api_url(path)))).await?).await?;
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_body() {
        assert_eq!(error_message(400, r#"{"message":"Slug already exists"}"#), "Slug already exists");
        assert_eq!(error_message(403, r#"{"error":"Forbidden"}"#), "Forbidden");
        assert_eq!(error_message(500, "<html>oops</html>"), "HTTP 500");
        assert_eq!(error_message(404, r#"{"message":""}"#), "HTTP 404");
    }

    #[test]
    fn test_bearer_follows_installed_signer() {
        assert_eq!(bearer(), None);
        let token = Rc::new(RefCell::new(Some("Bearer abc".to_string())));
        let source = token.clone();
        install_signer(move || source.borrow().clone());
        assert_eq!(bearer().as_deref(), Some("Bearer abc"));
        *token.borrow_mut() = None;
        assert_eq!(bearer(), None);
    }
}
