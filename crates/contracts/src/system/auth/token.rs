//! JWT payload decoding.
//!
//! The signature is not verified on the client; the decoded role only
//! decides whether the console lets the user in. The backend still checks
//! every admin request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::dto::{LoginResponse, Session, UserInfo};

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. Admin privileges required.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token must have three segments, found {0}")]
    Segments(usize),
    #[error("token payload is not valid base64url")]
    Base64,
    #[error("token payload is not a JSON object")]
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Deliberately generic: the message does not say which check failed.
    #[error("Access denied. Admin privileges required.")]
    AccessDenied,
}

/// Claims the console cares about. Everything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "role_claim")]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// `role` may be a string or an array of strings; take the first string.
fn role_claim<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Array(items)) => items
            .into_iter()
            .find_map(|v| v.as_str().map(str::to_string)),
        _ => None,
    })
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Base64)?;
    serde_json::from_slice::<TokenClaims>(&bytes).map_err(|_| TokenError::Json)
}

/// Case-insensitive check used right after login.
pub fn is_admin_role(role: &str) -> bool {
    let role = role.trim().to_ascii_lowercase();
    role == "admin" || role == "superadmin"
}

/// Turn a login response into an admin session.
///
/// A malformed token is treated as "no role" and denied like any other
/// non-admin login. The persisted user carries the role taken from the
/// token.
pub fn authorize_login(email: &str, response: LoginResponse) -> Result<Session, AuthError> {
    let claims = decode_claims(&response.token).unwrap_or_default();
    let role = match claims.role.as_deref() {
        Some(role) if is_admin_role(role) => role.to_string(),
        _ => return Err(AuthError::AccessDenied),
    };

    let mut user = response.user.unwrap_or_else(|| UserInfo {
        id: None,
        email: claims.email.clone().unwrap_or_else(|| email.to_string()),
        name: claims.name.clone(),
        role: None,
    });
    if user.email.is_empty() {
        user.email = email.to_string();
    }
    user.role = Some(canonical_role(&role).to_string());

    Ok(Session {
        token: response.token,
        refresh_token: response.refresh_token,
        user,
    })
}

/// Stored roles use the canonical spelling so the restore-on-mount check
/// stays exact.
fn canonical_role(role: &str) -> &'static str {
    if role.trim().eq_ignore_ascii_case("superadmin") {
        "SuperAdmin"
    } else {
        "Admin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    fn response(token: String) -> LoginResponse {
        LoginResponse {
            token,
            refresh_token: Some("refresh".to_string()),
            user: Some(UserInfo {
                id: None,
                email: "ops@example.com".to_string(),
                name: Some("Ops".to_string()),
                role: None,
            }),
        }
    }

    #[test]
    fn test_decodes_role_claim() {
        let claims = decode_claims(&token_with(r#"{"sub":"1","role":"Admin"}"#)).unwrap();
        assert_eq!(claims.role.as_deref(), Some("Admin"));
        let claims = decode_claims(&token_with(r#"{"role":["SuperAdmin","User"]}"#)).unwrap();
        assert_eq!(claims.role.as_deref(), Some("SuperAdmin"));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"role":"admin"}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_claims(&token).unwrap().role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims("abc"), Err(TokenError::Segments(1)));
        assert_eq!(decode_claims("a.!!!.c"), Err(TokenError::Base64));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("nope"));
        assert_eq!(decode_claims(&not_json), Err(TokenError::Json));
    }

    #[test]
    fn test_editor_role_is_denied() {
        let token = token_with(r#"{"role":"Editor"}"#);
        let err = authorize_login("ops@example.com", response(token)).unwrap_err();
        assert_eq!(err.to_string(), ACCESS_DENIED_MESSAGE);
    }

    #[test]
    fn test_super_admin_is_authorized_and_role_injected() {
        let token = token_with(r#"{"role":"superadmin"}"#);
        let session = authorize_login("ops@example.com", response(token)).unwrap();
        assert_eq!(session.user.role.as_deref(), Some("SuperAdmin"));
        assert!(session.is_admin());
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert!(session.bearer().starts_with("Bearer "));
    }

    #[test]
    fn test_malformed_token_is_denied_not_panicking() {
        let err = authorize_login("ops@example.com", response("garbage".to_string()));
        assert_eq!(err, Err(AuthError::AccessDenied));
    }

    #[test]
    fn test_missing_user_falls_back_to_claims() {
        let token = token_with(r#"{"role":"Admin","email":"boss@example.com"}"#);
        let resp = LoginResponse {
            token,
            refresh_token: None,
            user: None,
        };
        let session = authorize_login("typed@example.com", resp).unwrap();
        assert_eq!(session.user.email, "boss@example.com");
        assert_eq!(session.user.role.as_deref(), Some("Admin"));
    }

    #[test]
    fn test_restored_session_requires_exact_role() {
        let mut session = Session {
            token: "t".to_string(),
            refresh_token: None,
            user: UserInfo {
                role: Some("Admin".to_string()),
                ..UserInfo::default()
            },
        };
        assert!(session.is_admin());
        session.user.role = Some("admin".to_string());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_login_response_accepts_access_token_alias() {
        let json = r#"{"accessToken":"x.y.z","refreshToken":"r"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "x.y.z");
        assert_eq!(resp.refresh_token.as_deref(), Some("r"));
    }
}
