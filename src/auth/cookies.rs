/**
 * Token Cookie Transport
 *
 * Both session tokens travel as secure, http-only cookies in addition to the
 * response body. This module owns the cookie names and the Set-Cookie /
 * Cookie-header plumbing so handlers stay free of header formatting.
 */

use axum::http::{header::COOKIE, HeaderMap};

/// Cookie carrying the access token
pub const ACCESS_COOKIE_NAME: &str = "accessToken";

/// Cookie carrying the refresh token
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Build a Set-Cookie value for a token cookie
///
/// Cookies are http-only and secure so browser scripts can never read them;
/// `max_age_secs` mirrors the corresponding token lifetime.
pub fn auth_cookie(name: &str, value: &str, max_age_secs: i64) -> String {
    format!("{name}={value}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={max_age_secs}")
}

/// Build a Set-Cookie value that expires a token cookie immediately
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=0")
}

/// Read a named cookie from the request's Cookie header
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;

    raw.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}
