//! Request origin extraction from the request line and headers.

use axum::http::{HeaderMap, Uri, header};
use url::Url;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Extracts the origin (`scheme://host[:port]`) the client used to reach the service.
///
/// The host comes from the `Host` header, or from the request URI authority
/// when there is no `Host` header (HTTP/2 sends `:authority` instead). The
/// scheme is the URI scheme if the request carries one, otherwise `http`. When
/// `behind_proxy` is set, `X-Forwarded-Host` and `X-Forwarded-Proto` take
/// precedence; only the first entry of a comma-separated list is used.
///
/// Returns `None` if no usable host is present or the result is not a valid
/// origin. Default ports are dropped (`http://example.com:80` → `http://example.com`).
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let origin = extract_origin(&headers, &Uri::from_static("/api/shorten"), false).unwrap();
/// assert_eq!(origin, "http://sho.rt:8080");
/// ```
pub fn extract_origin(headers: &HeaderMap, uri: &Uri, behind_proxy: bool) -> Option<String> {
    let forwarded = |name: &str| {
        behind_proxy
            .then(|| first_value(headers, name))
            .flatten()
    };

    let host = forwarded(X_FORWARDED_HOST)
        .or_else(|| first_value(headers, header::HOST.as_str()))
        .or_else(|| uri.authority().map(|a| a.as_str()))?;
    let scheme = forwarded(X_FORWARDED_PROTO)
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    let url = Url::parse(&format!("{scheme}://{host}")).ok()?;
    let origin = url.origin();

    origin
        .is_tuple()
        .then(|| origin.ascii_serialization())
}

fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
