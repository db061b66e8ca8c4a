//! Latest-version lookup against the vendor's update endpoint.
//!
//! The endpoint answers `GET <check_host>/auto?a=3&p=<id>&v=<current>` with
//! free-form text. The first dotted `a.b.c` run in the body is taken as the
//! latest release; any fourth field is ignored.

use super::error::UpdateError;
use super::product::Product;
use super::transport::Transport;
use super::version::Version;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid"))
}

/// Update-check URL for `product` at `current`.
///
/// ```rust
/// use piriform_updater::libs::{product::CCLEANER, remote::check_url, version::Version};
///
/// assert_eq!(
///     check_url("https://ccleaner.com", &CCLEANER, &Version::new(5, 0, 0)),
///     "https://ccleaner.com/auto?a=3&p=cc&v=5.0.0"
/// );
/// ```
pub fn check_url(check_host: &str, product: &Product, current: &Version) -> String {
    format!("{}/auto?a=3&p={}&v={}", check_host.trim_end_matches('/'), product.id, current)
}

/// Extracts the first `major.minor.build` from an endpoint response body.
pub fn parse_latest_version(body: &str) -> Result<Version, UpdateError> {
    let captures = version_pattern().captures(body).ok_or(UpdateError::RemoteVersionNotFound)?;
    Version::from_parts(&captures[1], &captures[2], &captures[3])
}

/// Asks the vendor which version is current for `product`.
pub async fn fetch_latest<T: Transport>(
    transport: &T,
    check_host: &str,
    product: &Product,
    current: &Version,
) -> Result<Version, UpdateError> {
    let url = check_url(check_host, product, current);
    let body = transport.fetch_text(&url).await?;
    let latest = parse_latest_version(&body)?;
    debug!("vendor reports {} {}", product.name, latest);
    Ok(latest)
}
