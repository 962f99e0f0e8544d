//! URL canonicalization and link joining.
//!
//! Site detail records are cached under the canonical form of their request
//! URL, so every URL that reaches the resolvers goes through [`canonicalize`].

use url::Url;

/// Error type for URL handling failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<UrlError> for npsfind_core::Error {
    fn from(err: UrlError) -> Self {
        npsfind_core::Error::InvalidUrl(err.to_string())
    }
}

/// Canonicalize a URL string.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Lowercase the host
/// 4. Remove fragment (#...)
/// 5. Keep query string intact (do not reorder)
pub fn canonicalize(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let with_scheme = if has_scheme(trimmed) { trimmed.to_string() } else { format!("https://{trimmed}") };
    let mut parsed = Url::parse(&with_scheme).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    check_scheme(&parsed)?;

    // Special schemes already lowercase the host during parsing.
    parsed.set_fragment(None);
    Ok(parsed)
}

/// Whether `input` starts with `scheme:`. A `host:port` prefix does not count.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid && !rest.starts_with(|c: char| c.is_ascii_digit())
}

/// Join a page-relative link such as `/state/mi/index.htm` against `base`,
/// returning the canonical absolute URL.
pub fn join(base: &Url, href: &str) -> Result<Url, UrlError> {
    let href = href.trim();
    if href.is_empty() {
        return Err(UrlError::Empty);
    }

    let mut joined = base.join(href).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    check_scheme(&joined)?;
    joined.set_fragment(None);
    Ok(joined)
}

fn check_scheme(url: &Url) -> Result<(), UrlError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }
}
