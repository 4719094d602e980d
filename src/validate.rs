use url::Url;

/// Check whether user input is an acceptable URL to shorten.
///
/// The literal prefix check and the post-parse scheme check are both needed:
/// the parser accepts schemes the prefix check rejects (`ftp://`, `HTTPS://`),
/// and malformed input can slip past either check alone.
pub fn is_valid_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return false;
    }

    match Url::parse(trimmed) {
        Ok(url) => {
            (url.scheme() == "http" || url.scheme() == "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// User-facing reason why input was rejected, or `None` when it is acceptable.
pub fn validation_error(input: &str) -> Option<&'static str> {
    if input.trim().is_empty() {
        return Some("Please enter a URL");
    }

    if !is_valid_url(input) {
        return Some("Please enter a valid http:// or https:// URL");
    }

    None
}
