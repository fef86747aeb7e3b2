use regex::Regex;
use std::sync::LazyLock;

// Optional scheme, any number of subdomain labels, then the registrable
// label.tld pair, then an optional path/query/port tail.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z][a-z0-9+.-]*://)?(?:[a-z0-9-]+\.)*([a-z0-9-]+\.[a-z]{2,})(?:[/:?#].*)?$",
    )
    .unwrap()
});

/// Reduces a URL (or bare host) to its registrable `label.tld` domain.
///
/// `https://www.example.com/search?q=x`, `m.example.com` and `example.com`
/// all resolve to `example.com`. Input that does not look like a URL at all
/// is returned unchanged.
pub fn registrable_domain(input: &str) -> String {
    let trimmed = input.trim();
    match DOMAIN_RE.captures(trimmed) {
        Some(caps) => caps[1].to_ascii_lowercase(),
        None => input.to_string(),
    }
}
