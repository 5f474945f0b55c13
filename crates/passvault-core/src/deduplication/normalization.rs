//! URL normalization for fuzzy matching.

use url::Url;

/// Reduce a login URL to a comparable domain.
///
/// Parses the URL, takes its host, strips a leading `www.`, and lower-cases
/// the result. Unparsable input (relative paths, bare hostnames, garbage)
/// falls back to the lower-cased raw string and absent input maps to the
/// empty string, so normalization is total.
pub fn normalize_domain(url: Option<&str>) -> String {
    let raw = match url {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    match Url::parse(raw) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => {
                let host = host.to_lowercase();
                host.strip_prefix("www.").unwrap_or(&host).to_string()
            }
            // Host-less schemes (mailto:, data:) get the raw fallback too.
            None => raw.to_lowercase(),
        },
        Err(_) => raw.to_lowercase(),
    }
}
