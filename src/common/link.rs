use super::error::{QRError, QRResult};

// Link validation
//------------------------------------------------------------------------------

/// Accepts `scheme://host[:port][path]` with an http(s) or ftp(s) scheme, where the host
/// is a dotted domain name, `localhost`, an IPv4 quad or an IPv6 literal.
pub fn validate_link(link: &str) -> QRResult<()> {
    let rest = strip_scheme(link).ok_or(QRError::InvalidLink)?;

    let auth_end = rest.find(|c: char| c == '/' || c == '?').unwrap_or(rest.len());
    let (authority, path) = rest.split_at(auth_end);

    if !is_valid_authority(authority) || !is_valid_path(path) {
        return Err(QRError::InvalidLink);
    }
    Ok(())
}

fn strip_scheme(link: &str) -> Option<&str> {
    let (scheme, rest) = link.split_once("://")?;
    match scheme.to_ascii_lowercase().as_str() {
        "http" | "https" | "ftp" | "ftps" => Some(rest),
        _ => None,
    }
}

fn is_valid_authority(authority: &str) -> bool {
    if is_valid_host(authority) {
        return true;
    }
    match authority.rsplit_once(':') {
        Some((host, port)) => is_digits(port) && is_valid_host(host),
        None => false,
    }
}

// Either empty, a lone slash, or a slash/query start followed by non-whitespace
fn is_valid_path(path: &str) -> bool {
    path.is_empty() || path == "/" || (path.len() > 1 && !path.contains(char::is_whitespace))
}

fn is_valid_host(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost")
        || is_ipv4(host)
        || is_ipv6(host)
        || is_domain(host)
}

fn is_domain(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    let labels = host.split('.').collect::<Vec<_>>();
    let Some((tld, labels)) = labels.split_last() else {
        return false;
    };
    !labels.is_empty() && labels.iter().all(|l| is_domain_label(l)) && is_tld(tld)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    (1..=63).contains(&bytes.len())
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        && bytes.first() != Some(&b'-')
        && bytes.last() != Some(&b'-')
}

fn is_tld(tld: &str) -> bool {
    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_ipv4(host: &str) -> bool {
    let parts = host.split('.').collect::<Vec<_>>();
    parts.len() == 4 && parts.iter().all(|p| p.len() <= 3 && is_digits(p))
}

fn is_ipv6(host: &str) -> bool {
    let host = host.strip_prefix('[').unwrap_or(host);
    let host = host.strip_suffix(']').unwrap_or(host);
    match host.split_once(':') {
        Some((head, tail)) => {
            head.bytes().all(|b| b.is_ascii_hexdigit())
                && !tail.is_empty()
                && tail.bytes().all(|b| b.is_ascii_hexdigit() || b == b':')
        }
        None => false,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
