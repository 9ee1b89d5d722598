//! Filename recovery from `Content-Disposition` response headers.
//!
//! Download endpoints answer with
//! `attachment; filename="plain.pdf"` or the RFC 5987 form
//! `attachment; filename*=UTF-8''r%C3%A9sum%C3%A9.docx`. The extended
//! parameter is preferred, falling back to the plain one; both are stripped
//! of path separators before use.

#[cfg(test)]
#[path = "disposition_test.rs"]
mod disposition_test;

/// Recover a download filename from an optional header value, falling back
/// to `default` when neither parameter parses to a non-empty name.
pub fn recover_filename(header: Option<&str>, default: &str) -> String {
    header
        .and_then(parse_header)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parse_header(header: &str) -> Option<String> {
    parse_extended(header)
        .or_else(|| parse_plain(header))
        .map(|name| strip_path(&name))
}

/// `filename*=<charset>'<language>'<percent-encoded>`; only UTF-8 is
/// supported, which is the only charset RFC 8187 requires.
fn parse_extended(header: &str) -> Option<String> {
    let raw = param_value(header, "filename*")?;
    let mut parts = raw.splitn(3, '\'');
    let charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?;

    if !charset.eq_ignore_ascii_case("utf-8") {
        return None;
    }
    urlencoding::decode(encoded).ok().map(|name| name.into_owned())
}

/// `filename="quoted.pdf"` or `filename=bare.pdf`.
fn parse_plain(header: &str) -> Option<String> {
    let raw = param_value(header, "filename")?;
    Some(raw.trim_matches('"').to_owned())
}

fn param_value<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|part| {
        let (name, value) = part.split_once('=')?;
        name.trim().eq_ignore_ascii_case(key).then_some(value.trim())
    })
}

/// Keep only the final path component so a hostile header cannot suggest
/// writing outside the download directory.
fn strip_path(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or(name).to_owned()
}
