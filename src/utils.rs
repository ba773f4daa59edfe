/// Last `/`-delimited segment of a URL, used as the local file name
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Whether `name` stays inside the directory it is joined onto.
///
/// Rejects empty names, `.`/`..`, and anything with a path separator, including
/// `\` which Windows treats as one.
pub fn is_plain_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Append a relative link to a base URL the way APOD pages expect
pub fn join_link(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url, href)
}
