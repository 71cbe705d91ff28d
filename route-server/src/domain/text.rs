//! Free-text normalization shared by location and mode matching.

/// Lowercase, replace every non-alphanumeric character with a space, and
/// collapse runs of whitespace.
///
/// ```
/// use route_server::domain::normalize_text;
///
/// assert_eq!(normalize_text("  Port of  Los-Angeles (USA) "), "port of los angeles usa");
/// assert_eq!(normalize_text("!!!"), "");
/// ```
pub fn normalize_text(input: &str) -> String {
    let mapped: String = input
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase and join alphanumeric runs with `_`, used to compare field names.
///
/// ```
/// use route_server::domain::slugify;
///
/// assert_eq!(slugify("Origin Location"), "origin_location");
/// assert_eq!(slugify("__Mode-of/Transport"), "mode_of_transport");
/// ```
pub fn slugify(input: &str) -> String {
    normalize_text(input).replace(' ', "_")
}
