//! Decoding and encoding of stored cuisine tag lists.
//!
//! Catalogues store cuisines as a JSON array of strings. Hand-edited files
//! often use single quotes or a bare comma-separated list instead, so
//! decoding accepts all three forms.

use serde_json::Value;

/// Decode a stored cuisine list.
///
/// The input is first read as a JSON array with single quotes treated as
/// double quotes; anything else is split on commas. Tags are trimmed and
/// blank tags dropped.
///
/// # Examples
/// ```
/// use platepick_data::parse_cuisine_list;
///
/// assert_eq!(parse_cuisine_list(r#"["Thai", "Noodles"]"#), ["Thai", "Noodles"]);
/// assert_eq!(parse_cuisine_list("['Thai']"), ["Thai"]);
/// assert_eq!(parse_cuisine_list("Thai, Noodles"), ["Thai", "Noodles"]);
/// assert!(parse_cuisine_list("").is_empty());
/// ```
#[must_use]
pub fn parse_cuisine_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    serde_json::from_str::<Vec<String>>(&trimmed.replace('\'', "\"")).map_or_else(
        |_| clean(trimmed.split(',')),
        |tags| clean(tags.iter().map(String::as_str)),
    )
}

/// Encode tags as a JSON array.
#[must_use]
pub fn encode_cuisine_list(tags: &[String]) -> String {
    Value::from(tags.to_vec()).to_string()
}

fn clean<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    tags.map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
