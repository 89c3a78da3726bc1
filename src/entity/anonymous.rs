// Mon Oct 12 2026 - Alex

use crate::utils::hash::HashComputer;
use once_cell::sync::Lazy;
use regex::Regex;

static ANONYMOUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((anonymous|unnamed) [^)]*\)").expect("valid regex"));

/// Synthetic identifier of an unnamed struct/union/enum defined at
/// `location`, e.g. `struct ?_1c2f06a4`.
pub fn anonymous_identifier(keyword: &str, location: &str) -> String {
    format!("{} ?_{}", keyword, HashComputer::digest8(location))
}

/// Replaces the compiler's `(anonymous struct at file.h:3:5)` marker in a
/// type spelling with its synthetic `?_` name. Spellings without a marker
/// are returned unchanged.
pub fn unique_typename(spelling: &str) -> String {
    let Some(found) = ANONYMOUS.find(spelling) else {
        return spelling.to_string();
    };
    let keyword = ["struct", "union", "enum"]
        .into_iter()
        .find(|k| spelling.contains(&format!("{} ", k)))
        .unwrap_or("struct");

    // the enclosing record's scope is dropped, the digest is unique anyway
    let mut prefix = &spelling[..found.start()];
    if let Some(pos) = prefix.rfind("::") {
        prefix = &prefix[pos + 2..];
    }
    let prefix = prefix.trim_start().replacen(&format!("{} ", keyword), "", 1);

    format!(
        "{}{} ?_{}{}",
        prefix,
        keyword,
        HashComputer::digest8(found.as_str()),
        &spelling[found.end()..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_identifier() {
        let a = anonymous_identifier("struct", "header.h:12:3");
        assert!(a.starts_with("struct ?_"));
        assert_eq!(a.len(), "struct ?_".len() + 8);
        assert_eq!(a, anonymous_identifier("struct", "header.h:12:3"));
        assert_ne!(a, anonymous_identifier("struct", "header.h:13:3"));
    }

    #[test]
    fn test_unique_typename() {
        assert_eq!(unique_typename("struct foo *"), "struct foo *");

        let t = unique_typename("struct (anonymous struct at h.h:3:5) *");
        assert!(t.starts_with("struct ?_"));
        assert!(t.ends_with(" *"));

        let nested = unique_typename("union outer::(anonymous union at h.h:9:1)");
        let marker = HashComputer::digest8("(anonymous union at h.h:9:1)");
        assert_eq!(nested, format!("union ?_{}", marker));

        let q = unique_typename("const struct (anonymous struct at h.h:1:1)");
        assert!(q.starts_with("const struct ?_"));
    }
}
