//! Colon-delimited path splitting.
//!
//! No validation happens here. Any string is a path, and the empty string
//! is a legal (degenerate) field name.

/// The path separator.
pub const SEPARATOR: char = ':';

/// Split a path at its first separator.
///
/// Returns the root key and, if a separator was present, everything after
/// it. The remainder is not split further; each nested store splits its
/// own part.
///
/// ```
/// use permstore_core::split_root;
///
/// assert_eq!(split_root("a:b:c"), ("a", Some("b:c")));
/// assert_eq!(split_root("a"), ("a", None));
/// assert_eq!(split_root("a:"), ("a", Some("")));
/// ```
pub fn split_root(path: &str) -> (&str, Option<&str>) {
    match path.split_once(SEPARATOR) {
        Some((root, rest)) => (root, Some(rest)),
        None => (path, None),
    }
}

/// The root key of a path: everything before the first separator.
pub fn root_key(path: &str) -> &str {
    split_root(path).0
}

/// Rebuild a full path from a root key and the remainder below it.
pub fn join_path(root: &str, rest: &str) -> String {
    let mut out = String::with_capacity(root.len() + 1 + rest.len());
    out.push_str(root);
    out.push(SEPARATOR);
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_single_segment() {
        assert_eq!(split_root("theme"), ("theme", None));
    }

    #[test]
    fn test_split_keeps_remainder_intact() {
        assert_eq!(split_root("user:prefs:theme"), ("user", Some("prefs:theme")));
    }

    #[test]
    fn test_split_degenerate_paths() {
        assert_eq!(split_root(""), ("", None));
        assert_eq!(split_root(":"), ("", Some("")));
        assert_eq!(split_root("::x"), ("", Some(":x")));
        assert_eq!(split_root("a:"), ("a", Some("")));
    }

    #[test]
    fn test_root_key() {
        assert_eq!(root_key("a:b"), "a");
        assert_eq!(root_key("a"), "a");
    }

    proptest! {
        #[test]
        fn test_join_inverts_split(root in "[^:]{0,8}", rest in ".{0,16}") {
            let joined = join_path(&root, &rest);
            prop_assert_eq!(split_root(&joined), (root.as_str(), Some(rest.as_str())));
        }

        #[test]
        fn test_root_never_contains_separator(path in ".{0,32}") {
            prop_assert!(!root_key(&path).contains(SEPARATOR));
        }
    }
}
