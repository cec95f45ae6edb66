//! Path classifier: decides from a TCK file path alone how a result is counted.
//!
//! - A file is *invalid* (expected to fail parsing) when its path contains
//!   `invalid` anywhere, case-insensitively. `invalidation/` matches too.
//! - A file is *optional* when its name, minus the last extension, ends
//!   with `-optional`, case-insensitively.

/// Marker searched for anywhere in the path of an expected-to-fail file.
const INVALID_MARKER: &str = "invalid";

/// Suffix of the file stem of an optional file.
const OPTIONAL_SUFFIX: &str = "-optional";

/// Returns true if the file at `path` is expected to fail parsing.
pub fn is_invalid(path: &str) -> bool {
    path.to_lowercase().contains(INVALID_MARKER)
}

/// Returns true if the file at `path` is an optional test.
pub fn is_optional(path: &str) -> bool {
    file_stem(path).to_lowercase().ends_with(OPTIONAL_SUFFIX)
}

/// Last path segment without its final extension. Dotfiles keep their name.
fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_is_a_case_insensitive_substring_match() {
        assert!(!is_invalid("some-valid-test.yaml"));
        assert!(!is_invalid("valid-something.txt"));
        assert!(is_invalid("invalid-something.txt"));
        assert!(is_invalid("some-invalid-test.foo"));
        assert!(is_invalid("tests/INVALID/case.raml"));
        assert!(is_invalid("tests/Invalidation/valid.raml"));
    }

    #[test]
    fn optional_requires_suffix_before_extension() {
        assert!(is_optional("foo-optional.raml"));
        assert!(is_optional("tests/raml-1.0/Root/bar-OPTIONAL.raml"));
        assert!(is_optional("tests/dir/no-extension-optional"));
        assert!(!is_optional("foo.optional.raml"));
        assert!(!is_optional("optional-foo.raml"));
        assert!(!is_optional("optional.raml"));
        assert!(!is_optional("tests/foo-optional/valid.raml"));
    }

    #[test]
    fn optional_strips_only_the_last_extension() {
        assert!(!is_optional("foo-optional.tar.gz"));
        assert!(is_optional("foo.bar-optional.yaml"));
    }

    #[test]
    fn dotfile_name_is_its_own_stem() {
        assert_eq!(file_stem("dir/.hidden"), ".hidden");
        assert_eq!(file_stem("dir/a.raml"), "a");
        assert_eq!(file_stem("a"), "a");
    }
}
