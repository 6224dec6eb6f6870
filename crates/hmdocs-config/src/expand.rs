//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    // Required references must be set before handing off to shellexpand,
    // which leaves unresolved `${VAR}` untouched instead of failing.
    if let Some(missing) = required_vars(value)
        .into_iter()
        .find(|var| std::env::var(var).is_err())
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{missing}}} not set"),
        });
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, std::env::VarError> {
        Ok(std::env::var(var).ok())
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}}: {}", e.var_name, e.cause),
    })
}

/// Names of `${VAR}` references that carry no `:-default`.
fn required_vars(value: &str) -> Vec<&str> {
    let mut vars = Vec::new();
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        let reference = &after[..end];
        if !reference.contains(":-") {
            vars.push(reference);
        }
        rest = &after[end + 1..];
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HMDOCS_TEST_BRANCH", "main");
        }
        let result = expand_env("${HMDOCS_TEST_BRANCH}", "banner.branch").unwrap();
        assert_eq!(result, "main");
        unsafe {
            std::env::remove_var("HMDOCS_TEST_BRANCH");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("HMDOCS_UNSET_COMMIT");
        }
        let result = expand_env("${HMDOCS_UNSET_COMMIT:-unknown}", "banner.commit").unwrap();
        assert_eq!(result, "unknown");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("HMDOCS_MISSING_VAR");
        }
        let err = expand_env("${HMDOCS_MISSING_VAR}", "site.repository").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("HMDOCS_MISSING_VAR"));
        assert!(err.to_string().contains("site.repository"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HMDOCS_TEST_ORG", "HytaleModding");
        }
        let result = expand_env("https://github.com/${HMDOCS_TEST_ORG}/site", "site.repository")
            .unwrap();
        assert_eq!(result, "https://github.com/HytaleModding/site");
        unsafe {
            std::env::remove_var("HMDOCS_TEST_ORG");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$VAR", "test.field").unwrap();
        assert_eq!(result, "$VAR");
    }

    #[test]
    fn test_required_vars_skips_defaults() {
        assert_eq!(required_vars("${A}/${B:-x}/${C}"), vec!["A", "C"]);
    }
}
