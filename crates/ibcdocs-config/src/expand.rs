//! `${VAR}` and `${VAR:-default}` expansion in config strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Strings without `${` are returned as is, so a bare `$` (common in URLs
/// and CSS) never triggers a lookup. `field` names the config key in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Expand an optional value in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value.as_deref() {
        *value = Some(expand_env(v, field)?);
    }
    Ok(())
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("IBCDOCS_TEST_LINK", "#AABAFF");
        }
        assert_eq!(
            expand_env("${IBCDOCS_TEST_LINK}", "theme.link_color").unwrap(),
            "#AABAFF"
        );
        unsafe {
            std::env::remove_var("IBCDOCS_TEST_LINK");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("IBCDOCS_TEST_UNSET_OUT");
        }
        assert_eq!(
            expand_env("${IBCDOCS_TEST_UNSET_OUT:-build}/site", "docs.output_dir").unwrap(),
            "build/site"
        );
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("IBCDOCS_TEST_MISSING");
        }
        let err = expand_env("${IBCDOCS_TEST_MISSING}", "docs.source_dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in docs.source_dir: ${IBCDOCS_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_bare_dollar_untouched() {
        assert_eq!(expand_env("$HOME/docs", "docs.source_dir").unwrap(), "$HOME/docs");
    }

    #[test]
    fn test_expand_opt() {
        let mut none = None;
        expand_opt(&mut none, "theme.link_color").unwrap();
        assert_eq!(none, None);

        let mut some = Some("#FFFFFF".to_owned());
        expand_opt(&mut some, "theme.link_color").unwrap();
        assert_eq!(some.as_deref(), Some("#FFFFFF"));
    }
}
