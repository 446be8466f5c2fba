//! Build configuration

use serde::Deserialize;

use crate::error::BuildError;
use crate::error::PatternError;
use crate::redact::RedactionMatcher;

/// Default cap on nesting depth, independent of `max_level`.
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// Options for [`build`](super::build).
///
/// # Example
///
/// ```
/// use objview_lib::build::BuildOptions;
///
/// let options = BuildOptions::new()
///     .with_max_level(2)
///     .with_redact_keys(["credentials.*", "users.*.password"])
///     .unwrap();
/// assert_eq!(options.max_level, 2);
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Deepest level whose container nodes are expanded is `max_level - 1`.
    /// Container nodes at `max_level` are emitted but not expanded.
    ///
    /// Default: 0 (unlimited)
    pub max_level: usize,

    /// Ids to redact.
    ///
    /// Default: no redaction
    pub redaction: RedactionMatcher,

    /// Hard cap on nesting depth. Exceeding it fails the build with
    /// [`BuildError::ResourceExhausted`].
    ///
    /// Default: 256
    pub recursion_limit: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_level: 0,
            redaction: RedactionMatcher::empty(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl BuildOptions {
    /// Creates build options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the depth cap. `0` means unlimited.
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    /// Compiles and sets the redaction patterns.
    pub fn with_redact_keys<I, S>(mut self, patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redaction = RedactionMatcher::new(patterns)?;
        Ok(self)
    }

    /// Sets an already compiled matcher.
    pub fn with_redaction(mut self, redaction: RedactionMatcher) -> Self {
        self.redaction = redaction;
        self
    }

    /// Sets the nesting cap.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Serialized form of [`BuildOptions`], as a host would supply it.
///
/// ```json
/// { "maxLevel": 3, "redactKeys": ["list.*.token"], "recursionLimit": 64 }
/// ```
///
/// All fields are optional. Values are checked when converting into
/// [`BuildOptions`]: a negative `maxLevel` or a zero `recursionLimit` is an
/// [`BuildError::InvalidArgument`], a bad pattern a [`BuildError::Pattern`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    pub max_level: i64,
    pub redact_keys: Vec<String>,
    pub recursion_limit: Option<i64>,
}

impl ViewerConfig {
    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl TryFrom<ViewerConfig> for BuildOptions {
    type Error = BuildError;

    fn try_from(config: ViewerConfig) -> Result<Self, Self::Error> {
        let max_level = usize::try_from(config.max_level).map_err(|_| {
            BuildError::invalid_argument(
                "maxLevel",
                format!("must be non-negative, got {}", config.max_level),
            )
        })?;

        let recursion_limit = match config.recursion_limit {
            None => DEFAULT_RECURSION_LIMIT,
            Some(limit) => match usize::try_from(limit) {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(BuildError::invalid_argument(
                        "recursionLimit",
                        format!("must be positive, got {}", limit),
                    ));
                }
            },
        };

        Ok(BuildOptions::new()
            .with_max_level(max_level)
            .with_recursion_limit(recursion_limit)
            .with_redact_keys(config.redact_keys)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::RedactionTest;

    #[test]
    fn test_defaults() {
        let options = BuildOptions::default();
        assert_eq!(options.max_level, 0);
        assert_eq!(options.recursion_limit, DEFAULT_RECURSION_LIMIT);
        assert!(options.redaction.is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let config =
            ViewerConfig::from_json(r#"{"maxLevel": 2, "redactKeys": ["a.*"]}"#).unwrap();
        let options = BuildOptions::try_from(config).unwrap();
        assert_eq!(options.max_level, 2);
        assert_eq!(options.recursion_limit, DEFAULT_RECURSION_LIMIT);
        assert!(options.redaction.is_redacted("a.b"));
    }

    #[test]
    fn test_empty_config() {
        let options = BuildOptions::try_from(ViewerConfig::from_json("{}").unwrap()).unwrap();
        assert_eq!(options.max_level, 0);
        assert!(options.redaction.is_empty());
    }

    #[test]
    fn test_negative_max_level_rejected() {
        let config = ViewerConfig::from_json(r#"{"maxLevel": -1}"#).unwrap();
        let err = BuildOptions::try_from(config).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidArgument {
                name: "maxLevel",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_recursion_limit_rejected() {
        let config = ViewerConfig::from_json(r#"{"recursionLimit": 0}"#).unwrap();
        let err = BuildOptions::try_from(config).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidArgument {
                name: "recursionLimit",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let config = ViewerConfig::from_json(r#"{"redactKeys": ["ok", "a..b"]}"#).unwrap();
        let err = BuildOptions::try_from(config).unwrap_err();
        assert_eq!(
            err,
            BuildError::Pattern(PatternError::empty_segment("a..b", 1))
        );
    }
}
