use sui_pure_args_types::env_utils::env_var;

/// Environment variable holding the default nesting limit.
pub const MAX_DEPTH_ENV: &str = "SUI_PURE_ARGS_MAX_DEPTH";

/// Configuration for argument resolution.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Maximum nesting depth of types and values; `None` leaves it unbounded.
    pub max_depth: Option<usize>,
}

impl ResolverConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Read `SUI_PURE_ARGS_MAX_DEPTH`; unset or unparsable means unbounded.
    pub fn from_env() -> Self {
        Self {
            max_depth: env_var(MAX_DEPTH_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(ResolverConfig::default().max_depth, None);
        assert_eq!(ResolverConfig::with_max_depth(8).max_depth, Some(8));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(MAX_DEPTH_ENV, "12");
        assert_eq!(ResolverConfig::from_env().max_depth, Some(12));
        std::env::set_var(MAX_DEPTH_ENV, "deep");
        assert_eq!(ResolverConfig::from_env().max_depth, None);
        std::env::remove_var(MAX_DEPTH_ENV);
    }
}
