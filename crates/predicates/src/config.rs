use std::fmt;

/// Environment variable consulted by [`RegistryConfig::from_env`].
pub const DUPLICATE_POLICY_ENV: &str = "SOL_CHC_DUPLICATE_POLICY";

/// What `create` does when the name is already live in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateName`.
    #[default]
    Reject,
    /// Hand back the existing identity if sort, role and program node all
    /// match; fail with `DuplicateName` otherwise. Nothing is ever replaced.
    ReuseIdentical,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Reject => write!(f, "reject"),
            DuplicatePolicy::ReuseIdentical => write!(f, "reuse-identical"),
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "reuse-identical" | "reuse_identical" | "reuse" => Ok(DuplicatePolicy::ReuseIdentical),
            _ => Err(format!(
                "Unknown duplicate policy: {s}. Valid options: reject, reuse-identical"
            )),
        }
    }
}

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Handling of `create` with a live name.
    pub duplicate_policy: DuplicatePolicy,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Defaults, overridden by `SOL_CHC_DUPLICATE_POLICY` when it is set.
    ///
    /// An unparsable value is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DUPLICATE_POLICY_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match raw.parse::<DuplicatePolicy>() {
                Ok(policy) => config.duplicate_policy = policy,
                Err(msg) => tracing::warn!("{DUPLICATE_POLICY_ENV}: {msg}"),
            }
        }
        config
    }
}
