/// Compiler configuration.
///
/// Defaults match the historical driver: a 9-qubit register, fusion on,
/// and repeated indices kept as meaningful repetition. Environment hints
/// can override any field; see [`CompilerConfig::from_env`].
use crate::core::MAX_WIDTH;
use std::env;

/// Register width used when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 9;

/// How `compile` treats an index that appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every occurrence. Repeats flow through the tree together and
    /// their adjacent instructions are collapsed by fusion.
    #[default]
    Preserve,
    /// Treat a repeated index as caller error (`DuplicateIndex`).
    Reject,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "reject"   => Ok(Self::Reject),
            other      => Err(format!("unknown duplicate policy '{other}'")),
        }
    }
}

/// Settings for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Register width W; every index must be `< 2^W`.
    pub width: usize,
    /// Run the adjacent-duplicate fusion pass. Disable to inspect the raw stream.
    pub fusion: bool,
    /// Treatment of repeated indices.
    pub duplicates: DuplicatePolicy,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, fusion: true, duplicates: DuplicatePolicy::Preserve }
    }
}

impl CompilerConfig {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_fusion(mut self, fusion: bool) -> Self {
        self.fusion = fusion;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Build a configuration using environment hints.
    ///
    /// # Environment Variables
    ///
    /// - `ASTRAPREP_WIDTH` - Register width, `1..=63`
    /// - `ASTRAPREP_FUSION` - `true`/`false` (or `1`/`0`)
    /// - `ASTRAPREP_DUPLICATES` - `preserve` (default) or `reject`
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ASTRAPREP_WIDTH") {
            match raw.trim().parse::<usize>() {
                Ok(w) if (1..=MAX_WIDTH).contains(&w) => config.width = w,
                _ => tracing::warn!(value = %raw, "ignoring invalid ASTRAPREP_WIDTH"),
            }
        }

        if let Some(raw) = lookup("ASTRAPREP_FUSION") {
            match parse_bool(&raw) {
                Some(b) => config.fusion = b,
                None => tracing::warn!(value = %raw, "ignoring invalid ASTRAPREP_FUSION"),
            }
        }

        if let Some(raw) = lookup("ASTRAPREP_DUPLICATES") {
            match raw.parse::<DuplicatePolicy>() {
                Ok(policy) => config.duplicates = policy,
                Err(msg) => tracing::warn!(value = %raw, "{msg}"),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on"  => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let c = CompilerConfig::default();
        assert_eq!(c.width, 9);
        assert!(c.fusion);
        assert_eq!(c.duplicates, DuplicatePolicy::Preserve);
    }

    #[test]
    fn test_builders() {
        let c = CompilerConfig::default()
            .with_width(4)
            .with_fusion(false)
            .with_duplicates(DuplicatePolicy::Reject);
        assert_eq!(c, CompilerConfig { width: 4, fusion: false, duplicates: DuplicatePolicy::Reject });
    }

    #[test]
    fn test_env_overrides() {
        let c = CompilerConfig::from_lookup(lookup(&[
            ("ASTRAPREP_WIDTH", "12"),
            ("ASTRAPREP_FUSION", "off"),
            ("ASTRAPREP_DUPLICATES", "Reject"),
        ]));
        assert_eq!(c.width, 12);
        assert!(!c.fusion);
        assert_eq!(c.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_env_invalid_values_keep_defaults() {
        let c = CompilerConfig::from_lookup(lookup(&[
            ("ASTRAPREP_WIDTH", "64"),
            ("ASTRAPREP_FUSION", "maybe"),
            ("ASTRAPREP_DUPLICATES", "dedupe"),
        ]));
        assert_eq!(c, CompilerConfig::default());
    }

    #[test]
    fn test_env_empty() {
        assert_eq!(CompilerConfig::from_lookup(lookup(&[])), CompilerConfig::default());
    }
}
