//! Configuration for [`IsupportTracker`](crate::IsupportTracker).

/// `PREFIX` value assumed until the server advertises its own.
///
/// RFC 1459 servers only know channel operators and voiced users.
pub const DEFAULT_PREFIX: &str = "(ov)@+";

/// How to treat `RPL_ISUPPORT` replies whose trailing text does not end in
/// `server` (pre-ISUPPORT servers reused 005 for `RPL_BOUNCE`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Conformance {
    /// Log a warning and apply the tokens anyway.
    #[default]
    Lenient,
    /// Log a warning and drop the message.
    Strict,
}

/// Settings fixed for the lifetime of one tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Seed value for `PREFIX`, present before any message is ingested.
    pub default_prefix: String,
    /// Policy for replies missing the `server` suffix.
    pub conformance: Conformance,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_string(),
            conformance: Conformance::default(),
        }
    }
}

impl TrackerConfig {
    /// Replace the seeded `PREFIX` value.
    pub fn with_default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = prefix.into();
        self
    }

    /// Set the conformance policy.
    pub fn with_conformance(mut self, conformance: Conformance) -> Self {
        self.conformance = conformance;
        self
    }
}
