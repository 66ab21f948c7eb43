//! Per-session accumulation of `RPL_ISUPPORT` tokens.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use super::prefix::PrefixSpec;
use super::token::{parse_map, split_list, split_token};
use crate::config::{Conformance, TrackerConfig};
use crate::message::ProtocolMessage;

/// Numeric of the ISUPPORT reply.
pub const RPL_ISUPPORT: &str = "005";

/// Key of the channel membership prefix token.
pub const PREFIX_KEY: &str = "PREFIX";

/// Conformant 005 replies end with text like "are supported by this server".
const CONFORMANCE_SUFFIX: &str = "server";

/// Server capabilities advertised over one session.
///
/// Keys are case-sensitive and are only ever added or overwritten. A key
/// with an empty value is a flag whose presence is the whole signal.
/// `PREFIX` is seeded at construction so prefix lookups work before the
/// server has said anything.
///
/// One `ingest` call is applied atomically: readers see all of a message's
/// tokens or none of them.
///
/// # Example
///
/// ```
/// use slirc_isupport::{IsupportTracker, MessageRef};
///
/// let tracker = IsupportTracker::new();
/// let line = ":irc.example.net 005 bot CHANTYPES=#& EXCEPTS PREFIX=(qov)~@+ \
///             :are supported by this server";
/// tracker.ingest(&MessageRef::parse(line).unwrap());
///
/// assert!(tracker.is_enabled("EXCEPTS"));
/// assert_eq!(tracker.get_raw("CHANTYPES").as_deref(), Some("#&"));
/// assert_eq!(tracker.prefix_map().unwrap()[&'~'], 'q');
/// ```
#[derive(Debug)]
pub struct IsupportTracker {
    conformance: Conformance,
    data: RwLock<HashMap<String, String>>,
}

impl Default for IsupportTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IsupportTracker {
    /// Create a tracker seeded with `PREFIX=(ov)@+`.
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        let mut data = HashMap::new();
        data.insert(PREFIX_KEY.to_string(), config.default_prefix);

        Self {
            conformance: config.conformance,
            data: RwLock::new(data),
        }
    }

    /// Apply one message.
    ///
    /// Anything other than `RPL_ISUPPORT` is ignored. Replies with fewer
    /// than two parameters are dropped. Every parameter between the
    /// recipient and the trailing text is stored as a token, overwriting
    /// earlier values for the same key.
    ///
    /// Returns the number of tokens applied. Nothing here is an error:
    /// bad input is logged and absorbed.
    pub fn ingest<M: ProtocolMessage + ?Sized>(&self, msg: &M) -> usize {
        if msg.command() != RPL_ISUPPORT {
            return 0;
        }

        let count = msg.param_count();
        if count < 2 {
            warn!(params = count, "malformed RPL_ISUPPORT message, dropping");
            return 0;
        }

        let trailing = msg.trailing().unwrap_or_default();
        if !trailing.ends_with(CONFORMANCE_SUFFIX) {
            match self.conformance {
                Conformance::Lenient => warn!(
                    trailing,
                    "server does not appear to support ISUPPORT, applying tokens anyway"
                ),
                Conformance::Strict => {
                    warn!(
                        trailing,
                        "server does not appear to support ISUPPORT, dropping message"
                    );
                    return 0;
                }
            }
        }

        let tokens: Vec<(String, String)> = (1..count - 1)
            .filter_map(|i| msg.param(i))
            .map(|param| {
                let (key, value) = split_token(param);
                (key.to_owned(), value.to_owned())
            })
            .collect();
        let applied = tokens.len();

        {
            let mut data = self.data.write();
            for (key, value) in tokens {
                trace!(key = %key, value = %value, "isupport token");
                data.insert(key, value);
            }
        }

        debug!(tokens = applied, "applied RPL_ISUPPORT tokens");
        applied
    }

    /// Whether the server advertised `key`, whatever its value.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// The stored value of `key`, exactly as received.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    /// The value of `key` split on `,`.
    ///
    /// An advertised key with an empty value gives `[""]`.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.data.read().get(key).map(|value| split_list(value))
    }

    /// The value of `key` parsed as `k:v,k:v`.
    ///
    /// `None` if the key is missing or any element lacks a `:`.
    pub fn get_map(&self, key: &str) -> Option<HashMap<String, String>> {
        self.data.read().get(key).and_then(|value| parse_map(value))
    }

    /// The current `PREFIX` value, parsed.
    pub fn prefix_spec(&self) -> Option<PrefixSpec> {
        self.data
            .read()
            .get(PREFIX_KEY)
            .and_then(|value| PrefixSpec::parse(value))
    }

    /// Prefix symbol → channel mode, from the current `PREFIX` value.
    ///
    /// `None` if `PREFIX` is malformed.
    pub fn prefix_map(&self) -> Option<HashMap<char, char>> {
        self.prefix_spec().map(|spec| spec.to_map())
    }

    /// Copy of every key and value, taken under a single read lock.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.data.read().clone()
    }
}
