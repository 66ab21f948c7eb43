//! Construction of `RPL_ISUPPORT` replies.

use super::tracker::RPL_ISUPPORT;
use crate::message::Message;

/// Trailing text servers append to every 005 reply.
pub const ISUPPORT_TRAILING: &str = "are supported by this server";

/// Conventional token limit per 005 line, keeping lines under 512 bytes.
pub const MAX_TOKENS_PER_LINE: usize = 13;

/// Builder for `RPL_ISUPPORT` messages.
///
/// Tokens are emitted in the order they were added.
///
/// ```
/// use slirc_isupport::{IsupportBuilder, IsupportTracker};
///
/// let msg = IsupportBuilder::new()
///     .token("CHANTYPES", "#")
///     .prefix("qaohv", "~&@%+")
///     .flag("EXCEPTS")
///     .build("bot");
///
/// assert_eq!(
///     msg.to_string(),
///     "005 bot CHANTYPES=# PREFIX=(qaohv)~&@%+ EXCEPTS :are supported by this server"
/// );
///
/// let tracker = IsupportTracker::new();
/// assert_eq!(tracker.ingest(&msg), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IsupportBuilder {
    tokens: Vec<String>,
}

impl IsupportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare `KEY` token.
    pub fn flag(mut self, key: &str) -> Self {
        self.tokens.push(key.to_string());
        self
    }

    /// Add a `KEY=VALUE` token.
    pub fn token(mut self, key: &str, value: &str) -> Self {
        self.tokens.push(format!("{}={}", key, value));
        self
    }

    /// Add `PREFIX=(<modes>)<symbols>`.
    pub fn prefix(self, modes: &str, symbols: &str) -> Self {
        let value = format!("({}){}", modes, symbols);
        self.token("PREFIX", &value)
    }

    /// A single reply addressed to `nick` carrying every token.
    pub fn build(self, nick: &str) -> Message {
        reply(nick, self.tokens)
    }

    /// Replies addressed to `nick`, at most `per_message` tokens each.
    ///
    /// A `per_message` of zero is treated as one. No tokens, no messages.
    pub fn build_messages(self, nick: &str, per_message: usize) -> Vec<Message> {
        let per_message = per_message.max(1);
        self.tokens
            .chunks(per_message)
            .map(|chunk| reply(nick, chunk.to_vec()))
            .collect()
    }
}

fn reply(nick: &str, tokens: Vec<String>) -> Message {
    let mut params = Vec::with_capacity(tokens.len() + 2);
    params.push(nick.to_string());
    params.extend(tokens);
    params.push(ISUPPORT_TRAILING.to_string());
    Message::new(RPL_ISUPPORT, params)
}
