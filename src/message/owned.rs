use std::fmt;
use std::str::FromStr;

use crate::error::MessageParseError;

use super::{MessageRef, ProtocolMessage};

/// An owned IRC message.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Source prefix, without the leading `:`.
    pub prefix: Option<String>,
    /// Command name or three-digit numeric.
    pub command: String,
    /// Parameters in wire order.
    pub params: Vec<String>,
}

impl Message {
    /// Create a message with no prefix.
    pub fn new<C, I, P>(command: C, params: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Message {
            prefix: None,
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the source prefix (e.g. a server name).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Borrow as a [`MessageRef`].
    pub fn as_message_ref(&self) -> MessageRef<'_> {
        MessageRef {
            tags: None,
            prefix: self.prefix.as_deref(),
            command: &self.command,
            params: self.params.iter().map(String::as_str).collect(),
        }
    }
}

impl ProtocolMessage for Message {
    fn command(&self) -> &str {
        &self.command
    }

    fn param_count(&self) -> usize {
        self.params.len()
    }

    fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageRef::parse(s).map(|m| m.to_message())
    }
}

impl fmt::Display for Message {
    /// Serialize without a line terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{} ", prefix)?;
        }
        f.write_str(&self.command)?;

        if let Some((last, middle)) = self.params.split_last() {
            for param in middle {
                write!(f, " {}", param)?;
            }
            if last.is_empty() || last.contains(' ') || last.starts_with(':') {
                write!(f, " :{}", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }
        Ok(())
    }
}
