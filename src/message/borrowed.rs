use crate::error::{MessageParseError, Result};

use super::nom_parser::ParsedLine;
use super::{Message, ProtocolMessage};

/// A borrowed IRC message, pointing into the line it was parsed from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageRef<'a> {
    /// Raw IRCv3 tags, without the leading `@`.
    pub tags: Option<&'a str>,
    /// Raw source prefix, without the leading `:`.
    pub prefix: Option<&'a str>,
    /// Command name or three-digit numeric.
    pub command: &'a str,
    /// Parameters in wire order; a `:trailing` parameter is the last entry.
    pub params: Vec<&'a str>,
}

impl<'a> MessageRef<'a> {
    /// Parse a single protocol line. A trailing CR/LF is ignored.
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>> {
        let trimmed = s.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let line = ParsedLine::parse(trimmed)?;
        Ok(MessageRef {
            tags: line.tags,
            prefix: line.prefix,
            command: line.command,
            params: line.params,
        })
    }

    /// Copy into an owned [`Message`]. Tags are not carried over.
    pub fn to_message(&self) -> Message {
        Message {
            prefix: self.prefix.map(str::to_owned),
            command: self.command.to_owned(),
            params: self.params.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

impl ProtocolMessage for MessageRef<'_> {
    fn command(&self) -> &str {
        self.command
    }

    fn param_count(&self) -> usize {
        self.params.len()
    }

    fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_crlf() {
        let msg = MessageRef::parse("PING :irc.example.net\r\n").unwrap();
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.params, vec!["irc.example.net"]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(MessageRef::parse(""), Err(MessageParseError::EmptyMessage));
        assert_eq!(MessageRef::parse("\r\n"), Err(MessageParseError::EmptyMessage));
    }

    #[test]
    fn test_protocol_message_accessors() {
        let msg = MessageRef::parse(":srv 005 bot NICKLEN=30 :are supported by this server").unwrap();
        assert_eq!(ProtocolMessage::command(&msg), "005");
        assert_eq!(msg.param_count(), 3);
        assert_eq!(msg.param(1), Some("NICKLEN=30"));
        assert_eq!(msg.param(3), None);
        assert_eq!(msg.trailing(), Some("are supported by this server"));
    }

    #[test]
    fn test_to_owned_drops_tags() {
        let msg = MessageRef::parse("@id=1 :nick PRIVMSG #c :hi").unwrap();
        let owned = msg.to_message();
        assert_eq!(owned.prefix.as_deref(), Some("nick"));
        assert_eq!(owned.command, "PRIVMSG");
        assert_eq!(owned.params, vec!["#c".to_string(), "hi".to_string()]);
    }
}
