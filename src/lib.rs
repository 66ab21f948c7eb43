//! # slirc-isupport
//!
//! Tracks the capabilities an IRC server advertises through `RPL_ISUPPORT`
//! (numeric 005) over the life of one connection.
//!
//! ## Features
//!
//! - Incremental accumulation across any number of 005 replies
//! - Flag, list, map and raw accessors over the advertised values
//! - `PREFIX` parsing with symbol/mode lookups in both directions
//! - Tolerant of legacy and malformed servers: nothing here fails a session
//! - Sans-IO: consumes parsed messages, never touches a socket
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_isupport::{IsupportTracker, MessageRef};
//!
//! let tracker = IsupportTracker::new();
//!
//! for line in [
//!     ":irc.example.net 005 bot CHANTYPES=# PREFIX=(qaohv)~&@%+ :are supported by this server",
//!     ":irc.example.net 005 bot TARGMAX=PRIVMSG:4,JOIN: WHOX :are supported by this server",
//! ] {
//!     let msg = MessageRef::parse(line).expect("valid IRC line");
//!     tracker.ingest(&msg);
//! }
//!
//! assert!(tracker.is_enabled("WHOX"));
//! assert_eq!(tracker.get_map("TARGMAX").unwrap()["PRIVMSG"], "4");
//! assert_eq!(tracker.prefix_map().unwrap()[&'%'], 'h');
//! ```
//!
//! The tracker accepts any type implementing [`ProtocolMessage`], so
//! messages produced by another parser can be fed in directly.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod isupport;
pub mod message;

pub use self::config::{Conformance, TrackerConfig, DEFAULT_PREFIX};
pub use self::error::MessageParseError;
pub use self::isupport::{IsupportBuilder, IsupportTracker, PrefixSpec, RPL_ISUPPORT};
pub use self::message::{Message, MessageRef, ProtocolMessage};
