//! ISUPPORT (`RPL_ISUPPORT`, numeric 005) tracking.
//!
//! Servers advertise their conventions as `KEY` or `KEY=VALUE` tokens,
//! usually spread across several 005 replies. [`IsupportTracker`] keeps the
//! raw values for one session and shapes them on demand: flags, lists, maps
//! and the `PREFIX` mode/symbol pairing ([`PrefixSpec`]). Only `PREFIX` is
//! interpreted; every other value is an opaque string until asked for.

mod builder;
mod prefix;
pub mod token;
mod tracker;

pub use self::builder::{IsupportBuilder, ISUPPORT_TRAILING, MAX_TOKENS_PER_LINE};
pub use self::prefix::PrefixSpec;
pub use self::tracker::{IsupportTracker, PREFIX_KEY, RPL_ISUPPORT};
