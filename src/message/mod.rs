//! IRC message shapes consumed by the capability tracker.
//!
//! Anything implementing [`ProtocolMessage`] can be fed to
//! [`IsupportTracker::ingest`](crate::IsupportTracker::ingest). The
//! [`MessageRef`] and [`Message`] types, and the line parser behind
//! [`MessageRef::parse`], cover callers that start from raw protocol lines.

mod borrowed;
mod nom_parser;
mod owned;

pub use self::borrowed::MessageRef;
pub use self::owned::Message;

/// A parsed protocol message: a command plus ordered parameters.
pub trait ProtocolMessage {
    /// Command name or numeric, e.g. `PRIVMSG` or `005`.
    fn command(&self) -> &str;

    /// Number of parameters, including any trailing parameter.
    fn param_count(&self) -> usize;

    /// Parameter at `index`, if present.
    fn param(&self, index: usize) -> Option<&str>;

    /// The last parameter, which for numerics is the human-readable text.
    fn trailing(&self) -> Option<&str> {
        self.param_count()
            .checked_sub(1)
            .and_then(|last| self.param(last))
    }
}

impl<T: ProtocolMessage + ?Sized> ProtocolMessage for &T {
    fn command(&self) -> &str {
        (**self).command()
    }

    fn param_count(&self) -> usize {
        (**self).param_count()
    }

    fn param(&self, index: usize) -> Option<&str> {
        (**self).param(index)
    }
}
