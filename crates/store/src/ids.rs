//! Document identifier generation.

use rand::Rng;

/// Entity classes that get generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Message,
    Notification,
}

impl IdKind {
    /// Identifier prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Message => "msg",
            IdKind::Notification => "notif",
        }
    }
}

/// Produces document identifiers of the form `<prefix>-<n>`.
///
/// This trait is object-safe so handlers can hold `Arc<dyn IdGenerator>`
/// and tests can substitute a fixed sequence. Stored documents depend on
/// the `<prefix>-<number>` format, so replacements must keep it.
pub trait IdGenerator: Send + Sync {
    /// Generate an identifier for the given entity kind.
    fn generate(&self, kind: IdKind) -> String;
}

/// Default generator: `n` drawn uniformly from 1..=100000.
///
/// No uniqueness guarantee; collisions are possible at scale and accepted.
/// A collision-resistant generator can be swapped in behind [`IdGenerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self, kind: IdKind) -> String {
        let n = rand::thread_rng().gen_range(1..=100_000);
        format!("{}-{}", kind.prefix(), n)
    }
}
