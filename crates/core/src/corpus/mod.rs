//! Corpus file discovery.

pub mod walker;

pub use walker::{CorpusWalkError, CorpusWalker, WalkedFile};
