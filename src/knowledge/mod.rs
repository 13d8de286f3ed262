// Knowledge base module
// Static topic entries the relevance scorer matches against

mod builtin;
mod entry;

pub use entry::{KnowledgeBase, KnowledgeEntry, KnowledgeError};
