//! # Wordsmith Store
//!
//! Durable word list: an ordered JSON array of `{ "key", "value" }`
//! records. A missing file is an empty list. Mutations keep their in-memory
//! effect even when the write fails, and report that through [`SaveStatus`].

pub mod error;
pub mod location;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use location::{resolve_word_list_path, DEFAULT_WORD_LIST_PATH};
pub use store::{SaveStatus, SharedWordStore, WordStore, WordsChanged};
