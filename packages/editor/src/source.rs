use std::future::Future;
use std::sync::Arc;
use wordsmith_common::WordMap;
use wordsmith_store::{SharedWordStore, StoreResult};

/// Where an annotation pass gets its word map from.
///
/// Taking a snapshot may await a store; the snapshot is then treated as an
/// immutable value for the rest of the pass.
pub trait WordSource {
    fn snapshot(&self) -> impl Future<Output = StoreResult<WordMap>> + Send;
}

impl WordSource for SharedWordStore {
    fn snapshot(&self) -> impl Future<Output = StoreResult<WordMap>> + Send {
        let store = Arc::clone(self);
        async move { Ok(store.read().await.word_map()) }
    }
}

/// Fixed mapping, handy for one-shot passes
impl WordSource for WordMap {
    fn snapshot(&self) -> impl Future<Output = StoreResult<WordMap>> + Send {
        let words = self.clone();
        async move { Ok(words) }
    }
}
