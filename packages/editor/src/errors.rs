//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Word list error: {0}")]
    Store(#[from] wordsmith_store::StoreError),

    #[error("Annotation session has shut down")]
    SessionClosed,
}
