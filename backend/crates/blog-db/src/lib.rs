pub mod connection;
pub mod document_store;
pub mod error;
pub mod repositories;
pub mod stores;

pub use connection::{connect, connect_in_memory, migrate};
pub use document_store::{Document, DocumentStore, merge_patch};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use stores::memory_document_store::MemoryDocumentStore;
pub use stores::sqlite_document_store::SqliteDocumentStore;
