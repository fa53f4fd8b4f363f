pub mod memory_document_store;
pub mod sqlite_document_store;
