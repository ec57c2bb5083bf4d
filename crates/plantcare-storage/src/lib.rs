//! # Plantcare Storage
//! 
//! Local record store implementations (adapters).

pub mod file_store;
pub mod memory_store;
pub mod local_store;

pub use file_store::FileRecordStore;
pub use memory_store::MemoryRecordStore;
pub use local_store::LocalStore;
