pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use models::{
    AgeCategory, Location, Memory, MemoryFilter, MemoryType, NewMemory, NewTravel, Travel,
    UnknownVariant,
};
pub use repo::{RecordStore, StoreError};
