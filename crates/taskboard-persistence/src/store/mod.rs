pub mod atomic_writer;
pub mod board_store;
pub mod file_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use board_store::BoardStore;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
