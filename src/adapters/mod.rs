// Adapters layer: concrete FileSystem implementations.

pub mod local;
pub mod memory;

pub use local::LocalFileSystem;
pub use memory::InMemoryFileSystem;
