//! Line writer adapters.

mod failing;
mod memory;
mod stream;

pub use failing::FailingWriter;
pub use memory::MemoryWriter;
pub use stream::StreamWriter;
