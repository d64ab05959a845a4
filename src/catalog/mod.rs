/// File catalog
///
/// The global name -> {size, owner} index. Pure storage: quota and
/// uniqueness policy live in the engine, which keeps this index and the
/// tenant registry consistent with each other.

pub mod file_index;

pub use file_index::{FileIndex, FileRecord};
