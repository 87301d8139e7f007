pub mod format;

pub use format::format_size;
pub use format::format_size_as;
