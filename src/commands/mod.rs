pub mod completion;
pub mod format;
pub mod parse;
pub mod validate;
