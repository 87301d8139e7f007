pub mod parser;
pub mod unit;
pub mod validator;

pub use parser::parse_size;
pub use unit::Unit;
pub use validator::validate_size;
