pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::ByteSize;
pub use crate::core::unit::{BYTE, GB, GIB, KB, KIB, MB, MIB, PB, PIB, TB, TIB};
pub use crate::core::{Unit, parse_size, validate_size};
pub use crate::error::{Result, SizeError};
pub use crate::utils::{format_size, format_size_as};
