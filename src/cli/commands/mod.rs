pub mod check;
mod command_result;
pub mod fmt;
pub mod helper;
pub mod init;
pub mod stats;
pub mod translate;

pub use command_result::*;
