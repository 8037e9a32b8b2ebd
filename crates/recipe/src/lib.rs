mod command;
mod query;
mod seed;

pub use command::*;
pub use seed::*;
