mod command;
mod logging;
mod process;

pub use command::*;
pub use logging::*;
pub use process::*;
