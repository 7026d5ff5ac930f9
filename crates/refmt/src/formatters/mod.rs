mod command_formatter;

pub use command_formatter::*;
