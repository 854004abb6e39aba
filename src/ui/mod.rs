pub mod colors;
pub mod command;
pub mod screen;
pub mod shell;

pub use command::{Command, ParseError, parse_command};
pub use screen::{describe_outcome, render_screen};
pub use shell::{Shell, Step};
