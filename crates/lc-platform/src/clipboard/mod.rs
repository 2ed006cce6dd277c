mod command;
mod detect;

pub use command::{ClipboardCommand, CommandClipboard, DEFAULT_COMMAND_TIMEOUT};
pub use detect::{detect_commands, detect_commands_in};
