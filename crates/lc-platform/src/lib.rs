//! Platform adapters for local-clipboard.
//!
//! - [`clipboard`]: OS clipboard access through the desktop's clipboard tools
//! - [`remote`]: HTTP client for the sync server
//! - [`net_utils`]: LAN address discovery for the server banner

pub mod clipboard;
pub mod net_utils;
pub mod remote;

pub use clipboard::{ClipboardCommand, CommandClipboard};
pub use remote::HttpRemoteClipboard;
