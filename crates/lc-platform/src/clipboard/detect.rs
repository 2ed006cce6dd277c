use std::ffi::{OsStr, OsString};
use std::path::Path;

use super::command::ClipboardCommand;

/// Supported tools in preference order: (read program, read args, write program, write args).
const CANDIDATES: &[(&str, &[&str], &str, &[&str])] = &[
    ("wl-paste", &["--no-newline"], "wl-copy", &[]),
    ("xclip", &["-o", "-selection", "clipboard"], "xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--output"], "xsel", &["--clipboard", "--input"]),
    ("pbpaste", &[], "pbcopy", &[]),
];

/// Detect clipboard commands on the current `PATH`.
pub fn detect_commands() -> Option<(ClipboardCommand, Option<ClipboardCommand>)> {
    let path = std::env::var_os("PATH").unwrap_or_else(OsString::new);
    detect_commands_in(&path)
}

/// Detect clipboard commands in the given `PATH`-style search list.
///
/// Returns the read command and, when its companion is installed too, the
/// write command. A host with only a read tool still syncs one way.
pub fn detect_commands_in(path: &OsStr) -> Option<(ClipboardCommand, Option<ClipboardCommand>)> {
    CANDIDATES
        .iter()
        .find(|(read, ..)| is_on_path(read, path))
        .map(|(read, read_args, write, write_args)| {
            let write = is_on_path(write, path).then(|| ClipboardCommand::new(*write, write_args));
            (ClipboardCommand::new(*read, read_args), write)
        })
}

fn is_on_path(program: &str, path: &OsStr) -> bool {
    std::env::split_paths(path).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    candidate
        .metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(candidate: &Path) -> bool {
    candidate.is_file()
}
