/// Strip NUL bytes and normalize `\r\n` / lone `\r` line endings to `\n`.
///
/// Every other character, including tabs, quotes and control characters,
/// is kept as is.
pub fn sanitize_for_storage(s: &str) -> String {
    s.replace('\0', "").replace("\r\n", "\n").replace('\r', "\n")
}
