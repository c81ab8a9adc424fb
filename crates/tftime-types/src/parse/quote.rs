//! Quoting used inside grammar error messages.

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// Wraps `s` in double quotes for an error message.
///
/// `"` and `\` are backslash-escaped. Control characters and every byte of a
/// non-ASCII character are written as `\xNN`, so messages stay ASCII.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c.is_ascii() && c >= ' ' {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push('\\');
                out.push('x');
                out.push(char::from(LOWER_HEX[usize::from(byte >> 4)]));
                out.push(char::from(LOWER_HEX[usize::from(byte & 0x0f)]));
            }
        }
    }
    out.push('"');
    out
}
