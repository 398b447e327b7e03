use alloc::string::String;

/// Parses a hex color into `[r, g, b]`.
///
/// Accepts `#rgb` and `#rrggbb` (case-insensitive, junk around the digits
/// tolerated); shorthand digits are doubled. Unparseable input reads as
/// black.
pub fn hex_to_rgb(color: &str) -> [u8; 3] {
    let Some(run) = find_hex_run(color) else {
        return [0, 0, 0];
    };
    let expanded = expand(run);
    match u32::from_str_radix(&expanded, 16) {
        Ok(integer) => [(integer >> 16) as u8, (integer >> 8) as u8, integer as u8],
        Err(_) => [0, 0, 0],
    }
}

/// Normalizes a hex color to `#rrggbb`, expanding shorthand. Unparseable
/// input reads as `#000000`.
pub fn to_expanded_hex(color: &str) -> String {
    match find_hex_run(color) {
        Some(run) => {
            let mut out = String::from("#");
            out.push_str(&expand(run));
            out
        }
        None => String::from("#000000"),
    }
}

// First run of 6 hex digits, else first run of 3, scanning left to right.
fn find_hex_run(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    for start in 0..bytes.len() {
        let rest = &bytes[start..];
        if rest.len() >= 6 && rest[..6].iter().all(u8::is_ascii_hexdigit) {
            return Some(&s[start..start + 6]);
        }
        if rest.len() >= 3 && rest[..3].iter().all(u8::is_ascii_hexdigit) {
            return Some(&s[start..start + 3]);
        }
    }
    None
}

fn expand(run: &str) -> String {
    if run.len() == 3 {
        run.chars().flat_map(|c| [c, c]).collect()
    } else {
        String::from(run)
    }
}
