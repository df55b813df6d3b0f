//! Byte size parsing and formatting for the CLI.

/// Parse a size like `4194304`, `512B`, `64K`, `4M` or `1G`.
///
/// Suffixes are binary (K = 1024) and case-insensitive; a bare number
/// counts bytes.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty size".into());
    }

    let (digits, shift) = match s.as_bytes()[s.len() - 1] {
        b'b' | b'B' => (&s[..s.len() - 1], 0u32),
        b'k' | b'K' => (&s[..s.len() - 1], 10),
        b'm' | b'M' => (&s[..s.len() - 1], 20),
        b'g' | b'G' => (&s[..s.len() - 1], 30),
        _ => (s, 0),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid size '{s}'"));
    }

    // Digits only, so the parse can fail only by overflowing u64.
    let value: u64 = digits
        .parse()
        .map_err(|_| format!("size '{s}' is too large"))?;
    value
        .checked_mul(1u64 << shift)
        .ok_or_else(|| format!("size '{s}' is too large"))
}

/// Render a byte count the way `ls -h` would: one decimal of the largest
/// binary unit that fits, plain bytes below 1K.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [(u64, char); 3] = [(1 << 30, 'G'), (1 << 20, 'M'), (1 << 10, 'K')];
    for (scale, unit) in UNITS {
        if bytes >= scale {
            return format!("{:.1}{unit}", bytes as f64 / scale as f64);
        }
    }
    format!("{bytes}B")
}
