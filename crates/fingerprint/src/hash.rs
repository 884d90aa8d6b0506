//! Stable hash primitives
//!
//! 31-polynomial rolling hashes over wrapping i64 arithmetic. These are
//! stable across platforms and releases, unlike `DefaultHasher`, which the
//! standard library reserves the right to change.

/// Stable hash of a string: 31-polynomial over its bytes.
pub fn str_hash(s: &str) -> i64 {
    let mut h: i64 = 0;
    for byte in s.bytes() {
        h = h.wrapping_mul(31).wrapping_add(i64::from(byte));
    }
    h
}

/// Stable hash of a string sequence: 31-polynomial over element hashes.
///
/// Order-sensitive by design: a path template list or verb list is an
/// ordered declaration, unlike the method/field sets combined by addition.
pub fn seq_hash<S: AsRef<str>>(items: &[S]) -> i64 {
    let mut h: i64 = 1;
    for item in items {
        h = h.wrapping_mul(31).wrapping_add(str_hash(item.as_ref()));
    }
    h
}

/// Stable hash of a boolean, via its canonical string form.
pub fn bool_hash(value: bool) -> i64 {
    str_hash(if value { "true" } else { "false" })
}

/// Render digest bytes as lowercase hexadecimal.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
