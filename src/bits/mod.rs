//! Bit-string codec.
//!
//! Mnemonic encoding works on strings of `'0'`/`'1'` characters so that
//! entropy bits and checksum bits can be concatenated and regrouped into
//! 11-bit word indices without byte-boundary bookkeeping.

/// Render a value in binary, left-padded with zeros to `width` characters.
///
/// # Arguments
/// * `value` - The value to render.
/// * `width` - The exact output length in bits.
///
/// # Panics
/// If `value` does not fit in `width` bits.
pub fn pad_bits(value: usize, width: usize) -> String {
    assert!(
        width as u32 >= usize::BITS - value.leading_zeros(),
        "value {value} does not fit in {width} bits"
    );
    format!("{value:0width$b}")
}

/// Convert a byte slice to a bit string, most significant bit first.
///
/// # Arguments
/// * `bytes` - The bytes to convert.
///
/// # Returns
/// A string of `'0'`/`'1'` characters, 8 per input byte.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        bits.push_str(&pad_bits(*byte as usize, 8));
    }
    bits
}

/// Convert a bit string back to bytes.
///
/// # Arguments
/// * `bits` - A string of `'0'`/`'1'` characters whose length is a
///   multiple of 8.
///
/// # Returns
/// The packed bytes, most significant bit first.
///
/// # Panics
/// If the length is not a multiple of 8 or any character is not binary.
pub fn bits_to_bytes(bits: &str) -> Vec<u8> {
    assert!(
        bits.len() % 8 == 0,
        "bit string length {} is not a multiple of 8",
        bits.len()
    );
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| {
            chunk.iter().fold(0u8, |byte, &b| match b {
                b'0' => byte << 1,
                b'1' => (byte << 1) | 1,
                _ => panic!("bit string contains non-binary character"),
            })
        })
        .collect()
}
