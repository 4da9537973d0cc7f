/// Largest supported number of inputs.
///
/// Inputs are named with single letters `a` to `z`.
pub const MAX_WIDTH: u32 = 26;

/// Mask with the lowest `width` bits set.
///
/// ```text
/// width_mask(3) = 0b111
/// ```
pub fn width_mask(width: u32) -> u32 {
    assert!(width <= 32, "Width should be in the range 0..=32");
    if width == 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Name of the input in the given truth-table column (0 is the leftmost, most significant bit).
pub fn literal_name(column: u32) -> char {
    assert!(column < MAX_WIDTH, "Column should be in the range 0..26");
    (b'a' + column as u8) as char
}

/// Spreadsheet-style label for the `index`-th implicant: `A`..`Z`, `AA`, `AB`, ...
pub fn implicant_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    label.iter().rev().map(|&c| c as char).collect()
}
