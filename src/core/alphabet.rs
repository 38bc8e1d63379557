// File: src/core/alphabet.rs

/// Lowest and highest value a letter can carry.
pub const MIN_VALUE: u8 = 1;
pub const MAX_VALUE: u8 = 26;

/// Accented letters grouped by the value they share with their base letter,
/// in the order the correspondence table lists them.
pub const ACCENT_GROUPS: [(&str, u8); 7] = [
    ("É, È, Ê, Ë", 5),
    ("À, Â", 1),
    ("Î, Ï", 9),
    ("Ô, Ö", 15),
    ("Ù, Û, Ü", 21),
    ("Ç", 3),
    ("Ñ", 14),
];

/// Value of an uppercase letter in the Réunion creole alphabet.
///
/// Basic Latin letters map to their position (A=1 .. Z=26). Accented variants
/// share the value of their base letter. Anything else, including lowercase
/// input and letters from other scripts, has no value.
pub fn letter_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A' + 1),
        'À' | 'Â' => Some(1),
        'Ç' => Some(3),
        'É' | 'È' | 'Ê' | 'Ë' => Some(5),
        'Î' | 'Ï' => Some(9),
        'Ñ' => Some(14),
        'Ô' | 'Ö' => Some(15),
        'Ù' | 'Û' | 'Ü' => Some(21),
        _ => None,
    }
}

/// Canonical unaccented letter for a value; `None` outside `1..=26`.
pub fn letter_for(value: u64) -> Option<char> {
    if (MIN_VALUE as u64..=MAX_VALUE as u64).contains(&value) {
        Some((b'A' + value as u8 - 1) as char)
    } else {
        None
    }
}

/// The 26 base letters with their values, sorted by value.
pub fn base_letters() -> impl Iterator<Item = (char, u8)> {
    (MIN_VALUE..=MAX_VALUE).map(|v| ((b'A' + v - 1) as char, v))
}
