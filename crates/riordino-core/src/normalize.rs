//! Text normalization for fuzzy header matching.
//!
//! Header cells in point-of-sale exports vary in case, spacing, line breaks
//! and accents ("Q.tà\nvenduta", "GIACENZA  BAR"). Every comparison against
//! the candidate tables goes through [`normalize_text`] first.

/// Lowercases `raw`, folds common accented vowels to their base letter,
/// collapses every run of whitespace (including newlines) to a single space
/// and trims both ends.
pub fn normalize_text(raw: &str) -> String {
    let folded: String = raw.chars().flat_map(char::to_lowercase).map(fold_accent).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps a lowercase accented vowel to its unaccented form.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        other => other,
    }
}
