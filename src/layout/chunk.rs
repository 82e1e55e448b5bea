//! Row chunking and duplication.
//!
//! Pure helpers that turn a character sequence into fixed-width rows.
//! All counts are in runes (`char`s), not bytes.

/// Split a string into chunks of `size` runes.
///
/// The last chunk may be shorter. Concatenating the chunks reconstructs the
/// input exactly. A `size` of zero yields no chunks.
pub fn split_into_chunks(s: &str, size: usize) -> Vec<String> {
    if size == 0 {
        return Vec::new();
    }

    let runes: Vec<char> = s.chars().collect();
    runes.chunks(size).map(|chunk| chunk.iter().collect()).collect()
}

/// Split a rune slice into owned chunks of `size` runes.
pub fn split_runes_into_chunks(s: &[char], size: usize) -> Vec<Vec<char>> {
    if size == 0 {
        return Vec::new();
    }

    s.chunks(size).map(<[char]>::to_vec).collect()
}

/// Produce `count` independent copies of a template row.
///
/// Each copy owns its storage, so editing one never shows up in another.
pub fn duplicate_row(row: &[char], count: usize) -> Vec<Vec<char>> {
    (0..count).map(|_| row.to_vec()).collect()
}

/// Concatenate rows, writing `sep` after every row (including the last).
pub fn join_rows(rows: &[Vec<char>], sep: &[char]) -> Vec<char> {
    let total: usize = rows.iter().map(|row| row.len() + sep.len()).sum();
    let mut result = Vec::with_capacity(total);
    for row in rows {
        result.extend_from_slice(row);
        result.extend_from_slice(sep);
    }
    result
}
