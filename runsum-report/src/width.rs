use unicode_normalization::UnicodeNormalization;

const ESC: char = '\u{1b}';

/// Number of terminal columns a string occupies: the input is NFKC-normalized
/// (composed and decomposed forms measure the same) and embedded escape
/// sequences contribute nothing. Every other character counts one column;
/// double-width CJK forms are out of scope.
///
/// Escape recognition: ESC `[` opens a CSI sequence that runs until a byte in
/// 0x40–0x7E (the terminator is consumed too); ESC followed directly by a
/// byte in 0x40–0x5F is a two-character sequence.
pub fn display_width(s: &str) -> usize {
    let mut in_escape = false;
    let mut in_csi = false;
    let mut width = 0usize;

    for ch in s.nfkc() {
        if ch == ESC {
            in_escape = true;
            continue;
        }
        if in_escape && ch == '[' {
            in_csi = true;
            continue;
        }
        if in_escape && in_csi && matches!(ch as u32, 0x40..=0x7e) {
            in_escape = false;
            in_csi = false;
            continue;
        }
        if in_escape && !in_csi && matches!(ch as u32, 0x40..=0x5f) {
            in_escape = false;
            continue;
        }
        if !in_escape && !in_csi {
            width += 1;
        }
    }

    width
}
