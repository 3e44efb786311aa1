//! # Right-to-Left Text
//!
//! Verse text is Arabic. Terminals fall into two camps:
//!
//! - **bidi-aware** (most GUI terminals): pass logical-order text through and
//!   right-align it; the terminal reorders each line.
//! - **bidi-unaware**: characters are painted left to right as stored, so each
//!   line has to be reversed before drawing (`reorder_rtl = true`).
//!
//! Reversal works on clusters, not chars: harakat and other combining marks
//! are zero-width and must stay attached to the letter they decorate.
//! Wrapping always happens in logical order first so line breaks fall at the
//! same words in both modes.

use unicode_width::UnicodeWidthChar;

/// Whether `c` belongs to a right-to-left script block (Hebrew, Arabic and
/// their presentation forms).
pub fn is_rtl_char(c: char) -> bool {
    matches!(
        c as u32,
        0x0590..=0x05FF
            | 0x0600..=0x06FF
            | 0x0700..=0x074F
            | 0x0750..=0x077F
            | 0x08A0..=0x08FF
            | 0xFB1D..=0xFB4F
            | 0xFB50..=0xFDFF
            | 0xFE70..=0xFEFF
    )
}

pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

/// Reverses the visual order of a single line, keeping zero-width marks
/// attached to their base character. Lines without RTL characters are
/// returned unchanged.
pub fn reorder_clusters(line: &str) -> String {
    if !contains_rtl(line) {
        return line.to_string();
    }

    let mut clusters: Vec<String> = Vec::new();
    for c in line.chars() {
        let zero_width = c.width() == Some(0);
        match clusters.last_mut() {
            Some(current) if zero_width => current.push(c),
            _ => clusters.push(c.to_string()),
        }
    }

    clusters.into_iter().rev().collect()
}

/// Wraps `text` to `width` display columns and prepares each line for
/// drawing. With `reorder` set, every line is visually reversed.
pub fn wrap_rtl(text: &str, width: u16, reorder: bool) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let options = textwrap::Options::new(width as usize).break_words(true);

    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| {
            if reorder {
                reorder_clusters(&line)
            } else {
                line.into_owned()
            }
        })
        .collect()
}
