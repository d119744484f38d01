//! Terminal text measurement.
//!
//! [`TextProbe`] lets a terminal host measure plain-text spoiler content
//! without a full layout pass: the natural height of a block is its number
//! of word-wrapped lines.

use std::collections::HashMap;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::measure::{LayoutProbe, MeasureTarget};

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Word-wrap `s` into lines no wider than `max_width` columns.
///
/// Explicit newlines are kept, blank lines included. Words wider than a
/// whole line are broken at character boundaries. Empty input yields one
/// empty line; a zero width yields none.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word_width = display_width(word);
            let mut word = word.to_string();

            if word_width > max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut pieces = break_word(&word, max_width);
                // The tail keeps filling the current line.
                word = pieces.pop().unwrap_or_default();
                word_width = display_width(&word);
                lines.extend(pieces);
                line_width = 0;
            }

            let sep = usize::from(!line.is_empty());
            if !line.is_empty() && line_width + sep + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            } else if sep == 1 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(&word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

fn break_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = vec![String::new()];
    let mut width = 0;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width && width > 0 {
            pieces.push(String::new());
            width = 0;
        }
        if let Some(piece) = pieces.last_mut() {
            piece.push(ch);
        }
        width += ch_width;
    }

    pieces
}

/// Plain-text blocks laid out at a fixed column width.
#[derive(Debug, Default)]
pub struct TextProbe {
    blocks: HashMap<String, (String, u16)>,
}

impl TextProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `text`, laid out `width` columns wide, to `target`.
    pub fn insert(&mut self, target: &MeasureTarget, text: impl Into<String>, width: u16) {
        self.blocks
            .insert(target.id().to_string(), (text.into(), width));
    }

    pub fn remove(&mut self, target: &MeasureTarget) {
        self.blocks.remove(target.id());
    }

    /// Wrapped lines of the block attached to `target`.
    pub fn lines(&self, target: &MeasureTarget) -> Vec<String> {
        self.blocks
            .get(target.id())
            .map(|(text, width)| wrap_words(text, usize::from(*width)))
            .unwrap_or_default()
    }
}

impl LayoutProbe for TextProbe {
    /// A zero-width block has not been laid out yet.
    fn natural_height(&self, target: &MeasureTarget) -> Option<f32> {
        let (text, width) = self.blocks.get(target.id())?;
        if *width == 0 {
            return None;
        }
        Some(wrap_words(text, usize::from(*width)).len() as f32)
    }
}
