//! Strided views over normalized text

use std::ops::Index;

use vigenere::NormalizedText;

use crate::error::{AnalysisError, Result};

/// Every `stride`-th symbol of a text, starting at `offset`.
///
/// A `Serie` borrows the text and never copies it: element `i` is
/// `text[offset + i * stride]`. With `stride` set to a key length and
/// `offset` to a key position, the view holds exactly the symbols that were
/// shifted by that key character.
#[derive(Debug, Clone, Copy)]
pub struct Serie<'a> {
    text: &'a [u8],
    stride: usize,
    offset: usize,
}

impl<'a> Serie<'a> {
    /// Creates a view. Requires `stride >= 1` and `offset < stride`.
    pub fn new(text: &'a NormalizedText, stride: usize, offset: usize) -> Result<Self> {
        if stride == 0 {
            return Err(AnalysisError::InvalidParameter(
                "stride must be at least 1".to_string(),
            ));
        }
        if offset >= stride {
            return Err(AnalysisError::InvalidParameter(format!(
                "offset {offset} must be smaller than stride {stride}"
            )));
        }
        Ok(Self {
            text: text.as_slice(),
            stride,
            offset,
        })
    }

    /// All `stride` views of `text`, one per offset.
    pub fn columns(
        text: &'a NormalizedText,
        stride: usize,
    ) -> impl Iterator<Item = Result<Serie<'a>>> + 'a {
        (0..stride).map(move |offset| Serie::new(text, stride, offset))
    }

    /// `ceil((len(text) - offset) / stride)`, or 0 when the offset is past the end.
    pub fn len(&self) -> usize {
        self.text
            .len()
            .saturating_sub(self.offset)
            .div_ceil(self.stride)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between consecutive symbols of the view.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Position in the text of the first symbol.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Symbol `i` of the view, or `None` past its end.
    ///
    /// # Arguments
    ///
    /// * `i` - Position within the view, not within the text
    pub fn get(&self, i: usize) -> Option<u8> {
        if i < self.len() {
            Some(self.text[self.offset + i * self.stride])
        } else {
            None
        }
    }

    /// Symbols of the view in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        self.text
            .iter()
            .skip(self.offset)
            .step_by(self.stride)
            .copied()
    }
}

impl Index<usize> for Serie<'_> {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        let len = self.len();
        assert!(i < len, "index {i} out of bounds for serie of length {len}");
        &self.text[self.offset + i * self.stride]
    }
}
