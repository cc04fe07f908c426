//! curer.rs - Turns an input string into a [`CuredText`].
//!
//! The curer walks the input one character at a time, lets the
//! [`Translator`] decide what each position cures to, and records a span in
//! the [`OffsetMap`] for every step so matches can be mapped back later.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::cured_text::CuredText;
use crate::errors::UnmaskError;
use crate::offset_map::OffsetMap;
use crate::options::Options;
use crate::text_match::loggable;
use crate::translator::{Translator, LOOKAHEAD};

/// Cures `input` under `options`.
///
/// # Errors
///
/// Returns [`UnmaskError::EmptyInput`] when `input` is empty. Input that
/// cures to nothing is not an error.
pub fn cure(input: &str, options: Options) -> Result<CuredText, UnmaskError> {
    if input.is_empty() {
        return Err(UnmaskError::EmptyInput);
    }

    let (text, offsets) = cure_parts(input, options);
    debug!(
        "Cured {} input bytes into {} bytes over {} spans with {:?}: '{}'",
        input.len(),
        text.len(),
        offsets.spans().len(),
        options,
        loggable(&text)
    );
    Ok(CuredText::from_parts(input.to_owned(), options, text, offsets))
}

/// Cures raw bytes, which must be valid UTF-8.
///
/// # Errors
///
/// Returns [`UnmaskError::EmptyInput`] for an empty slice and
/// [`UnmaskError::MalformedEncoding`] when the bytes are not UTF-8.
pub fn cure_bytes(input: &[u8], options: Options) -> Result<CuredText, UnmaskError> {
    if input.is_empty() {
        return Err(UnmaskError::EmptyInput);
    }
    let text = std::str::from_utf8(input).map_err(|e| {
        UnmaskError::MalformedEncoding(format!("invalid UTF-8 sequence at byte {}", e.valid_up_to()))
    })?;
    cure(text, options)
}

fn cure_parts(input: &str, options: Options) -> (String, OffsetMap) {
    let translator = Translator::new(options);
    let (offsets, chars): (Vec<usize>, Vec<char>) = input.char_indices().unzip();

    let mut text = String::with_capacity(input.len());
    let mut map = OffsetMap::with_capacity(chars.len());
    let mut previous = None;
    let mut idx = 0;

    while idx < chars.len() {
        let window_end = (idx + 1 + LOOKAHEAD).min(chars.len());
        let outcome = translator.translate(chars[idx], &chars[idx + 1..window_end], previous);
        let next = (idx + outcome.consumed.max(1)).min(chars.len());

        let cured_start = text.len();
        outcome.translation.push_into(&mut text);
        if let Some(last) = outcome.translation.last_char() {
            previous = Some(last);
        }

        let original_end = offsets.get(next).copied().unwrap_or(input.len());
        map.push(cured_start..text.len(), offsets[idx]..original_end);
        idx = next;
    }

    (text, map)
}
