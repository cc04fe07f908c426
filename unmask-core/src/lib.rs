// unmask-core/src/lib.rs
//! # Unmask Core Library
//!
//! `unmask-core` cures text: it folds confusable, decorated and obfuscated
//! Unicode (fullwidth forms, mathematical alphabets, enclosed letters,
//! look-alikes from other scripts, invisible characters, leetspeak) into a
//! canonical lowercase form that plain string comparison can work with.
//!
//! Every cured text keeps an offset map back to its input, so a match found
//! in the canonical form can be censored or replaced in the original bytes
//! without disturbing anything around it.
//!
//! The library is pure and stateless. It performs no I/O apart from the
//! optional loading of curing profiles.
//!
//! ## Modules
//!
//! * `options`: The `Options` bit set that tunes curing, with stable flag names.
//! * `translation`: The result of curing a single character.
//! * `translator`: Per-character translation, including leetspeak merging.
//! * `curer`: Cures whole strings into a `CuredText`.
//! * `offset_map`: Byte-range mapping between cured text and the original.
//! * `cured_text`: The immutable cured handle.
//! * `matcher`: Finding needles in cured text.
//! * `mutator`: Censoring and replacing matches in the original.
//! * `text_match`: The `Match` type and PII-safe logging helpers.
//! * `config`: Named curing profiles loaded from YAML or JSON.
//! * `headless`: One-shot helpers for callers that only need the output.
//! * `errors`: The `UnmaskError` type and its flat `ErrorReport`.
//!
//! ## Public API
//!
//! **Curing**
//!
//! * [`cure`]: Cures a string into a [`CuredText`].
//! * [`cure_bytes`]: Same, for raw bytes that must be valid UTF-8.
//! * [`cure_char`]: Cures a single character into a [`Translation`].
//!
//! **Matching and Mutating**
//!
//! * [`CuredText::find`] and [`CuredText::find_multiple`]: Locate needles, reported as
//!   [`Match`] ranges of the original input.
//! * [`CuredText::censor`] and [`CuredText::replace`]: Rewrite matched ranges of the original.
//! * [`CuredText::equals`], [`CuredText::starts_with`], [`CuredText::ends_with`],
//!   [`CuredText::contains`]: Comparisons against the canonical form.
//!
//! **Configuration**
//!
//! * [`CureProfile`]: A named preset plus extra flags.
//! * [`ProfileConfig::load_default_profiles`]: The built-in profiles.
//! * [`ProfileConfig::load_from_file`]: Loads profiles from a YAML or JSON file.
//!
//! ## Usage Example
//!
//! ```rust
//! use unmask_core::{cure, Options, UnmaskError};
//!
//! fn main() -> Result<(), UnmaskError> {
//!     let cured = cure("vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣", Options::default())?;
//!     assert_eq!(cured, "very funny text");
//!
//!     let matches = cured.find("funny");
//!     let censored = cured.censor(&matches, '*')?;
//!     assert_eq!(censored, "vＥⓡ𝔂 * ţ乇𝕏𝓣");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return [`UnmaskError`]; every variant can be flattened into an
//! [`ErrorReport`]. Profile loading uses `anyhow::Error` and defines
//! [`ProfileNotFoundError`] for unknown profile names.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod cured_text;
pub mod curer;
pub mod errors;
pub mod headless;
mod leetspeak;
pub mod matcher;
pub mod mutator;
pub mod offset_map;
pub mod options;
mod scripts;
pub mod text_match;
pub mod translation;
pub mod translator;

/// Re-exports the curing entry points.
pub use curer::{cure, cure_bytes};
pub use translator::{cure_char, cure_char_string, Translator};

/// Re-exports the core value types.
pub use cured_text::CuredText;
pub use offset_map::{OffsetMap, Span};
pub use options::Options;
pub use text_match::{redact_sensitive, Match};
pub use translation::Translation;

/// Re-exports the error types.
pub use errors::{ErrorReport, UnmaskError};

/// Re-exports profile configuration.
pub use config::{
    load_profile_by_name,
    merge_profiles,
    CureProfile,
    Preset,
    ProfileConfig,
    ProfileNotFoundError,
    MAX_PROFILE_NAME_LENGTH,
};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{
    headless_censor_string,
    headless_cure_string,
    headless_cure_with_profile,
    headless_replace_string,
};
