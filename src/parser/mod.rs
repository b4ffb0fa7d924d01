pub mod format;
pub mod function;
pub mod hex;
pub mod hsl;
pub mod named;
pub mod rgb;

use tracing::debug;

use crate::error::ContrastError;
use crate::types::ColorSample;
use format::{Attempt, ColorFormat};
use hex::HexFormat;
use hsl::HslFormat;
use named::{Css4Format, NamedFormat};
use rgb::RgbFormat;

/// Strategies in priority order. The first one that does not answer
/// `NoMatch` decides the outcome:
///   1. hex (`#...`)
///   2. `rgb()` / `rgba()`
///   3. `hsl()` / `hsla()`
///   4. named colors, `transparent` included
///   5. remaining CSS Color 4 functions
static FORMATS: [&dyn ColorFormat; 5] = [&HexFormat, &RgbFormat, &HslFormat, &NamedFormat, &Css4Format];

/// Parse any supported CSS color notation into a `ColorSample`.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Computed styles from a browser arrive as `rgb()`/`rgba()`, but nothing here
/// relies on that.
///
/// Fails with `UnparsableColor` (carrying `input` verbatim) when no notation
/// matches or when a recognized notation holds an out-of-range value.
pub fn parse_color(input: &str) -> Result<ColorSample, ContrastError> {
    let normalized = input.trim().to_ascii_lowercase();

    for format in FORMATS.iter() {
        match format.attempt(&normalized) {
            Attempt::NoMatch => continue,
            Attempt::Matched(sample) => return Ok(sample),
            Attempt::Rejected => {
                debug!(input, format = format.name(), "color value rejected");
                return Err(ContrastError::unparsable(input));
            }
        }
    }

    debug!(input, "no color format matched");
    Err(ContrastError::unparsable(input))
}
