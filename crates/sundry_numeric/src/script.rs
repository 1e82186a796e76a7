//! Superscript and subscript numerals.
//!
//! Unicode has superscript and subscript forms for the ten digits and the
//! plus and minus signs, but no decimal separator. Rendering therefore stops
//! at the first `.` or `,` and silently drops any other character.

use std::fmt;

use sundry_foundation::{Error, ErrorContext, Result};

const SUPERSCRIPT_DIGITS: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}',
];

const SUBSCRIPT_DIGITS: [char; 10] = [
    '\u{2080}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2084}', '\u{2085}', '\u{2086}', '\u{2087}',
    '\u{2088}', '\u{2089}',
];

const SUPERSCRIPT_PLUS: char = '\u{207A}';
const SUPERSCRIPT_MINUS: char = '\u{207B}';
const SUBSCRIPT_PLUS: char = '\u{208A}';
const SUBSCRIPT_MINUS: char = '\u{208B}';
const MINUS_SIGN: char = '\u{2212}';

/// Vertical placement used when rendering a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptStyle {
    /// Raised glyphs, e.g. `x²`.
    Superscript,
    /// Lowered glyphs, e.g. `H₂O`.
    Subscript,
}

impl ScriptStyle {
    fn digits(self) -> &'static [char; 10] {
        match self {
            Self::Superscript => &SUPERSCRIPT_DIGITS,
            Self::Subscript => &SUBSCRIPT_DIGITS,
        }
    }

    fn plus(self) -> char {
        match self {
            Self::Superscript => SUPERSCRIPT_PLUS,
            Self::Subscript => SUBSCRIPT_PLUS,
        }
    }

    fn minus(self) -> char {
        match self {
            Self::Superscript => SUPERSCRIPT_MINUS,
            Self::Subscript => SUBSCRIPT_MINUS,
        }
    }
}

/// The glyph family a digit character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitFamily {
    /// ASCII `0`–`9`.
    Plain,
    /// `₀`–`₉`.
    Subscript,
    /// `⁰`–`⁹`.
    Superscript,
}

/// A classified digit character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptDigit {
    /// Numeric value, `0..=9`.
    pub value: u8,
    /// Which glyph family the character came from.
    pub family: DigitFamily,
}

/// Classifies `c` as a plain, subscript or superscript decimal digit.
///
/// # Examples
///
/// ```
/// use sundry_numeric::script::{parse_digit, DigitFamily};
///
/// let digit = parse_digit('²').unwrap();
/// assert_eq!(digit.value, 2);
/// assert_eq!(digit.family, DigitFamily::Superscript);
/// assert!(parse_digit('x').is_none());
/// ```
#[must_use]
pub fn parse_digit(c: char) -> Option<ScriptDigit> {
    if let Some(value) = c.to_digit(10) {
        return Some(ScriptDigit {
            value: digit_value(value),
            family: DigitFamily::Plain,
        });
    }
    if let Some(position) = SUBSCRIPT_DIGITS.iter().position(|&g| g == c) {
        return Some(ScriptDigit {
            value: position_value(position),
            family: DigitFamily::Subscript,
        });
    }
    SUPERSCRIPT_DIGITS
        .iter()
        .position(|&g| g == c)
        .map(|position| ScriptDigit {
            value: position_value(position),
            family: DigitFamily::Superscript,
        })
}

#[allow(clippy::cast_possible_truncation)]
fn digit_value(value: u32) -> u8 {
    // to_digit(10) yields 0..=9.
    value as u8
}

#[allow(clippy::cast_possible_truncation)]
fn position_value(position: usize) -> u8 {
    // Positions index a ten-element table.
    position as u8
}

/// Renders the `Display` form of `value` in the given style.
///
/// Digits and signs are mapped; everything from the first decimal separator
/// on is dropped, as is any other unmappable character. If nothing survives,
/// the plain rendering is returned unchanged.
#[must_use]
pub fn render(value: impl fmt::Display, style: ScriptStyle) -> String {
    let text = value.to_string();
    let digits = style.digits();
    let mut out = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match c {
            '.' | ',' => break,
            '0'..='9' => out.push(digits[(c as usize) - ('0' as usize)]),
            '+' => out.push(style.plus()),
            '-' | MINUS_SIGN => out.push(style.minus()),
            _ => {}
        }
    }

    if out.is_empty() { text } else { out }
}

/// Renders `value` with superscript glyphs.
///
/// # Examples
///
/// ```
/// use sundry_numeric::script::to_superscript;
///
/// assert_eq!(to_superscript(-5), "⁻⁵");
/// assert_eq!(to_superscript(2.75), "²");
/// ```
#[must_use]
pub fn to_superscript(value: impl fmt::Display) -> String {
    render(value, ScriptStyle::Superscript)
}

/// Renders `value` with subscript glyphs.
///
/// # Examples
///
/// ```
/// use sundry_numeric::script::to_subscript;
///
/// assert_eq!(to_subscript(123), "₁₂₃");
/// ```
#[must_use]
pub fn to_subscript(value: impl fmt::Display) -> String {
    render(value, ScriptStyle::Subscript)
}

/// Renders already-formatted numeric text with superscript glyphs.
///
/// Useful when the caller controls formatting, e.g. `format!("{x:+}")`.
#[must_use]
pub fn str_to_superscript(text: &str) -> String {
    render(text, ScriptStyle::Superscript)
}

/// Renders already-formatted numeric text with subscript glyphs.
#[must_use]
pub fn str_to_subscript(text: &str) -> String {
    render(text, ScriptStyle::Subscript)
}

/// Parses an integer written in any mix of plain, superscript and
/// subscript digits, with an optional leading sign in any of the three
/// forms.
///
/// # Errors
///
/// Returns `InvalidArgument` for empty input, a sign with no digits, or an
/// unexpected character, and `ArithmeticOverflow` if the value does not fit
/// in an `i64`.
pub fn parse_script_number(text: &str) -> Result<i64> {
    let context = || ErrorContext::new().with_operation("parse_script_number");
    let mut chars = text.chars().peekable();

    let negative = match chars.peek() {
        None => {
            return Err(Error::invalid_argument("text", "empty numeral").with_context(context()));
        }
        Some(&('-' | MINUS_SIGN | SUPERSCRIPT_MINUS | SUBSCRIPT_MINUS)) => {
            chars.next();
            true
        }
        Some(&('+' | SUPERSCRIPT_PLUS | SUBSCRIPT_PLUS)) => {
            chars.next();
            false
        }
        Some(_) => false,
    };

    let mut total: i64 = 0;
    let mut seen_digit = false;
    for (position, c) in chars.enumerate() {
        let Some(digit) = parse_digit(c) else {
            return Err(Error::invalid_argument(
                "text",
                format!("unexpected character {c:?} in numeral {text:?} at offset {position}"),
            )
            .with_context(context()));
        };
        seen_digit = true;
        // Accumulate toward the sign so that i64::MIN is reachable.
        let step = i64::from(digit.value);
        total = total
            .checked_mul(10)
            .and_then(|t| if negative { t.checked_sub(step) } else { t.checked_add(step) })
            .ok_or_else(|| Error::arithmetic_overflow("script numeral").with_context(context()))?;
    }

    if !seen_digit {
        return Err(Error::invalid_argument("text", "numeral has no digits").with_context(context()));
    }
    Ok(total)
}
