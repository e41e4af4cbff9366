//! Line Converter: rewrites 8-bit binary literals as 2-digit hex literals
//!
//! Each line is handled on its own. The first `0b` literal with exactly eight
//! binary digits is located, its value is rendered as `0x` followed by two
//! lowercase hex digits, and the replacement is spliced in at the located
//! span. Everything else on the line, including the line terminator, is left
//! byte-for-byte intact. Lines without a literal pass through untouched.

use crate::errors::ConvertError;
use regex::Regex;
use std::fmt;

/// Leftmost `0b` literal with exactly eight binary digits; the `b` is matched
/// case-insensitively.
const BINARY_LITERAL_PATTERN: &str = r"(?i)0b([01]{8})";

/// A single byte rendered as a hex literal (`0x00` through `0xff`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexByte(pub u8);

impl HexByte {
    pub fn value(self) -> u8 {
        self.0
    }

    /// The two lowercase hex digits without the `0x` prefix.
    pub fn digits(self) -> String {
        let mut digits = format!("{:x}", self.0);
        if digits.len() == 1 {
            digits.insert(0, '0');
        }
        digits
    }
}

impl fmt::Display for HexByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.digits())
    }
}

/// Parses exactly eight binary digits (no `0b` prefix) into a [`HexByte`].
pub fn binary_to_hex(digits: &str) -> Result<HexByte, ConvertError> {
    if digits.len() != 8 || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(ConvertError::InvalidLiteral(digits.to_string()));
    }
    u8::from_str_radix(digits, 2)
        .map(HexByte)
        .map_err(|_| ConvertError::InvalidLiteral(digits.to_string()))
}

pub struct LineConverter {
    pattern: Regex,
}

impl LineConverter {
    pub fn new() -> Result<Self, ConvertError> {
        Ok(Self {
            pattern: Regex::new(BINARY_LITERAL_PATTERN)?,
        })
    }

    /// Converts the first binary literal on `line`, or returns `None` when the
    /// line has none.
    pub fn convert_line(&self, line: &str) -> Option<String> {
        let captures = self.pattern.captures(line)?;
        let literal = captures.get(0)?;
        let digits = captures.get(1)?;
        // The pattern guarantees eight binary digits, so this cannot fail.
        let hex = binary_to_hex(digits.as_str()).ok()?;

        let mut converted = String::with_capacity(line.len());
        converted.push_str(&line[..literal.start()]);
        converted.push_str(&hex.to_string());
        converted.push_str(&line[literal.end()..]);
        Some(converted)
    }

    /// Converts every line, handing each converted line to `on_converted` in
    /// input order. Unmatched lines are copied through without notification.
    pub fn convert_with<S, F>(&self, lines: &[S], mut on_converted: F) -> Vec<String>
    where
        S: AsRef<str>,
        F: FnMut(&str),
    {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.as_ref();
                match self.convert_line(line) {
                    Some(converted) => {
                        log::debug!("Converted binary literal on line {}", index + 1);
                        on_converted(&converted);
                        converted
                    }
                    None => line.to_string(),
                }
            })
            .collect()
    }

    /// Converts every line and echoes the converted ones to stdout.
    pub fn convert<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        self.convert_with(lines, echo_line)
    }
}

/// Prints `line` to stdout, adding a newline only when it has none.
pub fn echo_line(line: &str) {
    if line.ends_with('\n') {
        print!("{}", line);
    } else {
        println!("{}", line);
    }
}
