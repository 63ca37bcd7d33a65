//! Session input parser.
//!
//! # Supported syntax
//!
//! ```text
//! # comment line
//! key = value             (edit an input)
//! toggle scalars          (flip a visibility switch)
//! reset | show | save | help | quit | exit
//! ```
//!
//! Value forms, chosen per key by the applet:
//!
//! ```text
//! 4, 7, 2   [4 7 2]   4 7,2     numeric sequence
//! -3                            integer
//! 220  1k  4.7  2.2MEG          value with optional engineering suffix
//! 3, -2   (3 -2)   [3, -2]      2-D vector
//! ```
//!
//! Engineering suffixes follow SPICE: T, G, MEG, K, M (milli), U, N, P, F
//! (case-insensitive).

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till1, take_while, take_while1};
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{map, opt, recognize, rest};
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::{delimited, preceded, separated_pair};
use nom::IResult;
use nom::Parser;

use crate::error::{OhmlabError, Result};
use crate::ir::Command;
use crate::vector::Vec2;

/// Parse one line of session input. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let keyword = line.to_ascii_lowercase();
    let cmd = match keyword.as_str() {
        "reset" => Command::Reset,
        "show" => Command::Show,
        "save" => Command::Save,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            if let Ok((_, what)) = toggle_command(line) {
                Command::Toggle(what.trim().to_string())
            } else {
                let (_, (key, value)) = set_command(line).map_err(|_| {
                    OhmlabError::Parse(format!("expected 'key = value' or a command, got: {}", line))
                })?;
                let key = key.trim();
                if key.is_empty() {
                    return Err(OhmlabError::Parse(format!("missing key in: {}", line)));
                }
                Command::Set {
                    key: key.to_string(),
                    value: value.trim().to_string(),
                }
            }
        }
    };
    Ok(Some(cmd))
}

fn toggle_command(input: &str) -> IResult<&str, &str> {
    preceded((tag_no_case("toggle"), char(' '), space0), rest).parse(input)
}

fn set_command(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till1(|c| c == '='), char('='), rest).parse(input)
}

// ---------------------------------------------------------------------------
// Engineering suffix value parser
// ---------------------------------------------------------------------------

/// Parse a numeric value with optional engineering suffix.
/// Handles: 10k, 100n, 4.7u, 1MEG, 1e3, -3.3, etc.
fn eng_value(input: &str) -> IResult<&str, f64> {
    let (rest, num) = double(input)?;
    let (rest, suffix) = opt(eng_suffix).parse(rest)?;
    let multiplier = suffix.unwrap_or(1.0);
    Ok((rest, num * multiplier))
}

/// Match an engineering suffix and return its multiplier.
fn eng_suffix(input: &str) -> IResult<&str, f64> {
    // Order matters: MEG must come before M
    alt((
        map(tag_no_case("MEG"), |_: &str| 1e6),
        map(tag_no_case("T"), |_: &str| 1e12),
        map(tag_no_case("G"), |_: &str| 1e9),
        map(tag_no_case("K"), |_: &str| 1e3),
        map(tag_no_case("M"), |_: &str| 1e-3),
        map(tag_no_case("U"), |_: &str| 1e-6),
        map(tag_no_case("N"), |_: &str| 1e-9),
        map(tag_no_case("P"), |_: &str| 1e-12),
        map(tag_no_case("F"), |_: &str| 1e-15),
    ))
    .parse(input)
}

// ---------------------------------------------------------------------------
// Token parsers
// ---------------------------------------------------------------------------

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Optional leading/trailing separators.
fn separators(input: &str) -> IResult<&str, &str> {
    take_while(is_separator)(input)
}

/// At least one comma or blank; `4.7.2` and `1-2` are not two numbers.
fn separator(input: &str) -> IResult<&str, &str> {
    take_while1(is_separator)(input)
}

/// Separated elements of a sequence.
fn elements(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(separators, separated_list0(separator, double), separators).parse(input)
}

/// A sequence with optional enclosing brackets or parentheses.
fn bracketed_elements(input: &str) -> IResult<&str, Vec<f64>> {
    alt((
        delimited(char('['), elements, char(']')),
        delimited(char('('), elements, char(')')),
        elements,
    ))
    .parse(input)
}

fn signed_integer(input: &str) -> IResult<&str, &str> {
    recognize((opt(alt((char('-'), char('+')))), digit1)).parse(input)
}

fn ensure_consumed(rest: &str, text: &str) -> Result<()> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(OhmlabError::Parse(format!(
            "unexpected '{}' in: {}",
            rest.trim(),
            text
        )))
    }
}

fn ensure_finite(value: f64, text: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OhmlabError::Parse(format!("not a finite number: {}", text)))
    }
}

// ---------------------------------------------------------------------------
// Value parsers
// ---------------------------------------------------------------------------

/// Parse a numeric sequence such as `4, 7, 2` or `[4 7 2]`.
///
/// Every token must be a finite number and at least one is required; on any
/// failure nothing is returned.
pub fn parse_sequence(text: &str) -> Result<Vec<f64>> {
    let trimmed = text.trim();
    let (rest, values) = bracketed_elements(trimmed)
        .map_err(|_| OhmlabError::Parse(format!("malformed sequence: {}", text)))?;
    ensure_consumed(rest, text)?;
    if values.is_empty() {
        return Err(OhmlabError::Parse(format!(
            "sequence needs at least one number: '{}'",
            text
        )));
    }
    for &v in &values {
        ensure_finite(v, text)?;
    }
    Ok(values)
}

/// Parse a plain real number (no suffix).
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let (rest, value) =
        double(trimmed).map_err(|_: nom::Err<nom::error::Error<&str>>| {
            OhmlabError::Parse(format!("not a number: '{}'", text))
        })?;
    ensure_consumed(rest, text)?;
    ensure_finite(value, text)
}

/// Parse a real number with an optional engineering suffix (`1k`, `4.7`, `2.2MEG`).
pub fn parse_value(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let (rest, value) = eng_value(trimmed)
        .map_err(|_| OhmlabError::Parse(format!("not a number: '{}'", text)))?;
    ensure_consumed(rest, text)?;
    ensure_finite(value, text)
}

/// Parse a signed integer.
pub fn parse_integer(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let (rest, digits) = signed_integer(trimmed)
        .map_err(|_| OhmlabError::Parse(format!("not an integer: '{}'", text)))?;
    ensure_consumed(rest, text)?;
    digits
        .parse::<i64>()
        .map_err(|e| OhmlabError::Parse(format!("not an integer: '{}' ({})", text, e)))
}

/// Parse exactly two numbers as a 2-D vector: `3, -2`, `(3 -2)`, `[3, -2]`.
pub fn parse_vec2(text: &str) -> Result<Vec2> {
    let values = parse_sequence(text)?;
    match values.as_slice() {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _ => Err(OhmlabError::Parse(format!(
            "expected two components (x, y), got {}: '{}'",
            values.len(),
            text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Engineering suffix tests ----

    #[test]
    fn test_eng_value_plain_number() {
        let (rest, val) = eng_value("100").unwrap();
        assert_eq!(rest, "");
        assert!((val - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_eng_value_kilo() {
        let (_, val) = eng_value("10k").unwrap();
        assert!((val - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_eng_value_meg_before_milli() {
        let (_, val) = eng_value("2.2MEG").unwrap();
        assert!((val - 2.2e6).abs() < 1e-6);
        let (_, val) = eng_value("5m").unwrap();
        assert!((val - 5e-3).abs() < 1e-15);
    }

    #[test]
    fn test_parse_value_rejects_trailing_garbage() {
        assert!(parse_value("12 volts").is_err());
        assert!(parse_value("abc").is_err());
    }

    // ---- Sequence tests ----

    #[test]
    fn test_sequence_forms() {
        let expected = vec![4.0, 7.0, 2.0];
        assert_eq!(parse_sequence("4, 7, 2").unwrap(), expected);
        assert_eq!(parse_sequence("[4 7 2]").unwrap(), expected);
        assert_eq!(parse_sequence("  4,7 ,2 ").unwrap(), expected);
        assert_eq!(parse_sequence("[4, 7, 2,]").unwrap(), expected);
        assert_eq!(parse_sequence("(4 7 2)").unwrap(), expected);
    }

    #[test]
    fn test_sequence_decimals_and_signs() {
        assert_eq!(
            parse_sequence("-1.5, 0, 2e1").unwrap(),
            vec![-1.5, 0.0, 20.0]
        );
    }

    #[test]
    fn test_sequence_rejects_tokens() {
        assert!(parse_sequence("4, seven, 2").is_err());
        assert!(parse_sequence("[4 7 2").is_err());
        assert!(parse_sequence("").is_err());
        assert!(parse_sequence("[]").is_err());
    }

    #[test]
    fn test_sequence_requires_separators() {
        assert!(parse_sequence("4.7.2").is_err());
        assert!(parse_sequence("1-2-3").is_err());
        assert!(parse_sequence("3+4").is_err());
        assert!(parse_sequence("[1 2-3]").is_err());
        assert_eq!(parse_sequence("1 -2 +3").unwrap(), vec![1.0, -2.0, 3.0]);
        assert_eq!(parse_sequence("1,,2").unwrap(), vec![1.0, 2.0]);
    }

    // ---- Other values ----

    #[test]
    fn test_integer() {
        assert_eq!(parse_integer("0").unwrap(), 0);
        assert_eq!(parse_integer(" -3 ").unwrap(), -3);
        assert!(parse_integer("1.5").is_err());
        assert!(parse_integer("x").is_err());
    }

    #[test]
    fn test_vec2() {
        assert_eq!(parse_vec2("3, -2").unwrap(), Vec2::new(3.0, -2.0));
        assert_eq!(parse_vec2("(1.5 2.5)").unwrap(), Vec2::new(1.5, 2.5));
        assert!(parse_vec2("1, 2, 3").is_err());
        assert!(parse_vec2("3-2").is_err());
        assert!(parse_vec2("1.2.3").is_err());
    }

    // ---- Commands ----

    #[test]
    fn test_set_command() {
        let cmd = parse_command("Electric Field E = 3, -2").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                key: "Electric Field E".to_string(),
                value: "3, -2".to_string()
            }
        );
    }

    #[test]
    fn test_keywords_and_comments() {
        assert_eq!(parse_command("  SAVE ").unwrap(), Some(Command::Save));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("# note").unwrap(), None);
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(
            parse_command("toggle scalars").unwrap(),
            Some(Command::Toggle("scalars".to_string()))
        );
    }

    #[test]
    fn test_bad_command() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("= 5").is_err());
    }
}
