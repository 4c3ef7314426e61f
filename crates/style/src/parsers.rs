//! nom parsers for textual style values.
//!
//! - hex colors: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - dash patterns: `3 1`, `3, 1`, or the PDF form `[3 1] 2` with a phase

use crate::error::StyleError;
use crate::stroke::DashPattern;
use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use vellum_types::{rgb8, DeviceRgb};

fn run_parser<'a, O>(
    parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    input: &'a str,
) -> Result<O, StyleError> {
    match all_consuming(parser).parse(input) {
        Ok((_, value)) => Ok(value),
        Err(e) => Err(StyleError::Parse(format!("{e} in {input:?}"))),
    }
}

// --- Hex colors ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |s| u8::from_str_radix(s, 16)).parse(input)
}

/// One digit standing for a doubled pair, so `F` reads as `FF`.
fn hex_single(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |s| {
        u8::from_str_radix(s, 16).map(|v| v * 17)
    })
    .parse(input)
}

fn hex_body(input: &str) -> IResult<&str, DeviceRgb> {
    alt((
        map((hex_pair, hex_pair, hex_pair, hex_pair), |(r, g, b, a)| {
            rgb8(r, g, b, Some(a))
        }),
        map((hex_pair, hex_pair, hex_pair), |(r, g, b)| rgb8(r, g, b, None)),
        map((hex_single, hex_single, hex_single, hex_single), |(r, g, b, a)| {
            rgb8(r, g, b, Some(a))
        }),
        map((hex_single, hex_single, hex_single), |(r, g, b)| {
            rgb8(r, g, b, None)
        }),
    ))
    .parse(input)
}

/// Parses a CSS-style hex color into an RGB color.
///
/// Forms without an alpha field leave the opacity unspecified. The leading `#`
/// is required.
pub fn parse_hex_color(input: &str) -> Result<DeviceRgb, StyleError> {
    let Some(body) = input.strip_prefix('#') else {
        return Err(StyleError::HexFormat {
            input: input.to_string(),
            reason: "missing leading #",
        });
    };
    match all_consuming(hex_body).parse(body) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(StyleError::HexFormat {
            input: input.to_string(),
            reason: "expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA",
        }),
    }
}

// --- Dash patterns ---

/// A comma with optional surrounding whitespace, or plain whitespace. Always
/// consumes input, which `separated_list0` requires.
fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        map((multispace0, char(','), multispace0), |_| ()),
        map(multispace1, |_| ()),
    ))
    .parse(input)
}

fn dash_lengths(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        multispace0,
        separated_list0(separator, double),
        multispace0,
    )
    .parse(input)
}

fn bracketed_dash(input: &str) -> IResult<&str, DashPatternParts> {
    map(
        (
            delimited(char('['), dash_lengths, char(']')),
            opt(preceded(multispace0, double)),
        ),
        |(lengths, phase)| DashPatternParts { lengths, phase },
    )
    .parse(input)
}

fn bare_dash(input: &str) -> IResult<&str, DashPatternParts> {
    map(dash_lengths, |lengths| DashPatternParts {
        lengths,
        phase: None,
    })
    .parse(input)
}

/// The pieces of a textual dash pattern; the phase is only present in the
/// bracketed form.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPatternParts {
    pub lengths: Vec<f64>,
    pub phase: Option<f64>,
}

impl DashPatternParts {
    pub fn into_pattern(self) -> Result<DashPattern, StyleError> {
        DashPattern::new(self.lengths, self.phase.unwrap_or(0.0))
    }
}

/// Parses a dash pattern written as space or comma separated lengths, or in the
/// PDF `[lengths] phase` form.
pub fn parse_dash_pattern(input: &str) -> Result<DashPatternParts, StyleError> {
    run_parser(
        delimited(multispace0, alt((bracketed_dash, bare_dash)), multispace0),
        input,
    )
}
