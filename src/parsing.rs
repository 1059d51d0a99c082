use crate::{names::exponent_for_name, HugeNum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// An error that can occur when parsing a [`HugeNum`].
pub enum FromStrError {
    /// Encountered malformed input. Holds the index of where the parsing failed.
    MalformedInput(usize),
    /// The magnitude name isn't in the table. Holds the index where the name starts.
    UnknownMagnitude(usize),
    /// The number is too large to represent. Holds the index of the `e` exponent,
    /// or of the end of the mantissa when there is none.
    ExponentOverflow(usize),
}

#[derive(Copy, Clone)]
pub struct ParseHead<'s> {
    input: &'s str,
    index: usize,
}

impl<'s> ParseHead<'s> {
    pub fn new(input: &'s str) -> Self {
        Self { input, index: 0 }
    }

    fn advance(&mut self, len: usize) -> &'s str {
        let (head, rest) = self.input.split_at(len);
        self.input = rest;
        self.index += len;
        head
    }

    fn chomp(&mut self, pattern: &str) -> Result<(), FromStrError> {
        if !self.input.starts_with(pattern) {
            return Err(FromStrError::MalformedInput(self.index));
        }
        self.advance(pattern.len());
        Ok(())
    }

    /// Consumes one or more ASCII digits.
    fn digits(&mut self) -> Result<&'s str, FromStrError> {
        let len = self.input
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if len == 0 {
            return Err(FromStrError::MalformedInput(self.index));
        }
        Ok(self.advance(len))
    }

    fn assert_empty(&self) -> Result<(), FromStrError> {
        self.input
            .is_empty()
            .then_some(())
            .ok_or(FromStrError::MalformedInput(self.index))
    }
}

impl<'s> core::ops::Deref for ParseHead<'s> {
    type Target = &'s str;

    fn deref(&self) -> &Self::Target {
        &self.input
    }
}

// Parsing rules:
// <root> ::= <sign>? <dec> <exp>? (" " <name>)?
// <sign> ::= "+" | "-"
// <dec> ::= DIGIT+ ("." DIGIT+)?
// <exp> ::= ("e" | "E") <sign>? DIGIT+
// <name> ::= any non-empty entry of the magnitude table

pub fn parse_hugenum(input: &mut ParseHead<'_>) -> Result<HugeNum, FromStrError> {
    let is_negative = parse_sign(input);
    let mantissa = parse_decimal(input)?;
    let exp_idx = input.index;
    let mut exponent = parse_exponent(input)?;

    if input.chomp(" ").is_ok() {
        exponent = exponent.saturating_add(parse_name(input)?.into());
    }
    input.assert_empty()?;

    let mut res = HugeNum::checked_settle(mantissa, exponent)
        .ok_or(FromStrError::ExponentOverflow(exp_idx))?;
    if is_negative {
        res.negate();
    }
    Ok(res)
}

fn parse_sign(input: &mut ParseHead<'_>) -> bool {
    if input.chomp("-").is_ok() {
        return true;
    }
    let _ = input.chomp("+");
    false
}

fn parse_decimal(input: &mut ParseHead<'_>) -> Result<f64, FromStrError> {
    let start = **input;
    let idx = input.index;
    input.digits()?;
    if input.chomp(".").is_ok() {
        input.digits()?;
    }
    start[..input.index - idx]
        .parse()
        .ok()
        .filter(|mantissa: &f64| mantissa.is_finite())
        .ok_or(FromStrError::MalformedInput(idx))
}

/// Parses the optional `e` exponent, sign included, as a single signed number.
fn parse_exponent(input: &mut ParseHead<'_>) -> Result<i64, FromStrError> {
    let idx = input.index;
    if input.chomp("e").is_err() && input.chomp("E").is_err() {
        return Ok(0);
    }
    let start = **input;
    let begin = input.index;
    parse_sign(input);
    input.digits()?;
    start[..input.index - begin]
        .parse()
        .map_err(|_| FromStrError::ExponentOverflow(idx))
}

fn parse_name(input: &mut ParseHead<'_>) -> Result<i32, FromStrError> {
    let idx = input.index;
    let len = input
        .bytes()
        .take_while(u8::is_ascii_lowercase)
        .count();
    if len == 0 {
        return Err(FromStrError::MalformedInput(idx));
    }
    let name = input.advance(len);
    exponent_for_name(name).ok_or(FromStrError::UnknownMagnitude(idx))
}
