//! Interactive entry of the language, degree and coefficients.
//!
//! Every prompt loops until it gets valid input, so a typo never aborts the
//! session. Reading and writing go through generic handles so the whole flow
//! runs against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::locale::{self, Locale, Message};

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Err(io::Error::new(
      io::ErrorKind::UnexpectedEof,
      "input closed before a value was entered",
    ));
  }
  Ok(line.trim().to_string())
}

/// Ask which language to use until the answer is `1` or `2`.
pub fn select_locale<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
) -> io::Result<Locale> {
  loop {
    let menu = locale::text(Locale::English, Message::SelectLanguage);
    writeln!(output, "{menu}")?;
    output.flush()?;
    let line = read_line(input)?;
    match Locale::from_menu_choice(&line) {
      Some(locale) => return Ok(locale),
      None => debug!(input = %line, "unknown language choice"),
    }
  }
}

/// Ask for the polynomial degree until a non-negative integer is entered.
pub fn read_degree<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
  locale: Locale,
) -> io::Result<usize> {
  loop {
    write!(output, "\n{}", locale::text(locale, Message::DegreePrompt))?;
    output.flush()?;
    let line = read_line(input)?;
    match line.parse::<i64>() {
      Ok(degree) if degree < 0 => {
        let msg = locale::text(locale, Message::DegreeMustBePositive);
        writeln!(output, "{msg}")?;
      }
      Ok(degree) => return Ok(degree as usize),
      Err(_) => {
        debug!(input = %line, "rejected degree");
        writeln!(output, "{}", locale::text(locale, Message::EnterInteger))?;
      }
    }
  }
}

/// Ask for `degree + 1` integer coefficients, highest degree first.
pub fn read_coefficients<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
  locale: Locale,
  degree: usize,
) -> io::Result<Vec<i64>> {
  let intro = locale::text(locale, Message::EnterCoefficients);
  writeln!(output, "\n{intro}")?;
  let mut coeffs = Vec::new();
  for i in 0..=degree {
    loop {
      write!(output, "{}", locale::coefficient_prompt(i + 1, degree - i))?;
      output.flush()?;
      let line = read_line(input)?;
      match line.parse::<i64>() {
        Ok(c) => {
          coeffs.push(c);
          break;
        }
        Err(_) => {
          debug!(input = %line, index = i + 1, "rejected coefficient");
          writeln!(output, "{}", locale::text(locale, Message::EnterInteger))?;
        }
      }
    }
  }
  Ok(coeffs)
}

/// Full entry flow: degree, then coefficients, then an echo of what was read.
pub fn read_polynomial<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
  locale: Locale,
) -> io::Result<Vec<i64>> {
  let degree = read_degree(input, output, locale)?;
  let coeffs = read_coefficients(input, output, locale, degree)?;
  writeln!(
    output,
    "{} {:?}",
    locale::text(locale, Message::CoefficientsEcho),
    coeffs
  )?;
  Ok(coeffs)
}
