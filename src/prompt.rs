// Interactive month/year input.
//
// Both prompts are generic over the reader and writer so the loop can be
// driven from in-memory buffers in tests; `main` passes locked stdin/stdout.
use chrono::Month;
use std::io::{self, BufRead, Write};

use crate::util::capitalize;

const MONTHS: [(&str, Month); 12] = [
    ("jan", Month::January),
    ("feb", Month::February),
    ("mar", Month::March),
    ("apr", Month::April),
    ("may", Month::May),
    ("jun", Month::June),
    ("jul", Month::July),
    ("aug", Month::August),
    ("sep", Month::September),
    ("oct", Month::October),
    ("nov", Month::November),
    ("dec", Month::December),
];

/// A validated month selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthChoice {
    pub abbrev: &'static str,
    pub month: Month,
}

impl MonthChoice {
    /// Two-digit numeric code used in daily file names (`"01"`..`"12"`).
    pub fn code(&self) -> String {
        format!("{:02}", self.month.number_from_month())
    }

    /// Display label such as `Jan`.
    pub fn label(&self) -> String {
        capitalize(self.abbrev)
    }
}

/// Match a month abbreviation, ignoring case and surrounding whitespace.
pub fn parse_month(input: &str) -> Option<MonthChoice> {
    let key = input.trim().to_lowercase();
    MONTHS
        .iter()
        .find(|(abbrev, _)| *abbrev == key)
        .map(|&(abbrev, month)| MonthChoice { abbrev, month })
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a value was entered",
        ));
    }
    Ok(buf.trim().to_string())
}

/// Ask for a month abbreviation until a valid one is entered.
pub fn read_month<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<MonthChoice> {
    loop {
        write!(output, "Enter the month abbreviation (e.g., 'jan' for January): ")?;
        output.flush()?;
        let line = read_line(input)?;
        if let Some(choice) = parse_month(&line) {
            return Ok(choice);
        }
        log::debug!("rejected month input {:?}", line);
        writeln!(output, "Invalid month abbreviation. Please try again.")?;
    }
}

/// Ask for the year once. The answer is not validated: a malformed year just
/// matches no daily files later on.
pub fn read_year<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "Enter the year (YYYY): ")?;
    output.flush()?;
    read_line(input)
}
