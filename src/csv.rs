use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::{Amount, ChequeText, ConvertError};

/// Errors that can occur when parsing raw amount text
#[derive(Debug, Error, PartialEq)]
pub enum ParseAmountError {
    #[error("not a number")]
    NotANumber,

    #[error(transparent)]
    Rejected(#[from] ConvertError),
}

/// Errors that can occur when parsing csv rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: invalid amount '{raw}': {source}")]
    InvalidAmount {
        line: usize,
        raw: String,
        source: ParseAmountError,
    },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    amount: String,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    amount: String,
    traditional_chinese: String,
    simplified_chinese: String,
    english: String,
    english_gbp: String,
}

/// Parse raw user text into a validated amount.
///
/// Strips thousands separators before parsing; the range check happens in
/// [`Amount::from_f64`] regardless of what the caller already validated.
pub fn parse_amount(raw: &str) -> Result<Amount, ParseAmountError> {
    let cleaned = raw.trim().replace(',', "");
    let value: f64 = cleaned
        .parse()
        .map_err(|_| ParseAmountError::NotANumber)?;
    if !value.is_finite() {
        return Err(ParseAmountError::NotANumber);
    }
    Ok(Amount::from_f64(value)?)
}

/// Read amounts from a one-column csv file
pub fn read_amounts(path: impl AsRef<Path>) -> impl Iterator<Item = Result<Amount, CsvError>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .expect("failed to open csv file");

    reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            parse_amount(&row.amount).map_err(|source| CsvError::InvalidAmount {
                line,
                raw: row.amount,
                source,
            })
        })
}

/// write renderings to stdout in csv format
pub fn write_renderings(renderings: impl IntoIterator<Item = ChequeText>) {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    for text in renderings {
        let row = OutputRow {
            amount: text.amount.to_string(),
            traditional_chinese: text.traditional_chinese,
            simplified_chinese: text.simplified_chinese,
            english: text.english,
            english_gbp: text.english_gbp,
        };
        writer.serialize(&row).expect("failed to write csv row");
    }

    writer.flush().expect("failed to flush csv writer");
}
