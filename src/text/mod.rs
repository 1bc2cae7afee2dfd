//! Cheque amount to legal-text conversion.
//!
//! Four sibling converters cover the scripts a Hong Kong cheque needs:
//! Traditional Chinese, Simplified Chinese, English, and English with
//! pound-sterling wording. Each is a pure function over a validated
//! amount; lexicon tables are read-only constants, so calls are safe from
//! any number of threads.

use crate::amount::{Amount, ConvertError};

mod chinese;
mod english;

/// Target script and currency wording for one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    TraditionalChinese,
    SimplifiedChinese,
    English,
    EnglishGbp,
}

/// Convert an amount to Traditional Chinese cheque text (萬/億 grouping,
/// 正 terminator).
pub fn to_traditional_chinese(value: f64) -> Result<String, ConvertError> {
    Ok(chinese::render(Amount::from_f64(value)?, &chinese::TRADITIONAL))
}

/// Convert an amount to Simplified Chinese cheque text (万/亿 grouping,
/// 整 terminator).
pub fn to_simplified_chinese(value: f64) -> Result<String, ConvertError> {
    Ok(chinese::render(Amount::from_f64(value)?, &chinese::SIMPLIFIED))
}

/// Convert an amount to English cheque text ("... Dollars and ... Cents
/// Only").
pub fn to_english(value: f64) -> Result<String, ConvertError> {
    Ok(english::render(Amount::from_f64(value)?, &english::DOLLARS))
}

/// Convert an amount to English cheque text with pound wording ("... Pounds
/// and ... Pence Only").
pub fn to_english_gbp(value: f64) -> Result<String, ConvertError> {
    Ok(english::render(Amount::from_f64(value)?, &english::POUNDS))
}

/// Convert an amount for one script.
pub fn convert(value: f64, script: Script) -> Result<String, ConvertError> {
    match script {
        Script::TraditionalChinese => to_traditional_chinese(value),
        Script::SimplifiedChinese => to_simplified_chinese(value),
        Script::English => to_english(value),
        Script::EnglishGbp => to_english_gbp(value),
    }
}

/// All four renderings of one validated amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChequeText {
    pub amount: Amount,
    pub traditional_chinese: String,
    pub simplified_chinese: String,
    pub english: String,
    pub english_gbp: String,
}

/// Render every script for an already validated amount.
pub fn render_all(amount: Amount) -> ChequeText {
    ChequeText {
        amount,
        traditional_chinese: chinese::render(amount, &chinese::TRADITIONAL),
        simplified_chinese: chinese::render(amount, &chinese::SIMPLIFIED),
        english: english::render(amount, &english::DOLLARS),
        english_gbp: english::render(amount, &english::POUNDS),
    }
}
