pub mod amount;
pub mod csv;
pub mod text;

pub use amount::{Amount, ConvertError, MAX_AMOUNT};
pub use text::{
    ChequeText, Script, convert, render_all, to_english, to_english_gbp, to_simplified_chinese,
    to_traditional_chinese,
};
