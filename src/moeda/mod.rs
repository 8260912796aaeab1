//! BRL amount formatting, parsing, and input masking.
//!
//! All amounts are [`rust_decimal::Decimal`]; formatting follows the
//! Brazilian convention (thousands `.`, decimal `,`).

mod format;

pub use format::{MoedaError, format_brl, format_brl_com_simbolo, mask_centavos, parse_brl};
