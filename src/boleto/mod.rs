//! FEBRABAN boleto codec: validation and lossless conversion between the
//! 44-digit barcode and the 47-digit linha digitável.
//!
//! All functions are total and side-effect free: malformed input is an
//! expected case signalled through `Option`/`bool`, never a panic.
//!
//! Two conventions worth knowing before touching the code:
//!
//! - The DV geral (modulo-11) is computed over the full 44-character
//!   barcode with a `0` placeholder at position 4, keeping the weight
//!   cycle aligned with the placeholder in place.
//! - Arrecadação barcodes (leading `8` — utility bills, taxes, GRU) use a
//!   different check scheme that is not implemented here; they are
//!   accepted as-is by [`is_valid_barcode`].

mod bancos;
mod campos;
mod check_digit;
mod convert;
mod digits;
mod validate;

pub use bancos::nome_banco;
pub use campos::CodigoBarras;
pub use check_digit::{modulo10_dv, modulo11_dv};
pub use convert::{barcode_to_linha_digitavel, format_linha_digitavel, linha_digitavel_to_barcode};
pub use digits::normalize_digits;
pub use validate::{is_valid_barcode, is_valid_linha_digitavel};
