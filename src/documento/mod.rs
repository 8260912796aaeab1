//! Payment document classification.
//!
//! Accounts-payable entries carry a free-form document field that may be
//! a boleto code, any flavor of PIX key, or plain text. These detectors
//! classify that field so the caller can route payment accordingly.
//!
//! # Example
//!
//! ```
//! use cobranca::documento::*;
//!
//! assert_eq!(detect_chave_pix("financeiro@empresa.com.br"), Some(TipoChavePix::Email));
//! assert_eq!(
//!     detect_tipo_documento("23791.23454 67890.123457 67890.123457 1 99990000150000"),
//!     TipoDocumento::CodigoBarras
//! );
//! ```

mod pix;
mod tipo;

pub use pix::{TipoChavePix, detect_chave_pix};
pub use tipo::{TipoDocumento, detect_tipo_documento};

fn only_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
