//! # cobranca
//!
//! Brazilian billing and payment-document utilities: the FEBRABAN boleto
//! barcode / linha digitável codec, PIX key detection, BRL amount
//! formatting, date input masks, and DRE statement-line mapping.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use cobranca::boleto::*;
//!
//! let linha = "23791.23454 67890.123457 67890.123457 1 99990000150000";
//! assert!(is_valid_linha_digitavel(linha));
//!
//! let barcode = linha_digitavel_to_barcode(linha).unwrap();
//! assert_eq!(barcode, "23791999900001500001234567890123456789012345");
//! assert!(is_valid_barcode(&barcode));
//! assert_eq!(barcode_to_linha_digitavel(&barcode).as_deref(), Some(normalize_digits(linha).as_str()));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `boleto` (default) | Barcode ⇄ linha digitável codec, check digits, typed decomposition |
//! | `documento` | Payment document classification, PIX key detection |
//! | `moeda` | BRL amount formatting, parsing, input masks |
//! | `datas` | `dd/mm/yyyy` masks and ISO date normalization |
//! | `dre` | Chart-of-accounts → DRE statement line mapping |
//! | `all` | Everything |

#[cfg(feature = "boleto")]
pub mod boleto;

#[cfg(feature = "documento")]
pub mod documento;

#[cfg(feature = "moeda")]
pub mod moeda;

#[cfg(feature = "datas")]
pub mod datas;

#[cfg(feature = "dre")]
pub mod dre;

// Re-export the codec at crate root for convenience
#[cfg(feature = "boleto")]
pub use crate::boleto::*;
