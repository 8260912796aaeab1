//! Document-type detection for accounts-payable entries.

use serde::{Deserialize, Serialize};

use super::only_digits;
use super::pix::detect_chave_pix;

/// How a payable's document field should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoDocumento {
    /// Boleto: 44-digit barcode, or 47/48-digit linha digitável.
    CodigoBarras,
    /// Any PIX key (CPF, CNPJ, mobile, e-mail, random key).
    Pix,
    /// Anything else — free-form reference, invoice number, etc.
    Padrao,
}

/// Classify a document field.
///
/// Boleto digit counts are checked before PIX keys, so a pasted linha
/// digitável is never mistaken for a long random key. Arrecadação linhas
/// carry 48 digits, hence the third accepted count.
pub fn detect_tipo_documento(valor: &str) -> TipoDocumento {
    let v = valor.trim();
    if v.is_empty() {
        return TipoDocumento::Padrao;
    }
    if matches!(only_digits(v).len(), 44 | 47 | 48) {
        return TipoDocumento::CodigoBarras;
    }
    if detect_chave_pix(v).is_some() {
        return TipoDocumento::Pix;
    }
    TipoDocumento::Padrao
}
