//! PIX key detection.

use serde::{Deserialize, Serialize};

use super::only_digits;

/// The five PIX key flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoChavePix {
    /// CPF — `000.000.000-00` or 11 bare digits.
    Cpf,
    /// CNPJ — `00.000.000/0000-00` or 14 bare digits.
    Cnpj,
    /// Brazilian mobile number, with or without the `55` country code.
    Celular,
    /// E-mail address.
    Email,
    /// Random key (EVP): UUID or a long alphanumeric token.
    ChaveAleatoria,
}

/// Detect whether `valor` looks like a PIX key, and which flavor.
///
/// Checks are ordered so that an 11-digit mobile number wins over a bare
/// CPF — a formatted CPF (`000.000.000-00`) is still detected as CPF.
/// Returns `None` for anything that matches no flavor.
pub fn detect_chave_pix(valor: &str) -> Option<TipoChavePix> {
    let v = valor.trim();
    if v.is_empty() {
        return None;
    }
    let digitos = only_digits(v);

    if is_email(v) {
        return Some(TipoChavePix::Email);
    }
    if is_celular(&digitos) {
        return Some(TipoChavePix::Celular);
    }
    if is_cnpj(v) {
        return Some(TipoChavePix::Cnpj);
    }
    if is_cpf(v) {
        return Some(TipoChavePix::Cpf);
    }
    if is_uuid(v) || is_chave_aleatoria(v) {
        return Some(TipoChavePix::ChaveAleatoria);
    }
    None
}

// Shape check only (local@domain.tld with no whitespace), not RFC 5322.
fn is_email(v: &str) -> bool {
    if v.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = v.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let b = domain.as_bytes();
    b.len() >= 3 && b[1..b.len() - 1].contains(&b'.')
}

// (55)? + DDD + 9 + 8 digits, over the digits-only form.
fn is_celular(digitos: &str) -> bool {
    let b = digitos.as_bytes();
    match b.len() {
        11 => b[2] == b'9',
        13 => digitos.starts_with("55") && b[4] == b'9',
        _ => false,
    }
}

fn is_cpf(v: &str) -> bool {
    if v.len() == 11 && v.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let b = v.as_bytes();
    v.len() == 14
        && b[3] == b'.'
        && b[7] == b'.'
        && b[11] == b'-'
        && v.char_indices()
            .all(|(i, c)| matches!(i, 3 | 7 | 11) || c.is_ascii_digit())
}

fn is_cnpj(v: &str) -> bool {
    let limpo: String = v
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '-' | '/'))
        .collect();
    limpo.len() == 14 && limpo.chars().all(|c| c.is_ascii_digit())
}

fn is_uuid(v: &str) -> bool {
    let mut parts = v.split('-');
    for len in [8usize, 4, 4, 4, 12] {
        match parts.next() {
            Some(p) if p.len() == len && p.chars().all(|c| c.is_ascii_hexdigit()) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}

fn is_chave_aleatoria(v: &str) -> bool {
    v.len() >= 20 && v.chars().all(|c| c.is_ascii_alphanumeric())
}
