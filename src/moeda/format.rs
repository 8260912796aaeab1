//! BRL formatting and parsing.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a formatted BRL amount cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoedaError {
    /// Input was empty or contained no amount at all.
    #[error("empty amount")]
    Empty,
    /// Input was not a parseable amount.
    #[error("invalid amount '{0}'")]
    Invalid(String),
}

/// Format an amount in the Brazilian convention: `1.234,56`.
///
/// Rounds to two decimal places, midpoint away from zero.
pub fn format_brl(valor: Decimal) -> String {
    let rounded = valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negativo = rounded.is_sign_negative() && !rounded.is_zero();
    let texto = format!("{:.2}", rounded.abs());
    let (inteiro, centavos) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));

    let mut agrupado = String::with_capacity(inteiro.len() + inteiro.len() / 3 + 4);
    if negativo {
        agrupado.push('-');
    }
    for (i, c) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }
    agrupado.push(',');
    agrupado.push_str(centavos);
    agrupado
}

/// Format with the currency symbol: `R$ 1.234,56`.
pub fn format_brl_com_simbolo(valor: Decimal) -> String {
    format!("R$ {}", format_brl(valor))
}

/// Parse a BRL-formatted amount back into a [`Decimal`].
///
/// Accepts the `R$` prefix, spaces, thousand separators and either a
/// decimal comma or a plain number. `-` is honored.
pub fn parse_brl(texto: &str) -> Result<Decimal, MoedaError> {
    let aparado = texto.trim();
    let limpo: String = aparado
        .trim_start_matches('-')
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if limpo.is_empty() {
        return Err(MoedaError::Empty);
    }
    let valor: Decimal = limpo
        .parse()
        .map_err(|_| MoedaError::Invalid(aparado.to_string()))?;
    if aparado.starts_with('-') {
        Ok(-valor)
    } else {
        Ok(valor)
    }
}

/// Progressive money input mask: typed digits are centavos.
///
/// `"1"` → `"0,01"`, `"12345"` → `"123,45"`. Anything that is not a
/// digit is dropped; no digits at all yields an empty string. Input is
/// capped at 15 digits to keep the value in range.
pub fn mask_centavos(entrada: &str) -> String {
    let digitos: String = entrada
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(15)
        .collect();
    if digitos.is_empty() {
        return String::new();
    }
    // all digits, <= 15 of them: always parses
    let centavos: i64 = digitos.parse().unwrap_or(0);
    format_brl(Decimal::new(centavos, 2))
}
