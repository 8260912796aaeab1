//! Lossless re-segmentation between barcode and linha digitável.
//!
//! Layouts, by digit position:
//!
//! Barcode (44): banco+moeda `0..=3`, DV geral `4`, fator+valor `5..=18`,
//! campo livre `19..=43`.
//!
//! Linha digitável (47): campo 1 `0..=8` + DV `9`, campo 2 `10..=19` +
//! DV `20`, campo 3 `21..=30` + DV `31`, DV geral `32`, fator+valor
//! `33..=46`. Campo 1 starts with the four banco+moeda digits; the three
//! campos carry the 25-digit campo livre interleaved 5/10/10.

use super::check_digit::modulo10_dv;
use super::digits::normalize_digits;

/// Convert a 47-digit linha digitável to its 44-digit barcode.
///
/// The input is normalized first, so separators and spaces are fine.
/// Anything other than exactly 47 digits is not convertible (`None`).
/// The embedded check digits are dropped, not verified — use
/// [`super::is_valid_linha_digitavel`] for validation.
pub fn linha_digitavel_to_barcode(linha: &str) -> Option<String> {
    let d = normalize_digits(linha);
    if d.len() != 47 {
        return None;
    }
    let mut barcode = String::with_capacity(44);
    barcode.push_str(&d[0..4]); // banco + moeda
    barcode.push_str(&d[32..33]); // DV geral
    barcode.push_str(&d[33..47]); // fator + valor
    // campo livre: the three campos minus their embedded DVs
    barcode.push_str(&d[4..9]);
    barcode.push_str(&d[10..20]);
    barcode.push_str(&d[21..31]);
    Some(barcode)
}

/// Convert a 44-digit barcode to its 47-digit linha digitável.
///
/// The three campo check digits are recomputed (modulo 10); the DV geral
/// is carried over untouched. Anything other than exactly 44 digits after
/// normalization is not convertible (`None`).
pub fn barcode_to_linha_digitavel(barcode: &str) -> Option<String> {
    let d = normalize_digits(barcode);
    if d.len() != 44 {
        return None;
    }
    let dv_geral = &d[4..5];
    let fator_valor = &d[5..19];
    let campo_livre = &d[19..44];

    let campo1 = format!("{}{}", &d[0..4], &campo_livre[0..5]);
    let campo2 = &campo_livre[5..15];
    let campo3 = &campo_livre[15..25];

    Some(format!(
        "{campo1}{}{campo2}{}{campo3}{}{dv_geral}{fator_valor}",
        modulo10_dv(&campo1),
        modulo10_dv(campo2),
        modulo10_dv(campo3),
    ))
}

/// Render a linha digitável in the conventional grouped display form:
/// `XXXXX.XXXXX XXXXX.XXXXXX XXXXX.XXXXXX X XXXXXXXXXXXXXX`.
pub fn format_linha_digitavel(linha: &str) -> Option<String> {
    let d = normalize_digits(linha);
    if d.len() != 47 {
        return None;
    }
    Some(format!(
        "{}.{} {}.{} {}.{} {} {}",
        &d[0..5],
        &d[5..10],
        &d[10..15],
        &d[15..21],
        &d[21..26],
        &d[26..32],
        &d[32..33],
        &d[33..47],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARCODE: &str = "23791999900001500001234567890123456789012345";
    const LINHA: &str = "23791234546789012345767890123457199990000150000";

    #[test]
    fn linha_to_barcode() {
        assert_eq!(linha_digitavel_to_barcode(LINHA).as_deref(), Some(BARCODE));
    }

    #[test]
    fn barcode_to_linha() {
        assert_eq!(barcode_to_linha_digitavel(BARCODE).as_deref(), Some(LINHA));
    }

    #[test]
    fn accepts_formatted_input() {
        let formatted = "23791.23454 67890.123457 67890.123457 1 99990000150000";
        assert_eq!(
            linha_digitavel_to_barcode(formatted).as_deref(),
            Some(BARCODE)
        );
    }

    #[test]
    fn wrong_length_not_convertible() {
        assert_eq!(linha_digitavel_to_barcode(&LINHA[..46]), None);
        assert_eq!(linha_digitavel_to_barcode(&format!("{LINHA}0")), None);
        assert_eq!(barcode_to_linha_digitavel(&BARCODE[..43]), None);
        assert_eq!(barcode_to_linha_digitavel(&format!("{BARCODE}0")), None);
        assert_eq!(linha_digitavel_to_barcode(""), None);
        assert_eq!(barcode_to_linha_digitavel(""), None);
    }

    #[test]
    fn round_trip_barcode() {
        let linha = barcode_to_linha_digitavel(BARCODE).unwrap();
        assert_eq!(linha_digitavel_to_barcode(&linha).as_deref(), Some(BARCODE));
    }

    #[test]
    fn round_trip_linha() {
        let barcode = linha_digitavel_to_barcode(LINHA).unwrap();
        assert_eq!(barcode_to_linha_digitavel(&barcode).as_deref(), Some(LINHA));
    }

    #[test]
    fn display_grouping() {
        assert_eq!(
            format_linha_digitavel(LINHA).as_deref(),
            Some("23791.23454 67890.123457 67890.123457 1 99990000150000")
        );
        assert_eq!(format_linha_digitavel("123"), None);
    }
}
