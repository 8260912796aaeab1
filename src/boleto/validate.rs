//! Validators for barcodes and linhas digitáveis.

use super::check_digit::{modulo10_dv, modulo11_dv};
use super::convert::linha_digitavel_to_barcode;
use super::digits::normalize_digits;

/// Validate a 44-digit barcode.
///
/// Bank slips (cobrança) have their DV geral at position 4 verified
/// against the modulo-11 calculation over the zero-placeholder form.
///
/// Arrecadação barcodes (leading `8`: utility bills, taxes, GRU) use a
/// different check scheme and are accepted here without DV verification.
/// Known limitation, kept on purpose so those slips still pass through.
pub fn is_valid_barcode(input: &str) -> bool {
    let d = normalize_digits(input);
    if d.len() != 44 {
        return false;
    }
    if d.starts_with('8') {
        return true;
    }
    let dv = u32::from(d.as_bytes()[4] - b'0');
    let zeroed = format!("{}0{}", &d[0..4], &d[5..44]);
    modulo11_dv(&zeroed) == dv
}

/// Validate a 47-digit linha digitável.
///
/// The three embedded campo check digits (positions 9, 20, 31) must each
/// match their modulo-10 recomputation, and the barcode obtained by
/// re-segmentation must itself validate.
pub fn is_valid_linha_digitavel(input: &str) -> bool {
    let d = normalize_digits(input);
    if d.len() != 47 {
        return false;
    }
    let b = d.as_bytes();
    if modulo10_dv(&d[0..9]) != u32::from(b[9] - b'0')
        || modulo10_dv(&d[10..20]) != u32::from(b[20] - b'0')
        || modulo10_dv(&d[21..31]) != u32::from(b[31] - b'0')
    {
        return false;
    }
    match linha_digitavel_to_barcode(&d) {
        Some(barcode) => is_valid_barcode(&barcode),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARCODE: &str = "23791999900001500001234567890123456789012345";
    const LINHA: &str = "23791234546789012345767890123457199990000150000";

    // --- barcode ---

    #[test]
    fn valid_barcode() {
        assert!(is_valid_barcode(BARCODE));
        assert!(is_valid_barcode("34194100000000500000000000000000000000000000"));
        assert!(is_valid_barcode("10497478900000123458888888888888888888888888"));
    }

    #[test]
    fn corrupted_dv_geral_rejected() {
        // bump the DV at position 4
        let mut bytes = BARCODE.as_bytes().to_vec();
        bytes[4] = b'0' + (bytes[4] - b'0' + 1) % 10;
        let bad = String::from_utf8(bytes).unwrap();
        assert!(!is_valid_barcode(&bad));
    }

    #[test]
    fn compact_base_convention_rejected() {
        // Textbook barcode whose DV was computed over the compacted
        // 43-digit base; invalid under the zero-placeholder convention.
        assert!(!is_valid_barcode(
            "00193373700000001000500940144816060680935031"
        ));
    }

    #[test]
    fn arrecadacao_accepted_without_dv_check() {
        assert!(is_valid_barcode("81234567890123456789012345678901234567890123"));
        assert!(is_valid_barcode("80000000000000000000000000000000000000000000"));
    }

    #[test]
    fn barcode_wrong_length_rejected() {
        assert!(!is_valid_barcode(&BARCODE[..43]));
        assert!(!is_valid_barcode(&format!("{BARCODE}0")));
        assert!(!is_valid_barcode(""));
    }

    #[test]
    fn barcode_normalizes_before_checking() {
        let spaced = format!("{} {}", &BARCODE[..5], &BARCODE[5..]);
        assert!(is_valid_barcode(&spaced));
    }

    #[test]
    fn forced_override_barcode_valid() {
        // modulo-11 raw result 10 -> DV forced to 1
        assert!(is_valid_barcode("00191000000000000000000000000000000000000001"));
        // raw result 11 -> DV forced to 1
        assert!(is_valid_barcode("00191000000000000000000000000000000000000006"));
    }

    // --- linha digitável ---

    #[test]
    fn valid_linha() {
        assert!(is_valid_linha_digitavel(LINHA));
        assert!(is_valid_linha_digitavel(
            "23791.23454 67890.123457 67890.123457 1 99990000150000"
        ));
    }

    #[test]
    fn corrupted_campo_dv_rejected() {
        for pos in [9, 20, 31] {
            let mut bytes = LINHA.as_bytes().to_vec();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + 1) % 10;
            let bad = String::from_utf8(bytes).unwrap();
            assert!(!is_valid_linha_digitavel(&bad), "DV at {pos} not checked");
        }
    }

    #[test]
    fn corrupted_dv_geral_in_linha_rejected() {
        // position 32 is the DV geral; campos still check out
        let mut bytes = LINHA.as_bytes().to_vec();
        bytes[32] = b'0' + (bytes[32] - b'0' + 1) % 10;
        let bad = String::from_utf8(bytes).unwrap();
        assert!(!is_valid_linha_digitavel(&bad));
    }

    #[test]
    fn linha_wrong_length_rejected() {
        assert!(!is_valid_linha_digitavel(&LINHA[..46]));
        assert!(!is_valid_linha_digitavel(&format!("{LINHA}0")));
        assert!(!is_valid_linha_digitavel(""));
    }
}
