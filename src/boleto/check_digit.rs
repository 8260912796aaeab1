//! The two FEBRABAN check-digit calculators.

/// Modulo-10 check digit, used for the three campos of the linha digitável.
///
/// Right to left, digits are weighted 2,1,2,1,…; a product above 9 is
/// replaced by the sum of its own two digits (equivalently, minus 9, since
/// products never exceed 18). The check digit is `(10 - sum % 10) % 10`,
/// collapsing a would-be 10 to 0.
///
/// Non-digit characters are ignored; callers normally pass already
/// normalized input.
pub fn modulo10_dv(campo: &str) -> u32 {
    let mut sum = 0u32;
    let mut weight = 2u32;
    for d in campo.chars().rev().filter_map(|c| c.to_digit(10)) {
        let prod = d * weight;
        sum += if prod > 9 { prod - 9 } else { prod };
        weight = if weight == 2 { 1 } else { 2 };
    }
    (10 - sum % 10) % 10
}

/// Modulo-11 check digit (DV geral) over the 44-character barcode with a
/// `0` placeholder at position 4, the DV slot itself.
///
/// Right to left, weights cycle 2,3,…,9 and wrap back to 2. The raw
/// result is `11 - sum % 11`; raw 0, 10 and 11 are all forced to **1**,
/// the sector-standard override for degenerate remainders.
///
/// The placeholder convention matters: computing over a compacted
/// 43-digit base would shift the weight cycle by one and produce
/// different digits. This calculator keeps the placeholder in place.
pub fn modulo11_dv(barcode: &str) -> u32 {
    let mut sum = 0u32;
    let mut weight = 2u32;
    for d in barcode.chars().rev().filter_map(|c| c.to_digit(10)) {
        sum += d * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }
    match 11 - sum % 11 {
        10 | 11 => 1,
        dv => dv,
    }
}
