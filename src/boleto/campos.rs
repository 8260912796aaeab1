//! Typed decomposition of a bank-slip barcode.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::digits::normalize_digits;
use super::validate::is_valid_barcode;

/// The fator de vencimento runs 1000..=9999 and then restarts at 1000,
/// so consecutive cycles sit exactly 9000 days apart.
const FATOR_CICLO_DIAS: u64 = 9000;

/// The component fields of a 44-digit cobrança barcode.
///
/// Produced by [`CodigoBarras::parse`]; fields follow the FEBRABAN layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodigoBarras {
    /// COMPE bank code (3 digits, e.g. "341").
    pub banco: String,
    /// Currency digit (9 = Real).
    pub moeda: u8,
    /// DV geral, position 4.
    pub dv_geral: u8,
    /// Fator de vencimento (4 digits); see [`Self::vencimento`].
    pub fator_vencimento: u16,
    /// Face amount in centavos (10 digits); 0 means open amount.
    pub valor_centavos: u64,
    /// Campo livre (25 digits, bank-specific layout — not interpreted).
    pub campo_livre: String,
}

impl CodigoBarras {
    /// Parse a valid cobrança barcode into its components.
    ///
    /// Returns `None` for anything that fails [`is_valid_barcode`] and
    /// for arrecadação barcodes (leading `8`), whose layout differs.
    pub fn parse(input: &str) -> Option<Self> {
        let d = normalize_digits(input);
        if d.len() != 44 || d.starts_with('8') || !is_valid_barcode(&d) {
            return None;
        }
        let b = d.as_bytes();
        Some(Self {
            banco: d[0..3].to_string(),
            moeda: b[3] - b'0',
            dv_geral: b[4] - b'0',
            fator_vencimento: d[5..9].parse().ok()?,
            valor_centavos: d[9..19].parse().ok()?,
            campo_livre: d[19..44].to_string(),
        })
    }

    /// Decode the due date encoded by the fator de vencimento.
    ///
    /// The fator counts days from 1997-10-07; since the cycle restarted
    /// (fator 1000 fell on 2025-02-22), a fator alone is ambiguous across
    /// cycles 9000 days apart. The candidate closest to `reference`
    /// (typically today) wins. A fator outside 1000..=9999 carries no due
    /// date and yields `None`.
    pub fn vencimento(&self, reference: NaiveDate) -> Option<NaiveDate> {
        if !(1000..=9999).contains(&self.fator_vencimento) {
            return None;
        }
        let epoch = NaiveDate::from_ymd_opt(1997, 10, 7)?;
        let mut best = epoch.checked_add_days(Days::new(u64::from(self.fator_vencimento)))?;
        loop {
            let Some(next) = best.checked_add_days(Days::new(FATOR_CICLO_DIAS)) else {
                break;
            };
            if days_between(next, reference) < days_between(best, reference) {
                best = next;
            } else {
                break;
            }
        }
        Some(best)
    }

    /// Face amount as a [`Decimal`] with two fraction digits.
    ///
    /// `None` when the slip carries no amount (all-zero valor field).
    pub fn valor(&self) -> Option<Decimal> {
        if self.valor_centavos == 0 {
            None
        } else {
            Some(Decimal::new(self.valor_centavos as i64, 2))
        }
    }
}

fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}
