use chrono::NaiveDate;

/// Strict `dd/mm/yyyy` parse.
///
/// The date must exist on the calendar and the year must fall in
/// 1900..=2100 — a typo guard for form input, not a general-purpose
/// parser.
pub fn parse_data_br(texto: &str) -> Option<NaiveDate> {
    let b = texto.as_bytes();
    if b.len() != 10 || b[2] != b'/' || b[5] != b'/' {
        return None;
    }
    let dia: u32 = texto[0..2].parse().ok()?;
    let mes: u32 = texto[3..5].parse().ok()?;
    let ano: i32 = texto[6..10].parse().ok()?;
    if !(1900..=2100).contains(&ano) {
        return None;
    }
    NaiveDate::from_ymd_opt(ano, mes, dia)
}

/// `dd/mm/yyyy` → `yyyy-mm-dd`. `None` when the input is not a valid date.
pub fn to_iso(data_br: &str) -> Option<String> {
    parse_data_br(data_br).map(|d| d.format("%Y-%m-%d").to_string())
}

/// `yyyy-mm-dd` → `dd/mm/yyyy`. `None` when the input is not a valid date.
pub fn from_iso(iso: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
    Some(d.format("%d/%m/%Y").to_string())
}

/// Normalize a user-supplied date to ISO `yyyy-mm-dd` for storage.
///
/// Accepts the formats that show up in pasted data: `yyyy-mm-dd`,
/// `dd/mm/yyyy`, `dd-mm-yyyy` and `yyyy/mm/dd`. Anything else is `None`.
pub fn normalize_for_database(texto: &str) -> Option<String> {
    let t = texto.trim();
    if t.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Some(d.format("%Y-%m-%d").to_string());
        }
    }
    None
}
