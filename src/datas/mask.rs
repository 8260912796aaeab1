/// Progressive `dd/mm/yyyy` input mask.
///
/// Non-digits are dropped, slashes are inserted as the user types, and
/// anything past eight digits is ignored. No calendar validation here —
/// that is [`super::parse_data_br`]'s job.
pub fn apply_date_mask(entrada: &str) -> String {
    let n: String = entrada
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(8)
        .collect();
    match n.len() {
        0..=2 => n,
        3..=4 => format!("{}/{}", &n[..2], &n[2..]),
        _ => format!("{}/{}/{}", &n[..2], &n[2..4], &n[4..]),
    }
}
