/// Keep only the ASCII digits `0`-`9` of `input`, in their original order.
///
/// Everything else (separators, spaces, letters) is discarded. Never
/// fails: input without digits yields an empty string. Idempotent.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
