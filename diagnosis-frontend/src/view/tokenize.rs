/// Split free text into symptom tokens.
///
/// Runs of whitespace or commas separate tokens; each piece is trimmed and
/// empty pieces are dropped. Input order is preserved.
pub fn tokenize_symptoms(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
