/// Normalize a transcribed phrase before any table lookup.
///
/// Recognizers punctuate utterances as sentences, so the transcript for
/// "save file" usually arrives as `"Save file."`. Lookups are keyed on
/// the lowercased text with that sentence period dropped; only the first
/// period is removed so dictated text keeps its inner punctuation.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replacen('.', "", 1)
}
