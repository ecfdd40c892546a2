//! Spoken-number parsing.

/// Extracts an integer from a spoken phrase.
///
/// Digit names ("zero" through "nine") resolve through a word table first
/// because the recognizer renders small numbers as words. Otherwise the
/// first contiguous run of ASCII digits in the phrase is parsed base 10, so
/// "go to line 12" yields 12. Returns `None` when the phrase carries no
/// parseable number; never panics.
pub fn parse_number(phrase: &str) -> Option<u32> {
    word_to_number(phrase).or_else(|| first_digit_run(phrase))
}

/// Exact full-string lookup for the digit words the recognizer emits in the
/// 0-9 range. Case-insensitive, no trimming.
fn word_to_number(word: &str) -> Option<u32> {
    match word.to_lowercase().as_str() {
        "zero" => Some(0),
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        _ => None,
    }
}

fn first_digit_run(phrase: &str) -> Option<u32> {
    let bytes = phrase.as_bytes();
    let start = bytes.iter().position(|byte| byte.is_ascii_digit())?;
    let run = bytes[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    phrase[start..start + run].parse().ok()
}
