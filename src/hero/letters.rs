const WORD_SPACE: &str = "<span class=\"word-space\" aria-hidden=\"true\">&nbsp;</span>";

/// Headline markup with one animated span per letter; `--col` is the
/// letter's index inside its word.
pub fn wrap_letters(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .enumerate()
                .map(|(i, c)| {
                    let letter = match c {
                        '&' => "&amp;".to_string(),
                        '<' => "&lt;".to_string(),
                        '>' => "&gt;".to_string(),
                        _ => c.to_string(),
                    };
                    format!("<span class=\"letter\" style=\"--col:{}\">{}</span>", i, letter)
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(WORD_SPACE)
}
