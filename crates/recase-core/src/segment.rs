/// Split free-form text into an ordered sequence of lowercase words.
///
/// Spaces, underscores, hyphens, and punctuation end the current word. An
/// uppercase letter after a lowercase letter or digit starts a new word, and
/// the last uppercase letter of an acronym run starts a new word when a
/// lowercase letter follows, so `HTTPServer` yields `["http", "server"]`.
pub fn segment(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_alphanumeric() {
            flush(&mut words, &mut current);
            prev = Some(ch);
            continue;
        }

        if ch.is_uppercase() {
            let after_word_char = prev.is_some_and(|p| p.is_lowercase() || p.is_numeric());
            let acronym_end = prev.is_some_and(|p| p.is_uppercase())
                && chars.peek().is_some_and(|n| n.is_lowercase());

            if after_word_char || acronym_end {
                flush(&mut words, &mut current);
            }
        }

        current.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
