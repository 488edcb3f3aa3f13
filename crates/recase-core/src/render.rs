use crate::CaseStyle;

impl CaseStyle {
    /// Join a word sequence under this style's separator and casing rule.
    pub fn render(&self, words: &[String]) -> String {
        match self {
            CaseStyle::Kebab => words.join("-"),
            CaseStyle::Dot => words.join("."),
            CaseStyle::Snake => words.join("_"),
            CaseStyle::Camel => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            CaseStyle::Pascal => words.iter().map(|word| capitalize(word)).collect(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_render_kebab() {
        assert_eq!(CaseStyle::Kebab.render(&seq(&["hello", "world"])), "hello-world");
    }

    #[test]
    fn test_render_camel() {
        assert_eq!(
            CaseStyle::Camel.render(&seq(&["convert", "this", "string"])),
            "convertThisString"
        );
        assert_eq!(CaseStyle::Camel.render(&seq(&["single"])), "single");
    }

    #[test]
    fn test_render_dot() {
        assert_eq!(CaseStyle::Dot.render(&seq(&["hello", "world"])), "hello.world");
    }

    #[test]
    fn test_render_snake() {
        assert_eq!(CaseStyle::Snake.render(&seq(&["hello", "world"])), "hello_world");
    }

    #[test]
    fn test_render_pascal() {
        assert_eq!(CaseStyle::Pascal.render(&seq(&["hello", "world"])), "HelloWorld");
    }

    #[test]
    fn test_render_empty_sequence() {
        for style in CaseStyle::all() {
            assert_eq!(style.render(&[]), "");
        }
    }
}
