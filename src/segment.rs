use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Debug;

/// Coarse lexical class of a span of an utterance.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexicalClass {
    Number,
    Word,
    Symbol,
    Punctuation,
    Whitespace,
}

/// A piece of the utterance together with its lexical class.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Span<'a> {
    pub text: &'a str,
    pub tag: LexicalClass,
}

/// Splits an utterance into tagged spans. Implement this to plug in a locale-aware
/// tagger, e.g., the one that comes with a speech recognition service.
pub trait Segment: Debug + Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<Span<'a>>;
}

/// Default segmenter for English utterances. It covers the whole input, i.e.,
/// concatenating the returned spans gives back the text.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct WordSegmenter;

impl Segment for WordSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        lazy_static! {
            static ref RE_SPAN: Regex = {
                let unit = "(?:zero|one|two|three|four|five|six|seven|eight|nine|ten|eleven|\
                            twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|\
                            nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety)";
                let scale = "(?:hundred|thousand|million|billion)";
                let sep = r"(?:\s+|-)";
                // a run of number words is one span as soon as it contains a scale word
                let lead = format!(r"(?:(?:a|{unit}|{scale}){sep})*{scale}\b");
                let tail = format!(r"(?:{sep}(?:and\s+)?(?:{unit}|{scale})\b)*");
                let phrase = format!(r"\b(?P<phrase>{lead}{tail})");
                let alternatives = [
                    r"(?P<num>[0-9]+(?:[.,][0-9]+)*|\.[0-9]+)",
                    phrase.as_str(),
                    r"(?P<word>\p{L}+(?:-\p{L}+)*)",
                    r"(?P<sym>[-+*/×÷=^%])",
                    r"(?P<ws>\s+)",
                    r"(?P<punct>.)",
                ];
                Regex::new(&alternatives.join("|")).unwrap()
            };
        }
        RE_SPAN
            .captures_iter(text)
            .filter_map(|caps| {
                let (m, tag) = if let Some(m) = caps.name("num") {
                    (m, LexicalClass::Number)
                } else if let Some(m) = caps.name("phrase").or_else(|| caps.name("word")) {
                    (m, LexicalClass::Word)
                } else if let Some(m) = caps.name("sym") {
                    (m, LexicalClass::Symbol)
                } else if let Some(m) = caps.name("ws") {
                    (m, LexicalClass::Whitespace)
                } else {
                    (caps.name("punct")?, LexicalClass::Punctuation)
                };
                Some(Span {
                    text: m.as_str(),
                    tag,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{LexicalClass, Segment, Span, WordSegmenter};

    fn spans(text: &str) -> Vec<(&str, LexicalClass)> {
        WordSegmenter
            .segment(text)
            .into_iter()
            .map(|Span { text, tag }| (text, tag))
            .collect()
    }

    #[test]
    fn test_words_and_numbers() {
        assert_eq!(
            spans("twenty one plus 2"),
            vec![
                ("twenty", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("one", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("plus", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("2", LexicalClass::Number),
            ]
        );
    }

    #[test]
    fn test_symbols_and_punctuation() {
        assert_eq!(
            spans("1,000.5×3-4?"),
            vec![
                ("1,000.5", LexicalClass::Number),
                ("×", LexicalClass::Symbol),
                ("3", LexicalClass::Number),
                ("-", LexicalClass::Symbol),
                ("4", LexicalClass::Number),
                ("?", LexicalClass::Punctuation),
            ]
        );
    }

    #[test]
    fn test_hyphenated_word() {
        assert_eq!(
            spans("twenty-one - 1"),
            vec![
                ("twenty-one", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("-", LexicalClass::Symbol),
                (" ", LexicalClass::Whitespace),
                ("1", LexicalClass::Number),
            ]
        );
    }

    #[test]
    fn test_number_phrases() {
        assert_eq!(
            spans("two thousand three hundred and five plus a hundred"),
            vec![
                ("two thousand three hundred and five", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("plus", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("a hundred", LexicalClass::Word),
            ]
        );
        assert_eq!(
            spans("one hundred - five"),
            vec![
                ("one hundred", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("-", LexicalClass::Symbol),
                (" ", LexicalClass::Whitespace),
                ("five", LexicalClass::Word),
            ]
        );
        assert_eq!(
            spans("hundreds and one hundred and"),
            vec![
                ("hundreds", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("and", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("one hundred", LexicalClass::Word),
                (" ", LexicalClass::Whitespace),
                ("and", LexicalClass::Word),
            ]
        );
    }

    #[test]
    fn test_covers_input() {
        for text in ["", "what is 5 ÷ 0?", "  a-b--c ", "3.4.5,6", "a million and ten-hundred"] {
            let joined = WordSegmenter
                .segment(text)
                .iter()
                .map(|s| s.text)
                .collect::<String>();
            assert_eq!(joined, text);
        }
    }
}
