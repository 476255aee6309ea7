//! Stopword-frequency language identification.
//!
//! Two candidate languages and short legal documents make a full n-gram
//! identifier unnecessary: counting high-frequency function words over a
//! bounded sample separates Spanish from English reliably. Ties and empty
//! samples fall back to Spanish, the dominant language of the corpus.

use contract_types::Lang;

const ES_STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "de", "del", "que", "en", "por", "con", "para", "una", "un", "se",
    "al", "este", "esta", "entre", "como", "su",
];

const EN_STOPWORDS: &[&str] = &[
    "the", "of", "and", "to", "in", "that", "for", "with", "this", "shall", "a", "an", "by", "is",
    "as", "between", "on", "be", "or", "at",
];

/// How many words of the document feed the scorer. Contract language is
/// uniform enough that the opening passage decides it.
const SAMPLE_WORDS: usize = 400;

pub fn detect_language(text: &str) -> Lang {
    let mut es = 0usize;
    let mut en = 0usize;
    for word in text.split_whitespace().take(SAMPLE_WORDS) {
        let word = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        if ES_STOPWORDS.contains(&word.as_str()) {
            es += 1;
        }
        if EN_STOPWORDS.contains(&word.as_str()) {
            en += 1;
        }
    }
    if en > es {
        Lang::En
    } else {
        Lang::Es
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spanish_contract_text() {
        let text = "El presente contrato de arrendamiento se celebra entre las partes \
                    con el objeto de regular la cesión del uso de la vivienda.";
        assert_eq!(detect_language(text), Lang::Es);
    }

    #[test]
    fn english_contract_text() {
        let text = "This agreement is made between the parties for the purpose of \
                    the sale of the vehicle described in the schedule.";
        assert_eq!(detect_language(text), Lang::En);
    }

    #[test]
    fn empty_and_ambiguous_text_default_to_spanish() {
        assert_eq!(detect_language(""), Lang::Es);
        assert_eq!(detect_language("12345 67890 !!!"), Lang::Es);
    }

    #[test]
    fn punctuation_does_not_hide_stopwords() {
        let text = "(the) \"of\" the, and; the.";
        assert_eq!(detect_language(text), Lang::En);
    }
}
