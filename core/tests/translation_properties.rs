//! Behavioural properties of translate/suggest against the built-in table.
//!
//! Covers:
//! - the worked examples (empty input, single word, mixed literal/glyph, phrase)
//! - phrase precedence for every two-token key in the dictionary
//! - idempotence of re-translating a translation
//! - case insensitivity and the five-suggestion cap
//! - sharing one dictionary across threads

use emoji_translator_core::{suggest, translate, Dictionary, Piece, Translator};

const SAMPLE_INPUTS: &[&str] = &[
    "",
    "happy",
    "I love pizza",
    "good morning",
    "Good Morning sunshine, good night moon",
    "thank you for the ice cream",
    "   spaced    out   words  ",
    "no yes no",
    "the cat and the dog play in the rain",
    "s",
    "GOODBYE cruel world",
];

#[test]
fn worked_examples() {
    let dict = Dictionary::builtin();
    assert_eq!(translate(&dict, ""), "");
    assert_eq!(translate(&dict, "happy"), "😊");
    assert_eq!(translate(&dict, "I love pizza"), "I ❤️🍕");
    assert_eq!(translate(&dict, "good morning"), "🌅");
    assert!(suggest(&dict, "").is_empty());
}

#[test]
fn suggestions_only_contain_prefix_matches() {
    let dict = Dictionary::builtin();
    let out = suggest(&dict, "ha");
    assert!(out.contains(&"happy: 😊".to_string()));
    assert!(out.iter().all(|s| s.starts_with("ha")));
}

#[test]
fn at_most_five_suggestions() {
    let dict = Dictionary::builtin();
    for input in SAMPLE_INPUTS {
        assert!(suggest(&dict, input).len() <= 5, "input {input:?}");
    }
    for c in 'a'..='z' {
        assert!(suggest(&dict, &c.to_string()).len() <= 5);
    }
}

#[test]
fn every_phrase_key_wins_over_its_parts() {
    let dict = Dictionary::builtin();
    let translator = Translator::new(&dict);
    for entry in dict.entries().iter().filter(|e| e.token_count() == 2) {
        let text = format!("x {} y", entry.key);
        let pieces = translator.pieces(&text);
        assert_eq!(
            pieces,
            vec![
                Piece::Literal("x"),
                Piece::Glyph {
                    key: &entry.key,
                    glyph: &entry.glyph
                },
                Piece::Literal("y"),
            ],
            "phrase {:?}",
            entry.key
        );
    }
}

#[test]
fn retranslation_is_stable() {
    let dict = Dictionary::builtin();
    for input in SAMPLE_INPUTS {
        let once = translate(&dict, input);
        assert_eq!(translate(&dict, &once), once, "input {input:?}");
    }
}

#[test]
fn case_insensitive() {
    let dict = Dictionary::builtin();
    assert_eq!(translate(&dict, "HAPPY"), translate(&dict, "happy"));
    assert_eq!(translate(&dict, "Thank YOU"), "🙏");
    assert_eq!(suggest(&dict, "HA"), suggest(&dict, "ha"));
}

#[test]
fn index_agrees_with_linear_scan() {
    let dict = Dictionary::builtin();
    let mut prefixes: Vec<String> = Vec::new();
    for entry in dict.entries() {
        let chars: Vec<char> = entry.key.chars().collect();
        // the suggester only ever sees a single token
        for n in 1..=chars.len() {
            if chars[n - 1] == ' ' {
                break;
            }
            prefixes.push(chars[..n].iter().collect());
        }
    }
    for prefix in prefixes {
        let expected: Vec<String> = dict
            .entries()
            .iter()
            .filter(|e| e.key.starts_with(prefix.as_str()))
            .take(5)
            .map(|e| format!("{}: {}", e.key, e.glyph))
            .collect();
        assert_eq!(suggest(&dict, &prefix), expected, "prefix {prefix:?}");
    }
}

#[test]
fn shared_dictionary_across_threads() {
    let dict = Dictionary::builtin();
    let expected = translate(&dict, "I love pizza");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| (translate(&dict, "I love pizza"), suggest(&dict, "s"))))
            .collect();
        for handle in handles {
            let (translation, suggestions) = handle.join().unwrap();
            assert_eq!(translation, expected);
            assert_eq!(suggestions.len(), 5);
        }
    });
}
