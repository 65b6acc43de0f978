// File: src/fuzzy/phonetic.rs
use crate::core::trie::PrefixTrie;
use crate::core::types::{rank_by_frequency, WordEntry};

const CODE_LEN: usize = 4;

/// Soundex-style class digit for an upper-cased character.
fn class_digit(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0',
    }
}

/// Four-character phonetic code: the first character as written (upper-cased)
/// followed by up to three class digits, zero-padded.
///
/// The previous-digit tracker moves on every character, so a vowel between two
/// same-class consonants lets the second one through ("Robert" -> R163).
pub fn phonetic_code(s: &str) -> String {
    let mut chars = s.chars().flat_map(char::to_uppercase);
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);
    let mut len = 1;
    let mut prev = class_digit(first);

    for c in chars {
        if len == CODE_LEN {
            break;
        }
        let digit = class_digit(c);
        if digit != '0' && digit != prev {
            code.push(digit);
            len += 1;
        }
        prev = digit;
    }

    while len < CODE_LEN {
        code.push('0');
        len += 1;
    }
    code
}

/// Indexed words sharing `prefix`'s phonetic code, ranked and cut to `limit`.
///
/// Scans every terminal in the trie; fine for a small vocabulary, a larger one
/// would want a code -> words map maintained at insert time.
pub fn phonetic_suggestions(trie: &PrefixTrie, prefix: &str, limit: usize) -> Vec<WordEntry> {
    let target = phonetic_code(prefix);
    if target.is_empty() {
        return vec![];
    }

    let mut matches: Vec<WordEntry> = trie
        .words_under(trie.root())
        .into_iter()
        .filter(|entry| phonetic_code(&entry.canonical) == target)
        .collect();
    rank_by_frequency(&mut matches);
    matches.truncate(limit);
    matches
}
