// File: src/persistence.rs
use crate::core::{context::ContextModel, trie::PrefixTrie};
use crate::error::{AutocompleteError, Result};
use crate::learning::LearningEngine;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| AutocompleteError::io(path, e))
}

/// Reads every line of `path` before anything is indexed, so a read error
/// part way through leaves the caller's state untouched. Lines that are not
/// valid UTF-8 are skipped.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for (idx, raw) in open(path)?.split(b'\n').enumerate() {
        let mut raw = raw.map_err(|e| AutocompleteError::io(path, e))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        match String::from_utf8(raw) {
            Ok(line) => lines.push(line),
            Err(_) => log::debug!("skipping malformed line {} in {}", idx + 1, path.display()),
        }
    }
    Ok(lines)
}

/// Reads a word list, one word per line. Lines are trimmed and blank lines
/// skipped; the surviving text is inserted as-is. Returns the words inserted.
pub fn load_dictionary(trie: &mut PrefixTrie, path: &Path) -> Result<usize> {
    let lines = read_lines(path)?;
    let mut inserted = 0;
    for line in &lines {
        let word = line.trim();
        if !word.is_empty() {
            trie.insert(word);
            inserted += 1;
        }
    }
    log::info!("loaded {} words from {}", inserted, path.display());
    Ok(inserted)
}

/// Reads a corpus file line by line into the vocabulary and bigram table.
/// Returns the number of bigram pairs counted. On error nothing is learned.
pub fn load_corpus(
    learner: &LearningEngine,
    trie: &mut PrefixTrie,
    context_model: &mut ContextModel,
    path: &Path,
) -> Result<usize> {
    let lines = read_lines(path)?;
    let pairs: usize = lines
        .iter()
        .map(|line| learner.learn_line(trie, context_model, line))
        .sum();
    log::info!(
        "loaded {} bigrams from {} ({:?})",
        pairs,
        path.display(),
        learner.tokenization()
    );
    Ok(pairs)
}

/// Appends one word to a user dictionary, creating the file if needed.
pub fn append_user_word(path: &Path, word: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AutocompleteError::io(parent, e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AutocompleteError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", word)
        .and_then(|_| writer.flush())
        .map_err(|e| AutocompleteError::io(path, e))
}
