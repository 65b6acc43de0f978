use autocomplete_core::config::SuggestionSettings;
use autocomplete_core::error::AutocompleteError;
use autocomplete_core::core::{context::ContextModel, trie::PrefixTrie};
use autocomplete_core::learning::{LearningEngine, Tokenization};
use autocomplete_core::persistence::load_corpus;
use autocomplete_core::{AutocompleteEngine, EngineSources, SharedEngine};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn file_with(contents: &str) -> NamedTempFile {
    file_with_bytes(contents.as_bytes())
}

fn file_with_bytes(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

fn settings() -> SuggestionSettings {
    SuggestionSettings::default()
}

#[test]
fn dictionary_lines_are_trimmed_and_blanks_skipped() {
    let dict = file_with("  Zebra  \n\n\t\nzebra\nzenith\n   \n");
    let engine = AutocompleteEngine::from_sources(&EngineSources {
        dictionary: Some(dict.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.trie.frequency_of("ZEBRA"), 2);
    // Latest casing wins for display.
    let two = SuggestionSettings { max_suggestions: 2, fuzzy_distance: 1 };
    assert_eq!(engine.get_suggestions("ze", None, &two), vec!["zebra", "zenith"]);
    // The built-in dictionary is not loaded when a file is given.
    assert!(!engine.contains_word("elephant"));
}

#[test]
fn invalid_utf8_dictionary_lines_are_skipped() {
    let dict = file_with_bytes(b"zebra\n\xff\xfe\nzenith\r\n");
    let engine = AutocompleteEngine::from_sources(&EngineSources {
        dictionary: Some(dict.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert!(engine.contains_word("zebra"));
    assert!(engine.contains_word("zenith"));
    let two = SuggestionSettings { max_suggestions: 2, fuzzy_distance: 1 };
    assert_eq!(engine.get_suggestions("ze", None, &two), vec!["zebra", "zenith"]);
}

#[test]
fn invalid_utf8_corpus_lines_are_skipped() {
    let corpus = file_with_bytes(b"hello world\n\xff\nfoo bar\n");
    let engine = AutocompleteEngine::from_sources(&EngineSources {
        corpus: Some(corpus.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.context_model.weight("hello", "world"), 1);
    assert_eq!(engine.context_model.weight("foo", "bar"), 1);
    // The file loaded, so the built-in corpus stays out.
    assert_eq!(engine.context_model.weight("the", "cat"), 0);
}

#[test]
fn unreadable_corpus_leaves_no_partial_state() {
    // Opening a directory succeeds on Unix but reading it fails.
    let dir = TempDir::new().unwrap();
    let mut trie = PrefixTrie::new();
    let mut ctx = ContextModel::new();
    let result = load_corpus(&LearningEngine::default(), &mut trie, &mut ctx, dir.path());

    assert!(matches!(result, Err(AutocompleteError::Io { .. })));
    assert!(trie.is_empty());
    assert!(ctx.is_empty());

    let engine = AutocompleteEngine::from_sources(&EngineSources {
        corpus: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(engine.context_model.weight("the", "cat"), 1);
}

#[test]
fn missing_primary_dictionary_is_fatal() {
    let result = AutocompleteEngine::from_sources(&EngineSources {
        dictionary: Some(PathBuf::from("/definitely/not/here/words.txt")),
        ..Default::default()
    });
    assert!(matches!(result, Err(AutocompleteError::Io { .. })));
}

#[test]
fn missing_optional_files_fall_back_to_defaults() {
    let engine = AutocompleteEngine::from_sources(&EngineSources {
        user_dictionary: Some(PathBuf::from("/definitely/not/here/user.txt")),
        corpus: Some(PathBuf::from("/definitely/not/here/corpus.txt")),
        ..Default::default()
    })
    .unwrap();

    assert!(engine.contains_word("elephant"));
    // Bigrams from the built-in sentences.
    assert_eq!(engine.context_model.weight("the", "cat"), 1);
}

#[test]
fn corpus_file_drives_context_ranking() {
    let corpus = file_with("hello world\nhello world\nhello wander\nhello world again\n");
    let engine = AutocompleteEngine::from_sources(&EngineSources {
        corpus: Some(corpus.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.context_model.weight("hello", "world"), 3);
    assert_eq!(
        engine.get_suggestions("w", Some("Hello"), &settings()),
        vec!["world", "wander"]
    );
    // The built-in corpus is not loaded when a file is given.
    assert_eq!(engine.context_model.weight("the", "cat"), 0);
}

#[test]
fn cleaned_corpus_strips_punctuation() {
    let corpus = file_with("Hello, world!\nHello... world?\n");
    let engine = AutocompleteEngine::from_sources(&EngineSources {
        corpus: Some(corpus.path().to_path_buf()),
        tokenization: Tokenization::Cleaned,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.context_model.weight("hello", "world"), 2);
    assert!(engine.contains_word("world"));
    assert!(!engine.contains_word("world!"));
}

#[test]
fn added_words_persist_across_sessions() {
    let dir = TempDir::new().unwrap();
    let user_dict = dir.path().join("nested").join("user_dictionary_en.txt");

    let shared = SharedEngine::new(AutocompleteEngine::with_defaults(), settings())
        .with_user_dictionary(&user_dict);
    assert!(shared.add_word("Quokka"));
    assert!(!shared.add_word(""));
    assert!(shared.add_word("quokka"));

    let saved = std::fs::read_to_string(&user_dict).unwrap();
    assert_eq!(saved, "Quokka\nquokka\n");

    let reloaded = AutocompleteEngine::from_sources(&EngineSources {
        user_dictionary: Some(user_dict),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(reloaded.trie.frequency_of("QUOKKA"), 2);
    assert_eq!(reloaded.get_suggestions("quo", None, &settings()), vec!["quokka"]);
}

#[test]
fn failed_append_keeps_the_in_memory_insert() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened for appending.
    let shared = SharedEngine::new(AutocompleteEngine::new(), settings())
        .with_user_dictionary(dir.path());
    assert!(shared.add_word("ocelot"));
    assert!(shared.contains_word("ocelot"));
}
