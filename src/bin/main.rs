use autocomplete_core::config::SuggestionSettings;
use autocomplete_core::learning::Tokenization;
use autocomplete_core::{AutocompleteEngine, EngineSources, SharedEngine};
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const USER_DICTIONARY_PATH: &str = "user_dictionary_en.txt";

#[derive(Parser)]
#[command(name = "autocomplete")]
#[command(about = "Prefix autocompletion with fuzzy, phonetic and bigram-context ranking")]
struct Cli {
    /// Primary word list, one word per line. Built-in words are used if omitted.
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Text corpus for bigram context. Built-in sentences are used if omitted.
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Strip everything except letters and spaces from corpus lines.
    #[arg(long)]
    cleaned_corpus: bool,

    /// Words added during a session are appended here and reloaded at startup.
    #[arg(long, default_value = USER_DICTIONARY_PATH)]
    user_dictionary: PathBuf,

    /// Maximum suggestions per query.
    #[arg(long, default_value_t = 5)]
    max_suggestions: usize,

    /// Edit-distance bound for fuzzy matching.
    #[arg(long, default_value_t = 1)]
    fuzzy_distance: usize,

    /// Print result lists as JSON arrays.
    #[arg(long)]
    json: bool,
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                buf.timestamp_millis(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let sources = EngineSources {
        dictionary: cli.dictionary.clone(),
        user_dictionary: Some(cli.user_dictionary.clone()),
        corpus: cli.corpus.clone(),
        tokenization: if cli.cleaned_corpus {
            Tokenization::Cleaned
        } else {
            Tokenization::Whitespace
        },
    };
    let engine = match AutocompleteEngine::from_sources(&sources) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("error loading dictionary: {}", e);
            std::process::exit(1);
        }
    };

    let settings = SuggestionSettings {
        max_suggestions: cli.max_suggestions,
        fuzzy_distance: cli.fuzzy_distance,
    };
    let shared = SharedEngine::new(engine, settings).with_user_dictionary(&cli.user_dictionary);

    if let Err(e) = run(&shared, cli.json) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(shared: &SharedEngine, json: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("{}", "=== Text Autocomplete ===".bold());
    println!("Type text to get suggestions (e.g. 'hello w' for context-aware).");
    println!("'config max N', 'config fuzzy D', 'config show', or 'exit' to quit.");

    loop {
        print!("\n> ");
        stdout.flush()?;
        let Some(line) = lines.next() else { break };
        let input = line?;
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            println!("Please enter valid text");
            continue;
        }
        if input == "config" || input.starts_with("config ") {
            handle_config(shared, &input["config".len()..]);
            continue;
        }

        let words: Vec<&str> = input.split_whitespace().collect();
        let prefix = words[words.len() - 1];
        let context = words.len().checked_sub(2).map(|i| words[i]);

        let suggestions = shared.query(prefix, context);
        if !suggestions.is_empty() {
            print_list(&format!("Suggestions for '{}':", prefix), &suggestions, json);
            println!("Enter number to select, or press Enter to continue:");
            if let Some(choice) = read_choice(&mut lines, &mut stdout)? {
                select(shared, &suggestions, &choice);
            }
            continue;
        }

        let corrections = shared.corrections(prefix);
        if !corrections.is_empty() {
            print_list("Did you mean:", &corrections, json);
            println!(
                "Enter number to select, 'a' to add '{}', or press Enter to continue:",
                prefix
            );
        } else {
            println!("{}", "No suggestions or corrections.".dark_grey());
            println!("Enter 'a' to add '{}', or press Enter to continue:", prefix);
        }
        if let Some(choice) = read_choice(&mut lines, &mut stdout)? {
            if choice.eq_ignore_ascii_case("a") {
                shared.add_word(prefix);
                println!("'{}' added to dictionary", prefix);
            } else {
                select(shared, &corrections, &choice);
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn handle_config(shared: &SharedEngine, rest: &str) {
    let args: Vec<&str> = rest.split_whitespace().collect();
    if args.first() == Some(&"show") {
        match serde_json::to_string(&shared.config().snapshot()) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("error encoding settings: {}", e),
        }
        return;
    }
    match shared.config().apply_command(&args) {
        Ok((key, value)) => println!("{:?} set to {}", key, value),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn print_list(title: &str, items: &[String], json: bool) {
    if json {
        match serde_json::to_string(items) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("error encoding results: {}", e),
        }
        return;
    }
    println!("{}", title.bold());
    for (i, word) in items.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().cyan(), word);
    }
}

fn read_choice<B: BufRead>(
    lines: &mut io::Lines<B>,
    stdout: &mut io::Stdout,
) -> io::Result<Option<String>> {
    stdout.flush()?;
    match lines.next() {
        Some(line) => {
            let choice = line?.trim().to_string();
            Ok((!choice.is_empty()).then_some(choice))
        }
        None => Ok(None),
    }
}

fn select(shared: &SharedEngine, items: &[String], choice: &str) {
    let Ok(n) = choice.parse::<usize>() else {
        return;
    };
    match n.checked_sub(1).and_then(|i| items.get(i)) {
        Some(word) => {
            println!("Selected: {}", word.as_str().green());
            shared.add_word(word);
        }
        None => println!("Invalid selection."),
    }
}
