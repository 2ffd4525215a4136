use spellsuggest::{SpellError, SuggestionRanker, Vocabulary};
use std::{
    env,
    io::{self, Write},
    path::Path,
    process,
};

const DEFAULT_DICTIONARY: &str = "dictionary.txt";

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DICTIONARY.into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        process::exit(1);
    }

    let vocabulary = match Vocabulary::from_file(&dict_path) {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let ranker = SuggestionRanker::new(&vocabulary);

    println!(
        "Spelling REPL - dictionary: {} ({} words)\n:type a word, :q to quit",
        dict_path,
        vocabulary.len()
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let word = input.trim();
        if word == ":q" {
            break;
        }

        match ranker.suggest(Some(word)) {
            Ok(similar) if similar.len() == 1 => println!("suggested word is: {}", similar[0]),
            Ok(similar) if !similar.is_empty() => println!("suggested words are: {:?}", similar),
            Ok(_) | Err(SpellError::EmptyVocabulary) => println!("no similar word found"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    Ok(())
}
