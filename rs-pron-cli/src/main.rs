use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::warn;

use rs_pron_core::{Config, Corpus, Result};

/// Estimate how pronounceable a word is, relative to a reference word.
///
/// Settings default to the `RS_PRON_WORDLISTS`, `RS_PRON_NGRAM_WIDTH` and
/// `RS_PRON_REFERENCE` environment variables, then to the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "rs-pron", version, about, long_about = None)]
struct Args {
    /// Word to score (extra words are ignored)
    words: Vec<String>,

    /// Word list to train on, one word per line (repeatable)
    #[arg(long = "wordlist", value_name = "PATH")]
    word_lists: Vec<PathBuf>,

    /// Width of the n-grams (1 = single characters)
    #[arg(long)]
    ngram_width: Option<usize>,

    /// Word to compare against
    #[arg(long)]
    reference: Option<String>,
}

impl Args {
    /// Environment configuration overridden by the command line.
    ///
    /// Validation runs once every override is in place.
    fn config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;
        if !self.word_lists.is_empty() {
            config.word_lists = self.word_lists.clone();
        }
        if let Some(n) = self.ngram_width {
            config.ngram_width = n;
        }
        if let Some(reference) = &self.reference {
            config.reference_word = reference.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    // Train first: a missing word list fails even without a word to score
    let corpus = Corpus::from_config(&args.config()?)?;

    let Some(word) = args.words.first() else {
        return Ok(());
    };
    if args.words.len() > 1 {
        warn!("only '{}' is scored, {} extra argument(s) ignored", word, args.words.len() - 1);
    }

    writeln!(out, "{}", corpus.relative_to_reference(word)?)?;
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rs_pron_core::PronError;

    const WORDS: &[&str] = &["english", "spanish", "finnish", "strawberry", "banana", "orange"];

    fn word_list() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in WORDS {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    fn run_with(list: &std::path::Path, extra: &[&str]) -> Result<String> {
        let mut argv = vec!["rs-pron", "--wordlist", list.to_str().unwrap()];
        argv.extend_from_slice(extra);
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn no_word_prints_nothing() {
        let list = word_list();
        assert_eq!(run_with(list.path(), &[]).unwrap(), "");
    }

    #[test]
    fn one_word_prints_relative_score() {
        let list = word_list();
        let expected = Corpus::train(&[list.path()], 1).unwrap().relative_to_reference("banana").unwrap();
        assert_eq!(run_with(list.path(), &["banana"]).unwrap(), format!("{expected}\n"));
    }

    #[test]
    fn extra_words_are_ignored() {
        let list = word_list();
        let single = run_with(list.path(), &["banana"]).unwrap();
        assert_eq!(run_with(list.path(), &["banana", "zxcvqwmp", "orange"]).unwrap(), single);
    }

    #[test]
    fn flags_override_reference() {
        let list = word_list();
        assert_eq!(run_with(list.path(), &["--reference", "banana", "banana"]).unwrap(), "0\n");
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            run_with(&missing, &[]),
            Err(PronError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn zero_width_flag_fails_validation() {
        let list = word_list();
        assert!(matches!(
            run_with(list.path(), &["--ngram-width", "0", "banana"]),
            Err(PronError::InvalidNgramWidth(0))
        ));
    }
}
