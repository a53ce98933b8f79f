//! CLI command definitions

use crate::application::{Intent, Mode};
use crate::domain::DateToken;
use crate::error::{JotError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(about = "A command-line journal for simple daily records", long_about = None)]
#[command(version)]
#[command(after_help = DATE_HELP)]
pub struct Cli {
    /// Entry text to add for today
    #[arg(value_name = "ENTRY")]
    pub entry: Option<String>,

    /// Add blank lines between entries when listing
    #[arg(short = 'x', long, global = true)]
    pub expand: bool,

    /// Journal file (default: config `journal_file`, else the user data directory)
    #[arg(long, env = "JOT_FILE", global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an entry: add [for] <date> "<entry>" | add "<entry>"
    Add {
        #[arg(value_name = "WORDS", required = true)]
        words: Vec<String>,
    },

    /// List entries: list all | list [for] <date> | list from <from> [to <to>] [inc|inclusive]
    List {
        #[arg(value_name = "WORDS")]
        words: Vec<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

const DATE_HELP: &str = "\
Dates are either yyyy-mm-dd or one of:
  today, yesterday, this-week, this-month, this-year, last-week,
  last-month, day-N, month-N, year-N, N-days-ago
Anything else is treated as today.";

/// Build an add intent from the words after `add`.
///
/// `for <date> <entry...>` always takes the second word as the date. Without
/// `for`, the first word is a date only when it reads as one; otherwise every
/// word belongs to the entry.
pub fn parse_add_words(words: &[String]) -> Result<Intent> {
    let (date_token, text) = match words {
        [] => return Err(JotError::Usage("Missing entry text".to_string())),
        [first, date, rest @ ..] if is_word(first, "for") => {
            if rest.is_empty() {
                return Err(JotError::Usage(format!(
                    "Missing entry text after 'for {}'",
                    date
                )));
            }
            (Some(date.clone()), rest.join(" "))
        }
        [first] if is_word(first, "for") => {
            return Err(JotError::Usage("Missing date after 'for'".to_string()))
        }
        [first, rest @ ..] if !rest.is_empty() && looks_like_date(first) => {
            (Some(first.clone()), rest.join(" "))
        }
        _ => (None, words.join(" ")),
    };

    Ok(Intent {
        mode: Mode::Add,
        date_token,
        entry_text: Some(text),
        ..Intent::default()
    })
}

/// Build a list intent from the words after `list`
pub fn parse_list_words(words: &[String]) -> Result<Intent> {
    let mut intent = Intent {
        mode: Mode::List,
        ..Intent::default()
    };

    match words {
        [] => {}
        [only] if is_word(only, "all") => intent.all = true,
        [first, date] if is_word(first, "for") => intent.date_token = Some(date.clone()),
        [first, rest @ ..] if is_word(first, "from") => {
            let (from, rest) = rest
                .split_first()
                .ok_or_else(|| JotError::Usage("Missing date after 'from'".to_string()))?;
            intent.from_token = Some(from.clone());

            let rest = match rest {
                [to_word, to, tail @ ..] if is_word(to_word, "to") => {
                    intent.to_token = Some(to.clone());
                    tail
                }
                [to_word] if is_word(to_word, "to") => {
                    return Err(JotError::Usage("Missing date after 'to'".to_string()))
                }
                other => other,
            };

            match rest {
                [] => {}
                [inc] if is_word(inc, "inc") || is_word(inc, "inclusive") => {
                    intent.inclusive = true
                }
                other => return Err(unexpected(other)),
            }
        }
        [date] if !is_word(date, "for") => intent.date_token = Some(date.clone()),
        other => return Err(unexpected(other)),
    }

    Ok(intent)
}

fn is_word(word: &str, expected: &str) -> bool {
    word.eq_ignore_ascii_case(expected)
}

fn looks_like_date(word: &str) -> bool {
    !word.trim().is_empty() && !matches!(DateToken::parse(word), DateToken::Unrecognized(_))
}

fn unexpected(words: &[String]) -> JotError {
    JotError::Usage(format!("Unexpected arguments: {}", words.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bare_entry() {
        let cli = Cli::parse_from(["jot", "An entry"]);
        assert_eq!(cli.entry.as_deref(), Some("An entry"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_global_expand_before_subcommand() {
        let cli = Cli::parse_from(["jot", "-x", "list", "all"]);
        assert!(cli.expand);
        match cli.command {
            Some(Commands::List { words }) => assert_eq!(words, vec!["all"]),
            other => panic!("Expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_add_entry_only() {
        let intent = parse_add_words(&words(&["Went for a walk"])).unwrap();
        assert_eq!(intent.mode, Mode::Add);
        assert_eq!(intent.date_token, None);
        assert_eq!(intent.entry_text.as_deref(), Some("Went for a walk"));
    }

    #[test]
    fn test_add_for_date() {
        let intent = parse_add_words(&words(&["for", "yesterday", "Late entry"])).unwrap();
        assert_eq!(intent.date_token.as_deref(), Some("yesterday"));
        assert_eq!(intent.entry_text.as_deref(), Some("Late entry"));
    }

    #[test]
    fn test_add_for_keeps_unrecognized_date() {
        let intent = parse_add_words(&words(&["for", "someday", "text"])).unwrap();
        assert_eq!(intent.date_token.as_deref(), Some("someday"));
    }

    #[test]
    fn test_add_date_without_for() {
        let intent = parse_add_words(&words(&["2015-06-01", "Dated", "entry"])).unwrap();
        assert_eq!(intent.date_token.as_deref(), Some("2015-06-01"));
        assert_eq!(intent.entry_text.as_deref(), Some("Dated entry"));
    }

    #[test]
    fn test_add_unquoted_words_are_all_text() {
        let intent = parse_add_words(&words(&["walked", "the", "dog"])).unwrap();
        assert_eq!(intent.date_token, None);
        assert_eq!(intent.entry_text.as_deref(), Some("walked the dog"));
    }

    #[test]
    fn test_add_single_keyword_is_text() {
        let intent = parse_add_words(&words(&["yesterday"])).unwrap();
        assert_eq!(intent.date_token, None);
        assert_eq!(intent.entry_text.as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_add_missing_pieces() {
        assert!(matches!(parse_add_words(&[]), Err(JotError::Usage(_))));
        assert!(matches!(
            parse_add_words(&words(&["for"])),
            Err(JotError::Usage(_))
        ));
        assert!(matches!(
            parse_add_words(&words(&["for", "today"])),
            Err(JotError::Usage(_))
        ));
    }

    #[test]
    fn test_list_defaults_to_today() {
        let intent = parse_list_words(&[]).unwrap();
        assert_eq!(intent.mode, Mode::List);
        assert!(!intent.all);
        assert_eq!(intent.date_token, None);
        assert_eq!(intent.from_token, None);
    }

    #[test]
    fn test_list_all() {
        assert!(parse_list_words(&words(&["all"])).unwrap().all);
        assert!(parse_list_words(&words(&["ALL"])).unwrap().all);
    }

    #[test]
    fn test_list_for_date() {
        let with_for = parse_list_words(&words(&["for", "last-week"])).unwrap();
        let without = parse_list_words(&words(&["last-week"])).unwrap();
        assert_eq!(with_for.date_token.as_deref(), Some("last-week"));
        assert_eq!(with_for, without);
    }

    #[test]
    fn test_list_from() {
        let intent = parse_list_words(&words(&["from", "this-month"])).unwrap();
        assert_eq!(intent.from_token.as_deref(), Some("this-month"));
        assert_eq!(intent.to_token, None);
        assert!(!intent.inclusive);
    }

    #[test]
    fn test_list_from_to_inclusive() {
        let intent =
            parse_list_words(&words(&["from", "2015-06-01", "to", "2015-06-03", "inclusive"]))
                .unwrap();
        assert_eq!(intent.from_token.as_deref(), Some("2015-06-01"));
        assert_eq!(intent.to_token.as_deref(), Some("2015-06-03"));
        assert!(intent.inclusive);

        let short = parse_list_words(&words(&["from", "2015-06-01", "to", "2015-06-03", "inc"]))
            .unwrap();
        assert_eq!(intent, short);
    }

    #[test]
    fn test_list_from_inc_without_to() {
        let intent = parse_list_words(&words(&["from", "last-week", "inc"])).unwrap();
        assert!(intent.inclusive);
        assert_eq!(intent.to_token, None);
    }

    #[test]
    fn test_list_rejects_bad_grammar() {
        for bad in [
            vec!["from"],
            vec!["from", "today", "to"],
            vec!["from", "today", "until", "tomorrow"],
            vec!["for"],
            vec!["today", "yesterday"],
            vec!["all", "today"],
        ] {
            assert!(
                matches!(parse_list_words(&words(&bad)), Err(JotError::Usage(_))),
                "expected usage error for {:?}",
                bad
            );
        }
    }
}
