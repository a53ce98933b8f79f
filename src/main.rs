use chrono::Local;
use clap::Parser;
use jot::application::{
    AddEntryService, Command, ConfigService, Intent, ListEntriesService, Mode,
};
use jot::cli::{format_entry_list, parse_add_words, parse_list_words, Cli, Commands};
use jot::domain::DATE_FORMAT;
use jot::error::JotError;
use jot::infrastructure::{logging, Config, FileJournalStore};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JotError> {
    let config_path = Config::default_path();
    debug!("Config file: {:?}", config_path);

    let mut intent = match cli.command {
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(config_path);

            return if list {
                let config = service.list()?;
                println!(
                    "journal_file = {}",
                    config
                        .journal_file
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
                println!("wrap_width = {}", config.wrap_width);
                println!("expand = {}", config.expand);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: jot config [--list | <key> [<value>]]");
                println!("Valid keys: journal_file, wrap_width, expand");
                Ok(())
            };
        }
        Some(Commands::Add { words }) => parse_add_words(&words)?,
        Some(Commands::List { words }) => parse_list_words(&words)?,
        None => match cli.entry {
            Some(text) => Intent {
                mode: Mode::Add,
                entry_text: Some(text),
                ..Intent::default()
            },
            None => {
                println!("jot - A command-line journal for simple daily records");
                println!("Use --help for usage information");
                return Ok(());
            }
        },
    };
    intent.expand = cli.expand;

    let config = Config::load_from(&config_path)?;
    let store = FileJournalStore::new(config.journal_path(cli.file.as_deref()));
    debug!("Journal file: {:?}", store.path);

    let today = Local::now().date_naive();
    match intent.resolve(today)? {
        Command::Add { date, text } => {
            let entry = AddEntryService::new(store).execute(date, &text)?;
            println!("Added entry for {}", entry.date.format(DATE_FORMAT));
        }
        Command::List { range } => {
            let entries = ListEntriesService::new(store).execute(range)?;
            let expand = intent.expand || config.expand;
            print!("{}", format_entry_list(&entries, config.wrap_width, expand));
        }
    }

    Ok(())
}
