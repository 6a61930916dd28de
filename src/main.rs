//! codepad - playground editor core
//!
//! Highlights Python, Java and C++ source into overlay markup or a
//! colored terminal preview, and manages the on-device script store.

mod backend;
mod config;
mod error;
mod gutter;
mod highlight;
mod overlay;
mod render;
mod session;
mod store;

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use config::Config;
use error::{CodepadError, Result};
use highlight::LanguageId;
use render::ansi;
use session::Session;
use store::ScriptStore;

/// Parsed command line
struct Args {
    language: Option<LanguageId>,
    ansi: bool,
    gutter: bool,
    save: Option<String>,
    load: Option<String>,
    delete: Option<String>,
    list: bool,
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let argv: Vec<String> = env::args().skip(1).collect();

    if argv.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    if argv.iter().any(|a| a == "--version" || a == "-V") {
        print_version();
        return Ok(());
    }

    let args = parse_args(&argv)?;
    let config = Config::load();

    // Store subcommands that need no source text
    if args.list {
        let store = open_store(&config)?;
        let names = match args.language {
            Some(lang) => store.names_for(lang),
            None => store.names(),
        };
        for name in names {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(name) = &args.delete {
        let mut store = open_store(&config)?;
        store.delete(name)?;
        println!("Deleted '{}'.", name);
        return Ok(());
    }

    // Resolve the source text and its language
    let (text, detected) = if let Some(name) = &args.load {
        let mut store = open_store(&config)?;
        let text = store
            .get(name)
            .ok_or_else(|| CodepadError::ScriptNotFound(name.clone()))?
            .to_string();
        let lang = LanguageId::from_filename(name);
        if let Some(lang) = lang.or(args.language) {
            store.set_last_opened(lang, name)?;
        }
        (text, lang)
    } else {
        read_source(&args)?
    };

    let language = args
        .language
        .or(detected)
        .unwrap_or(config.default_language);

    let mut session = Session::new(language)?;

    if let Some(name) = &args.save {
        session.set_script_name(name);
        let stored = session.display_name();
        let mut store = open_store(&config)?;
        store.put(&stored, &text)?;
        store.set_last_opened(language, &stored)?;
        println!("Saved script '{}'.", stored);
        return Ok(());
    }

    let markup = session.highlight(&text).to_string();
    let show_gutter = args.gutter || config.show_line_numbers;

    if args.ansi {
        let theme = if config.dark_mode {
            ansi::Theme::Dark
        } else {
            ansi::Theme::Light
        };
        let preview = ansi::render(&text, &session.tokenize(&text), theme);
        if show_gutter {
            print_with_gutter(&preview);
        } else {
            print!("{}", preview);
        }
    } else {
        if show_gutter {
            println!("{}", session.gutter().markup());
        }
        print!("{}", markup);
    }

    Ok(())
}

/// Prefix each preview line with a padded line number
fn print_with_gutter(rendered: &str) {
    let line_count = rendered.lines().count().max(1);
    let digits = line_count.to_string().len().max(3);
    for (idx, line) in rendered.lines().enumerate() {
        println!("{:>width$} {}", idx + 1, line, width = digits);
    }
}

/// Parse the command line into an Args value
fn parse_args(argv: &[String]) -> Result<Args> {
    let mut args = Args {
        language: None,
        ansi: false,
        gutter: false,
        save: None,
        load: None,
        delete: None,
        list: false,
        file: None,
    };

    let mut i = 0;
    while i < argv.len() {
        let arg = &argv[i];
        match arg.as_str() {
            "-l" | "--lang" => {
                let value = option_value(argv, &mut i, arg)?;
                args.language = Some(LanguageId::from_name(&value));
            }
            "--ansi" => args.ansi = true,
            "--gutter" => args.gutter = true,
            "--save" => args.save = Some(option_value(argv, &mut i, arg)?),
            "--load" => args.load = Some(option_value(argv, &mut i, arg)?),
            "--delete" => args.delete = Some(option_value(argv, &mut i, arg)?),
            "--list" => args.list = true,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CodepadError::Message(format!(
                    "unknown option '{}' (try --help)",
                    arg
                )));
            }
            _ => {
                if args.file.is_some() {
                    return Err(CodepadError::Message(
                        "only one input file is supported".to_string(),
                    ));
                }
                args.file = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(args)
}

/// Fetch the value following an option flag
fn option_value(argv: &[String], i: &mut usize, flag: &str) -> Result<String> {
    *i += 1;
    argv.get(*i)
        .cloned()
        .ok_or_else(|| CodepadError::Message(format!("option '{}' needs a value", flag)))
}

/// Read source text from the input file, or stdin when none is given
fn read_source(args: &Args) -> Result<(String, Option<LanguageId>)> {
    match &args.file {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let detected = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(LanguageId::from_extension);
            Ok((text, detected))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok((text, None))
        }
    }
}

/// Open the script store at the configured or default location
fn open_store(config: &Config) -> Result<ScriptStore> {
    let path = config
        .store_path
        .clone()
        .or_else(ScriptStore::default_path)
        .ok_or_else(|| CodepadError::Message("cannot locate script store".to_string()))?;
    ScriptStore::open(path)
}

fn print_usage() {
    println!("codepad {} - playground editor core", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codepad [OPTIONS] [FILE]");
    println!();
    println!("Highlights the file (or stdin) and prints overlay markup.");
    println!("The language is detected from the file extension.");
    println!();
    println!("Options:");
    println!("  -l, --lang <name>    Force a language: python, java or cpp");
    println!("      --ansi           Colored terminal preview instead of markup");
    println!("      --gutter         Include the line-number gutter");
    println!("      --save <name>    Store the input under <name>");
    println!("      --load <name>    Highlight a stored script");
    println!("      --list           List stored script names");
    println!("      --delete <name>  Remove a stored script");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
}

fn print_version() {
    println!("codepad {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_basic_invocation() {
        let args = parse_args(&to_argv(&["--lang", "cpp", "--ansi", "main.cpp"])).unwrap();
        assert_eq!(args.language, Some(LanguageId::Cpp));
        assert!(args.ansi);
        assert_eq!(args.file, Some(PathBuf::from("main.cpp")));
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        assert!(parse_args(&to_argv(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_value() {
        assert!(parse_args(&to_argv(&["--save"])).is_err());
    }

    #[test]
    fn test_parse_rejects_second_file() {
        assert!(parse_args(&to_argv(&["a.py", "b.py"])).is_err());
    }
}
