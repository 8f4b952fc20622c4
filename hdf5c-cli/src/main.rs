//! Command-line interface for hdf5c
//! This binary prints the token stream of C sources, with HDF5 types highlighted as keywords.
//!
//! Usage:
//!   hdf5c tokenize `<path>` [--lexer `<name>`] [--format `<format>`] [--config `<file>`]
//!   hdf5c lexers [--config `<file>`]                - List the registered lexers
//!
//! A path of `-` reads the source from stdin. Settings come from the built-in defaults, then the
//! per-user file (`$XDG_CONFIG_HOME/hdf5c/config.toml` on Linux), then `--config`.

use clap::{Arg, ArgMatches, Command};
use hdf5c_config::{Hdf5cConfig, Loader, OutputFormat};
use hdf5c_lexer::lex::lexing::{hdf5c_with_keywords, CLexer, LexError, Lexer, ReservedWords};
use hdf5c_lexer::lex::registry::LexerRegistry;
use hdf5c_lexer::lex::token::{detokenize, SpannedToken, ToTagString};
use log::debug;
use std::io::Read;

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the built-in defaults")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("hdf5c")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize C sources with HDF5 types highlighted as keywords")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Print the token stream of a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("lexer")
                        .long("lexer")
                        .short('l')
                        .help("Lexer name or alias (default: chosen from the file name)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: tag, json or source"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("lexers")
                .about("List the available lexers")
                .arg(config_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => handle_tokenize_command(tokenize_matches),
        Some(("lexers", lexers_matches)) => handle_lexers_command(lexers_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<Hdf5cConfig, String> {
    let mut loader = Loader::new().with_user_file();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Ok(Some(format)) = matches.try_get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .map_err(|e| e.to_string())?;
    }
    loader
        .build()
        .map_err(|e| format!("invalid configuration: {}", e))
}

/// The C lexer plus the HDF5 lexer with the configured keyword set
fn build_registry(config: &Hdf5cConfig) -> LexerRegistry {
    let mut registry = LexerRegistry::new();
    registry.register(CLexer::new());
    registry.register(hdf5c_with_keywords(ReservedWords::new(
        config.lexer.extra_keywords.iter().cloned(),
    )));
    registry
}

fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))
    }
}

fn select_lexer<'r>(
    registry: &'r LexerRegistry,
    config: &Hdf5cConfig,
    requested: Option<&String>,
    path: &str,
) -> Result<&'r dyn Lexer, LexError> {
    if let Some(name) = requested {
        return registry.get(name);
    }
    if path != "-" {
        if let Ok(lexer) = registry.for_filename(path) {
            return Ok(lexer);
        }
    }
    registry.get(&config.lexer.default)
}

fn format_tokens(tokens: &[SpannedToken], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Tag => Ok(tokens
            .iter()
            .map(|token| format!("{}\n", token.to_tag_string()))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map(|json| format!("{}\n", json))
            .map_err(|e| format!("failed to format tokens: {}", e)),
        OutputFormat::Source => Ok(detokenize(tokens)),
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(matches: &ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;
    let registry = build_registry(&config);

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = read_source(path)?;

    let lexer = select_lexer(&registry, &config, matches.get_one::<String>("lexer"), path)?;
    debug!("tokenizing {} with lexer {}", path, lexer.name());

    let tokens = lexer.tokenize_all(&source)?;
    print!("{}", format_tokens(&tokens, config.output.format)?);
    Ok(())
}

/// Handle the lexers command
fn handle_lexers_command(matches: &ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;
    let registry = build_registry(&config);

    println!("Available lexers:\n");
    for lexer in registry.lexers() {
        println!("  {}", lexer.name());
        println!("    {}", lexer.description());
        println!("    aliases:   {}", lexer.aliases().join(", "));
        println!("    filenames: {}", lexer.filenames().join(", "));
        println!();
    }
    Ok(())
}
