// SPDX-License-Identifier: MIT
//
// n-inspect — browse utility classes and generate arbitrary-value CSS.
//
// This is the binary that wires the crates together:
//
//   n-theme     → theme description, config layering, class catalogue
//   n-search    → fuzzy index + picker over the catalogue
//   n-css       → `prefix-[value]` → CSS declarations, style rules
//   n-inspector → class list, undo/redo, config store, session state
//
// Subcommands:
//
//   catalogue               every class name the theme yields
//   search QUERY            ranked catalogue matches with scores
//   generate CLASS...       style rules for arbitrary-value classes
//   session                 line-oriented inspector over stdin
//
// A session reads one command per line and prints the resulting state:
//
//   stdin → parse_command → Inspector → print results / classes / css

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use n_css::StyleSheet;
use n_inspector::{ConfigStore, Inspector};
use n_search::{SearchIndex, SearchOptions};
use n_theme::builtin::default_theme;
use n_theme::{ThemeConfig, ThemeDescription, build_catalogue};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "n-inspect", version, about = "Utility-class catalogue, search and CSS generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Theme config (JSON) layered over the built-in theme
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every class name, one per line
    Catalogue,

    /// Fuzzy-search the catalogue
    Search {
        query: String,

        /// Highest score that still matches (0.0 exact .. 1.0 anything)
        #[arg(long)]
        threshold: Option<f64>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the style rule for each arbitrary-value class
    Generate {
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Interactive inspector over stdin (type `help` for commands)
    Session {
        /// Class attribute of the element to start with
        #[arg(long)]
        classes: Option<String>,
    },
}

// ─── Setup ──────────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// The built-in theme with `config` layered over it.
fn load_theme(config: Option<&Path>) -> Result<ThemeDescription> {
    let base = default_theme();
    let Some(path) = config else {
        return Ok(base);
    };
    let config = ThemeConfig::from_path(path)
        .with_context(|| format!("loading theme config {}", path.display()))?;
    Ok(config.resolve(&base))
}

/// The config store a session starts from: the file's text, or the default.
fn load_store(config: Option<&Path>) -> Result<ConfigStore> {
    let Some(path) = config else {
        return Ok(ConfigStore::new());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading theme config {}", path.display()))?;
    ConfigStore::from_text(&text).with_context(|| format!("parsing theme config {}", path.display()))
}

fn search_options(threshold: Option<f64>, limit: Option<usize>) -> SearchOptions {
    let mut options = SearchOptions::default();
    if let Some(threshold) = threshold {
        options = options.with_threshold(threshold);
    }
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }
    options
}

// ─── One-shot commands ──────────────────────────────────────────────────────

fn run_catalogue(theme: &ThemeDescription, out: &mut impl Write) -> Result<()> {
    for name in &build_catalogue(theme) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn run_search(
    theme: &ThemeDescription,
    query: &str,
    options: SearchOptions,
    out: &mut impl Write,
) -> Result<()> {
    let index = SearchIndex::new(build_catalogue(theme).into_names(), options);
    for hit in index.search_hits(query) {
        writeln!(out, "{:.3}  {}", hit.score, hit.item)?;
    }
    Ok(())
}

fn run_generate(classes: &[String], out: &mut impl Write) -> Result<()> {
    let mut sheet = StyleSheet::new();
    for class in classes {
        if !sheet.inject(class) && !sheet.contains(class) {
            log::warn!("{class:?} yields no CSS");
        }
    }
    write!(out, "{}", sheet.render())?;
    Ok(())
}

// ─── Session ────────────────────────────────────────────────────────────────

const HELP: &str = "\
commands:
  select CLASSES   select an element with these classes
  type TEXT        type TEXT into the search box
  search QUERY     replace the search query
  backspace        delete the last typed character
  down / up        move the highlight
  enter            toggle (or add) the highlighted class
  toggle CLASS     switch a class on/off
  add CLASS        add a class
  undo / redo      step through class changes
  classes          show the selected element's classes
  css              show injected style rules
  config [JSON]    show or replace the theme config
  help             show this text
  quit             leave the session";

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Select(&'a str),
    Type(&'a str),
    Search(&'a str),
    Backspace,
    Down,
    Up,
    Enter,
    Toggle(&'a str),
    Add(&'a str),
    Undo,
    Redo,
    Classes,
    Css,
    Config(Option<&'a str>),
    Help,
    Quit,
}

/// Why a line isn't a command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError<'a> {
    Unknown(&'a str),
    MissingArgument(&'a str),
}

fn parse_command(line: &str) -> Result<Option<Command<'_>>, ParseError<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));
    let arg = |name| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument(name))
        } else {
            Ok(rest)
        }
    };

    let command = match word {
        "select" => Command::Select(rest),
        "type" => Command::Type(arg("type")?),
        "search" => Command::Search(rest),
        "backspace" => Command::Backspace,
        "down" => Command::Down,
        "up" => Command::Up,
        "enter" => Command::Enter,
        "toggle" => Command::Toggle(arg("toggle")?),
        "add" => Command::Add(arg("add")?),
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "classes" => Command::Classes,
        "css" => Command::Css,
        "config" => Command::Config((!rest.is_empty()).then_some(rest)),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::Unknown(other)),
    };
    Ok(Some(command))
}

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn print_results(insp: &Inspector, out: &mut impl Write) -> io::Result<()> {
    let picker = insp.picker();
    if picker.results().is_empty() {
        return writeln!(out, "(no results)");
    }
    for (i, name) in picker.results().iter().enumerate() {
        let marker = if picker.highlighted() == Some(i) { '>' } else { ' ' };
        writeln!(out, "{marker} {name}")?;
    }
    Ok(())
}

fn print_classes(insp: &Inspector, out: &mut impl Write) -> io::Result<()> {
    let Some(list) = insp.selection() else {
        return writeln!(out, "no element selected");
    };
    for entry in list.entries() {
        let mark = if entry.active { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {}", entry.name)?;
    }
    writeln!(out, "class=\"{}\"", list.attr())
}

fn run_command(insp: &mut Inspector, command: Command<'_>, out: &mut impl Write) -> Result<Flow> {
    match command {
        Command::Select(attr) => {
            insp.select(attr);
            print_classes(insp, out)?;
        }
        Command::Type(text) => {
            for ch in text.chars() {
                insp.type_char(ch);
            }
            print_results(insp, out)?;
        }
        Command::Search(query) => {
            insp.set_query(query);
            print_results(insp, out)?;
        }
        Command::Backspace => {
            insp.backspace();
            print_results(insp, out)?;
        }
        Command::Down => {
            insp.move_down();
            print_results(insp, out)?;
        }
        Command::Up => {
            insp.move_up();
            print_results(insp, out)?;
        }
        Command::Enter => match insp.accept() {
            Some(_) => print_classes(insp, out)?,
            None => writeln!(out, "nothing highlighted")?,
        },
        Command::Toggle(name) => {
            if !insp.toggle(name) {
                writeln!(out, "{name}: not in the class list")?;
            }
            print_classes(insp, out)?;
        }
        Command::Add(name) => {
            insp.add(name);
            print_classes(insp, out)?;
        }
        Command::Undo => {
            if !insp.undo() {
                writeln!(out, "nothing to undo")?;
            }
            print_classes(insp, out)?;
        }
        Command::Redo => {
            if !insp.redo() {
                writeln!(out, "nothing to redo")?;
            }
            print_classes(insp, out)?;
        }
        Command::Classes => print_classes(insp, out)?,
        Command::Css => {
            if insp.styles().is_empty() {
                writeln!(out, "(no rules)")?;
            } else {
                write!(out, "{}", insp.styles().render())?;
            }
        }
        Command::Config(None) => writeln!(out, "{}", insp.config().text())?,
        Command::Config(Some(text)) => match insp.update_config(text) {
            Ok(()) => writeln!(out, "config updated")?,
            Err(e) => writeln!(out, "config rejected: {e}")?,
        },
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn run_session(insp: &mut Inspector, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading session input")?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if run_command(insp, command, out)? == Flow::Quit {
                    break;
                }
            }
            Err(ParseError::Unknown(word)) => writeln!(out, "unknown command {word:?} (try `help`)")?,
            Err(ParseError::MissingArgument(word)) => writeln!(out, "{word}: missing argument")?,
        }
        out.flush()?;
    }
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalogue => run_catalogue(&load_theme(config)?, &mut out),
        Commands::Search {
            query,
            threshold,
            limit,
        } => run_search(
            &load_theme(config)?,
            &query,
            search_options(threshold, limit),
            &mut out,
        ),
        Commands::Generate { classes } => run_generate(&classes, &mut out),
        Commands::Session { classes } => {
            let store = load_store(config)?;
            let theme = store.config().resolve(&default_theme());
            let index = SearchIndex::new(build_catalogue(&theme).into_names(), SearchOptions::default());
            let mut insp = Inspector::with_config(index, store);
            if let Some(attr) = classes {
                insp.select(&attr);
            }
            run_session(&mut insp, io::stdin().lock(), &mut out)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("n-inspect: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn session_index() -> SearchIndex {
        SearchIndex::new(["p-4", "m-2", "bg-red-500", "text-xl"], SearchOptions::default())
    }

    /// Run `script` through a fresh session and return everything printed.
    fn session(script: &str) -> String {
        let mut insp = Inspector::new(session_index());
        let mut out = Vec::new();
        run_session(&mut insp, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ── Command line ──────────────────────────────────────────────────────

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["n-inspect", "-vv", "search", "bg", "--limit", "5"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Search { query, limit, threshold } => {
                assert_eq!(query, "bg");
                assert_eq!(limit, Some(5));
                assert_eq!(threshold, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["n-inspect", "catalogue", "--config", "t.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("t.json")));
    }

    #[test]
    fn cli_generate_needs_a_class() {
        assert!(Cli::try_parse_from(["n-inspect", "generate"]).is_err());
    }

    #[test]
    fn search_options_override_defaults() {
        let options = search_options(Some(0.2), None);
        assert_eq!(options.threshold, 0.2);
        assert_eq!(options.limit, SearchOptions::default().limit);
    }

    // ── One-shot commands ─────────────────────────────────────────────────

    #[test]
    fn load_theme_without_config_is_builtin() {
        assert_eq!(load_theme(None).unwrap(), default_theme());
    }

    #[test]
    fn load_theme_missing_file_errors() {
        let err = load_theme(Some(Path::new("/nonexistent/n-inspect.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/n-inspect.json"));
    }

    #[test]
    fn catalogue_prints_sorted_names() {
        let theme = ThemeDescription::from_json(r##"{ "colors": { "red": "#f00" } }"##).unwrap();
        let mut out = Vec::new();
        run_catalogue(&theme, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"bg-red"));
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn search_prints_scores() {
        let theme = default_theme();
        let mut out = Vec::new();
        run_search(&theme, "bg-red-500", SearchOptions::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("0.000  bg-red-500\n"));
    }

    #[test]
    fn generate_prints_rules() {
        let mut out = Vec::new();
        let classes = ["w-[3px]".to_string(), "p-4".to_string(), "w-[3px]".to_string()];
        run_generate(&classes, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ".w-\\[3px\\] { width: 3px }\n");
    }

    // ── Session parsing ───────────────────────────────────────────────────

    #[test]
    fn parse_words_and_arguments() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("undo"), Ok(Some(Command::Undo)));
        assert_eq!(parse_command("select p-4  m-2 "), Ok(Some(Command::Select("p-4  m-2"))));
        assert_eq!(parse_command("add w-[3px]"), Ok(Some(Command::Add("w-[3px]"))));
        assert_eq!(parse_command("config"), Ok(Some(Command::Config(None))));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_command("frobnicate"), Err(ParseError::Unknown("frobnicate")));
        assert_eq!(parse_command("toggle"), Err(ParseError::MissingArgument("toggle")));
    }

    // ── Session ───────────────────────────────────────────────────────────

    #[test]
    fn session_search_and_enter() {
        let out = session("select p-4\nsearch bg-red\nenter\n");
        assert!(out.contains("> bg-red-500\n"));
        assert!(out.ends_with("[x] p-4\n[x] bg-red-500\nclass=\"p-4 bg-red-500\"\n"));
    }

    #[test]
    fn session_toggle_and_undo() {
        let out = session("select p-4 m-2\ntoggle p-4\nundo\n");
        assert!(out.contains("[ ] p-4\n[x] m-2\nclass=\"m-2\"\n"));
        assert!(out.ends_with("[x] p-4\n[x] m-2\nclass=\"p-4 m-2\"\n"));
    }

    #[test]
    fn session_add_injects_css() {
        let out = session("select p-4\nadd py-[20px]\ncss\n");
        assert!(out.ends_with(".py-\\[20px\\] { padding-top: 20px;\npadding-bottom: 20px }\n"));
    }

    #[test]
    fn session_without_selection() {
        let out = session("toggle p-4\nundo\n");
        assert!(out.contains("p-4: not in the class list\nno element selected\n"));
        assert!(out.ends_with("nothing to undo\nno element selected\n"));
    }

    #[test]
    fn session_rejects_bad_config() {
        let out = session("config {oops\nconfig\n");
        assert!(out.starts_with("config rejected: "));
        assert!(out.contains("clifford"));
    }

    #[test]
    fn session_stops_at_quit() {
        let out = session("quit\nclasses\n");
        assert_eq!(out, "");
    }

    #[test]
    fn session_reports_unknown_commands() {
        let out = session("jump\n");
        assert_eq!(out, "unknown command \"jump\" (try `help`)\n");
    }
}
