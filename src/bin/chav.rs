//! Command-line interface for chav
//! This binary lexes and parses a chav source file and prints the result in one of the
//! supported output formats.
//!
//! Usage:
//!   chav `<path>` [--format `<format>`] [--config `<file>`]   - Print tokens or the tree
//!   chav --list-formats                                    - List all output formats

use chav::chav::formats::{FormatOptions, OutputFormat, Stage, TreevizOptions};
use chav::chav::{lexing, parsing};
use chav_config::{ChavConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command};

fn main() {
    let matches = Command::new("chav")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex and parse chav source files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the chav source file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: ast-treeviz)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in configuration"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches);
    let path = matches
        .get_one::<String>("path")
        .unwrap_or_else(|| fail("a source path is required"));
    handle_execute_command(path, &config);
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> ChavConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(&format!("invalid --format: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("configuration error: {}", e)))
}

/// Handle the execute command
fn handle_execute_command(path: &str, config: &ChavConfig) {
    let format: OutputFormat = config.output.format.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in OutputFormat::ALL {
            eprintln!("  {} - {}", format, format.description());
        }
        std::process::exit(1);
    });

    let source = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("cannot read {}: {}", path, e)));

    let tokens = lexing::lex(&source).unwrap_or_else(|e| fail(&e.to_string()));

    let formatted = match format.stage() {
        Stage::Tokens => format.render_tokens(&tokens),
        Stage::Ast => {
            let program = parsing::parse(&tokens).unwrap_or_else(|e| fail(&e.to_string()));
            let options = FormatOptions {
                treeviz: TreevizOptions {
                    max_label_width: config.output.treeviz.max_label_width,
                    show_icons: config.output.treeviz.show_icons,
                },
                pretty_json: config.output.json.pretty,
            };
            format.render_program(&program, &options)
        }
    }
    .unwrap_or_else(|e| fail(&e.to_string()));

    print!("{}", formatted);
    if !formatted.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format);
        println!("    {}", format.description());
        println!();
    }
}
