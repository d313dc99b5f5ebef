//! HideField CLI
//!
//! Command-line interface for annotating datamodel documents and for
//! inspecting what a single visibility annotation compiles to.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hidefield::{
    annotate, compile_hide, compile_show, load_datamodel, render, Context, ContextSet, Exclusion,
    VALID_CONTEXTS,
};

#[derive(Parser)]
#[command(name = "hidefield")]
#[command(about = "Compile field visibility annotations into @HideField directives")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate every field of a datamodel with its exclusion directive
    Annotate {
        /// Datamodel JSON file
        schema: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Emit the pass report as JSON on stderr instead of text
        #[arg(long)]
        json: bool,

        /// Suppress the summary line, only show warnings
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show the directive a single annotation compiles to
    Explain {
        /// Compile as an inclusive show(...) annotation
        #[arg(long, conflicts_with = "hide", required_unless_present = "hide")]
        show: bool,

        /// Compile as an exclusive hide(...) annotation
        #[arg(long, conflicts_with = "show", required_unless_present = "show")]
        hide: bool,

        /// Contexts named true (e.g. query read); none means a
        /// zero-argument invocation
        contexts: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Annotate {
            schema,
            output,
            pretty,
            json,
            quiet,
        } => run_annotate(&schema, output, pretty, json, quiet),

        Commands::Explain {
            show,
            hide: _,
            contexts,
        } => run_explain(show, &contexts),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_annotate(
    schema_path: &PathBuf,
    output: Option<PathBuf>,
    pretty: bool,
    json: bool,
    quiet: bool,
) -> Result<(), u8> {
    let mut datamodel = load_datamodel(schema_path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let report = annotate(&mut datamodel);

    if json {
        match serde_json::to_string(&report) {
            Ok(line) => eprintln!("{}", line),
            Err(e) => eprintln!("Error serializing report: {}", e),
        }
    } else {
        for warning in &report.warnings {
            eprintln!("{}", warning);
        }
        if !quiet {
            eprintln!("{}", report.summary());
        }
    }

    let json_output = if pretty {
        serde_json::to_string_pretty(&datamodel)
    } else {
        serde_json::to_string(&datamodel)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_explain(show: bool, context_names: &[String]) -> Result<(), u8> {
    let mut set = ContextSet::new();
    for name in context_names {
        match Context::parse(name) {
            Some(context) => set.insert(context),
            None => {
                eprintln!(
                    "Error: unknown context \"{}\" (expected one of: {})",
                    name,
                    VALID_CONTEXTS.join(", ")
                );
                return Err(2);
            }
        }
    }

    let directive = if show {
        compile_show(set)
    } else if context_names.is_empty() {
        // hide() with no arguments: the hide-everywhere shortcut.
        Exclusion::hide_everywhere()
    } else {
        compile_hide(set)
    };

    match render(&directive) {
        Some(comment) => println!("{}", comment),
        None => println!("(no directive)"),
    }

    Ok(())
}
