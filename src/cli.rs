use crate::tally;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evtally", version)]
#[command(
    about = "Count event actions in a JSON or NDJSON dump",
    long_about = "evtally reads an event dump (a JSON array, or one JSON record per line), counts how often each action occurs, and prints the counts sorted by action name."
)]
#[command(arg_required_else_help = true)]
#[command(after_long_help = "Examples:
  evtally count
  evtally count events_dump.json
  evtally count dump.ndjson --field kind --log .evtally/runs.ndjson
  evtally completion zsh > ~/.zsh/completions/_evtally
  evtally man > evtally.1")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Count occurrences of each action in an event dump",
        long_about = "Parse the dump as one JSON document, falling back to one record per line when that fails. Malformed lines and records without the field are skipped."
    )]
    #[command(after_long_help = "Examples:
  evtally count
  evtally count events_dump.json --field action
  evtally count --config ./tally.toml")]
    Count {
        #[arg(
            value_name = "FILE",
            help = "Event dump to read (default: [input].path from config, else events_dump.json)"
        )]
        input: Option<PathBuf>,
        #[arg(
            long,
            value_name = "NAME",
            help = "Record field to count (default: [count].field from config, else action)"
        )]
        field: Option<String>,
        #[arg(
            long,
            value_name = "PATH",
            help = "Path to config file (default: .evtally/config.toml when present)"
        )]
        config: Option<PathBuf>,
        #[arg(long, value_name = "PATH", help = "Append an NDJSON run summary to file")]
        log: Option<PathBuf>,
    },
    #[command(
        about = "Generate shell completion script",
        long_about = "Generate shell completion script for your shell. Redirect output to your shell completion directory."
    )]
    #[command(arg_required_else_help = true)]
    #[command(after_long_help = "Examples:
  evtally completion bash > ~/.local/share/bash-completion/completions/evtally
  evtally completion zsh > ~/.zsh/completions/_evtally
  evtally completion fish > ~/.config/fish/completions/evtally.fish")]
    Completion {
        #[arg(value_enum, value_name = "SHELL", help = "Target shell")]
        shell: Shell,
    },
    #[command(
        about = "Generate a man page",
        long_about = "Generate a roff man page for evtally."
    )]
    #[command(after_long_help = "Examples:
  evtally man > evtally.1
  evtally man --output docs/evtally.1")]
    Man {
        #[arg(
            long,
            value_name = "PATH",
            help = "Write man page to file (stdout when omitted)"
        )]
        output: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Count {
            input,
            field,
            config,
            log,
        } => tally::execute_tally(tally::TallyCommand {
            input,
            field,
            config,
            log,
        }),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Man { output } => {
            let man = clap_mangen::Man::new(Cli::command());
            match output {
                Some(path) => {
                    let mut bytes = Vec::new();
                    man.render(&mut bytes)?;
                    fs::write(path, bytes)?;
                }
                None => {
                    man.render(&mut io::stdout())?;
                }
            }
            Ok(())
        }
    }
}
