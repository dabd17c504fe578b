//! answerclip - answer HTML to Slack mrkdwn

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use answerclip::{convert_answer_html, format_selection};

#[derive(Parser)]
#[command(name = "answerclip")]
#[command(version, about = "Convert answer HTML to Slack mrkdwn", long_about = None)]
#[command(after_help = "EXAMPLES:
    answerclip answer.html          Extract and format an answer snapshot
    answerclip -s notes.txt         Format raw text (selection path)
    cat page.html | answerclip -    Read the snapshot from stdin")]
struct Cli {
    /// Input file, or '-' for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Treat input as raw selected text instead of HTML
    #[arg(short, long)]
    selection: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = read_input(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    let output = if cli.selection {
        format_selection(&input)
    } else {
        convert_answer_html(&input)
    };

    println!("{output}");
    Ok(())
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}
