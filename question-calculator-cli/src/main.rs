use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use question_calculator::document::split_questions;
use question_calculator::interpreter::processor::process;
use std::fs;
use std::path::PathBuf;

/// Evaluates the questions in a document and reports one answer per question
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The document containing '----'-separated questions
    #[clap(default_value = "input.txt")]
    input: PathBuf,

    /// Where to write the per-question report
    #[clap(short, long, default_value = "output.txt")]
    output: PathBuf,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    println!("Question calculator - reading questions separated by '----'");

    let document = fs::read_to_string(&arguments.input).with_context(|| {
        format!(
            "Failed to read input document {}",
            arguments.input.display()
        )
    })?;
    if document.trim().is_empty() {
        bail!("Empty input document: {}", arguments.input.display());
    }

    let questions = split_questions(&document);
    info!("Found {} question(s)", questions.len());

    let mut report = String::new();
    for (number, question) in questions.iter().enumerate() {
        let number = number + 1;
        println!("Question: {number}");

        report.push_str(&format!("Question: {number}\n"));
        report.push_str(&question.text);
        report.push('\n');

        match process(question) {
            Ok(answer) => {
                println!("{answer:.12}");
                report.push_str(&format!("Answer: {answer:.12}\n"));
            }
            Err(error) => {
                eprintln!("Error: {error}");
                report.push_str(&format!("Error: {error}\n"));
            }
        }
        report.push_str("----------------------------------------\n");
    }

    fs::write(&arguments.output, report).with_context(|| {
        format!(
            "Failed to write report to {}",
            arguments.output.display()
        )
    })?;
    println!("\nResults saved to {}", arguments.output.display());
    Ok(())
}
