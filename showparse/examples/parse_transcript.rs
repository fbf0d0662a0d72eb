//! Transcript Parsing Example
//!
//! Reads a captured CLI session from disk and prints every topic the
//! chosen grammar knows about as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example parse_transcript -- --vendor cisco_ios --file switch1.log
//! ```
//!
//! Only some topics:
//! ```bash
//! cargo run --example parse_transcript -- --vendor aruba_aossw --file sw.log --topic modules
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use showparse::ShowParser;
use showparse::grammar::vendors;

#[derive(Debug)]
struct Args {
    vendor: String,
    file: Option<PathBuf>,
    topics: Vec<String>,
    commands: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let Some(file) = &args.file else {
        eprintln!("Error: --file is required");
        Args::print_help();
        std::process::exit(1);
    };

    let grammar = Arc::new(vendors::grammar(&args.vendor)?);
    let text = fs::read_to_string(file)?;
    let parser = ShowParser::new(grammar.clone(), text)?;

    println!("=== {} ({}) ===\n", parser.hostname(), grammar.name);

    if args.commands {
        println!("Commands:");
        for command in parser.commands() {
            println!("  {}", command);
        }
        println!();
    }

    let topics: Vec<String> = if args.topics.is_empty() {
        grammar.topic_names().map(str::to_string).collect()
    } else {
        args.topics.clone()
    };

    for topic in &topics {
        println!("{}", "=".repeat(60));
        println!("Topic: {}", topic);
        println!("{}", "=".repeat(60));

        match parser.show(topic) {
            Ok(records) if records.is_empty() => println!("(no records)"),
            Ok(records) => println!("{}", serde_json::to_string_pretty(&records)?),
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }

    Ok(())
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut vendor = "cisco_ios".to_string();
        let mut file = None;
        let mut topics = Vec::new();
        let mut commands = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--vendor" | "-v" => {
                    i += 1;
                    if i < args.len() {
                        vendor = args[i].clone();
                    }
                }
                "--file" | "-f" => {
                    i += 1;
                    if i < args.len() {
                        file = Some(PathBuf::from(&args[i]));
                    }
                }
                "--topic" | "-t" => {
                    i += 1;
                    if i < args.len() {
                        topics.push(args[i].clone());
                    }
                }
                "--commands" => commands = true,
                "--help" | "-h" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            vendor,
            file,
            topics,
            commands,
        }
    }

    fn print_help() {
        println!(
            r#"showparse transcript parsing example

USAGE:
    cargo run --example parse_transcript -- [OPTIONS]

OPTIONS:
    -v, --vendor <NAME>     Grammar: {} [default: cisco_ios]
    -f, --file <PATH>       Captured session transcript
    -t, --topic <TOPIC>     Topic to print, repeatable [default: all]
    --commands              List the commands found in the transcript
    -h, --help              Print this help message

EXAMPLES:
    # With debug logging
    RUST_LOG=debug cargo run --example parse_transcript -- \
        --vendor cisco_wlc --file wlc.log --topic access_points"#,
            vendors::NAMES.join(", ")
        );
    }
}
