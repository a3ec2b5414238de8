//! Command-line romanizer: Cyrillic text in, Latin text out.

use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use serde::Serialize;

use romanize_cyrillic::{romanize, trace_init, Language, OutputMode};

#[derive(Parser)]
#[command(name = "romanize", about = "Cyrillic-to-Latin transliteration")]
struct Cli {
    /// Language code: ru, uk, be, bg, kk, ky, mk, sr, tg, mn
    #[arg(short, long)]
    lang: Language,
    /// Restrict output to 7-bit ASCII
    #[arg(long)]
    ascii: bool,
    /// Emit one JSON object per input line
    #[arg(long)]
    json: bool,
    /// Text to romanize; reads stdin line by line when omitted
    text: Vec<String>,
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    lang: &'a str,
    mode: OutputMode,
    output: String,
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();
    let mode = if cli.ascii {
        OutputMode::Ascii
    } else {
        OutputMode::Diacritics
    };

    if cli.text.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => emit(&line, cli.lang, mode, cli.json),
                Err(e) => {
                    eprintln!("romanize: {e}");
                    process::exit(1);
                }
            }
        }
    } else {
        let text = cli.text.join(" ");
        emit(&text, cli.lang, mode, cli.json);
    }
}

fn emit(input: &str, language: Language, mode: OutputMode, json: bool) {
    let output = romanize(input, language, mode);
    if json {
        let record = Record {
            input,
            lang: language.code(),
            mode,
            output,
        };
        match serde_json::to_string(&record) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("romanize: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{output}");
    }
}
