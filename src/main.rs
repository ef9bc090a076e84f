use std::io::BufRead;

use clap::{Parser, Subcommand};
use jptime::western::parse_western;
use jptime::{Era, EraDate, from_gregorian, parse_date};
use jptime_types::{BatchLine, EraDateRecord, EraRecord};

#[derive(Parser)]
#[command(
    name = "jptime",
    version = jptime::VERSION,
    about = "Japanese era (元号) date converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a date in era, era-code or Western notation
    Parse {
        /// e.g. "平成三年三月二十三日", "4030323", "1991-3-23"
        text: Vec<String>,
    },
    /// Convert a Gregorian date to its era date
    Convert {
        /// e.g. "1991-03-23"
        date: String,
    },
    /// Print the era table
    Eras,
    /// Parse stdin line by line, one JSON object per line
    Batch,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Parse { text }) => run_parse(&text),
        Some(Command::Convert { date }) => run_convert(&date),
        Some(Command::Batch) => run_batch(),
        // Default: show the table
        Some(Command::Eras) | None => run_eras(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn print_json<T: serde::Serialize>(data: &T) {
    let json = serde_json::to_string_pretty(data).expect("JSON serialization failed");
    println!("{json}");
}

fn era_date_record(date: &EraDate) -> EraDateRecord {
    EraDateRecord {
        era_code: date.era_code(),
        era_name: date.era().name().to_string(),
        era_year: date.era_year(),
        month: date.month(),
        day: date.day(),
        gregorian: date.to_gregorian().format("%Y-%m-%d").to_string(),
    }
}

fn era_record(era: Era) -> EraRecord {
    EraRecord {
        code: era.code(),
        name: era.name().to_string(),
        abbreviation: era.abbreviation().to_string(),
        begin: era.begin().format("%Y-%m-%d").to_string(),
        end: (!era.is_current()).then(|| era.end().format("%Y-%m-%d").to_string()),
        max_year: era.max_year(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE / CONVERT
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(text_args: &[String]) {
    let raw = text_args.join(" ");

    match parse_date(&raw) {
        Ok(date) => {
            let record = era_date_record(&date);
            eprintln!("{} = {}", record.display_ja(), record.gregorian);
            print_json(&record);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn convert_record(raw: &str) -> Result<EraDateRecord, String> {
    let gregorian = parse_western(raw).ok_or_else(|| {
        format!("Cannot read {raw:?} as a Gregorian date (expected e.g. 1991-03-23).")
    })?;
    from_gregorian(gregorian)
        .map(|date| era_date_record(&date))
        .map_err(|e| e.to_string())
}

fn run_convert(raw: &str) {
    match convert_record(raw) {
        Ok(record) => print_json(&record),
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

fn batch_line(input: &str) -> BatchLine {
    match parse_date(input) {
        Ok(date) => BatchLine {
            input: input.to_string(),
            result: Some(era_date_record(&date)),
            error: None,
        },
        Err(e) => BatchLine {
            input: input.to_string(),
            result: None,
            error: Some(e.to_string()),
        },
    }
}

fn run_batch() {
    let stdin = std::io::stdin();
    let mut parsed = 0usize;
    let mut failed = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Cannot read stdin: {e}");
                std::process::exit(1);
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let out = batch_line(input);
        if out.result.is_some() {
            parsed += 1;
        } else {
            failed += 1;
        }
        println!(
            "{}",
            serde_json::to_string(&out).expect("JSON serialization failed")
        );
    }

    eprintln!("{parsed} parsed, {failed} failed");
}

// ═══════════════════════════════════════════════════════════════════════
//  ERA TABLE
// ═══════════════════════════════════════════════════════════════════════

fn run_eras() {
    let table: Vec<EraRecord> = Era::ALL.into_iter().map(era_record).collect();
    print_json(&table);
}
