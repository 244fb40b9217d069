use std::process;

use clap::{Parser, Subcommand};
use math_quiz::logging;
use math_quiz::protocol::{quiz_response, start_quiz, validate_option_count, DEFAULT_QUIZ_LENGTH};
use math_quiz::{generate_in_category, generate_named, Category, GeneratorError, QuizRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single generated question
    Question {
        /// easy, normal, hard or genius
        #[arg(short, long)]
        difficulty: String,

        /// Number of answer options (4 or 6)
        #[arg(short, long, default_value_t = 4)]
        options: usize,

        /// Restrict the question to one category
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Print a full quiz as a protocol response
    Quiz {
        /// easy, normal, hard or genius
        #[arg(short, long)]
        difficulty: String,

        /// Number of answer options (4 or 6)
        #[arg(short, long, default_value_t = 4)]
        options: usize,

        /// Number of questions (5, 10 or 15)
        #[arg(short, long, default_value_t = DEFAULT_QUIZ_LENGTH)]
        length: usize,
    },
}

fn main() {
    logging::setup_log();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let code = match args.command {
        Command::Question {
            difficulty,
            options,
            category,
        } => {
            if let Err(reason) = validate_option_count(options) {
                eprintln!("Error: {}", reason);
                process::exit(2);
            }
            let result = match category {
                Some(category) => difficulty
                    .parse()
                    .and_then(|d| generate_in_category(&mut rng, category, d, options)),
                None => generate_named(&mut rng, &difficulty, options),
            };
            match result {
                Ok(question) => {
                    print_json(&question, args.pretty);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit_code(&e)
                }
            }
        }
        Command::Quiz {
            difficulty,
            options,
            length,
        } => {
            let request = QuizRequest {
                difficulty,
                option_count: options,
                quiz_length: length,
            };
            let result = start_quiz(&mut rng, &request);
            print_json(&quiz_response(&result), args.pretty);
            match result {
                Ok(_) => 0,
                Err(e) if e.is_client_error() => 2,
                Err(_) => 1,
            }
        }
    };

    process::exit(code);
}

fn exit_code(error: &GeneratorError) -> i32 {
    if error.is_retryable() { 1 } else { 2 }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
