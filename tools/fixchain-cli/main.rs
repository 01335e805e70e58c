use clap::{Parser, ValueEnum};
use fixchain::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariableTypeCli {
    Linkedin,
    Csv,
    Api,
}

impl VariableTypeCli {
    fn kind(self) -> VariableKind {
        match self {
            VariableTypeCli::Linkedin => VariableKind::LinkedIn,
            VariableTypeCli::Csv => VariableKind::Csv,
            VariableTypeCli::Api => VariableKind::Api,
        }
    }
}

/// A variable fallback-configuration inspection CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the campaign csv-config JSON file
    config_path: Option<String>,

    /// Inspect a single column instead of the whole configuration
    #[arg(short, long)]
    column: Option<String>,

    /// The variable origin assumed when classifying dialog modes
    #[arg(short = 't', long, value_enum)]
    variable_type: Option<VariableTypeCli>,

    /// Exit non-zero if any normalized state fails validation
    #[arg(long)]
    strict: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_path = if cli.human {
        prompt_for_input("Enter csv-config path", Some("data/csv_config.json"))
    } else {
        cli.config_path
            .clone()
            .unwrap_or_else(|| exit_with_error("Config path is required in non-interactive mode."))
    };

    run_inspection(&config_path, &cli);
}

fn run_inspection(config_path: &str, cli: &Cli) {
    let total_start = Instant::now();

    // --- 1. File Loading and Decoding ---
    let load_start = Instant::now();
    let payload = fs::read_to_string(config_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read config file '{}': {}",
            config_path, e
        ))
    });
    let config = fixchain::wire::config_from_json(&payload)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)));
    let load_duration = load_start.elapsed();

    println!(
        "Loaded csv-config with {} column fix(es) and {} detected column(s) in {:?}",
        config.len(),
        config.detected_columns.len(),
        load_duration
    );

    // --- 2. Per-Column Normalization and Validation ---
    let kind = cli.variable_type.unwrap_or(VariableTypeCli::Csv).kind();
    let selected: Vec<&ColumnFix> = match &cli.column {
        Some(column) => match config.get(column) {
            Some(fix) => vec![fix],
            None => exit_with_error(&format!("No fix configured for column '{}'", column)),
        },
        None => config.column_fixes.iter().collect(),
    };

    let mut invalid = 0usize;
    for fix in &selected {
        let mode = determine_fallback_mode(kind, Some(&fix.chain));
        let state = parse_fix_chain(mode, Some(&fix.chain));
        let validation = validate_fallback_state(mode, &state);

        println!("\nColumn '{}'", fix.column_name);
        println!("  Stored fix:   {}", fix.chain.fix_type());
        println!("  Dialog mode:  {:?}", mode);
        println!("  Opens as:     {:?}", state.mode);
        if !state.default_value.is_empty() {
            println!("  Value:        '{}'", state.default_value);
        }
        if let Some(field) = state.linkedin_field {
            println!("  LinkedIn:     {}", field);
        }
        if let Some(fallback) = state.fallback_mode {
            println!("  Fallback:     {:?}", fallback);
        }
        match validation.error {
            None => println!("  Validation:   ok"),
            Some(message) => {
                invalid += 1;
                println!("  Validation:   {}", message);
            }
        }
    }

    // --- 3. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Summary ---");
    println!("Columns inspected:  {}", selected.len());
    println!("Invalid states:     {}", invalid);
    println!("Total Execution:    {:?}", total_duration);

    if cli.strict && invalid > 0 {
        std::process::exit(1);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
