use clap::Parser;
use fixchain::prelude::*;
use fixchain::wire::encode_csv_config;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate sample csv-config payloads for the fixchain engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_csv_config.json")]
    output: String,

    /// The minimum number of configured columns to generate
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of configured columns to generate
    #[arg(long, default_value_t = 12)]
    max: usize,
}

const COLUMN_POOL: [&str; 10] = [
    "first_name",
    "last_name",
    "company_name",
    "job_title",
    "city",
    "industry",
    "website",
    "icebreaker",
    "pain_point",
    "mutual_interest",
];

const VALUE_POOL: [&str; 6] = [
    "there",
    "your team",
    "your company",
    "Unknown Co",
    "friend",
    "your industry",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating csv-config (configured columns: {} to {})...",
        cli.min, cli.max
    );

    let count = rng.random_range(cli.min..=cli.max.min(COLUMN_POOL.len()));
    let mut config = CsvConfig::new();
    config.set_detected_columns(COLUMN_POOL.iter().map(|c| c.to_string()).collect());

    for column in COLUMN_POOL.iter().take(count) {
        let chain = generate_chain(&mut rng);
        println!("-> Configured '{}' as {}.", column, chain.fix_type());
        config.add_or_update(ColumnFix::new(*column, chain));
    }

    let json_output = serde_json::to_string_pretty(&encode_csv_config(&config))?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved csv-config to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates one random fix chain, weighted toward the simple behaviors.
fn generate_chain(rng: &mut ThreadRng) -> FixChain {
    match rng.random_range(0..5) {
        0 => FixChain::SendBlank,
        1 => FixChain::SkipLeads,
        2 => FixChain::InsertDefaultValue {
            value: random_value(rng),
        },
        3 => FixChain::FetchFromLinkedIn {
            source: random_field(rng),
            fallback: rng.random_bool(0.5).then(|| generate_terminal(rng)),
        },
        _ => FixChain::AllLeadsPresent {
            fallback: generate_covered(rng),
        },
    }
}

fn generate_covered(rng: &mut ThreadRng) -> CoveredFallback {
    match rng.random_range(0..4) {
        0 => CoveredFallback::SendBlank,
        1 => CoveredFallback::SkipLeads,
        2 => CoveredFallback::InsertDefaultValue {
            value: random_value(rng),
        },
        _ => CoveredFallback::FetchFromLinkedIn {
            source: random_field(rng),
            fallback: rng.random_bool(0.5).then(|| generate_terminal(rng)),
        },
    }
}

fn generate_terminal(rng: &mut ThreadRng) -> TerminalFix {
    match rng.random_range(0..3) {
        0 => TerminalFix::SendBlank,
        1 => TerminalFix::SkipLeads,
        _ => TerminalFix::InsertDefaultValue {
            value: random_value(rng),
        },
    }
}

fn random_field(rng: &mut ThreadRng) -> LinkedInField {
    LinkedInField::ALL[rng.random_range(0..LinkedInField::ALL.len())]
}

fn random_value(rng: &mut ThreadRng) -> String {
    VALUE_POOL[rng.random_range(0..VALUE_POOL.len())].to_string()
}
