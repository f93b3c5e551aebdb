use clap::Parser;
use jouken::prelude::*;
use jouken::rule::catalog::{FIELDS, OPERATORS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate sample rule payloads for the jouken converter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_rules.json")]
    output: String,

    /// How many rules to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Maximum number of top-level elements per rule
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Maximum group nesting depth
    #[arg(long, default_value_t = 2)]
    depth: usize,

    /// Seed for reproducible output; omit for a random seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.width == 0 {
        eprintln!("Error: --width must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating {} rule(s) (width up to {}, depth up to {})...",
        cli.count, cli.width, cli.depth
    );

    let rules: Vec<RulePayload> = (0..cli.count)
        .map(|index| {
            let mut rule = RulePayload::new(generate_conditions(&mut rng, cli.width, cli.depth));
            rule.name = Some(format!("generated-rule-{}", index + 1));
            println!("-> {}", format_rule(&rule));
            rule
        })
        .collect();

    let json_output = serde_json::to_string_pretty(&rules)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} rule(s) to '{}'",
        rules.len(),
        cli.output
    );

    Ok(())
}

/// Generates a condition list with random fields, operators and grouping.
fn generate_conditions(rng: &mut StdRng, max_width: usize, depth: usize) -> Vec<Condition> {
    let count = rng.random_range(1..=max_width);
    (0..count)
        .map(|index| {
            let condition = if depth > 0 && rng.random_bool(0.3) {
                Condition::group(generate_conditions(rng, max_width.min(3), depth - 1))
            } else {
                generate_leaf(rng)
            };

            // Only non-final elements carry a join to their next sibling.
            if index + 1 < count {
                let operator = if rng.random_bool(0.5) {
                    JoinOperator::Or
                } else {
                    JoinOperator::And
                };
                condition.with_join(operator)
            } else {
                condition
            }
        })
        .collect()
}

fn generate_leaf(rng: &mut StdRng) -> Condition {
    let field = &FIELDS[rng.random_range(0..FIELDS.len())];
    let operator = &OPERATORS[rng.random_range(0..OPERATORS.len())];
    let value = if field.examples.is_empty() {
        field.placeholder
    } else {
        field.examples[rng.random_range(0..field.examples.len())]
    };
    Condition::leaf(field.value, operator.value, value)
}
