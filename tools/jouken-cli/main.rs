use clap::Parser;
use jouken::prelude::*;
use std::fs;

/// Inspection CLI for visual rule payloads
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the rule payload JSON file (or a graph fragment with --from-graph)
    input_path: String,

    /// Treat the input as a graph fragment (nodes + edges) instead of a rule payload
    #[arg(long)]
    from_graph: bool,

    /// Print the expanded canvas graph as JSON
    #[arg(long)]
    emit_graph: bool,

    /// Use sequential ids instead of random ones for reproducible output
    #[arg(short, long)]
    deterministic: bool,

    /// Expand the rule to a graph and rebuild it, reporting whether the tree survives
    #[arg(long)]
    roundtrip: bool,
}

fn main() {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read input file '{}': {}",
            &cli.input_path, e
        ))
    });

    if cli.from_graph {
        run_from_graph(&raw);
    } else {
        run_from_rule(&cli, &raw);
    }
}

/// Imports a graph fragment, validates it and prints the rule it encodes.
fn run_from_graph(raw: &str) {
    let fragment: GraphFragment = serde_json::from_str(raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));

    let mut store = GraphStore::new();
    store.apply(fragment);

    match validate_flow(&store) {
        Ok(()) => println!("Graph is valid."),
        Err(e) => println!("Graph validation: {}", e),
    }

    let rule = graph_to_rule(&store, "imported");
    println!("\nReadable rule:");
    println!("  {}", format_rule(&rule));

    let json = rule
        .cleaned()
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize rule: {}", e)));
    println!("\nRule payload:");
    println!("{}", json);
}

/// Loads a rule payload, previews it and optionally expands it to a graph.
fn run_from_rule(cli: &Cli, raw: &str) {
    let rule = RulePayload::from_json(raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load rule: {}", e)));

    if let Some(name) = &rule.name {
        println!("Rule: {}", name);
    }
    println!("Readable rule:");
    println!("  {}", format_rule(&rule));

    if !cli.emit_graph && !cli.roundtrip {
        return;
    }

    let mut sequential = SequentialIds::new();
    let mut random = RandomIds;
    let ids: &mut dyn IdGenerator = if cli.deterministic {
        &mut sequential
    } else {
        &mut random
    };

    let fragment = rule_to_graph(&rule, ids);
    println!(
        "\nExpanded to {} nodes and {} edges.",
        fragment.nodes.len(),
        fragment.edges.len()
    );

    if cli.emit_graph {
        let json = serde_json::to_string_pretty(&fragment)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
        println!("{}", json);
    }

    if cli.roundtrip {
        let mut store = GraphStore::new();
        store.apply(fragment);
        let rebuilt = graph_to_rule(&store, rule.name.clone().unwrap_or_default());
        if rebuilt.cleaned().create_pattern.conditions == rule.cleaned().create_pattern.conditions {
            println!("Roundtrip: tree survives expansion and rebuild unchanged.");
        } else {
            println!("Roundtrip: rebuilt tree differs from the input tree:");
            println!("  input:   {}", format_rule(&rule));
            println!("  rebuilt: {}", format_rule(&rebuilt));
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
