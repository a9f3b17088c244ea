// crates/qualifier-core/examples/playground.rs
// Run with: cargo run --example playground

use qualifier_core::*;

fn main() {
    println!("💬 Qualifier Playground\n");

    println!("=== Variant Engine ===");
    let samples = ["Hello Royal", "uwu", "apple pie", "yellow", "rhythm"];
    for text in samples {
        for mode in VariantMode::ALL {
            println!("{:>8} {:<12} -> {}", mode, format!("{:?}", text), render(text, mode));
        }
    }

    println!("\n=== Length Guard ===");
    let long = "glory u u u u u u u u u u u u u u u u u u u u u";
    let rendered = render_with_limit(long, VariantMode::Uwu, MAX_QUOTE_LENGTH);
    println!("Input ({} chars): {}", long.chars().count(), long);
    println!("Output: {} (partial: {})", rendered.text, rendered.partial);

    println!("\n=== Dispatcher ===");
    let dispatcher = Dispatcher::new(MemoryStore::new());
    let commands = [
        r#"quote "Simple is better""#,
        r#"quote uwu "Hello Royal""#,
        r#"quote piglatin "apple pie""#,
        r#"quote "Simple is better""#,
        r#"quote uwu "kitten mittens""#,
        "quote piglatin",
        "quote list",
    ];

    for command in commands {
        println!("> {}", command);
        match dispatcher.run(command) {
            Ok(Outcome::Listed(quotes)) => {
                for quote in quotes {
                    println!("- {}", quote);
                }
            }
            Ok(Outcome::Added(quote)) => println!("  stored: {}", quote),
            Ok(outcome @ Outcome::Duplicate(_)) => {
                println!("  {}", outcome.notice().unwrap_or_default())
            }
            Err(e) => println!("  error ({:?}): {}", e.kind(), e),
        }
    }
}
