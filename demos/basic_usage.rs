// ============================================================================
// Basic Usage Example
// ============================================================================

use metric_numeral::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Metric Numeral Example ===\n");

    // Format values across the whole prefix table
    println!("Formatting with symbols...");
    for value in [4.7e-24, 3.3e-12, 0.0015, 42.0, 1500.0, 2.2e9, 6.02e23] {
        match to_metric(value, None, None) {
            Ok(text) => println!("  {:>10e} -> {}", value, text),
            Err(err) => println!("  {:>10e} -> error: {}", value, err),
        }
    }

    // The same values in words
    println!("\nFormatting with words...");
    let presets = [
        ("name", MetricFormat::named()),
        ("short scale", MetricFormat::short_scale_words()),
        ("long scale", MetricFormat::long_scale_words()),
    ];
    for (label, config) in presets.iter() {
        println!("  {:<12} {}", label, config.format_lossy(2.2e9));
    }

    // Rounding that crosses into the next prefix
    println!("\nRounding...");
    for decimals in [3, 1, 0] {
        let text = 999_999.9_f64
            .to_metric(Some(FormatOptions::WITH_SPACE), Some(decimals))
            .unwrap_or_else(|e| e.to_string());
        println!("  999999.9 @ {} decimals -> {}", decimals, text);
    }

    // Parse back
    println!("\nParsing...");
    for input in ["1k", "1 k", "2.5 mega", "100m", "47μ", "12", "", "abc"] {
        match input.from_metric() {
            Ok(value) => println!("  {:<10} -> {}", format!("{:?}", input), value),
            Err(err) => println!("  {:<10} -> error: {}", format!("{:?}", input), err),
        }
    }

    // Out of range
    println!("\nOut of range...");
    if let Err(err) = 1e27_f64.to_metric(None, None) {
        println!("  1e27 -> {}", err);
    }
}
