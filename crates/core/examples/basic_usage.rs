//! Basic usage example of the textcompare library

use textcompare_core::{
    compute_diff, compute_stats, export_html, export_plain_text, DiffConfig, DiffEngine,
    DiffMode, ExportFormat,
};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Text Compare Examples ===\n");

    // Example 1: The same pair at every granularity
    example_modes();

    // Example 2: Configured engine with exports
    example_exports();

    // Example 3: Configuration loaded from JSON
    example_json_config();
}

fn example_modes() {
    println!("Example 1: Comparison Modes");
    println!("{}", LINE);

    let original = "The quick brown fox\njumps over the lazy dog.";
    let modified = "The quick red fox\njumps over the lazy cat.";

    for mode in [DiffMode::Char, DiffMode::Word, DiffMode::Line] {
        let result = compute_diff(original, modified, mode);
        let stats = compute_stats(&result);
        println!("{} ({} {})", result, stats, mode.unit_name());
    }
    println!();
}

fn example_exports() {
    println!("Example 2: Exports");
    println!("{}", LINE);

    let engine = DiffEngine::new(
        DiffConfig::new()
            .with_mode(DiffMode::Word)
            .with_html_title("Release notes"),
    );
    let result = engine.diff("Version 1.2 adds <b>search</b>.", "Version 1.3 adds <b>filters</b>.");

    println!("{}:", ExportFormat::PlainText.default_file_name());
    println!("{}\n", export_plain_text(&result));

    println!("{}:", ExportFormat::Html.default_file_name());
    println!("{}\n", engine.export(&result, ExportFormat::Html));

    println!("Default-titled HTML is {} bytes", export_html(&result, "Text Diff").len());
    println!();
}

fn example_json_config() {
    println!("Example 3: JSON Configuration");
    println!("{}", LINE);

    let json = r#"{ "mode": "line", "algorithm": "myers", "html_lang": "ja" }"#;
    match DiffConfig::from_json(json) {
        Ok(config) => {
            let engine = DiffEngine::new(config);
            let (result, stats) = engine.diff_with_stats("a\nb\nc\n", "a\nc\nd\n");
            println!("{:?}", engine);
            println!("{}", result);
            println!("{} over {} gutter lines", stats, result.line_count());
        }
        Err(err) => eprintln!("{}", err),
    }
}
