//! guidebook-engine CLI
//!
//! Inspect a guide content document and convert currencies from the
//! command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the content for a menu item and city
//! guidebook-engine show --content contentData.json --menu "Arriving in Nepal" --city Kathmandu
//!
//! # Convert an amount with the builtin rate table
//! guidebook-engine convert --amount 1.00 --from USD --to NPR
//!
//! # List the menu catalog
//! guidebook-engine menu
//!
//! # Validate a content document
//! guidebook-engine validate --content contentData.json
//!
//! # Generate a random sample document
//! guidebook-engine generate --items 4 --output sample.json
//! ```

use guidebook_engine::app::menu;
use guidebook_engine::content::body::{parse_list_body, parse_table_body};
use guidebook_engine::content::document::ContentDocument;
use guidebook_engine::content::item::{ContentItem, ContentKind};
use guidebook_engine::content::resolver::{Origin, GENERAL};
use guidebook_engine::content::sample::{generate_sample_document, SampleConfig};
use guidebook_engine::currency::convert::convert;
use guidebook_engine::currency::rates::{CurrencyCode, RateTable};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"guidebook-engine — offline travel-guide content resolution and currency conversion

USAGE:
    guidebook-engine <COMMAND> [OPTIONS]

COMMANDS:
    show        Resolve and render content for a menu item and city
    convert     Convert an amount between currencies
    menu        List the guide's menu catalog
    validate    Load and summarize a content document
    generate    Generate a random sample content document
    help        Show this message

OPTIONS (show):
    --content <FILE>    Path to the JSON content document
    --menu <ITEM>       Menu item to resolve
    --city <CITY>       City scope (default: General)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (convert):
    --amount <AMOUNT>   Decimal amount to convert
    --from <CODE>       Source currency code
    --to <CODE>         Target currency code
    --rates <FILE>      JSON rate table (default: builtin rates)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (menu):
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (validate):
    --content <FILE>    Path to the JSON content document

OPTIONS (generate):
    --items <N>         Items per generated bucket (default: 4)
    --coverage <F>      Probability a city gets its own bucket, 0..1 (default: 0.5)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    guidebook-engine show --content contentData.json --menu "Local Cuisine" --city Pokhara
    guidebook-engine convert --amount 25 --from USD --to NPR
    guidebook-engine menu --format json
    guidebook-engine generate --items 3 --output sample.json"#
    );
}

fn require_value(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

fn load_document(path: &str) -> ContentDocument {
    ContentDocument::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error loading content document '{}': {}", path, e);
        process::exit(1);
    })
}

/// JSON output schema for `show`.
#[derive(serde::Serialize)]
struct ShowOutput {
    menu_item: String,
    city: String,
    origin: Origin,
    items: Vec<ContentItem>,
}

fn render_table(body: &str) -> String {
    let table = parse_table_body(body);
    let columns = table.column_count();
    let mut widths = vec![0usize; columns];
    for row in [table.headers()].into_iter().chain(table.rows().iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |row: &[String]| -> String {
        row.iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::new();
    if !table.headers().is_empty() {
        lines.push(render_row(table.headers()));
        lines.push("-".repeat(widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)));
    }
    for row in table.rows() {
        lines.push(render_row(row));
    }
    lines.join("\n")
}

fn render_item(item: &ContentItem) -> String {
    match item.kind() {
        ContentKind::Text | ContentKind::Location => item.body().to_string(),
        ContentKind::Image => format!("[image: {}]", item.body()),
        ContentKind::Note => format!("Note: {}", item.body()),
        ContentKind::Recommendation => format!("Our Recommendation: {}", item.body()),
        ContentKind::Table => render_table(item.body()),
        ContentKind::List => parse_list_body(item.body())
            .iter()
            .map(|entry| format!("• {}", entry))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn cmd_show(args: &[String]) {
    let mut content_path = None;
    let mut menu_item = None;
    let mut city = GENERAL.to_string();
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--content" => {
                i += 1;
                content_path = Some(require_value(args, i, "--content"));
            }
            "--menu" => {
                i += 1;
                menu_item = Some(require_value(args, i, "--menu"));
            }
            "--city" => {
                i += 1;
                city = require_value(args, i, "--city");
            }
            "--format" => {
                i += 1;
                format = require_value(args, i, "--format");
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let content_path = content_path.unwrap_or_else(|| {
        eprintln!("Error: --content <FILE> is required");
        process::exit(1);
    });
    let menu_item = menu_item.unwrap_or_else(|| {
        eprintln!("Error: --menu <ITEM> is required");
        process::exit(1);
    });

    let document = load_document(&content_path);
    let resolution = document.lookup(&menu_item, &city);

    if format == "json" {
        let output = ShowOutput {
            menu_item: menu_item.clone(),
            city: city.clone(),
            origin: resolution.origin(),
            items: resolution.items().to_vec(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding output: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("━━━ {} — {} ━━━\n", menu_item, city);
        if resolution.is_empty() {
            println!("No content available for {} in {}.", city, menu_item);
        } else {
            for item in resolution.items() {
                println!("{}\n", render_item(item));
            }
            if resolution.origin() == Origin::GeneralFallback {
                println!("(showing {} content)", GENERAL);
            }
        }
    }
}

fn load_rates(path: Option<&str>) -> RateTable {
    let Some(path) = path else {
        return RateTable::builtin();
    };
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading rates file '{}': {}", path, e);
        process::exit(1);
    });
    let table: RateTable = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing rates file: {}", e);
        eprintln!("Expected format:");
        eprintln!(r#"{{ "USD": "1.0", "NPR": "132.12" }}"#);
        process::exit(1);
    });
    table.validate().unwrap_or_else(|e| {
        eprintln!("Invalid rates file: {}", e);
        process::exit(1);
    });
    table
}

fn cmd_convert(args: &[String]) {
    let mut amount = None;
    let mut from = None;
    let mut to = None;
    let mut rates_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--amount" => {
                i += 1;
                amount = Some(require_value(args, i, "--amount"));
            }
            "--from" => {
                i += 1;
                from = Some(require_value(args, i, "--from"));
            }
            "--to" => {
                i += 1;
                to = Some(require_value(args, i, "--to"));
            }
            "--rates" => {
                i += 1;
                rates_path = Some(require_value(args, i, "--rates"));
            }
            "--format" => {
                i += 1;
                format = require_value(args, i, "--format");
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let amount = amount.unwrap_or_else(|| {
        eprintln!("Error: --amount <AMOUNT> is required");
        process::exit(1);
    });
    let from = CurrencyCode::new(from.unwrap_or_else(|| {
        eprintln!("Error: --from <CODE> is required");
        process::exit(1);
    }));
    let to = CurrencyCode::new(to.unwrap_or_else(|| {
        eprintln!("Error: --to <CODE> is required");
        process::exit(1);
    }));

    let rates = load_rates(rates_path.as_deref());

    match convert(&amount, &from, &to, &rates) {
        Ok(conversion) => {
            if format == "json" {
                match serde_json::to_string_pretty(&conversion) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error encoding output: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", conversion);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn cmd_menu(args: &[String]) {
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                format = require_value(args, i, "--format");
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if format == "json" {
        match serde_json::to_string_pretty(menu::SECTIONS) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding output: {}", e);
                process::exit(1);
            }
        }
    } else {
        for section in menu::SECTIONS {
            println!("{}", section.title);
            for entry in section.entries {
                println!("  {:<30} [{}]", entry.title, entry.icon);
            }
            println!();
        }
    }
}

fn cmd_validate(args: &[String]) {
    let mut content_path = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--content" => {
                i += 1;
                content_path = Some(require_value(args, i, "--content"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let content_path = content_path.unwrap_or_else(|| {
        eprintln!("Error: --content <FILE> is required");
        process::exit(1);
    });

    let document = load_document(&content_path);

    println!("Menu items: {}", document.menu_items().len());
    println!("Cities:     {}", document.cities().join(", "));
    println!("Items:      {}", document.item_count());

    let uncovered: Vec<&str> = menu::entry_titles()
        .filter(|title| document.menu_bucket(title).is_none())
        .collect();
    if uncovered.is_empty() {
        println!("Every catalog topic has content.");
    } else {
        println!("Catalog topics without content: {}", uncovered.join(", "));
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = SampleConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--items" => {
                i += 1;
                config.items_per_bucket = require_value(args, i, "--items")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--items requires a number");
                        process::exit(1);
                    });
            }
            "--coverage" => {
                i += 1;
                config.city_coverage = require_value(args, i, "--coverage")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--coverage requires a number between 0 and 1");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(require_value(args, i, "--output"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let document = generate_sample_document(&config);
    let json = match serde_json::to_string_pretty(&document) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error encoding document: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} items across {} menu items → {}",
            document.item_count(),
            document.menu_items().len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "show" => cmd_show(rest),
        "convert" => cmd_convert(rest),
        "menu" => cmd_menu(rest),
        "validate" => cmd_validate(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
