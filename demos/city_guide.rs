//! Content resolution walkthrough.
//!
//! Loads a small guide document and shows how city-specific content wins
//! over the "General" bucket, and how misses degrade to empty results.

use guidebook_engine::content::body::parse_table_body;
use guidebook_engine::content::resolver::GENERAL;
use guidebook_engine::content::store::ContentStore;

const DOC: &str = r#"{
  "menuItems": {
    "Arriving in Nepal": {
      "General": [
        {"type": "text", "content": "Most visitors get a visa on arrival."},
        {"type": "table", "content": "Visa Type | Fee\n15 Days | $30 USD\n30 Days | $50 USD"}
      ],
      "Kathmandu": [
        {"type": "text", "content": "Tribhuvan is the only international airport."}
      ]
    },
    "Local Cuisine": {
      "General": [
        {"type": "recommendation", "content": "Try dal bhat at a family-run kitchen."}
      ]
    },
    "Street Food": {
      "Pokhara": [
        {"type": "text", "content": "Lakeside stalls open after sunset."}
      ]
    }
  }
}"#;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  guidebook-engine: City Guide Example    ║");
    println!("╚══════════════════════════════════════════╝\n");

    let mut store = ContentStore::new();
    store.load_json(DOC).expect("demo document is valid");

    // --- Scenario 1: city-specific content wins ---
    println!("━━━ Scenario 1: Kathmandu has its own arrival info ━━━\n");
    let resolution = store.lookup("Arriving in Nepal", "Kathmandu");
    println!("origin: {:?}", resolution.origin());
    for item in resolution.items() {
        println!("  [{}] {}", item.kind(), item.body());
    }
    println!();

    // --- Scenario 2: fallback to General ---
    println!("━━━ Scenario 2: Pokhara falls back to General ━━━\n");
    let resolution = store.lookup("Arriving in Nepal", "Pokhara");
    println!("origin: {:?}", resolution.origin());
    for item in resolution.items() {
        println!("  [{}] {}", item.kind(), item.body());
    }
    println!();

    // --- Scenario 3: parsing a table body ---
    println!("━━━ Scenario 3: The visa fee table, parsed ━━━\n");
    let general = store.resolve("Arriving in Nepal", GENERAL);
    let table = parse_table_body(general[1].body());
    println!("  headers: {:?}", table.headers());
    for row in table.rows() {
        println!("  row:     {:?}", row);
    }
    println!();

    // --- Scenario 4: misses are values, not errors ---
    println!("━━━ Scenario 4: Misses ━━━\n");
    let missing = store.lookup("Nightlife", "Kathmandu");
    println!(
        "  unknown menu item → origin {:?}, {} items",
        missing.origin(),
        missing.items().len()
    );
    let missing = store.lookup("Street Food", "Kathmandu");
    println!(
        "  street food without a General bucket → origin {:?}, {} items",
        missing.origin(),
        missing.items().len()
    );
}
