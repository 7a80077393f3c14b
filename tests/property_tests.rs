use guidebook_engine::content::body::{parse_list_body, parse_table_body};
use guidebook_engine::content::document::ContentDocument;
use guidebook_engine::content::item::{ContentItem, ContentKind};
use guidebook_engine::content::resolver::{Origin, GENERAL};
use guidebook_engine::currency::convert::convert;
use guidebook_engine::currency::rates::{CurrencyCode, RateTable};
use guidebook_engine::theme::color::Rgba;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Generate a random content kind.
fn arb_kind() -> impl Strategy<Value = ContentKind> {
    prop::sample::select(ContentKind::ALL.to_vec())
}

/// Generate a random content item with a printable body.
fn arb_item() -> impl Strategy<Value = ContentItem> {
    (arb_kind(), "[a-zA-Z0-9 ,|]{0,40}")
        .prop_map(|(kind, body)| ContentItem::new(kind, body))
}

/// Generate a random item sequence.
fn arb_items() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(arb_item(), 0..8)
}

/// Generate a menu-item name from a small pool.
fn arb_menu_item() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Arriving in Nepal".to_string(),
        "Local Cuisine".to_string(),
        "Street Food".to_string(),
        "Money Matters".to_string(),
    ])
}

/// Generate a city name from a small pool (never "General").
fn arb_city() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Kathmandu".to_string(),
        "Pokhara".to_string(),
        "Bhaktapur".to_string(),
    ])
}

proptest! {
    // ===================================================================
    // INVARIANT 1: A stored (menu item, city) sequence resolves verbatim.
    //
    // Whatever was inserted comes back unchanged: same items, same order,
    // no deduplication.
    // ===================================================================
    #[test]
    fn resolve_returns_stored_sequence_verbatim(
        menu_item in arb_menu_item(),
        city in arb_city(),
        items in arb_items(),
    ) {
        let mut doc = ContentDocument::new();
        doc.insert(&menu_item, &city, items.clone());

        let resolution = doc.lookup(&menu_item, &city);
        prop_assert_eq!(resolution.origin(), Origin::CitySpecific);
        prop_assert_eq!(resolution.items(), items.as_slice());
    }

    // ===================================================================
    // INVARIANT 2: A city miss with a "General" bucket resolves exactly
    // to the "General" sequence.
    // ===================================================================
    #[test]
    fn city_miss_falls_back_to_general(
        menu_item in arb_menu_item(),
        city in arb_city(),
        general_items in arb_items(),
    ) {
        let mut doc = ContentDocument::new();
        doc.insert(&menu_item, GENERAL, general_items);

        let resolution = doc.lookup(&menu_item, &city);
        prop_assert_eq!(resolution.origin(), Origin::GeneralFallback);
        prop_assert_eq!(resolution.items(), doc.resolve(&menu_item, GENERAL));
    }

    // ===================================================================
    // INVARIANT 3: An absent menu item resolves empty for every city,
    // even "General" itself.
    // ===================================================================
    #[test]
    fn absent_menu_item_is_always_empty(
        menu_item in "[a-zA-Z ]{1,20}",
        city in "[a-zA-Z ]{0,20}",
    ) {
        let doc = ContentDocument::new();
        let resolution = doc.lookup(&menu_item, &city);
        prop_assert_eq!(resolution.origin(), Origin::MenuItemMissing);
        prop_assert!(resolution.is_empty());
    }

    // ===================================================================
    // INVARIANT 4: Lookups never panic, whatever the keys look like.
    // ===================================================================
    #[test]
    fn lookup_is_total(
        menu_item in arb_menu_item(),
        items in arb_items(),
        probe_menu in ".{0,30}",
        probe_city in ".{0,30}",
    ) {
        let mut doc = ContentDocument::new();
        doc.insert(&menu_item, GENERAL, items);
        let _ = doc.lookup(&probe_menu, &probe_city);
    }

    // ===================================================================
    // INVARIANT 5: Table parsing is total and the header is always the
    // first non-empty line.
    // ===================================================================
    #[test]
    fn table_header_is_first_nonempty_line(body in "[a-zA-Z0-9 |\n]{0,120}") {
        let table = parse_table_body(&body);
        match body.split('\n').find(|line| !line.is_empty()) {
            Some(first) => {
                let expected: Vec<String> = first
                    .split('|')
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim().to_string())
                    .collect();
                prop_assert_eq!(table.headers(), expected.as_slice());
            }
            None => prop_assert!(table.is_empty()),
        }
    }

    // ===================================================================
    // INVARIANT 6: Joining comma-free entries and re-parsing preserves
    // count and trimmed content.
    // ===================================================================
    #[test]
    fn list_round_trips_comma_free_entries(
        entries in prop::collection::vec("[a-zA-Z0-9 ]{1,12}", 1..6),
    ) {
        let body = entries.join(",");
        let parsed = parse_list_body(&body);
        prop_assert_eq!(parsed.len(), entries.len());
        for (parsed_entry, entry) in parsed.iter().zip(&entries) {
            prop_assert_eq!(parsed_entry.as_str(), entry.trim());
        }
    }

    // ===================================================================
    // INVARIANT 7: Conversion output always carries exactly two decimal
    // digits, and converting twice gives the same answer.
    // ===================================================================
    #[test]
    fn conversion_scale_and_purity(cents in 0u64..100_000_000u64) {
        let rates = RateTable::builtin();
        let usd = CurrencyCode::new("USD");
        let npr = CurrencyCode::new("NPR");
        let amount = (Decimal::from(cents) / Decimal::from(100)).to_string();

        let first = convert(&amount, &usd, &npr, &rates).unwrap();
        let second = convert(&amount, &usd, &npr, &rates).unwrap();

        prop_assert_eq!(first.amount().scale(), 2);
        prop_assert_eq!(first, second);
    }

    // ===================================================================
    // INVARIANT 8: Converting to and from the same currency is identity
    // up to the two-digit rescale.
    // ===================================================================
    #[test]
    fn same_currency_conversion_is_identity(cents in 0u64..100_000_000u64) {
        let rates = RateTable::builtin();
        let npr = CurrencyCode::new("NPR");
        let amount = Decimal::from(cents) / Decimal::from(100);

        let conversion = convert(&amount.to_string(), &npr, &npr, &rates).unwrap();
        prop_assert_eq!(conversion.amount().normalize(), amount.normalize());
    }

    // ===================================================================
    // INVARIANT 9: Hex encode → decode restores the channels with full
    // alpha.
    // ===================================================================
    #[test]
    fn hex_round_trip_restores_channels(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let color = Rgba::new(r, g, b, 255);
        prop_assert_eq!(Rgba::from_hex(&color.to_hex()), color);
    }

    // ===================================================================
    // INVARIANT 10: Hex decoding never fails, whatever the input.
    // ===================================================================
    #[test]
    fn hex_decode_is_total(input in ".{0,16}") {
        let _ = Rgba::from_hex(&input);
    }
}
