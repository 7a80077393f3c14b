//! Currency conversion walkthrough.
//!
//! Converts a handful of amounts against the builtin rate table and shows
//! the degraded behavior for unknown codes and bad input.

use guidebook_engine::currency::convert::convert;
use guidebook_engine::currency::rates::{CurrencyCode, RateTable};

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  guidebook-engine: Currency Example      ║");
    println!("╚══════════════════════════════════════════╝\n");

    let rates = RateTable::builtin();
    println!("Builtin rates (vs USD):");
    for code in rates.codes() {
        println!("  {:<4} {}", code, rates.factor_or_par(code));
    }
    println!();

    println!("━━━ Conversions ━━━\n");
    let usd = CurrencyCode::new("USD");
    let npr = CurrencyCode::new("NPR");
    let eur = CurrencyCode::new("EUR");

    for (amount, from, to) in [
        ("1.00", &usd, &npr),
        ("25", &usd, &eur),
        ("132.12", &npr, &usd),
        ("10", &eur, &npr),
    ] {
        match convert(amount, from, to, &rates) {
            Ok(conversion) => println!("  {:>8} {} → {}", amount, from, conversion),
            Err(e) => println!("  {:>8} {} → error: {}", amount, from, e),
        }
    }
    println!();

    println!("━━━ Degraded inputs ━━━\n");

    // Unknown codes fall back to par rather than failing.
    let unknown = convert("10", &CurrencyCode::new("XXX"), &usd, &rates)
        .expect("unknown codes degrade to par");
    println!("  10 XXX → {}", unknown);

    // Bad amounts are typed failures.
    match convert("abc", &usd, &npr, &rates) {
        Ok(_) => unreachable!(),
        Err(e) => println!("  abc USD → {}", e),
    }
}
