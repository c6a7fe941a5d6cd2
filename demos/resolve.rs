use rust_decimal_macros::dec;
use sales_tax::SalesTax;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resolver = SalesTax::vies();

    println!("=== Country Coverage ===\n");

    for code in ["FR", "DE", "HU", "AU", "CA", "HK", "US", "XX"] {
        println!("  {code} => has sales tax: {}", resolver.has_sales_tax(code));
    }

    // No tax number means no network call: the table rate applies
    println!("\n=== Tax Context ===\n");

    for code in ["DE", "FR", "AU", "HK", "US"] {
        let tax = resolver.get_sales_tax(code, None).await?;
        println!(
            "  {code} => type={}, rate={}, exempt={}",
            tax.kind, tax.rate, tax.exempt
        );
    }

    println!("\n=== Amounts ===\n");

    for (code, amount) in [("FR", dec!(100.00)), ("DE", dec!(249.99)), ("US", dec!(59.90))] {
        let priced = resolver.get_amount_with_sales_tax(code, amount, None).await?;
        println!(
            "  {code}: net {} => total {} ({} @ {})",
            priced.price, priced.total, priced.kind, priced.rate
        );
    }

    // Pass a country code and bare tax number to check exemption live:
    //   cargo run --example resolve --features vies -- DE 123456789
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [country, number] = args.as_slice() {
        println!("\n=== Live VIES Exemption Check ===\n");
        let tax = resolver.get_sales_tax(country, Some(number)).await?;
        println!(
            "  {country} {number} => rate={}, exempt={}",
            tax.rate, tax.exempt
        );
    }

    Ok(())
}
