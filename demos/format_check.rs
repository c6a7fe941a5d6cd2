use sales_tax::validate_tax_number_format;

fn main() {
    // Offline structural checks (no network required)
    println!("=== Tax Number Format Checks ===\n");

    let samples = [
        ("DE", "123456789"),
        ("AT", "U12345678"),
        ("FR", "12345678901"),
        ("NL", "123456789B01"),
        ("GB", "123456789"),
        ("DE", "12345678"),   // too short
        ("US", "12-3456789"), // unrecognized jurisdiction
    ];

    for (country, number) in &samples {
        match validate_tax_number_format(country, number) {
            Ok(()) => println!("  {country} {number} => plausible"),
            Err(e) => println!("  {country} {number} => REJECTED: {e}"),
        }
    }
}
