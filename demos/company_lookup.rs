use chrono::NaiveDate;
use regon_lookup::lookup::CompanyLookup;
use regon_lookup::registry::{ApiKey, RawReport, ReportType, StaticRegistry};
use regon_lookup::vat::{HOME_COUNTRY, resolve_vat_id};

fn registry() -> StaticRegistry {
    let acme = RawReport::new("987654321", "1234563218", "ACME SP Z O O")
        .entity_type("p")
        .postal_code("00-238")
        .city("Warszawa")
        .street("Długa")
        .property_number("10");
    let closed = RawReport::new("123456785", "1234567802", "STARA FIRMA SP J")
        .entity_type("p")
        .city("Łódź")
        .activity_end_date(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap_or_default());

    StaticRegistry::new("demo-key")
        .with_krs_report("0000123456", acme)
        .with_report(closed)
        .with_classifications(
            "987654321",
            ReportType::LegalEntityActivity,
            ["62.01.Z", "62.02.Z"],
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG is not consulted; all debug events of the lookup are printed
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== NIP Resolution ===\n");

    for raw in ["PL 123-456-32-18", "123-45-63-218", "PL1234563219", "DE123456789"] {
        match resolve_vat_id(raw, HOME_COUNTRY) {
            Ok((cc, num)) => println!("  {raw} => valid (country={cc}, number={num})"),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    println!("\n=== Company Lookup ===\n");

    let key = ApiKey::new("demo-key")?;
    let mut lookup = CompanyLookup::connect(registry(), &key)?;

    let results = [
        ("NIP PL 123-456-32-18", lookup.lookup_by_tax("PL 123-456-32-18")?),
        ("KRS 0000123456", lookup.lookup_by_register_number("0000123456")?),
        ("REGON 123456785 (closed)", lookup.lookup_by_statistical_number("123456785")?),
        ("NIP 0000000000 (unknown)", lookup.lookup_by_tax("0000000000")?),
    ];

    for (label, company) in &results {
        println!("  {label}:");
        println!("    valid={}, name={}", company.valid, company.name);
        for id in &company.identifiers {
            println!("    {}={}", id.kind, id.value);
        }
        if let Some(address) = &company.main_address {
            println!(
                "    address={}, {} {} ({})",
                address.address, address.postal_code, address.city, address.country
            );
        }
        if !company.pkd_codes.is_empty() {
            println!("    pkd={}", company.pkd_codes.join(", "));
        }
    }

    println!("\n=== Rejected Key ===\n");

    let wrong = ApiKey::new("not-the-key")?;
    match CompanyLookup::connect(registry(), &wrong) {
        Ok(_) => println!("  unexpectedly connected"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
