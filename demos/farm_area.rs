use brain_agro::farm::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Farm Area Validation ===\n");

    let farms = [
        ("Sum equals total", 100.0, 60.0, 40.0),
        ("Fractional total", 100.5, 70.0, 25.0),
        ("Just over", 100.0, 60.0, 40.01),
        ("Exceeds", 100.0, 80.0, 30.0),
        ("Negative arable", 100.0, -1.0, 10.0),
        ("No total", 0.0, 0.0, 0.0),
    ];

    for (label, total, arable, vegetation) in farms {
        let result = validate_farm_area(total, arable, vegetation);
        println!("  {label}: total={total}, arable={arable}, vegetation={vegetation}");
        println!(
            "    valid={}, error={}",
            result.is_valid,
            result.error.as_deref().unwrap_or("—")
        );
    }

    println!("\n=== Float vs Decimal at the boundary ===\n");
    println!("  f64:     {:?}", validate_farm_area(0.3, 0.1, 0.2));
    println!(
        "  Decimal: {:?}",
        validate_farm_area_decimal(dec!(0.3), dec!(0.1), dec!(0.2))
    );
}
