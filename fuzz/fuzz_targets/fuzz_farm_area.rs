#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|areas: (f64, f64, f64)| {
    let (total, arable, vegetation) = areas;
    let result = brain_agro::farm::validate_farm_area(total, arable, vegetation);
    assert_eq!(result.is_valid, result.error.is_none());
    assert_eq!(
        result.is_valid,
        brain_agro::farm::assert_valid_farm_area(total, arable, vegetation).is_ok()
    );
});
