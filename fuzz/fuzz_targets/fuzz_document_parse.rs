#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. A parsed document must agree with the predicates.
        if let Ok(doc) = brain_agro::document::Document::parse(s) {
            assert!(
                brain_agro::document::validate_cpf(s) || brain_agro::document::validate_cnpj(s)
            );
            assert!(doc.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }
});
