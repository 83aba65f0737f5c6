#![no_main]

use brain_agro::document::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let digits = strip_cpf_formatting(s);
        assert_eq!(strip_cpf_formatting(&format_cpf(&digits)), digits);
        assert_eq!(strip_cnpj_formatting(&format_cnpj(&digits)), digits);
    }
});
