//! Property-based tests for document checksums and farm area rules.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(all(feature = "document", feature = "farm"))]

use brain_agro::document::*;
use brain_agro::farm::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Digit strings of a fixed length, excluding repeated-digit sequences.
fn arb_base(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=9, len)
        .prop_filter("repeated digits", |d| d.windows(2).any(|w| w[0] != w[1]))
        .prop_map(|d| d.iter().map(|n| char::from(b'0' + n)).collect())
}

/// A valid unformatted CPF.
fn arb_cpf() -> impl Strategy<Value = String> {
    arb_base(9).prop_map(|base| {
        let [c1, c2] = cpf_check_digits(&base).unwrap();
        format!("{base}{c1}{c2}")
    })
}

/// A valid unformatted CNPJ.
fn arb_cnpj() -> impl Strategy<Value = String> {
    arb_base(12).prop_map(|base| {
        let [c1, c2] = cnpj_check_digits(&base).unwrap();
        format!("{base}{c1}{c2}")
    })
}

/// Count how many of the 100 possible check digit pairs validate.
fn valid_pairs(base: &str, validate: fn(&str) -> bool) -> usize {
    (0..100)
        .filter(|n| validate(&format!("{base}{n:02}")))
        .count()
}

// ── Documents ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cpf_format_strip_roundtrip(cpf in arb_cpf()) {
        let formatted = format_cpf(&cpf);
        prop_assert_eq!(formatted.len(), 14);
        prop_assert_eq!(strip_cpf_formatting(&formatted), cpf);
    }

    #[test]
    fn cnpj_format_strip_roundtrip(cnpj in arb_cnpj()) {
        let formatted = format_cnpj(&cnpj);
        prop_assert_eq!(formatted.len(), 18);
        prop_assert_eq!(strip_cnpj_formatting(&formatted), cnpj);
    }

    #[test]
    fn generated_documents_validate(cpf in arb_cpf(), cnpj in arb_cnpj()) {
        prop_assert!(validate_cpf(&cpf));
        prop_assert!(validate_cpf(&format_cpf(&cpf)));
        prop_assert!(validate_cnpj(&cnpj));
        prop_assert!(validate_cnpj(&format_cnpj(&cnpj)));
    }

    #[test]
    fn strip_is_idempotent(s in ".*") {
        let once = strip_cpf_formatting(&s);
        prop_assert_eq!(strip_cpf_formatting(&once), once.clone());
        prop_assert_eq!(strip_cnpj_formatting(&once), once);
    }

    #[test]
    fn exactly_one_cpf_check_pair(base in arb_base(9)) {
        prop_assert_eq!(valid_pairs(&base, validate_cpf), 1);
    }

    #[test]
    fn exactly_one_cnpj_check_pair(base in arb_base(12)) {
        prop_assert_eq!(valid_pairs(&base, validate_cnpj), 1);
    }

    #[test]
    fn validators_never_panic(s in "\\PC*") {
        let _ = validate_cpf(&s);
        let _ = validate_cnpj(&s);
        let _ = format_cpf(&s);
        let _ = format_cnpj(&s);
        let _ = Document::parse(&s);
    }

    #[test]
    fn document_parse_agrees_with_predicates(cpf in arb_cpf(), cnpj in arb_cnpj()) {
        prop_assert_eq!(Document::parse(&cpf).unwrap().kind(), DocumentKind::Cpf);
        prop_assert_eq!(Document::parse(&cnpj).unwrap().kind(), DocumentKind::Cnpj);
    }
}

#[test]
fn repeated_digit_bases_have_no_valid_pair() {
    for d in 0..=9 {
        let cpf_base = d.to_string().repeat(9);
        let cnpj_base = d.to_string().repeat(12);
        // the checksum pair would make an all-same sequence for CPF
        assert_eq!(valid_pairs(&cpf_base, validate_cpf), 0, "{cpf_base}");
        assert!(valid_pairs(&cnpj_base, validate_cnpj) <= 1, "{cnpj_base}");
    }
}

// ── Farm areas ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn valid_iff_sum_fits(
        total in 0.01f64..1_000_000.0,
        arable in 0.0f64..1_000_000.0,
        vegetation in 0.0f64..1_000_000.0,
    ) {
        let r = validate_farm_area(total, arable, vegetation);
        prop_assert_eq!(r.is_valid, arable + vegetation <= total);
        prop_assert_eq!(r.is_valid, r.error.is_none());
    }

    #[test]
    fn non_positive_total_always_reported_first(
        total in -1_000.0f64..=0.0,
        arable in -1_000.0f64..1_000.0,
        vegetation in -1_000.0f64..1_000.0,
    ) {
        prop_assert_eq!(
            check_farm_area(total, arable, vegetation),
            Some(FarmAreaViolation::NonPositiveTotal)
        );
    }

    #[test]
    fn partitions_of_total_are_valid(total in 1u32..100_000, pct in 0u32..=100) {
        let total = f64::from(total);
        let arable = total * f64::from(pct) / 100.0;
        let vegetation = total - arable;
        // arable + (total - arable) can round above total; only assert when it does not
        prop_assume!(arable + vegetation <= total);
        prop_assert!(assert_valid_farm_area(total, arable, vegetation).is_ok());
    }
}
