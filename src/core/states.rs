//! Brazilian federative unit (UF) codes.
//!
//! The 26 states plus the Federal District, as used in farm addresses.

/// Check whether `code` is a known UF code. Only uppercase codes match.
pub fn is_known_state_code(code: &str) -> bool {
    STATES.binary_search_by_key(&code, |&(c, _)| c).is_ok()
}

/// Full name of the state for a UF code, e.g. `"SP"` → `"São Paulo"`.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| STATES[i].1)
}

/// Sorted by code for binary search.
static STATES: &[(&str, &str)] = &[
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AM", "Amazonas"),
    ("AP", "Amapá"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MG", "Minas Gerais"),
    ("MS", "Mato Grosso do Sul"),
    ("MT", "Mato Grosso"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("PR", "Paraná"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("RS", "Rio Grande do Sul"),
    ("SC", "Santa Catarina"),
    ("SE", "Sergipe"),
    ("SP", "São Paulo"),
    ("TO", "Tocantins"),
];
