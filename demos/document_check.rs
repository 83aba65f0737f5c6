use brain_agro::document::*;

fn main() {
    println!("=== Document Validation ===\n");

    let inputs = [
        "111.444.777-35",
        "123.456.789-00",     // wrong check digits
        "000.000.000-00",     // repeated digits
        "11.222.333/0001-81",
        "11444777000161",
        "12.345",             // neither CPF nor CNPJ
    ];

    for input in &inputs {
        match Document::parse(input) {
            Ok(doc) => println!(
                "  {input} => valid {} (stored as {}, shown as {doc})",
                doc.kind(),
                doc.as_str()
            ),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    println!("\n=== Check Digits ===\n");

    for base in ["111444777", "529982247"] {
        if let Some([c1, c2]) = cpf_check_digits(base) {
            println!("  CPF base {base} => {}", format_cpf(&format!("{base}{c1}{c2}")));
        }
    }
    if let Some([c1, c2]) = cnpj_check_digits("112223330001") {
        println!("  CNPJ base 112223330001 => {}", format_cnpj(&format!("112223330001{c1}{c2}")));
    }
}
