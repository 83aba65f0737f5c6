use brain_agro::registry::*;

fn main() {
    println!("=== Producer Registration ===\n");

    let payloads = [
        ProducerInput {
            document: "111.444.777-35".into(),
            name: "João da Silva".into(),
        },
        ProducerInput {
            document: "11.222.333/0001-81".into(),
            name: "Agropecuária Cerrado Ltda".into(),
        },
        ProducerInput {
            document: "123.456".into(),
            name: "".into(),
        },
    ];

    for payload in payloads {
        match payload.into_producer() {
            Ok(p) => println!("  registered {} ({} {})", p.name, p.document.kind(), p.document),
            Err(e) => println!("  rejected: {e}"),
        }
    }

    println!("\n=== Farm Payload ===\n");

    let farm = FarmInput {
        name: "Fazenda Boa Esperança".into(),
        city: "Lucas do Rio Verde".into(),
        state: "MT".into(),
        total_area: 1200.0,
        arable_area: 900.0,
        vegetation_area: 400.0,
    };
    let errors = validate_farm(&farm);
    println!("  Found {} validation errors:", errors.len());
    for e in &errors {
        println!("  - {e}");
    }
}
