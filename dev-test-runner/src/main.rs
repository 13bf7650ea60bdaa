//! Manual smoke harness: run the generator over representative payloads and
//! print every target's output for eyeballing.

use dto_kit::typegen::{self, GenerateOptions, JavaStyle, Target};

fn sample_payloads() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "order",
            r#"{
                "order_id": "A-1001",
                "total": 149.9,
                "installments": 3,
                "paid": true,
                "customer": {
                    "customer_id": 7,
                    "full_name": "Ana Souza",
                    "address": { "city": "Sao Paulo", "zip_code": "01000-000" }
                },
                "items": [
                    { "sku": "SKU-1", "qty": 2, "unit_price": 49.95 }
                ],
                "tags": ["priority", "gift"],
                "coupon": null,
                "history": []
            }"#,
        ),
        ("batch", r#"[{"id": 1, "payload": {"ok": true}}]"#),
        ("scalar", "42"),
    ]
}

fn main() {
    for (root_name, json_text) in sample_payloads() {
        for (label, target, java_style) in [
            ("typescript", Target::TypeScript, JavaStyle::Lombok),
            ("java/lombok", Target::Java, JavaStyle::Lombok),
            ("java/record", Target::Java, JavaStyle::Record),
        ] {
            let options = GenerateOptions {
                root_name: root_name.to_string(),
                suffix: "Api".to_string(),
                target,
                java_style,
            };
            println!("———— {root_name} → {label} ————");
            match typegen::generate(json_text, &options) {
                Ok(Some(code)) if code.is_empty() => println!("(no declarations)"),
                Ok(Some(code)) => println!("{code}"),
                Ok(None) => println!("(skipped: blank input)"),
                Err(error) => println!("(error: {error})"),
            }
            println!();
        }
    }
}
