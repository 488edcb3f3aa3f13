use anyhow::Result;
use recase_core::{dot_case_value, kebab_case_value, to_camel_case, to_dot_case, to_kebab_case};
use serde_json::{json, Value};

pub fn execute() -> Result<()> {
    println!("kebab-case:");
    for input in [
        "hello world",
        "hello_world",
        "helloWorld",
        "hello   world",
        "hello, world!",
    ] {
        println!("  {:?} -> {:?}", input, to_kebab_case(input));
    }

    println!("\ndot.case:");
    for input in ["HELLO_WORLD", "hello!!!world???"] {
        println!("  {:?} -> {:?}", input, to_dot_case(input));
    }

    println!("\ncamelCase:");
    for input in ["convert-this-string", "HTTPServer"] {
        println!("  {:?} -> {:?}", input, to_camel_case(input));
    }

    println!("\nabsent input:");
    println!("  null -> {:?}", kebab_case_value(Some(&Value::Null))?);
    println!("  undefined -> {:?}", kebab_case_value(None)?);

    println!("\nrejected input:");
    for value in [json!(123), json!({"name": "x"}), json!([1, 2, 3])] {
        match dot_case_value(Some(&value)) {
            Ok(output) => println!("  {} -> {:?}", value, output),
            Err(err) => println!("  {} -> error: {}", value, err),
        }
    }

    Ok(())
}
