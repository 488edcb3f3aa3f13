use anyhow::Result;
use recase_core::{convert, CaseStyle};

const SAMPLE: &str = "convert this string";

pub fn execute() -> Result<()> {
    println!("Available styles:");
    for style in CaseStyle::all() {
        println!("  - {:<8} {}", style.name(), convert(SAMPLE, *style));
    }

    Ok(())
}
