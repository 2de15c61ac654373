use colored::Colorize;
use gs_mechanics::{Attribute, CheckRequest, evaluate, resolve, seeded, unseeded};

pub fn run(
    attribute: &str,
    value: i32,
    difficulty: u32,
    roll: Option<u32>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let attribute: Attribute = attribute.parse().map_err(|e| format!("{e}"))?;
    let request = CheckRequest::new(attribute, difficulty);

    let outcome = match (roll, seed) {
        (Some(roll), _) => evaluate(attribute, value, difficulty, roll),
        (None, Some(seed)) => resolve(&request, value, &mut seeded(seed)),
        (None, None) => resolve(&request, value, &mut unseeded()),
    };

    if json {
        let out = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let verdict = if outcome.success {
        "SUCCESS".green().bold()
    } else {
        "FAILURE".red().bold()
    };
    println!(
        "  {} {} + d6 ({}) = {} vs {} + 6 = {}",
        outcome.attribute,
        outcome.attribute_value,
        outcome.roll,
        outcome.total,
        outcome.difficulty,
        outcome.target
    );
    println!("  {verdict}");
    Ok(())
}
