use colored::*;

use crate::error::Result;
use crate::types::ActionResult;

/// Plain text for a single outcome line.
pub fn format_result(result: &ActionResult) -> String {
    if result.succeeded {
        format!("✅ Starred {}", result.repo)
    } else {
        format!(
            "❌ Failed to star {}: {} - {}",
            result.repo, result.status, result.message
        )
    }
}

pub fn print_result(result: &ActionResult) {
    let line = format_result(result);
    if result.succeeded {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}

/// Closing stats line. Prints nothing for an empty run.
pub fn print_summary(results: &[ActionResult]) {
    if results.is_empty() {
        return;
    }

    let starred = results.iter().filter(|r| r.succeeded).count();
    let failed = results.len() - starred;

    println!();
    println!("📊 Starred {} of {} repositories", starred, results.len());
    if failed > 0 {
        println!("{}", format!("⚠️ {} failed", failed).yellow());
    }
}

/// Emit the full result list as a JSON array on stdout.
pub fn print_json(results: &[ActionResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
