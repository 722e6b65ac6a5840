//! Output formatting module

use serde::Serialize;
use tollgate_app::simulation::Outcome;
use tollgate_app::{Config, SimulationReport};
use tollgate_domain::Money;
use tollgate_types::{OutputFormat, Result};

#[derive(Debug, Serialize)]
pub struct Quote {
    pub policy: String,
    pub minutes: i64,
    pub amount: Money,
}

pub fn output_quote(output_format: OutputFormat, quote: &Quote) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quote)?);
    } else {
        println!("Policy:   {}", quote.policy);
        println!("Minutes:  {}", quote.minutes);
        println!("Amount:   {}", quote.amount);
    }
    Ok(())
}

pub fn output_config(output_format: OutputFormat, config: &Config) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config);
    }
    Ok(())
}

pub fn output_simulation(output_format: OutputFormat, report: &SimulationReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\nSimulation Result");
    println!("=================");
    println!(
        "{:<22} {:<12} {:<16} {:>8} {:>10}",
        "Time", "Label", "Outcome", "Minutes", "Amount"
    );
    println!("{}", "-".repeat(72));
    for event in &report.events {
        let (outcome, minutes, amount) = match &event.outcome {
            Outcome::Admitted { category, .. } => (format!("in ({})", category), String::new(), String::new()),
            Outcome::Refused { category } => (format!("full ({})", category), String::new(), String::new()),
            Outcome::Released { minutes, amount, .. } => ("out".to_string(), minutes.to_string(), amount.to_string()),
            Outcome::TicketNotFound => ("unknown ticket".to_string(), String::new(), String::new()),
        };
        println!(
            "{:<22} {:<12} {:<16} {:>8} {:>10}",
            event.at.format("%Y-%m-%d %H:%M:%S"),
            truncate_str(&event.label, 12),
            outcome,
            minutes,
            amount
        );
    }
    println!("{}", "-".repeat(72));

    println!("\nAdmitted: {}  Refused: {}  Released: {}", report.admitted(), report.refused(), report.released());
    println!("Revenue:  {}", report.total_revenue);

    println!("\nOccupancy");
    for row in &report.occupancy {
        println!("  {:<15} {:>3} / {:<3}", row.category, row.occupied, row.maximum);
    }
    if !report.still_parked.is_empty() {
        println!("\nStill parked: {}", report.still_parked.join(", "));
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 12), "short");
        assert_eq!(truncate_str("a-very-long-label", 8), "a-very..");
    }
}
