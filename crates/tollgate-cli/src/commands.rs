//! Command handlers

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tollgate_app::{run_script, Config, Script};
use tollgate_domain::{PerHourPricing, PricingPolicy};
use tollgate_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands, ConfigAction};
use crate::output::{output_config, output_quote, output_simulation, Quote};

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Quote {
            rate,
            fixed,
            minutes,
            from,
            to,
        } => cmd_quote(rate, fixed, minutes, from, to, cli.format),
        Commands::Simulate { script, config } => {
            let config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            let script = Script::load_from(&script)?;
            let report = run_script(&config, &script)?;
            output_simulation(cli.format, &report)
        }
        Commands::Config { action } => cmd_config(action, cli.format),
    }
}

fn cmd_quote(
    rate: Decimal,
    fixed: Decimal,
    minutes: Option<i64>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    format: OutputFormat,
) -> Result<()> {
    let policy = PerHourPricing::with_fixed_amount(rate, fixed)?;
    let (start, end) = match minutes {
        Some(minutes) => {
            let start = Utc::now();
            let end = Duration::try_minutes(minutes)
                .and_then(|stay| start.checked_add_signed(stay))
                .ok_or_else(|| Error::InvalidDate(format!("Stay of {} minutes is out of range", minutes)))?;
            (Some(start), Some(end))
        }
        None => (from, to),
    };
    debug!(%policy, ?start, ?end, "Quoting stay");

    let amount = policy.calculate_price(start, end)?;
    let minutes = match (start, end) {
        (Some(start), Some(end)) => (end - start).num_minutes(),
        _ => 0,
    };
    output_quote(
        format,
        &Quote {
            policy: policy.to_string(),
            minutes,
            amount,
        },
    )
}

fn cmd_config(action: ConfigAction, format: OutputFormat) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            output_config(format, &config)
        }
        ConfigAction::Init { force } => {
            let path = Config::config_path()?;
            if path.exists() && !force {
                return Err(Error::Config(tollgate_types::ConfigError::SaveError(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))));
            }
            let path = Config::default().save()?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}
