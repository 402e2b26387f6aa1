//! Menstrual cycle baseline commands.

use chrono::NaiveDate;
use clap::Subcommand;

use circadia_core::MenstrualCycleBaseline;

use crate::storage::RecordStore;

#[derive(Subcommand)]
pub enum CycleAction {
    /// Record or update the cycle baseline
    Set {
        /// Date the last period started (YYYY-MM-DD)
        #[arg(long)]
        last_period: NaiveDate,
        /// Average cycle length in days (21-35)
        #[arg(long)]
        length: u32,
        /// Expected start of the next period (defaults to last period + length)
        #[arg(long)]
        next_expected: Option<NaiveDate>,
    },
    /// Show the stored baseline
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove the stored baseline
    Clear,
}

pub fn run(action: CycleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CycleAction::Set {
            last_period,
            length,
            next_expected,
        } => set_cycle(last_period, length, next_expected),
        CycleAction::Show { json } => show_cycle(json),
        CycleAction::Clear => clear_cycle(),
    }
}

fn set_cycle(
    last_period: NaiveDate,
    length: u32,
    next_expected: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let baseline = MenstrualCycleBaseline::new(last_period, length, next_expected)?;

    let mut store = RecordStore::load()?;
    store.cycle = Some(baseline.clone());
    store.save()?;

    println!(
        "Cycle baseline saved: {} day cycle, next period expected {}",
        baseline.cycle_length, baseline.next_period_expected
    );
    Ok(())
}

fn show_cycle(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::load()?;
    let Some(cycle) = store.cycle.as_ref() else {
        println!("No cycle baseline recorded.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(cycle)?);
        return Ok(());
    }

    println!("Last period start: {}", cycle.last_period_start);
    println!("Cycle length: {} days", cycle.cycle_length);
    println!("Next period expected: {}", cycle.next_period_expected);
    Ok(())
}

fn clear_cycle() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = RecordStore::load()?;
    if store.cycle.take().is_none() {
        println!("No cycle baseline recorded.");
        return Ok(());
    }
    store.save()?;
    println!("Cycle baseline cleared.");
    Ok(())
}
