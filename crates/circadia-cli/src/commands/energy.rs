//! Energy commands: hourly chart and 7-day forecast.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use circadia_core::{forecast, hourly_energy, EnergyLevel};

use crate::storage::RecordStore;

#[derive(Subcommand)]
pub enum EnergyAction {
    /// Show hourly energy for a day
    Show {
        /// Target date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the 7-day forecast
    Forecast {
        /// First forecast day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EnergyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EnergyAction::Show { date, json } => show_energy(date, json),
        EnergyAction::Forecast { date, json } => show_forecast(date, json),
    }
}

fn target_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn show_energy(date: Option<NaiveDate>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::load()?;
    let profile = store.require_profile()?;
    let date = target_date(date);

    let levels = hourly_energy(profile, store.cycle.as_ref(), date);

    if json {
        println!("{}", serde_json::to_string_pretty(&levels)?);
        return Ok(());
    }

    println!("{}", render_energy_chart(date, &levels));
    Ok(())
}

/// Render one day of hourly energies as an ASCII bar chart.
fn render_energy_chart(date: NaiveDate, levels: &[EnergyLevel]) -> String {
    let mut output = format!("\nEnergy for {date} ({} phase):\n", levels[0].phase);
    output.push_str(&"─".repeat(42));
    output.push('\n');

    for level in levels {
        let bar_length = (level.energy as usize * 30) / 100;
        let bar = "█".repeat(bar_length);
        let empty = " ".repeat(30 - bar_length);
        output.push_str(&format!(
            "{:02}:00 {}{} {:>3}%\n",
            level.hour, bar, empty, level.energy
        ));
    }

    output.push_str(&"─".repeat(42));
    output
}

fn show_forecast(date: Option<NaiveDate>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::load()?;
    let profile = store.require_profile()?;
    let today = target_date(date);

    let predictions = forecast(profile, store.cycle.as_ref(), today);

    if json {
        println!("{}", serde_json::to_string_pretty(&predictions)?);
        return Ok(());
    }

    println!("{:<12} {:<12} {}", "Date", "Phase", "Energy");
    for day in &predictions {
        let bar = "█".repeat((day.baseline_energy as usize * 20) / 100);
        println!(
            "{:<12} {:<12} {:>3}% {}",
            day.date.to_string(),
            day.cycle_phase.to_string(),
            day.baseline_energy,
            bar
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use circadia_core::{Chronotype, CircadianProfile};

    #[test]
    fn test_chart_has_one_row_per_hour() {
        let profile = CircadianProfile::new(Chronotype::Morning);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let levels = hourly_energy(&profile, None, date);

        let chart = render_energy_chart(date, &levels);
        assert_eq!(chart.matches(":00 ").count(), 24);
        assert!(chart.contains("neutral phase"));
        assert!(chart.contains("100%"));
    }
}
