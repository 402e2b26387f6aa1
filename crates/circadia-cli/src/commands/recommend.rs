//! Recommendation commands: hourly time slots and day-level summary.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use circadia_core::{daily_recommendation, hourly_energy, phase_advice, time_slots};

use crate::storage::RecordStore;

#[derive(Subcommand)]
pub enum RecommendAction {
    /// Hour-by-hour activity suggestions
    Hours {
        /// Target date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Day-level food and activity suggestions
    Daily {
        /// Target date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RecommendAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RecommendAction::Hours { date, json } => show_hours(date, json),
        RecommendAction::Daily { date, json } => show_daily(date, json),
    }
}

fn target_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn show_hours(date: Option<NaiveDate>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::load()?;
    let profile = store.require_profile()?;
    let date = target_date(date);

    let levels = hourly_energy(profile, store.cycle.as_ref(), date);
    let slots = time_slots(&levels);

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    println!("Recommendations for {date}:");
    for slot in &slots {
        let names: Vec<&str> = slot
            .activities
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        println!(
            "{:02}:00 [{:>3}%] {}",
            slot.hour,
            slot.energy_level,
            names.join(", ")
        );
        println!("       {}", slot.rationale);
    }
    Ok(())
}

fn show_daily(date: Option<NaiveDate>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::load()?;
    let profile = store.require_profile()?;
    let date = target_date(date);

    let levels = hourly_energy(profile, store.cycle.as_ref(), date);
    let phase = levels[0].phase;
    let total: u32 = levels.iter().map(|l| u32::from(l.energy)).sum();
    let average = (f64::from(total) / levels.len() as f64).round() as u8;

    let recommendation = daily_recommendation(average, phase);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    println!("Daily summary for {date} ({phase} phase, {average}% energy)");
    println!("\nFoods:");
    for food in recommendation.foods.iter().take(3) {
        println!("  - {food}");
    }
    println!("\nActivities:");
    for activity in recommendation.activities.iter().take(3) {
        println!("  - {activity}");
    }
    println!("\n{}", phase_advice(phase));
    Ok(())
}
