//! Circadian profile commands.

use chrono::{NaiveTime, Timelike};
use clap::Subcommand;

use circadia_core::{analyze_chronotype, Chronotype, CircadianProfile, Gender};

use crate::storage::RecordStore;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create or update the circadian profile
    Set {
        /// Chronotype override (morning/intermediate/evening); skips derivation
        #[arg(long)]
        chronotype: Option<Chronotype>,
        /// Natural wake time (HH:MM), used to derive the chronotype
        #[arg(long)]
        wake: Option<NaiveTime>,
        /// Peak energy time (HH:MM), used to derive the chronotype
        #[arg(long)]
        peak: Option<NaiveTime>,
        /// Gender (male/female)
        #[arg(long)]
        gender: Option<Gender>,
    },
    /// Show the stored profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Set {
            chronotype,
            wake,
            peak,
            gender,
        } => set_profile(chronotype, wake, peak, gender),
        ProfileAction::Show { json } => show_profile(json),
    }
}

fn set_profile(
    chronotype: Option<Chronotype>,
    wake: Option<NaiveTime>,
    peak: Option<NaiveTime>,
    gender: Option<Gender>,
) -> Result<(), Box<dyn std::error::Error>> {
    let chronotype = match (chronotype, wake, peak) {
        (Some(chronotype), _, _) => chronotype,
        (None, Some(wake), Some(peak)) => analyze_chronotype(wake.hour(), peak.hour()),
        _ => {
            return Err(
                "provide either --chronotype or both --wake and --peak to derive it".into(),
            )
        }
    };

    let mut store = RecordStore::load()?;
    store.profile = Some(CircadianProfile {
        chronotype,
        gender,
        natural_wake_time: wake,
        peak_energy_time: peak,
    });
    store.save()?;

    println!("Profile saved: chronotype is {chronotype}");
    Ok(())
}

fn show_profile(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::load()?;
    let profile = store.require_profile()?;

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("Chronotype: {}", profile.chronotype);
    if let Some(gender) = profile.gender {
        println!("Gender: {gender}");
    }
    if let Some(wake) = profile.natural_wake_time {
        println!("Natural wake time: {}", wake.format("%H:%M"));
    }
    if let Some(peak) = profile.peak_energy_time {
        println!("Peak energy time: {}", peak.format("%H:%M"));
    }
    Ok(())
}
