use crate::output::print_json;
use anyhow::Context;
use clap::Args;
use medstrat_core::recommend;
use medstrat_core::session::Session;
use medstrat_core::types::{ExperienceBand, Rating};
use medstrat_core::view::{self, StrategyReport};

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Specialty key (e.g. cardiology)
    #[arg(long)]
    pub specialty: Option<String>,

    /// Experience band (e.g. "0-5 years")
    #[arg(long)]
    pub experience: Option<String>,

    /// Practice type key (e.g. individual_clinic)
    #[arg(long = "practice-type")]
    pub practice_type: Option<String>,

    /// Patient type key; repeatable
    #[arg(long = "patient-type")]
    pub patient_types: Vec<String>,

    /// Competitive rating as factor=1|2|3; repeatable
    #[arg(long = "rate", value_parser = parse_rating)]
    pub ratings: Vec<(String, Rating)>,

    /// Marketing focus key (e.g. patient_retention)
    #[arg(long)]
    pub focus: Option<String>,
}

fn parse_rating(raw: &str) -> Result<(String, Rating), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected factor=rating, got '{raw}'"))?;
    let n: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("rating must be 1, 2 or 3, got '{value}'"))?;
    let rating = Rating::try_from(n).map_err(|e| e.to_string())?;
    Ok((key.trim().to_string(), rating))
}

impl ProfileArgs {
    /// Build a session from the flags, validating every key against the
    /// catalogs. Step gating does not apply here.
    pub fn to_session(&self) -> anyhow::Result<Session> {
        let mut s = Session::new();
        if let Some(key) = &self.specialty {
            s.select_specialty(key).context("--specialty")?;
        }
        if let Some(raw) = &self.experience {
            let band: ExperienceBand = raw.parse().context("--experience")?;
            s.select_experience(band);
        }
        if let Some(key) = &self.practice_type {
            s.select_practice_type(key).context("--practice-type")?;
        }
        for key in &self.patient_types {
            s.set_patient_type(key, true).context("--patient-type")?;
        }
        for (key, rating) in &self.ratings {
            s.rate_factor(key, *rating).context("--rate")?;
        }
        if let Some(key) = &self.focus {
            s.select_focus(key).context("--focus")?;
        }
        Ok(s)
    }
}

pub fn run(profile: &ProfileArgs, json: bool) -> anyhow::Result<()> {
    let session = profile.to_session()?;
    let report = view::strategy_report(&session);

    if json {
        return print_json(&serde_json::json!({
            "report": report,
            "specialty": recommend::specialty_recommendations(&session),
            "competitive": recommend::competitive_summary(&session),
        }));
    }

    print_report(&report);

    let specialty = recommend::specialty_recommendations(&session);
    if !specialty.is_empty() {
        section("Content topics", &specialty.content_topics);
        section("Community programs", &specialty.community_programs);
    }

    let competitive = recommend::competitive_summary(&session);
    for entry in &competitive.improvement_areas {
        section(&format!("Improve: {}", entry.name), entry.strategies);
    }
    Ok(())
}

fn section(title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}");
    for item in items {
        println!("  - {item}");
    }
}

fn print_report(r: &StrategyReport) {
    let p = &r.profile;
    println!("Specialty:     {}", p.specialty);
    println!("Experience:    {}", p.experience);
    println!("Practice type: {}", p.practice_type);
    println!("Focus:         {}", p.marketing_focus);
    println!("Budget:        {}", p.budget);

    if let Some(e) = &r.experience {
        println!("\nExperience focus: {}", e.focus);
        section("Key actions", e.key_actions);
    }

    section("Marketing channels", &r.practice_plan.marketing_channels);
    section("Technology needs", &r.practice_plan.technology_needs);

    let s = &r.strategy;
    section("Personal branding", &s.personal_branding);
    section("Patient acquisition", &s.patient_acquisition);
    section("Patient retention", &s.patient_retention);
    section("Professional development", &s.professional_development);
    section("Reputation management", &s.reputation_management);
    section("Financial planning", &s.financial_planning);

    for period in r.timeline {
        section(period.label, period.milestones);
    }
    for window in r.action_items {
        section(window.label, window.items);
    }
    section("Metrics to track", r.metrics);
}
