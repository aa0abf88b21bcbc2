use crate::output::{print_json, print_table};
use clap::ValueEnum;
use medstrat_core::knowledge;
use medstrat_core::types::ExperienceBand;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CatalogTable {
    Specialties,
    Experience,
    PracticeTypes,
    Facilities,
    PatientTypes,
    Services,
    Factors,
    FocusAreas,
    BrandStrategies,
}

pub fn run(table: Option<CatalogTable>, json: bool) -> anyhow::Result<()> {
    let Some(table) = table else {
        return summary(json);
    };

    if json {
        let catalog = knowledge::catalog();
        return match table {
            CatalogTable::Specialties => print_json(&catalog.specialties),
            CatalogTable::Experience => print_json(&catalog.experience_bands),
            CatalogTable::PracticeTypes => print_json(&catalog.practice_types),
            CatalogTable::Facilities => print_json(&catalog.diagnostic_facilities),
            CatalogTable::PatientTypes => print_json(&catalog.patient_types),
            CatalogTable::Services => print_json(&catalog.additional_services),
            CatalogTable::Factors => print_json(&catalog.competitive_factors),
            CatalogTable::FocusAreas => print_json(&catalog.marketing_focus_areas),
            CatalogTable::BrandStrategies => print_json(&catalog.brand_strategies),
        };
    }

    match table {
        CatalogTable::Specialties => print_table(
            &["KEY", "NAME", "DESCRIPTION"],
            knowledge::SPECIALTIES
                .iter()
                .map(|s| vec![s.key.into(), s.name.into(), s.desc.into()])
                .collect(),
        ),
        CatalogTable::Experience => print_table(
            &["BAND", "FOCUS"],
            knowledge::EXPERIENCE_STRATEGIES
                .iter()
                .map(|e| vec![e.band.to_string(), e.focus.into()])
                .collect(),
        ),
        CatalogTable::PracticeTypes => print_table(
            &["KEY", "NAME", "SCALE", "BUDGET"],
            knowledge::PRACTICE_TYPES
                .iter()
                .map(|p| {
                    vec![
                        p.key.into(),
                        p.name.into(),
                        p.scale.to_string(),
                        p.marketing_budget.into(),
                    ]
                })
                .collect(),
        ),
        CatalogTable::Facilities => print_table(
            &["KEY", "NAME"],
            knowledge::DIAGNOSTIC_FACILITIES
                .iter()
                .map(|f| vec![f.key.into(), f.name.into()])
                .collect(),
        ),
        CatalogTable::PatientTypes => print_table(
            &["KEY", "NAME", "SERVICES"],
            knowledge::PATIENT_TYPES
                .iter()
                .map(|p| vec![p.key.into(), p.name.into(), p.services.len().to_string()])
                .collect(),
        ),
        CatalogTable::Services => print_table(
            &["SERVICE"],
            knowledge::ADDITIONAL_SERVICES
                .iter()
                .map(|s| vec![s.to_string()])
                .collect(),
        ),
        CatalogTable::Factors => print_table(
            &["KEY", "NAME", "ASPECTS"],
            knowledge::COMPETITIVE_FACTORS
                .iter()
                .map(|f| vec![f.key.into(), f.name.into(), f.aspects.join(", ")])
                .collect(),
        ),
        CatalogTable::FocusAreas => print_table(
            &["KEY", "NAME"],
            knowledge::MARKETING_FOCUS_AREAS
                .iter()
                .map(|f| vec![f.key.into(), f.name.into()])
                .collect(),
        ),
        CatalogTable::BrandStrategies => print_table(
            &["KEY", "NAME", "FOCUS", "TIME", "BUDGET"],
            knowledge::BRAND_STRATEGIES
                .iter()
                .map(|s| {
                    vec![
                        s.key.into(),
                        s.name.into(),
                        s.focus.to_string(),
                        s.time.into(),
                        s.budget.into(),
                    ]
                })
                .collect(),
        ),
    }
    Ok(())
}

fn summary(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&knowledge::catalog());
    }
    let counts = [
        ("specialties", knowledge::SPECIALTIES.len()),
        ("experience", ExperienceBand::all().len()),
        ("practice-types", knowledge::PRACTICE_TYPES.len()),
        ("facilities", knowledge::DIAGNOSTIC_FACILITIES.len()),
        ("patient-types", knowledge::PATIENT_TYPES.len()),
        ("services", knowledge::ADDITIONAL_SERVICES.len()),
        ("factors", knowledge::COMPETITIVE_FACTORS.len()),
        ("focus-areas", knowledge::MARKETING_FOCUS_AREAS.len()),
        ("brand-strategies", knowledge::BRAND_STRATEGIES.len()),
    ];
    print_table(
        &["TABLE", "ENTRIES"],
        counts
            .iter()
            .map(|(name, n)| vec![name.to_string(), n.to_string()])
            .collect(),
    );
    Ok(())
}
