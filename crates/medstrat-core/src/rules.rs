use crate::knowledge::BrandStrategy;
use crate::ranking::BrandRule;
use crate::types::StrategyFocus;

// ---------------------------------------------------------------------------
// Condition helpers
// ---------------------------------------------------------------------------

fn focus_in(strategy: &BrandStrategy, allowed: &[StrategyFocus]) -> bool {
    allowed.contains(&strategy.focus)
}

fn named(strategy: &BrandStrategy, names: &[&str]) -> bool {
    names.contains(&strategy.name)
}

// ---------------------------------------------------------------------------
// Default rules (one per marketing focus)
// ---------------------------------------------------------------------------

pub fn default_rules() -> Vec<BrandRule> {
    vec![
        BrandRule {
            id: "new_patients_reach",
            focus: "new_patients",
            condition: |s| focus_in(s, &[StrategyFocus::Both, StrategyFocus::PatientEducation]),
            reasoning: "Reaches prospective patients where they search and learn about their health",
        },
        BrandRule {
            id: "retention_relationships",
            focus: "patient_retention",
            condition: |s| named(s, &["Patient Relationship Management"]),
            reasoning: "Keeps existing patients engaged through follow-up and personal attention",
        },
        BrandRule {
            id: "referral_network",
            focus: "referral_volume",
            condition: |s| named(s, &["Referral Network Building"]),
            reasoning: "Builds steady referral flow from physicians who trust your care",
        },
        BrandRule {
            id: "premium_offering",
            focus: "premium_services",
            condition: |s| named(s, &["Premium & Concierge Services"]),
            reasoning: "Packages high-touch services for patients who value convenience",
        },
        BrandRule {
            id: "expert_credentials",
            focus: "expert_positioning",
            condition: |s| {
                named(
                    s,
                    &[
                        "Academic & Research Presence",
                        "Specialized Certifications & Training",
                    ],
                )
            },
            reasoning: "Demonstrates depth of expertise to peers and patients",
        },
        BrandRule {
            id: "institutional_standing",
            focus: "institutional_reputation",
            condition: |s| focus_in(s, &[StrategyFocus::Professional, StrategyFocus::Community]),
            reasoning: "Strengthens standing with the professional community and the public",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::MARKETING_FOCUS_AREAS;

    #[test]
    fn one_rule_per_focus_area() {
        let rules = default_rules();
        assert_eq!(rules.len(), MARKETING_FOCUS_AREAS.len());
        for area in MARKETING_FOCUS_AREAS {
            assert_eq!(
                rules.iter().filter(|r| r.focus == area.key).count(),
                1,
                "focus {}",
                area.key
            );
        }
    }

    #[test]
    fn rule_ids_are_unique() {
        let rules = default_rules();
        let mut ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rules.len());
    }
}
