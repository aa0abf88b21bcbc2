use super::PracticeType;
use crate::types::PracticeScale;

pub static PRACTICE_TYPES: &[PracticeType] = &[
    PracticeType {
        key: "individual_clinic",
        name: "Individual Clinic",
        desc: "Solo practitioner with own clinic",
        scale: PracticeScale::Small,
        marketing_needs: "Personal branding, local visibility and word-of-mouth",
        marketing_budget: "5-10% of revenue",
        team_needs: "Receptionist, part-time marketing support",
    },
    PracticeType {
        key: "visiting_consultant",
        name: "Visiting Consultant",
        desc: "Consulting at multiple hospitals and clinics",
        scale: PracticeScale::Small,
        marketing_needs: "Professional reputation and referral relationships across facilities",
        marketing_budget: "3-5% of revenue",
        team_needs: "Personal assistant for scheduling",
    },
    PracticeType {
        key: "group_practice",
        name: "Group Practice",
        desc: "Several doctors sharing a practice",
        scale: PracticeScale::Medium,
        marketing_needs: "Practice brand, doctor profiles and coordinated referrals",
        marketing_budget: "8-12% of revenue",
        team_needs: "Practice manager, front desk team, marketing coordinator",
    },
    PracticeType {
        key: "polyclinic",
        name: "Polyclinic",
        desc: "Multi-specialty outpatient center",
        scale: PracticeScale::Medium,
        marketing_needs: "Multi-specialty positioning and corporate tie-ups",
        marketing_budget: "8-12% of revenue",
        team_needs: "Operations manager, marketing executive, patient relations staff",
    },
    PracticeType {
        key: "nursing_home",
        name: "Nursing Home",
        desc: "Small inpatient facility with beds and procedures",
        scale: PracticeScale::Large,
        marketing_needs: "Institutional trust, insurance empanelment and referral network",
        marketing_budget: "10-15% of revenue",
        team_needs: "Marketing manager, insurance desk, patient relations team",
    },
    PracticeType {
        key: "hospital",
        name: "Hospital",
        desc: "Multi-department hospital",
        scale: PracticeScale::VeryLarge,
        marketing_needs: "Institutional brand, center-of-excellence campaigns and digital marketing",
        marketing_budget: "2-5% of revenue (large absolute budget)",
        team_needs: "Dedicated marketing department, digital team, PR agency",
    },
];
