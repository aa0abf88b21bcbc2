use super::{CompetitiveFactor, MarketingFocusArea};

pub static COMPETITIVE_FACTORS: &[CompetitiveFactor] = &[
    CompetitiveFactor {
        key: "clinical_expertise",
        name: "Clinical Expertise",
        aspects: &[
            "Qualifications",
            "Procedure volume",
            "Clinical outcomes",
            "Sub-specialty skills",
        ],
        improvement_strategies: &[
            "Publish outcome data and case studies",
            "Pursue fellowships and advanced certifications",
            "Present at conferences and CME events",
        ],
    },
    CompetitiveFactor {
        key: "patient_experience",
        name: "Patient Experience",
        aspects: &[
            "Waiting time",
            "Communication",
            "Staff courtesy",
            "Follow-up care",
        ],
        improvement_strategies: &[
            "Implement appointment scheduling with SMS reminders",
            "Train staff in patient communication",
            "Collect and act on patient feedback monthly",
        ],
    },
    CompetitiveFactor {
        key: "technology",
        name: "Technology & Facilities",
        aspects: &[
            "Diagnostic equipment",
            "Electronic records",
            "Online booking",
            "Clinic ambience",
        ],
        improvement_strategies: &[
            "Adopt an EMR with patient portal",
            "Offer online booking and teleconsultation",
            "Upgrade in-house diagnostics in phases",
        ],
    },
    CompetitiveFactor {
        key: "accessibility",
        name: "Location & Accessibility",
        aspects: &[
            "Location convenience",
            "Parking",
            "Consultation timings",
            "Emergency availability",
        ],
        improvement_strategies: &[
            "Extend evening and weekend hours",
            "Add satellite clinic or visiting slots",
            "Publish clear directions and parking information",
        ],
    },
    CompetitiveFactor {
        key: "pricing",
        name: "Pricing & Value",
        aspects: &[
            "Consultation fees",
            "Package pricing",
            "Insurance acceptance",
            "Price transparency",
        ],
        improvement_strategies: &[
            "Introduce transparent health packages",
            "Pursue insurance and TPA empanelment",
            "Offer follow-up visit bundles",
        ],
    },
    CompetitiveFactor {
        key: "online_reputation",
        name: "Online Reputation",
        aspects: &[
            "Google reviews",
            "Website quality",
            "Social media presence",
            "Doctor listing profiles",
        ],
        improvement_strategies: &[
            "Request reviews from satisfied patients",
            "Build a mobile-friendly website with doctor profiles",
            "Post regular educational content on social media",
        ],
    },
];

pub static MARKETING_FOCUS_AREAS: &[MarketingFocusArea] = &[
    MarketingFocusArea {
        key: "new_patients",
        name: "Attract New Patients",
        key_metrics: &[
            "New patient inquiries",
            "Website conversion rate",
            "Cost per acquisition",
        ],
        strategies: &[
            "Local SEO and Google My Business optimization",
            "Health awareness camps",
            "Educational social media content",
        ],
        expected_outcomes: &[
            "20-30% increase in new patients",
            "Improved online visibility",
            "Better conversion rates",
        ],
    },
    MarketingFocusArea {
        key: "patient_retention",
        name: "Improve Patient Retention",
        key_metrics: &[
            "Repeat visit rate",
            "Patient satisfaction score",
            "Follow-up adherence",
        ],
        strategies: &[
            "Structured follow-up reminders",
            "Patient education programs",
            "Loyalty and annual care plans",
        ],
        expected_outcomes: &[
            "15-25% increase in repeat visits",
            "Higher patient satisfaction",
            "Reduced patient churn",
        ],
    },
    MarketingFocusArea {
        key: "referral_volume",
        name: "Increase Referral Volume",
        key_metrics: &[
            "Referrals per month",
            "Active referring doctors",
            "Referral conversion rate",
        ],
        strategies: &[
            "Regular engagement with referring physicians",
            "Timely referral feedback letters",
            "CME events for local doctors",
        ],
        expected_outcomes: &[
            "Broader referring physician base",
            "More predictable patient inflow",
        ],
    },
    MarketingFocusArea {
        key: "premium_services",
        name: "Promote Premium Services",
        key_metrics: &[
            "Premium package uptake",
            "Revenue per patient",
            "Premium patient satisfaction",
        ],
        strategies: &[
            "Executive health packages",
            "Concierge and priority appointment services",
            "Personalized care coordination",
        ],
        expected_outcomes: &[
            "Higher revenue per patient",
            "Differentiated premium positioning",
        ],
    },
    MarketingFocusArea {
        key: "expert_positioning",
        name: "Establish Expert Positioning",
        key_metrics: &[
            "Speaking invitations",
            "Publications",
            "Media mentions",
        ],
        strategies: &[
            "Academic publications and case reports",
            "Conference presentations",
            "Media interviews and expert columns",
        ],
        expected_outcomes: &[
            "Recognition as a go-to specialist",
            "Increase in complex case referrals",
        ],
    },
    MarketingFocusArea {
        key: "institutional_reputation",
        name: "Build Institutional Reputation",
        key_metrics: &[
            "Brand recall",
            "Accreditations achieved",
            "Community program reach",
        ],
        strategies: &[
            "Quality accreditation",
            "Community health programs",
            "Professional network building",
        ],
        expected_outcomes: &[
            "Stronger institutional trust",
            "Easier insurance and corporate empanelment",
        ],
    },
];
