use super::{BrandStrategy, Resource};
use crate::types::StrategyFocus;

pub static BRAND_STRATEGIES: &[BrandStrategy] = &[
    BrandStrategy {
        key: "digital_presence",
        name: "Digital Presence & Online Reputation",
        focus: StrategyFocus::Both,
        time: "3-6 months",
        budget: "Medium",
        resources: &[
            Resource {
                name: "Practice Website",
                tools: &["WordPress", "Wix", "Squarespace"],
                description: "Mobile-friendly site with doctor profiles, services and online booking",
                cost: "Medium",
            },
            Resource {
                name: "Listing Management",
                tools: &["Google Business Profile", "Practo", "Justdial"],
                description: "Accurate listings with photos, timings and review responses",
                cost: "Low",
            },
            Resource {
                name: "Review Management",
                tools: &["Google Reviews", "ReviewTrackers"],
                description: "Systematic review requests and professional responses",
                cost: "Low",
            },
        ],
    },
    BrandStrategy {
        key: "content_marketing",
        name: "Content Marketing & Patient Education",
        focus: StrategyFocus::PatientEducation,
        time: "Ongoing",
        budget: "Low-Medium",
        resources: &[
            Resource {
                name: "Educational Videos",
                tools: &["YouTube", "Instagram Reels"],
                description: "Short explainers on common conditions and procedures",
                cost: "Low",
            },
            Resource {
                name: "Health Blog",
                tools: &["Practice website", "Medium"],
                description: "Monthly articles answering frequent patient questions",
                cost: "Low",
            },
            Resource {
                name: "Patient Handouts",
                tools: &["Canva"],
                description: "Printed and WhatsApp-friendly condition guides",
                cost: "Low",
            },
        ],
    },
    BrandStrategy {
        key: "referral_network",
        name: "Referral Network Building",
        focus: StrategyFocus::Professional,
        time: "6-12 months",
        budget: "Low",
        resources: &[
            Resource {
                name: "Referring Doctor CRM",
                tools: &["Spreadsheet", "HubSpot Free"],
                description: "Track referring physicians, volumes and feedback",
                cost: "Low",
            },
            Resource {
                name: "CME Meetups",
                tools: &["Local medical associations"],
                description: "Quarterly case discussions with primary care doctors",
                cost: "Medium",
            },
        ],
    },
    BrandStrategy {
        key: "community_outreach",
        name: "Community Outreach & Health Camps",
        focus: StrategyFocus::Community,
        time: "3-6 months",
        budget: "Low-Medium",
        resources: &[
            Resource {
                name: "Health Camps",
                tools: &["RWAs", "NGOs", "Corporate HR"],
                description: "Screening camps in residential and workplace communities",
                cost: "Medium",
            },
            Resource {
                name: "Awareness Talks",
                tools: &["Schools", "Community centers"],
                description: "Talks on prevention tied to health awareness days",
                cost: "Low",
            },
        ],
    },
    BrandStrategy {
        key: "academic_presence",
        name: "Academic & Research Presence",
        focus: StrategyFocus::Professional,
        time: "12+ months",
        budget: "Medium",
        resources: &[
            Resource {
                name: "Publications",
                tools: &["PubMed-indexed journals", "Case report journals"],
                description: "Case reports and outcome studies from practice data",
                cost: "Low",
            },
            Resource {
                name: "Conference Participation",
                tools: &["Specialty society meetings"],
                description: "Posters, talks and panel participation",
                cost: "Medium",
            },
        ],
    },
    BrandStrategy {
        key: "patient_relationship",
        name: "Patient Relationship Management",
        focus: StrategyFocus::PatientRetention,
        time: "Ongoing",
        budget: "Medium",
        resources: &[
            Resource {
                name: "Reminder System",
                tools: &["WhatsApp Business", "SMS gateway"],
                description: "Automated follow-up and refill reminders",
                cost: "Low",
            },
            Resource {
                name: "Patient CRM",
                tools: &["EMR patient portal", "Zoho CRM"],
                description: "Visit history, preferences and care plans in one place",
                cost: "Medium",
            },
            Resource {
                name: "Feedback Surveys",
                tools: &["Google Forms", "Typeform"],
                description: "Post-visit satisfaction surveys with follow-up actions",
                cost: "Low",
            },
        ],
    },
    BrandStrategy {
        key: "premium_services",
        name: "Premium & Concierge Services",
        focus: StrategyFocus::Premium,
        time: "6-12 months",
        budget: "High",
        resources: &[
            Resource {
                name: "Executive Packages",
                tools: &["Package pricing sheet", "Corporate tie-ups"],
                description: "Comprehensive checkups with same-day reports",
                cost: "Medium",
            },
            Resource {
                name: "Concierge Desk",
                tools: &["Dedicated coordinator", "Priority scheduling"],
                description: "Personal care coordination for premium patients",
                cost: "High",
            },
        ],
    },
    BrandStrategy {
        key: "specialized_certifications",
        name: "Specialized Certifications & Training",
        focus: StrategyFocus::Professional,
        time: "12-24 months",
        budget: "High",
        resources: &[
            Resource {
                name: "Fellowships",
                tools: &["National boards", "International colleges"],
                description: "Advanced training in a focused sub-specialty",
                cost: "High",
            },
            Resource {
                name: "Facility Accreditation",
                tools: &["NABH", "JCI"],
                description: "Quality accreditation for the practice",
                cost: "High",
            },
        ],
    },
];
