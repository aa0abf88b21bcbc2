use super::{
    ActionWindow, ExperienceStrategy, PracticePlaybook, SpecialtyPlaybook, TimelinePeriod,
};
use crate::types::{ExperienceBand, PracticeScale};

// ---------------------------------------------------------------------------
// Experience bands
// ---------------------------------------------------------------------------

pub static EXPERIENCE_STRATEGIES: &[ExperienceStrategy] = &[
    ExperienceStrategy {
        band: ExperienceBand::UpToFive,
        focus: "Establishing credibility and building initial patient base",
        key_actions: &[
            "Build a strong online presence from day one",
            "Network actively with senior doctors for referrals",
            "Participate in health camps to gain visibility",
            "Collect patient testimonials early",
        ],
        branding_priorities: &[
            "Professional online profiles",
            "Qualification and training highlights",
            "Approachable, patient-first image",
        ],
        budget_allocation: "60% digital, 30% community outreach, 10% networking",
    },
    ExperienceStrategy {
        band: ExperienceBand::SixToTen,
        focus: "Growing practice and developing a niche",
        key_actions: &[
            "Identify and promote a clinical niche",
            "Formalize referral relationships",
            "Expand services based on patient demand",
            "Invest in patient experience improvements",
        ],
        branding_priorities: &[
            "Niche expertise positioning",
            "Patient success stories",
            "Consistent practice branding",
        ],
        budget_allocation: "50% digital, 30% referral network, 20% patient experience",
    },
    ExperienceStrategy {
        band: ExperienceBand::ElevenToFifteen,
        focus: "Consolidating reputation and expanding reach",
        key_actions: &[
            "Publish outcomes and case studies",
            "Mentor junior doctors and build a team",
            "Explore a second location or hospital tie-ups",
            "Launch premium service lines",
        ],
        branding_priorities: &[
            "Established expert reputation",
            "Clinical outcome credibility",
            "Team-based practice brand",
        ],
        budget_allocation: "40% digital, 30% professional presence, 30% service expansion",
    },
    ExperienceStrategy {
        band: ExperienceBand::SixteenToTwenty,
        focus: "Thought leadership and institutional influence",
        key_actions: &[
            "Speak at national conferences",
            "Lead academic and training programs",
            "Build institutional partnerships",
            "Develop a recognizable practice brand beyond the individual",
        ],
        branding_priorities: &[
            "Thought leadership",
            "Academic contributions",
            "Legacy practice brand",
        ],
        budget_allocation: "30% digital, 40% professional presence, 30% institutional branding",
    },
    ExperienceStrategy {
        band: ExperienceBand::OverTwenty,
        focus: "Legacy building and mentorship",
        key_actions: &[
            "Institutionalize the practice brand",
            "Mentor the next generation of specialists",
            "Lead community health initiatives",
            "Plan succession and practice continuity",
        ],
        branding_priorities: &[
            "Senior authority and trust",
            "Mentorship and teaching legacy",
            "Community leadership",
        ],
        budget_allocation: "25% digital, 35% institutional branding, 40% community and academic programs",
    },
];

// ---------------------------------------------------------------------------
// Specialties
// ---------------------------------------------------------------------------

pub static SPECIALTY_PLAYBOOKS: &[SpecialtyPlaybook] = &[
    SpecialtyPlaybook {
        specialty: "cardiology",
        referral_sources: &[
            "General physicians and internists",
            "Diabetologists",
            "Corporate health programs",
        ],
        brand_differentiators: &[
            "Preventive cardiology expertise",
            "Rapid cardiac evaluation",
            "Cardiac rehabilitation support",
        ],
        content_topics: &[
            "Heart attack warning signs",
            "Cholesterol and blood pressure control",
            "Exercise after a cardiac event",
        ],
        community_programs: &[
            "World Heart Day screening camps",
            "CPR training sessions",
        ],
    },
    SpecialtyPlaybook {
        specialty: "general_practice",
        referral_sources: &[
            "Pharmacies in the neighbourhood",
            "Residential welfare associations",
            "Schools and local businesses",
        ],
        brand_differentiators: &[
            "Family doctor relationship",
            "Continuity of care",
            "Convenient timings and access",
        ],
        content_topics: &[
            "Seasonal illness prevention",
            "Vaccination schedules",
            "When to see a specialist",
        ],
        community_programs: &[
            "Free blood pressure and sugar checks",
            "Flu vaccination drives",
        ],
    },
    SpecialtyPlaybook {
        specialty: "neurology",
        referral_sources: &[
            "General physicians",
            "Emergency departments",
            "Physiotherapists and rehabilitation centers",
        ],
        brand_differentiators: &[
            "Stroke and epilepsy expertise",
            "Comprehensive neuro-diagnostics",
            "Long-term neuro-rehabilitation coordination",
        ],
        content_topics: &[
            "Recognizing stroke symptoms fast",
            "Migraine triggers and management",
            "Living with epilepsy",
        ],
        community_programs: &[
            "Stroke awareness drives",
            "Epilepsy support groups",
        ],
    },
    SpecialtyPlaybook {
        specialty: "gastroenterology",
        referral_sources: &[
            "General physicians",
            "General surgeons",
            "Dietitians and nutritionists",
        ],
        brand_differentiators: &[
            "Advanced endoscopy capability",
            "Liver disease expertise",
            "Comfortable sedation-based procedures",
        ],
        content_topics: &[
            "Acidity and reflux management",
            "Colorectal cancer screening",
            "Fatty liver prevention",
        ],
        community_programs: &[
            "Liver health screening camps",
            "Gut health awareness talks",
        ],
    },
    SpecialtyPlaybook {
        specialty: "orthopedics",
        referral_sources: &[
            "Physiotherapists",
            "Sports clubs and gyms",
            "General physicians",
        ],
        brand_differentiators: &[
            "Sports injury expertise",
            "Minimally invasive joint procedures",
            "Structured rehabilitation protocols",
        ],
        content_topics: &[
            "Knee pain causes and care",
            "Back pain at the desk",
            "Osteoporosis prevention",
        ],
        community_programs: &[
            "Bone density screening camps",
            "Marathon and sports event medical support",
        ],
    },
    SpecialtyPlaybook {
        specialty: "dermatology",
        referral_sources: &[
            "General physicians",
            "Salons and wellness centers",
            "Pediatricians",
        ],
        brand_differentiators: &[
            "Evidence-based cosmetic dermatology",
            "Advanced laser technology",
            "Treatment of chronic skin disease",
        ],
        content_topics: &[
            "Acne myths and facts",
            "Sun protection",
            "Hair fall causes",
        ],
        community_programs: &[
            "Skin cancer awareness checks",
            "School hygiene and skin care talks",
        ],
    },
    SpecialtyPlaybook {
        specialty: "pediatrics",
        referral_sources: &[
            "Obstetricians",
            "Schools and day-care centers",
            "Parent communities",
        ],
        brand_differentiators: &[
            "Child-friendly environment",
            "Developmental expertise",
            "Round-the-clock parent support",
        ],
        content_topics: &[
            "Vaccination schedules",
            "Childhood nutrition",
            "Managing fever at home",
        ],
        community_programs: &[
            "School health checkups",
            "New parent workshops",
        ],
    },
    SpecialtyPlaybook {
        specialty: "obstetrics_gynecology",
        referral_sources: &[
            "General physicians",
            "Fertility and IVF centers",
            "Women's groups",
        ],
        brand_differentiators: &[
            "Continuity through pregnancy and beyond",
            "High-risk pregnancy expertise",
            "Compassionate women-centred care",
        ],
        content_topics: &[
            "Pregnancy week by week",
            "PCOS management",
            "Cervical cancer screening",
        ],
        community_programs: &[
            "Antenatal classes",
            "Women's wellness camps",
        ],
    },
    SpecialtyPlaybook {
        specialty: "ophthalmology",
        referral_sources: &[
            "Optical stores",
            "Diabetologists",
            "Schools",
        ],
        brand_differentiators: &[
            "Modern cataract surgery outcomes",
            "Diabetic eye care expertise",
            "Comprehensive vision care under one roof",
        ],
        content_topics: &[
            "Screen time and eye strain",
            "Cataract surgery explained",
            "Diabetes and the eye",
        ],
        community_programs: &[
            "School vision screening",
            "Free cataract screening camps",
        ],
    },
    SpecialtyPlaybook {
        specialty: "ent",
        referral_sources: &[
            "Pediatricians",
            "General physicians",
            "Audiologists and hearing aid centers",
        ],
        brand_differentiators: &[
            "Endoscopic sinus expertise",
            "Hearing and voice care",
            "Pediatric ENT experience",
        ],
        content_topics: &[
            "Allergy season survival",
            "Hearing loss warning signs",
            "Snoring and sleep apnea",
        ],
        community_programs: &[
            "Hearing screening for seniors",
            "Voice care workshops for teachers",
        ],
    },
    SpecialtyPlaybook {
        specialty: "psychiatry",
        referral_sources: &[
            "General physicians",
            "Counselors and psychologists",
            "Corporate HR and EAP programs",
        ],
        brand_differentiators: &[
            "Confidential, stigma-free care",
            "Integrated therapy and medication",
            "Teleconsultation availability",
        ],
        content_topics: &[
            "Recognizing depression and anxiety",
            "Sleep and mental health",
            "Supporting a family member",
        ],
        community_programs: &[
            "Workplace mental health sessions",
            "College wellbeing workshops",
        ],
    },
    SpecialtyPlaybook {
        specialty: "oncology",
        referral_sources: &[
            "General physicians",
            "Surgeons and pathologists",
            "Cancer support NGOs",
        ],
        brand_differentiators: &[
            "Multidisciplinary tumor board care",
            "Personalized treatment planning",
            "Survivorship and palliative support",
        ],
        content_topics: &[
            "Early warning signs of cancer",
            "Screening guidelines by age",
            "Nutrition during treatment",
        ],
        community_programs: &[
            "Cancer screening camps",
            "Survivor support meetups",
        ],
    },
];

// ---------------------------------------------------------------------------
// Practice scale
// ---------------------------------------------------------------------------

pub static PRACTICE_PLAYBOOKS: &[PracticePlaybook] = &[
    PracticePlaybook {
        scale: PracticeScale::Small,
        marketing_channels: &[
            "Google My Business",
            "Practice website",
            "WhatsApp Business",
            "Local community events",
            "Word-of-mouth referrals",
        ],
        team_structure: &[
            "Receptionist handling bookings and reminders",
            "Freelance social media support",
        ],
        technology_needs: &[
            "Online appointment booking",
            "Basic EMR system",
            "Patient reminder messaging",
            "Digital payment options",
        ],
        partnership_opportunities: &[
            "Nearby diagnostic labs",
            "Pharmacies",
            "Residential associations",
        ],
    },
    PracticePlaybook {
        scale: PracticeScale::Medium,
        marketing_channels: &[
            "Practice website with doctor profiles",
            "Social media pages",
            "Corporate tie-ups",
            "Health camps",
            "Search advertising",
        ],
        team_structure: &[
            "Practice manager",
            "Marketing coordinator",
            "Patient relations executive",
        ],
        technology_needs: &[
            "Integrated EMR and billing",
            "Patient CRM",
            "Teleconsultation platform",
            "Online reputation monitoring",
        ],
        partnership_opportunities: &[
            "Corporate wellness programs",
            "Insurance companies",
            "Diagnostic chains",
        ],
    },
    PracticePlaybook {
        scale: PracticeScale::Large,
        marketing_channels: &[
            "Institutional website and blog",
            "Search and social advertising",
            "Referral doctor programs",
            "Insurance and TPA networks",
            "Local media",
        ],
        team_structure: &[
            "Marketing manager",
            "Digital marketing executive",
            "Referral relationship team",
            "Insurance desk",
        ],
        technology_needs: &[
            "Hospital information system",
            "CRM with referral tracking",
            "Patient portal and mobile app",
            "Marketing analytics dashboard",
        ],
        partnership_opportunities: &[
            "Referring physician networks",
            "Insurance empanelment",
            "Ambulance services",
        ],
    },
    PracticePlaybook {
        scale: PracticeScale::VeryLarge,
        marketing_channels: &[
            "Integrated brand campaigns",
            "Center-of-excellence marketing",
            "International patient channels",
            "PR and media relations",
            "Digital performance marketing",
        ],
        team_structure: &[
            "Head of marketing",
            "Digital and content team",
            "PR agency",
            "International patient desk",
        ],
        technology_needs: &[
            "Enterprise CRM",
            "Marketing automation",
            "Patient mobile app",
            "Business intelligence and ROI analytics",
        ],
        partnership_opportunities: &[
            "Academic institutions",
            "Medical tourism facilitators",
            "Government health schemes",
        ],
    },
];

// ---------------------------------------------------------------------------
// Implementation plan
// ---------------------------------------------------------------------------

pub static IMPLEMENTATION_TIMELINE: &[TimelinePeriod] = &[
    TimelinePeriod {
        label: "Months 1-3",
        milestones: &[
            "Foundation Building",
            "Digital Presence Setup",
            "Team Training",
        ],
    },
    TimelinePeriod {
        label: "Months 4-6",
        milestones: &[
            "Strategy Implementation",
            "Marketing Campaigns",
            "Network Building",
        ],
    },
    TimelinePeriod {
        label: "Months 7-9",
        milestones: &[
            "Performance Analysis",
            "Strategy Refinement",
            "Service Expansion",
        ],
    },
    TimelinePeriod {
        label: "Months 10-12",
        milestones: &[
            "Scale Successful Programs",
            "Advanced Brand Building",
            "Annual Review",
        ],
    },
];

pub static ACTION_ITEMS: &[ActionWindow] = &[
    ActionWindow {
        label: "Week 1-2",
        items: &[
            "Set up Google My Business",
            "Create social media profiles",
            "Design patient intake forms",
        ],
    },
    ActionWindow {
        label: "Week 3-4",
        items: &[
            "Launch basic website",
            "Set up appointment system",
            "Create patient education materials",
        ],
    },
];

pub static METRICS_TO_TRACK: &[&str] = &[
    "New patient inquiries",
    "Website traffic",
    "Patient satisfaction",
    "Revenue growth",
];
