use super::PatientType;

pub static PATIENT_TYPES: &[PatientType] = &[
    PatientType {
        key: "general_opd",
        name: "General OPD Patients",
        desc: "Walk-in outpatients with acute complaints",
        services: &[
            "Consultations",
            "Basic Diagnostics",
            "Prescriptions",
            "Follow-up Visits",
        ],
        marketing_channels: &[
            "Google My Business",
            "Local signage",
            "Word-of-mouth referrals",
        ],
    },
    PatientType {
        key: "chronic_care",
        name: "Chronic Disease Patients",
        desc: "Long-term management of diabetes, hypertension and similar conditions",
        services: &[
            "Disease Management Programs",
            "Regular Monitoring",
            "Medication Reviews",
            "Lifestyle Counseling",
        ],
        marketing_channels: &[
            "Patient education sessions",
            "WhatsApp reminders",
            "Support groups",
        ],
    },
    PatientType {
        key: "elderly",
        name: "Elderly Patients",
        desc: "Senior citizens needing geriatric care",
        services: &[
            "Geriatric Assessment",
            "Home Visits",
            "Fall Prevention",
            "Medication Management",
        ],
        marketing_channels: &[
            "Senior citizen associations",
            "Family caregivers",
            "Community centers",
        ],
    },
    PatientType {
        key: "pediatric",
        name: "Pediatric Patients",
        desc: "Children and adolescents",
        services: &[
            "Growth Monitoring",
            "Vaccinations",
            "Developmental Screening",
            "Nutrition Guidance",
        ],
        marketing_channels: &[
            "Parent groups",
            "Schools",
            "Social media for parents",
        ],
    },
    PatientType {
        key: "women_health",
        name: "Women's Health",
        desc: "Women across life stages",
        services: &[
            "Preventive Screening",
            "Antenatal Care",
            "Bone Health Assessment",
            "Menopause Counseling",
        ],
        marketing_channels: &[
            "Women's groups",
            "Corporate wellness programs",
            "Instagram and YouTube education",
        ],
    },
    PatientType {
        key: "corporate",
        name: "Corporate Employees",
        desc: "Working professionals through employer programs",
        services: &[
            "Annual Health Checks",
            "Executive Health Packages",
            "Workplace Wellness Talks",
            "Occupational Health",
        ],
        marketing_channels: &[
            "HR partnerships",
            "LinkedIn",
            "Corporate health camps",
        ],
    },
    PatientType {
        key: "international",
        name: "International Patients",
        desc: "Medical travellers from other regions and countries",
        services: &[
            "Treatment Packages",
            "Teleconsultation Before Travel",
            "Travel and Stay Coordination",
            "Post-treatment Remote Follow-up",
        ],
        marketing_channels: &[
            "Medical tourism facilitators",
            "Multilingual website",
            "Diaspora communities",
        ],
    },
];
