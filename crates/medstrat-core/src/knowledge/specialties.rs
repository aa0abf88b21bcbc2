use super::Specialty;

pub static SPECIALTIES: &[Specialty] = &[
    Specialty {
        key: "cardiology",
        name: "Cardiology",
        desc: "Heart and cardiovascular care",
        color: "#E53935",
        procedures: &[
            "Echocardiography",
            "Stress Testing",
            "Holter Monitoring",
            "Angiography Referrals",
            "Preventive Cardiac Screening",
        ],
        marketing_focus: &[
            "Preventive heart health awareness",
            "Corporate cardiac screening camps",
            "Referral relationships with general physicians",
            "Post-procedure patient education",
        ],
    },
    Specialty {
        key: "general_practice",
        name: "General Practice",
        desc: "Primary and family medicine",
        color: "#43A047",
        procedures: &[
            "General Consultations",
            "Vaccinations",
            "Health Checkups",
            "Minor Procedures",
            "Chronic Disease Follow-up",
        ],
        marketing_focus: &[
            "Family health relationships",
            "Neighbourhood visibility",
            "Preventive care packages",
            "Convenient access and timings",
        ],
    },
    Specialty {
        key: "neurology",
        name: "Neurology",
        desc: "Brain, spine and nervous system disorders",
        color: "#5E35B1",
        procedures: &[
            "EEG",
            "Nerve Conduction Studies",
            "EMG",
            "Headache Management",
            "Stroke Follow-up",
        ],
        marketing_focus: &[
            "Stroke awareness campaigns",
            "Epilepsy and migraine education",
            "Referral networks with physicians",
            "Rehabilitation partnerships",
        ],
    },
    Specialty {
        key: "gastroenterology",
        name: "Gastroenterology",
        desc: "Digestive system and liver care",
        color: "#FB8C00",
        procedures: &[
            "Upper GI Endoscopy",
            "Colonoscopy",
            "Liver Function Assessment",
            "ERCP Referrals",
            "Nutrition Counseling",
        ],
        marketing_focus: &[
            "Digestive health awareness",
            "Colorectal screening campaigns",
            "Liver health education",
            "Referral relationships with surgeons",
        ],
    },
    Specialty {
        key: "orthopedics",
        name: "Orthopedics",
        desc: "Bones, joints and musculoskeletal care",
        color: "#1E88E5",
        procedures: &[
            "Fracture Management",
            "Joint Injections",
            "Arthroscopy",
            "Joint Replacement Referrals",
            "Sports Injury Care",
        ],
        marketing_focus: &[
            "Sports injury outreach",
            "Senior mobility programs",
            "Physiotherapy partnerships",
            "Workplace ergonomics talks",
        ],
    },
    Specialty {
        key: "dermatology",
        name: "Dermatology",
        desc: "Skin, hair and nail care",
        color: "#D81B60",
        procedures: &[
            "Acne Treatment",
            "Chemical Peels",
            "Laser Therapy",
            "Skin Biopsy",
            "Hair Loss Treatment",
        ],
        marketing_focus: &[
            "Before-and-after education (with consent)",
            "Social media skin care tips",
            "Cosmetic service packages",
            "Seasonal skin health campaigns",
        ],
    },
    Specialty {
        key: "pediatrics",
        name: "Pediatrics",
        desc: "Infant, child and adolescent care",
        color: "#00ACC1",
        procedures: &[
            "Well-baby Checkups",
            "Immunizations",
            "Growth Monitoring",
            "Developmental Assessment",
            "Adolescent Counseling",
        ],
        marketing_focus: &[
            "Parent education programs",
            "School health partnerships",
            "Vaccination reminders",
            "Child-friendly clinic experience",
        ],
    },
    Specialty {
        key: "obstetrics_gynecology",
        name: "Obstetrics & Gynecology",
        desc: "Women's reproductive health and pregnancy care",
        color: "#8E24AA",
        procedures: &[
            "Antenatal Care",
            "Deliveries",
            "Pap Smear Screening",
            "Fertility Consultations",
            "Menopause Management",
        ],
        marketing_focus: &[
            "Antenatal class programs",
            "Women's wellness screening",
            "Fertility awareness content",
            "Community trust building",
        ],
    },
    Specialty {
        key: "ophthalmology",
        name: "Ophthalmology",
        desc: "Eye and vision care",
        color: "#3949AB",
        procedures: &[
            "Comprehensive Eye Exams",
            "Cataract Surgery",
            "Glaucoma Management",
            "Diabetic Retinopathy Screening",
            "LASIK Consultations",
        ],
        marketing_focus: &[
            "Vision screening camps",
            "Diabetic eye care awareness",
            "Cataract surgery outcomes",
            "Optical partnerships",
        ],
    },
    Specialty {
        key: "ent",
        name: "ENT",
        desc: "Ear, nose and throat care",
        color: "#6D4C41",
        procedures: &[
            "Audiometry",
            "Nasal Endoscopy",
            "Sinus Treatment",
            "Tonsillectomy",
            "Hearing Aid Fitting",
        ],
        marketing_focus: &[
            "Hearing screening drives",
            "Allergy season campaigns",
            "Pediatric ENT referrals",
            "Voice care for professionals",
        ],
    },
    Specialty {
        key: "psychiatry",
        name: "Psychiatry",
        desc: "Mental health and behavioural care",
        color: "#546E7A",
        procedures: &[
            "Psychiatric Evaluation",
            "Medication Management",
            "Psychotherapy",
            "De-addiction Programs",
            "Child Psychiatry",
        ],
        marketing_focus: &[
            "Stigma reduction education",
            "Corporate mental wellness programs",
            "Confidential online consultations",
            "School and college counseling tie-ups",
        ],
    },
    Specialty {
        key: "oncology",
        name: "Oncology",
        desc: "Cancer diagnosis and treatment",
        color: "#C62828",
        procedures: &[
            "Cancer Screening",
            "Chemotherapy",
            "Tumor Board Reviews",
            "Palliative Care",
            "Survivorship Follow-up",
        ],
        marketing_focus: &[
            "Early detection campaigns",
            "Survivor support communities",
            "Second opinion services",
            "Multidisciplinary care messaging",
        ],
    },
];
