use super::DiagnosticFacility;

pub static DIAGNOSTIC_FACILITIES: &[DiagnosticFacility] = &[
    DiagnosticFacility {
        key: "ecg",
        name: "ECG",
    },
    DiagnosticFacility {
        key: "xray",
        name: "X-Ray",
    },
    DiagnosticFacility {
        key: "ultrasound",
        name: "Ultrasound",
    },
    DiagnosticFacility {
        key: "lab",
        name: "Pathology Lab",
    },
    DiagnosticFacility {
        key: "echo",
        name: "Echocardiography",
    },
    DiagnosticFacility {
        key: "endoscopy",
        name: "Endoscopy",
    },
    DiagnosticFacility {
        key: "ct",
        name: "CT Scan",
    },
    DiagnosticFacility {
        key: "mri",
        name: "MRI",
    },
];

/// Value-added services offered by the step-3 multi-select.
pub static ADDITIONAL_SERVICES: &[&str] = &[
    "Telemedicine Consultations",
    "Second Opinion Services",
    "Home Visits",
    "Corporate Health Programs",
    "Medical Tourism Services",
    "Executive Health Checkups",
    "Diet & Nutrition Counseling",
    "Physical Therapy Services",
    "Psychological Counseling",
    "Alternative Medicine Options",
];
