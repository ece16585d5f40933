//! Known benefit categories and the sections rendered for each
//!
//! Both lists are fixed and rendered in declaration order.

use crate::section::SectionGroup;
use crate::values::{non_empty_object, resolve_path};
use pdf_core::Color;
use serde_json::Value;

/// Row source within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDef {
    pub label: &'static str,
    /// Sub-mapping key; `None` uses the section data itself
    pub key: Option<&'static str>,
}

/// A titled section of a category page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    /// Key of the section data within the category
    pub key: &'static str,
    pub title: &'static str,
    pub color: (u8, u8, u8),
    pub groups: &'static [GroupDef],
    /// Prefix non-empty cell values with `$`
    pub dollar_format: bool,
}

impl SectionDef {
    pub fn color(&self) -> Color {
        let (r, g, b) = self.color;
        Color::from_rgb(r, g, b)
    }

    /// Groups whose data is present in `section`
    ///
    /// Only non-empty object values become groups.
    pub fn groups<'a>(&self, section: &'a Value) -> Vec<SectionGroup<'a>> {
        self.groups
            .iter()
            .filter_map(|def| {
                let data = resolve_path(def.key.unwrap_or_default(), section)?;
                non_empty_object(data)?;
                Some(SectionGroup::new(def.label, data))
            })
            .collect()
    }
}

/// A top-level tab of the booklet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        key: "medical",
        title: "Medical",
    },
    Category {
        key: "dental",
        title: "Dental",
    },
    Category {
        key: "vision",
        title: "Vision",
    },
    Category {
        key: "life",
        title: "Life",
    },
    Category {
        key: "disability",
        title: "Disability",
    },
];

const fn group(label: &'static str, key: &'static str) -> GroupDef {
    GroupDef {
        label,
        key: Some(key),
    }
}

const fn whole(label: &'static str) -> GroupDef {
    GroupDef { label, key: None }
}

const INDIVIDUAL_FAMILY: &[GroupDef] = &[
    group("Individual", "individual"),
    group("Family", "family"),
];

pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        key: "planInfo",
        title: "Plan Information",
        color: (41, 98, 155),
        groups: &[whole("Plan Details")],
        dollar_format: false,
    },
    SectionDef {
        key: "deductibles",
        title: "Deductibles",
        color: (46, 134, 171),
        groups: INDIVIDUAL_FAMILY,
        dollar_format: true,
    },
    SectionDef {
        key: "outOfPocketMax",
        title: "Out-of-Pocket Maximum",
        color: (162, 59, 114),
        groups: INDIVIDUAL_FAMILY,
        dollar_format: true,
    },
    SectionDef {
        key: "coinsurance",
        title: "Coinsurance",
        color: (241, 143, 1),
        groups: &[whole("Coinsurance")],
        dollar_format: false,
    },
    SectionDef {
        key: "physicianVisits",
        title: "Physician Visits",
        color: (38, 140, 96),
        groups: &[
            group("Primary Care", "primaryCare"),
            group("Specialist", "specialist"),
            group("Urgent Care", "urgentCare"),
        ],
        dollar_format: true,
    },
    SectionDef {
        key: "hospitalServices",
        title: "Hospital Services",
        color: (199, 62, 29),
        groups: &[
            group("Inpatient", "inpatient"),
            group("Outpatient", "outpatient"),
            group("Emergency Room", "emergencyRoom"),
        ],
        dollar_format: false,
    },
    SectionDef {
        key: "prescriptionDrug",
        title: "Prescription Drug",
        color: (106, 76, 147),
        groups: &[
            group("Generic", "generic"),
            group("Preferred Brand", "preferredBrand"),
            group("Non-Preferred Brand", "nonPreferredBrand"),
            group("Specialty", "specialty"),
        ],
        dollar_format: true,
    },
];
