//! Static rule tables for the masculinity-survey instrument.
//!
//! The column set here is fixed: one rename map, one recode table, one list of
//! multi-select prefixes. The rest of the pipeline is generic over these tables.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The question whose non-response drops a respondent entirely.
/// Filtering runs before renaming, so this is the raw column name.
pub const PRIMARY_RESPONSE: &str = "q0001";

/// Raw question code → semantic name. Pairs whose old name is absent from the
/// input are skipped; new names are disjoint from all old names by construction.
pub const RENAMES: &[(&str, &str)] = &[
    ("q0001", "self_masculinity"),
    ("q0002", "importance_seen_masculine"),
    ("q0005", "pressure_unhealthy"),
    ("q0014", "metoo_awareness"),
    ("q0015", "metoo_behavior_work"),
    ("q0017", "expect_first_move"),
    ("q0018", "date_payment_freq"),
    ("q0022", "rel_behavior_change"),
    ("q0009", "employment_status"),
    ("q0024", "marital_status"),
    ("kids", "children_status"),
    ("orientation", "orientation"),
    ("age3", "age_bracket"),
    ("q0028", "age_exact"),
    ("race2", "race_group"),
    ("racethn4", "ethnicity"),
    ("educ3", "education_detail"),
    ("educ4", "education"),
    ("q0034", "income_bracket"),
    ("q0035", "region"),
    ("q0036", "device_type"),
    ("weight", "survey_weight"),
];

/// Column-name prefixes of the "select all that apply" blocks. These columns
/// are never renamed; membership is resolved against whatever header survived.
pub const MULTI_SELECT_PREFIXES: &[&str] = &[
    "q0004_", "q0007_", "q0008_", "q0010_", "q0011_", "q0012_", "q0019_", "q0020_", "q0021_",
];

/// The literal cell value marking an unselected multi-select option.
pub const NOT_SELECTED: &str = "Not selected";

/// How a single-select column is recoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recode {
    /// Keep cells matching the label set, null out everything else. `ordered`
    /// records whether label position is a meaningful rank for downstream
    /// ordinal comparison; this pipeline only tags it, never enforces it.
    Categorical {
        labels: &'static [&'static str],
        ordered: bool,
    },
    /// "Yes" → 1, "No" → 0, anything else → null (nullable integer).
    Binary,
}

/// Post-rename column name → recode rule. Exhaustive for the instrument.
pub static RECODES: Lazy<HashMap<&'static str, Recode>> = Lazy::new(|| {
    HashMap::from([
        (
            "self_masculinity",
            Recode::Categorical {
                labels: &[
                    "Not at all masculine",
                    "Not very masculine",
                    "Somewhat masculine",
                    "Very masculine",
                ],
                ordered: true,
            },
        ),
        (
            "importance_seen_masculine",
            Recode::Categorical {
                labels: &[
                    "Not at all important",
                    "Not too important",
                    "Somewhat important",
                    "Very important",
                ],
                ordered: true,
            },
        ),
        ("pressure_unhealthy", Recode::Binary),
        (
            "metoo_awareness",
            Recode::Categorical {
                labels: &["Nothing at all", "Only a little", "Some", "A lot"],
                ordered: true,
            },
        ),
        ("metoo_behavior_work", Recode::Binary),
        ("expect_first_move", Recode::Binary),
        (
            "date_payment_freq",
            Recode::Categorical {
                labels: &["Never", "Rarely", "Sometimes", "Often", "Always"],
                ordered: true,
            },
        ),
        ("rel_behavior_change", Recode::Binary),
        (
            "children_status",
            Recode::Categorical {
                labels: &[
                    "No children",
                    "Yes, one or more children under 18",
                    "Yes, one or more children 18 or older",
                ],
                ordered: true,
            },
        ),
        (
            "orientation",
            Recode::Categorical {
                labels: &["Straight", "Gay", "Bisexual", "Other"],
                ordered: false,
            },
        ),
        (
            "age_bracket",
            Recode::Categorical {
                labels: &["18 - 34", "35 - 64", "65+"],
                ordered: true,
            },
        ),
        (
            "race_group",
            Recode::Categorical {
                labels: &["White", "Non-white"],
                ordered: false,
            },
        ),
        (
            "education",
            Recode::Categorical {
                labels: &[
                    "Did not complete high school",
                    "High school or G.E.D.",
                    "Associate’s degree",
                    "Some college",
                    "College graduate",
                    "Post graduate degree",
                ],
                ordered: true,
            },
        ),
    ])
});

/// Rank of `label` within an ordered categorical column, for downstream
/// ordinal comparison. `None` for unknown columns, unordered columns, or
/// labels outside the declared set.
pub fn rank(column: &str, label: &str) -> Option<usize> {
    match RECODES.get(column)? {
        Recode::Categorical {
            labels,
            ordered: true,
        } => labels.iter().position(|l| *l == label),
        _ => None,
    }
}
