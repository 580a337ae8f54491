//! Static registry of Page 11 entry templates (per MCO P1070.12K chapter 4)
//! and the placeholder substitution that turns a template plus field values
//! into finished entry text.

use std::collections::BTreeMap;

use time::Date;

use crate::dates;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    Select,
    Radio,
    UcmjSelect,
}

#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [&'static str],
    pub placeholder: Option<&'static str>,
    /// Only meaningful when another field has a specific value.
    pub conditional: Option<(&'static str, &'static str)>,
}

const fn field(id: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Field {
    Field {
        id,
        label,
        kind,
        required,
        options: &[],
        placeholder: None,
        conditional: None,
    }
}

const fn text(id: &'static str, label: &'static str) -> Field {
    field(id, label, FieldKind::Text, true)
}

const fn area(id: &'static str, label: &'static str) -> Field {
    field(id, label, FieldKind::TextArea, true)
}

const fn area_opt(id: &'static str, label: &'static str) -> Field {
    field(id, label, FieldKind::TextArea, false)
}

const fn date(id: &'static str, label: &'static str) -> Field {
    field(id, label, FieldKind::Date, true)
}

const fn number(id: &'static str, label: &'static str) -> Field {
    field(id, label, FieldKind::Number, true)
}

const fn select(id: &'static str, label: &'static str, options: &'static [&'static str]) -> Field {
    with_options(field(id, label, FieldKind::Select, true), options)
}

const fn text_hint(id: &'static str, label: &'static str, hint: &'static str) -> Field {
    with_hint(text(id, label), hint)
}

const fn optional(mut f: Field) -> Field {
    f.required = false;
    f
}

const fn with_hint(mut f: Field, hint: &'static str) -> Field {
    f.placeholder = Some(hint);
    f
}

const fn with_options(mut f: Field, options: &'static [&'static str]) -> Field {
    f.options = options;
    f
}

const fn when(mut f: Field, depends_on: &'static str, value: &'static str) -> Field {
    f.conditional = Some((depends_on, value));
    f
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Training,
    Counseling,
    Adverse,
    SixOneOhFive,
    Admin,
    Recognition,
    Custom,
}

impl Category {
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Training => "Training & Qualifications",
            Category::Counseling => "Counselings (Non-Adverse)",
            Category::Adverse => "Adverse Counselings",
            Category::SixOneOhFive => "6105 Counseling",
            Category::Admin => "Administrative Entries",
            Category::Recognition => "Recognition",
            Category::Custom => "Custom Entry",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Training,
            Category::Counseling,
            Category::Adverse,
            Category::SixOneOhFive,
            Category::Admin,
            Category::Recognition,
            Category::Custom,
        ]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub fields: &'static [Field],
    pub body: &'static str,
}

pub const UCMJ_ARTICLES: &[(&str, &str)] = &[
    ("86", "Absence Without Leave (UA)"),
    ("91", "Insubordinate Conduct Toward WO/NCO/PO"),
    ("92", "Failure to Obey Order or Regulation"),
    ("107", "False Official Statements"),
    ("108", "Loss/Damage/Destruction of Government Property"),
    ("111", "DUI/DWI"),
    ("112a", "Wrongful Use/Possession of Controlled Substances"),
    ("117", "Provoking Speeches or Gestures"),
    ("121", "Larceny/Wrongful Appropriation"),
    ("128", "Assault"),
    ("134", "General Article (specify offense)"),
];

const CLASSIFICATIONS: &[&str] = &["Expert", "Sharpshooter", "Marksman"];
const TEST_CLASSES: &[&str] = &["1st Class", "2nd Class", "3rd Class"];
const YES_NO: &[&str] = &["Yes", "No"];

const RIFLE_QUAL_BODY: &str = "\
[DATE]

RIFLE QUALIFICATION

Qualified with the [weapon] service rifle on [qual_date] at [location], firing a score of [score], [classification].

                                    _______________________
                                    [Marine's Signature]";

const PISTOL_QUAL_BODY: &str = "\
[DATE]

PISTOL QUALIFICATION

Qualified with the [weapon] service pistol on [qual_date] at [location], firing a score of [score], [classification].

                                    _______________________
                                    [Marine's Signature]";

const PFT_BODY: &str = "\
[DATE]

PHYSICAL FITNESS TEST COMPLETION

Completed the Physical Fitness Test on [pft_date] with a score of [score] ([pft_class]).
Pull-ups/Push-ups: [pullups]
Plank: [plank]
3-Mile Run: [run_time]

                                    _______________________
                                    [Marine's Signature]";

const CFT_BODY: &str = "\
[DATE]

COMBAT FITNESS TEST COMPLETION

Completed the Combat Fitness Test on [cft_date] with a score of [score] ([cft_class]).
Movement to Contact: [mtc]
Ammunition Lift: [ammo_lift]
Maneuver Under Fire: [muf]

                                    _______________________
                                    [Marine's Signature]";

const PME_BODY: &str = "\
[DATE]

PROFESSIONAL MILITARY EDUCATION COMPLETION

Completed [course_name] on [completion_date] at [location]. [additional_details]

                                    _______________________
                                    [Marine's Signature]";

const FORMAL_SCHOOL_BODY: &str = "\
[DATE]

FORMAL SCHOOL COMPLETION

Graduated from [school_name] on [graduation_date] at [location]. Course [course_number]. Class standing: [class_standing]. [honors]

                                    _______________________
                                    [Marine's Signature]";

const INITIAL_COUNSELING_BODY: &str = "\
[DATE]

INITIAL COUNSELING

Counseled this date upon joining [unit_name]. Discussed unit policies, expectations, duty hours, liberty policy, chain of command, and emergency contact procedures. I understand my responsibilities as a member of this command.

                                    _______________________
                                    [Marine's Signature]

                                    _______________________
                                    [Counselor's Signature]";

const MID_MARKING_BODY: &str = "\
[DATE]

MID-MARKING PERIOD COUNSELING

Counseled this date regarding performance and conduct during the current marking period ([period_start] to present). Current recommended marks are Proficiency [proficiency] and Conduct [conduct].

Strengths: [strengths]

Areas for improvement: [improvements]

Goals for remainder of period: [goals]

                                    _______________________
                                    [Marine's Signature]

                                    _______________________
                                    [Counselor's Signature]";

const CAREER_COUNSELING_BODY: &str = "\
[DATE]

CAREER COUNSELING

Counseled this date regarding career options and opportunities. Discussed [topics]. Marine expressed interest in [career_goals].

                                    _______________________
                                    [Marine's Signature]

                                    _______________________
                                    [Counselor's Signature]";

const PERFORMANCE_DEFICIENCY_BODY: &str = "\
[DATE]

COUNSELING - PERFORMANCE DEFICIENCY

Counseled this date concerning deficient performance of duties. Specifically, [deficiency]. This performance does not meet the standards expected of a [rank] in the United States Marine Corps.

You are advised to take the following corrective action: [corrective_action].

Failure to improve may result in adverse administrative action including but not limited to: adverse proficiency marks, non-recommendation for promotion, and/or processing for administrative separation.

I acknowledge receipt of this counseling and understand its contents.

                                    _______________________
                                    [Marine's Signature]

                                    _______________________
                                    [Counselor's Signature]

                                    _______________________
                                    [Witness Signature]";

const CONDUCT_DEFICIENCY_BODY: &str = "\
[DATE]

COUNSELING - CONDUCT DEFICIENCY

Counseled this date concerning [conduct_issue]. On [incident_date], you [incident_description]. This conduct does not meet the standards expected of a Marine.

You are advised that repetition of this or similar conduct may result in adverse administrative action including adverse conduct marks, non-judicial punishment, and/or administrative separation.

I acknowledge receipt of this counseling and understand its contents.

                                    _______________________
                                    [Marine's Signature]

                                    _______________________
                                    [Counselor's Signature]

                                    _______________________
                                    [Witness Signature]";

const SIX_ONE_OH_FIVE_BODY: &str = "\
[DATE]

6105 COUNSELING - [reason]

Counseled this date concerning [deficiency].

On [incident_dates], you [incident_description].

This [conduct_or_performance] is in violation of [violation_reference] and falls below the standards required of a Marine.

You are advised that:
1. This counseling constitutes a permanent entry in your Official Military Personnel File (OMPF).
2. This documentation may be used as a basis for administrative separation.
3. Repetition of this or similar [conduct_or_performance] will result in further adverse action.

Specific corrective action required:
[corrective_action]

You have the right to submit a written rebuttal statement within [rebuttal_days] days of this counseling. Any rebuttal will be attached to this entry.

I acknowledge receipt of this counseling and understand its contents.

                                    _______________________
                                    [Marine's Signature/Date]
                                    (Signature does not indicate agreement)

                                    _______________________
                                    [Commanding Officer Signature/Date]

                                    _______________________
                                    [Witness Signature/Date]";

const BAH_CERT_BODY: &str = "\
[DATE]

BASIC ALLOWANCE FOR HOUSING CERTIFICATION

I certify that my dependents reside at [address]. I understand that I am required to notify the Personnel Officer immediately of any change in dependency status (marriage, divorce, separation, death, or birth) or change of address. I understand that failure to do so may result in recoupment of funds and/or disciplinary action.

                                    _______________________
                                    [Marine's Signature]";

const MOTORCYCLE_ACK_BODY: &str = "\
[DATE]

MOTORCYCLE/ATV SAFETY ACKNOWLEDGMENT

Acknowledged this date the requirements of the Motorcycle Safety Program per MCO 5100.19F. I understand that I must:
1. Complete an approved motorcycle safety course
2. Register my motorcycle with the Provost Marshal
3. Wear proper protective equipment
4. Maintain valid license and insurance

I currently [owns_motorcycle] a motorcycle/ATV.

                                    _______________________
                                    [Marine's Signature]";

const TATTOO_ACK_BODY: &str = "\
[DATE]

TATTOO POLICY ACKNOWLEDGMENT

Acknowledged this date the Marine Corps tattoo policy per MCO 1020.34H. I understand the locations and types of tattoos that are prohibited. I currently have tattoos in the following locations: [tattoo_locations]. All tattoos are in compliance with current policy.

                                    _______________________
                                    [Marine's Signature]";

const BCP_ASSIGNMENT_BODY: &str = "\
[DATE]

BODY COMPOSITION PROGRAM ASSIGNMENT

Counseled this date concerning assignment to the Marine Corps Body Composition Program (BCP) effective [effective_date]. Current height: [height] inches. Current weight: [weight] pounds. Maximum allowable weight: [max_weight] pounds. Current body fat: [body_fat]%.

You are advised that failure to meet established weight/body composition standards may result in processing for administrative separation per MCO 6110.3A.

Monthly weigh-in dates: [weigh_in_schedule]

                                    _______________________
                                    [Marine's Signature]

                                    _______________________
                                    [Counselor's Signature]";

const LETTER_APPRECIATION_BODY: &str = "\
[DATE]

LETTER OF APPRECIATION

Received a Letter of Appreciation from [originator] on [received_date] for [reason]. [additional_details]

                                    _______________________
                                    [Marine's Signature]";

const AWARD_RECEIVED_BODY: &str = "\
[DATE]

AWARD DOCUMENTATION

Awarded the [award_name] on [award_date] for [reason]. Award approved by [approving_authority].

                                    _______________________
                                    [Marine's Signature]";

const CUSTOM_BODY: &str = "\
[DATE]

[subject]

[body]

[signature_lines]";

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "rifle_qual",
        name: "Rifle Qualification",
        category: Category::Training,
        fields: &[
            date("qual_date", "Qualification Date"),
            text_hint("location", "Location", "e.g., MCB Camp Pendleton"),
            select("weapon", "Weapon", &["M16A4", "M4", "M27 IAR"]),
            number("score", "Score"),
            select("classification", "Classification", CLASSIFICATIONS),
        ],
        body: RIFLE_QUAL_BODY,
    },
    Template {
        id: "pistol_qual",
        name: "Pistol Qualification",
        category: Category::Training,
        fields: &[
            date("qual_date", "Qualification Date"),
            text_hint("location", "Location", "e.g., MCB Camp Pendleton"),
            select("weapon", "Weapon", &["M9", "M18"]),
            number("score", "Score"),
            select("classification", "Classification", CLASSIFICATIONS),
        ],
        body: PISTOL_QUAL_BODY,
    },
    Template {
        id: "pft",
        name: "PFT Completion",
        category: Category::Training,
        fields: &[
            date("pft_date", "PFT Date"),
            number("score", "Total Score"),
            select("pft_class", "Class", TEST_CLASSES),
            text_hint("pullups", "Pull-ups/Push-ups", "e.g., 23 pull-ups"),
            text_hint("plank", "Plank Time", "e.g., 4:20"),
            text_hint("run_time", "3-Mile Run Time", "e.g., 21:30"),
        ],
        body: PFT_BODY,
    },
    Template {
        id: "cft",
        name: "CFT Completion",
        category: Category::Training,
        fields: &[
            date("cft_date", "CFT Date"),
            number("score", "Total Score"),
            select("cft_class", "Class", TEST_CLASSES),
            text_hint("mtc", "Movement to Contact", "e.g., 2:45"),
            text_hint("ammo_lift", "Ammunition Lift", "e.g., 106 reps"),
            text_hint("muf", "Maneuver Under Fire", "e.g., 2:30"),
        ],
        body: CFT_BODY,
    },
    Template {
        id: "pme",
        name: "PME Completion",
        category: Category::Training,
        fields: &[
            text_hint("course_name", "Course Name", "e.g., Corporals Course"),
            date("completion_date", "Completion Date"),
            text_hint("location", "Location/Method", "e.g., Camp Johnson / via MarineNet"),
            area_opt("additional_details", "Additional Details (optional)"),
        ],
        body: PME_BODY,
    },
    Template {
        id: "formal_school",
        name: "Formal School Graduation",
        category: Category::Training,
        fields: &[
            text("school_name", "School Name"),
            date("graduation_date", "Graduation Date"),
            text("location", "Location"),
            optional(text("course_number", "Course Number/Identifier")),
            optional(text("class_standing", "Class Standing (e.g., 5 of 30)")),
            with_hint(
                optional(text("honors", "Honors (optional)")),
                "e.g., Distinguished Honor Graduate",
            ),
        ],
        body: FORMAL_SCHOOL_BODY,
    },
    Template {
        id: "initial_counseling",
        name: "Initial Counseling - New Join",
        category: Category::Counseling,
        fields: &[text_hint("unit_name", "Unit Name", "e.g., 1st Battalion, 5th Marines")],
        body: INITIAL_COUNSELING_BODY,
    },
    Template {
        id: "mid_marking",
        name: "Mid-Marking Period Counseling",
        category: Category::Counseling,
        fields: &[
            date("period_start", "Marking Period Start"),
            text_hint("proficiency", "Current Proficiency Mark", "e.g., 4.3"),
            text_hint("conduct", "Current Conduct Mark", "e.g., 4.4"),
            area("strengths", "Strengths"),
            area("improvements", "Areas for Improvement"),
            area("goals", "Goals for Remainder of Period"),
        ],
        body: MID_MARKING_BODY,
    },
    Template {
        id: "career_counseling",
        name: "Career Counseling",
        category: Category::Counseling,
        fields: &[
            area("topics", "Topics Discussed"),
            area("career_goals", "Marine's Career Goals"),
        ],
        body: CAREER_COUNSELING_BODY,
    },
    Template {
        id: "performance_deficiency",
        name: "Performance Deficiency",
        category: Category::Adverse,
        fields: &[
            area("deficiency", "Describe Deficiency in Detail"),
            text_hint("rank", "Marine's Rank", "e.g., Lance Corporal"),
            area("corrective_action", "Required Corrective Action"),
        ],
        body: PERFORMANCE_DEFICIENCY_BODY,
    },
    Template {
        id: "conduct_deficiency",
        name: "Conduct Deficiency",
        category: Category::Adverse,
        fields: &[
            area("conduct_issue", "Describe Conduct Issue"),
            date("incident_date", "Date of Incident"),
            area("incident_description", "What Happened"),
        ],
        body: CONDUCT_DEFICIENCY_BODY,
    },
    Template {
        id: "6105_counseling",
        name: "6105 Counseling",
        category: Category::SixOneOhFive,
        fields: &[
            text_hint("reason", "Reason (for subject line)", "e.g., UNAUTHORIZED ABSENCE"),
            area("deficiency", "Specific Deficiency/Misconduct"),
            text("incident_dates", "Date(s) of Incident"),
            area("incident_description", "Detailed Description of Incident/Pattern"),
            with_options(
                field("violation_type", "Violation Type", FieldKind::Radio, true),
                &["UCMJ Article", "Policy/Regulation Violation"],
            ),
            when(
                field("ucmj_article", "UCMJ Article", FieldKind::UcmjSelect, false),
                "violation_type",
                "UCMJ Article",
            ),
            when(
                with_hint(
                    field("policy_reference", "Policy/Regulation Reference", FieldKind::Text, false),
                    "e.g., MCO 1020.34H",
                ),
                "violation_type",
                "Policy/Regulation Violation",
            ),
            select("conduct_or_performance", "Type", &["conduct", "performance"]),
            area("corrective_action", "Specific Corrective Action Required"),
            number("rebuttal_days", "Days to Submit Rebuttal"),
        ],
        body: SIX_ONE_OH_FIVE_BODY,
    },
    Template {
        id: "bah_cert",
        name: "BAH Certification",
        category: Category::Admin,
        fields: &[area("address", "Dependent Address")],
        body: BAH_CERT_BODY,
    },
    Template {
        id: "motorcycle_ack",
        name: "Motorcycle Policy Acknowledgment",
        category: Category::Admin,
        fields: &[select(
            "owns_motorcycle",
            "Currently Own Motorcycle/ATV?",
            &["own", "do not own"],
        )],
        body: MOTORCYCLE_ACK_BODY,
    },
    Template {
        id: "tattoo_ack",
        name: "Tattoo Policy Acknowledgment",
        category: Category::Admin,
        fields: &[area("tattoo_locations", "Current Tattoo Locations")],
        body: TATTOO_ACK_BODY,
    },
    Template {
        id: "bcp_assignment",
        name: "BCP Assignment",
        category: Category::Admin,
        fields: &[
            date("effective_date", "Effective Date"),
            number("height", "Current Height (inches)"),
            number("weight", "Current Weight (lbs)"),
            number("max_weight", "Maximum Allowable Weight (lbs)"),
            number("body_fat", "Current Body Fat (%)"),
            text_hint("weigh_in_schedule", "Monthly Weigh-in Dates", "e.g., 1st and 15th of each month"),
        ],
        body: BCP_ASSIGNMENT_BODY,
    },
    Template {
        id: "letter_appreciation",
        name: "Letter of Appreciation",
        category: Category::Recognition,
        fields: &[
            text("originator", "Originator/Command"),
            date("received_date", "Date Received"),
            area("reason", "Reason/Achievement"),
            area_opt("additional_details", "Additional Details (optional)"),
        ],
        body: LETTER_APPRECIATION_BODY,
    },
    Template {
        id: "award_received",
        name: "Award Received",
        category: Category::Recognition,
        fields: &[
            text_hint("award_name", "Award Name", "e.g., Navy and Marine Corps Achievement Medal"),
            date("award_date", "Date Awarded"),
            area("reason", "Reason (Meritorious Service/Achievement)"),
            text("approving_authority", "Approving Authority"),
        ],
        body: AWARD_RECEIVED_BODY,
    },
    Template {
        id: "custom",
        name: "Custom Entry",
        category: Category::Custom,
        fields: &[
            text("subject", "Subject Line"),
            area("body", "Entry Body"),
            select("include_marine_sig", "Include Marine Signature Line?", YES_NO),
            select("include_counselor_sig", "Include Counselor Signature Line?", YES_NO),
            select("include_witness_sig", "Include Witness Signature Line?", YES_NO),
        ],
        body: CUSTOM_BODY,
    },
];

pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn in_category(category: Category) -> impl Iterator<Item = &'static Template> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

impl Template {
    /// Check that every required field has a non-empty value.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> Result<(), Error> {
        for f in self.fields {
            if f.required && !values.get(f.id).is_some_and(|v| !v.trim().is_empty()) {
                return Err(Error::MissingField {
                    template: self.id.to_string(),
                    field: f.id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Substitute field values into a template body and tidy the result.
///
/// Date-kind values given as YYYY-MM-DD are reformatted to military style.
/// Leftover single-word `[placeholder]` tokens from optional fields are
/// scrubbed; multi-word brackets (signature labels) are left alone.
pub fn fill(template: &Template, values: &BTreeMap<String, String>, entry_date: Date) -> String {
    let mut out = template
        .body
        .replace("[DATE]", &dates::format_military(entry_date));

    for f in template.fields {
        let token = format!("[{}]", f.id);
        if !out.contains(&token) {
            continue;
        }
        let value = match values.get(f.id) {
            Some(v) if !v.is_empty() => {
                if f.kind == FieldKind::Date {
                    dates::parse_input(v)
                        .map(dates::format_military)
                        .unwrap_or_else(|_| v.clone())
                } else {
                    v.clone()
                }
            }
            _ => String::new(),
        };
        out = out.replace(&token, &value);
    }

    if template.id == "6105_counseling" {
        let by_type = match values.get("violation_type").map(String::as_str) {
            Some("UCMJ Article") => values.get("ucmj_article"),
            _ => values.get("policy_reference"),
        };
        out = out.replace(
            "[violation_reference]",
            by_type.map(String::as_str).unwrap_or(""),
        );
    }

    if template.id == "custom" {
        out = out.replace("[signature_lines]", &custom_signature_lines(values));
    }

    scrub(&out)
}

/// Format a UCMJ article for the violation-reference slot.
pub fn ucmj_reference(article: &str) -> Option<String> {
    UCMJ_ARTICLES
        .iter()
        .find(|(a, _)| *a == article)
        .map(|(a, title)| format!("Article {a}, UCMJ ({title})"))
}

fn custom_signature_lines(values: &BTreeMap<String, String>) -> String {
    let wants = |key: &str| values.get(key).is_some_and(|v| v == "Yes");
    let mut lines = String::new();
    if wants("include_marine_sig") {
        lines.push_str(
            "\n                                    _______________________\n                                    [Marine's Signature]",
        );
    }
    if wants("include_counselor_sig") {
        lines.push_str(
            "\n\n                                    _______________________\n                                    [Counselor's Signature]",
        );
    }
    if wants("include_witness_sig") {
        lines.push_str(
            "\n\n                                    _______________________\n                                    [Witness Signature]",
        );
    }
    lines
}

/// Remove unfilled `[word]` tokens and repair the spacing damage they leave,
/// preserving line structure and leading indentation.
fn scrub(text: &str) -> String {
    let lines: Vec<String> = text.split('\n').map(scrub_line).collect();
    lines.join("\n")
}

fn scrub_line(line: &str) -> String {
    let stripped = strip_placeholders(line);

    let indent_len = stripped.len() - stripped.trim_start_matches(' ').len();
    let (indent, rest) = stripped.split_at(indent_len);

    let mut tidy = String::with_capacity(rest.len());
    let mut prev_space = false;
    for ch in rest.chars() {
        if ch == ' ' {
            prev_space = true;
            continue;
        }
        if prev_space {
            // Swallow the space before orphaned punctuation left by a removed token
            if !matches!(ch, '.' | ',' | ';') {
                tidy.push(' ');
            }
            prev_space = false;
        }
        tidy.push(ch);
    }

    let mut out = String::with_capacity(stripped.len());
    out.push_str(indent);
    out.push_str(&tidy);
    out
}

fn strip_placeholders(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('[') {
        if let Some(len) = rest[start + 1..].find(']') {
            let inner = &rest[start + 1..start + 1 + len];
            if !inner.is_empty()
                && inner
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                out.push_str(&rest[..start]);
                rest = &rest[start + 1 + len + 1..];
                continue;
            }
        }
        out.push_str(&rest[..=start]);
        rest = &rest[start + 1..];
    }
    out.push_str(rest);
    out
}
