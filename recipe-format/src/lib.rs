//! Shared grammar primitives and the document validator for the
//! `recipe.txt` cookbook format.
//!
//! This crate is the single source of truth for the format's line grammars,
//! used by the `recipe-validator` binary and by anything else that needs to
//! check a document without touching the filesystem.
//!
//! A document is a header line (six ` :: `-separated fields) followed by
//! labeled sections, each introduced by a marker line that exactly matches
//! one of the keywords `TAGS`, `INGREDIENTS`, `COMMON INGREDIENTS`, `ITEMS`,
//! `INSTRUCTIONS` or `NOTE`. Every content line must match the grammar of
//! the section it appears in. Blank lines and `#` comments are ignored
//! everywhere. `INGREDIENTS`, `ITEMS` and `INSTRUCTIONS` must each appear
//! exactly once; the other markers may repeat freely.
//!
//! All grammar checks are explicit field/character predicates — no regex
//! engine is involved, so the accepted language is the same on every
//! platform and cannot drift with an engine's matching semantics.

use serde::Serialize;
use thiserror::Error;

/// Base name that marks a file as a recipe document.
pub const RECIPE_FILE_NAME: &str = "recipe.txt";

/// Literal separator between the fields of a multi-field line,
/// including the surrounding single spaces.
pub const FIELD_SEPARATOR: &str = " :: ";

/// The six labeled sections a document may contain.
///
/// The header region (before the first marker line) is not a section; it is
/// represented as the absence of one (`Option<Section>` = `None`) while
/// scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tags,
    Ingredients,
    CommonIngredients,
    Items,
    Instructions,
    Note,
}

impl Section {
    /// Resolve a trimmed line to a section if it exactly equals a marker
    /// keyword. Matching is case-sensitive and admits no extra characters.
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            "TAGS" => Some(Self::Tags),
            "INGREDIENTS" => Some(Self::Ingredients),
            "COMMON INGREDIENTS" => Some(Self::CommonIngredients),
            "ITEMS" => Some(Self::Items),
            "INSTRUCTIONS" => Some(Self::Instructions),
            "NOTE" => Some(Self::Note),
            _ => None,
        }
    }

    /// The marker keyword that introduces this section.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Tags => "TAGS",
            Self::Ingredients => "INGREDIENTS",
            Self::CommonIngredients => "COMMON INGREDIENTS",
            Self::Items => "ITEMS",
            Self::Instructions => "INSTRUCTIONS",
            Self::Note => "NOTE",
        }
    }

    /// Whether this section must appear exactly once per document.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Ingredients | Self::Items | Self::Instructions)
    }
}

/// Validates an integer field without regex.
///
/// Valid: one or more ASCII digits. Leading zeros are accepted.
#[inline]
#[must_use]
pub fn is_integer_field(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a quantity field: an integer run with at most one fractional
/// part, e.g. `2`, `2.5` or `2.05` — but not `2.`, `.5` or `2.5.1`.
#[inline]
#[must_use]
pub fn is_quantity_field(field: &str) -> bool {
    match field.split_once('.') {
        Some((whole, frac)) => is_integer_field(whole) && is_integer_field(frac),
        None => is_integer_field(field),
    }
}

/// Validates a grade field: exactly one character in `1`..=`5`.
#[inline]
#[must_use]
pub fn is_grade_field(field: &str) -> bool {
    matches!(field.as_bytes(), [b'1'..=b'5'])
}

/// Non-empty and free of the given separator character anywhere, not just
/// in separator position.
#[inline]
fn is_text_field(field: &str, forbidden: char) -> bool {
    !field.is_empty() && !field.contains(forbidden)
}

/// Validates a header line: exactly six ` :: `-separated fields,
/// `int :: title :: int :: int :: grade :: grade`. The title may contain
/// any character except `;` (a lone `:` is fine — only the spaced `::`
/// separator splits fields).
#[must_use]
pub fn is_valid_header_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 6 {
        return false;
    }
    is_integer_field(fields[0])
        && is_text_field(fields[1], ';')
        && is_integer_field(fields[2])
        && is_integer_field(fields[3])
        && is_grade_field(fields[4])
        && is_grade_field(fields[5])
}

/// Validates a tag line: a single field with no `:` anywhere.
#[must_use]
pub fn is_valid_tag_line(line: &str) -> bool {
    is_text_field(line, ':')
}

/// Validates an ingredient line: `name :: quantity :: unit`, where name and
/// unit contain no `:` and the quantity is an integer with at most one
/// fractional part. Used by both `INGREDIENTS` and `COMMON INGREDIENTS`.
#[must_use]
pub fn is_valid_ingredient_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return false;
    }
    is_text_field(fields[0], ':') && is_quantity_field(fields[1]) && is_text_field(fields[2], ':')
}

/// Validates an item line: `name :: count`, where the name contains no `:`
/// and the count is an integer.
#[must_use]
pub fn is_valid_item_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 2 {
        return false;
    }
    is_text_field(fields[0], ':') && is_integer_field(fields[1])
}

/// Validates an instruction or note line: a single field with no `;`.
#[must_use]
pub fn is_valid_free_text_line(line: &str) -> bool {
    is_text_field(line, ';')
}

/// Classifies a [`Violation`] independently of its numeric code.
///
/// Codes 1..=7 are the stable reporting contract. `MalformedNote` and
/// `MissingSections` share code 6 — a quirk preserved from the original
/// taxonomy — so consumers that need to tell them apart match on the kind
/// rather than the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    MalformedHeader,
    MalformedTag,
    MalformedIngredient,
    MalformedItem,
    MalformedInstruction,
    MalformedNote,
    MissingSections,
    DuplicateSection,
}

impl ViolationKind {
    /// Stable numeric error code for this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::MalformedHeader => 1,
            Self::MalformedTag => 2,
            Self::MalformedIngredient => 3,
            Self::MalformedItem => 4,
            Self::MalformedInstruction => 5,
            Self::MalformedNote | Self::MissingSections => 6,
            Self::DuplicateSection => 7,
        }
    }
}

/// A single format violation: the stable numeric code plus the offending
/// line (verbatim, post-trim) or a structural description.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("error {code}: {detail}")]
#[non_exhaustive]
pub struct Violation {
    /// Stable numeric code (1..=7) as printed in reports.
    pub code: u8,
    /// Structured classification; distinguishes the two code-6 cases.
    pub kind: ViolationKind,
    /// The offending line, or a human-readable structural reason.
    pub detail: String,
}

impl Violation {
    /// Build a violation; the code is derived from the kind.
    #[must_use]
    pub fn new(kind: ViolationKind, detail: impl Into<String>) -> Self {
        Self {
            code: kind.code(),
            kind,
            detail: detail.into(),
        }
    }

    fn duplicate_section(section: Section) -> Self {
        Self::new(
            ViolationKind::DuplicateSection,
            format!("Duplicate {} section", section.marker()),
        )
    }

    fn missing_sections(missing: &[Section]) -> Self {
        let names: Vec<&str> = missing.iter().copied().map(Section::marker).collect();
        Self::new(
            ViolationKind::MissingSections,
            format!("Missing required sections: {}", names.join(", ")),
        )
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The document conforms to the format.
    Valid,
    /// The document violates the format; scanning stopped at this violation.
    Invalid(Violation),
}

impl Verdict {
    /// Whether the document passed validation.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a `Result`, for callers that propagate violations
    /// with `?`.
    ///
    /// # Errors
    ///
    /// Returns the violation when the verdict is [`Verdict::Invalid`].
    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}

/// Tracks which required sections have been introduced by a marker.
/// Flags are set once and never reset within a document.
#[derive(Debug, Default)]
struct SectionPresence {
    ingredients: bool,
    items: bool,
    instructions: bool,
}

impl SectionPresence {
    /// Records a marker occurrence. Returns `false` when the section was
    /// already recorded (a duplicate). Sections without a presence
    /// requirement are always accepted.
    fn record(&mut self, section: Section) -> bool {
        let flag = match section {
            Section::Ingredients => &mut self.ingredients,
            Section::Items => &mut self.items,
            Section::Instructions => &mut self.instructions,
            Section::Tags | Section::CommonIngredients | Section::Note => return true,
        };
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    /// Required sections not yet recorded, in the fixed reporting order
    /// INGREDIENTS, ITEMS, INSTRUCTIONS.
    fn missing(&self) -> Vec<Section> {
        let mut missing = Vec::new();
        if !self.ingredients {
            missing.push(Section::Ingredients);
        }
        if !self.items {
            missing.push(Section::Items);
        }
        if !self.instructions {
            missing.push(Section::Instructions);
        }
        missing
    }
}

/// Validate the full line sequence of one recipe document.
///
/// Single forward pass, no backtracking: blank lines and `#` comments are
/// skipped, a marker line switches the active section (and is itself never
/// grammar-checked; a repeated required marker fails immediately with code
/// 7), and every other line is validated against the grammar of the active
/// section — or the header grammar before the first marker. Scanning stops
/// at the first violation. After the last line the three required sections
/// must all have been seen, otherwise code 6 reports the missing ones.
///
/// Pure function of the line sequence; state lives on the stack and is
/// discarded with the verdict.
#[must_use]
pub fn validate_document<'a, I>(lines: I) -> Verdict
where
    I: IntoIterator<Item = &'a str>,
{
    let mut active: Option<Section> = None;
    let mut presence = SectionPresence::default();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(section) = Section::from_marker(line) {
            if !presence.record(section) {
                return Verdict::Invalid(Violation::duplicate_section(section));
            }
            active = Some(section);
            continue;
        }

        if !line_matches(active, line) {
            return Verdict::Invalid(Violation::new(line_kind(active), line));
        }
    }

    let missing = presence.missing();
    if missing.is_empty() {
        Verdict::Valid
    } else {
        Verdict::Invalid(Violation::missing_sections(&missing))
    }
}

/// Grammar check for a content line under the given active section
/// (`None` = the header region).
fn line_matches(active: Option<Section>, line: &str) -> bool {
    match active {
        None => is_valid_header_line(line),
        Some(Section::Tags) => is_valid_tag_line(line),
        Some(Section::Ingredients | Section::CommonIngredients) => is_valid_ingredient_line(line),
        Some(Section::Items) => is_valid_item_line(line),
        Some(Section::Instructions | Section::Note) => is_valid_free_text_line(line),
    }
}

/// Violation kind (and thereby code) for a malformed content line.
fn line_kind(active: Option<Section>) -> ViolationKind {
    match active {
        None => ViolationKind::MalformedHeader,
        Some(Section::Tags) => ViolationKind::MalformedTag,
        Some(Section::Ingredients | Section::CommonIngredients) => {
            ViolationKind::MalformedIngredient
        }
        Some(Section::Items) => ViolationKind::MalformedItem,
        Some(Section::Instructions) => ViolationKind::MalformedInstruction,
        Some(Section::Note) => ViolationKind::MalformedNote,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // ---- field predicates ----

    #[test]
    fn test_integer_field_valid() {
        assert!(is_integer_field("1"));
        assert!(is_integer_field("42"));
        assert!(is_integer_field("007"));
    }

    #[test]
    fn test_integer_field_invalid() {
        assert!(!is_integer_field(""));
        assert!(!is_integer_field("a"));
        assert!(!is_integer_field("4 2"));
        assert!(!is_integer_field("-1"));
        assert!(!is_integer_field("4.2"));
    }

    #[test]
    fn test_quantity_field_valid() {
        assert!(is_quantity_field("2"));
        assert!(is_quantity_field("2.5"));
        assert!(is_quantity_field("2.05"));
        assert!(is_quantity_field("0.5"));
        assert!(is_quantity_field("12.345"));
    }

    #[test]
    fn test_quantity_field_invalid() {
        assert!(!is_quantity_field(""));
        assert!(!is_quantity_field("2."));
        assert!(!is_quantity_field(".5"));
        assert!(!is_quantity_field("2.5.1"));
        assert!(!is_quantity_field("2,5"));
        assert!(!is_quantity_field("two"));
    }

    #[test]
    fn test_grade_field_valid() {
        for grade in ["1", "2", "3", "4", "5"] {
            assert!(is_grade_field(grade), "grade {grade} should be valid");
        }
    }

    #[test]
    fn test_grade_field_invalid() {
        for grade in ["", "0", "6", "15", "05", "a", " 1"] {
            assert!(!is_grade_field(grade), "grade {grade:?} should be invalid");
        }
    }

    // ---- section markers ----

    #[test]
    fn test_from_marker_recognizes_all_keywords() {
        assert_eq!(Section::from_marker("TAGS"), Some(Section::Tags));
        assert_eq!(Section::from_marker("INGREDIENTS"), Some(Section::Ingredients));
        assert_eq!(
            Section::from_marker("COMMON INGREDIENTS"),
            Some(Section::CommonIngredients)
        );
        assert_eq!(Section::from_marker("ITEMS"), Some(Section::Items));
        assert_eq!(Section::from_marker("INSTRUCTIONS"), Some(Section::Instructions));
        assert_eq!(Section::from_marker("NOTE"), Some(Section::Note));
    }

    #[test]
    fn test_from_marker_requires_exact_match() {
        assert_eq!(Section::from_marker("tags"), None);
        assert_eq!(Section::from_marker("TAGS "), None);
        assert_eq!(Section::from_marker("INGREDIENT"), None);
        assert_eq!(Section::from_marker("COMMON  INGREDIENTS"), None);
        assert_eq!(Section::from_marker(""), None);
    }

    #[test]
    fn test_marker_round_trip() {
        let sections = [
            Section::Tags,
            Section::Ingredients,
            Section::CommonIngredients,
            Section::Items,
            Section::Instructions,
            Section::Note,
        ];
        for section in sections {
            assert_eq!(Section::from_marker(section.marker()), Some(section));
        }
    }

    #[test]
    fn test_required_sections() {
        assert!(Section::Ingredients.is_required());
        assert!(Section::Items.is_required());
        assert!(Section::Instructions.is_required());
        assert!(!Section::Tags.is_required());
        assert!(!Section::CommonIngredients.is_required());
        assert!(!Section::Note.is_required());
    }

    // ---- line grammars ----

    #[test]
    fn test_header_line_valid() {
        assert!(is_valid_header_line("1 :: Soup :: 10 :: 4 :: 3 :: 5"));
        assert!(is_valid_header_line("12 :: Beef Stew :: 90 :: 6 :: 2 :: 4"));
    }

    #[test]
    fn test_header_line_title_may_contain_a_lone_colon() {
        // Only the spaced " :: " separator splits fields; a bare colon in
        // the title is data, not structure.
        assert!(is_valid_header_line("1 :: Soup: the sequel :: 10 :: 4 :: 3 :: 5"));
    }

    #[test]
    fn test_header_line_grade_out_of_range() {
        assert!(!is_valid_header_line("1 :: Soup :: 10 :: 4 :: 3 :: 6"));
        assert!(!is_valid_header_line("1 :: Soup :: 10 :: 4 :: 0 :: 5"));
        assert!(!is_valid_header_line("1 :: Soup :: 10 :: 4 :: 3 :: 15"));
    }

    #[test]
    fn test_header_line_field_count_is_exact() {
        assert!(!is_valid_header_line("1 :: Soup :: 10 :: 4 :: 3"));
        assert!(!is_valid_header_line("1 :: Soup :: Extra :: 10 :: 4 :: 3 :: 5"));
    }

    #[test]
    fn test_header_line_rejects_bad_fields() {
        assert!(!is_valid_header_line("one :: Soup :: 10 :: 4 :: 3 :: 5"));
        assert!(!is_valid_header_line("1 :: Soup; hot :: 10 :: 4 :: 3 :: 5"));
        assert!(!is_valid_header_line("1 ::  :: 10 :: 4 :: 3 :: 5"));
        assert!(!is_valid_header_line("1 :: Soup :: ten :: 4 :: 3 :: 5"));
    }

    #[test]
    fn test_tag_line() {
        assert!(is_valid_tag_line("vegan"));
        assert!(is_valid_tag_line("quick meals"));
        assert!(is_valid_tag_line("sweet & sour; festive"));
        assert!(!is_valid_tag_line("ratio 1:2"));
        assert!(!is_valid_tag_line(""));
    }

    #[test]
    fn test_ingredient_line_valid() {
        assert!(is_valid_ingredient_line("Salt :: 2 :: tsp"));
        assert!(is_valid_ingredient_line("Water :: 1 :: liter"));
        assert!(is_valid_ingredient_line("Olive oil :: 0.5 :: cup"));
    }

    #[test]
    fn test_ingredient_line_invalid() {
        // Colon inside the name field.
        assert!(!is_valid_ingredient_line("Salt: 2 :: tsp"));
        // More than one fractional part.
        assert!(!is_valid_ingredient_line("Salt :: 2.5.1 :: tsp"));
        assert!(!is_valid_ingredient_line("Salt :: two :: tsp"));
        assert!(!is_valid_ingredient_line("Salt :: 2"));
        assert!(!is_valid_ingredient_line("Salt :: 2 :: tsp :: heaped"));
    }

    #[test]
    fn test_ingredient_line_forbids_colons_not_semicolons() {
        assert!(is_valid_ingredient_line("Salt; fine :: 2 :: tsp"));
        assert!(!is_valid_ingredient_line("Salt :: 2 :: tsp: heaped"));
    }

    #[test]
    fn test_item_line() {
        assert!(is_valid_item_line("Bowl :: 1"));
        assert!(is_valid_item_line("Baking tray :: 2"));
        assert!(!is_valid_item_line("Bowl :: one"));
        assert!(!is_valid_item_line("Bowl :: 1.5"));
        assert!(!is_valid_item_line("Bowl::1"));
        assert!(!is_valid_item_line("Bowl"));
    }

    #[test]
    fn test_free_text_line() {
        assert!(is_valid_free_text_line("Boil water"));
        assert!(is_valid_free_text_line("Serve at 6:30"));
        assert!(!is_valid_free_text_line("Stir; then wait"));
        assert!(!is_valid_free_text_line(""));
    }

    // ---- violations ----

    #[test]
    fn test_violation_codes() {
        assert_eq!(ViolationKind::MalformedHeader.code(), 1);
        assert_eq!(ViolationKind::MalformedTag.code(), 2);
        assert_eq!(ViolationKind::MalformedIngredient.code(), 3);
        assert_eq!(ViolationKind::MalformedItem.code(), 4);
        assert_eq!(ViolationKind::MalformedInstruction.code(), 5);
        // The two code-6 cases share the numeric code by design.
        assert_eq!(ViolationKind::MalformedNote.code(), 6);
        assert_eq!(ViolationKind::MissingSections.code(), 6);
        assert_eq!(ViolationKind::DuplicateSection.code(), 7);
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::new(ViolationKind::MalformedTag, "ratio 1:2");
        assert_eq!(violation.to_string(), "error 2: ratio 1:2");
    }

    // ---- validate_document ----

    #[test]
    fn test_minimal_valid_document() {
        let lines = [
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "INGREDIENTS",
            "ITEMS",
            "INSTRUCTIONS",
        ];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_end_to_end_valid_document() {
        let lines = [
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "INGREDIENTS",
            "Water :: 1 :: liter",
            "ITEMS",
            "Bowl :: 1",
            "INSTRUCTIONS",
            "Boil water",
        ];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_all_sections_document() {
        let lines = [
            "7 :: Pancakes :: 25 :: 2 :: 1 :: 5",
            "TAGS",
            "breakfast",
            "sweet",
            "INGREDIENTS",
            "Flour :: 200 :: g",
            "Milk :: 0.3 :: liter",
            "COMMON INGREDIENTS",
            "Salt :: 1 :: pinch",
            "ITEMS",
            "Pan :: 1",
            "Whisk :: 1",
            "INSTRUCTIONS",
            "Mix the dry ingredients",
            "Whisk in the milk",
            "NOTE",
            "Rest the batter for ten minutes",
        ];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_missing_all_required_sections() {
        let verdict = validate_document(["1 :: Soup :: 10 :: 4 :: 3 :: 5"]);
        let Verdict::Invalid(violation) = verdict else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 6);
        assert_eq!(violation.kind, ViolationKind::MissingSections);
        assert_eq!(
            violation.detail,
            "Missing required sections: INGREDIENTS, ITEMS, INSTRUCTIONS"
        );
    }

    #[test]
    fn test_missing_sections_reported_in_fixed_order() {
        // INSTRUCTIONS present, the other two missing — reported in the
        // fixed order regardless of what the document contains.
        let verdict = validate_document(["1 :: Soup :: 10 :: 4 :: 3 :: 5", "INSTRUCTIONS"]);
        let Verdict::Invalid(violation) = verdict else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.detail, "Missing required sections: INGREDIENTS, ITEMS");
    }

    #[test]
    fn test_duplicate_items_marker() {
        let lines = [
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "INGREDIENTS",
            "ITEMS",
            "ITEMS",
            "INSTRUCTIONS",
        ];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 7);
        assert_eq!(violation.kind, ViolationKind::DuplicateSection);
        assert_eq!(violation.detail, "Duplicate ITEMS section");
    }

    #[test]
    fn test_duplicate_detected_at_marker_before_later_content() {
        // The second marker fails immediately, even though the garbage line
        // after it would also be a violation.
        let lines = [
            "INGREDIENTS",
            "INGREDIENTS",
            "definitely :: not :: an :: ingredient",
        ];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.detail, "Duplicate INGREDIENTS section");
    }

    #[test]
    fn test_duplicate_instructions_marker() {
        let lines = ["INSTRUCTIONS", "Boil water", "INSTRUCTIONS"];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 7);
        assert_eq!(violation.detail, "Duplicate INSTRUCTIONS section");
    }

    #[test]
    fn test_unrestricted_markers_may_repeat() {
        let lines = [
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "TAGS",
            "starter",
            "NOTE",
            "Freezes well",
            "TAGS",
            "winter",
            "COMMON INGREDIENTS",
            "Pepper :: 1 :: pinch",
            "COMMON INGREDIENTS",
            "NOTE",
            "INGREDIENTS",
            "ITEMS",
            "INSTRUCTIONS",
        ];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_comments_and_blank_lines_ignored_everywhere() {
        let lines = [
            "# leading comment before the header",
            "",
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "",
            "INGREDIENTS",
            "# this is not an ingredient line",
            "Water :: 1 :: liter",
            "   ",
            "ITEMS",
            "",
            "INSTRUCTIONS",
            "# trailing comment",
        ];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_fail_fast_reports_first_violation() {
        // The malformed tag line is hit before end-of-scan, so code 2 wins
        // over the missing-sections check that would otherwise fire.
        let lines = ["1 :: Soup :: 10 :: 4 :: 3 :: 5", "TAGS", "  ratio 1:2  "];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 2);
        assert_eq!(violation.kind, ViolationKind::MalformedTag);
        // The offending line is reported post-trim.
        assert_eq!(violation.detail, "ratio 1:2");
    }

    #[test]
    fn test_header_grammar_applies_until_first_marker() {
        let lines = [
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "not a header line",
            "INGREDIENTS",
            "ITEMS",
            "INSTRUCTIONS",
        ];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 1);
        assert_eq!(violation.detail, "not a header line");
    }

    #[test]
    fn test_marker_lines_are_trimmed_before_matching() {
        let lines = [
            "1 :: Soup :: 10 :: 4 :: 3 :: 5",
            "  INGREDIENTS  ",
            "ITEMS",
            "INSTRUCTIONS",
        ];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_document_without_header_line_is_valid() {
        // Nothing requires the pre-marker region to be non-empty; only the
        // three required sections decide structural completeness.
        let lines = ["INGREDIENTS", "ITEMS", "INSTRUCTIONS"];
        assert_eq!(validate_document(lines), Verdict::Valid);
    }

    #[test]
    fn test_reentered_section_uses_its_grammar() {
        let lines = [
            "TAGS",
            "starter",
            "INGREDIENTS",
            "Water :: 1 :: liter",
            "TAGS",
            "ratio 1:2",
        ];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 2);
    }

    #[test]
    fn test_note_line_with_semicolon_gets_code_6() {
        let lines = [
            "INGREDIENTS",
            "ITEMS",
            "INSTRUCTIONS",
            "NOTE",
            "Keeps for a week; freeze the rest",
        ];
        let Verdict::Invalid(violation) = validate_document(lines) else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 6);
        assert_eq!(violation.kind, ViolationKind::MalformedNote);
    }

    #[test]
    fn test_empty_document_reports_missing_sections() {
        let verdict = validate_document([]);
        let Verdict::Invalid(violation) = verdict else {
            panic!("expected invalid verdict");
        };
        assert_eq!(violation.code, 6);
        assert_eq!(
            violation.detail,
            "Missing required sections: INGREDIENTS, ITEMS, INSTRUCTIONS"
        );
    }

    #[test]
    fn test_verdict_into_result() {
        assert!(validate_document(["INGREDIENTS", "ITEMS", "INSTRUCTIONS"])
            .into_result()
            .is_ok());
        let err = validate_document([]).into_result().unwrap_err();
        assert_eq!(err.code, 6);
    }
}
