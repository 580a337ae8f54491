use page_eleven::layout::suggested_filename;
use time::macros::date;

#[test]
fn punctuation_collapses_to_single_separators() {
    assert_eq!(
        suggested_filename("6105 Counseling!!", date!(2025 - 06 - 15)),
        "NAVMC-118-11_6105-counseling_20250615.pdf"
    );
}

#[test]
fn names_are_lowercased() {
    assert_eq!(
        suggested_filename("Rifle Qualification", date!(2025 - 01 - 05)),
        "NAVMC-118-11_rifle-qualification_20250105.pdf"
    );
}

#[test]
fn leading_and_trailing_separators_are_stripped() {
    assert_eq!(
        suggested_filename("  ***BCP Assignment*** ", date!(2025 - 06 - 15)),
        "NAVMC-118-11_bcp-assignment_20250615.pdf"
    );
}

#[test]
fn long_names_truncate_without_a_dangling_separator() {
    let name = "Professional Military Education Completion Entry";
    let filename = suggested_filename(name, date!(2025 - 06 - 15));
    let stem = filename
        .strip_prefix("NAVMC-118-11_")
        .unwrap()
        .strip_suffix("_20250615.pdf")
        .unwrap();
    assert!(stem.len() <= 25, "stem '{stem}' too long");
    assert!(!stem.ends_with('-'));
    assert!(!stem.starts_with('-'));
    assert!(stem.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
}

#[test]
fn empty_names_fall_back_to_a_generic_stem() {
    assert_eq!(
        suggested_filename("???", date!(2025 - 06 - 15)),
        "NAVMC-118-11_entry_20250615.pdf"
    );
}
