//! End-to-end export of a small manuscript

use wordsmith_common::{WordEntry, WordMap};
use wordsmith_transform::{export_path, transform};

fn cast() -> WordMap {
    let entries = vec![
        WordEntry::new("hero", "Aria Vance"),
        WordEntry::new("inn", "the Gilded Thistle"),
        WordEntry::new("keeper", "Old Brannoc"),
    ];
    WordMap::from_entries(&entries)
}

#[test]
fn test_manuscript_export() {
    let source = r#"// Chapter one draft, keep under 2k words
{hero} pushed open the door of {inn}.
{keeper} looked up. // make him grumpier

  // TODO: describe the room
"You're late," said {keeper}.
{stranger} watched from the corner."#;

    let expected = r#"Aria Vance pushed open the door of the Gilded Thistle.
Old Brannoc looked up.

"You're late," said Old Brannoc.
{stranger} watched from the corner."#;

    assert_eq!(transform(source, &cast()), expected);
}

#[test]
fn test_export_of_empty_mapping_only_strips_comments() {
    let source = "{hero} arrives. // note\n// gone\n{inn}";
    assert_eq!(transform(source, &WordMap::new()), "{hero} arrives.\n{inn}");
}

#[test]
fn test_export_has_no_placeholder_syntax_left_when_fully_resolved() {
    let source = "{hero} and {keeper} at {inn}.";
    let output = transform(source, &cast());

    assert!(!output.contains('{'));
    assert_eq!(transform(&output, &cast()), output);
}

#[test]
fn test_export_path_is_sibling() {
    let path = std::path::Path::new("/manuscripts/book/ch01.txt");
    assert_eq!(
        export_path(path),
        std::path::PathBuf::from("/manuscripts/book/ch01_transformed.txt")
    );
}
