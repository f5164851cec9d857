use crate::recipients::{is_blank, RecipientList};

#[test]
fn test_parse_drops_blank_tokens_and_keeps_order() {
    let recipients = RecipientList::parse(Some("a@x.com, , b@y.com ,"));
    assert_eq!(recipients.iter().collect::<Vec<_>>(), vec!["a@x.com", "b@y.com"]);
    assert_eq!(recipients.len(), 2);
    assert_eq!(recipients.joined(), "a@x.com,b@y.com");
}

#[test]
fn test_parse_empty_inputs() {
    assert!(RecipientList::parse(None).is_empty());
    assert!(RecipientList::parse(Some("")).is_empty());
    assert!(RecipientList::parse(Some("   \t ")).is_empty());
    assert!(RecipientList::parse(Some(" , ,, ")).is_empty());
}

#[test]
fn test_parse_does_not_validate_addresses() {
    // Anything non-empty is kept; the processor validates addresses
    let recipients = RecipientList::parse(Some("not-an-email,  producer "));
    assert_eq!(recipients.joined(), "not-an-email,producer");
}

#[test]
fn test_display_uses_comma_space() {
    let recipients = RecipientList::parse(Some("client@example.com,producer@example.com"));
    assert_eq!(
        recipients.to_string(),
        "client@example.com, producer@example.com"
    );
}

#[test]
fn test_is_blank() {
    assert!(is_blank(None));
    assert!(is_blank(Some("")));
    assert!(is_blank(Some("  \n")));
    // Commas alone are input, just not valid input
    assert!(!is_blank(Some(" , ")));
    assert!(!is_blank(Some("a@x.com")));
}
