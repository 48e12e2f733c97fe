use homecard::labels::card_label;

#[test]
fn test_known_card_labels() {
    insta::assert_snapshot!(card_label("artCard"), @"Cover Image");
    insta::assert_snapshot!(card_label("hiCard"), @"Center");
    insta::assert_snapshot!(card_label("socialButtons"), @"Contact");
    insta::assert_snapshot!(card_label("beianCard"), @"Record");
}

#[test]
fn test_unknown_keys_derive_a_label() {
    insta::assert_snapshot!(card_label("customInfoCard"), @"custom Info Card");
    insta::assert_snapshot!(card_label("XCard"), @"X Card");
}

#[test]
fn test_keys_without_capitals_pass_through() {
    assert_eq!(card_label("plain"), "plain");
    assert_eq!(card_label(""), "");
}
