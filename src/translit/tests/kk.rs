use crate::language::Language;

use super::{ro, ro_ascii};

#[test]
fn diacritic_mode() {
    assert_eq!(ro("қазақ", Language::Kk), "qazaq");
    assert_eq!(ro("тіл", Language::Kk), "til");
    assert_eq!(ro("ғұмыр", Language::Kk), "ghūmyr");
}

#[test]
fn ascii_mode() {
    assert_eq!(ro_ascii("қазақ", Language::Kk), "qazaq");
    assert_eq!(ro_ascii("тіл", Language::Kk), "til");
    assert_eq!(ro_ascii("ғұмыр", Language::Kk), "ghumyr");
}

#[test]
fn ng_and_umlaut_vowels() {
    assert_eq!(ro("өлең", Language::Kk), "oleng");
    assert_eq!(ro("үміт", Language::Kk), "umit");
}
