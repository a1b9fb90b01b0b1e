//! Tests for the individual normalization and classification passes.

use addrlabel_clean::{
    detect_duplicate_addresses, format_name, is_foreign_address, normalize_address,
    normalize_postal_code,
};

#[test]
fn postal_code_separator_variants_normalize_identically() {
    for raw in ["230-0025", "2300025", "230 0025", " 〒230-0025 "] {
        assert_eq!(
            normalize_postal_code(Some(raw)),
            Some("230-0025".to_string()),
            "input {raw:?}"
        );
    }
}

#[test]
fn postal_code_with_wrong_digit_count_is_absent() {
    assert_eq!(normalize_postal_code(Some("ABC123")), None);
    assert_eq!(normalize_postal_code(Some("123456")), None);
    assert_eq!(normalize_postal_code(Some("12345678")), None);
    assert_eq!(normalize_postal_code(Some("2300025.0")), None);
}

#[test]
fn postal_code_blank_values_are_absent() {
    assert_eq!(normalize_postal_code(None), None);
    assert_eq!(normalize_postal_code(Some("")), None);
    assert_eq!(normalize_postal_code(Some("   ")), None);
    assert_eq!(normalize_postal_code(Some("nan")), None);
}

#[test]
fn address_missing_becomes_empty() {
    assert_eq!(normalize_address(None, Some("東京都")), "");
}

#[test]
fn address_repeated_prefecture_keeps_one_leading_occurrence() {
    let normalized = normalize_address(
        Some("神奈川県神奈川県横浜市鶴見区市場大和町8-4"),
        Some("神奈川県"),
    );
    assert_eq!(normalized, "神奈川県横浜市鶴見区市場大和町8-4");
    assert_eq!(normalized.matches("神奈川県").count(), 1);
}

#[test]
fn address_without_prefecture_is_unchanged() {
    assert_eq!(
        normalize_address(Some("京都府三島郡島本町広瀬３丁目６－７"), None),
        "京都府三島郡島本町広瀬３丁目６－７"
    );
    assert_eq!(
        normalize_address(Some("京都府京都府三島郡"), Some("")),
        "京都府京都府三島郡"
    );
}

#[test]
fn address_full_width_spaces_become_ascii() {
    assert_eq!(
        normalize_address(Some("東京都千代田区霞が関1-2-3\u{3000}中央合同庁舎"), Some("東京都")),
        "東京都千代田区霞が関1-2-3 中央合同庁舎"
    );
    // Other whitespace is left alone.
    assert_eq!(normalize_address(Some("a  b\tc"), None), "a  b\tc");
}

#[test]
fn address_normalization_is_idempotent() {
    let samples = [
        ("神奈川県神奈川県横浜市鶴見区", "神奈川県"),
        ("京都府三島郡島本町広瀬\u{3000}３丁目", "京都府"),
        ("5425 Buchanan Street Burnaby BC Canada", "カナダ"),
        ("", "東京都"),
    ];
    for (address, prefecture) in samples {
        let once = normalize_address(Some(address), Some(prefecture));
        let twice = normalize_address(Some(&once), Some(prefecture));
        assert_eq!(once, twice, "input {address:?}");
    }
}

#[test]
fn name_gets_honorific() {
    assert_eq!(format_name(Some("木邑敏章"), "様"), "木邑敏章 様");
    assert_eq!(format_name(Some(" 正司 宣彦\u{3000}"), "様"), "正司宣彦 様");
    assert_eq!(format_name(Some("John Doe"), "様"), "JohnDoe 様");
}

#[test]
fn name_with_honorific_is_not_doubled() {
    assert_eq!(format_name(Some("山田太郎様"), "様"), "山田太郎様");
    assert_eq!(format_name(Some("山田 太郎 様"), "様"), "山田太郎様");
}

#[test]
fn missing_name_stays_empty() {
    assert_eq!(format_name(None, "様"), "");
    assert_eq!(format_name(Some("\u{3000} "), "様"), "");
}

#[test]
fn foreign_boundary_is_strict() {
    // 2 of 4 characters are Latin: exactly 0.5.
    assert!(!is_foreign_address("ab東京"));
    // 3 of 4.
    assert!(is_foreign_address("abc東"));
    assert!(is_foreign_address("5425 Buchanan Street Burnaby BC Canada"));
    assert!(!is_foreign_address("東京都渋谷区1-1-1"));
    assert!(!is_foreign_address(""));
}

#[test]
fn duplicates_flag_every_member_of_shared_groups() {
    let flagged = detect_duplicate_addresses(["A", "A", "B"]);
    assert_eq!(flagged.into_iter().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn empty_addresses_are_never_duplicates() {
    assert!(detect_duplicate_addresses(["", "", "", ""]).is_empty());
    let flagged = detect_duplicate_addresses(["", "X", "", "X", "Y"]);
    assert_eq!(flagged.into_iter().collect::<Vec<_>>(), vec![1, 3]);
}
