/// Administrative prefixes stripped from user-supplied location names before
/// matching against the carrier's reference lists. Both the diacritic and
/// the folded forms appear because client input arrives in either. Longer
/// prefixes come first so "thị xã" wins over "xã".
const ADMIN_PREFIXES: &[&str] = &[
    "thành phố",
    "thanh pho",
    "thị trấn",
    "thi tran",
    "thị xã",
    "thi xa",
    "tỉnh",
    "tinh",
    "quận",
    "quan",
    "huyện",
    "huyen",
    "phường",
    "phuong",
    "xã",
    "xa",
    "tp.",
    "tp",
    "q.",
    "p.",
];

/// Normalizes a free-text location name: strip one leading administrative
/// prefix (case-insensitive), collapse internal whitespace, title-case each
/// remaining word.
pub fn normalize_location_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();

    let mut rest = trimmed;
    for prefix in ADMIN_PREFIXES {
        if lowered.starts_with(prefix) {
            let boundary_ok = lowered.len() == prefix.len()
                || prefix.ends_with('.')
                || lowered[prefix.len()..].starts_with(char::is_whitespace);
            if boundary_ok {
                // The prefix table is lowercase but char counts match the
                // original, so cut by character count.
                let char_count = prefix.chars().count();
                let byte_offset = trimmed
                    .char_indices()
                    .nth(char_count)
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());
                rest = trimmed[byte_offset..].trim_start();
                break;
            }
        }
    }

    rest.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Case-insensitive, trim-only match against a reference entry's canonical
/// name or any of its aliases. First match wins at the call site.
pub fn matches_reference(normalized: &str, name: &str, aliases: &[String]) -> bool {
    let target = normalized.trim().to_lowercase();

    if name.trim().to_lowercase() == target {
        return true;
    }

    aliases
        .iter()
        .any(|alias| alias.trim().to_lowercase() == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritic_prefixes() {
        assert_eq!(normalize_location_name("Thành phố Hà Nội"), "Hà Nội");
        assert_eq!(normalize_location_name("Quận 1"), "1");
        assert_eq!(normalize_location_name("Phường Bến Nghé"), "Bến Nghé");
    }

    #[test]
    fn strips_folded_prefixes() {
        assert_eq!(normalize_location_name("quan 1"), "1");
        assert_eq!(normalize_location_name("tinh Lam Dong"), "Lam Dong");
    }

    #[test]
    fn only_a_leading_prefix_is_stripped() {
        // "Xã" inside the name must survive.
        assert_eq!(normalize_location_name("Đồng Xã"), "Đồng Xã");
    }

    #[test]
    fn collapses_whitespace_and_title_cases() {
        assert_eq!(
            normalize_location_name("  thành phố   hồ   chí   minh "),
            "Hồ Chí Minh"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_location_name("Quận Gò Vấp");
        let twice = normalize_location_name(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn diacritic_and_folded_forms_resolve_to_the_same_district() {
        // Reference data whose canonical name is just "1".
        let aliases = vec!["Quan 1".to_string(), "Q1".to_string()];

        let from_diacritic = normalize_location_name("Quận 1");
        let from_folded = normalize_location_name("quan 1");

        assert!(matches_reference(&from_diacritic, "1", &aliases));
        assert!(matches_reference(&from_folded, "1", &aliases));
    }

    #[test]
    fn aliases_match_case_insensitively() {
        let aliases = vec!["Sai Gon".to_string(), "TPHCM".to_string()];
        assert!(matches_reference("tphcm", "Hồ Chí Minh", &aliases));
        assert!(!matches_reference("Đà Nẵng", "Hồ Chí Minh", &aliases));
    }
}
