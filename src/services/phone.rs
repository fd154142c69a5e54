/// Converts free-form input into the canonical +7XXXXXXXXXX form.
///
/// Accepted:
/// - already-canonical "+7" followed by exactly 10 digits;
/// - domestic trunk form: "8" followed by exactly 10 digits, rewritten to +7.
///
/// Anything else (wrong length, letters, other prefixes) yields None.
/// Normalizing an already-canonical value returns it unchanged.
pub fn normalize(raw: &str) -> Option<String> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if let Some(rest) = compact.strip_prefix("+7") {
        if rest.len() == 10 && rest.chars().all(|c| c.is_ascii_digit()) {
            return Some(compact);
        }
        return None;
    }

    if let Some(rest) = compact.strip_prefix('8') {
        if rest.len() == 10 && rest.chars().all(|c| c.is_ascii_digit()) {
            return Some(format!("+7{rest}"));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_form() {
        assert_eq!(
            normalize("+79991234567").as_deref(),
            Some("+79991234567")
        );
    }

    #[test]
    fn is_idempotent_on_canonical_input() {
        let once = normalize("89991234567").unwrap();
        assert_eq!(normalize(&once), Some(once.clone()));
    }

    #[test]
    fn rewrites_trunk_prefix() {
        assert_eq!(
            normalize("89991234567").as_deref(),
            Some("+79991234567")
        );
    }

    #[test]
    fn strips_separators() {
        assert_eq!(
            normalize("+7 999 123-45-67").as_deref(),
            Some("+79991234567")
        );
        assert_eq!(
            normalize("8 (999) 123-45-67").as_deref(),
            Some("+79991234567")
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(normalize("+7999123456"), None);
        assert_eq!(normalize("+799912345678"), None);
        assert_eq!(normalize("8999123456"), None);
        assert_eq!(normalize("899912345678"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("hello"), None);
        assert_eq!(normalize("+7999abc4567"), None);
        assert_eq!(normalize("+19991234567"), None);
        assert_eq!(normalize("79991234567"), None);
    }
}
