//! Human-readable labels for identifier-style keys

/// Turn a camelCase key into a title
///
/// A space is inserted before every ASCII uppercase letter, the first
/// character is capitalized and surrounding whitespace is trimmed.
///
/// ```
/// use booklet_report::format_label;
///
/// assert_eq!(format_label("employerContribution"), "Employer Contribution");
/// assert_eq!(format_label(""), "");
/// ```
pub fn format_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    capitalized.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(format_label("employerContribution"), "Employer Contribution");
        assert_eq!(format_label("outOfNetwork"), "Out Of Network");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format_label("network"), "Network");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_leading_uppercase_is_trimmed() {
        assert_eq!(format_label("PlanName"), "Plan Name");
    }

    #[test]
    fn test_acronym_letters_are_split() {
        assert_eq!(format_label("HSA"), "H S A");
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(format_label("copay  "), "Copay");
    }

    #[test]
    fn test_digits_untouched() {
        assert_eq!(format_label("tier2Drugs"), "Tier2 Drugs");
    }
}
