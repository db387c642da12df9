//! Human-readable titles for identifiers.

/// Converts an identifier into a sentence-case title.
///
/// Underscores become spaces, the first character is uppercased and every
/// other character lowercased.
///
/// # Example
///
/// ```rust
/// use formschema::pretty_name;
///
/// assert_eq!(pretty_name("first_name"), "First name");
/// assert_eq!(pretty_name("SignupForm"), "Signupform");
/// assert_eq!(pretty_name(""), "");
/// ```
pub fn pretty_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores_become_spaces() {
        assert_eq!(pretty_name("date_of_birth"), "Date of birth");
    }

    #[test]
    fn test_only_first_character_capitalized() {
        assert_eq!(pretty_name("ZIP_Code"), "Zip code");
        assert_eq!(pretty_name("ContactForm"), "Contactform");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(pretty_name(""), "");
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(pretty_name("_private"), " private");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(pretty_name("élan_vital"), "Élan vital");
    }
}
