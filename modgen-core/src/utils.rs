//! Shared utility functions for code generation.

/// Split a name into words on separators and case boundaries.
///
/// `"user_profile"`, `"user-profile"` and `"UserProfile"` all yield
/// `["user", "profile"]` modulo case. An uppercase run followed by a
/// lowercase letter starts a new word (`"HTTPClient"` -> `["HTTP", "Client"]`).
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert a string to PascalCase (e.g., "user_profile" -> "UserProfile")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to kebab-case (e.g., "UserProfile" -> "user-profile")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("UserProfile"), "UserProfile");
        assert_eq!(to_pascal_case("HTTPClient"), "HttpClient");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Profile"), "profile");
        assert_eq!(to_kebab_case("UserProfile"), "user-profile");
        assert_eq!(to_kebab_case("user_profile"), "user-profile");
        assert_eq!(to_kebab_case("HTTPClient"), "http-client");
        assert_eq!(to_kebab_case("asset2Group"), "asset2-group");
        assert_eq!(to_kebab_case(""), "");
    }
}
