//! Author identity model.
//!
//! # Responsibility
//! - Normalize declared author names into a stable "Last, First" form.
//! - Cache identity, sort and display keys at construction.
//!
//! # Invariants
//! - `last_first` is NFC-normalized; it doubles as the identity and sort key.
//! - Two different spellings are two different identities. No fuzzy matching.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Generational suffixes split off the end of a declared name.
const NAME_SUFFIXES: &[&str] = &["Jr.", "Jr", "Sr.", "Sr", "II", "III", "IV", "V"];

/// A person credited on one or more SEP records.
///
/// Authors are recomputed from the record set on every run; they are not
/// persisted entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Name exactly as declared in the `Author` header field.
    pub name: String,
    /// Contact address, if the entry carried a non-empty one.
    pub email: Option<String>,
    /// NFC-normalized "Last, First [, Suffix]" form. Identity and sort key.
    pub last_first: String,
    /// Surname part only, shown in index table rows.
    pub surname: String,
}

impl Author {
    /// Builds an author from one declared entry, caching the derived keys.
    ///
    /// An empty or whitespace-only email normalizes to `None`.
    pub fn new(name: &str, email: Option<&str>) -> Self {
        let name = name.trim().to_string();
        let (last_first, surname) = normalize_name(&name);
        let email = email
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Self {
            name,
            email,
            last_first,
            surname,
        }
    }
}

/// Computes the `(last_first, surname)` pair for a declared name.
///
/// The final whitespace token is the surname; lowercase particles directly
/// before it (`van`, `von`, `de`, ...) join it. A trailing generational
/// suffix is appended after the given names.
fn normalize_name(name: &str) -> (String, String) {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();

    let has_suffix = tokens.len() > 2
        && tokens
            .last()
            .is_some_and(|last| NAME_SUFFIXES.contains(last));
    let suffix = if has_suffix { tokens.pop() } else { None };

    let mut surname_parts = Vec::new();
    if let Some(last) = tokens.pop() {
        surname_parts.push(last);
    }
    while let Some(&prev) = tokens.last() {
        if !is_name_particle(prev) {
            break;
        }
        surname_parts.insert(0, prev);
        tokens.pop();
    }

    let surname = surname_parts.join(" ");
    let given = tokens.join(" ");

    let mut last_first = if given.is_empty() {
        surname.clone()
    } else {
        format!("{surname}, {given}")
    };
    if let Some(suffix) = suffix {
        last_first.push_str(", ");
        last_first.push_str(suffix);
    }

    (last_first.nfc().collect(), surname.nfc().collect())
}

fn is_name_particle(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::Author;

    #[test]
    fn plain_name_splits_on_last_token() {
        let author = Author::new("A. Author", Some("a@x.org"));
        assert_eq!(author.last_first, "Author, A.");
        assert_eq!(author.surname, "Author");
        assert_eq!(author.email.as_deref(), Some("a@x.org"));
    }

    #[test]
    fn single_token_name_is_its_own_key() {
        let author = Author::new("Plato", None);
        assert_eq!(author.last_first, "Plato");
        assert_eq!(author.surname, "Plato");
    }

    #[test]
    fn lowercase_particles_join_the_surname() {
        let author = Author::new("Guido van Rossum", None);
        assert_eq!(author.last_first, "van Rossum, Guido");
        assert_eq!(author.surname, "van Rossum");
    }

    #[test]
    fn generational_suffix_trails_the_given_names() {
        let author = Author::new("Sammy Davis Jr.", None);
        assert_eq!(author.last_first, "Davis, Sammy, Jr.");
        assert_eq!(author.surname, "Davis");
    }

    #[test]
    fn two_token_name_keeps_suffix_like_surname() {
        // "Jr." with nothing but a given name in front is a surname, not a
        // suffix.
        let author = Author::new("Sammy Jr.", None);
        assert_eq!(author.last_first, "Jr., Sammy");
    }

    #[test]
    fn empty_email_normalizes_to_none() {
        let author = Author::new("A. Author", Some("  "));
        assert_eq!(author.email, None);
    }

    #[test]
    fn combining_characters_normalize_to_composed_form() {
        // "Lo\u{0308}wis" (o + combining diaeresis) composes to "Löwis".
        let author = Author::new("Martin v. Lo\u{0308}wis", None);
        assert_eq!(author.surname, "L\u{00f6}wis");
        assert_eq!(author.last_first.chars().count(), "Löwis, Martin v.".chars().count());
    }

    #[test]
    fn identical_spellings_share_an_identity_key() {
        let a = Author::new("Barry Warsaw", Some("barry@x.org"));
        let b = Author::new("Barry Warsaw", None);
        assert_eq!(a.last_first, b.last_first);
    }
}
