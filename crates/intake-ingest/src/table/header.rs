//! Header canonicalization and alias lookup.

use crate::record::Field;

/// Canonicalized header spellings accepted for each field.
const HEADER_ALIASES: &[(&str, Field)] = &[
    // FirstName
    ("firstname", Field::FirstName),
    ("first", Field::FirstName),
    ("fname", Field::FirstName),
    ("givenname", Field::FirstName),
    ("given", Field::FirstName),
    ("forename", Field::FirstName),
    ("forenames", Field::FirstName),
    ("christianname", Field::FirstName),
    // LastName
    ("lastname", Field::LastName),
    ("last", Field::LastName),
    ("lname", Field::LastName),
    ("surname", Field::LastName),
    ("familyname", Field::LastName),
    ("family", Field::LastName),
    // DateOfBirth
    ("dateofbirth", Field::DateOfBirth),
    ("dob", Field::DateOfBirth),
    ("birthdate", Field::DateOfBirth),
    ("birthday", Field::DateOfBirth),
    ("datebirth", Field::DateOfBirth),
    ("birth", Field::DateOfBirth),
    ("bdate", Field::DateOfBirth),
];

/// Lower-cases `value` and drops everything that is not alphanumeric.
pub fn canonicalize_header(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Maps a source header onto a canonical field.
pub fn resolve_header(value: &str) -> Option<Field> {
    let key = canonicalize_header(value);
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, field)| *field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_header() {
        assert_eq!(canonicalize_header("Date_of_Birth"), "dateofbirth");
        assert_eq!(canonicalize_header("  First Name "), "firstname");
        assert_eq!(canonicalize_header("D.O.B."), "dob");
    }

    #[test]
    fn test_resolve_header_aliases() {
        assert_eq!(resolve_header("DOB"), Some(Field::DateOfBirth));
        assert_eq!(resolve_header("date_of_birth"), Some(Field::DateOfBirth));
        assert_eq!(resolve_header("BirthDate"), Some(Field::DateOfBirth));
        assert_eq!(resolve_header("Given Name"), Some(Field::FirstName));
        assert_eq!(resolve_header("Surname"), Some(Field::LastName));
        assert_eq!(resolve_header("last-name"), Some(Field::LastName));
    }

    #[test]
    fn test_resolve_header_unknown() {
        assert_eq!(resolve_header("Email"), None);
        assert_eq!(resolve_header("Jane"), None);
        assert_eq!(resolve_header(""), None);
    }
}
