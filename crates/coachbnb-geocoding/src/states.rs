//! US state-code normalization for free-text location input.

/// Two-letter postal codes paired with the full state name, DC included.
const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Normalize a state given as a two-letter code or a full name to its
/// canonical two-letter code. Matching is case- and whitespace-insensitive.
///
/// ```
/// use coachbnb_geocoding::normalize_state_code;
///
/// assert_eq!(normalize_state_code("tx"), Some("TX"));
/// assert_eq!(normalize_state_code("New York"), Some("NY"));
/// assert_eq!(normalize_state_code("Atlantis"), None);
/// ```
#[must_use]
pub fn normalize_state_code(input: &str) -> Option<&'static str> {
    let trimmed = input.trim();
    STATES
        .iter()
        .find(|(code, name)| trimmed.eq_ignore_ascii_case(code) || trimmed.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}
