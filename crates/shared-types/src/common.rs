use serde::{Deserialize, Deserializer};

/// Accept an identifier sent either as a JSON string or a JSON number.
///
/// Older endpoints of the clinic API emit numeric ids for contact messages
/// and bookings while newer ones use strings.
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// Optional variant of [`id_from_string_or_number`]; `null` and a missing
/// field both yield `None`.
pub fn opt_id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "id_from_string_or_number")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(id)| id))
}

/// Case-insensitive substring match of `term` against any of `fields`.
/// A blank term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Compare two ids numerically when both parse as integers, otherwise as text.
pub fn compare_ids(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "id_from_string_or_number")]
        id: String,
    }

    #[test]
    fn id_accepts_string_and_number() {
        let a: Holder = serde_json::from_str(r#"{"id":"abc-1"}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(a.id, "abc-1");
        assert_eq!(b.id, "42");
    }

    #[derive(Deserialize)]
    struct OptHolder {
        #[serde(default, deserialize_with = "opt_id_from_string_or_number")]
        id: Option<String>,
    }

    #[test]
    fn optional_id_accepts_null_missing_and_number() {
        let a: OptHolder = serde_json::from_str(r#"{"id":7}"#).unwrap();
        let b: OptHolder = serde_json::from_str(r#"{"id":null}"#).unwrap();
        let c: OptHolder = serde_json::from_str("{}").unwrap();
        assert_eq!(a.id.as_deref(), Some("7"));
        assert_eq!(b.id, None);
        assert_eq!(c.id, None);
    }

    #[test]
    fn id_rejects_other_shapes() {
        assert!(serde_json::from_str::<Holder>(r#"{"id":true}"#).is_err());
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("SMI", &["Jane Smith", "x"]));
        assert!(!matches_search("doe", &["Jane Smith"]));
        assert!(matches_search("  ", &["anything"]));
    }

    #[test]
    fn numeric_ids_compare_numerically() {
        assert_eq!(compare_ids("9", "10"), Ordering::Less);
        assert_eq!(compare_ids("b", "a"), Ordering::Greater);
    }
}
