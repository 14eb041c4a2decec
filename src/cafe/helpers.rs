//! Café Query Pipeline
//!
//! Pure functions that turn raw query pairs into a response body:
//! parse → validate → select → format. Each step is independent of axum so
//! it can be exercised directly.

use super::{
    models::{CafeQueryError, ParsedQuery, RawQuery},
    repository::CafeRepository,
};

const CITY_PARAM: &str = "city";
const COUNT_PARAM: &str = "count";

/// Separator between café names in a success body
pub const CAFE_SEPARATOR: &str = ",";

/// Extracts `city` and `count` from decoded query pairs.
///
/// The first occurrence of a repeated key wins. A `count` that is present
/// but empty stays `Some("")` and fails validation as an invalid count.
pub fn parse_query<K, V>(pairs: &[(K, V)]) -> RawQuery
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let first = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref().to_string())
    };

    RawQuery {
        city: first(CITY_PARAM).unwrap_or_default(),
        count: first(COUNT_PARAM),
    }
}

/// Checks the city against the repository, then the count.
///
/// The city check runs first, so an unknown city with a bad count reports
/// [`CafeQueryError::UnsupportedCity`].
pub fn validate_query(
    raw: RawQuery,
    repository: &CafeRepository,
) -> Result<ParsedQuery, CafeQueryError> {
    if !repository.contains_city(&raw.city) {
        return Err(CafeQueryError::UnsupportedCity);
    }

    let count = parse_count(raw.count.as_deref())?;

    Ok(ParsedQuery::new(raw.city, count))
}

/// Parses a base-10 non-negative count.
///
/// Negative numbers fail like any other non-numeric input.
fn parse_count(count: Option<&str>) -> Result<usize, CafeQueryError> {
    count
        .ok_or(CafeQueryError::CountMissing)?
        .parse::<usize>()
        .map_err(|_| CafeQueryError::InvalidCount)
}

/// Returns the first `min(count, len)` cafés of the queried city.
pub fn select_cafes<'a>(query: &ParsedQuery, repository: &'a CafeRepository) -> &'a [String] {
    // `ParsedQuery` is only built by `validate_query`, which checked the city.
    debug_assert!(
        repository.contains_city(&query.city),
        "validated city {:?} missing from catalog",
        query.city
    );
    let cafes = repository.cafes(&query.city).unwrap_or_default();
    let end = query.count.min(cafes.len());
    &cafes[..end]
}

/// Joins the selection into the response body, e.g. `"A,B,C"`.
pub fn format_selection(cafes: &[String]) -> String {
    cafes.join(CAFE_SEPARATOR)
}

/// Runs the full pipeline for one request.
pub fn find_cafes(raw: RawQuery, repository: &CafeRepository) -> Result<String, CafeQueryError> {
    let query = validate_query(raw, repository)?;
    let selection = select_cafes(&query, repository);
    Ok(format_selection(selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> CafeRepository {
        CafeRepository::new([
            ("moscow", vec!["A", "B", "C", "D"]),
            ("empty", Vec::<&str>::new()),
        ])
    }

    fn raw(city: &str, count: Option<&str>) -> RawQuery {
        RawQuery {
            city: city.to_string(),
            count: count.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_query() {
        let parsed = parse_query(&[("count", "2"), ("city", "moscow"), ("city", "tula")]);
        assert_eq!(parsed, raw("moscow", Some("2")));

        let no_params: &[(&str, &str)] = &[];
        assert_eq!(parse_query(no_params), raw("", None));

        assert_eq!(
            parse_query(&[("city", "moscow"), ("count", "")]),
            raw("moscow", Some(""))
        );
    }

    #[test]
    fn test_validate_city_first() {
        let repo = repository();

        assert_eq!(
            validate_query(raw("not-moscow", None), &repo),
            Err(CafeQueryError::UnsupportedCity)
        );
        assert_eq!(
            validate_query(raw("", Some("1")), &repo),
            Err(CafeQueryError::UnsupportedCity)
        );
    }

    #[test]
    fn test_validate_count() {
        let repo = repository();

        assert_eq!(
            validate_query(raw("moscow", None), &repo),
            Err(CafeQueryError::CountMissing)
        );
        for bad in ["", "g", "-1", "1.5", " 2", "99999999999999999999999"] {
            assert_eq!(
                validate_query(raw("moscow", Some(bad)), &repo),
                Err(CafeQueryError::InvalidCount),
                "count {bad:?} should be rejected"
            );
        }
        assert_eq!(
            validate_query(raw("moscow", Some("0")), &repo),
            Ok(ParsedQuery::new("moscow".into(), 0))
        );
    }

    #[test]
    fn test_select_truncates_and_keeps_order() {
        let repo = repository();

        let two = ParsedQuery::new("moscow".into(), 2);
        assert_eq!(select_cafes(&two, &repo), &["A", "B"]);

        let many = ParsedQuery::new("moscow".into(), 5);
        assert_eq!(select_cafes(&many, &repo), &["A", "B", "C", "D"]);

        let none = ParsedQuery::new("empty".into(), 3);
        assert!(select_cafes(&none, &repo).is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing from catalog")]
    fn test_select_rejects_unvalidated_city() {
        let unknown = ParsedQuery::new("tula".into(), 1);
        select_cafes(&unknown, &repository());
    }

    #[test]
    fn test_find_cafes() {
        let repo = repository();

        assert_eq!(find_cafes(raw("moscow", Some("3")), &repo).unwrap(), "A,B,C");
        assert_eq!(find_cafes(raw("moscow", Some("0")), &repo).unwrap(), "");
        assert_eq!(find_cafes(raw("empty", Some("10")), &repo).unwrap(), "");
        assert_eq!(
            find_cafes(raw("moscow", Some("g")), &repo).unwrap_err().to_string(),
            "wrong count value"
        );
    }
}
