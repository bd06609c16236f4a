//! Attribute matching of a data set against a query pattern,
//! in the manner of a C-FIND identifier.
//!
//! A pattern is a data element whose tag names the attribute to match.
//! Its value decides how the attribute is compared:
//!
//! - an empty value matches anything present (universal matching);
//! - text is compared after trimming trailing padding,
//!   with `*` and `?` wildcards for representations which admit them;
//! - dates (`DA`) are matched against a date or date range;
//! - binary values match when any pattern value is among the element's values.
use crate::dataset::DataSet;
use crate::Element;
use dicomset_core::value::range::{self, parse_date_range, Date};
use dicomset_core::value::{PrimitiveValue, Value};
use dicomset_core::{Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::warn;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum QueryError {
    #[snafu(display("Pattern for {} must hold a primitive value", tag))]
    InvalidPattern { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Date pattern for {} cannot match a value with VR {}", tag, vr))]
    NotADate {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid date pattern for {}", tag))]
    ParsePattern {
        tag: Tag,
        #[snafu(backtrace)]
        source: range::Error,
    },
}

pub type Result<T, E = QueryError> = std::result::Result<T, E>;

/// Check whether a data set matches the given pattern element.
///
/// Returns whether it matched,
/// along with the data set's element of the same tag if there is one.
/// An attribute absent from the data set never matches.
///
/// ```
/// # use dicomset_object::{new_element, query, DataSet};
/// # use dicomset_dictionary_std::tags;
/// let data_set: DataSet = vec![new_element(tags::PATIENT_NAME, "Doe^John")?].into();
///
/// let (matched, element) = query(&data_set, &new_element(tags::PATIENT_NAME, "Doe^*")?)?;
/// assert!(matched);
/// assert_eq!(element.and_then(|e| e.string()), Some("Doe^John"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn query<'a>(data_set: &'a DataSet, pattern: &Element) -> Result<(bool, Option<&'a Element>)> {
    let tag = pattern.tag();
    let pattern_value = match pattern.value() {
        Value::Primitive(value) => value,
        _ => return InvalidPatternSnafu { tag }.fail(),
    };

    let element = match data_set.element(tag) {
        Ok(element) => element,
        Err(_) => return Ok((false, None)),
    };

    if is_universal(pattern_value) {
        return Ok((true, Some(element)));
    }

    let matched = if pattern.vr() == VR::DA {
        match_dates(tag, pattern_value, element)?
    } else {
        match element.value() {
            Value::Primitive(value) => match_values(element.vr(), pattern_value, value),
            _ => false,
        }
    };
    Ok((matched, Some(element)))
}

fn is_universal(pattern: &PrimitiveValue) -> bool {
    match pattern {
        PrimitiveValue::Empty => true,
        PrimitiveValue::Strs(strings) => strings.iter().all(|s| trim(s).is_empty()),
        other => other.is_empty(),
    }
}

fn trim(s: &str) -> &str {
    s.trim_end_matches([' ', '\0'])
}

fn match_dates(tag: Tag, pattern: &PrimitiveValue, element: &Element) -> Result<bool> {
    snafu::ensure!(
        element.vr() == VR::DA,
        NotADateSnafu {
            tag,
            vr: element.vr()
        }
    );
    let ranges = pattern
        .strings()
        .unwrap_or_default()
        .iter()
        .map(|s| parse_date_range(trim(s).trim_start()).context(ParsePatternSnafu { tag }))
        .collect::<Result<Vec<_>>>()?;

    for value in element.strings().unwrap_or_default() {
        let value = trim(value);
        if value.is_empty() {
            continue;
        }
        let date: Date = match value.parse() {
            Ok(date) => date,
            Err(e) => {
                warn!("Ignoring malformed date {:?} in {}: {}", value, tag, e);
                continue;
            }
        };
        if ranges.iter().any(|range| range.contains(date)) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether wildcard matching applies to text of this representation.
fn admits_wildcards(vr: VR) -> bool {
    matches!(
        vr,
        VR::AE | VR::CS | VR::LO | VR::LT | VR::PN | VR::SH | VR::ST | VR::UC | VR::UR | VR::UT
    )
}

fn match_values(vr: VR, pattern: &PrimitiveValue, value: &PrimitiveValue) -> bool {
    use PrimitiveValue as P;

    fn any_of<T: PartialEq>(patterns: &[T], values: &[T]) -> bool {
        patterns.iter().any(|p| values.contains(p))
    }

    match (pattern, value) {
        (P::Strs(patterns), P::Strs(values)) => patterns.iter().any(|p| {
            let p = trim(p);
            values.iter().any(|v| {
                let v = trim(v);
                if admits_wildcards(vr) {
                    wildcard_match(p, v)
                } else {
                    p == v
                }
            })
        }),
        (P::U8(p), P::U8(v)) => p == v,
        (P::Tags(p), P::Tags(v)) => any_of(p, v),
        (P::I16(p), P::I16(v)) => any_of(p, v),
        (P::U16(p), P::U16(v)) => any_of(p, v),
        (P::I32(p), P::I32(v)) => any_of(p, v),
        (P::U32(p), P::U32(v)) => any_of(p, v),
        (P::I64(p), P::I64(v)) => any_of(p, v),
        (P::U64(p), P::U64(v)) => any_of(p, v),
        (P::F32(p), P::F32(v)) => any_of(p, v),
        (P::F64(p), P::F64(v)) => any_of(p, v),
        _ => false,
    }
}

/// Match text against a pattern in which
/// `*` stands for any run of characters and `?` for a single character.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // last star seen in the pattern, and the text position it resumes from
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, resume)) => {
                    p = star + 1;
                    t = resume + 1;
                    backtrack = Some((star, resume + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|c| *c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_element, new_element_with, new_sequence};
    use dicomset_core::value::PixelDataInfo;
    use dicomset_dictionary_std::tags;

    fn data_set() -> DataSet {
        vec![
            new_element(tags::PATIENT_NAME, "Doe^John ").unwrap(),
            new_element(tags::STUDY_INSTANCE_UID, "1.2.840.113857.1907.192833.1115.220048\0")
                .unwrap(),
            new_element(tags::STUDY_DATE, "20170928").unwrap(),
            new_element(tags::ROWS, PrimitiveValue::from(512_u16)).unwrap(),
            new_element_with(
                tags::MODALITY,
                VR::CS,
                PrimitiveValue::Strs(vec!["CT".to_string(), "MR".to_string()].into()),
            )
            .unwrap(),
        ]
        .into()
    }

    fn matches(pattern: Element) -> bool {
        query(&data_set(), &pattern).unwrap().0
    }

    #[test]
    fn absent_attribute_does_not_match() {
        let ds = data_set();
        let (matched, element) = query(&ds, &new_element(tags::PATIENT_ID, "").unwrap()).unwrap();
        assert!(!matched);
        assert!(element.is_none());
    }

    #[test]
    fn empty_pattern_is_universal() {
        let ds = data_set();
        let (matched, element) = query(&ds, &Element::empty(tags::PATIENT_NAME, VR::PN)).unwrap();
        assert!(matched);
        assert_eq!(element.map(|e| e.tag()), Some(tags::PATIENT_NAME));
        assert!(matches(new_element(tags::STUDY_DATE, "").unwrap()));
    }

    #[test]
    fn text_is_trimmed_before_comparing() {
        let uid = "1.2.840.113857.1907.192833.1115.220048";
        let ds = data_set();
        let (matched, element) =
            query(&ds, &new_element(tags::STUDY_INSTANCE_UID, uid).unwrap()).unwrap();
        assert!(matched);
        assert_eq!(element.and_then(|e| e.string()), Some(uid));

        assert!(matches(new_element(tags::PATIENT_NAME, "Doe^John").unwrap()));
        assert!(!matches(new_element(tags::PATIENT_NAME, "Doe").unwrap()));
    }

    #[test]
    fn wildcards() {
        assert!(matches(new_element(tags::PATIENT_NAME, "Doe^*").unwrap()));
        assert!(matches(new_element(tags::PATIENT_NAME, "D?e^J*n").unwrap()));
        assert!(matches(new_element(tags::PATIENT_NAME, "*").unwrap()));
        assert!(!matches(new_element(tags::PATIENT_NAME, "Roe^*").unwrap()));
        // not for unique identifiers
        assert!(!matches(new_element(tags::STUDY_INSTANCE_UID, "1.2.*").unwrap()));
    }

    #[test]
    fn any_value_of_multi_valued_text() {
        assert!(matches(new_element(tags::MODALITY, "MR").unwrap()));
        assert!(!matches(new_element(tags::MODALITY, "US").unwrap()));
    }

    #[test]
    fn numbers() {
        assert!(matches(new_element(tags::ROWS, PrimitiveValue::from(512_u16)).unwrap()));
        assert!(matches(
            new_element(tags::ROWS, PrimitiveValue::from(vec![256_u16, 512])).unwrap()
        ));
        assert!(!matches(new_element(tags::ROWS, PrimitiveValue::from(256_u16)).unwrap()));
    }

    #[test]
    fn date_ranges() {
        assert!(matches(new_element(tags::STUDY_DATE, "20170928").unwrap()));
        assert!(matches(new_element(tags::STUDY_DATE, "20170927-20170929").unwrap()));
        assert!(matches(new_element(tags::STUDY_DATE, "-20170928").unwrap()));
        assert!(matches(new_element(tags::STUDY_DATE, "2017.09.28-").unwrap()));
        assert!(!matches(new_element(tags::STUDY_DATE, "20170929-").unwrap()));
        assert!(!matches(new_element(tags::STUDY_DATE, "20170927").unwrap()));
    }

    #[test]
    fn invalid_date_patterns() {
        let ds = data_set();
        let err = query(&ds, &new_element(tags::STUDY_DATE, "2017X01.02").unwrap()).unwrap_err();
        assert!(matches!(err, QueryError::ParsePattern { .. }));

        let pattern = new_element_with(tags::PATIENT_NAME, VR::DA, "20170101").unwrap();
        let err = query(&ds, &pattern).unwrap_err();
        assert!(matches!(err, QueryError::NotADate { vr: VR::PN, .. }));

    }

    #[test]
    fn malformed_stored_dates_do_not_match() {
        let bad: DataSet = vec![new_element(tags::STUDY_DATE, "2017").unwrap()].into();
        let (matched, element) =
            query(&bad, &new_element(tags::STUDY_DATE, "20170101").unwrap()).unwrap();
        assert!(!matched);
        assert_eq!(element.and_then(|e| e.string()), Some("2017"));

        let mixed: DataSet = vec![new_element(
            tags::STUDY_DATE,
            PrimitiveValue::Strs(vec!["2017".to_string(), "20170101".to_string()].into()),
        )
        .unwrap()]
        .into();
        assert!(query(&mixed, &new_element(tags::STUDY_DATE, "20170101").unwrap())
            .unwrap()
            .0);
    }

    #[test]
    fn structural_patterns_are_invalid() {
        let ds = data_set();
        let pattern = new_sequence(tags::REFERENCED_STUDY_SEQUENCE, vec![]);
        assert!(matches!(
            query(&ds, &pattern),
            Err(QueryError::InvalidPattern { .. })
        ));

        let pattern = new_element_with(
            Tag::PIXEL_DATA,
            VR::OB,
            PixelDataInfo::native(vec![]),
        )
        .unwrap();
        assert!(matches!(
            query(&ds, &pattern),
            Err(QueryError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn wildcard_matching() {
        assert!(wildcard_match("", ""));
        assert!(wildcard_match("**", ""));
        assert!(wildcard_match("a*b*c", "aXXbYYc"));
        assert!(wildcard_match("a*c", "abcbc"));
        assert!(!wildcard_match("a*c", "abcb"));
        assert!(!wildcard_match("?", ""));
        assert!(wildcard_match("?ó?", "dóh"));
    }
}
