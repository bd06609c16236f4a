//! The in-memory DICOM data set.
//!
//! A [`DataSet`] keeps its elements in stream order.
//! It is never sorted nor de-duplicated behind the caller's back:
//! when the same tag appears more than once,
//! look-ups resolve to the first occurrence.
use crate::{
    AccessError, Element, NoSuchAttributeNameSnafu, NoSuchDataElementTagSnafu, NoSuchIndexSnafu,
};
use dicomset_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicomset_core::Tag;
use dicomset_dictionary_std::{tags, StandardDataDictionary};
use snafu::OptionExt;
use std::iter::FromIterator;

/// An ordered collection of DICOM data elements.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    elements: Vec<Element>,
}

impl DataSet {
    /// Create a new empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Retrieve the first element with the given tag.
    pub fn element(&self, tag: Tag) -> Result<&Element, AccessError> {
        self.elements
            .iter()
            .find(|e| e.tag() == tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a mutable reference to the first element with the given tag.
    pub fn element_mut(&mut self, tag: Tag) -> Result<&mut Element, AccessError> {
        self.elements
            .iter_mut()
            .find(|e| e.tag() == tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve an element by its attribute keyword,
    /// as found in the standard data dictionary
    /// (e.g. `"PatientName"`).
    pub fn element_by_name(&self, name: &str) -> Result<&Element, AccessError> {
        self.element_by_name_in(name, &StandardDataDictionary)
    }

    /// Retrieve an element by its attribute keyword,
    /// resolved through the given data dictionary.
    pub fn element_by_name_in<D>(&self, name: &str, dict: &D) -> Result<&Element, AccessError>
    where
        D: DataDictionary + ?Sized,
    {
        let tag = dict
            .by_name(name)
            .map(|e| e.tag())
            .context(NoSuchAttributeNameSnafu { name })?;
        self.element(tag)
    }

    /// Retrieve the element at the given position.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Iterate over the elements in stream order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// The number of elements, counting duplicates.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Insert an element.
    ///
    /// If an element with the same tag exists,
    /// the first one is replaced in place and returned.
    /// Otherwise the element is appended at the end.
    pub fn put(&mut self, element: Element) -> Option<Element> {
        match self.elements.iter().position(|e| e.tag() == element.tag()) {
            Some(i) => Some(std::mem::replace(&mut self.elements[i], element)),
            None => {
                self.elements.push(element);
                None
            }
        }
    }

    /// Replace the element at the given position,
    /// returning the previous one.
    pub fn replace_at(&mut self, index: usize, element: Element) -> Result<Element, AccessError> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .context(NoSuchIndexSnafu { index, len })?;
        Ok(std::mem::replace(slot, element))
    }

    /// Remove the first element with the given tag.
    pub fn remove_element(&mut self, tag: Tag) -> Result<Element, AccessError> {
        let i = self
            .elements
            .iter()
            .position(|e| e.tag() == tag)
            .context(NoSuchDataElementTagSnafu { tag })?;
        Ok(self.elements.remove(i))
    }

    /// Append an element at the end,
    /// even if another one with the same tag exists.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Obtain the _Transfer Syntax UID_ of this data set,
    /// without trailing padding.
    pub fn transfer_syntax_uid(&self) -> Option<&str> {
        self.element(tags::TRANSFER_SYNTAX_UID)
            .ok()
            .and_then(|e| e.string())
    }

    /// Iterate over the elements of the file meta group.
    pub fn meta_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.tag().is_meta())
    }

    /// Move the elements out of the data set.
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl From<Vec<Element>> for DataSet {
    fn from(elements: Vec<Element>) -> Self {
        DataSet { elements }
    }
}

impl FromIterator<Element> for DataSet {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        DataSet {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Element> for DataSet {
    fn extend<T: IntoIterator<Item = Element>>(&mut self, iter: T) {
        self.elements.extend(iter)
    }
}

impl IntoIterator for DataSet {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_element;
    use dicomset_core::dictionary::StubDataDictionary;
    use dicomset_core::{PrimitiveValue, VR};

    fn patient(id: &str) -> Element {
        new_element(tags::PATIENT_ID, id).unwrap()
    }

    #[test]
    fn lookup_by_tag_and_name() {
        let ds: DataSet = vec![
            new_element(tags::PATIENT_NAME, "Doe^John").unwrap(),
            patient("7DkT2Tp"),
        ]
        .into();

        assert_eq!(ds.element(tags::PATIENT_ID).unwrap().string(), Some("7DkT2Tp"));
        assert_eq!(
            ds.element_by_name("PatientName").unwrap().string(),
            Some("Doe^John")
        );
        assert!(matches!(
            ds.element(tags::MODALITY),
            Err(AccessError::NoSuchDataElementTag { .. })
        ));
        assert!(matches!(
            ds.element_by_name("NotAnAttribute"),
            Err(AccessError::NoSuchAttributeName { .. })
        ));
        assert!(matches!(
            ds.element_by_name_in("PatientName", &StubDataDictionary),
            Err(AccessError::NoSuchAttributeName { .. })
        ));
    }

    #[test]
    fn duplicates_resolve_to_first() {
        let mut ds = DataSet::new();
        ds.push(patient("first"));
        ds.push(patient("second"));
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.element(tags::PATIENT_ID).unwrap().string(), Some("first"));

        let removed = ds.remove_element(tags::PATIENT_ID).unwrap();
        assert_eq!(removed.string(), Some("first"));
        assert_eq!(ds.element(tags::PATIENT_ID).unwrap().string(), Some("second"));
    }

    #[test]
    fn put_replaces_in_place() {
        let mut ds: DataSet = vec![patient("1"), new_element(tags::MODALITY, "CT").unwrap()].into();

        let old = ds.put(patient("2")).unwrap();
        assert_eq!(old.string(), Some("1"));
        assert_eq!(ds.get(0).map(|e| e.tag()), Some(tags::PATIENT_ID));
        assert_eq!(ds.get(0).and_then(|e| e.string()), Some("2"));

        let rows = new_element(tags::ROWS, PrimitiveValue::from(4_u16)).unwrap();
        assert!(ds.put(rows).is_none());
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.get(2).map(|e| e.vr()), Some(VR::US));
    }

    #[test]
    fn replace_at_index() {
        let mut ds: DataSet = vec![patient("1")].into();
        let old = ds.replace_at(0, patient("2")).unwrap();
        assert_eq!(old.string(), Some("1"));
        assert!(matches!(
            ds.replace_at(3, patient("3")),
            Err(AccessError::NoSuchIndex { index: 3, len: 1, .. })
        ));
    }

    #[test]
    fn transfer_syntax_uid_is_trimmed() {
        let ds: DataSet = vec![Element::new(
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            "1.2.840.10008.1.2.1\0",
        )]
        .into();
        assert_eq!(ds.transfer_syntax_uid(), Some("1.2.840.10008.1.2.1"));
        assert_eq!(ds.meta_elements().count(), 1);
    }

    #[test]
    fn data_set_with_sequence_equals_its_clone() {
        let item: DataSet = vec![patient("1")].into();
        let ds: DataSet = vec![crate::new_sequence(
            tags::REFERENCED_SERIES_SEQUENCE,
            vec![item, DataSet::new()],
        )]
        .into();
        assert_eq!(ds, ds.clone());

        let mut other = ds.clone();
        other.push(patient("2"));
        assert_ne!(ds, other);
    }
}
