//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary translates attribute names and tags
//! into a dictionary entry holding the attribute's typical
//! value representation.
//! Decoders of implicit VR data rely on one to recover
//! the value representation of each element,
//! and the data set API uses one to look up elements by name.
//!
//! The standard dictionary is provided by the `dicomset-dictionary-std` crate.

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// Specification of a range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// `(group,elem)` for a specific attribute, but occasionally
/// a range of groups or elements is indicated instead
/// (e.g. _Overlay Data_ is associated with the tags
/// `(60xx,3000)`, where `xx` may be any two hexadecimal digits).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from `(GGGG,0010)` to `(GGGG,00FF)`,
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag
    /// (equivalent to _Command Group Length_)
    /// if it is a generic group length tag.
    /// Returns _Private Creator_ tag `(0009,0010)`
    /// if it is a generic private creator tag.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag is within this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t.0 == tag.0 & 0xFF00 && t.1 == tag.1,
            TagRange::Element100(t) => t.0 == tag.0 && t.1 == tag.1 & 0xFF00,
            TagRange::GroupLength => tag.1 == 0x0000,
            TagRange::PrivateCreator => tag.0 & 1 == 1 && (0x0010..=0x00FF).contains(&tag.1),
        }
    }
}

/// Type trait for a dictionary of DICOM attributes. Attribute dictionaries provide the
/// means to convert a tag to an alias and vice versa, as well as a form of retrieving
/// additional information about the attribute.
///
/// The methods herein have no generic parameters, so as to enable being
/// used as a trait object.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are usually case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch the typical value representation of the attribute with this tag.
    fn vr_of(&self, tag: Tag) -> Option<VR> {
        self.by_tag(tag).map(|e| e.vr())
    }

    /// Fetch the alias of the attribute with this tag.
    fn alias_of(&self, tag: Tag) -> Option<&str> {
        self.by_tag(tag).map(|e| e.alias())
    }
}

impl<D: ?Sized> DataDictionary for &D
where
    D: DataDictionary,
{
    type Entry = D::Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// The attribute tag, with open components zeroed out.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A data type for a dictionary entry with full ownership.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DataDictionaryEntryBuf {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: String,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl DataDictionaryEntry for DataDictionaryEntryBuf {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias.as_str()
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A data dictionary which holds no entries.
///
/// Implicit VR decoding with this dictionary
/// reads every element as UN.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, _: &str) -> Option<&Self::Entry> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&Self::Entry> {
        None
    }
}
