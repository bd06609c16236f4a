#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains the high-level API for reading, writing
//! and querying DICOM data sets.
//! At this level, a data set is an ordered list of elements,
//! in which some of them can hold nested data sets themselves.
//!
//! Loading a DICOM file can be done with [`read_data_set_from_file`],
//! or with [`read_data_set`] for any other byte source.
//! What is kept from the stream is configured with [`ReadOptions`].
//!
//! # Examples
//!
//! Read a data set and fetch some attributes:
//!
//! ```no_run
//! use dicomset_dictionary_std::tags;
//! use dicomset_object::{read_data_set_from_file, ReadOptions};
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let data_set = read_data_set_from_file("0001.dcm", ReadOptions::new())?;
//!
//! let patient_name = data_set.element(tags::PATIENT_NAME)?.string();
//! let modality = data_set.element_by_name("Modality")?.string();
//! # Ok(())
//! # }
//! ```
//!
//! The pixel data and the elements after a given tag
//! can be left out of the resulting data set:
//!
//! ```no_run
//! use dicomset_object::{read_data_set_from_file, ReadOptions};
//!
//! let data_set = read_data_set_from_file(
//!     "0002.dcm",
//!     ReadOptions::new()
//!         .drop_pixel_data(true)
//!         .stop_at_tag(dicomset_dictionary_std::tags::PIXEL_DATA),
//! )?;
//! # Result::<(), dicomset_object::ReadError>::Ok(())
//! ```
//!
//! New data sets can be built from scratch
//! and written to a DICOM file.
//! The transfer syntax of the main data set
//! is the one named by its _Transfer Syntax UID_ element,
//! and the file meta group is completed as necessary.
//!
//! ```
//! # use dicomset_object::{new_element, write_data_set, DataSet};
//! # use dicomset_dictionary_std::{tags, uids};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut data_set = DataSet::new();
//! data_set.push(new_element(tags::TRANSFER_SYNTAX_UID, uids::EXPLICIT_VR_LITTLE_ENDIAN)?);
//! data_set.push(new_element(tags::SOP_CLASS_UID, uids::CT_IMAGE_STORAGE)?);
//! data_set.push(new_element(tags::SOP_INSTANCE_UID, "1.2.3.4")?);
//! data_set.push(new_element(tags::PATIENT_NAME, "Doe^John")?);
//!
//! let mut serialized = Vec::new();
//! write_data_set(&mut serialized, &data_set)?;
//! assert_eq!(&serialized[128..132], b"DICM");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
pub mod dataset;
pub mod meta;
pub mod query;
pub mod read;
pub mod write;

pub use crate::dataset::DataSet;
pub use crate::query::{query, QueryError};
pub use crate::read::{read_data_set, read_data_set_from_file, read_data_set_with, ReadOptions};
pub use crate::write::{
    write_data_set, write_data_set_to_file, write_data_set_with, SequenceLength, WriteOptions,
};
pub use dicomset_core::value::range::parse_date;
pub use dicomset_core::{Tag, VR};
pub use dicomset_dictionary_std::StandardDataDictionary;

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use dicomset_core::header::{DataElement, Length};
use dicomset_core::value::{Value, ValueKind};
use dicomset_core::DataDictionary;
use snafu::{Backtrace, OptionExt, Snafu};

/// A data element of a DICOM data set,
/// in which sequence items are data sets themselves.
pub type Element = DataElement<DataSet>;

/// The implementation class UID written to the file meta group
/// when the data set does not provide one.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.137038125948464847900039011591283709926";

/// The implementation version name written to the file meta group
/// when the data set does not provide one.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DICOMSET 0.3";

/// An error which may occur when reading a DICOM data set
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read file meta group"))]
    ReadMetaGroup {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Not a DICOM stream: missing `DICM` magic code"))]
    NotDicom { backtrace: Backtrace },
    #[snafu(display("Could not read data element header"))]
    ReadHeader {
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::decode::Error,
    },
    #[snafu(display("Could not read item header in sequence {}", tag))]
    ReadItemHeader {
        tag: Tag,
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::decode::Error,
    },
    #[snafu(display("Could not read value of element {}", tag))]
    ReadValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::decode::Error,
    },
    #[snafu(display("Could not skip value of element {}", tag))]
    SkipValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::decode::Error,
    },
    #[snafu(display(
        "Undefined length is not admitted for element {} with VR {} at position {}",
        tag,
        vr,
        position
    ))]
    UndefinedLength {
        tag: Tag,
        vr: VR,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected {} at position {}", tag, position))]
    UnexpectedItem {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Missing Transfer Syntax UID in file meta group"))]
    MissingTransferSyntax { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not create data set parser"))]
    CreateParser {
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::decode::Error,
    },
}

impl ReadError {
    /// The byte position in the stream where reading failed,
    /// if known.
    pub fn position(&self) -> Option<u64> {
        match self {
            ReadError::ReadHeader { source }
            | ReadError::ReadItemHeader { source, .. }
            | ReadError::ReadValue { source, .. }
            | ReadError::SkipValue { source, .. } => source.position(),
            ReadError::UndefinedLength { position, .. }
            | ReadError::UnexpectedItem { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The tag of the element being read when the error occurred,
    /// if known.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            ReadError::ReadItemHeader { tag, .. }
            | ReadError::ReadValue { tag, .. }
            | ReadError::SkipValue { tag, .. }
            | ReadError::UndefinedLength { tag, .. }
            | ReadError::UnexpectedItem { tag, .. } => Some(*tag),
            _ => None,
        }
    }
}

/// An error which may occur when writing a DICOM data set
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write file meta group"))]
    WriteMetaGroup {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write data set"))]
    WriteDataSet {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not create data set printer"))]
    CreatePrinter {
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::encode::Error,
    },
    #[snafu(display("Could not print element {}", tag))]
    PrintElement {
        tag: Tag,
        #[snafu(backtrace)]
        source: dicomset_parser::stateful::encode::Error,
    },
    #[snafu(display("Value of element {} with VR {} is not {}", tag, vr, expected))]
    InvalidValue {
        tag: Tag,
        vr: VR,
        expected: ValueKind,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "{} pixel data cannot be written in transfer syntax `{}`",
        if *encapsulated { "Encapsulated" } else { "Native" },
        uid
    ))]
    PixelDataMismatch {
        encapsulated: bool,
        uid: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Encoded length {} of {} does not fit a 32-bit length", len, tag))]
    ValueTooLong {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Missing Transfer Syntax UID in data set"))]
    WriteMissingTransferSyntax { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
}

/// An error which may occur when looking up a data set's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },

    /// Could not resolve attribute name from the data dictionary
    #[snafu(display("Unknown data attribute named `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },

    #[snafu(display("No element at index {} of a data set with {} elements", index, len))]
    NoSuchIndex {
        index: usize,
        len: usize,
        backtrace: Backtrace,
    },
}

/// An error which may occur when constructing a data element.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ElementError {
    #[snafu(display("Tag {} is not in the data dictionary", tag))]
    UnknownTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Value of element {} with VR {} is not {}", tag, vr, expected))]
    ElementInvalidValue {
        tag: Tag,
        vr: VR,
        expected: ValueKind,
        backtrace: Backtrace,
    },
}

/// Create a data element,
/// taking its value representation from the standard data dictionary.
///
/// Fails if the tag is unknown to the dictionary,
/// or if the value does not fit the value representation.
///
/// ```
/// # use dicomset_object::new_element;
/// # use dicomset_core::{PrimitiveValue, VR};
/// let rows = new_element((0x0028, 0x0010).into(), PrimitiveValue::from(512_u16))?;
/// assert_eq!(rows.vr(), VR::US);
/// # Result::<(), dicomset_object::ElementError>::Ok(())
/// ```
pub fn new_element<T>(tag: Tag, value: T) -> Result<Element, ElementError>
where
    T: Into<Value<DataSet>>,
{
    let vr = StandardDataDictionary
        .vr_of(tag)
        .context(UnknownTagSnafu { tag })?;
    new_element_with(tag, vr, value)
}

/// Create a data element with the given value representation.
///
/// Fails if the value does not fit the value representation.
pub fn new_element_with<T>(tag: Tag, vr: VR, value: T) -> Result<Element, ElementError>
where
    T: Into<Value<DataSet>>,
{
    let element = Element::new(tag, vr, value);
    match element.validate() {
        Ok(()) => Ok(element),
        Err(expected) => ElementInvalidValueSnafu { tag, vr, expected }.fail(),
    }
}

/// Create a sequence element of undefined length
/// from the given items.
pub fn new_sequence<I>(tag: Tag, items: I) -> Element
where
    I: IntoIterator<Item = DataSet>,
{
    Element::new(
        tag,
        VR::SQ,
        Value::Sequence {
            items: items.into_iter().collect(),
            size: Length::UNDEFINED,
        },
    )
}

/// Swap the two bytes of each 16-bit word,
/// converting OW data between byte orders.
/// A trailing odd byte is left as is.
pub(crate) fn swap_words(data: &mut [u8]) {
    let n = data.len() / 2 * 2;
    let mut words = vec![0_u16; n / 2];
    BigEndian::read_u16_into(&data[..n], &mut words);
    LittleEndian::write_u16_into(&words, &mut data[..n]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomset_core::value::{PixelDataInfo, PrimitiveValue};
    use dicomset_dictionary_std::tags;

    #[test]
    fn new_element_takes_vr_from_dictionary() {
        let e = new_element(tags::PATIENT_NAME, "Doe^John").unwrap();
        assert_eq!(e.vr(), VR::PN);
        assert_eq!(e.string(), Some("Doe^John"));

        let e = new_element(tags::ROWS, PrimitiveValue::from(256_u16)).unwrap();
        assert_eq!(e.vr(), VR::US);
    }

    #[test]
    fn new_element_rejects_mismatched_values() {
        let err = new_element(tags::ROWS, "256").unwrap_err();
        assert!(matches!(
            err,
            ElementError::ElementInvalidValue { vr: VR::US, .. }
        ));

        let err = new_element_with(
            tags::PATIENT_NAME,
            VR::PN,
            PixelDataInfo::native(vec![0; 4]),
        )
        .unwrap_err();
        assert!(matches!(err, ElementError::ElementInvalidValue { .. }));
    }

    #[test]
    fn new_element_unknown_tag() {
        let err = new_element(Tag(0x0009, 0x1001), "x").unwrap_err();
        assert!(matches!(err, ElementError::UnknownTag { .. }));
    }

    #[test]
    fn swap_words_changes_byte_order() {
        let mut data = vec![1, 2, 3, 4, 5];
        swap_words(&mut data);
        assert_eq!(data, vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn sequence_elements_are_valid() {
        let item = DataSet::from(vec![new_element(tags::PATIENT_ID, "1").unwrap()]);
        let seq = new_sequence(Tag(0x0008, 0x1115), vec![item]);
        assert!(seq.validate().is_ok());
        assert_eq!(seq.items().map(|i| i.len()), Some(1));
    }
}
