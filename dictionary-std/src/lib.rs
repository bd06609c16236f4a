//! This crate implements the standard DICOM attribute dictionary and constants
//! used by the dicomset codec.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: information about the DICOM attributes
//!   most commonly found in imaging instances,
//!   according to [DICOM PS3.6].
//!   It is used by default when decoding implicit VR data
//!   and when looking up data set elements by name.
//!
//! The dictionary is provided as a singleton
//! behind the unit type [`StandardDataDictionary`].
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for the normative DICOM unique identifiers used by the codec
pub mod data_element;

pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
