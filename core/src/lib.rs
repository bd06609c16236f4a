#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dicomset, containing the concepts
//! and data structures shared by the decoder, the encoder,
//! and the data set API.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for the DICOM element header,
//!   including the definitions of DICOM tags, value representations
//!   and value lengths.
//! - [`dictionary`] describes the common behavior of DICOM data dictionaries,
//!   which translate attribute names and tags into a dictionary entry
//!   holding the attribute's typical value representation.
//! - [`value`] holds the definitions of data element values,
//!   which may be primitive, nested sequences of items, or pixel data.
//!   It also contains the DICOM date and date range parser.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{DataElement, DataElementHeader, HasLength, Header, Length, Tag, VR};
pub use value::range::{parse_date, Date, DateRange};
pub use value::{PixelDataInfo, PrimitiveValue, Value as DicomValue, ValueKind};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
