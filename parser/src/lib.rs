//! This crate provides a middle-level abstraction for reading and writing
//! DICOM data element values,
//! with an awareness of the current transfer syntax and character set.
//!
//! - [`StatefulDecoder`] reads element headers and primitive values
//!   from a byte source, keeping track of the reading position.
//! - [`StatefulEncoder`] writes element headers and primitive values,
//!   applying the padding rules of each value representation.
//!
//! Building data sets out of these pieces
//! is the job of the `dicomset-object` crate.
//! For the time being, all APIs are based on synchronous I/O.

pub mod stateful;

pub use stateful::decode::StatefulDecoder;
pub use stateful::encode::StatefulEncoder;
