//! DICOM encoding and decoding primitives.
//!
//! This crate provides interfaces and data structures for reading and writing
//! data element headers in accordance to the DICOM standard,
//! for each combination of value representation explicitness and byte order.
//! This crate also hosts the concept of [transfer syntax specifier],
//! which is used to produce DICOM encoders and decoders at run-time.
//!
//! All APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod decode;
pub mod encode;
pub mod text;
pub mod transfer_syntax;

pub use byteordered;
pub use decode::Decode;
pub use encode::Encode;
pub use transfer_syntax::Codec;
pub use transfer_syntax::TransferSyntax;
pub use transfer_syntax::TransferSyntaxIndex;
