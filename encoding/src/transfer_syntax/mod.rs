//! Module containing the DICOM Transfer Syntax data structure and related methods.
//! The [`TransferSyntax`] holds everything needed
//! to decode and encode DICOM data in a certain transfer syntax:
//! the byte order, the explicitness of value representations,
//! and whether the data set or its pixel data require a codec.
//!
//! This crate does not host specific transfer syntaxes. Instead, they are
//! created in other crates and gathered in a registry implementing
//! [`TransferSyntaxIndex`]. For more information, please see the
//! `dicomset-transfer-syntax-registry` crate.

use crate::decode::basic::BasicDecoder;
use crate::decode::DataElementDecoder;
use crate::encode::basic::BasicEncoder;
use crate::encode::DataElementEncoder;
use dicomset_core::dictionary::DataDictionary;
use std::fmt;
use std::io::{Read, Write};

pub use byteordered::Endianness;

/// A DICOM transfer syntax specifier.
#[derive(Debug)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements and implemented capabilities.
    codec: Codec,
}

/// Trait for containers of transfer syntax specifiers.
///
/// Types implementing this trait are held responsible for populating
/// themselves with a set of transfer syntaxes, which can be fully supported,
/// partially supported, or not supported. Usually, only one implementation
/// of this trait is used for the entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of trailing padding (`\0` or space) in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

/// A description and possible implementation regarding
/// the encoding and decoding requirements of a transfer syntax.
/// This is also used as a means to describe whether pixel data is encapsulated.
#[derive(Debug, Clone, Copy)]
pub enum Codec {
    /// No codec is given, nor is it required.
    None,
    /// Custom encoding and decoding of the entire data set is required, but
    /// not supported.
    Unsupported,
    /// The pixel data is encapsulated in fragments.
    /// The data set can still be parsed
    /// and its pixel data fetched in its encapsulated form,
    /// but the pixel data are never decompressed.
    EncapsulatedPixelData,
    /// A full, custom data set codec is required and provided.
    Dataset(&'static dyn DataRWAdapter),
}

/// An adapter of byte read and write streams,
/// applied to the whole data set after the file meta group.
pub trait DataRWAdapter: fmt::Debug + Send + Sync {
    /// Adapt a byte reader.
    fn adapt_reader<'r>(&self, reader: Box<dyn Read + 'r>) -> Box<dyn Read + 'r>;

    /// Adapt a byte writer.
    ///
    /// The adapted writer may only emit its last bytes
    /// once dropped.
    fn adapt_writer<'w>(&self, writer: Box<dyn Write + 'w>) -> Box<dyn Write + 'w>;
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    ///
    /// Note that only transfer syntax implementors are expected to construct
    /// TS descriptors from scratch. For a practical usage of transfer syntaxes,
    /// one should look up an existing transfer syntax registry by UID.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether value representations are written out in this transfer syntax.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain this transfer syntax' codec specification.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Check whether this transfer syntax specifier provides a complete
    /// implementation of data set reading and writing.
    pub fn fully_supported(&self) -> bool {
        !matches!(self.codec, Codec::Unsupported)
    }

    /// Check whether no codecs are required for this transfer syntax.
    pub fn is_codec_free(&self) -> bool {
        matches!(self.codec, Codec::None)
    }

    /// Check whether reading and writing of data sets is unsupported.
    /// If this is `true`, encoding and decoding will not be available.
    pub fn unsupported(&self) -> bool {
        matches!(self.codec, Codec::Unsupported)
    }

    /// Check whether the pixel data in this transfer syntax
    /// is encapsulated in fragments.
    pub fn is_encapsulated_pixel_data(&self) -> bool {
        matches!(self.codec, Codec::EncapsulatedPixelData)
    }

    /// Retrieve the data set adapter of this transfer syntax, if it has one.
    pub fn data_adapter(&self) -> Option<&'static dyn DataRWAdapter> {
        match self.codec {
            Codec::Dataset(adapter) => Some(adapter),
            _ => None,
        }
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax.
    /// Can yield none if decoding is not supported.
    ///
    /// The dictionary is used to resolve value representations
    /// in implicit VR transfer syntaxes.
    ///
    /// The resulting decoder does not consider data set compression rules.
    /// This means that the consumer of this method
    /// needs to adapt the reader before using the decoder.
    pub fn decoder<D>(&self, dict: D) -> Option<DataElementDecoder<D>>
    where
        D: DataDictionary,
    {
        if self.unsupported() {
            return None;
        }
        DataElementDecoder::new(self.byte_order, self.explicit_vr, dict)
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax.
    /// Can yield none if encoding is not supported. The resulting encoder does not
    /// consider data set compression rules.
    pub fn encoder(&self) -> Option<DataElementEncoder> {
        if self.unsupported() {
            return None;
        }
        DataElementEncoder::new(self.byte_order, self.explicit_vr)
    }

    /// Obtain a dynamic basic decoder, based on this transfer syntax' expected endianness.
    pub fn basic_decoder(&self) -> BasicDecoder {
        BasicDecoder::from(self.endianness())
    }

    /// Obtain a dynamic basic encoder, based on this transfer syntax' expected endianness.
    pub fn basic_encoder(&self) -> BasicEncoder {
        BasicEncoder::from(self.endianness())
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Decode;
    use crate::encode::Encode;
    use dicomset_core::dictionary::StubDataDictionary;
    use dicomset_core::header::{DataElementHeader, HasLength, Header, Length, Tag, VR};

    const IMPLICIT_LE: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2",
        "Implicit VR Little Endian",
        Endianness::Little,
        false,
        Codec::None,
    );

    const EXPLICIT_BE: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.2",
        "Explicit VR Big Endian",
        Endianness::Big,
        true,
        Codec::None,
    );

    const STUB: TransferSyntax = TransferSyntax::new(
        "1.2.3.4",
        "Something Unknown",
        Endianness::Little,
        true,
        Codec::Unsupported,
    );

    #[test]
    fn codecs_follow_the_transfer_syntax() {
        let header = DataElementHeader::new(Tag(0x0010, 0x0020), VR::LO, Length(4));
        for ts in [&IMPLICIT_LE, &EXPLICIT_BE] {
            let enc = ts.encoder().expect("should have an encoder");
            assert_eq!(enc.is_explicit_vr(), ts.is_explicit_vr());
            let mut out = Vec::new();
            enc.encode_element_header(&mut out, header).unwrap();

            let dec = ts
                .decoder(StubDataDictionary)
                .expect("should have a decoder");
            let (decoded, _) = dec.decode_header(&mut out.as_slice()).unwrap();
            assert_eq!(decoded.tag(), header.tag());
            assert_eq!(decoded.length(), header.length());
            let expected_vr = if ts.is_explicit_vr() { VR::LO } else { VR::UN };
            assert_eq!(decoded.vr(), expected_vr);
        }
    }

    #[test]
    fn unsupported_has_no_codecs() {
        assert!(STUB.unsupported());
        assert!(!STUB.fully_supported());
        assert!(STUB.encoder().is_none());
        assert!(STUB.decoder(StubDataDictionary).is_none());
        assert!(IMPLICIT_LE.is_codec_free());
        assert_eq!(
            IMPLICIT_LE.to_string(),
            "Implicit VR Little Endian (1.2.840.10008.1.2)"
        );
    }
}
