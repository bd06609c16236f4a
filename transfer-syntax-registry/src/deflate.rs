//! Implementation of Deflated Explicit VR Little Endian.
use byteordered::Endianness;
use dicomset_encoding::transfer_syntax::{Codec, DataRWAdapter, TransferSyntax};
use flate2::Compression;
use std::io::{Read, Write};

/// Immaterial type representing an adapter for deflated data.
#[derive(Debug)]
pub struct FlateAdapter;

/// **Fully implemented**: Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::Dataset(&FlateAdapter),
);

impl DataRWAdapter for FlateAdapter {
    fn adapt_reader<'r>(&self, reader: Box<dyn Read + 'r>) -> Box<dyn Read + 'r> {
        Box::new(flate2::read::DeflateDecoder::new(reader))
    }

    fn adapt_writer<'w>(&self, writer: Box<dyn Write + 'w>) -> Box<dyn Write + 'w> {
        Box::new(flate2::write::DeflateEncoder::new(
            writer,
            Compression::fast(),
        ))
    }
}
