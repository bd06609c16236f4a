//! This module contains all DICOM data element decoding logic.

use self::explicit_be::ExplicitVRBigEndianDecoder;
use self::explicit_le::ExplicitVRLittleEndianDecoder;
use self::implicit_le::ImplicitVRLittleEndianDecoder;
use byteordered::Endianness;
use dicomset_core::dictionary::DataDictionary;
use dicomset_core::header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};
use tracing::warn;

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while decoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Option<Backtrace>,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field"))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader {
        source: dicomset_core::header::SequenceItemHeaderError,
    },
}

impl Error {
    /// Whether the error was caused by the source ending
    /// right at the beginning of a header.
    pub fn is_eof(&self) -> bool {
        match self {
            Error::ReadHeaderTag { source, .. } | Error::ReadTag { source, .. } => {
                source.kind() == io::ErrorKind::UnexpectedEof
            }
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Type trait for reading and decoding basic data values from a data source.
///
/// This trait aims to provide methods for reading binary numbers based on the
/// source's endianness. Unlike `Decode`, this trait is not object safe.
/// However, it doesn't have to because there are, and only will be, two
/// possible implementations (`LittleEndianBasicDecoder` and
/// `BigEndianBasicDecoder`).
pub trait BasicDecode {
    /// Retrieve the source's endianness, as expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned short value from the given source.
    fn decode_us<S>(&self, source: S) -> io::Result<u16>
    where
        S: Read;

    /// Decode a sequence of unsigned shorts value from the given source
    /// into the given destination.
    fn decode_us_into<S>(&self, source: S, dst: &mut [u16]) -> io::Result<()>
    where
        S: Read;

    /// Decode an unsigned long value from the given source.
    fn decode_ul<S>(&self, source: S) -> io::Result<u32>
    where
        S: Read;

    /// Decode a sequence of unsigned long values from the given source
    /// into the given destination.
    fn decode_ul_into<S>(&self, source: S, dst: &mut [u32]) -> io::Result<()>
    where
        S: Read;

    /// Decode a sequence of unsigned very long values from the given source
    /// into the given destination.
    fn decode_uv_into<S>(&self, source: S, dst: &mut [u64]) -> io::Result<()>
    where
        S: Read;

    /// Decode a sequence of signed short values from the given source
    /// into the given destination.
    fn decode_ss_into<S>(&self, source: S, dst: &mut [i16]) -> io::Result<()>
    where
        S: Read;

    /// Decode a sequence of signed long values from the given source
    /// into the given destination.
    fn decode_sl_into<S>(&self, source: S, dst: &mut [i32]) -> io::Result<()>
    where
        S: Read;

    /// Decode a sequence of signed very long values from the given source
    /// into the given destination.
    fn decode_sv_into<S>(&self, source: S, dst: &mut [i64]) -> io::Result<()>
    where
        S: Read;

    /// Decode a sequence of single precision float values from the given source
    /// into the given destination.
    fn decode_fl_into<S>(&self, source: S, dst: &mut [f32]) -> io::Result<()>
    where
        S: Read;

    /// Decode a sequence of double precision float values from the given source
    /// into the given destination.
    fn decode_fd_into<S>(&self, source: S, dst: &mut [f64]) -> io::Result<()>
    where
        S: Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, mut source: S) -> io::Result<Tag>
    where
        S: Read,
    {
        let g = self.decode_us(&mut source)?;
        let e = self.decode_us(source)?;
        Ok(Tag(g, e))
    }
}

/// Type trait for reading and decoding DICOM data elements.
///
/// The specific behaviour of decoding, even when abstracted from the original source,
/// may depend on the transfer syntax.
pub trait Decode {
    /// Fetch and decode the next data element header from the given source.
    /// This method returns only the header of the element. At the end of this operation, the source
    /// will be pointing at the element's value data, which should be read or skipped as necessary.
    ///
    /// Decoding an item or sequence delimiter is considered valid, and so should be properly handled
    /// by the decoder. The value representation in this case should be `UN`.
    ///
    /// Returns the expected header and the exact number of bytes read from the source.
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read;

    /// Fetch and decode the next sequence item head from the given source. It is a separate method
    /// because value representation is always implicit when reading item headers and delimiters.
    /// This method returns only the header of the item. At the end of this operation, the source
    /// will be pointing at the beginning of the item's data, which should be traversed if necessary.
    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read;
}

impl<T: ?Sized> Decode for &T
where
    T: Decode,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        (**self).decode_header(source)
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        (**self).decode_item_header(source)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        (**self).decode_tag(source)
    }
}

/// A data element header decoder for any of the supported
/// combinations of byte order and VR explicitness,
/// selected at run-time from a transfer syntax.
#[derive(Debug)]
pub enum DataElementDecoder<D> {
    /// Explicit VR Little Endian
    ExplicitLE(ExplicitVRLittleEndianDecoder),
    /// Explicit VR Big Endian
    ExplicitBE(ExplicitVRBigEndianDecoder),
    /// Implicit VR Little Endian, resolving VRs with a dictionary
    ImplicitLE(ImplicitVRLittleEndianDecoder<D>),
}

impl<D> DataElementDecoder<D>
where
    D: DataDictionary,
{
    /// Create the decoder for the given byte order and VR explicitness.
    ///
    /// Returns `None` for the implicit VR big endian combination,
    /// which is not a DICOM encoding.
    pub fn new(endianness: Endianness, explicit_vr: bool, dict: D) -> Option<Self> {
        match (endianness, explicit_vr) {
            (Endianness::Little, true) => Some(DataElementDecoder::ExplicitLE(
                ExplicitVRLittleEndianDecoder::default(),
            )),
            (Endianness::Big, true) => Some(DataElementDecoder::ExplicitBE(
                ExplicitVRBigEndianDecoder::default(),
            )),
            (Endianness::Little, false) => Some(DataElementDecoder::ImplicitLE(
                ImplicitVRLittleEndianDecoder::with_dict(dict),
            )),
            (Endianness::Big, false) => None,
        }
    }
}

impl<D> Decode for DataElementDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        match self {
            DataElementDecoder::ExplicitLE(d) => d.decode_header(source),
            DataElementDecoder::ExplicitBE(d) => d.decode_header(source),
            DataElementDecoder::ImplicitLE(d) => d.decode_header(source),
        }
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        match self {
            DataElementDecoder::ExplicitLE(d) => d.decode_item_header(source),
            DataElementDecoder::ExplicitBE(d) => d.decode_item_header(source),
            DataElementDecoder::ImplicitLE(d) => d.decode_item_header(source),
        }
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        match self {
            DataElementDecoder::ExplicitLE(d) => d.decode_tag(source),
            DataElementDecoder::ExplicitBE(d) => d.decode_tag(source),
            DataElementDecoder::ImplicitLE(d) => d.decode_tag(source),
        }
    }
}

/// Decode an explicit VR element header in the byte order of `basic`.
///
/// Headers in group `FFFE` carry no VR and are reported as `UN`.
/// An unrecognized VR is also read as `UN`,
/// with the reserved bytes and 4-byte length which follow it.
fn decode_explicit_header<B, S>(basic: &B, source: &mut S) -> Result<(DataElementHeader, usize)>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    let tag = basic.decode_tag(&mut *source).context(ReadHeaderTagSnafu)?;

    if tag.0 == 0xFFFE {
        // item delimiters do not have VR or reserved field
        let len = basic.decode_ul(&mut *source).context(ReadItemLengthSnafu)?;
        return Ok((DataElementHeader::new(tag, VR::UN, Length(len)), 8));
    }

    let mut buf = [0u8; 2];
    source.read_exact(&mut buf).context(ReadVrSnafu)?;
    let vr = VR::from_binary(buf).unwrap_or_else(|| {
        warn!(
            "Unknown value representation {:02X?} in element {}, reading as UN",
            buf, tag
        );
        VR::UN
    });

    if vr.has_long_length() {
        // read 2 reserved bytes, then 4 bytes for data length
        source.read_exact(&mut buf).context(ReadReservedSnafu)?;
        let len = basic.decode_ul(&mut *source).context(ReadLengthSnafu)?;
        Ok((DataElementHeader::new(tag, vr, Length(len)), 12))
    } else {
        // read 2 bytes for the data length
        let len = basic.decode_us(&mut *source).context(ReadLengthSnafu)?;
        Ok((DataElementHeader::new(tag, vr, Length(u32::from(len))), 8))
    }
}

/// Decode an item header or delimiter, which is the same
/// regardless of VR explicitness.
fn decode_item_header_with<B, S>(basic: &B, source: &mut S) -> Result<SequenceItemHeader>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    let tag = basic.decode_tag(&mut *source).context(ReadItemHeaderSnafu)?;
    let len = basic.decode_ul(&mut *source).context(ReadItemLengthSnafu)?;
    SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
}
