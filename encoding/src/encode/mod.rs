//! This module contains all DICOM data element encoding logic.
use self::explicit_be::ExplicitVRBigEndianEncoder;
use self::explicit_le::ExplicitVRLittleEndianEncoder;
use self::implicit_le::ImplicitVRLittleEndianEncoder;
use byteordered::Endianness;
use dicomset_core::header::{DataElementHeader, Tag, VR};
use dicomset_core::value::PrimitiveValue;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while encoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write value representation"))]
    WriteVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write reserved bytes"))]
    WriteReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write element length"))]
    WriteLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write sequence delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write primitive value"))]
    WritePrimitive {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display(
        "Value of {} {} is {} bytes long, which does not fit a 2-byte length",
        tag,
        vr,
        len
    ))]
    ValueTooLong {
        tag: Tag,
        vr: VR,
        len: u32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Type trait for an encoder of basic data properties.
/// Unlike `Encode` (and similar to `BasicDecode`), this trait is not object
/// safe because it's better to just provide a dynamic implementation.
pub trait BasicEncode {
    /// Retrieve the encoder's endianness.
    fn endianness(&self) -> Endianness;

    /// Encode an unsigned short value to the given writer.
    fn encode_us<W>(&self, to: W, value: u16) -> io::Result<()>
    where
        W: Write;

    /// Encode an unsigned long value to the given writer.
    fn encode_ul<W>(&self, to: W, value: u32) -> io::Result<()>
    where
        W: Write;

    /// Encode an unsigned very long value to the given writer.
    fn encode_uv<W>(&self, to: W, value: u64) -> io::Result<()>
    where
        W: Write;

    /// Encode a signed short value to the given writer.
    fn encode_ss<W>(&self, to: W, value: i16) -> io::Result<()>
    where
        W: Write;

    /// Encode a signed long value to the given writer.
    fn encode_sl<W>(&self, to: W, value: i32) -> io::Result<()>
    where
        W: Write;

    /// Encode a signed very long value to the given writer.
    fn encode_sv<W>(&self, to: W, value: i64) -> io::Result<()>
    where
        W: Write;

    /// Encode a single precision float value to the given writer.
    fn encode_fl<W>(&self, to: W, value: f32) -> io::Result<()>
    where
        W: Write;

    /// Encode a double precision float value to the given writer.
    fn encode_fd<W>(&self, to: W, value: f64) -> io::Result<()>
    where
        W: Write;

    /// Encode a DICOM attribute tag to the given writer.
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_us(&mut to, tag.0)?;
        self.encode_us(to, tag.1)
    }

    /// Encode a primitive value to the given writer,
    /// with no padding.
    ///
    /// Text is written as UTF-8 with values separated by a backslash.
    /// Callers needing another character set
    /// should encode strings themselves.
    fn encode_primitive<W>(&self, mut to: W, value: &PrimitiveValue) -> io::Result<()>
    where
        W: Write,
    {
        use PrimitiveValue::*;
        match value {
            Empty => Ok(()), // no-op
            Strs(s) => to.write_all(s.join("\\").as_bytes()),
            Tags(tags) => {
                for tag in tags {
                    self.encode_tag(&mut to, *tag)?;
                }
                Ok(())
            }
            U8(values) => to.write_all(values),
            I16(values) => {
                for v in values {
                    self.encode_ss(&mut to, *v)?;
                }
                Ok(())
            }
            U16(values) => {
                for v in values {
                    self.encode_us(&mut to, *v)?;
                }
                Ok(())
            }
            I32(values) => {
                for v in values {
                    self.encode_sl(&mut to, *v)?;
                }
                Ok(())
            }
            U32(values) => {
                for v in values {
                    self.encode_ul(&mut to, *v)?;
                }
                Ok(())
            }
            I64(values) => {
                for v in values {
                    self.encode_sv(&mut to, *v)?;
                }
                Ok(())
            }
            U64(values) => {
                for v in values {
                    self.encode_uv(&mut to, *v)?;
                }
                Ok(())
            }
            F32(values) => {
                for v in values {
                    self.encode_fl(&mut to, *v)?;
                }
                Ok(())
            }
            F64(values) => {
                for v in values {
                    self.encode_fd(&mut to, *v)?;
                }
                Ok(())
            }
        }
    }
}

/// Type trait for a data element encoder.
pub trait Encode {
    /// Encode and write an element tag.
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write;

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write;

    /// Encode and write a DICOM sequence item header to the given destination.
    /* Although item element headers are always a tag and length sequence regardless of TS,
    the encoding of the length is unknown at this level. So no default impl. */
    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write;

    /// Encode and write a DICOM sequence item delimiter to the given destination.
    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        self.encode_tag(&mut to, Tag::ITEM_DELIMITER)?;
        to.write_all(&[0u8; 4]).context(WriteItemDelimiterSnafu)
    }

    /// Encode and write a DICOM sequence delimiter to the given destination.
    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        self.encode_tag(&mut to, Tag::SEQUENCE_DELIMITER)?;
        to.write_all(&[0u8; 4])
            .context(WriteSequenceDelimiterSnafu)
    }

    /// Encode and write a primitive DICOM value to the given destination.
    fn encode_primitive<W>(&self, to: W, value: &PrimitiveValue) -> Result<()>
    where
        W: Write;
}

impl<T: ?Sized> Encode for &T
where
    T: Encode,
{
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_tag(to, tag)
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        (**self).encode_element_header(to, de)
    }

    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_item_header(to, len)
    }

    fn encode_item_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_item_delimiter(to)
    }

    fn encode_sequence_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_sequence_delimiter(to)
    }

    fn encode_primitive<W>(&self, to: W, value: &PrimitiveValue) -> Result<()>
    where
        W: Write,
    {
        (**self).encode_primitive(to, value)
    }
}

/// A data element encoder for any of the supported
/// combinations of byte order and VR explicitness,
/// selected at run-time from a transfer syntax.
#[derive(Debug, Clone)]
pub enum DataElementEncoder {
    /// Explicit VR Little Endian
    ExplicitLE(ExplicitVRLittleEndianEncoder),
    /// Explicit VR Big Endian
    ExplicitBE(ExplicitVRBigEndianEncoder),
    /// Implicit VR Little Endian
    ImplicitLE(ImplicitVRLittleEndianEncoder),
}

impl DataElementEncoder {
    /// Create the encoder for the given byte order and VR explicitness.
    ///
    /// Returns `None` for the implicit VR big endian combination,
    /// which is not a DICOM encoding.
    pub fn new(endianness: Endianness, explicit_vr: bool) -> Option<Self> {
        match (endianness, explicit_vr) {
            (Endianness::Little, true) => Some(DataElementEncoder::ExplicitLE(
                ExplicitVRLittleEndianEncoder::default(),
            )),
            (Endianness::Big, true) => Some(DataElementEncoder::ExplicitBE(
                ExplicitVRBigEndianEncoder::default(),
            )),
            (Endianness::Little, false) => Some(DataElementEncoder::ImplicitLE(
                ImplicitVRLittleEndianEncoder::default(),
            )),
            (Endianness::Big, false) => None,
        }
    }

    /// Whether this encoder writes the value representation of each element.
    pub fn is_explicit_vr(&self) -> bool {
        !matches!(self, DataElementEncoder::ImplicitLE(_))
    }
}

macro_rules! for_each_encoder {
    ($s: expr, |$e: ident| $f: expr) => {
        match $s {
            DataElementEncoder::ExplicitLE($e) => $f,
            DataElementEncoder::ExplicitBE($e) => $f,
            DataElementEncoder::ImplicitLE($e) => $f,
        }
    };
}

impl Encode for DataElementEncoder {
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        for_each_encoder!(self, |e| e.encode_tag(to, tag))
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        for_each_encoder!(self, |e| e.encode_element_header(to, de))
    }

    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        for_each_encoder!(self, |e| e.encode_item_header(to, len))
    }

    fn encode_primitive<W>(&self, to: W, value: &PrimitiveValue) -> Result<()>
    where
        W: Write,
    {
        for_each_encoder!(self, |e| e.encode_primitive(to, value))
    }
}

/// Encode an explicit VR element header in the byte order of `basic`.
///
/// Headers in group `FFFE` are written without VR.
fn encode_explicit_header<B, W>(basic: &B, mut to: W, de: DataElementHeader) -> Result<usize>
where
    B: BasicEncode,
    W: Write,
{
    basic.encode_tag(&mut to, de.tag).context(WriteTagSnafu)?;
    if de.tag.0 == 0xFFFE {
        basic.encode_ul(&mut to, de.len.0).context(WriteLengthSnafu)?;
        return Ok(8);
    }

    to.write_all(&de.vr.to_bytes()).context(WriteVrSnafu)?;
    if de.vr.has_long_length() {
        to.write_all(&[0u8; 2]).context(WriteReservedSnafu)?;
        basic.encode_ul(&mut to, de.len.0).context(WriteLengthSnafu)?;
        Ok(12)
    } else {
        ensure!(
            de.len.0 <= u32::from(u16::MAX),
            ValueTooLongSnafu {
                tag: de.tag,
                vr: de.vr,
                len: de.len.0,
            }
        );
        basic
            .encode_us(&mut to, de.len.0 as u16)
            .context(WriteLengthSnafu)?;
        Ok(8)
    }
}

fn encode_item_header_with<B, W>(basic: &B, mut to: W, len: u32) -> Result<()>
where
    B: BasicEncode,
    W: Write,
{
    basic
        .encode_tag(&mut to, Tag::ITEM)
        .context(WriteItemHeaderSnafu)?;
    basic.encode_ul(to, len).context(WriteItemHeaderSnafu)
}
