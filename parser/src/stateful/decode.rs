//! This module provides a stateful decoder of DICOM data,
//! which binds a byte source to the element header decoder
//! of a transfer syntax and reads primitive values per value representation.
//!
//! The decoder keeps track of the number of bytes read so far
//! and of the character set currently in effect,
//! which is updated as soon as a _Specific Character Set_ element is read.

use dicomset_core::dictionary::DataDictionary;
use dicomset_core::header::{DataElementHeader, SequenceItemHeader, Tag, VR};
use dicomset_core::value::{PrimitiveValue, ValueKind, C};
use dicomset_encoding::decode::basic::{BasicDecoder, LittleEndianBasicDecoder};
use dicomset_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dicomset_encoding::decode::{self, BasicDecode, DataElementDecoder, Decode};
use dicomset_encoding::text::{
    DecodeTextError, DefaultCharacterSetCodec, SpecificCharacterSet, TextCodec,
};
use dicomset_encoding::TransferSyntax;
use smallvec::smallvec;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{self, BufRead, Read};
use tracing::warn;

/// The _Specific Character Set_ attribute.
const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Decoding in transfer syntax {} is unsupported", uid))]
    UnsupportedTransferSyntax { uid: &'static str, backtrace: Backtrace },
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },
    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },
    #[snafu(display("Could not read value of {} at position {}", tag, position))]
    ReadValueData {
        tag: Tag,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode text of {} at position {}", tag, position))]
    DecodeText {
        tag: Tag,
        position: u64,
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
    #[snafu(display("Undefined value length of element {} at position {}", tag, position))]
    UndefinedValueLength {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Element {} of VR {} at position {} is not primitive", tag, vr, position))]
    NonPrimitiveType {
        tag: Tag,
        vr: VR,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not skip {} bytes at position {}", len, position))]
    SkipValue {
        len: u64,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not peek at the data source at position {}", position))]
    PeekSource {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The byte position in the source at which the error occurred.
    pub fn position(&self) -> Option<u64> {
        match self {
            Error::UnsupportedTransferSyntax { .. } => None,
            Error::DecodeElementHeader { position, .. }
            | Error::DecodeItemHeader { position, .. }
            | Error::ReadValueData { position, .. }
            | Error::DecodeText { position, .. }
            | Error::UndefinedValueLength { position, .. }
            | Error::NonPrimitiveType { position, .. }
            | Error::SkipValue { position, .. }
            | Error::PeekSource { position, .. } => Some(*position),
        }
    }

    /// Whether the error is caused by the source ending
    /// right before the start of a new element header.
    pub fn is_eof(&self) -> bool {
        match self {
            Error::DecodeElementHeader { source, .. } => source.is_eof(),
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Interface of a decoder bound to a data source,
/// reading element headers and primitive values in sequence.
pub trait StatefulDecode {
    /// Same as `Decode::decode_header` over the bound source.
    fn decode_header(&mut self) -> Result<DataElementHeader>;

    /// Same as `Decode::decode_item_header` over the bound source.
    fn decode_item_header(&mut self) -> Result<SequenceItemHeader>;

    /// Eagerly read the following data in the source as a primitive value,
    /// interpreted according to the header's value representation.
    ///
    /// Text values have one trailing padding character removed
    /// and are split into multiple values on the backslash
    /// when the value representation admits it.
    /// Binary values whose length is not a multiple of the sample width
    /// are read as raw bytes instead.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O problems,
    /// if the length is undefined,
    /// or if the header VR describes a sequence.
    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue>;

    /// Eagerly read the following data in the source as raw bytes,
    /// regardless of its value representation.
    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<Vec<u8>>;

    /// Read `len` bytes of a basic offset table
    /// as 32-bit unsigned integers.
    fn read_offset_table(&mut self, len: u32) -> Result<Vec<u32>>;

    /// Skip the given number of bytes from the source.
    fn skip_bytes(&mut self, len: u32) -> Result<()>;

    /// Retrieve the exact number of bytes read so far by the stateful decoder.
    fn position(&self) -> u64;
}

/// A stateful abstraction for the full DICOM content reading process.
/// This type encapsulates the necessary codecs in order
/// to be as autonomous as possible in the DICOM content reading
/// process.
/// `S` is the generic parameter type for the original source,
/// `D` is the parameter type that the decoder interprets as,
/// whereas `BD` is the basic decoder of binary values.
#[derive(Debug)]
pub struct StatefulDecoder<D, S, BD = BasicDecoder> {
    from: S,
    decoder: D,
    basic: BD,
    text: SpecificCharacterSet,
    buffer: Vec<u8>,
    position: u64,
}

/// The stateful decoder of the file meta group,
/// always in explicit VR little endian.
pub type FileHeaderParser<S> =
    StatefulDecoder<ExplicitVRLittleEndianDecoder, S, LittleEndianBasicDecoder>;

impl<S> FileHeaderParser<S>
where
    S: Read,
{
    /// Create a new DICOM stateful decoder for reading the file meta header,
    /// which is always in _Explicit VR Little Endian_.
    pub fn file_header_parser(from: S) -> Self {
        StatefulDecoder::new(
            from,
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
            SpecificCharacterSet::Default,
        )
    }
}

impl<S, Dict> StatefulDecoder<DataElementDecoder<Dict>, S>
where
    Dict: DataDictionary,
{
    /// Create a new DICOM stateful decoder from its parts,
    /// using the header decoder of the given transfer syntax.
    ///
    /// The dictionary resolves the value representation of elements
    /// when the transfer syntax has implicit VR.
    pub fn new_with(
        from: S,
        ts: &TransferSyntax,
        dict: Dict,
        charset: SpecificCharacterSet,
    ) -> Result<Self> {
        let decoder = ts
            .decoder(dict)
            .context(UnsupportedTransferSyntaxSnafu { uid: ts.uid() })?;
        Ok(StatefulDecoder::new(
            from,
            decoder,
            ts.basic_decoder(),
            charset,
        ))
    }
}

impl<D, S, BD> StatefulDecoder<D, S, BD> {
    /// Create a new DICOM stateful decoder from its parts.
    pub fn new(from: S, decoder: D, basic: BD, text: SpecificCharacterSet) -> Self {
        StatefulDecoder {
            from,
            decoder,
            basic,
            text,
            buffer: Vec::with_capacity(64),
            position: 0,
        }
    }

    /// Set the position of the decoder,
    /// for when the source does not start at the beginning of the file.
    pub fn with_position(mut self, position: u64) -> Self {
        self.position = position;
        self
    }

    /// The character set currently in use for decoding text.
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.text
    }

    /// Change the character set used for decoding text.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.text = charset;
    }

    /// Retrieve the inner source, discarding the decoder.
    pub fn into_inner(self) -> S {
        self.from
    }
}

impl<D, S, BD> StatefulDecoder<D, S, BD>
where
    S: BufRead,
{
    /// Check whether the source has no more bytes to read.
    pub fn is_at_end(&mut self) -> Result<bool> {
        let position = self.position;
        self.from
            .fill_buf()
            .map(|buf| buf.is_empty())
            .context(PeekSourceSnafu { position })
    }
}

impl<D, S, BD> StatefulDecoder<D, S, BD>
where
    D: Decode,
    S: Read,
    BD: BasicDecode,
{
    fn require_known_length(&self, header: &DataElementHeader) -> Result<usize> {
        header
            .len
            .get()
            .map(|len| len as usize)
            .context(UndefinedValueLengthSnafu {
                tag: header.tag,
                position: self.position,
            })
    }

    /// Fill the internal buffer with exactly `len` bytes from the source.
    fn read_to_buffer(&mut self, tag: Tag, len: usize) -> Result<()> {
        self.buffer.resize(len, 0);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                tag,
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(())
    }

    fn read_value_strs(&mut self, header: &DataElementHeader, len: usize) -> Result<PrimitiveValue> {
        let position = self.position;
        self.read_to_buffer(header.tag, len)?;

        let text = match header.vr {
            // value representations restricted to the default repertoire
            VR::AE | VR::AS | VR::CS | VR::DA | VR::DS | VR::DT | VR::IS | VR::TM | VR::UI
            | VR::UR => DefaultCharacterSetCodec.decode(&self.buffer),
            _ => self.text.decode(&self.buffer),
        }
        .context(DecodeTextSnafu {
            tag: header.tag,
            position,
        })?;

        let text = strip_padding(text);
        let values: C<String> = if header.vr.is_multi_valued_text() {
            text.split('\\').map(str::to_owned).collect()
        } else {
            smallvec![text]
        };

        if header.tag == SPECIFIC_CHARACTER_SET {
            self.update_character_set(&values);
        }

        Ok(PrimitiveValue::Strs(values))
    }

    fn update_character_set(&mut self, values: &[String]) {
        let code = values.first().map(String::as_str).unwrap_or("");
        match SpecificCharacterSet::from_code(code) {
            Some(charset) => self.text = charset,
            None => warn!(
                "Unsupported character set `{}`, keeping {}",
                code,
                self.text.name()
            ),
        }
    }

    fn read_value_binary(
        &mut self,
        header: &DataElementHeader,
        kind: ValueKind,
        len: usize,
    ) -> Result<PrimitiveValue> {
        let width = kind.width().unwrap_or(1);
        let tag = header.tag;
        let position = self.position;
        self.read_to_buffer(tag, len)?;

        if len % width != 0 {
            // odd length OW is admitted as bytes
            if kind != ValueKind::Words {
                warn!(
                    "Length {} of element {} ({}) is not a multiple of {}, reading as bytes",
                    len, tag, header.vr, width
                );
            }
            return Ok(PrimitiveValue::U8(C::from_slice(&self.buffer)));
        }

        let n = len / width;
        let source = &self.buffer[..];
        let basic = &self.basic;
        let ctx = ReadValueDataSnafu { tag, position };
        let value = match kind {
            ValueKind::Bytes => PrimitiveValue::U8(C::from_slice(source)),
            ValueKind::Tags => {
                let mut source = source;
                let tags = (0..n)
                    .map(|_| basic.decode_tag(&mut source))
                    .collect::<io::Result<C<Tag>>>()
                    .context(ctx)?;
                PrimitiveValue::Tags(tags)
            }
            ValueKind::Words | ValueKind::U16 => {
                let mut values: C<u16> = smallvec![0; n];
                basic.decode_us_into(source, &mut values).context(ctx)?;
                PrimitiveValue::U16(values)
            }
            ValueKind::I16 => {
                let mut values: C<i16> = smallvec![0; n];
                basic.decode_ss_into(source, &mut values).context(ctx)?;
                PrimitiveValue::I16(values)
            }
            ValueKind::U32 => {
                let mut values: C<u32> = smallvec![0; n];
                basic.decode_ul_into(source, &mut values).context(ctx)?;
                PrimitiveValue::U32(values)
            }
            ValueKind::I32 => {
                let mut values: C<i32> = smallvec![0; n];
                basic.decode_sl_into(source, &mut values).context(ctx)?;
                PrimitiveValue::I32(values)
            }
            ValueKind::U64 => {
                let mut values: C<u64> = smallvec![0; n];
                basic.decode_uv_into(source, &mut values).context(ctx)?;
                PrimitiveValue::U64(values)
            }
            ValueKind::I64 => {
                let mut values: C<i64> = smallvec![0; n];
                basic.decode_sv_into(source, &mut values).context(ctx)?;
                PrimitiveValue::I64(values)
            }
            ValueKind::F32 => {
                let mut values: C<f32> = smallvec![0.; n];
                basic.decode_fl_into(source, &mut values).context(ctx)?;
                PrimitiveValue::F32(values)
            }
            ValueKind::F64 => {
                let mut values: C<f64> = smallvec![0.; n];
                basic.decode_fd_into(source, &mut values).context(ctx)?;
                PrimitiveValue::F64(values)
            }
            ValueKind::Strings | ValueKind::Sequence => unreachable!("not a binary kind"),
        };
        Ok(value)
    }
}

impl<D, S, BD> StatefulDecode for StatefulDecoder<D, S, BD>
where
    D: Decode,
    S: Read,
    BD: BasicDecode,
{
    fn decode_header(&mut self) -> Result<DataElementHeader> {
        let (header, bytes_read) = self
            .decoder
            .decode_header(&mut self.from)
            .context(DecodeElementHeaderSnafu {
                position: self.position,
            })?;
        self.position += bytes_read as u64;
        Ok(header)
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let header = self
            .decoder
            .decode_item_header(&mut self.from)
            .context(DecodeItemHeaderSnafu {
                position: self.position,
            })?;
        self.position += 8;
        Ok(header)
    }

    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let kind = header.vr.value_kind();
        if kind == ValueKind::Sequence {
            return NonPrimitiveTypeSnafu {
                tag: header.tag,
                vr: header.vr,
                position: self.position,
            }
            .fail();
        }
        if len == 0 {
            if header.tag == SPECIFIC_CHARACTER_SET {
                self.text = SpecificCharacterSet::Default;
            }
            return Ok(PrimitiveValue::Empty);
        }

        match kind {
            ValueKind::Strings => self.read_value_strs(header, len),
            kind => self.read_value_binary(header, kind, len),
        }
    }

    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<Vec<u8>> {
        let len = self.require_known_length(header)?;
        self.read_to_buffer(header.tag, len)?;
        Ok(std::mem::take(&mut self.buffer))
    }

    fn read_offset_table(&mut self, len: u32) -> Result<Vec<u32>> {
        let position = self.position;
        let len = len as usize;
        self.read_to_buffer(Tag::ITEM, len)?;
        if len % 4 != 0 {
            warn!(
                "Basic offset table length {} is not a multiple of 4, ignoring trailing bytes",
                len
            );
        }
        let mut offsets = vec![0; len / 4];
        self.basic
            .decode_ul_into(&self.buffer[..], &mut offsets)
            .context(ReadValueDataSnafu {
                tag: Tag::ITEM,
                position,
            })?;
        Ok(offsets)
    }

    fn skip_bytes(&mut self, len: u32) -> Result<()> {
        let position = self.position;
        let skipped = io::copy(&mut (&mut self.from).take(u64::from(len)), &mut io::sink())
            .context(SkipValueSnafu {
                len: u64::from(len),
                position,
            })?;
        self.position += skipped;
        if skipped < u64::from(len) {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof)).context(SkipValueSnafu {
                len: u64::from(len),
                position,
            });
        }
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}

impl<T: ?Sized> StatefulDecode for &mut T
where
    T: StatefulDecode,
{
    fn decode_header(&mut self) -> Result<DataElementHeader> {
        (**self).decode_header()
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        (**self).decode_item_header()
    }

    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        (**self).read_value(header)
    }

    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<Vec<u8>> {
        (**self).read_value_bytes(header)
    }

    fn read_offset_table(&mut self, len: u32) -> Result<Vec<u32>> {
        (**self).read_offset_table(len)
    }

    fn skip_bytes(&mut self, len: u32) -> Result<()> {
        (**self).skip_bytes(len)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }
}

/// Remove a single trailing padding character (space or NUL).
fn strip_padding(mut text: String) -> String {
    if text.ends_with(|c: char| c == ' ' || c == '\0') {
        text.pop();
    }
    text
}
