//! Module holding a stateful DICOM data encoding abstraction.
//!
//! The [`StatefulEncoder`] supports encoding of binary data and text
//! while applying the necessary padding to conform to DICOM encoding rules.
//! Value lengths are always derived from the encoded value,
//! never taken from a previously decoded header.

use dicomset_core::header::{DataElementHeader, Length, Tag, VR};
use dicomset_core::value::PrimitiveValue;
use dicomset_encoding::encode::{self, DataElementEncoder, Encode};
use dicomset_encoding::text::{
    DefaultCharacterSetCodec, EncodeTextError, SpecificCharacterSet, TextCodec,
};
use dicomset_encoding::TransferSyntax;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::convert::TryFrom;
use std::io::Write;
use tracing::warn;

/// The _Specific Character Set_ attribute.
const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Encoding in transfer syntax {} is unsupported", uid))]
    UnsupportedTransferSyntax {
        uid: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to encode a data piece at position {}", position))]
    EncodeData {
        position: u64,
        #[snafu(backtrace)]
        source: encode::Error,
    },

    #[snafu(display("Could not encode text at position {}", position))]
    EncodeText {
        position: u64,
        #[snafu(backtrace)]
        source: EncodeTextError,
    },

    #[snafu(display("Could not write value data at position {}", position))]
    WriteValueData {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Value of {} ({}) contains a backslash inside one of its values", tag, vr))]
    BackslashInValue {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },

    #[snafu(display("Value of {} is too long ({} bytes)", tag, len))]
    ValueLength {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The number of bytes written before the error occurred, if known.
    pub fn position(&self) -> Option<u64> {
        match self {
            Error::EncodeData { position, .. }
            | Error::EncodeText { position, .. }
            | Error::WriteValueData { position, .. } => Some(*position),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Also called a printer, this encoder type provides a stateful mid-level
/// abstraction for writing DICOM content. Unlike `Encode`,
/// the stateful encoder knows how to write text values and keeps track
/// of how many bytes were written.
/// `W` is the write target, `E` is the encoder, and `T` is the text codec.
#[derive(Debug)]
pub struct StatefulEncoder<W, E, T = SpecificCharacterSet> {
    to: W,
    encoder: E,
    text: T,
    bytes_written: u64,
    buffer: Vec<u8>,
}

impl<W, E, T> StatefulEncoder<W, E, T> {
    pub fn new(to: W, encoder: E, text: T) -> Self {
        StatefulEncoder {
            to,
            encoder,
            text,
            bytes_written: 0,
            buffer: Vec::with_capacity(128),
        }
    }

    /// Retrieve the number of bytes written so far by this printer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Retrieve the inner writer, discarding the encoder.
    pub fn into_inner(self) -> W {
        self.to
    }
}

impl<W> StatefulEncoder<W, DataElementEncoder> {
    /// Create a stateful encoder writing in the given transfer syntax.
    pub fn new_with(to: W, ts: &TransferSyntax, charset: SpecificCharacterSet) -> Result<Self> {
        let encoder = ts
            .encoder()
            .context(UnsupportedTransferSyntaxSnafu { uid: ts.uid() })?;
        Ok(StatefulEncoder::new(to, encoder, charset))
    }
}

impl<W, E> StatefulEncoder<W, E>
where
    W: Write,
    E: Encode,
{
    /// The character set currently in use for encoding text.
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.text
    }

    /// Change the character set used for encoding text.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.text = charset;
    }

    /// Encode and write a data element header.
    ///
    /// A defined length is rounded up to the next even number.
    pub fn encode_element_header(&mut self, mut de: DataElementHeader) -> Result<()> {
        if let Some(len) = de.len.get() {
            de.len = Length(even_len(len))
        }
        let bytes = self
            .encoder
            .encode_element_header(&mut self.to, de)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += bytes as u64;
        Ok(())
    }

    /// Encode and write an item header,
    /// where `len` is the specified length of the item
    /// (can be `0xFFFF_FFFF` for undefined length).
    pub fn encode_item_header(&mut self, len: u32) -> Result<()> {
        let len = if len == 0xFFFF_FFFF {
            len
        } else {
            even_len(len)
        };
        self.encoder
            .encode_item_header(&mut self.to, len)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write an item delimiter.
    pub fn encode_item_delimiter(&mut self) -> Result<()> {
        self.encoder
            .encode_item_delimiter(&mut self.to)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write a sequence delimiter.
    pub fn encode_sequence_delimiter(&mut self) -> Result<()> {
        self.encoder
            .encode_sequence_delimiter(&mut self.to)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Write the given bytes directly to the inner writer.
    ///
    /// Note that this method
    /// (unlike [`write_bytes`](StatefulEncoder::write_bytes))
    /// does not perform any additional padding.
    pub fn write_raw_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.to.write_all(bytes).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Write a primitive DICOM value as a bunch of bytes
    /// directly to the inner writer.
    ///
    /// This method will perform the necessary padding
    /// (always with zeros)
    /// to ensure that the encoded value has an even number of bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_raw_bytes(bytes)?;
        if bytes.len() % 2 != 0 {
            self.write_raw_bytes(&[0])?;
        }
        Ok(())
    }

    /// Encode and write the values of a pixel data offset table.
    pub fn encode_offset_table(&mut self, table: &[u32]) -> Result<()> {
        let value = PrimitiveValue::U32(table.iter().copied().collect());
        self.buffer.clear();
        self.encoder
            .encode_primitive(&mut self.buffer, &value)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        let buffer = std::mem::take(&mut self.buffer);
        let out = self.write_raw_bytes(&buffer);
        self.buffer = buffer;
        out
    }

    /// Encode a primitive value into its padded binary form,
    /// without writing anything.
    ///
    /// Text is encoded with the character set in effect,
    /// values are joined with a backslash,
    /// and the result is padded to even length
    /// with the padding byte of the value representation.
    pub fn encode_value(&mut self, tag: Tag, vr: VR, value: &PrimitiveValue) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match value {
            PrimitiveValue::Strs(texts) => {
                if vr.is_multi_valued_text() && texts.iter().any(|t| t.contains('\\')) {
                    return BackslashInValueSnafu { tag, vr }.fail();
                }
                for (i, text) in texts.iter().enumerate() {
                    if i > 0 {
                        out.push(b'\\');
                    }
                    out.extend(self.convert_text(text, vr)?);
                }
            }
            _ => {
                self.encoder
                    .encode_primitive(&mut out, value)
                    .context(EncodeDataSnafu {
                        position: self.bytes_written,
                    })?;
            }
        }
        if out.len() % 2 != 0 {
            out.push(vr.padding());
        }
        Ok(out)
    }

    /// Encode and write a data element with a primitive value.
    ///
    /// This method will perform the necessary padding to ensure that the
    /// encoded value is an even number of bytes.
    /// Where applicable,
    /// this will use the inner text codec for textual values.
    /// Writing a _Specific Character Set_ element
    /// switches the text codec for the elements that follow.
    pub fn encode_primitive_element(
        &mut self,
        tag: Tag,
        vr: VR,
        value: &PrimitiveValue,
    ) -> Result<()> {
        let bytes = self.encode_value(tag, vr, value)?;
        let len = u32::try_from(bytes.len())
            .ok()
            .filter(|len| *len != 0xFFFF_FFFF)
            .context(ValueLengthSnafu {
                tag,
                len: bytes.len(),
            })?;
        self.encode_element_header(DataElementHeader::new(tag, vr, Length(len)))?;
        self.write_raw_bytes(&bytes)?;

        if tag == SPECIFIC_CHARACTER_SET {
            let code = value
                .strings()
                .and_then(|s| s.first())
                .map(String::as_str)
                .unwrap_or("");
            self.try_new_codec(code);
        }
        Ok(())
    }

    /// Flush the inner writer.
    pub fn flush(&mut self) -> Result<()> {
        self.to.flush().context(WriteValueDataSnafu {
            position: self.bytes_written,
        })
    }

    fn try_new_codec(&mut self, name: &str) {
        if let Some(codec) = SpecificCharacterSet::from_code(name) {
            self.text = codec;
        } else {
            warn!("Unsupported character set `{}`, ignoring", name);
        }
    }

    fn convert_text(&self, text: &str, vr: VR) -> Result<Vec<u8>> {
        match vr {
            VR::AE | VR::AS | VR::CS | VR::DA | VR::DS | VR::DT | VR::IS | VR::TM | VR::UI
            | VR::UR => {
                // these VRs always use the default character repertoire
                DefaultCharacterSetCodec.encode(text).context(EncodeTextSnafu {
                    position: self.bytes_written,
                })
            }
            _ => self.text.encode(text).context(EncodeTextSnafu {
                position: self.bytes_written,
            }),
        }
    }
}

#[inline]
fn even_len(l: u32) -> u32 {
    (l + 1) & !1
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomset_encoding::encode::explicit_be::ExplicitVRBigEndianEncoder;
    use dicomset_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
    use dicomset_encoding::encode::implicit_le::ImplicitVRLittleEndianEncoder;
    use smallvec::smallvec;

    fn explicit_le(out: &mut Vec<u8>) -> StatefulEncoder<&mut Vec<u8>, ExplicitVRLittleEndianEncoder> {
        StatefulEncoder::new(
            out,
            ExplicitVRLittleEndianEncoder::default(),
            SpecificCharacterSet::Default,
        )
    }

    /// Odd lengthed values convert to tokens with even padding (PN)
    #[test]
    fn encode_odd_length_element_pn() {
        let mut out: Vec<_> = Vec::new();
        {
            let mut encoder = explicit_le(&mut out);
            encoder
                .encode_primitive_element(
                    Tag(0x0010, 0x0010),
                    VR::PN,
                    &PrimitiveValue::from("Dall^John"),
                )
                .unwrap();
            assert_eq!(encoder.bytes_written(), 18);
        }

        assert_eq!(
            &out,
            &[
                0x10, 0x00, 0x10, 0x00, // tag
                b'P', b'N', // VR
                0x0A, 0x00, // length
                // ---------- value ----------
                b'D', b'a', b'l', b'l', b'^', b'J', b'o', b'h', b'n', b' ',
            ],
        )
    }

    /// Odd lengthed values are encoded with even padding (bytes)
    #[test]
    fn encode_odd_length_element_bytes() {
        let mut out: Vec<_> = Vec::new();
        explicit_le(&mut out)
            .encode_primitive_element(
                Tag(0x0009, 0x1010),
                VR::OB,
                &PrimitiveValue::from(vec![1_u8; 9]),
            )
            .unwrap();

        assert_eq!(
            &out,
            &[
                0x09, 0x00, 0x10, 0x10, // tag
                b'O', b'B', // VR
                0x00, 0x00, // reserved
                0x0A, 0x00, 0x00, 0x00, // length
                // ---------- value ----------
                1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
            ],
        )
    }

    /// Odd lengthed values are encoded with even padding (UIDs)
    #[test]
    fn encode_odd_length_element_uid() {
        let mut out: Vec<_> = Vec::new();
        explicit_le(&mut out)
            .encode_primitive_element(
                Tag(0x0008, 0x0016),
                VR::UI,
                &PrimitiveValue::from("1.2.840.10008.1.1"),
            )
            .unwrap();

        assert_eq!(
            &out,
            &[
                0x08, 0x00, 0x16, 0x00, // tag
                b'U', b'I', // VR
                0x12, 0x00, // length
                // ---------- value ----------
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'1', b'.', b'1', b'\0',
            ],
        )
    }

    #[test]
    fn multiple_values_are_joined() {
        let mut out: Vec<_> = Vec::new();
        let value = PrimitiveValue::Strs(smallvec!["ORIGINAL".to_string(), "PRIMARY".to_string()]);
        explicit_le(&mut out)
            .encode_primitive_element(Tag(0x0008, 0x0008), VR::CS, &value)
            .unwrap();
        assert_eq!(&out[6..8], &[0x10, 0x00]);
        assert_eq!(&out[8..], b"ORIGINAL\\PRIMARY");
    }

    #[test]
    fn backslash_inside_value_is_rejected() {
        let mut out: Vec<_> = Vec::new();
        let value = PrimitiveValue::Strs(smallvec!["A\\B".to_string(), "C".to_string()]);
        let err = explicit_le(&mut out)
            .encode_primitive_element(Tag(0x0008, 0x0008), VR::CS, &value)
            .unwrap_err();
        assert!(matches!(err, Error::BackslashInValue { vr: VR::CS, .. }));
        assert!(out.is_empty());

        // single-valued text keeps backslashes
        explicit_le(&mut out)
            .encode_primitive_element(Tag(0x0008, 0x4000), VR::LT, &PrimitiveValue::from("A\\B"))
            .unwrap();
        assert_eq!(&out[8..], b"A\\B ");
    }

    #[test]
    fn binary_values_follow_byte_order() {
        let mut out: Vec<_> = Vec::new();
        {
            let mut encoder = StatefulEncoder::new(
                &mut out,
                ExplicitVRBigEndianEncoder::default(),
                SpecificCharacterSet::Default,
            );
            encoder
                .encode_primitive_element(
                    Tag(0x0028, 0x0010),
                    VR::US,
                    &PrimitiveValue::from(vec![512_u16, 1]),
                )
                .unwrap();
        }
        assert_eq!(
            &out,
            &[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x04, 0x02, 0x00, 0x00, 0x01],
        );
    }

    #[test]
    fn short_length_overflow_fails() {
        let mut out: Vec<_> = Vec::new();
        let value = PrimitiveValue::from("A".repeat(0x1_0000));
        let err = explicit_le(&mut out)
            .encode_primitive_element(Tag(0x0010, 0x4000), VR::LO, &value)
            .unwrap_err();
        assert!(matches!(err, Error::EncodeData { .. }));

        // implicit VR has room for it
        let mut out: Vec<_> = Vec::new();
        StatefulEncoder::new(
            &mut out,
            ImplicitVRLittleEndianEncoder::default(),
            SpecificCharacterSet::Default,
        )
        .encode_primitive_element(Tag(0x0010, 0x4000), VR::LO, &value)
        .unwrap();
        assert_eq!(out.len(), 8 + 0x1_0000);
    }

    /// Odd lengthed item values are encoded with even padding
    #[test]
    fn encode_odd_length_item_bytes() {
        let mut out: Vec<_> = Vec::new();
        {
            let mut encoder = explicit_le(&mut out);
            encoder.encode_item_header(9).unwrap();
            encoder.write_bytes(&[5; 9]).unwrap();
        }

        assert_eq!(
            &out,
            &[
                0xFE, 0xFF, 0x00, 0xE0, // tag (0xFFFE, 0xE000)
                0x0A, 0x00, 0x00, 0x00, // length
                // ---------- value ----------
                5, 5, 5, 5, 5, 5, 5, 5, 5, 0,
            ],
        )
    }

    #[test]
    fn offset_table_and_delimiters() {
        let mut out: Vec<_> = Vec::new();
        {
            let mut encoder = explicit_le(&mut out);
            encoder.encode_item_header(8).unwrap();
            encoder.encode_offset_table(&[0, 0x20]).unwrap();
            encoder.encode_sequence_delimiter().unwrap();
            assert_eq!(encoder.bytes_written(), 24);
        }
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(&out, expected);
    }

    #[test]
    fn test_even_len() {
        assert_eq!(even_len(0), 0);
        assert_eq!(even_len(1), 2);
        assert_eq!(even_len(2), 2);
        assert_eq!(even_len(3), 4);
        assert_eq!(even_len(0xFFFF_FFFD), 0xFFFF_FFFE);
    }

    /// Test that the stateful encoder updates
    /// the active character set after writing a Specific Character Set element
    /// with a supported text encoding.
    #[test]
    fn update_character_set() {
        const GT: &[u8] = &[
            // Tag: (0008,0005) Specific Character Set
            0x08, 0x00, 0x05, 0x00, // VR: CS
            b'C', b'S', // Length: 10
            0x0a, 0x00, // Value: "ISO_IR 100"
            b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
            // Tag: (0010,0010) Patient Name
            0x10, 0x00, 0x10, 0x00, // VR: PN
            b'P', b'N', // Length: 4
            0x04, 0x00, // Value: "José" in latin-1
            b'J', b'o', b's', 0xE9,
        ];

        let mut sink = Vec::with_capacity(GT.len());
        let mut encoder = explicit_le(&mut sink);

        encoder
            .encode_primitive_element(
                Tag(0x0008, 0x0005),
                VR::CS,
                &PrimitiveValue::from("ISO_IR 100"),
            )
            .unwrap();
        assert_eq!(encoder.character_set(), SpecificCharacterSet::IsoIr100);

        encoder
            .encode_primitive_element(Tag(0x0010, 0x0010), VR::PN, &PrimitiveValue::from("José"))
            .unwrap();

        assert_eq!(&sink, GT);
    }
}
