//! Explicit VR Big Endian syntax transfer implementation.

use crate::decode::basic::BigEndianBasicDecoder;
use crate::decode::{
    decode_explicit_header, decode_item_header_with, BasicDecode, Decode, ReadTagSnafu, Result,
};
use dicomset_core::header::{DataElementHeader, SequenceItemHeader, Tag};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR Big Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianDecoder {
    basic: BigEndianBasicDecoder,
}

impl Decode for ExplicitVRBigEndianDecoder {
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        decode_explicit_header(&self.basic, source)
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        decode_item_header_with(&self.basic, source)
    }

    #[inline]
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRBigEndianDecoder;
    use crate::decode::Decode;
    use dicomset_core::header::{HasLength, Header, Length, Tag, VR};
    use std::io::{Cursor, Read, Seek};

    // manually crafting some DICOM data elements
    //  Tag: (0028,0010) Rows
    //  VR: US
    //  Length: 2
    //  Value: 512
    // --
    //  Tag: (7FE0,0010) Pixel Data
    //  VR: OW
    //  Reserved bytes: 0x0000
    //  Length: 4
    //  Value: [0x0102, 0x0304]
    const RAW: &[u8] = &[
        0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00, 0x7F, 0xE0, 0x00, 0x10, b'O',
        b'W', 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn decode_explicit_vr_be() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
            assert_eq!(elem.vr(), VR::US);
            assert_eq!(elem.length(), Length(2));
            assert_eq!(bytes_read, 8);
            let mut buffer = [0; 2];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(u16::from_be_bytes(buffer), 512);
        }
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag::PIXEL_DATA);
            assert_eq!(elem.vr(), VR::OW);
            assert_eq!(elem.length(), Length(4));
            assert_eq!(bytes_read, 12);
        }
        assert_eq!(cursor.stream_position().unwrap(), 22);
    }

    // Item with a defined length of 10, followed by a sequence delimiter
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0xFF, 0xFE, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x0A, 0xFF, 0xFE, 0xE0, 0xDD, 0x00, 0x00, 0x00,
        0x00,
    ];

    #[test]
    fn decode_items() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);
        let item = dec
            .decode_item_header(&mut cursor)
            .expect("should find an item header");
        assert!(item.is_item());
        assert_eq!(item.length(), Length(10));
        let delimiter = dec
            .decode_item_header(&mut cursor)
            .expect("should find a sequence delimiter");
        assert!(delimiter.is_sequence_delimiter());
    }
}
