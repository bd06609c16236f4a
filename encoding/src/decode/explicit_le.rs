//! Explicit VR Little Endian syntax transfer implementation

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{
    decode_explicit_header, decode_item_header_with, BasicDecode, Decode, ReadTagSnafu, Result,
};
use dicomset_core::header::{DataElementHeader, SequenceItemHeader, Tag};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR Little Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRLittleEndianDecoder {
    basic: LittleEndianBasicDecoder,
}

impl Decode for ExplicitVRLittleEndianDecoder {
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
    use super::ExplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dicomset_core::header::{HasLength, Header, Length, Tag, VR};
    use std::io::{Cursor, Read, Seek};

    // manually crafting some DICOM data elements
    //  Tag: (0010,0020) Patient ID
    //  VR: LO
    //  Length: 8
    //  Value: "7DkT2Tp " (with 1 padding space)
    // --
    //  Tag: (0009,1001) private
    //  VR: OB
    //  Reserved bytes: 0x0000
    //  Length: 4
    //  Value: [0x30, 0x20, 0x31, 0x00]
    // --
    //  Tag: (0011,0011) private
    //  VR: "XY" (unknown)
    //  Reserved bytes: 0x0000
    //  Length: 2
    //  Value: [0xAB, 0xCD]
    const RAW: &[u8] = &[
        0x10, 0x00, 0x20, 0x00, b'L', b'O', 0x08, 0x00, b'7', b'D', b'k', b'T', b'2', b'T', b'p',
        b' ', 0x09, 0x00, 0x01, 0x10, b'O', b'B', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x30, 0x20,
        0x31, 0x00, 0x11, 0x00, 0x11, 0x00, b'X', b'Y', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0xAB,
        0xCD,
    ];

    #[test]
    fn decode_data_elements() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0010, 0x0020));
            assert_eq!(elem.vr(), VR::LO);
            assert_eq!(elem.length(), Length(8));
            assert_eq!(bytes_read, 8);
            let mut buffer = [0; 8];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(&buffer, b"7DkT2Tp ");
        }
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0009, 0x1001));
            assert_eq!(elem.vr(), VR::OB);
            assert_eq!(elem.length(), Length(4));
            assert_eq!(bytes_read, 12);
            let mut buffer = [0; 4];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(buffer, [0x30, 0x20, 0x31, 0x00]);
        }
        {
            // unknown VR is read as UN with a long length
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0011, 0x0011));
            assert_eq!(elem.vr(), VR::UN);
            assert_eq!(elem.length(), Length(2));
            assert_eq!(bytes_read, 12);
        }
        assert_eq!(cursor.stream_position().unwrap(), 44);
    }

    // manually crafting some DICOM sequence/item delimiters
    //  Tag: (0008,1115) Referenced Series Sequence
    //  VR: SQ
    //  Reserved bytes: 0x0000
    //  Length: 0xFFFF_FFFF
    // --
    //  Tag: (FFFE,E000) Item
    //  Length: 0xFFFF_FFFF (unspecified)
    // --
    //  Tag: (FFFE,E00D) Item Delimitation Item
    //  Length: 0
    // --
    //  Tag: (FFFE,E0DD) Sequence Delimitation Item
    //  Length: 0
    // --
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x00,
        0xE0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xFF,
        0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element header");
            assert_eq!(elem.tag(), Tag(0x0008, 0x1115));
            assert_eq!(elem.vr(), VR::SQ);
            assert!(elem.length().is_undefined());
            assert_eq!(bytes_read, 12);
        }
        {
            let elem = dec
                .decode_item_header(&mut cursor)
                .expect("should find an item header");
            assert!(elem.is_item());
            assert!(elem.length().is_undefined());
        }
        assert_eq!(cursor.stream_position().unwrap(), 20);
        {
            // delimiters also come out of the element header decoder, as UN
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an item delimiter");
            assert_eq!(elem.tag(), Tag::ITEM_DELIMITER);
            assert_eq!(elem.vr(), VR::UN);
            assert_eq!(elem.length(), Length(0));
            assert_eq!(bytes_read, 8);
        }
        {
            let elem = dec
                .decode_item_header(&mut cursor)
                .expect("should find a sequence delimiter");
            assert!(elem.is_sequence_delimiter());
        }
        assert_eq!(cursor.stream_position().unwrap(), 36);
    }

    #[test]
    fn truncated_header_fails() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(&RAW[..6]);
        assert!(dec.decode_header(&mut cursor).is_err());

        let mut cursor = Cursor::new(&RAW[..0]);
        let err = dec.decode_header(&mut cursor).unwrap_err();
        assert!(err.is_eof());
    }
}
