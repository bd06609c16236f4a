//! Reading and writing of the DICOM file meta group.
//!
//! The file meta group holds the elements of group `0002`,
//! always encoded in _Explicit VR Little Endian_
//! right after the `DICM` magic code.
//! Its _File Meta Information Group Length_ bounds the group when present.
use crate::dataset::DataSet;
use crate::{
    Element, InvalidValueSnafu, NotDicomSnafu, PrintElementSnafu, ReadError, ReadHeaderSnafu,
    ReadMetaGroupSnafu, ReadPreambleBytesSnafu, ReadValueSnafu, UndefinedLengthSnafu,
    ValueTooLongSnafu, WriteError, WriteMissingTransferSyntaxSnafu,
};
use dicomset_core::header::{Tag, VR};
use dicomset_core::value::{PrimitiveValue, Value};
use dicomset_dictionary_std::tags;
use dicomset_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use dicomset_encoding::text::SpecificCharacterSet;
use dicomset_parser::stateful::decode::{FileHeaderParser, StatefulDecode};
use dicomset_parser::stateful::encode::StatefulEncoder;
use snafu::{OptionExt, ResultExt};
use std::convert::TryFrom;
use std::io::{self, Read};
use tracing::warn;

/// The DICOM magic code.
pub const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

/// The value written to _File Meta Information Version_
/// when the data set does not provide one.
pub const FILE_META_INFORMATION_VERSION: [u8; 2] = [0x00, 0x01];

/// The outcome of reading the file meta group.
#[derive(Debug)]
pub(crate) struct MetaGroup {
    /// The meta group elements, in stream order.
    pub elements: Vec<Element>,
    /// Bytes already taken from the source
    /// which belong to the main data set.
    pub leftover: Vec<u8>,
    /// The stream position right after the meta group.
    pub position: u64,
}

/// Check for the `DICM` magic code,
/// with or without the 128-byte preamble before it.
///
/// Returns the stream position right after the magic code.
pub(crate) fn read_magic<R: Read>(source: &mut R) -> Result<u64, ReadError> {
    let mut buf = [0u8; 132];
    let n = read_up_to(source, &mut buf[..4]).context(ReadPreambleBytesSnafu)?;
    snafu::ensure!(n == 4, NotDicomSnafu);
    if buf[..4] == DICM_MAGIC_CODE {
        return Ok(4);
    }
    let n = read_up_to(source, &mut buf[4..]).context(ReadPreambleBytesSnafu)?;
    snafu::ensure!(n == 128 && buf[128..] == DICM_MAGIC_CODE, NotDicomSnafu);
    Ok(132)
}

/// Read the file meta group,
/// starting at the given stream position.
///
/// The group ends after the number of bytes
/// announced by its group length element,
/// or otherwise at the first element outside group `0002`.
pub(crate) fn read_meta_group<R: Read>(source: &mut R, start: u64) -> Result<MetaGroup, ReadError> {
    let mut elements = Vec::new();
    let mut position = start;
    let mut group_end: Option<u64> = None;
    let mut leftover = Vec::new();

    loop {
        if let Some(end) = group_end {
            if position >= end {
                if position > end {
                    warn!(
                        "File meta group overran its group length by {} bytes",
                        position - end
                    );
                }
                break;
            }
        }

        // peek the tag group to see whether the meta group goes on
        let mut tag_bytes = [0u8; 4];
        let n = read_up_to(source, &mut tag_bytes).context(ReadMetaGroupSnafu)?;
        if n < 4 || u16::from_le_bytes([tag_bytes[0], tag_bytes[1]]) != 0x0002 {
            if group_end.is_some() {
                warn!("File meta group ended before its group length");
            }
            leftover.extend_from_slice(&tag_bytes[..n]);
            break;
        }

        let mut parser =
            FileHeaderParser::file_header_parser((&tag_bytes[..]).chain(&mut *source))
                .with_position(position);
        let header = parser.decode_header().context(ReadHeaderSnafu)?;
        if header.len.is_undefined() {
            return UndefinedLengthSnafu {
                tag: header.tag,
                vr: header.vr,
                position: parser.position(),
            }
            .fail();
        }
        let value = parser
            .read_value(&header)
            .context(ReadValueSnafu { tag: header.tag })?;
        position = parser.position();

        if header.tag == tags::FILE_META_INFORMATION_GROUP_LENGTH {
            match &value {
                PrimitiveValue::U32(v) if v.len() == 1 => {
                    group_end = Some(position + u64::from(v[0]));
                }
                _ => warn!("Ignoring malformed file meta group length {:?}", value),
            }
        }

        let vr = if header.vr.value_kind().admits(&value) {
            header.vr
        } else {
            VR::UN
        };
        elements.push(Element::new(header.tag, vr, value));
    }

    Ok(MetaGroup {
        elements,
        leftover,
        position,
    })
}

/// Read into `buf` until it is full or the source reaches its end,
/// returning the number of bytes read.
pub(crate) fn read_up_to<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match source.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Collect the file meta group elements to write for the given data set,
/// sorted by tag and without the group length element.
///
/// Missing _File Meta Information Version_,
/// _Implementation Class UID_ and _Implementation Version Name_
/// are filled in with this implementation's values.
/// The _Media Storage SOP Class/Instance UID_
/// fall back to the _SOP Class/Instance UID_ of the main data set.
pub fn meta_group_elements(data_set: &DataSet) -> Result<Vec<Element>, WriteError> {
    let mut elements: Vec<Element> = Vec::new();
    for e in data_set.meta_elements() {
        if e.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH {
            continue;
        }
        if elements.iter().any(|o| o.tag() == e.tag()) {
            warn!("Ignoring duplicate file meta element {}", e.tag());
            continue;
        }
        elements.push(e.clone());
    }

    snafu::ensure!(
        elements
            .iter()
            .any(|e| e.tag() == tags::TRANSFER_SYNTAX_UID),
        WriteMissingTransferSyntaxSnafu
    );

    let mut fill = |tag: Tag, make: &dyn Fn() -> Option<Element>| {
        if !elements.iter().any(|e| e.tag() == tag) {
            match make() {
                Some(e) => elements.push(e),
                None => warn!("File meta element {} is missing", tag),
            }
        }
    };
    fill(tags::FILE_META_INFORMATION_VERSION, &|| {
        Some(Element::new(
            tags::FILE_META_INFORMATION_VERSION,
            VR::OB,
            PrimitiveValue::from(FILE_META_INFORMATION_VERSION.to_vec()),
        ))
    });
    fill(tags::MEDIA_STORAGE_SOP_CLASS_UID, &|| {
        fallback_uid(data_set, tags::SOP_CLASS_UID, tags::MEDIA_STORAGE_SOP_CLASS_UID)
    });
    fill(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, &|| {
        fallback_uid(
            data_set,
            tags::SOP_INSTANCE_UID,
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
        )
    });
    fill(tags::IMPLEMENTATION_CLASS_UID, &|| {
        Some(Element::new(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            crate::IMPLEMENTATION_CLASS_UID,
        ))
    });
    fill(tags::IMPLEMENTATION_VERSION_NAME, &|| {
        Some(Element::new(
            tags::IMPLEMENTATION_VERSION_NAME,
            VR::SH,
            crate::IMPLEMENTATION_VERSION_NAME,
        ))
    });

    elements.sort_by_key(|e| e.tag());
    Ok(elements)
}

fn fallback_uid(data_set: &DataSet, from: Tag, to: Tag) -> Option<Element> {
    let uid = data_set.element(from).ok()?.string()?;
    Some(Element::new(to, VR::UI, uid))
}

/// Encode the file meta group of the given data set,
/// led by a recomputed group length element.
///
/// Returns the encoded bytes
/// and the transfer syntax UID of the main data set.
pub(crate) fn encode_meta_group(data_set: &DataSet) -> Result<(Vec<u8>, String), WriteError> {
    let elements = meta_group_elements(data_set)?;
    let ts_uid = elements
        .iter()
        .find(|e| e.tag() == tags::TRANSFER_SYNTAX_UID)
        .and_then(|e| e.string())
        .map(String::from)
        .context(WriteMissingTransferSyntaxSnafu)?;

    let mut body = StatefulEncoder::new(
        Vec::new(),
        ExplicitVRLittleEndianEncoder::default(),
        SpecificCharacterSet::Default,
    );
    for e in &elements {
        let (tag, vr) = (e.tag(), e.vr());
        match e.value() {
            Value::Primitive(value) if e.validate().is_ok() => {
                body.encode_primitive_element(tag, vr, value)
                    .context(PrintElementSnafu { tag })?;
            }
            _ => {
                return InvalidValueSnafu {
                    tag,
                    vr,
                    expected: vr.value_kind(),
                }
                .fail()
            }
        }
    }
    let body = body.into_inner();
    let group_length = u32::try_from(body.len()).ok().context(ValueTooLongSnafu {
        tag: tags::FILE_META_INFORMATION_GROUP_LENGTH,
        len: body.len(),
    })?;

    let tag = tags::FILE_META_INFORMATION_GROUP_LENGTH;
    let mut out = StatefulEncoder::new(
        Vec::with_capacity(body.len() + 12),
        ExplicitVRLittleEndianEncoder::default(),
        SpecificCharacterSet::Default,
    );
    out.encode_primitive_element(tag, VR::UL, &PrimitiveValue::from(group_length))
        .context(PrintElementSnafu { tag })?;
    out.write_raw_bytes(&body)
        .context(PrintElementSnafu { tag })?;
    Ok((out.into_inner(), ts_uid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_element;
    use dicomset_dictionary_std::uids;

    // (0002,0000) UL 42, (0002,0001) OB [00 01], (0002,0010) UI explicit VR LE,
    // followed by the start of the main data set
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x2A, 0x00, 0x00, 0x00,
        // (0002,0001)
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // (0002,0010) len 20
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, b'1', b'.', b'2', b'.', b'8', b'4', b'0',
        b'.', b'1', b'0', b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
        // (0008,0060) begins the main data set
        0x08, 0x00, 0x60, 0x00,
    ];

    #[test]
    fn magic_code_with_and_without_preamble() {
        let mut with_preamble = vec![0u8; 128];
        with_preamble.extend_from_slice(b"DICM");
        assert_eq!(read_magic(&mut with_preamble.as_slice()).unwrap(), 132);

        assert_eq!(read_magic(&mut &b"DICM"[..]).unwrap(), 4);

        let mut bad = vec![0u8; 132];
        assert!(matches!(
            read_magic(&mut bad.as_slice()),
            Err(ReadError::NotDicom { .. })
        ));
        bad.truncate(10);
        assert!(matches!(
            read_magic(&mut bad.as_slice()),
            Err(ReadError::NotDicom { .. })
        ));
    }

    #[test]
    fn meta_group_bounded_by_group_length() {
        let mut source = RAW;
        let meta = read_meta_group(&mut source, 132).unwrap();
        assert_eq!(meta.elements.len(), 3);
        assert_eq!(meta.position, 132 + 12 + 42);
        assert!(meta.leftover.is_empty());
        assert_eq!(source, &[0x08, 0x00, 0x60, 0x00]);

        let ts = &meta.elements[2];
        assert_eq!(ts.tag(), tags::TRANSFER_SYNTAX_UID);
        assert_eq!(ts.string(), Some(uids::EXPLICIT_VR_LITTLE_ENDIAN));
        assert_eq!(
            meta.elements[1].value().primitive(),
            Some(&PrimitiveValue::from(vec![0x00_u8, 0x01]))
        );
    }

    #[test]
    fn meta_group_without_group_length() {
        let mut source = &RAW[12..];
        let meta = read_meta_group(&mut source, 144).unwrap();
        assert_eq!(meta.elements.len(), 2);
        assert_eq!(meta.position, 144 + 42);
        // the tag of the next element was already consumed
        assert_eq!(meta.leftover, vec![0x08, 0x00, 0x60, 0x00]);
        assert!(source.is_empty());
    }

    #[test]
    fn meta_elements_are_completed_and_sorted() {
        let ds: DataSet = vec![
            new_element(tags::SOP_CLASS_UID, uids::CT_IMAGE_STORAGE).unwrap(),
            new_element(tags::SOP_INSTANCE_UID, "1.2.3").unwrap(),
            new_element(tags::TRANSFER_SYNTAX_UID, uids::IMPLICIT_VR_LITTLE_ENDIAN).unwrap(),
        ]
        .into();

        let meta = meta_group_elements(&ds).unwrap();
        let tags: Vec<_> = meta.iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags,
            vec![
                tags::FILE_META_INFORMATION_VERSION,
                tags::MEDIA_STORAGE_SOP_CLASS_UID,
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
                tags::TRANSFER_SYNTAX_UID,
                tags::IMPLEMENTATION_CLASS_UID,
                tags::IMPLEMENTATION_VERSION_NAME,
            ]
        );
        assert_eq!(meta[1].string(), Some(uids::CT_IMAGE_STORAGE));
        assert_eq!(meta[2].string(), Some("1.2.3"));
        assert_eq!(meta[5].string(), Some(crate::IMPLEMENTATION_VERSION_NAME));
    }

    #[test]
    fn meta_group_requires_transfer_syntax() {
        let ds: DataSet = vec![new_element(tags::SOP_INSTANCE_UID, "1.2.3").unwrap()].into();
        assert!(matches!(
            meta_group_elements(&ds),
            Err(WriteError::WriteMissingTransferSyntax { .. })
        ));
    }

    #[test]
    fn encoded_group_length_matches() {
        let ds: DataSet = vec![
            new_element(tags::TRANSFER_SYNTAX_UID, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap(),
            new_element(tags::MEDIA_STORAGE_SOP_CLASS_UID, uids::MR_IMAGE_STORAGE).unwrap(),
            new_element(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, "1.2.3.4").unwrap(),
        ]
        .into();
        let (bytes, ts) = encode_meta_group(&ds).unwrap();
        assert_eq!(ts, uids::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(&bytes[..8], &[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]);
        let group_length = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        assert_eq!(group_length as usize, bytes.len() - 12);

        // reading it back yields the same elements
        let meta = read_meta_group(&mut bytes.as_slice(), 0).unwrap();
        assert_eq!(meta.position as usize, bytes.len());
        assert_eq!(meta.elements.len(), 7);
        assert_eq!(&meta.elements[1..], &meta_group_elements(&ds).unwrap()[..]);
    }
}
