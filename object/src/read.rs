//! Reading DICOM data sets from a byte stream.
//!
//! The stream is expected to start with the `DICM` magic code,
//! optionally after a 128-byte preamble,
//! followed by the file meta group and the main data set
//! in the transfer syntax named by the meta group.
//!
//! The main data set is decoded by recursive descent:
//! each nested item is read with the length it declares,
//! or up to its delimiter when that length is undefined.
use crate::dataset::DataSet;
use crate::meta::{read_magic, read_meta_group};
use crate::{
    swap_words, CreateParserSnafu, Element, MissingTransferSyntaxSnafu, OpenFileSnafu, ReadError,
    ReadHeaderSnafu, ReadItemHeaderSnafu, ReadUnsupportedTransferSyntaxSnafu, ReadValueSnafu,
    SkipValueSnafu, UndefinedLengthSnafu, UnexpectedItemSnafu,
};
use dicomset_core::dictionary::DataDictionary;
use dicomset_core::header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
use dicomset_core::value::{PixelDataInfo, Value, C};
use dicomset_dictionary_std::{tags, StandardDataDictionary};
use dicomset_encoding::decode::{BasicDecode, Decode};
use dicomset_encoding::text::SpecificCharacterSet;
use dicomset_encoding::transfer_syntax::{Endianness, TransferSyntaxIndex};
use dicomset_parser::stateful::decode::{StatefulDecode, StatefulDecoder};
use dicomset_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ensure, OptionExt, ResultExt};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;
use tracing::{debug, warn};

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// A builder type for the options of reading a DICOM data set.
///
/// Filtering by tag only applies to the top level of the data set,
/// file meta group included.
/// Nested items are always read in full.
///
/// # Example
///
/// ```no_run
/// # use dicomset_object::{read_data_set_from_file, ReadOptions};
/// # use dicomset_dictionary_std::tags;
/// let data_set = read_data_set_from_file(
///     "0001.dcm",
///     ReadOptions::new()
///         .return_tags([tags::PATIENT_NAME, tags::STUDY_DATE])
///         .stop_at_tag(tags::PIXEL_DATA),
/// )?;
/// # Result::<(), dicomset_object::ReadError>::Ok(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReadOptions {
    drop_pixel_data: bool,
    return_tags: BTreeSet<Tag>,
    stop_at_tag: Option<Tag>,
}

impl ReadOptions {
    pub fn new() -> Self {
        ReadOptions::default()
    }

    /// Skip the value of the _Pixel Data_ element at any depth.
    ///
    /// The element is still present in the data set,
    /// with no frames.
    pub fn drop_pixel_data(mut self, drop: bool) -> Self {
        self.drop_pixel_data = drop;
        self
    }

    /// Only keep the top level elements with these tags.
    ///
    /// Calling this more than once adds to the set of tags.
    pub fn return_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.return_tags.extend(tags);
        self
    }

    /// Stop reading at the first top level element
    /// with a tag greater than or equal to the one given,
    /// which is not included.
    pub fn stop_at_tag(mut self, tag: Tag) -> Self {
        self.stop_at_tag = Some(tag);
        self
    }

    fn keeps(&self, tag: Tag) -> bool {
        self.return_tags.is_empty() || self.return_tags.contains(&tag)
    }

    fn stops_at(&self, tag: Tag) -> bool {
        self.stop_at_tag.map_or(false, |stop| tag >= stop)
    }
}

/// Read a DICOM data set from a file.
///
/// Data elements are resolved with the standard data dictionary
/// and transfer syntaxes with the default registry.
pub fn read_data_set_from_file<P>(path: P, options: ReadOptions) -> Result<DataSet>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).context(OpenFileSnafu { filename: path })?;
    read_data_set(file, options)
}

/// Read a DICOM data set from a byte source,
/// which must start at the preamble or at the `DICM` magic code.
///
/// The returned data set begins with the elements of the file meta group.
pub fn read_data_set<R>(source: R, options: ReadOptions) -> Result<DataSet>
where
    R: Read,
{
    read_data_set_with(
        source,
        options,
        &StandardDataDictionary,
        &TransferSyntaxRegistry,
    )
}

/// Read a DICOM data set from a byte source,
/// with the given data dictionary and transfer syntax index.
///
/// The dictionary resolves value representations
/// when the transfer syntax has implicit VR.
pub fn read_data_set_with<R, D, T>(
    source: R,
    options: ReadOptions,
    dict: &D,
    ts_index: &T,
) -> Result<DataSet>
where
    R: Read,
    D: DataDictionary,
    T: TransferSyntaxIndex + ?Sized,
{
    let mut source = BufReader::new(source);
    let position = read_magic(&mut source)?;
    let meta = read_meta_group(&mut source, position)?;

    let ts_uid = meta
        .elements
        .iter()
        .find(|e| e.tag() == tags::TRANSFER_SYNTAX_UID)
        .and_then(|e| e.string())
        .map(String::from)
        .context(MissingTransferSyntaxSnafu)?;
    let ts = ts_index
        .get(&ts_uid)
        .filter(|ts| ts.fully_supported())
        .context(ReadUnsupportedTransferSyntaxSnafu { uid: &ts_uid })?;
    debug!("Reading data set in {}", ts);

    let mut data_set = DataSet::new();
    for e in meta.elements {
        if options.stops_at(e.tag()) {
            return Ok(data_set);
        }
        if options.keeps(e.tag()) {
            data_set.push(e);
        }
    }

    let main: Box<dyn Read + '_> = Box::new(Cursor::new(meta.leftover).chain(&mut source));
    let main = match ts.data_adapter() {
        Some(adapter) => adapter.adapt_reader(main),
        None => main,
    };
    let parser = StatefulDecoder::new_with(
        BufReader::new(main),
        ts,
        dict,
        SpecificCharacterSet::Default,
    )
    .context(CreateParserSnafu)?
    .with_position(meta.position);

    let mut reader = DataSetReader {
        parser,
        options: &options,
        big_endian: ts.endianness() == Endianness::Big,
    };
    reader.read_root(&mut data_set)?;
    Ok(data_set)
}

/// Recursive reader of the main data set.
struct DataSetReader<'o, P> {
    parser: P,
    options: &'o ReadOptions,
    /// whether OW pixel data must be swapped to little endian
    big_endian: bool,
}

impl<'o, D, S, BD> DataSetReader<'o, StatefulDecoder<D, S, BD>>
where
    D: Decode,
    S: BufRead,
    BD: BasicDecode,
{
    /// Read top level elements until the end of the stream,
    /// or until the stop tag.
    fn read_root(&mut self, data_set: &mut DataSet) -> Result<()> {
        loop {
            if self.parser.is_at_end().context(ReadHeaderSnafu)? {
                return Ok(());
            }
            let header = self.parser.decode_header().context(ReadHeaderSnafu)?;
            let tag = header.tag;
            match tag {
                Tag::ITEM => {
                    return UnexpectedItemSnafu {
                        tag,
                        position: self.parser.position(),
                    }
                    .fail()
                }
                Tag::ITEM_DELIMITER | Tag::SEQUENCE_DELIMITER => {
                    warn!("Ignoring stray delimiter {} at top level", tag);
                    continue;
                }
                _ => {}
            }

            if self.options.stops_at(tag) {
                return Ok(());
            }
            let keep = self.options.keeps(tag);
            // the character set applies to the rest of the data set,
            // even if the element itself is not kept
            if !keep && tag != tags::SPECIFIC_CHARACTER_SET {
                self.skip_value(&header)?;
                continue;
            }
            let element = self.read_element(header)?;
            if keep {
                data_set.push(element);
            }
        }
    }

    fn read_element(&mut self, header: DataElementHeader) -> Result<Element> {
        let DataElementHeader { tag, vr, len } = header;
        if tag == Tag::PIXEL_DATA {
            return self.read_pixel_data(header);
        }

        if len.is_undefined() {
            ensure!(
                vr.admits_undefined_length(),
                UndefinedLengthSnafu {
                    tag,
                    vr,
                    position: self.parser.position(),
                }
            );
            if vr != VR::SQ {
                warn!("Reading {} element {} of undefined length as a sequence", vr, tag);
            }
            let items = self.read_items(tag, len)?;
            return Ok(Element::new(tag, VR::SQ, Value::Sequence { items, size: len }));
        }
        if vr == VR::SQ {
            let items = self.read_items(tag, len)?;
            return Ok(Element::new(tag, VR::SQ, Value::Sequence { items, size: len }));
        }

        let value = self
            .parser
            .read_value(&header)
            .context(ReadValueSnafu { tag })?;
        let vr = if vr.value_kind().admits(&value) {
            vr
        } else {
            VR::UN
        };
        Ok(Element::new(tag, vr, value))
    }

    /// Read the items of a sequence,
    /// up to `len` bytes or to the sequence delimiter.
    fn read_items(&mut self, tag: Tag, len: Length) -> Result<C<DataSet>> {
        let mut items: C<DataSet> = C::new();
        let start = self.parser.position();
        loop {
            if let Some(len) = len.get() {
                let consumed = self.parser.position() - start;
                if consumed >= u64::from(len) {
                    if consumed > u64::from(len) {
                        warn!(
                            "Items of sequence {} overran its length by {} bytes",
                            tag,
                            consumed - u64::from(len)
                        );
                    }
                    return Ok(items);
                }
            }

            let item_header = self
                .parser
                .decode_item_header()
                .context(ReadItemHeaderSnafu { tag })?;
            match item_header {
                SequenceItemHeader::Item { len: item_len } => {
                    let item = self.read_item(item_len)?;
                    items.push(item);
                }
                SequenceItemHeader::SequenceDelimiter => {
                    if len.is_defined() {
                        warn!("Sequence delimiter in sequence {} of defined length", tag);
                    }
                    return Ok(items);
                }
                SequenceItemHeader::ItemDelimiter => {
                    warn!("Ignoring stray item delimiter in sequence {}", tag);
                }
            }
        }
    }

    /// Read the elements of an item,
    /// up to `len` bytes or to the item delimiter.
    ///
    /// A character set declared in the item
    /// does not apply past its end.
    fn read_item(&mut self, len: Length) -> Result<DataSet> {
        let charset = self.parser.character_set();
        let item = self.read_item_elements(len);
        self.parser.set_character_set(charset);
        item
    }

    fn read_item_elements(&mut self, len: Length) -> Result<DataSet> {
        let mut item = DataSet::new();
        let start = self.parser.position();
        loop {
            if let Some(len) = len.get() {
                if self.parser.position() - start >= u64::from(len) {
                    return Ok(item);
                }
            }

            let header = self.parser.decode_header().context(ReadHeaderSnafu)?;
            match header.tag {
                Tag::ITEM_DELIMITER => {
                    if len.is_defined() {
                        warn!("Item delimiter in item of defined length");
                    }
                    return Ok(item);
                }
                Tag::ITEM | Tag::SEQUENCE_DELIMITER => {
                    return UnexpectedItemSnafu {
                        tag: header.tag,
                        position: self.parser.position(),
                    }
                    .fail()
                }
                _ => {}
            }
            let element = self.read_element(header)?;
            item.push(element);
        }
    }

    fn read_pixel_data(&mut self, header: DataElementHeader) -> Result<Element> {
        let DataElementHeader { tag, vr, len } = header;
        let vr = match vr {
            VR::OB | VR::OW | VR::UN => vr,
            _ => {
                warn!("Pixel data with unexpected VR {}, reading as UN", vr);
                VR::UN
            }
        };

        if self.options.drop_pixel_data {
            self.skip_value(&header)?;
            let info = PixelDataInfo {
                encapsulated: len.is_undefined(),
                ..Default::default()
            };
            return Ok(Element::new(tag, vr, info));
        }

        if len.is_defined() {
            let mut data = self
                .parser
                .read_value_bytes(&header)
                .context(ReadValueSnafu { tag })?;
            if self.big_endian && vr == VR::OW {
                swap_words(&mut data);
            }
            return Ok(Element::new(tag, vr, PixelDataInfo::native(data)));
        }

        let mut offset_table = None;
        let mut fragments = Vec::new();
        // offset of the next fragment item from the first one
        let mut offset = 0_u64;
        loop {
            let item_header = self
                .parser
                .decode_item_header()
                .context(ReadItemHeaderSnafu { tag })?;
            match item_header {
                SequenceItemHeader::Item { len } => {
                    let n = len.get().context(UndefinedLengthSnafu {
                        tag: Tag::ITEM,
                        vr: VR::OB,
                        position: self.parser.position(),
                    })?;
                    if offset_table.is_none() {
                        let table = self
                            .parser
                            .read_offset_table(n)
                            .context(ReadValueSnafu { tag })?;
                        offset_table = Some(table);
                        continue;
                    }
                    let fragment = self
                        .parser
                        .read_value_bytes(&DataElementHeader::new(Tag::ITEM, VR::OB, len))
                        .context(ReadValueSnafu { tag })?;
                    fragments.push((offset, fragment));
                    offset += 8 + u64::from(n);
                }
                SequenceItemHeader::SequenceDelimiter => break,
                SequenceItemHeader::ItemDelimiter => {
                    warn!("Ignoring item delimiter in encapsulated pixel data");
                }
            }
        }

        let offset_table = offset_table.unwrap_or_default();
        let frames = group_fragments(&offset_table, fragments);
        Ok(Element::new(
            tag,
            vr,
            PixelDataInfo {
                encapsulated: true,
                offset_table,
                frames,
            },
        ))
    }

    fn skip_value(&mut self, header: &DataElementHeader) -> Result<()> {
        let tag = header.tag;
        debug!("Skipping element {}", tag);
        match header.len.get() {
            Some(len) => self.parser.skip_bytes(len).context(SkipValueSnafu { tag }),
            None => self.skip_items(tag),
        }
    }

    /// Skip the items of a value of undefined length,
    /// up to its sequence delimiter.
    fn skip_items(&mut self, tag: Tag) -> Result<()> {
        loop {
            let item_header = self
                .parser
                .decode_item_header()
                .context(ReadItemHeaderSnafu { tag })?;
            match item_header {
                SequenceItemHeader::Item { len } => match len.get() {
                    Some(len) => self.parser.skip_bytes(len).context(SkipValueSnafu { tag })?,
                    None => loop {
                        let header = self.parser.decode_header().context(ReadHeaderSnafu)?;
                        if header.tag == Tag::ITEM_DELIMITER {
                            break;
                        }
                        self.skip_value(&header)?;
                    },
                },
                SequenceItemHeader::SequenceDelimiter => return Ok(()),
                SequenceItemHeader::ItemDelimiter => {
                    warn!("Ignoring stray item delimiter in {}", tag);
                }
            }
        }
    }
}

/// Group pixel data fragments into frames.
///
/// Each fragment comes with its offset from the first fragment item.
/// With a basic offset table,
/// a frame holds the fragments from its offset up to the next frame's.
/// Without one, each fragment is a frame.
fn group_fragments(offset_table: &[u32], fragments: Vec<(u64, Vec<u8>)>) -> Vec<Vec<u8>> {
    if offset_table.is_empty() {
        return fragments.into_iter().map(|(_, f)| f).collect();
    }
    let mut frames = vec![Vec::new(); offset_table.len()];
    for (offset, fragment) in fragments {
        let i = offset_table
            .iter()
            .rposition(|o| u64::from(*o) <= offset)
            .unwrap_or(0);
        frames[i].extend_from_slice(&fragment);
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomset_core::value::PrimitiveValue;
    use dicomset_dictionary_std::uids;

    /// explicit VR little endian element with a 2-byte length
    fn el(tag: Tag, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
        let mut out = tag_bytes(tag);
        out.extend_from_slice(vr);
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        out.extend_from_slice(value);
        out
    }

    /// explicit VR little endian header with a 4-byte length
    fn long_header(tag: Tag, vr: &[u8; 2], len: u32) -> Vec<u8> {
        let mut out = tag_bytes(tag);
        out.extend_from_slice(vr);
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&len.to_le_bytes());
        out
    }

    fn item(tag: Tag, len: u32) -> Vec<u8> {
        let mut out = tag_bytes(tag);
        out.extend_from_slice(&len.to_le_bytes());
        out
    }

    fn tag_bytes(tag: Tag) -> Vec<u8> {
        let mut out = tag.0.to_le_bytes().to_vec();
        out.extend_from_slice(&tag.1.to_le_bytes());
        out
    }

    /// a DICOM stream without preamble nor group length
    fn dicom_stream(ts: &str, body: &[u8]) -> Vec<u8> {
        let mut uid = ts.as_bytes().to_vec();
        if uid.len() % 2 == 1 {
            uid.push(0);
        }
        let mut out = b"DICM".to_vec();
        out.extend(el(tags::TRANSFER_SYNTAX_UID, b"UI", &uid));
        out.extend_from_slice(body);
        out
    }

    fn read(bytes: &[u8], options: ReadOptions) -> Result<DataSet> {
        read_data_set(bytes, options)
    }

    #[test]
    fn nested_sequences_of_undefined_length() {
        let mut body = el(tags::PATIENT_ID, b"LO", b"7DkT2Tp ");
        // sequence of undefined length with an item of undefined length
        body.extend(long_header(tags::REFERENCED_SERIES_SEQUENCE, b"SQ", 0xFFFF_FFFF));
        body.extend(item(Tag::ITEM, 0xFFFF_FFFF));
        body.extend(el(tags::SERIES_INSTANCE_UID, b"UI", b"1.2.3\0"));
        // a nested sequence of defined length, with one item of defined length
        let inner = el(tags::REFERENCED_SOP_CLASS_UID, b"UI", b"1.2\0");
        body.extend(long_header(tags::REFERENCED_STUDY_SEQUENCE, b"SQ", 8 + inner.len() as u32));
        body.extend(item(Tag::ITEM, inner.len() as u32));
        body.extend(&inner);
        body.extend(item(Tag::ITEM_DELIMITER, 0));
        body.extend(item(Tag::SEQUENCE_DELIMITER, 0));
        body.extend(el(tags::MODALITY, b"CS", b"CT"));

        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);
        let ds = read(&bytes, ReadOptions::new()).unwrap();

        let tags: Vec<_> = ds.iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags,
            vec![
                tags::TRANSFER_SYNTAX_UID,
                tags::PATIENT_ID,
                tags::REFERENCED_SERIES_SEQUENCE,
                tags::MODALITY,
            ]
        );
        assert_eq!(ds.element(tags::PATIENT_ID).unwrap().string(), Some("7DkT2Tp"));

        let seq = ds.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
        assert!(matches!(seq.value(), Value::Sequence { size, .. } if size.is_undefined()));
        let items = seq.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].len(), 2);
        assert_eq!(
            items[0].element(tags::SERIES_INSTANCE_UID).unwrap().string(),
            Some("1.2.3")
        );
        let inner_items = items[0]
            .element(tags::REFERENCED_STUDY_SEQUENCE)
            .unwrap()
            .items()
            .unwrap();
        assert_eq!(inner_items.len(), 1);
        assert_eq!(
            inner_items[0]
                .element(tags::REFERENCED_SOP_CLASS_UID)
                .unwrap()
                .string(),
            Some("1.2")
        );
        assert_eq!(ds.element(tags::MODALITY).unwrap().string(), Some("CT"));
    }

    #[test]
    fn character_set_of_item_ends_with_it() {
        let mut body = el(tags::SPECIFIC_CHARACTER_SET, b"CS", b"ISO_IR 100");
        body.extend(long_header(tags::REFERENCED_SERIES_SEQUENCE, b"SQ", 0xFFFF_FFFF));
        body.extend(item(Tag::ITEM, 0xFFFF_FFFF));
        body.extend(el(tags::SPECIFIC_CHARACTER_SET, b"CS", b"ISO_IR 192"));
        body.extend(el(tags::PATIENT_NAME, b"PN", b"Jos\xC3\xA9 "));
        body.extend(item(Tag::ITEM_DELIMITER, 0));
        body.extend(item(Tag::SEQUENCE_DELIMITER, 0));
        // latin-1 again
        body.extend(el(tags::PATIENT_NAME, b"PN", b"Jos\xE9"));

        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);
        let ds = read(&bytes, ReadOptions::new()).unwrap();

        let items = ds
            .element(tags::REFERENCED_SERIES_SEQUENCE)
            .unwrap()
            .items()
            .unwrap();
        assert_eq!(items[0].element(tags::PATIENT_NAME).unwrap().string(), Some("José"));
        assert_eq!(ds.element(tags::PATIENT_NAME).unwrap().string(), Some("José"));
    }

    #[test]
    fn preamble_is_detected() {
        let body = el(tags::MODALITY, b"CS", b"MR");
        let mut bytes = vec![0xAB; 128];
        bytes.extend(dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body));
        let ds = read(&bytes, ReadOptions::new()).unwrap();
        assert_eq!(ds.element(tags::MODALITY).unwrap().string(), Some("MR"));
    }

    #[test]
    fn not_dicom() {
        let bytes = vec![0_u8; 200];
        assert!(matches!(
            read(&bytes, ReadOptions::new()),
            Err(ReadError::NotDicom { .. })
        ));
    }

    #[test]
    fn unsupported_transfer_syntax() {
        let bytes = dicom_stream("1.2.3.4.5.6", &[]);
        match read(&bytes, ReadOptions::new()) {
            Err(ReadError::ReadUnsupportedTransferSyntax { uid, .. }) => {
                assert_eq!(uid, "1.2.3.4.5.6")
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn implicit_vr_uses_dictionary() {
        let mut body = tag_bytes(tags::ROWS);
        body.extend_from_slice(&2_u32.to_le_bytes());
        body.extend_from_slice(&512_u16.to_le_bytes());
        body.extend(tag_bytes(Tag(0x0009, 0x1001)));
        body.extend_from_slice(&2_u32.to_le_bytes());
        body.extend_from_slice(&[1, 2]);

        let bytes = dicom_stream(uids::IMPLICIT_VR_LITTLE_ENDIAN, &body);
        let ds = read(&bytes, ReadOptions::new()).unwrap();
        let rows = ds.element(tags::ROWS).unwrap();
        assert_eq!(rows.vr(), VR::US);
        assert_eq!(rows.value().primitive(), Some(&PrimitiveValue::from(512_u16)));
        let private = ds.element(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(private.vr(), VR::UN);
        assert_eq!(private.value().primitive(), Some(&PrimitiveValue::from(vec![1_u8, 2])));
    }

    #[test]
    fn odd_numeric_length_degrades_to_un() {
        let body = el(tags::ROWS, b"US", &[1, 2, 3]);
        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);
        let ds = read(&bytes, ReadOptions::new()).unwrap();
        let rows = ds.element(tags::ROWS).unwrap();
        assert_eq!(rows.vr(), VR::UN);
        assert_eq!(rows.value().primitive(), Some(&PrimitiveValue::from(vec![1_u8, 2, 3])));
    }

    #[test]
    fn big_endian_ow_pixel_data_is_little_endian() {
        let mut bytes = dicom_stream(uids::EXPLICIT_VR_BIG_ENDIAN, &[]);
        // main data set in big endian
        bytes.extend_from_slice(&[0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0, 0, 0, 0, 0, 4]);
        bytes.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);

        let ds = read(&bytes, ReadOptions::new()).unwrap();
        let pixels = ds.element(Tag::PIXEL_DATA).unwrap().pixel_data().unwrap();
        assert!(!pixels.encapsulated);
        assert_eq!(pixels.frames, vec![vec![0x02, 0x01, 0x04, 0x03]]);
    }

    fn encapsulated_pixel_data(offset_table: &[u32], fragments: &[&[u8]]) -> Vec<u8> {
        let mut body = long_header(Tag::PIXEL_DATA, b"OB", 0xFFFF_FFFF);
        body.extend(item(Tag::ITEM, 4 * offset_table.len() as u32));
        for o in offset_table {
            body.extend_from_slice(&o.to_le_bytes());
        }
        for f in fragments {
            body.extend(item(Tag::ITEM, f.len() as u32));
            body.extend_from_slice(f);
        }
        body.extend(item(Tag::SEQUENCE_DELIMITER, 0));
        body
    }

    #[test]
    fn fragments_grouped_by_offset_table() {
        // frame 0: two fragments of 2 bytes, frame 1: one fragment
        let body = encapsulated_pixel_data(&[0, 20], &[&[1, 2], &[3, 4], &[5, 6]]);
        let bytes = dicom_stream(uids::JPEG_BASELINE8_BIT, &body);
        let ds = read(&bytes, ReadOptions::new()).unwrap();
        let pixels = ds.element(Tag::PIXEL_DATA).unwrap().pixel_data().unwrap();
        assert!(pixels.encapsulated);
        assert_eq!(pixels.offset_table, vec![0, 20]);
        assert_eq!(pixels.frames, vec![vec![1, 2, 3, 4], vec![5, 6]]);
    }

    #[test]
    fn fragments_without_offset_table_are_frames() {
        let body = encapsulated_pixel_data(&[], &[&[1, 2], &[3, 4], &[5, 6]]);
        let bytes = dicom_stream(uids::JPEG_BASELINE8_BIT, &body);
        let ds = read(&bytes, ReadOptions::new()).unwrap();
        let pixels = ds.element(Tag::PIXEL_DATA).unwrap().pixel_data().unwrap();
        assert!(pixels.offset_table.is_empty());
        assert_eq!(pixels.frames, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn drop_pixel_data_keeps_empty_element() {
        let mut body = encapsulated_pixel_data(&[], &[&[1, 2], &[3, 4]]);
        body.extend(long_header(Tag(0xFFFC, 0xFFFC), b"OB", 2));
        body.extend_from_slice(&[0, 0]);
        let bytes = dicom_stream(uids::JPEG_BASELINE8_BIT, &body);
        let ds = read(&bytes, ReadOptions::new().drop_pixel_data(true)).unwrap();
        let pixels = ds.element(Tag::PIXEL_DATA).unwrap().pixel_data().unwrap();
        assert!(pixels.encapsulated);
        assert!(pixels.frames.is_empty());
        // reading goes on after the skipped value
        assert!(ds.element(Tag(0xFFFC, 0xFFFC)).is_ok());
    }

    #[test]
    fn return_tags_and_stop_at_tag() {
        let mut body = el(tags::STUDY_DATE, b"DA", b"20200101");
        body.extend(long_header(tags::REFERENCED_SERIES_SEQUENCE, b"SQ", 0xFFFF_FFFF));
        body.extend(item(Tag::ITEM, 0xFFFF_FFFF));
        body.extend(el(tags::SERIES_INSTANCE_UID, b"UI", b"1.2.3\0"));
        body.extend(item(Tag::ITEM_DELIMITER, 0));
        body.extend(item(Tag::SEQUENCE_DELIMITER, 0));
        body.extend(el(tags::PATIENT_ID, b"LO", b"12"));
        body.extend(el(tags::ROWS, b"US", &[0, 2]));
        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);

        let ds = read(
            &bytes,
            ReadOptions::new().return_tags([tags::PATIENT_ID, tags::ROWS]),
        )
        .unwrap();
        let tags: Vec<_> = ds.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec![tags::PATIENT_ID, tags::ROWS]);

        let ds = read(&bytes, ReadOptions::new().stop_at_tag(tags::PATIENT_ID)).unwrap();
        let tags: Vec<_> = ds.iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags,
            vec![
                tags::TRANSFER_SYNTAX_UID,
                tags::STUDY_DATE,
                tags::REFERENCED_SERIES_SEQUENCE,
            ]
        );

        // stopping within the meta group
        let ds = read(&bytes, ReadOptions::new().stop_at_tag(Tag(0x0002, 0x0000))).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn truncated_value_reports_tag_and_position() {
        let mut body = el(tags::MODALITY, b"CS", b"CT");
        let mut truncated = el(tags::PATIENT_ID, b"LO", b"12345678");
        truncated.truncate(12);
        body.extend(truncated);
        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);

        let err = read(&bytes, ReadOptions::new()).unwrap_err();
        assert!(matches!(err, ReadError::ReadValue { .. }));
        assert_eq!(err.tag(), Some(tags::PATIENT_ID));
        // DICM (4) + transfer syntax (8 + 20) + modality (10) + header (8)
        assert_eq!(err.position(), Some(4 + 28 + 10 + 8));
    }

    #[test]
    fn truncated_header_is_an_error() {
        let mut body = el(tags::MODALITY, b"CS", b"CT");
        body.extend_from_slice(&[0x10, 0x00]);
        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);
        let err = read(&bytes, ReadOptions::new()).unwrap_err();
        assert!(matches!(err, ReadError::ReadHeader { .. }));
        assert_eq!(err.position(), Some(4 + 28 + 10));
    }

    #[test]
    fn undefined_length_on_text_is_an_error() {
        let body = long_header(tags::PATIENT_ID, b"UT", 0xFFFF_FFFF);
        let bytes = dicom_stream(uids::EXPLICIT_VR_LITTLE_ENDIAN, &body);
        assert!(matches!(
            read(&bytes, ReadOptions::new()),
            Err(ReadError::UndefinedLength { vr: VR::UT, .. })
        ));
    }

    #[test]
    fn group_fragments_policy() {
        let fragments = vec![(0, vec![1]), (10, vec![2]), (20, vec![3])];
        assert_eq!(
            group_fragments(&[], fragments.clone()),
            vec![vec![1], vec![2], vec![3]]
        );
        assert_eq!(group_fragments(&[0], fragments.clone()), vec![vec![1, 2, 3]]);
        assert_eq!(
            group_fragments(&[0, 10], fragments),
            vec![vec![1], vec![2, 3]]
        );
    }
}
