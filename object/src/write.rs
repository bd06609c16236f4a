//! Writing DICOM data sets to a byte stream.
//!
//! A data set is written as a DICOM file:
//! the preamble, the `DICM` magic code,
//! the file meta group with a recomputed group length,
//! and then the main data set
//! in the transfer syntax named by its _Transfer Syntax UID_.
//!
//! Value lengths are always derived from the current values,
//! so that elements can be freely replaced before writing.
use crate::dataset::DataSet;
use crate::meta::{encode_meta_group, DICM_MAGIC_CODE};
use crate::{
    swap_words, CreatePrinterSnafu, Element, InvalidValueSnafu, PixelDataMismatchSnafu,
    PrintElementSnafu, ValueTooLongSnafu, WriteDataSetSnafu, WriteError, WriteFileSnafu,
    WriteMagicCodeSnafu, WriteMetaGroupSnafu, WritePreambleSnafu,
    WriteUnsupportedTransferSyntaxSnafu,
};
use dicomset_core::header::{DataElementHeader, Length, Tag, VR};
use dicomset_core::value::{PixelDataInfo, Value};
use dicomset_encoding::encode::DataElementEncoder;
use dicomset_encoding::text::SpecificCharacterSet;
use dicomset_encoding::transfer_syntax::{Endianness, TransferSyntax, TransferSyntaxIndex};
use dicomset_parser::stateful::encode::StatefulEncoder;
use dicomset_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ensure, OptionExt, ResultExt};
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub type Result<T, E = WriteError> = std::result::Result<T, E>;

/// How sequences and their items are delimited when written.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SequenceLength {
    /// Undefined length, closed by item and sequence delimiters.
    #[default]
    Undefined,
    /// Explicit lengths computed from the encoded items.
    Defined,
}

/// A builder type for the options of writing a DICOM data set.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    sequence_length: SequenceLength,
    preamble: [u8; 128],
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            sequence_length: SequenceLength::Undefined,
            preamble: [0; 128],
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        WriteOptions::default()
    }

    /// Set how sequences are delimited.
    pub fn sequence_length(mut self, sequence_length: SequenceLength) -> Self {
        self.sequence_length = sequence_length;
        self
    }

    /// Set the 128 bytes written before the magic code.
    /// They are all zeros by default.
    pub fn preamble(mut self, preamble: [u8; 128]) -> Self {
        self.preamble = preamble;
        self
    }
}

/// Write a data set to a new DICOM file at the given path.
pub fn write_data_set_to_file<P>(path: P, data_set: &DataSet) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).context(WriteFileSnafu { filename: path })?;
    let mut to = BufWriter::new(file);
    write_data_set(&mut to, data_set)?;
    to.flush().context(WriteFileSnafu { filename: path })
}

/// Write a data set as a DICOM file to the given writer,
/// with the default options and transfer syntax registry.
pub fn write_data_set<W>(to: W, data_set: &DataSet) -> Result<()>
where
    W: Write,
{
    write_data_set_with(to, data_set, WriteOptions::default(), &TransferSyntaxRegistry)
}

/// Write a data set as a DICOM file to the given writer.
///
/// The main data set is encoded in the transfer syntax
/// named by the data set's _Transfer Syntax UID_,
/// resolved through the given index.
/// Elements of group `0002` only go to the file meta group.
pub fn write_data_set_with<W, T>(
    mut to: W,
    data_set: &DataSet,
    options: WriteOptions,
    ts_index: &T,
) -> Result<()>
where
    W: Write,
    T: TransferSyntaxIndex + ?Sized,
{
    let (meta, ts_uid) = encode_meta_group(data_set)?;
    let ts = ts_index
        .get(&ts_uid)
        .filter(|ts| ts.fully_supported())
        .context(WriteUnsupportedTransferSyntaxSnafu { uid: &ts_uid })?;
    debug!("Writing data set in {}", ts);

    to.write_all(&options.preamble)
        .context(WritePreambleSnafu)?;
    to.write_all(&DICM_MAGIC_CODE)
        .context(WriteMagicCodeSnafu)?;
    to.write_all(&meta).context(WriteMetaGroupSnafu)?;

    let elements = data_set.iter().filter(|e| !e.tag().is_meta());
    match ts.data_adapter() {
        Some(adapter) => {
            let mut body = Vec::new();
            write_elements(&mut body, elements, ts, &options)?;
            let mut adapted = Vec::new();
            {
                let mut writer = adapter.adapt_writer(Box::new(&mut adapted));
                writer.write_all(&body).context(WriteDataSetSnafu)?;
            }
            to.write_all(&adapted).context(WriteDataSetSnafu)?;
        }
        None => write_elements(&mut to, elements, ts, &options)?,
    }
    to.flush().context(WriteDataSetSnafu)
}

/// Encode the given elements in a transfer syntax,
/// starting with the default character set.
fn write_elements<'e, W, I>(
    to: W,
    elements: I,
    ts: &TransferSyntax,
    options: &WriteOptions,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'e Element>,
{
    let printer = StatefulEncoder::new_with(to, ts, SpecificCharacterSet::Default)
        .context(CreatePrinterSnafu)?;
    let mut writer = DataSetWriter {
        printer,
        ts,
        options,
    };
    for e in elements {
        writer.write_element(e)?;
    }
    Ok(())
}

fn checked_len(tag: Tag, len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|len| *len != u32::MAX)
        .context(ValueTooLongSnafu { tag, len })
}

/// Recursive writer of data set elements.
struct DataSetWriter<'a, W> {
    printer: StatefulEncoder<W, DataElementEncoder>,
    ts: &'a TransferSyntax,
    options: &'a WriteOptions,
}

impl<'a, W> DataSetWriter<'a, W>
where
    W: Write,
{
    fn write_element(&mut self, element: &Element) -> Result<()> {
        let (tag, vr) = (element.tag(), element.vr());
        element
            .validate()
            .map_err(|expected| InvalidValueSnafu { tag, vr, expected }.build())?;
        match element.value() {
            Value::Primitive(value) => self
                .printer
                .encode_primitive_element(tag, vr, value)
                .context(PrintElementSnafu { tag }),
            Value::Sequence { items, .. } => self.write_sequence(tag, items),
            Value::PixelData(info) => self.write_pixel_data(tag, vr, info),
        }
    }

    fn write_sequence(&mut self, tag: Tag, items: &[DataSet]) -> Result<()> {
        match self.options.sequence_length {
            SequenceLength::Undefined => {
                self.printer
                    .encode_element_header(DataElementHeader::new(tag, VR::SQ, Length::UNDEFINED))
                    .context(PrintElementSnafu { tag })?;
                for item in items {
                    self.printer
                        .encode_item_header(Length::UNDEFINED.0)
                        .context(PrintElementSnafu { tag })?;
                    let charset = self.printer.character_set();
                    for e in item {
                        self.write_element(e)?;
                    }
                    self.printer.set_character_set(charset);
                    self.printer
                        .encode_item_delimiter()
                        .context(PrintElementSnafu { tag })?;
                }
                self.printer
                    .encode_sequence_delimiter()
                    .context(PrintElementSnafu { tag })
            }
            SequenceLength::Defined => {
                let encoded = items
                    .iter()
                    .map(|item| self.encode_item(item))
                    .collect::<Result<Vec<_>>>()?;
                let total = encoded.iter().map(|bytes| bytes.len() + 8).sum();
                let len = checked_len(tag, total)?;
                self.printer
                    .encode_element_header(DataElementHeader::new(tag, VR::SQ, Length(len)))
                    .context(PrintElementSnafu { tag })?;
                for bytes in &encoded {
                    let item_len = checked_len(tag, bytes.len())?;
                    self.printer
                        .encode_item_header(item_len)
                        .context(PrintElementSnafu { tag })?;
                    self.printer
                        .write_raw_bytes(bytes)
                        .context(PrintElementSnafu { tag })?;
                }
                Ok(())
            }
        }
    }

    /// Encode the elements of an item on their own,
    /// with the character set currently in effect.
    fn encode_item(&self, item: &DataSet) -> Result<Vec<u8>> {
        let printer = StatefulEncoder::new_with(Vec::new(), self.ts, self.printer.character_set())
            .context(CreatePrinterSnafu)?;
        let mut writer = DataSetWriter {
            printer,
            ts: self.ts,
            options: self.options,
        };
        for e in item {
            writer.write_element(e)?;
        }
        Ok(writer.printer.into_inner())
    }

    fn write_pixel_data(&mut self, tag: Tag, vr: VR, info: &PixelDataInfo) -> Result<()> {
        ensure!(
            info.encapsulated == self.ts.is_encapsulated_pixel_data(),
            PixelDataMismatchSnafu {
                encapsulated: info.encapsulated,
                uid: self.ts.uid(),
            }
        );

        if !info.encapsulated {
            let mut data = info.frames.concat();
            if vr == VR::OW && self.ts.endianness() == Endianness::Big {
                swap_words(&mut data);
            }
            let len = checked_len(tag, data.len() + data.len() % 2)?;
            self.printer
                .encode_element_header(DataElementHeader::new(tag, vr, Length(len)))
                .context(PrintElementSnafu { tag })?;
            return self
                .printer
                .write_bytes(&data)
                .context(PrintElementSnafu { tag });
        }

        // one fragment per frame, the offset table is only needed for several frames
        let mut offsets = Vec::new();
        if info.frames.len() > 1 {
            let mut offset = 0_usize;
            for frame in &info.frames {
                offsets.push(checked_len(tag, offset)?);
                offset += 8 + frame.len() + frame.len() % 2;
            }
        }

        self.printer
            .encode_element_header(DataElementHeader::new(tag, VR::OB, Length::UNDEFINED))
            .context(PrintElementSnafu { tag })?;
        self.printer
            .encode_item_header(checked_len(tag, offsets.len() * 4)?)
            .context(PrintElementSnafu { tag })?;
        self.printer
            .encode_offset_table(&offsets)
            .context(PrintElementSnafu { tag })?;
        for frame in &info.frames {
            self.printer
                .encode_item_header(checked_len(tag, frame.len())?)
                .context(PrintElementSnafu { tag })?;
            self.printer
                .write_bytes(frame)
                .context(PrintElementSnafu { tag })?;
        }
        self.printer
            .encode_sequence_delimiter()
            .context(PrintElementSnafu { tag })
    }
}
