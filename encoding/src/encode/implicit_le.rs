//! Implicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{
    encode_item_header_with, BasicEncode, Encode, Result, WriteLengthSnafu, WritePrimitiveSnafu,
    WriteTagSnafu,
};
use dicomset_core::header::{DataElementHeader, Tag};
use dicomset_core::value::PrimitiveValue;
use snafu::ResultExt;
use std::io::Write;

/// A data element encoder for the Implicit VR Little Endian transfer syntax.
///
/// The value representation of each element is not written.
#[derive(Debug, Default, Clone)]
pub struct ImplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl Encode for ImplicitVRLittleEndianEncoder {
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        self.basic.encode_tag(to, tag).context(WriteTagSnafu)
    }

    fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        self.encode_tag(&mut to, de.tag)?;
        self.basic
            .encode_ul(&mut to, de.len.0)
            .context(WriteLengthSnafu)?;
        Ok(8)
    }

    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        encode_item_header_with(&self.basic, to, len)
    }

    fn encode_primitive<W>(&self, to: W, value: &PrimitiveValue) -> Result<()>
    where
        W: Write,
    {
        self.basic
            .encode_primitive(to, value)
            .context(WritePrimitiveSnafu)
    }
}
