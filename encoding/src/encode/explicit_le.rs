//! Explicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{
    encode_explicit_header, encode_item_header_with, BasicEncode, Encode, Result, WritePrimitiveSnafu,
    WriteTagSnafu,
};
use dicomset_core::header::{DataElementHeader, Tag};
use dicomset_core::value::PrimitiveValue;
use snafu::ResultExt;
use std::io::Write;

/// A data element encoder for the Explicit VR Little Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl Encode for ExplicitVRLittleEndianEncoder {
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        self.basic.encode_tag(to, tag).context(WriteTagSnafu)
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        encode_explicit_header(&self.basic, to, de)
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
