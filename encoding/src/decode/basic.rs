//! This module provides implementations for primitive decoders of data, which
//! may be in either Little Endian or Big Endian.

use super::BasicDecode;
use byteordered::{ByteOrdered, Endianness};
use std::io::{Read, Result};

macro_rules! impl_basic_decode {
    ($t: ty, $endianness: expr, $ctor: ident) => {
        impl BasicDecode for $t {
            fn endianness(&self) -> Endianness {
                $endianness
            }

            fn decode_us<S>(&self, source: S) -> Result<u16>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_u16()
            }

            fn decode_us_into<S>(&self, source: S, dst: &mut [u16]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_u16_into(dst)
            }

            fn decode_ul<S>(&self, source: S) -> Result<u32>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_u32()
            }

            fn decode_ul_into<S>(&self, source: S, dst: &mut [u32]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_u32_into(dst)
            }

            fn decode_uv_into<S>(&self, source: S, dst: &mut [u64]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_u64_into(dst)
            }

            fn decode_ss_into<S>(&self, source: S, dst: &mut [i16]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_i16_into(dst)
            }

            fn decode_sl_into<S>(&self, source: S, dst: &mut [i32]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_i32_into(dst)
            }

            fn decode_sv_into<S>(&self, source: S, dst: &mut [i64]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_i64_into(dst)
            }

            fn decode_fl_into<S>(&self, source: S, dst: &mut [f32]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_f32_into(dst)
            }

            fn decode_fd_into<S>(&self, source: S, dst: &mut [f64]) -> Result<()>
            where
                S: Read,
            {
                ByteOrdered::$ctor(source).read_f64_into(dst)
            }
        }
    };
}

/// A basic decoder of DICOM primitive elements in little endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct LittleEndianBasicDecoder;

impl_basic_decode!(LittleEndianBasicDecoder, Endianness::Little, le);

/// A basic decoder of DICOM primitive elements in big endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct BigEndianBasicDecoder;

impl_basic_decode!(BigEndianBasicDecoder, Endianness::Big, be);

/// A basic decoder with support for both Little Endian an Big Endian
/// encoding, decided at run-time. Since only two values are possible,
/// this enum may become more efficient than the use of a trait object.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum BasicDecoder {
    /// Decode in Little Endian
    LE(LittleEndianBasicDecoder),
    /// Decode in Big Endian
    BE(BigEndianBasicDecoder),
}

impl BasicDecoder {
    /// Create a basic decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => BasicDecoder::LE(LittleEndianBasicDecoder),
            Endianness::Big => BasicDecoder::BE(BigEndianBasicDecoder),
        }
    }
}

impl From<Endianness> for BasicDecoder {
    fn from(endianness: Endianness) -> Self {
        BasicDecoder::new(endianness)
    }
}

macro_rules! for_both {
    ($s: expr, |$e: ident| $f: expr) => {
        match *$s {
            BasicDecoder::LE(ref $e) => $f,
            BasicDecoder::BE(ref $e) => $f,
        }
    };
}

impl BasicDecode for BasicDecoder {
    fn endianness(&self) -> Endianness {
        for_both!(self, |e| e.endianness())
    }

    fn decode_us<S>(&self, source: S) -> Result<u16>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_us(source))
    }

    fn decode_us_into<S>(&self, source: S, dst: &mut [u16]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_us_into(source, dst))
    }

    fn decode_ul<S>(&self, source: S) -> Result<u32>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_ul(source))
    }

    fn decode_ul_into<S>(&self, source: S, dst: &mut [u32]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_ul_into(source, dst))
    }

    fn decode_uv_into<S>(&self, source: S, dst: &mut [u64]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_uv_into(source, dst))
    }

    fn decode_ss_into<S>(&self, source: S, dst: &mut [i16]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_ss_into(source, dst))
    }

    fn decode_sl_into<S>(&self, source: S, dst: &mut [i32]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_sl_into(source, dst))
    }

    fn decode_sv_into<S>(&self, source: S, dst: &mut [i64]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_sv_into(source, dst))
    }

    fn decode_fl_into<S>(&self, source: S, dst: &mut [f32]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_fl_into(source, dst))
    }

    fn decode_fd_into<S>(&self, source: S, dst: &mut [f64]) -> Result<()>
    where
        S: Read,
    {
        for_both!(self, |e| e.decode_fd_into(source, dst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomset_core::Tag;

    #[test]
    fn decode_tag_in_both_orders() {
        let le = BasicDecoder::new(Endianness::Little);
        let be = BasicDecoder::new(Endianness::Big);
        assert_eq!(
            le.decode_tag(&[0x10, 0x00, 0x20, 0x00][..]).unwrap(),
            Tag(0x0010, 0x0020)
        );
        assert_eq!(
            be.decode_tag(&[0x00, 0x10, 0x00, 0x20][..]).unwrap(),
            Tag(0x0010, 0x0020)
        );
    }

    #[test]
    fn decode_numbers_into() {
        let data: &[u8] = &[0x01, 0x00, 0xFF, 0xFF];
        let mut out = [0u16; 2];
        LittleEndianBasicDecoder
            .decode_us_into(data, &mut out)
            .unwrap();
        assert_eq!(out, [1, 0xFFFF]);

        let mut out = [0i16; 2];
        BigEndianBasicDecoder.decode_ss_into(data, &mut out).unwrap();
        assert_eq!(out, [0x0100, -1]);

        let data: &[u8] = &[0x00, 0x00, 0x80, 0x3F];
        let mut out = [0f32; 1];
        LittleEndianBasicDecoder
            .decode_fl_into(data, &mut out)
            .unwrap();
        assert_eq!(out, [1.0]);
    }
}
