//! This module provides implementations for basic encoders: little endian and big endian.
//!

use super::BasicEncode;
use byteordered::{ByteOrdered, Endianness};
use std::io::{Result, Write};

macro_rules! impl_basic_encode {
    ($t: ty, $endianness: expr, $ctor: ident) => {
        impl BasicEncode for $t {
            fn endianness(&self) -> Endianness {
                $endianness
            }

            fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_u16(value)
            }

            fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_u32(value)
            }

            fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_u64(value)
            }

            fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_i16(value)
            }

            fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_i32(value)
            }

            fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_i64(value)
            }

            fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_f32(value)
            }

            fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ctor(to).write_f64(value)
            }
        }
    };
}

/// A basic encoder of primitive elements in little endian.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LittleEndianBasicEncoder;

impl_basic_encode!(LittleEndianBasicEncoder, Endianness::Little, le);

/// A basic encoder of primitive elements in big endian.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct BigEndianBasicEncoder;

impl_basic_encode!(BigEndianBasicEncoder, Endianness::Big, be);

/// A basic encoder with support for both Little Endian an Big Endian
/// encoding, decided at run-time. Since only two values are possible,
/// this enum may become more efficient than the use of a trait object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BasicEncoder {
    /// Encode in Little Endian
    LE(LittleEndianBasicEncoder),
    /// Encode in Big Endian
    BE(BigEndianBasicEncoder),
}

impl BasicEncoder {
    /// Create a basic encoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => BasicEncoder::LE(LittleEndianBasicEncoder),
            Endianness::Big => BasicEncoder::BE(BigEndianBasicEncoder),
        }
    }
}

impl From<Endianness> for BasicEncoder {
    fn from(endianness: Endianness) -> Self {
        BasicEncoder::new(endianness)
    }
}

macro_rules! for_both {
    ($s: expr, |$e: ident| $f: expr) => {
        match *$s {
            BasicEncoder::LE(ref $e) => $f,
            BasicEncoder::BE(ref $e) => $f,
        }
    };
}

impl BasicEncode for BasicEncoder {
    fn endianness(&self) -> Endianness {
        for_both!(self, |e| e.endianness())
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_us(to, value))
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ul(to, value))
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_uv(to, value))
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ss(to, value))
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sl(to, value))
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sv(to, value))
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fl(to, value))
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fd(to, value))
    }
}
