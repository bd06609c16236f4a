//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! A [`Value`] is a closed union over primitive values,
//! nested sequences of items, and pixel data.
//! Which variant is legal is decided by the element's value representation,
//! as described by [`ValueKind`].

use crate::header::{Length, Tag};
use smallvec::SmallVec;
use std::fmt;

pub mod range;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
///
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-length values.
    Empty,
    /// A sequence of strings.
    /// Used for the textual value representations.
    /// Each string is one value of the element.
    Strs(C<String>),
    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),
    /// A sequence of unsigned 8-bit integers.
    /// Used for OB and UN.
    U8(C<u8>),
    /// A sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),
    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16(C<u16>),
    /// A sequence of signed 32-bit integers.
    /// Used for SL.
    I32(C<i32>),
    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),
    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),
    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),
    /// A sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),
    /// A sequence of 64-bit floating point numbers.
    /// Used for OD and FD.
    F64(C<f64>),
}

impl PrimitiveValue {
    /// Obtain the number of individual values.
    /// For byte values, this is the number of bytes.
    pub fn multiplicity(&self) -> usize {
        use PrimitiveValue::*;
        match self {
            Empty => 0,
            Strs(c) => c.len(),
            Tags(c) => c.len(),
            U8(c) => c.len(),
            I16(c) => c.len(),
            U16(c) => c.len(),
            I32(c) => c.len(),
            U32(c) => c.len(),
            I64(c) => c.len(),
            U64(c) => c.len(),
            F32(c) => c.len(),
            F64(c) => c.len(),
        }
    }

    /// Whether the value holds no individual values.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Retrieve the strings of a textual value.
    pub fn strings(&self) -> Option<&[String]> {
        match self {
            PrimitiveValue::Strs(c) => Some(c),
            _ => None,
        }
    }

    /// Retrieve the raw bytes of a byte value.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            PrimitiveValue::U8(c) => Some(c),
            _ => None,
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Strs(std::iter::once(value.to_string()).collect())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Strs(std::iter::once(value).collect())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from_vec(value))
    }
}

impl From<Tag> for PrimitiveValue {
    fn from(value: Tag) -> Self {
        PrimitiveValue::Tags(std::iter::once(value).collect())
    }
}

macro_rules! impl_from_numbers {
    ($($t: ty => $variant: ident),*) => {
        $(
            impl From<$t> for PrimitiveValue {
                fn from(value: $t) -> Self {
                    PrimitiveValue::$variant(std::iter::once(value).collect())
                }
            }

            impl From<Vec<$t>> for PrimitiveValue {
                fn from(value: Vec<$t>) -> Self {
                    PrimitiveValue::$variant(C::from_vec(value))
                }
            }
        )*
    };
}

impl_from_numbers!(
    i16 => I16, u16 => U16, i32 => I32, u32 => U32,
    i64 => I64, u64 => U64, f32 => F32, f64 => F64
);

fn write_joined<T, I>(f: &mut fmt::Formatter, values: I) -> fmt::Result
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    let mut first = true;
    for v in values {
        if !first {
            f.write_str(" ")?;
        }
        first = false;
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for PrimitiveValue {
    /// Render all values between brackets, separated by a space.
    /// Byte values are rendered as a single bracketed list of numbers.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PrimitiveValue::*;
        f.write_str("[")?;
        match self {
            Empty => {}
            Strs(c) => write_joined(f, c.iter().map(|s| s.trim_end_matches([' ', '\0'])))?,
            Tags(c) => write_joined(f, c)?,
            U8(c) => {
                f.write_str("[")?;
                write_joined(f, c)?;
                f.write_str("]")?;
            }
            I16(c) => write_joined(f, c)?,
            U16(c) => write_joined(f, c)?,
            I32(c) => write_joined(f, c)?,
            U32(c) => write_joined(f, c)?,
            I64(c) => write_joined(f, c)?,
            U64(c) => write_joined(f, c)?,
            F32(c) => write_joined(f, c)?,
            F64(c) => write_joined(f, c)?,
        }
        f.write_str("]")
    }
}

/// The class of value admitted by a value representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Text, one string per value
    Strings,
    /// Attribute tags
    Tags,
    /// Raw bytes
    Bytes,
    /// 16-bit words, also admitting raw bytes
    Words,
    /// Signed 16-bit integers
    I16,
    /// Unsigned 16-bit integers
    U16,
    /// Signed 32-bit integers
    I32,
    /// Unsigned 32-bit integers
    U32,
    /// Signed 64-bit integers
    I64,
    /// Unsigned 64-bit integers
    U64,
    /// Single precision floating point numbers
    F32,
    /// Double precision floating point numbers
    F64,
    /// Nested items
    Sequence,
}

impl ValueKind {
    /// Whether a primitive value of this shape is admitted.
    /// An empty value is admitted by every kind.
    pub fn admits(self, value: &PrimitiveValue) -> bool {
        use PrimitiveValue as P;
        matches!(
            (self, value),
            (_, P::Empty)
                | (ValueKind::Strings, P::Strs(_))
                | (ValueKind::Tags, P::Tags(_))
                | (ValueKind::Bytes, P::U8(_))
                | (ValueKind::Words, P::U16(_))
                | (ValueKind::Words, P::U8(_))
                | (ValueKind::I16, P::I16(_))
                | (ValueKind::U16, P::U16(_))
                | (ValueKind::I32, P::I32(_))
                | (ValueKind::U32, P::U32(_))
                | (ValueKind::I64, P::I64(_))
                | (ValueKind::U64, P::U64(_))
                | (ValueKind::F32, P::F32(_))
                | (ValueKind::F64, P::F64(_))
        )
    }

    /// The width in bytes of each binary value of this kind,
    /// or `None` for text and sequences.
    pub fn width(self) -> Option<usize> {
        match self {
            ValueKind::Bytes => Some(1),
            ValueKind::Words | ValueKind::I16 | ValueKind::U16 => Some(2),
            ValueKind::Tags | ValueKind::I32 | ValueKind::U32 | ValueKind::F32 => Some(4),
            ValueKind::I64 | ValueKind::U64 | ValueKind::F64 => Some(8),
            ValueKind::Strings | ValueKind::Sequence => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::Strings => "text",
            ValueKind::Tags => "attribute tags",
            ValueKind::Bytes => "bytes",
            ValueKind::Words => "16-bit words",
            ValueKind::I16 => "signed 16-bit integers",
            ValueKind::U16 => "unsigned 16-bit integers",
            ValueKind::I32 => "signed 32-bit integers",
            ValueKind::U32 => "unsigned 32-bit integers",
            ValueKind::I64 => "signed 64-bit integers",
            ValueKind::U64 => "unsigned 64-bit integers",
            ValueKind::F32 => "32-bit floats",
            ValueKind::F64 => "64-bit floats",
            ValueKind::Sequence => "a sequence of items",
        };
        f.write_str(name)
    }
}

/// The pixel data of an instance, as a sequence of frames.
///
/// Native pixel data is always a single frame
/// holding the little endian bytes of the whole blob.
/// Encapsulated pixel data holds one frame per image,
/// reassembled from the fragments of the encoded stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelDataInfo {
    /// Whether the pixel data is encapsulated in fragments.
    pub encapsulated: bool,
    /// The basic offset table, empty if absent.
    pub offset_table: Vec<u32>,
    /// The frames, each an opaque byte sequence.
    pub frames: Vec<Vec<u8>>,
}

impl PixelDataInfo {
    /// Create native pixel data from a single blob.
    pub fn native(data: Vec<u8>) -> Self {
        PixelDataInfo {
            encapsulated: false,
            offset_table: Vec::new(),
            frames: vec![data],
        }
    }

    /// Create encapsulated pixel data from a list of frames.
    pub fn encapsulated(frames: Vec<Vec<u8>>) -> Self {
        PixelDataInfo {
            encapsulated: true,
            offset_table: Vec::new(),
            frames,
        }
    }

    /// Whether there are no frames with content.
    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(|f| f.is_empty())
    }
}

impl fmt::Display for PixelDataInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{} frames, {} bytes{}]",
            self.frames.len(),
            self.frames.iter().map(Vec::len).sum::<usize>(),
            if self.encapsulated { ", encapsulated" } else { "" }
        )
    }
}

/// Representation of a full DICOM value, which may be primitive,
/// a sequence of nested items of type `I`, or pixel data.
///
/// Two sequences are equal when their items are,
/// whatever the size found in the source.
#[derive(Debug, Clone)]
pub enum Value<I> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence {
        /// Item collection.
        items: C<I>,
        /// The size in bytes as found in the source (can be undefined).
        size: Length,
    },
    /// The pixel data of the instance.
    PixelData(PixelDataInfo),
}

impl<I> Value<I> {
    /// Create a sequence value of undefined length.
    pub fn new_sequence<T>(items: T) -> Self
    where
        T: Into<C<I>>,
    {
        Value::Sequence {
            items: items.into(),
            size: Length::UNDEFINED,
        }
    }

    /// Retrieve the primitive value, if applicable.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieve the nested items, if this is a sequence.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Retrieve a mutable reference to the nested items, if this is a sequence.
    pub fn items_mut(&mut self) -> Option<&mut C<I>> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Retrieve the pixel data, if applicable.
    pub fn pixel_data(&self) -> Option<&PixelDataInfo> {
        match self {
            Value::PixelData(v) => Some(v),
            _ => None,
        }
    }

    /// The number of individual values, items or frames.
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence { items, .. } => items.len(),
            Value::PixelData(v) => v.frames.len(),
        }
    }
}

impl<I> PartialEq for Value<I>
where
    I: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Sequence { items: a, .. }, Value::Sequence { items: b, .. }) => a == b,
            (Value::PixelData(a), Value::PixelData(b)) => a == b,
            _ => false,
        }
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<PixelDataInfo> for Value<I> {
    fn from(v: PixelDataInfo) -> Self {
        Value::PixelData(v)
    }
}

impl<I> From<C<I>> for Value<I> {
    fn from(items: C<I>) -> Self {
        Value::new_sequence(items)
    }
}

impl<I> From<&str> for Value<I> {
    fn from(v: &str) -> Self {
        Value::Primitive(v.into())
    }
}

impl<I> fmt::Display for Value<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Primitive(v) => v.fmt(f),
            Value::Sequence { items, .. } => write!(f, "[{} items]", items.len()),
            Value::PixelData(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn primitive_display() {
        let v = PrimitiveValue::Strs(smallvec!["ORIGINAL".to_string(), "PRIMARY ".to_string()]);
        assert_eq!(v.to_string(), "[ORIGINAL PRIMARY]");
        let v = PrimitiveValue::U8(smallvec![48, 32, 49, 0]);
        assert_eq!(v.to_string(), "[[48 32 49 0]]");
        let v = PrimitiveValue::U16(smallvec![256, 0, 16]);
        assert_eq!(v.to_string(), "[256 0 16]");
        assert_eq!(PrimitiveValue::Empty.to_string(), "[]");
    }

    #[test]
    fn kinds_admit_matching_values() {
        assert!(ValueKind::Strings.admits(&PrimitiveValue::from("A")));
        assert!(ValueKind::Words.admits(&PrimitiveValue::from(vec![1u8, 2])));
        assert!(ValueKind::Words.admits(&PrimitiveValue::from(vec![1u16, 2])));
        assert!(ValueKind::U32.admits(&PrimitiveValue::Empty));
        assert!(!ValueKind::U32.admits(&PrimitiveValue::from(1u16)));
        assert!(!ValueKind::Sequence.admits(&PrimitiveValue::from("A")));
    }

    #[test]
    fn pixel_data_shape() {
        let p = PixelDataInfo::native(vec![1, 2, 3, 4]);
        assert!(!p.encapsulated);
        assert_eq!(p.frames.len(), 1);
        assert!(!p.is_empty());
        assert!(PixelDataInfo::default().is_empty());
        let v: Value<()> = p.into();
        assert_eq!(v.to_string(), "[1 frames, 4 bytes]");
    }

    #[test]
    fn sequence_equality_ignores_size() {
        let items: C<u32> = smallvec![1, 2];
        let undefined: Value<u32> = Value::new_sequence(items.clone());
        assert_eq!(undefined, undefined.clone());

        let defined = Value::Sequence {
            items,
            size: Length(24),
        };
        assert_eq!(undefined, defined);
        let fewer: C<u32> = smallvec![1];
        assert_ne!(undefined, Value::new_sequence(fewer));
        assert_ne!(undefined, Value::Primitive(PrimitiveValue::Empty));
    }
}
