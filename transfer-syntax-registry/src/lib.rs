//! This crate contains the DICOM transfer syntax registry.
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier.
//!
//! The registry is a process-wide singleton, initialized on first use.
//! It is accessed through the unit type [`TransferSyntaxRegistry`],
//! which implements [`TransferSyntaxIndex`].
//!
//! ```
//! use dicomset_encoding::TransferSyntaxIndex;
//! use dicomset_transfer_syntax_registry::TransferSyntaxRegistry;
//!
//! let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1\0").unwrap();
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! assert!(ts.is_explicit_vr());
//! ```

pub mod deflate;
pub mod entries;

use byteordered::Endianness;
use dicomset_encoding::transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

pub use dicomset_encoding;

/// Main implementation of a registry of DICOM transfer syntaxes.
///
/// Consumers would generally use [`TransferSyntaxRegistry`] instead.
pub struct TransferSyntaxRegistryImpl {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistryImpl")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistryImpl {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// Obtain a DICOM codec by transfer syntax UID.
    fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let ts_uid = uid.as_ref().trim_end_matches(['\0', ' ']);
        self.m.get(ts_uid)
    }

    /// Register the given transfer syntax (TS) to the system.
    fn register(&mut self, ts: TransferSyntax) {
        self.m.insert(ts.uid(), ts);
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistryImpl {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        Self::get(self, uid)
    }
}

/// Zero-sized representative of the main transfer syntax registry.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        get_registry().iter()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        get_registry().get(uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = {
        let mut registry = TransferSyntaxRegistryImpl {
            m: HashMap::with_capacity(32),
        };
        initialize_codecs(&mut registry);
        registry
    };
}

/// Retrieve the default transfer syntax,
/// Implicit VR Little Endian.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve a reference to the global codec registry.
#[inline]
pub(crate) fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}

fn initialize_codecs(registry: &mut TransferSyntaxRegistryImpl) {
    use self::entries::*;

    // the base transfer syntaxes, fully supported
    registry.register(IMPLICIT_VR_LITTLE_ENDIAN);
    registry.register(EXPLICIT_VR_LITTLE_ENDIAN);
    registry.register(EXPLICIT_VR_BIG_ENDIAN);
    registry.register(ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN);
    registry.register(deflate::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);

    // stub transfer syntaxes, only partially supported due
    // to pixel data encapsulation
    for ts in [
        JPEG_BASELINE,
        JPEG_EXTENDED,
        JPEG_LOSSLESS_NON_HIERARCHICAL,
        JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
        JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
        JPEG_LS_LOSSY_IMAGE_COMPRESSION,
        JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_IMAGE_COMPRESSION,
        JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION,
        MPEG2_MAIN_PROFILE_MAIN_LEVEL,
        MPEG2_MAIN_PROFILE_HIGH_LEVEL,
        MPEG4_AVC_H264_HIGH_PROFILE,
        HEVC_H265_MAIN_PROFILE,
        RLE_LOSSLESS,
    ] {
        registry.register(ts);
    }
}

/// create a TS with an unsupported pixel encapsulation
pub(crate) const fn create_ts_stub(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax::new(
        uid,
        name,
        Endianness::Little,
        true,
        Codec::EncapsulatedPixelData,
    )
}
