// nfcbeam/src/ndef/tnf.rs

use derive_more::Display;

/// Type Name Format: 3-bit tag telling how to interpret a record type.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tnf {
    #[display(fmt = "TNF_EMPTY")]
    Empty = 0x00,
    #[display(fmt = "TNF_WELL_KNOWN")]
    WellKnown = 0x01,
    #[display(fmt = "TNF_MIME_MEDIA")]
    MimeMedia = 0x02,
    #[display(fmt = "TNF_ABSOLUTE_URI")]
    AbsoluteUri = 0x03,
    #[display(fmt = "TNF_EXTERNAL_TYPE")]
    ExternalType = 0x04,
    #[display(fmt = "TNF_UNKNOWN")]
    Unknown = 0x05,
    #[display(fmt = "TNF_UNCHANGED")]
    Unchanged = 0x06,
    #[display(fmt = "TNF_RESERVED")]
    Reserved = 0x07,
}

impl Tnf {
    /// Take the low three bits of a record header; every value maps.
    pub fn from_header(header: u8) -> Self {
        match header & 0x07 {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::MimeMedia,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::ExternalType,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Header flag bits other than the TNF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordFlags {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunk: bool,
    pub short_record: bool,
    pub id_length_present: bool,
}

impl RecordFlags {
    pub const MB: u8 = 0x80;
    pub const ME: u8 = 0x40;
    pub const CF: u8 = 0x20;
    pub const SR: u8 = 0x10;
    pub const IL: u8 = 0x08;

    pub fn from_header(header: u8) -> Self {
        Self {
            message_begin: header & Self::MB != 0,
            message_end: header & Self::ME != 0,
            chunk: header & Self::CF != 0,
            short_record: header & Self::SR != 0,
            id_length_present: header & Self::IL != 0,
        }
    }
}
