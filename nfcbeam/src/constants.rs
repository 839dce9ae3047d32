// nfcbeam/src/constants.rs
//! Common protocol constants used across the crate

/// ACR122 pseudo-APDU header bytes preceding every PN532 instruction:
/// class, instruction, p1, p2. The length byte follows.
pub const ACR122_HEADER: [u8; 4] = [0xFF, 0x00, 0x00, 0x00];

/// ACR122 "get firmware version" pseudo-APDU (answered in ASCII, no PN532 prefix)
pub const ACR122_GET_FIRMWARE_VERSION: [u8; 5] = [0xFF, 0x00, 0x48, 0x00, 0x00];

/// PN532 host->device prefix (D4) and device->host prefix (D5)
pub const PN532_CMD_PREFIX_HOST: u8 = 0xD4;
pub const PN532_CMD_PREFIX_DEVICE: u8 = 0xD5;

/// PN532 opcodes used by the beam handshake
pub const PN532_CMD_RF_CONFIGURATION: u8 = 0x32;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_RELEASE: u8 = 0x52;
pub const PN532_CMD_IN_JUMP_FOR_DEP: u8 = 0x56;

/// Largest PN532 payload that still fits the one-byte ACR122 length field
/// together with the two instruction bytes.
pub const MAX_COMMAND_PAYLOAD_LEN: usize = 253;

/// Status words
pub const SW_SUCCESS: (u8, u8) = (0x90, 0x00);
pub const SW1_ERROR: u8 = 0x63;
pub const SW2_CHECKSUM: u8 = 0x27;
pub const SW2_BAD_COMMAND: u8 = 0x7F;
pub const STATUS_WORD_LEN: usize = 2;

/// RFConfiguration item 0x01 (RF field) switched on
pub const ANTENNA_ON_PAYLOAD: [u8; 2] = [0x01, 0x01];

/// InJumpForDEP: passive, 424 kbps, PassiveInitiatorData + Gi present.
/// Gi carries the LLCP magic (46 66 6D), VERSION 1.0, WKS and LTO TLVs.
pub const INITIATOR_PAYLOAD: [u8; 21] = [
    0x00, 0x02, 0x05, // ActPass, BR, Next
    0x00, 0xFF, 0xFF, 0x00, 0x00, // FeliCa polling request
    0x46, 0x66, 0x6D, // LLCP magic
    0x01, 0x01, 0x10, // VERSION
    0x03, 0x02, 0x00, 0x13, // WKS
    0x04, 0x01, 0x96, // LTO
];

/// Bytes preceding the LLCP PDU in an InDataExchange reply: D5 41 <status>
pub const DATA_EXCHANGE_REPLY_HEADER_LEN: usize = 3;

/// LLCP I-PDU header: DSAP/PTYPE/SSAP (2 bytes) + sequence byte
pub const LLCP_HEADER_LEN: usize = 3;

/// SNEP header: version, request code, 4-byte big-endian length
pub const SNEP_HEADER_LEN: usize = 6;

/// Response byte 3 when the Android target sends an LLCP CONNECT
pub const LLCP_CONNECT_MARKER: u8 = 0x11;

/// Response bytes 3..5 of an LLCP I-PDU from the SNEP server (SAP 4) to us (SAP 0x20)
pub const LLCP_INFORMATION_MARKER: [u8; 2] = [0x13, 0x20];

/// Interval between target probes while waiting for a beam.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 150;

/// Default wait for a beam target.
pub const DEFAULT_TIMEOUT_MS: u64 = 3500;

/// Default upper bound on the declared SNEP message size.
pub const DEFAULT_MAX_ALLOWED_SIZE: usize = 2048;

/// Default bound on consecutive non-fragment replies in the fragment loop.
pub const DEFAULT_MAX_FRAGMENT_RETRIES: u32 = 32;
