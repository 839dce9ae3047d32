// nfcbeam/src/protocol/mod.rs

pub mod codec;
pub mod frame;
pub mod llcp;
pub mod parser;
pub mod snep;
pub mod status;

pub use codec::{exchange, send};
pub use frame::{CommandFrame, ResponseFrame, build_command};
pub use llcp::SequenceNumbers;
pub use snep::{SnepBuffer, SnepHeader};
