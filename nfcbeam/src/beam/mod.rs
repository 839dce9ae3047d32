// nfcbeam/src/beam/mod.rs

//! Android Beam reception: target polling, the LLCP/SNEP handshake and
//! fragment reassembly.

pub mod handshake;
pub mod poll;
pub mod state;

pub use handshake::BeamHandshake;
pub use poll::await_target;
pub use state::{HandshakeState, Phase};
