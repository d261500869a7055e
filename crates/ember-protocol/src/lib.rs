//! The protocol 14 network layer: byte codec, packet layouts, per-connection
//! reader/writer plumbing and the TCP listener.

pub mod codec;
pub mod connection;
pub mod listener;
pub mod packets;

pub use codec::{ProtocolError, ProtocolResult};
pub use connection::Connection;
pub use listener::Listener;
pub use packets::{
    ClientboundPacket, Handshake, LoginRequest, PacketHandler, PlayerPosition,
    PlayerPositionLook, ServerboundPacket, PROTOCOL_VERSION,
};
