//! Packet layouts for protocol 14. The enums are the registries: the match
//! over incoming ids is the factory table, the discriminant-keyed `id()` is
//! the outgoing table, and a duplicate id cannot be registered twice short of
//! editing the match itself.

use crate::codec::{
    read_bool, read_string16, write_bool, write_string16, ProtocolError, ProtocolResult,
};
use bytes::{BufMut, BytesMut};
use std::future::Future;
use tokio::io::{AsyncRead, AsyncReadExt};

/// The network dialect implemented by this server.
pub const PROTOCOL_VERSION: i32 = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub protocol: i32,
    pub username: String,
    pub map_seed: i64,
    pub dimension: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Handshake {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub stance: f64,
    pub z: f64,
    pub on_ground: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPositionLook {
    pub x: f64,
    pub y: f64,
    pub stance: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

/// Every packet the client may send.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerboundPacket {
    KeepAlive,
    Login(LoginRequest),
    Handshake(Handshake),
    PlayerPosition(PlayerPosition),
    PlayerPositionLook(PlayerPositionLook),
}

impl ServerboundPacket {
    /// Decodes the body for a packet id already pulled off the stream. Each
    /// arm consumes exactly the bytes its writer counterpart produces; there
    /// is no length prefix to fall back on.
    pub async fn read<R: AsyncRead + Unpin>(id: u8, reader: &mut R) -> ProtocolResult<Self> {
        match id {
            0x00 => Ok(ServerboundPacket::KeepAlive),
            0x01 => Ok(ServerboundPacket::Login(LoginRequest {
                protocol: reader.read_i32().await?,
                username: read_string16(reader).await?,
                map_seed: reader.read_i64().await?,
                dimension: reader.read_u8().await?,
            })),
            0x02 => Ok(ServerboundPacket::Handshake(Handshake {
                username: read_string16(reader).await?,
            })),
            0x0B => Ok(ServerboundPacket::PlayerPosition(PlayerPosition {
                x: reader.read_f64().await?,
                y: reader.read_f64().await?,
                stance: reader.read_f64().await?,
                z: reader.read_f64().await?,
                on_ground: read_bool(reader).await?,
            })),
            0x0D => Ok(ServerboundPacket::PlayerPositionLook(PlayerPositionLook {
                x: reader.read_f64().await?,
                y: reader.read_f64().await?,
                stance: reader.read_f64().await?,
                z: reader.read_f64().await?,
                yaw: reader.read_f32().await?,
                pitch: reader.read_f32().await?,
                on_ground: read_bool(reader).await?,
            })),
            other => Err(ProtocolError::UnknownPacketId(other)),
        }
    }
}

/// Every packet the server may send.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientboundPacket {
    KeepAlive,
    Login {
        entity_id: i32,
        server_name: String,
        map_seed: i64,
        dimension: u8,
    },
    Handshake {
        hash: String,
    },
    TimeUpdate {
        time: i64,
    },
    SpawnPosition {
        x: i32,
        y: i32,
        z: i32,
    },
    /// Stance precedes y on the wire, unlike the serverbound layout.
    PlayerPositionLook {
        x: f64,
        stance: f64,
        y: f64,
        z: f64,
        yaw: f32,
        pitch: f32,
        on_ground: bool,
    },
    PreChunk {
        x: i32,
        z: i32,
        load: bool,
    },
    /// Sizes carry `actual − 1` (15, 127, 15 for a full column); the payload
    /// is zlib-compressed behind a 4-byte length.
    MapChunk {
        x: i32,
        y: i16,
        z: i32,
        size_x: u8,
        size_y: u8,
        size_z: u8,
        data: Vec<u8>,
    },
    Kick {
        reason: String,
    },
}

impl ClientboundPacket {
    pub fn id(&self) -> u8 {
        match self {
            ClientboundPacket::KeepAlive => 0x00,
            ClientboundPacket::Login { .. } => 0x01,
            ClientboundPacket::Handshake { .. } => 0x02,
            ClientboundPacket::TimeUpdate { .. } => 0x04,
            ClientboundPacket::SpawnPosition { .. } => 0x06,
            ClientboundPacket::PlayerPositionLook { .. } => 0x0D,
            ClientboundPacket::PreChunk { .. } => 0x32,
            ClientboundPacket::MapChunk { .. } => 0x33,
            ClientboundPacket::Kick { .. } => 0xFF,
        }
    }

    /// Appends the packet body, without the id byte.
    pub fn write(&self, buf: &mut BytesMut) -> ProtocolResult<()> {
        match self {
            ClientboundPacket::KeepAlive => {}
            ClientboundPacket::Login {
                entity_id,
                server_name,
                map_seed,
                dimension,
            } => {
                buf.put_i32(*entity_id);
                write_string16(buf, server_name)?;
                buf.put_i64(*map_seed);
                buf.put_u8(*dimension);
            }
            ClientboundPacket::Handshake { hash } => {
                write_string16(buf, hash)?;
            }
            ClientboundPacket::TimeUpdate { time } => {
                buf.put_i64(*time);
            }
            ClientboundPacket::SpawnPosition { x, y, z } => {
                buf.put_i32(*x);
                buf.put_i32(*y);
                buf.put_i32(*z);
            }
            ClientboundPacket::PlayerPositionLook {
                x,
                stance,
                y,
                z,
                yaw,
                pitch,
                on_ground,
            } => {
                buf.put_f64(*x);
                buf.put_f64(*stance);
                buf.put_f64(*y);
                buf.put_f64(*z);
                buf.put_f32(*yaw);
                buf.put_f32(*pitch);
                write_bool(buf, *on_ground);
            }
            ClientboundPacket::PreChunk { x, z, load } => {
                buf.put_i32(*x);
                buf.put_i32(*z);
                write_bool(buf, *load);
            }
            ClientboundPacket::MapChunk {
                x,
                y,
                z,
                size_x,
                size_y,
                size_z,
                data,
            } => {
                buf.put_i32(*x);
                buf.put_i16(*y);
                buf.put_i32(*z);
                buf.put_u8(*size_x);
                buf.put_u8(*size_y);
                buf.put_u8(*size_z);
                buf.put_i32(data.len() as i32);
                buf.put_slice(data);
            }
            ClientboundPacket::Kick { reason } => {
                write_string16(buf, reason)?;
            }
        }
        Ok(())
    }

    /// The full frame: id byte followed by the body.
    pub fn encode(&self) -> ProtocolResult<BytesMut> {
        let mut buf = BytesMut::new();
        buf.put_u8(self.id());
        self.write(&mut buf)?;
        Ok(buf)
    }
}

/// Receives decoded packets in wire order, one callback per variant. The
/// connection's reader loop drives this; any error closes the connection
/// with the error text as the kick reason.
pub trait PacketHandler: Send {
    fn on_keep_alive(&mut self) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn on_handshake(&mut self, packet: Handshake)
        -> impl Future<Output = anyhow::Result<()>> + Send;
    fn on_login(&mut self, packet: LoginRequest)
        -> impl Future<Output = anyhow::Result<()>> + Send;
    fn on_player_position(
        &mut self,
        packet: PlayerPosition,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn on_player_position_look(
        &mut self,
        packet: PlayerPositionLook,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
    /// Called once after the reader loop ends, however it ended.
    fn on_disconnect(&mut self) -> impl Future<Output = ()> + Send;
}
