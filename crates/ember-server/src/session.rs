//! Per-client session: drives the handshake → login → in-game state machine
//! and forwards movement into the world roster.

use crate::events;
use crate::state::ServerState;
use anyhow::bail;
use ember_protocol::{
    ClientboundPacket, Connection, Handshake, LoginRequest, PacketHandler, PlayerPosition,
    PlayerPositionLook, PROTOCOL_VERSION,
};
use ember_types::Location;
use ember_world::PlayerEntity;
use std::sync::Arc;
use tracing::info;

/// Eye height above the feet, transmitted as the stance.
const STANCE_OFFSET: f64 = 1.62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Fresh,
    Handshook,
    LoggedIn,
    Closed,
}

pub struct Session {
    state: Arc<ServerState>,
    connection: Arc<Connection>,
    stage: Stage,
    username: String,
    entity_id: Option<i32>,
}

impl Session {
    pub fn new(state: Arc<ServerState>, connection: Arc<Connection>) -> Self {
        Self {
            state,
            connection,
            stage: Stage::Fresh,
            username: String::new(),
            entity_id: None,
        }
    }

    async fn update_location(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        look: Option<(f32, f32)>,
    ) -> anyhow::Result<()> {
        if self.stage != Stage::LoggedIn {
            bail!("movement packet before login");
        }
        let Some(entity_id) = self.entity_id else {
            bail!("movement packet before login");
        };
        let mut world = self.state.world.lock().await;
        if let Some(player) = world.player_mut(entity_id) {
            let mut location = player.location();
            location.x = x;
            location.y = y;
            location.z = z;
            if let Some((yaw, pitch)) = look {
                location.yaw = yaw;
                location.pitch = pitch;
            }
            player.set_location(location);
        }
        Ok(())
    }
}

impl PacketHandler for Session {
    async fn on_keep_alive(&mut self) -> anyhow::Result<()> {
        self.connection
            .write_packet(&ClientboundPacket::KeepAlive, true)
            .await?;
        Ok(())
    }

    async fn on_handshake(&mut self, packet: Handshake) -> anyhow::Result<()> {
        if self.stage != Stage::Fresh {
            bail!("unexpected handshake from '{}'", packet.username);
        }
        info!("new handshake with '{}'", packet.username);
        self.username = packet.username;
        self.stage = Stage::Handshook;
        // "-" tells the client to skip online authentication
        self.connection
            .write_packet(&ClientboundPacket::Handshake { hash: "-".into() }, true)
            .await?;
        Ok(())
    }

    async fn on_login(&mut self, packet: LoginRequest) -> anyhow::Result<()> {
        if self.stage != Stage::Handshook {
            bail!("unexpected login from '{}'", packet.username);
        }
        if packet.username != self.username {
            bail!(
                "client {} tried to login with username '{}'",
                self.username,
                packet.username
            );
        }
        if packet.protocol != PROTOCOL_VERSION {
            bail!("unsupported protocol version: {}", packet.protocol);
        }

        let entity_id = self.state.entity_ids.next();
        let mut world = self.state.world.lock().await;

        self.connection
            .write_packet(
                &ClientboundPacket::Login {
                    entity_id,
                    server_name: String::new(), // empty on Notchian servers
                    map_seed: 0,                // unused by the client
                    dimension: world.dimension().id(),
                },
                false,
            )
            .await?;

        let spawn = world.spawn_point();
        self.connection
            .write_packet(
                &ClientboundPacket::SpawnPosition {
                    x: spawn.x,
                    y: spawn.y,
                    z: spawn.z,
                },
                false,
            )
            .await?;
        self.connection
            .write_packet(&ClientboundPacket::TimeUpdate { time: world.time() }, false)
            .await?;

        let location = Location::new(
            f64::from(spawn.x) + 0.5,
            f64::from(spawn.y),
            f64::from(spawn.z) + 0.5,
            0.0,
            0.0,
        );
        let player = PlayerEntity::new(entity_id, self.username.clone(), location);
        world.spawn_player(player, &self.connection).await?;
        drop(world);

        self.connection
            .write_packet(
                &ClientboundPacket::PlayerPositionLook {
                    x: location.x,
                    stance: location.y + STANCE_OFFSET,
                    y: location.y,
                    z: location.z,
                    yaw: location.yaw,
                    pitch: location.pitch,
                    on_ground: false,
                },
                true,
            )
            .await?;

        self.entity_id = Some(entity_id);
        self.stage = Stage::LoggedIn;
        info!("'{}' logged in with entity id {}", self.username, entity_id);
        self.state.fire_event(events::PLAYER_JOIN, &self.username);
        Ok(())
    }

    async fn on_player_position(&mut self, packet: PlayerPosition) -> anyhow::Result<()> {
        self.update_location(packet.x, packet.y, packet.z, None).await
    }

    async fn on_player_position_look(&mut self, packet: PlayerPositionLook) -> anyhow::Result<()> {
        self.update_location(packet.x, packet.y, packet.z, Some((packet.yaw, packet.pitch)))
            .await
    }

    async fn on_disconnect(&mut self) {
        if let Some(entity_id) = self.entity_id.take() {
            let mut world = self.state.world.lock().await;
            if let Some(player) = world.remove_player(entity_id) {
                drop(world);
                info!("'{}' left the game", player.username());
                self.state.fire_event(events::PLAYER_QUIT, player.username());
            }
        }
        self.stage = Stage::Closed;
    }
}
