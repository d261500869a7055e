//! The world: a chunk table keyed by column position, the entity roster,
//! spawn point and time, and the orchestration that keeps lighting and
//! subscribers consistent when blocks change.

use crate::chunk::{BlockState, Chunk, CHUNK_SIZE, DEFAULT_CHUNK_HEIGHT};
use crate::entity::PlayerEntity;
use crate::generator::ChunkGenerator;
use crate::{light, WorldError, WorldResult};
use ember_material::Block;
use ember_protocol::{ClientboundPacket, Connection};
use ember_types::{BlockPos, ChunkPos};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Overworld,
    Nether,
}

impl Dimension {
    /// The byte sent in the Login packet.
    pub fn id(self) -> u8 {
        match self {
            Dimension::Overworld => 0,
            Dimension::Nether => 255,
        }
    }
}

/// A mutation notice for subscribers (block change broadcasts).
#[derive(Debug, Clone, Copy)]
pub struct BlockUpdate {
    pub pos: BlockPos,
    pub material: &'static Block,
    pub data: u8,
}

pub struct World {
    dimension: Dimension,
    height: usize,
    spawn: BlockPos,
    time: i64,
    chunks: HashMap<ChunkPos, Chunk>,
    entities: HashMap<i32, PlayerEntity>,
    generator: Box<dyn ChunkGenerator + Send>,
    updates: Option<mpsc::UnboundedSender<BlockUpdate>>,
}

impl World {
    pub fn new(generator: Box<dyn ChunkGenerator + Send>) -> Self {
        Self::with_height(generator, DEFAULT_CHUNK_HEIGHT)
    }

    pub fn with_height(generator: Box<dyn ChunkGenerator + Send>, height: usize) -> Self {
        Self {
            dimension: Dimension::Overworld,
            height,
            spawn: BlockPos::new(0, 60, 0),
            time: 0,
            chunks: HashMap::new(),
            entities: HashMap::new(),
            generator,
            updates: None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn spawn_point(&self) -> BlockPos {
        self.spawn
    }

    pub fn set_spawn_point(&mut self, spawn: BlockPos) {
        self.spawn = spawn;
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn advance_time(&mut self, ticks: i64) {
        self.time += ticks;
    }

    /// Block mutations on generated chunks are reported to this receiver.
    pub fn subscribe_block_updates(&mut self) -> mpsc::UnboundedReceiver<BlockUpdate> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.updates = Some(tx);
        rx
    }

    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn loaded_chunks(&self) -> impl Iterator<Item = ChunkPos> + '_ {
        self.chunks.keys().copied()
    }

    /// Idempotent. A fresh chunk is generated with update callbacks
    /// suppressed, then lit: first its own emitting blocks, then whatever
    /// its loaded neighbours spill over the border.
    pub fn load_chunk(&mut self, pos: ChunkPos) -> WorldResult<()> {
        if self.chunks.contains_key(&pos) {
            return Ok(());
        }
        let mut chunk = Chunk::new(pos, self.height);
        self.generator.generate(&mut chunk)?;
        chunk.mark_generated();
        self.chunks.insert(pos, chunk);
        debug!("generated chunk {}", pos);

        self.seed_emissions(pos)?;
        light::reconcile_borders(self, pos)?;
        Ok(())
    }

    fn seed_emissions(&mut self, pos: ChunkPos) -> WorldResult<()> {
        let chunk = self
            .chunks
            .get(&pos)
            .ok_or(WorldError::ChunkNotLoaded(pos.x, pos.z))?;
        let mut sources = Vec::new();
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                for y in 0..self.height {
                    let state = chunk.block(x, y, z)?;
                    let emission = state.material.light_emission();
                    if emission > 0 {
                        sources.push((
                            pos.x * CHUNK_SIZE as i32 + x as i32,
                            y as i32,
                            pos.z * CHUNK_SIZE as i32 + z as i32,
                            emission,
                        ));
                    }
                }
            }
        }
        for (x, y, z, emission) in sources {
            light::propagate(self, x, y, z, emission)?;
        }
        Ok(())
    }

    pub fn block(&self, pos: BlockPos) -> WorldResult<BlockState> {
        let (chunk, x, y, z) = self.locate(pos.x, pos.y, pos.z)?;
        chunk.block(x, y, z)
    }

    pub fn block_light(&self, pos: BlockPos) -> WorldResult<u8> {
        self.light_value(pos.x, pos.y, pos.z)
    }

    /// Writes a block and keeps the light field honest: stale light is
    /// removed when an emitter goes away or an opaque block lands in a lit
    /// cell, and new emission is propagated. Subscribers hear about it only
    /// once the chunk has finished generating.
    pub fn set_block(&mut self, pos: BlockPos, block: &'static Block, data: u8) -> WorldResult<()> {
        let (chunk, x, y, z) = self.locate_mut(pos.x, pos.y, pos.z)?;
        let old = chunk.block(x, y, z)?.material;
        chunk.set_block(x, y, z, block, data)?;
        if !chunk.is_generated() {
            return Ok(());
        }

        if old.light_emission() > block.light_emission() || block.light_opacity() >= 15 {
            light::remove(self, pos.x, pos.y, pos.z)?;
        }
        if block.light_emission() > 0 {
            light::propagate(self, pos.x, pos.y, pos.z, block.light_emission())?;
        }

        if let Some(updates) = &self.updates {
            let _ = updates.send(BlockUpdate {
                pos,
                material: block,
                data,
            });
        }
        Ok(())
    }

    /// Adds the player to the roster, then streams every loaded chunk as a
    /// PreChunk/MapChunk pair, flushing once at the end.
    pub async fn spawn_player(
        &mut self,
        player: PlayerEntity,
        connection: &Connection,
    ) -> WorldResult<()> {
        self.add_player(player)?;

        let mut positions: Vec<ChunkPos> = self.chunks.keys().copied().collect();
        positions.sort_by_key(|pos| (pos.x, pos.z));
        for pos in positions {
            connection
                .write_packet(
                    &ClientboundPacket::PreChunk {
                        x: pos.x,
                        z: pos.z,
                        load: true,
                    },
                    false,
                )
                .await?;
            let chunk = self
                .chunks
                .get_mut(&pos)
                .ok_or(WorldError::ChunkNotLoaded(pos.x, pos.z))?;
            let data = chunk.snapshot()?;
            connection
                .write_packet(
                    &ClientboundPacket::MapChunk {
                        x: pos.x * CHUNK_SIZE as i32,
                        y: 0,
                        z: pos.z * CHUNK_SIZE as i32,
                        size_x: (CHUNK_SIZE - 1) as u8,
                        size_y: (self.height - 1) as u8,
                        size_z: (CHUNK_SIZE - 1) as u8,
                        data,
                    },
                    false,
                )
                .await?;
        }
        connection.flush().await?;
        Ok(())
    }

    /// Rejects id collisions: an id is in the roster exactly once.
    pub fn add_player(&mut self, player: PlayerEntity) -> WorldResult<()> {
        let id = player.id();
        if self.entities.contains_key(&id) {
            return Err(WorldError::DuplicateEntity(id));
        }
        self.entities.insert(id, player);
        Ok(())
    }

    pub fn remove_player(&mut self, id: i32) -> Option<PlayerEntity> {
        self.entities.remove(&id)
    }

    pub fn player(&self, id: i32) -> Option<&PlayerEntity> {
        self.entities.get(&id)
    }

    pub fn player_mut(&mut self, id: i32) -> Option<&mut PlayerEntity> {
        self.entities.get_mut(&id)
    }

    pub fn player_count(&self) -> usize {
        self.entities.len()
    }

    fn locate(&self, x: i32, y: i32, z: i32) -> WorldResult<(&Chunk, usize, usize, usize)> {
        let (pos, lx, ly, lz) = self.local_coords(x, y, z)?;
        let chunk = self
            .chunks
            .get(&pos)
            .ok_or(WorldError::ChunkNotLoaded(pos.x, pos.z))?;
        Ok((chunk, lx, ly, lz))
    }

    fn locate_mut(&mut self, x: i32, y: i32, z: i32) -> WorldResult<(&mut Chunk, usize, usize, usize)> {
        let (pos, lx, ly, lz) = self.local_coords(x, y, z)?;
        let chunk = self
            .chunks
            .get_mut(&pos)
            .ok_or(WorldError::ChunkNotLoaded(pos.x, pos.z))?;
        Ok((chunk, lx, ly, lz))
    }

    fn local_coords(&self, x: i32, y: i32, z: i32) -> WorldResult<(ChunkPos, usize, usize, usize)> {
        if y < 0 || y as usize >= self.height {
            return Err(WorldError::OutOfBounds {
                x: (x & 15) as usize,
                y: y.max(0) as usize,
                z: (z & 15) as usize,
            });
        }
        let pos = BlockPos::new(x, y, z).chunk_pos();
        Ok((pos, (x & 15) as usize, y as usize, (z & 15) as usize))
    }

    pub(crate) fn light_value(&self, x: i32, y: i32, z: i32) -> WorldResult<u8> {
        let (chunk, lx, ly, lz) = self.locate(x, y, z)?;
        chunk.block_light(lx, ly, lz)
    }

    pub(crate) fn set_light_value(&mut self, x: i32, y: i32, z: i32, value: u8) -> WorldResult<()> {
        let (chunk, lx, ly, lz) = self.locate_mut(x, y, z)?;
        chunk.set_block_light(lx, ly, lz, value)
    }

    pub(crate) fn material_at(&self, x: i32, y: i32, z: i32) -> WorldResult<&'static Block> {
        let (chunk, lx, ly, lz) = self.locate(x, y, z)?;
        Ok(chunk.block(lx, ly, lz)?.material)
    }
}
