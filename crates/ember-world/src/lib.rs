//! The voxel world: packed chunk storage, incremental block lighting, the
//! chunk table and entity roster, terrain generation and loot.

pub mod chunk;
pub mod entity;
pub mod generator;
pub mod inventory;
pub mod light;
pub mod loot;
pub mod world;

pub use chunk::{BlockState, Chunk, NibbleArray, CHUNK_SIZE, DEFAULT_CHUNK_HEIGHT};
pub use entity::{EntityKind, PlayerEntity};
pub use generator::{ChunkGenerator, FlatGenerator, Layer};
pub use inventory::ItemStack;
pub use world::{BlockUpdate, Dimension, World};

use ember_material::MaterialError;
use ember_protocol::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("coordinates {x};{y};{z} are out of bounds of a chunk")]
    OutOfBounds { x: usize, y: usize, z: usize },
    #[error("light value out of bounds: {0}")]
    LightOutOfRange(u8),
    #[error("chunk at {0};{1} is not loaded")]
    ChunkNotLoaded(i32, i32),
    #[error("entity id {0} is already present in the world")]
    DuplicateEntity(i32),
    #[error(transparent)]
    Material(#[from] MaterialError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("failed to compress chunk data: {0}")]
    Snapshot(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
