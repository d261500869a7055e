pub mod chat;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

/// A full entity position: double-precision coordinates plus a view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl Location {
    pub fn new(x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Self {
        Self { x, y, z, yaw, pitch }
    }

    /// The block this location falls inside (floor, not truncation).
    pub fn block_pos(&self) -> BlockPos {
        BlockPos {
            x: self.x.floor() as i32,
            y: self.y.floor() as i32,
            z: self.z.floor() as i32,
        }
    }

    pub fn chunk_pos(&self) -> ChunkPos {
        self.block_pos().chunk_pos()
    }

    pub fn add(&self, x: f64, y: f64, z: f64) -> Location {
        Location {
            x: self.x + x,
            y: self.y + y,
            z: self.z + z,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    pub fn distance_to(&self, other: &Location) -> f64 {
        self.distance_to_squared(other).sqrt()
    }

    pub fn distance_to_squared(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location(X: {:.2}, Y: {:.2}, Z: {:.2}, Yaw: {:.1}, Pitch: {:.1})",
            self.x, self.y, self.z, self.yaw, self.pitch
        )
    }
}

/// A block position in the world (x, y, z integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> BlockPos {
        BlockPos {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    pub fn up(&self, n: i32) -> BlockPos {
        self.offset(0, n, 0)
    }

    pub fn down(&self, n: i32) -> BlockPos {
        self.offset(0, -n, 0)
    }

    /// Arithmetic shift keeps negative coordinates in the right chunk.
    pub fn chunk_pos(&self) -> ChunkPos {
        ChunkPos {
            x: self.x >> 4,
            z: self.z >> 4,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockPos(X: {}, Y: {}, Z: {})", self.x, self.y, self.z)
    }
}

/// A chunk column position (x, z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The eight surrounding columns, cardinals and diagonals.
    pub fn neighbours(&self) -> [ChunkPos; 8] {
        [
            ChunkPos::new(self.x - 1, self.z - 1),
            ChunkPos::new(self.x - 1, self.z),
            ChunkPos::new(self.x - 1, self.z + 1),
            ChunkPos::new(self.x, self.z - 1),
            ChunkPos::new(self.x, self.z + 1),
            ChunkPos::new(self.x + 1, self.z - 1),
            ChunkPos::new(self.x + 1, self.z),
            ChunkPos::new(self.x + 1, self.z + 1),
        ]
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkPos(X: {}, Z: {})", self.x, self.z)
    }
}

/// Hands out entity ids. Wraps back to zero at `i32::MAX`; under the
/// protocol's 32-bit id envelope the eventual reuse is an accepted hazard.
#[derive(Debug, Default)]
pub struct EntityIdAllocator {
    counter: AtomicI32,
}

impl EntityIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first id handed out is 1; 0 is never used.
    pub fn next(&self) -> i32 {
        let _ = self
            .counter
            .compare_exchange(i32::MAX, 0, Ordering::AcqRel, Ordering::Acquire);
        self.counter.fetch_add(1, Ordering::AcqRel) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_floors_toward_negative_infinity() {
        let loc = Location::new(-0.5, 64.9, 15.999, 0.0, 0.0);
        assert_eq!(loc.block_pos(), BlockPos::new(-1, 64, 15));
    }

    #[test]
    fn chunk_pos_uses_arithmetic_shift() {
        assert_eq!(BlockPos::new(0, 0, 0).chunk_pos(), ChunkPos::new(0, 0));
        assert_eq!(BlockPos::new(15, 0, 15).chunk_pos(), ChunkPos::new(0, 0));
        assert_eq!(BlockPos::new(16, 0, -1).chunk_pos(), ChunkPos::new(1, -1));
        assert_eq!(BlockPos::new(-16, 0, -17).chunk_pos(), ChunkPos::new(-1, -2));
    }

    #[test]
    fn entity_ids_start_at_one_and_increase() {
        let ids = EntityIdAllocator::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
        assert_eq!(ids.next(), 3);
    }

    #[test]
    fn entity_ids_wrap_at_i32_max() {
        let ids = EntityIdAllocator {
            counter: AtomicI32::new(i32::MAX),
        };
        assert_eq!(ids.next(), 1);
    }

    #[test]
    fn distance() {
        let a = Location::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let b = Location::new(3.0, 4.0, 0.0, 0.0, 0.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
