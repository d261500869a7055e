//! Flood-fill block-light: BFS propagation, remove-then-repropagate, and
//! border seeding when a chunk joins its already-lit neighbours. Sky light
//! shares the storage encoding but is seeded elsewhere.

use crate::{World, WorldError, WorldResult};
use std::cmp;
use std::collections::VecDeque;

pub const MAX_LIGHT: u8 = 15;

#[derive(Debug, Clone, Copy)]
struct LightNode {
    x: i32,
    y: i32,
    z: i32,
    value: u8,
}

impl LightNode {
    /// The up-to-six axis neighbours, with Y clamped to the world column.
    fn neighbours(&self, height: i32) -> impl Iterator<Item = (i32, i32, i32)> {
        let (x, y, z) = (self.x, self.y, self.z);
        [
            (x - 1, y, z),
            (x + 1, y, z),
            (x, y, z - 1),
            (x, y, z + 1),
            (x, y - 1, z),
            (x, y + 1, z),
        ]
        .into_iter()
        .filter(move |&(_, ny, _)| ny >= 0 && ny < height)
    }
}

/// Each step into a block costs `max(1, opacity)` light, so even air decays
/// the level by one.
fn falloff(value: u8, opacity: u8) -> u8 {
    value.saturating_sub(cmp::max(1, opacity))
}

/// Spreads `value` outward from the cell, across chunk borders, never
/// lowering a cell. An equal value at the seed still spreads: refreshing an
/// existing source has to be able to push its light into newly loaded
/// terrain.
pub fn propagate(world: &mut World, x: i32, y: i32, z: i32, value: u8) -> WorldResult<()> {
    if value > MAX_LIGHT {
        return Err(WorldError::LightOutOfRange(value));
    }
    if value == 0 {
        return Ok(());
    }

    let current = world.light_value(x, y, z)?;
    if current > value {
        return Ok(());
    }
    if current < value {
        world.set_light_value(x, y, z, value)?;
    }

    let height = world.height() as i32;
    let mut queue = VecDeque::from([LightNode { x, y, z, value }]);
    while let Some(node) = queue.pop_front() {
        if node.value <= 1 {
            continue; // cannot reach a neighbour
        }
        for (nx, ny, nz) in node.neighbours(height) {
            let current = match world.light_value(nx, ny, nz) {
                Ok(v) => v,
                Err(WorldError::ChunkNotLoaded(..)) => continue,
                Err(err) => return Err(err),
            };
            let block = world.material_at(nx, ny, nz)?;
            let candidate = falloff(node.value, block.light_opacity());
            if candidate == 0 {
                continue; // fully absorbed
            }
            if current >= candidate {
                continue;
            }
            world.set_light_value(nx, ny, nz, candidate)?;
            queue.push_back(LightNode {
                x: nx,
                y: ny,
                z: nz,
                value: candidate,
            });
        }
    }
    Ok(())
}

/// Clears the light rooted at a cell. Cells lit more brightly than our
/// falloff are someone else's light: they are left alone and re-propagated
/// afterwards, as are any emitting blocks swept up along the way.
pub fn remove(world: &mut World, x: i32, y: i32, z: i32) -> WorldResult<()> {
    let previous = world.light_value(x, y, z)?;
    if previous == 0 {
        return Ok(());
    }
    world.set_light_value(x, y, z, 0)?;

    let height = world.height() as i32;
    let mut queue = VecDeque::from([LightNode {
        x,
        y,
        z,
        value: previous,
    }]);
    let mut to_propagate: Vec<LightNode> = Vec::new();
    let mut to_recalculate: Vec<LightNode> = Vec::new();

    while let Some(node) = queue.pop_front() {
        if node.value <= 1 {
            continue;
        }
        for (nx, ny, nz) in node.neighbours(height) {
            let current = match world.light_value(nx, ny, nz) {
                Ok(v) => v,
                Err(WorldError::ChunkNotLoaded(..)) => continue,
                Err(err) => return Err(err),
            };
            if current == 0 {
                continue; // already swept
            }
            let block = world.material_at(nx, ny, nz)?;
            let candidate = falloff(node.value, block.light_opacity());
            if candidate == 0 {
                continue;
            }
            if current > candidate {
                // brighter than we could have made it: another source owns it
                to_propagate.push(LightNode {
                    x: nx,
                    y: ny,
                    z: nz,
                    value: current,
                });
                continue;
            }
            world.set_light_value(nx, ny, nz, 0)?;
            queue.push_back(LightNode {
                x: nx,
                y: ny,
                z: nz,
                value: candidate,
            });
            let emission = block.light_emission();
            if emission != 0 {
                to_recalculate.push(LightNode {
                    x: nx,
                    y: ny,
                    z: nz,
                    value: emission,
                });
            }
        }
    }

    for node in to_propagate {
        propagate(world, node.x, node.y, node.z, node.value)?;
    }
    for node in to_recalculate {
        propagate(world, node.x, node.y, node.z, node.value)?;
    }
    Ok(())
}

/// Seeds a freshly generated chunk with the light its loaded neighbours
/// already carry: every border cell of a neighbour with light worth sharing
/// is re-propagated, which spills it across the boundary.
pub fn reconcile_borders(world: &mut World, pos: ember_types::ChunkPos) -> WorldResult<()> {
    let height = world.height();
    let mut incoming: Vec<LightNode> = Vec::new();

    for neighbour_pos in pos.neighbours() {
        let Some(neighbour) = world.chunk(neighbour_pos) else {
            continue;
        };
        let dx = neighbour_pos.x - pos.x;
        let dz = neighbour_pos.z - pos.z;

        // the neighbour's cells along the shared face, or the single shared
        // column for a diagonal
        let xs: &[usize] = match dx {
            -1 => &[15],
            1 => &[0],
            _ => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        };
        let zs: &[usize] = match dz {
            -1 => &[15],
            1 => &[0],
            _ => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        };

        for y in 0..height {
            for &x in xs {
                for &z in zs {
                    let value = neighbour.block_light(x, y, z)?;
                    if value > 1 {
                        incoming.push(LightNode {
                            x: neighbour_pos.x * 16 + x as i32,
                            y: y as i32,
                            z: neighbour_pos.z * 16 + z as i32,
                            value,
                        });
                    }
                }
            }
        }
    }

    for node in incoming {
        propagate(world, node.x, node.y, node.z, node.value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FlatGenerator;
    use crate::World;
    use ember_material::blocks;
    use ember_types::{BlockPos, ChunkPos};

    fn empty_world() -> World {
        World::new(Box::new(FlatGenerator::new(Vec::new())))
    }

    fn light(world: &World, x: i32, y: i32, z: i32) -> u8 {
        world.light_value(x, y, z).unwrap()
    }

    #[test]
    fn torch_light_decays_one_per_step() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world.load_chunk(ChunkPos::new(1, 0)).unwrap();
        world
            .set_block(BlockPos::new(8, 8, 8), &blocks::TORCH, 0)
            .unwrap();

        assert_eq!(light(&world, 8, 8, 8), 14);
        assert_eq!(light(&world, 9, 8, 8), 13);
        assert_eq!(light(&world, 10, 8, 8), 12);
        assert_eq!(light(&world, 14, 8, 8), 8);
        assert_eq!(light(&world, 8, 21, 8), 1);
        assert_eq!(light(&world, 22, 8, 8), 0);
        // diagonal decay is Manhattan, not Chebyshev
        assert_eq!(light(&world, 9, 9, 8), 12);
    }

    #[test]
    fn propagation_crosses_chunk_borders() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world.load_chunk(ChunkPos::new(1, 0)).unwrap();
        world
            .set_block(BlockPos::new(15, 8, 8), &blocks::TORCH, 0)
            .unwrap();

        assert_eq!(light(&world, 16, 8, 8), 13);
        assert_eq!(light(&world, 20, 8, 8), 9);
    }

    #[test]
    fn unloaded_neighbours_are_skipped() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world
            .set_block(BlockPos::new(15, 8, 8), &blocks::TORCH, 0)
            .unwrap();

        assert_eq!(light(&world, 15, 8, 8), 14);
        assert!(matches!(
            world.light_value(16, 8, 8),
            Err(WorldError::ChunkNotLoaded(1, 0))
        ));
    }

    #[test]
    fn border_reconciliation_lights_a_late_chunk() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world
            .set_block(BlockPos::new(15, 8, 8), &blocks::TORCH, 0)
            .unwrap();

        world.load_chunk(ChunkPos::new(1, 0)).unwrap();
        assert_eq!(light(&world, 16, 8, 8), 13);
        assert_eq!(light(&world, 17, 8, 8), 12);
    }

    #[test]
    fn opaque_blocks_absorb_light() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world
            .set_block(BlockPos::new(9, 8, 8), &blocks::STONE, 0)
            .unwrap();
        world
            .set_block(BlockPos::new(8, 8, 8), &blocks::TORCH, 0)
            .unwrap();

        // the stone cell itself stays dark, but light routes around it
        assert_eq!(light(&world, 9, 8, 8), 0);
        assert_eq!(light(&world, 10, 8, 8), 10);
    }

    #[test]
    fn water_dims_light_by_its_opacity() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world
            .set_block(BlockPos::new(9, 8, 8), &blocks::WATER_STILL, 0)
            .unwrap();
        world
            .set_block(BlockPos::new(8, 8, 8), &blocks::TORCH, 0)
            .unwrap();

        assert_eq!(light(&world, 9, 8, 8), 11);
    }

    #[test]
    fn removing_a_source_clears_its_field() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world
            .set_block(BlockPos::new(8, 8, 8), &blocks::TORCH, 0)
            .unwrap();
        world
            .set_block(BlockPos::new(8, 8, 8), &blocks::AIR, 0)
            .unwrap();

        assert_eq!(light(&world, 8, 8, 8), 0);
        assert_eq!(light(&world, 9, 8, 8), 0);
        assert_eq!(light(&world, 12, 8, 8), 0);
    }

    #[test]
    fn removal_leaves_other_sources_standing() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        world
            .set_block(BlockPos::new(4, 8, 8), &blocks::TORCH, 0)
            .unwrap();
        world
            .set_block(BlockPos::new(12, 8, 8), &blocks::TORCH, 0)
            .unwrap();
        world
            .set_block(BlockPos::new(12, 8, 8), &blocks::AIR, 0)
            .unwrap();

        assert_eq!(light(&world, 4, 8, 8), 14);
        assert_eq!(light(&world, 8, 8, 8), 10);
        assert_eq!(light(&world, 12, 8, 8), 6);
    }

    #[test]
    fn propagate_rejects_out_of_range_values() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        assert!(matches!(
            propagate(&mut world, 0, 0, 0, 16),
            Err(WorldError::LightOutOfRange(16))
        ));
    }

    #[test]
    fn propagate_into_an_unloaded_chunk_is_a_resource_error() {
        let mut world = empty_world();
        assert!(matches!(
            propagate(&mut world, 0, 8, 0, 10),
            Err(WorldError::ChunkNotLoaded(0, 0))
        ));
    }

    #[test]
    fn a_bfs_never_lowers_a_cell() {
        let mut world = empty_world();
        world.load_chunk(ChunkPos::new(0, 0)).unwrap();
        propagate(&mut world, 8, 8, 8, 12).unwrap();
        propagate(&mut world, 8, 8, 8, 5).unwrap();
        assert_eq!(light(&world, 8, 8, 8), 12);
        assert_eq!(light(&world, 9, 8, 8), 11);
    }
}
