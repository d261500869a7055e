//! Terrain generation. The only built-in is the flat layer generator used to
//! seed worlds and tests; anything richer plugs in through the same trait.

use crate::chunk::{Chunk, CHUNK_SIZE};
use crate::WorldResult;
use ember_material::{blocks, Block};

pub trait ChunkGenerator {
    fn generate(&self, chunk: &mut Chunk) -> WorldResult<()>;
}

/// One horizontal slab of a flat world.
#[derive(Debug, Clone, Copy)]
pub struct Layer {
    pub material: &'static Block,
    pub data: u8,
    pub height: usize,
}

impl Layer {
    pub fn new(material: &'static Block, data: u8, height: usize) -> Self {
        Self {
            material,
            data,
            height,
        }
    }
}

/// Fills chunks with stacked layers, bottom-up, stopping at world height.
pub struct FlatGenerator {
    layers: Vec<Layer>,
}

impl FlatGenerator {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Bedrock floor, three dirt layers, grass on top.
    pub fn standard() -> Self {
        Self::new(vec![
            Layer::new(&blocks::BEDROCK, 0, 1),
            Layer::new(&blocks::DIRT, 0, 3),
            Layer::new(&blocks::GRASS_BLOCK, 0, 1),
        ])
    }
}

impl ChunkGenerator for FlatGenerator {
    fn generate(&self, chunk: &mut Chunk) -> WorldResult<()> {
        let mut y = 0;
        let world_height = chunk.height();

        for layer in &self.layers {
            for _ in 0..layer.height {
                if y == world_height {
                    return Ok(()); // reached max world height
                }
                for x in 0..CHUNK_SIZE {
                    for z in 0..CHUNK_SIZE {
                        chunk.set_block(x, y, z, layer.material, layer.data)?;
                    }
                }
                y += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_types::ChunkPos;

    #[test]
    fn layers_fill_in_order() {
        let generator = FlatGenerator::standard();
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 128);
        generator.generate(&mut chunk).unwrap();

        assert!(chunk.block(0, 0, 0).unwrap().material.is(&blocks::BEDROCK));
        assert!(chunk.block(7, 2, 9).unwrap().material.is(&blocks::DIRT));
        assert!(chunk
            .block(15, 4, 15)
            .unwrap()
            .material
            .is(&blocks::GRASS_BLOCK));
        assert!(chunk.block(0, 5, 0).unwrap().material.is(&blocks::AIR));
    }

    #[test]
    fn layers_are_clipped_to_world_height() {
        let generator = FlatGenerator::new(vec![Layer::new(&blocks::STONE, 0, 10)]);
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 4);
        generator.generate(&mut chunk).unwrap();
        assert!(chunk.block(0, 3, 0).unwrap().material.is(&blocks::STONE));
    }

    #[test]
    fn empty_layer_list_leaves_air() {
        let generator = FlatGenerator::new(Vec::new());
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 128);
        generator.generate(&mut chunk).unwrap();
        assert!(chunk.block(8, 0, 8).unwrap().material.is(&blocks::AIR));
    }
}
