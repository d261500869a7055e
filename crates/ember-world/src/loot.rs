//! What a broken block yields: a pure function of the block, its metadata
//! and a random source.

use crate::inventory::ItemStack;
use ember_material::{blocks, items, Block};
use rand::Rng;

/// Calculates the item drops for a broken block.
pub fn drops(block: &'static Block, metadata: u8, rng: &mut impl Rng) -> Vec<ItemStack> {
    let tries = loot_tries(block, rng);
    let mut drops = Vec::with_capacity(tries);

    for try_num in 0..tries {
        if rng.gen::<f32>() <= loot_chance(block, metadata, try_num) {
            let stack = loot_stack(block, metadata, try_num, rng);
            if !stack.is_empty() {
                drops.push(stack);
            }
        }
    }

    drops
}

/// How many drop attempts the block makes.
fn loot_tries(block: &'static Block, rng: &mut impl Rng) -> usize {
    static NO_DROPS: &[&Block] = &[
        &blocks::AIR,
        &blocks::BOOKSHELF,
        &blocks::CAKE_BLOCK,
        &blocks::FIRE,
        &blocks::WATER_FLOWING,
        &blocks::WATER_STILL,
        &blocks::LAVA_FLOWING,
        &blocks::LAVA_STILL,
        &blocks::GLASS,
        &blocks::ICE,
        &blocks::MOB_SPAWNER,
        &blocks::PISTON_HEAD,
        &blocks::PORTAL,
        &blocks::SNOW_LAYER,
        &blocks::TNT,
    ];
    if NO_DROPS.iter().any(|b| block.is(b)) {
        return 0;
    }
    if block.is(&blocks::CLAY_BLOCK) {
        4
    } else if block.is(&blocks::SEEDS) {
        4 // one wheat attempt plus three seed attempts
    } else if block.is(&blocks::GLOWSTONE_BLOCK) {
        2 + rng.gen_range(0..3)
    } else if block.is(&blocks::LEAVES) {
        if rng.gen_range(0..20) == 0 {
            1 // 1 in 20 chance to attempt a sapling drop
        } else {
            0
        }
    } else if block.is(&blocks::LAPIS_LAZULI_ORE) {
        4 + rng.gen_range(0..5)
    } else if block.is(&blocks::REDSTONE_ORE) || block.is(&blocks::REDSTONE_ORE_GLOWING) {
        4 + rng.gen_range(0..2)
    } else if block.is(&blocks::SNOW_BLOCK) {
        4
    } else if block.is(&blocks::DOUBLE_SLAB) {
        2
    } else {
        1
    }
}

/// The chance of a specific attempt succeeding.
fn loot_chance(block: &'static Block, metadata: u8, try_num: usize) -> f32 {
    if block.is(&blocks::SEEDS) && try_num != 0 {
        // extra seed chance grows with the crop; fully grown (meta 7) is 50%
        return f32::from(metadata) / 14.0;
    }
    1.0
}

/// The stack a successful attempt produces.
fn loot_stack(
    block: &'static Block,
    metadata: u8,
    try_num: usize,
    rng: &mut impl Rng,
) -> ItemStack {
    // blocks that never drop anything
    if block.is(&blocks::CAKE_BLOCK)
        || block.is(&blocks::DEAD_BUSH)
        || block.is(&blocks::PISTON_HEAD)
        || block.is(&blocks::MOB_SPAWNER)
    {
        return ItemStack::empty();
    }

    // metadata-dependent drops
    if block.is(&blocks::BED_BLOCK) {
        if metadata & 0x8 != 0 {
            return ItemStack::empty(); // head piece
        }
        return ItemStack::of_item(&items::BED, 1, 0);
    }
    if block.is(&blocks::WOODEN_DOOR_BLOCK) {
        if metadata & 0x8 != 0 {
            return ItemStack::empty(); // upper half
        }
        return ItemStack::of_item(&items::WOODEN_DOOR, 1, 0);
    }
    if block.is(&blocks::IRON_DOOR_BLOCK) {
        if metadata & 0x8 != 0 {
            return ItemStack::empty(); // upper half
        }
        return ItemStack::of_item(&items::IRON_DOOR, 1, 0);
    }
    if block.is(&blocks::SEEDS) {
        if try_num == 0 {
            if metadata == 7 {
                return ItemStack::of_item(&items::WHEAT, 1, 0);
            }
            return ItemStack::empty();
        }
        return ItemStack::of_item(&items::WHEAT_SEEDS, 1, 0);
    }

    // blocks that drop a different block
    if block.is(&blocks::FARMLAND) || block.is(&blocks::GRASS_BLOCK) {
        return ItemStack::of_block(&blocks::DIRT, 1, 0);
    }
    if block.is(&blocks::STONE) {
        return ItemStack::of_block(&blocks::COBBLESTONE, 1, 0);
    }
    if block.is(&blocks::FURNACE) || block.is(&blocks::FURNACE_LIT) {
        return ItemStack::of_block(&blocks::FURNACE, 1, 0);
    }

    // ores and chance-based drops
    if block.is(&blocks::GLOWSTONE_BLOCK) {
        return ItemStack::of_item(&items::GLOWSTONE_DUST, 1, 0);
    }
    if block.is(&blocks::GRAVEL) {
        if rng.gen_range(0..10) == 0 {
            return ItemStack::of_item(&items::FLINT, 1, 0);
        }
        return ItemStack::of_block(&blocks::GRAVEL, 1, 0);
    }
    if block.is(&blocks::COAL_ORE) {
        return ItemStack::of_item(&items::COAL, 1, 0);
    }
    if block.is(&blocks::DIAMOND_ORE) {
        return ItemStack::of_item(&items::DIAMOND, 1, 0);
    }
    if block.is(&blocks::REDSTONE_ORE) || block.is(&blocks::REDSTONE_ORE_GLOWING) {
        return ItemStack::of_item(&items::REDSTONE_DUST, 1, 0);
    }
    if block.is(&blocks::LAPIS_LAZULI_ORE) {
        return ItemStack::of_item(&items::DYE, 1, 4); // 4 is lapis
    }
    if block.is(&blocks::TALL_GRASS) {
        if rng.gen_range(0..8) == 0 {
            return ItemStack::of_item(&items::WHEAT_SEEDS, 1, 0);
        }
        return ItemStack::empty();
    }

    // blocks that drop a specific item
    if block.is(&blocks::CLAY_BLOCK) {
        return ItemStack::of_item(&items::CLAY_BALLS, 1, 0);
    }
    if block.is(&blocks::LEAVES) {
        return ItemStack::of_block(&blocks::SAPLING, 1, u16::from(metadata & 3));
    }
    if block.is(&blocks::REDSTONE_WIRE) {
        return ItemStack::of_item(&items::REDSTONE_DUST, 1, 0);
    }
    if block.is(&blocks::REDSTONE_REPEATER_OFF) || block.is(&blocks::REDSTONE_REPEATER_ON) {
        return ItemStack::of_item(&items::REDSTONE_REPEATER, 1, 0);
    }
    if block.is(&blocks::REDSTONE_TORCH_OFF) || block.is(&blocks::REDSTONE_TORCH_ON) {
        return ItemStack::of_block(&blocks::REDSTONE_TORCH_ON, 1, 0);
    }
    if block.is(&blocks::SUGAR_CANE_BLOCK) {
        return ItemStack::of_item(&items::SUGAR_CANE, 1, 0);
    }
    if block.is(&blocks::SIGN_BLOCK) || block.is(&blocks::SIGN_WALL) {
        return ItemStack::of_item(&items::SIGN, 1, 0);
    }
    if block.is(&blocks::SNOW_BLOCK) || block.is(&blocks::SNOW_LAYER) {
        return ItemStack::of_item(&items::SNOWBALL, 1, 0);
    }
    if block.is(&blocks::COBWEB) {
        return ItemStack::of_item(&items::STRING, 1, 0);
    }

    // blocks that drop themselves, metadata preserved
    if block.is(&blocks::SLAB) || block.is(&blocks::DOUBLE_SLAB) {
        return ItemStack::of_block(&blocks::SLAB, 1, u16::from(metadata));
    }
    if block.is(&blocks::WOOD) {
        return ItemStack::of_block(&blocks::WOOD, 1, u16::from(metadata));
    }
    if block.is(&blocks::WOOL) {
        return ItemStack::of_block(&blocks::WOOL, 1, u16::from(metadata));
    }
    if block.is(&blocks::SAPLING) {
        return ItemStack::of_block(&blocks::SAPLING, 1, u16::from(metadata & 3));
    }

    // everything else drops itself with no metadata
    ItemStack::of_block(block, 1, 0)
}
