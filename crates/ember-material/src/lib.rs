//! The Beta-era material catalog: block and item attribute tables and the
//! id lookup used by chunk storage and the wire.

mod block;
mod item;

pub use block::{Block, Group, PistonPolicy, BLOCKS};
pub use item::{EquipSlot, Item, ITEMS, ITEM_ID_OFFSET};

pub mod blocks {
    pub use crate::block::{
        AIR, BEDROCK, BED_BLOCK, BOOKSHELF, BRICKS, BROWN_MUSHROOM, CACTUS, CAKE_BLOCK, CHEST,
        CLAY_BLOCK, COAL_ORE, COBBLESTONE, COBBLESTONE_STAIRS, COBWEB, CRAFTING_TABLE, DANDELION,
        DEAD_BUSH, DETECTOR_RAIL, DIAMOND_BLOCK, DIAMOND_ORE, DIRT, DISPENSER, DOUBLE_SLAB,
        FARMLAND, FENCE, FIRE, FURNACE, FURNACE_LIT, GLASS, GLOWSTONE_BLOCK, GOLD_BLOCK, GOLD_ORE,
        GRASS_BLOCK, GRAVEL, ICE, IRON_BLOCK, IRON_DOOR_BLOCK, IRON_ORE, JACK_O_LANTERN, JUKEBOX,
        LADDER, LAPIS_LAZULI_BLOCK, LAPIS_LAZULI_ORE, LAVA_FLOWING, LAVA_STILL, LEAVES,
        LEVER, LOCKED_CHEST, MOB_SPAWNER, MOSS_STONE, NETHERRACK, NOTE_BLOCK, OBSIDIAN, PISTON,
        PISTON_HEAD, PORTAL, POWERED_RAIL, PUMPKIN, RAILS, REDSTONE_ORE, REDSTONE_ORE_GLOWING,
        REDSTONE_REPEATER_OFF, REDSTONE_REPEATER_ON, REDSTONE_TORCH_OFF, REDSTONE_TORCH_ON,
        REDSTONE_WIRE, RED_MUSHROOM, ROSE, SAND, SANDSTONE, SAPLING, SEEDS, SIGN_BLOCK, SIGN_WALL,
        SLAB, SNOW_BLOCK, SNOW_LAYER, SOUL_SAND, SPONGE, STICKY_PISTON, STONE, STONE_BUTTON,
        STONE_PRESSURE_PLATE, SUGAR_CANE_BLOCK, TALL_GRASS, TNT, TORCH, TRAPDOOR, WATER_FLOWING,
        WATER_STILL, WOOD, WOODEN_DOOR_BLOCK, WOODEN_PLANKS, WOODEN_PRESSURE_PLATE,
        WOODEN_STAIRS, WOOL,
    };
}

pub mod items {
    pub use crate::item::{
        APPLE, ARROW, BED, BOAT, BONE, BOOK, BOW, BOWL, BREAD, BUCKET, CAKE, CHAINMAIL_BOOTS,
        CHAINMAIL_CHESTPLATE, CHAINMAIL_HELMET, CHAINMAIL_LEGGINGS, CLAY_BALLS, CLAY_BRICK, CLOCK,
        COAL, COMPASS, COOKED_FISH, COOKED_PORKCHOP, COOKIE, DIAMOND, DIAMOND_AXE, DIAMOND_BOOTS,
        DIAMOND_CHESTPLATE, DIAMOND_HELMET, DIAMOND_HOE, DIAMOND_LEGGINGS, DIAMOND_PICKAXE,
        DIAMOND_SHOVEL, DIAMOND_SWORD, DYE, EGG, FEATHER, FISHING_ROD, FLINT, FLINT_AND_STEEL,
        GLOWSTONE_DUST, GOLDEN_APPLE, GOLD_AXE, GOLD_BOOTS, GOLD_CHESTPLATE, GOLD_HELMET,
        GOLD_HOE, GOLD_INGOT, GOLD_LEGGINGS, GOLD_PICKAXE, GOLD_SHOVEL, GOLD_SWORD, GUNPOWDER,
        IRON_AXE, IRON_BOOTS, IRON_CHESTPLATE, IRON_DOOR, IRON_HELMET, IRON_HOE, IRON_INGOT,
        IRON_LEGGINGS, IRON_PICKAXE, IRON_SHOVEL, IRON_SWORD, LAVA_BUCKET, LEATHER,
        LEATHER_BOOTS, LEATHER_HELMET, LEATHER_PANTS, LEATHER_TUNIC, MAP, MILK_BUCKET, MINECART,
        MUSHROOM_STEW, PAINTING, PAPER, POWERED_MINECART, RAW_FISH, RAW_PORKCHOP, RECORD_13,
        RECORD_CAT, REDSTONE_DUST, REDSTONE_REPEATER, SADDLE, SHEARS, SIGN, SLIMEBALL, SNOWBALL,
        STICK, STONE_AXE, STONE_HOE, STONE_PICKAXE, STONE_SHOVEL, STONE_SWORD, STORAGE_MINECART,
        STRING, SUGAR, SUGAR_CANE, WATER_BUCKET, WHEAT, WHEAT_SEEDS, WOODEN_AXE, WOODEN_DOOR,
        WOODEN_HOE, WOODEN_PICKAXE, WOODEN_SHOVEL, WOODEN_SWORD,
    };
}

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("material with id {0} not found")]
    Unknown(u16),
    #[error("material with id {0} is not a block")]
    NotABlock(u16),
}

/// A catalog entry: blocks occupy ids 0-255, items 256 and up.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    Block(&'static Block),
    Item(&'static Item),
}

impl Material {
    pub fn id(&self) -> u16 {
        match self {
            Material::Block(b) => b.id() as u16,
            Material::Item(i) => i.id(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Block(b) => b.name(),
            Material::Item(i) => i.name(),
        }
    }

    pub fn as_block(&self) -> Option<&'static Block> {
        match self {
            Material::Block(b) => Some(b),
            Material::Item(_) => None,
        }
    }
}

static BY_ID: Lazy<HashMap<u16, Material>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for block in BLOCKS {
        if table.insert(block.id() as u16, Material::Block(block)).is_some() {
            panic!("block with ID {} is already registered", block.id());
        }
    }
    for item in ITEMS {
        if table.insert(item.id(), Material::Item(item)).is_some() {
            panic!("item with ID {} is already registered", item.id());
        }
    }
    table
});

/// Looks up any material by its full id.
pub fn from_id(id: u16) -> Result<Material, MaterialError> {
    BY_ID.get(&id).copied().ok_or(MaterialError::Unknown(id))
}

/// Looks up a block by its single-byte id, as stored in chunk arrays.
pub fn block_from_id(id: u8) -> Result<&'static Block, MaterialError> {
    match from_id(id as u16)? {
        Material::Block(b) => Ok(b),
        Material::Item(_) => Err(MaterialError::NotABlock(id as u16)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_is_id_zero() {
        let air = block_from_id(0).unwrap();
        assert!(air.is(&blocks::AIR));
        assert_eq!(air.light_opacity(), 0);
        assert_eq!(air.light_emission(), 0);
    }

    #[test]
    fn every_catalog_entry_resolves() {
        for block in BLOCKS {
            assert!(block_from_id(block.id()).unwrap().is(block));
        }
        for item in ITEMS {
            assert!(matches!(from_id(item.id()), Ok(Material::Item(i)) if i.is(item)));
        }
    }

    #[test]
    fn unknown_id_fails() {
        assert!(matches!(from_id(200), Err(MaterialError::Unknown(200))));
        assert!(matches!(from_id(36), Err(MaterialError::Unknown(36))));
    }

    #[test]
    fn items_live_past_the_block_range() {
        assert!(matches!(from_id(256), Ok(Material::Item(i)) if i.is(&items::IRON_SHOVEL)));
        assert!(from_id(256).unwrap().as_block().is_none());
    }
}
