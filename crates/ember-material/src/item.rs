/// The slot where an item can be equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    Hand,
    Head,
    Chest,
    Legs,
    Feet,
}

/// Items live above the block id range: wire id = base id + 256.
pub const ITEM_ID_OFFSET: u16 = 256;

const WOOD_MAX_USES: u16 = 59;
const STONE_MAX_USES: u16 = 131;
const IRON_MAX_USES: u16 = 250;
const GOLD_MAX_USES: u16 = 32;
const DIAMOND_MAX_USES: u16 = 1561;

/// A registered item material and its attributes.
#[derive(Debug)]
pub struct Item {
    id: u16,
    name: &'static str,
    max_stack_size: u16,
    max_damage: u16,
    has_durability: bool,
    is_tool: bool,
    is_food: bool,
    equip_slot: EquipSlot,
}

impl Item {
    const fn new(base_id: u16, name: &'static str) -> Self {
        Self {
            id: base_id + ITEM_ID_OFFSET,
            name,
            max_stack_size: 64,
            max_damage: 0,
            has_durability: false,
            is_tool: false,
            is_food: false,
            equip_slot: EquipSlot::Hand,
        }
    }

    const fn stack_size(mut self, size: u16) -> Self {
        self.max_stack_size = size;
        self
    }

    const fn damage(mut self, max_damage: u16) -> Self {
        if max_damage > 0 {
            self.max_damage = max_damage;
            self.has_durability = true;
        }
        self
    }

    const fn tool(mut self, durability: u16) -> Self {
        self.max_stack_size = 1;
        self.is_tool = true;
        self.damage(durability)
    }

    const fn food(mut self) -> Self {
        self.max_stack_size = 1;
        self.is_food = true;
        self
    }

    const fn slot(mut self, slot: EquipSlot) -> Self {
        self.equip_slot = slot;
        self
    }

    /// The full wire id, offset past the block range.
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is(&self, other: &Item) -> bool {
        self.id == other.id
    }

    pub fn max_stack_size(&self) -> u16 {
        self.max_stack_size
    }

    /// Zero when the item has no durability.
    pub fn max_damage(&self) -> u16 {
        self.max_damage
    }

    pub fn has_durability(&self) -> bool {
        self.has_durability
    }

    pub fn is_tool(&self) -> bool {
        self.is_tool
    }

    pub fn is_food(&self) -> bool {
        self.is_food
    }

    pub fn equip_slot(&self) -> EquipSlot {
        self.equip_slot
    }
}

pub static IRON_SHOVEL: Item = Item::new(0, "Iron Shovel").tool(IRON_MAX_USES);
pub static IRON_PICKAXE: Item = Item::new(1, "Iron Pickaxe").tool(IRON_MAX_USES);
pub static IRON_AXE: Item = Item::new(2, "Iron Axe").tool(IRON_MAX_USES);
pub static FLINT_AND_STEEL: Item = Item::new(3, "Flint and Steel").tool(64);
pub static APPLE: Item = Item::new(4, "Apple").food();
pub static BOW: Item = Item::new(5, "Bow").tool(384);
pub static ARROW: Item = Item::new(6, "Arrow");
pub static COAL: Item = Item::new(7, "Coal");
pub static DIAMOND: Item = Item::new(8, "Diamond");
pub static IRON_INGOT: Item = Item::new(9, "Iron Ingot");
pub static GOLD_INGOT: Item = Item::new(10, "Gold Ingot");
pub static IRON_SWORD: Item = Item::new(11, "Iron Sword").tool(IRON_MAX_USES);
pub static WOODEN_SWORD: Item = Item::new(12, "Wooden Sword").tool(WOOD_MAX_USES);
pub static WOODEN_SHOVEL: Item = Item::new(13, "Wooden Shovel").tool(WOOD_MAX_USES);
pub static WOODEN_PICKAXE: Item = Item::new(14, "Wooden Pickaxe").tool(WOOD_MAX_USES);
pub static WOODEN_AXE: Item = Item::new(15, "Wooden Axe").tool(WOOD_MAX_USES);
pub static STONE_SWORD: Item = Item::new(16, "Stone Sword").tool(STONE_MAX_USES);
pub static STONE_SHOVEL: Item = Item::new(17, "Stone Shovel").tool(STONE_MAX_USES);
pub static STONE_PICKAXE: Item = Item::new(18, "Stone Pickaxe").tool(STONE_MAX_USES);
pub static STONE_AXE: Item = Item::new(19, "Stone Axe").tool(STONE_MAX_USES);
pub static DIAMOND_SWORD: Item = Item::new(20, "Diamond Sword").tool(DIAMOND_MAX_USES);
pub static DIAMOND_SHOVEL: Item = Item::new(21, "Diamond Shovel").tool(DIAMOND_MAX_USES);
pub static DIAMOND_PICKAXE: Item = Item::new(22, "Diamond Pickaxe").tool(DIAMOND_MAX_USES);
pub static DIAMOND_AXE: Item = Item::new(23, "Diamond Axe").tool(DIAMOND_MAX_USES);
pub static STICK: Item = Item::new(24, "Stick");
pub static BOWL: Item = Item::new(25, "Bowl");
pub static MUSHROOM_STEW: Item = Item::new(26, "Mushroom Stew").food();
pub static GOLD_SWORD: Item = Item::new(27, "Gold Sword").tool(GOLD_MAX_USES);
pub static GOLD_SHOVEL: Item = Item::new(28, "Gold Shovel").tool(GOLD_MAX_USES);
pub static GOLD_PICKAXE: Item = Item::new(29, "Gold Pickaxe").tool(GOLD_MAX_USES);
pub static GOLD_AXE: Item = Item::new(30, "Gold Axe").tool(GOLD_MAX_USES);
pub static STRING: Item = Item::new(31, "String");
pub static FEATHER: Item = Item::new(32, "Feather");
pub static GUNPOWDER: Item = Item::new(33, "Gunpowder");
pub static WOODEN_HOE: Item = Item::new(34, "Wooden Hoe").tool(WOOD_MAX_USES);
pub static STONE_HOE: Item = Item::new(35, "Stone Hoe").tool(STONE_MAX_USES);
pub static IRON_HOE: Item = Item::new(36, "Iron Hoe").tool(IRON_MAX_USES);
pub static DIAMOND_HOE: Item = Item::new(37, "Diamond Hoe").tool(DIAMOND_MAX_USES);
pub static GOLD_HOE: Item = Item::new(38, "Gold Hoe").tool(GOLD_MAX_USES);
pub static WHEAT_SEEDS: Item = Item::new(39, "Wheat Seeds");
pub static WHEAT: Item = Item::new(40, "Wheat");
pub static BREAD: Item = Item::new(41, "Bread").food();
pub static LEATHER_HELMET: Item = Item::new(42, "Leather Helmet").tool(11 * 3).slot(EquipSlot::Head);
pub static LEATHER_TUNIC: Item = Item::new(43, "Leather Tunic").tool(16 * 3).slot(EquipSlot::Chest);
pub static LEATHER_PANTS: Item = Item::new(44, "Leather Pants").tool(15 * 3).slot(EquipSlot::Legs);
pub static LEATHER_BOOTS: Item = Item::new(45, "Leather Boots").tool(13 * 3).slot(EquipSlot::Feet);
pub static CHAINMAIL_HELMET: Item = Item::new(46, "Chainmail Helmet").tool(11 * 6).slot(EquipSlot::Head);
pub static CHAINMAIL_CHESTPLATE: Item = Item::new(47, "Chainmail Chestplate").tool(16 * 6).slot(EquipSlot::Chest);
pub static CHAINMAIL_LEGGINGS: Item = Item::new(48, "Chainmail Leggings").tool(15 * 6).slot(EquipSlot::Legs);
pub static CHAINMAIL_BOOTS: Item = Item::new(49, "Chainmail Boots").tool(13 * 6).slot(EquipSlot::Feet);
pub static IRON_HELMET: Item = Item::new(50, "Iron Helmet").tool(11 * 12).slot(EquipSlot::Head);
pub static IRON_CHESTPLATE: Item = Item::new(51, "Iron Chestplate").tool(16 * 12).slot(EquipSlot::Chest);
pub static IRON_LEGGINGS: Item = Item::new(52, "Iron Leggings").tool(15 * 12).slot(EquipSlot::Legs);
pub static IRON_BOOTS: Item = Item::new(53, "Iron Boots").tool(13 * 12).slot(EquipSlot::Feet);
pub static DIAMOND_HELMET: Item = Item::new(54, "Diamond Helmet").tool(11 * 24).slot(EquipSlot::Head);
pub static DIAMOND_CHESTPLATE: Item = Item::new(55, "Diamond Chestplate").tool(16 * 24).slot(EquipSlot::Chest);
pub static DIAMOND_LEGGINGS: Item = Item::new(56, "Diamond Leggings").tool(15 * 24).slot(EquipSlot::Legs);
pub static DIAMOND_BOOTS: Item = Item::new(57, "Diamond Boots").tool(13 * 24).slot(EquipSlot::Feet);
pub static GOLD_HELMET: Item = Item::new(58, "Gold Helmet").tool(11 * 6).slot(EquipSlot::Head);
pub static GOLD_CHESTPLATE: Item = Item::new(59, "Gold Chestplate").tool(16 * 6).slot(EquipSlot::Chest);
pub static GOLD_LEGGINGS: Item = Item::new(60, "Gold Leggings").tool(15 * 6).slot(EquipSlot::Legs);
pub static GOLD_BOOTS: Item = Item::new(61, "Gold Boots").tool(13 * 6).slot(EquipSlot::Feet);
pub static FLINT: Item = Item::new(62, "Flint");
pub static RAW_PORKCHOP: Item = Item::new(63, "Raw Porkchop").food();
pub static COOKED_PORKCHOP: Item = Item::new(64, "Cooked Porkchop").food();
pub static PAINTING: Item = Item::new(65, "Painting");
pub static GOLDEN_APPLE: Item = Item::new(66, "Golden Apple").food();
pub static SIGN: Item = Item::new(67, "Sign").stack_size(1);
pub static WOODEN_DOOR: Item = Item::new(68, "Wooden Door").stack_size(1);
pub static BUCKET: Item = Item::new(69, "Bucket").stack_size(16);
pub static WATER_BUCKET: Item = Item::new(70, "Water Bucket").stack_size(1);
pub static LAVA_BUCKET: Item = Item::new(71, "Lava Bucket").stack_size(1);
pub static MINECART: Item = Item::new(72, "Minecart").stack_size(1);
pub static SADDLE: Item = Item::new(73, "Saddle").stack_size(1);
pub static IRON_DOOR: Item = Item::new(74, "Iron Door").stack_size(1);
pub static REDSTONE_DUST: Item = Item::new(75, "Redstone Dust");
pub static SNOWBALL: Item = Item::new(76, "Snowball").stack_size(16);
pub static BOAT: Item = Item::new(77, "Boat").stack_size(1);
pub static LEATHER: Item = Item::new(78, "Leather");
pub static MILK_BUCKET: Item = Item::new(79, "Milk Bucket").food();
pub static CLAY_BRICK: Item = Item::new(80, "Clay Brick");
pub static CLAY_BALLS: Item = Item::new(81, "Clay Balls");
pub static SUGAR_CANE: Item = Item::new(82, "Sugar Cane");
pub static PAPER: Item = Item::new(83, "Paper");
pub static BOOK: Item = Item::new(84, "Book");
pub static SLIMEBALL: Item = Item::new(85, "Slimeball");
pub static STORAGE_MINECART: Item = Item::new(86, "Storage Minecart").stack_size(1);
pub static POWERED_MINECART: Item = Item::new(87, "Powered Minecart").stack_size(1);
pub static EGG: Item = Item::new(88, "Egg").stack_size(16);
pub static COMPASS: Item = Item::new(89, "Compass").stack_size(1);
pub static FISHING_ROD: Item = Item::new(90, "Fishing Rod").tool(64);
pub static CLOCK: Item = Item::new(91, "Clock").stack_size(1);
pub static GLOWSTONE_DUST: Item = Item::new(92, "Glowstone Dust");
pub static RAW_FISH: Item = Item::new(93, "Raw Fish").food();
pub static COOKED_FISH: Item = Item::new(94, "Cooked Fish").food();
pub static DYE: Item = Item::new(95, "Dye");
pub static BONE: Item = Item::new(96, "Bone");
pub static SUGAR: Item = Item::new(97, "Sugar");
pub static CAKE: Item = Item::new(98, "Cake").stack_size(1);
pub static BED: Item = Item::new(99, "Bed").stack_size(1);
pub static REDSTONE_REPEATER: Item = Item::new(100, "Redstone Repeater");
pub static COOKIE: Item = Item::new(101, "Cookie").stack_size(8).food();
pub static MAP: Item = Item::new(102, "Map").stack_size(1);
pub static SHEARS: Item = Item::new(103, "Shears").tool(238);
pub static RECORD_13: Item = Item::new(2000, "13 Disc").stack_size(1);
pub static RECORD_CAT: Item = Item::new(2001, "Cat Disc").stack_size(1);

/// Every registered item, in id order.
pub static ITEMS: &[&Item] = &[
    &IRON_SHOVEL,
    &IRON_PICKAXE,
    &IRON_AXE,
    &FLINT_AND_STEEL,
    &APPLE,
    &BOW,
    &ARROW,
    &COAL,
    &DIAMOND,
    &IRON_INGOT,
    &GOLD_INGOT,
    &IRON_SWORD,
    &WOODEN_SWORD,
    &WOODEN_SHOVEL,
    &WOODEN_PICKAXE,
    &WOODEN_AXE,
    &STONE_SWORD,
    &STONE_SHOVEL,
    &STONE_PICKAXE,
    &STONE_AXE,
    &DIAMOND_SWORD,
    &DIAMOND_SHOVEL,
    &DIAMOND_PICKAXE,
    &DIAMOND_AXE,
    &STICK,
    &BOWL,
    &MUSHROOM_STEW,
    &GOLD_SWORD,
    &GOLD_SHOVEL,
    &GOLD_PICKAXE,
    &GOLD_AXE,
    &STRING,
    &FEATHER,
    &GUNPOWDER,
    &WOODEN_HOE,
    &STONE_HOE,
    &IRON_HOE,
    &DIAMOND_HOE,
    &GOLD_HOE,
    &WHEAT_SEEDS,
    &WHEAT,
    &BREAD,
    &LEATHER_HELMET,
    &LEATHER_TUNIC,
    &LEATHER_PANTS,
    &LEATHER_BOOTS,
    &CHAINMAIL_HELMET,
    &CHAINMAIL_CHESTPLATE,
    &CHAINMAIL_LEGGINGS,
    &CHAINMAIL_BOOTS,
    &IRON_HELMET,
    &IRON_CHESTPLATE,
    &IRON_LEGGINGS,
    &IRON_BOOTS,
    &DIAMOND_HELMET,
    &DIAMOND_CHESTPLATE,
    &DIAMOND_LEGGINGS,
    &DIAMOND_BOOTS,
    &GOLD_HELMET,
    &GOLD_CHESTPLATE,
    &GOLD_LEGGINGS,
    &GOLD_BOOTS,
    &FLINT,
    &RAW_PORKCHOP,
    &COOKED_PORKCHOP,
    &PAINTING,
    &GOLDEN_APPLE,
    &SIGN,
    &WOODEN_DOOR,
    &BUCKET,
    &WATER_BUCKET,
    &LAVA_BUCKET,
    &MINECART,
    &SADDLE,
    &IRON_DOOR,
    &REDSTONE_DUST,
    &SNOWBALL,
    &BOAT,
    &LEATHER,
    &MILK_BUCKET,
    &CLAY_BRICK,
    &CLAY_BALLS,
    &SUGAR_CANE,
    &PAPER,
    &BOOK,
    &SLIMEBALL,
    &STORAGE_MINECART,
    &POWERED_MINECART,
    &EGG,
    &COMPASS,
    &FISHING_ROD,
    &CLOCK,
    &GLOWSTONE_DUST,
    &RAW_FISH,
    &COOKED_FISH,
    &DYE,
    &BONE,
    &SUGAR,
    &CAKE,
    &BED,
    &REDSTONE_REPEATER,
    &COOKIE,
    &MAP,
    &SHEARS,
    &RECORD_13,
    &RECORD_CAT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_are_offset_past_blocks() {
        assert_eq!(IRON_SHOVEL.id(), 256);
        assert_eq!(SHEARS.id(), 256 + 103);
    }

    #[test]
    fn tools_stack_to_one_and_carry_durability() {
        assert_eq!(DIAMOND_PICKAXE.max_stack_size(), 1);
        assert!(DIAMOND_PICKAXE.is_tool());
        assert!(DIAMOND_PICKAXE.has_durability());
        assert_eq!(DIAMOND_PICKAXE.max_damage(), 1561);
        assert!(!STICK.is_tool());
        assert_eq!(STICK.max_stack_size(), 64);
    }

    #[test]
    fn armor_slots() {
        assert_eq!(IRON_HELMET.equip_slot(), EquipSlot::Head);
        assert_eq!(IRON_BOOTS.equip_slot(), EquipSlot::Feet);
        assert_eq!(FLINT.equip_slot(), EquipSlot::Hand);
    }

    #[test]
    fn food_overrides_stack_size() {
        assert!(COOKIE.is_food());
        assert_eq!(COOKIE.max_stack_size(), 1);
    }
}
