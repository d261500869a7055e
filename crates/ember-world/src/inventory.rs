//! Item stacks, as produced by the loot tables.

use ember_material::{blocks, Material};
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct ItemStack {
    pub material: Material,
    pub count: u8,
    pub data: u16,
}

impl ItemStack {
    pub fn new(material: Material, count: u8, data: u16) -> Self {
        Self {
            material,
            count,
            data,
        }
    }

    pub fn of_block(block: &'static ember_material::Block, count: u8, data: u16) -> Self {
        Self::new(Material::Block(block), count, data)
    }

    pub fn of_item(item: &'static ember_material::Item, count: u8, data: u16) -> Self {
        Self::new(Material::Item(item), count, data)
    }

    pub fn empty() -> Self {
        Self::of_block(&blocks::AIR, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.material.id() == 0
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.count, self.material.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_material::items;

    #[test]
    fn emptiness() {
        assert!(ItemStack::empty().is_empty());
        assert!(ItemStack::of_item(&items::COAL, 0, 0).is_empty());
        assert!(!ItemStack::of_item(&items::COAL, 1, 0).is_empty());
    }

    #[test]
    fn display() {
        let stack = ItemStack::of_item(&items::DIAMOND, 3, 0);
        assert_eq!(stack.to_string(), "3x Diamond");
    }
}
