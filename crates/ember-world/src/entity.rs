//! Entity taxonomy and the roster entry for connected players.

use ember_types::Location;

/// Every entity kind the Beta dialect knows about, in its classification
/// order: mobs first, then objects, then the specials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EntityKind {
    Creeper,
    Skeleton,
    Spider,
    GiantZombie,
    Zombie,
    Slime,
    Ghast,
    ZombiePigman,
    Pig,
    Sheep,
    Cow,
    Hen,
    Squid,
    Wolf,

    Boat,
    Minecart,
    StorageCart,
    PoweredCart,
    ActivatedTnt,
    Arrow,
    ThrownSnowball,
    ThrownEgg,
    FallingSand,
    FallingGravel,
    FishingFloat,

    Player,
    Item,
    Painting,
    Lightning,
}

impl EntityKind {
    pub fn is_mob(self) -> bool {
        (self as u8) <= (EntityKind::Wolf as u8)
    }

    pub fn is_object(self) -> bool {
        (self as u8) >= (EntityKind::Boat as u8)
            && (self as u8) <= (EntityKind::FishingFloat as u8)
    }

    /// The wire type id used when spawning the entity; `None` for kinds
    /// that have dedicated spawn packets instead.
    pub fn type_id(self) -> Option<u8> {
        match self {
            EntityKind::Creeper => Some(50),
            EntityKind::Skeleton => Some(51),
            EntityKind::Spider => Some(52),
            EntityKind::GiantZombie => Some(53),
            EntityKind::Zombie => Some(54),
            EntityKind::Slime => Some(55),
            EntityKind::Ghast => Some(56),
            EntityKind::ZombiePigman => Some(57),
            EntityKind::Pig => Some(90),
            EntityKind::Sheep => Some(91),
            EntityKind::Cow => Some(92),
            EntityKind::Hen => Some(93),
            EntityKind::Squid => Some(94),
            EntityKind::Wolf => Some(95),
            EntityKind::Boat => Some(1),
            EntityKind::Minecart => Some(10),
            EntityKind::StorageCart => Some(11),
            EntityKind::PoweredCart => Some(12),
            EntityKind::ActivatedTnt => Some(20),
            EntityKind::Arrow => Some(60),
            EntityKind::ThrownSnowball => Some(61),
            EntityKind::ThrownEgg => Some(62),
            EntityKind::FallingSand => Some(70),
            EntityKind::FallingGravel => Some(71),
            EntityKind::FishingFloat => Some(90),
            EntityKind::Player
            | EntityKind::Item
            | EntityKind::Painting
            | EntityKind::Lightning => None,
        }
    }
}

/// A connected player as the world sees it.
#[derive(Debug, Clone)]
pub struct PlayerEntity {
    id: i32,
    username: String,
    location: Location,
}

impl PlayerEntity {
    pub fn new(id: i32, username: String, location: Location) -> Self {
        Self {
            id,
            username,
            location,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn kind(&self) -> EntityKind {
        EntityKind::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(EntityKind::Creeper.is_mob());
        assert!(EntityKind::Wolf.is_mob());
        assert!(!EntityKind::Boat.is_mob());
        assert!(EntityKind::Boat.is_object());
        assert!(EntityKind::FishingFloat.is_object());
        assert!(!EntityKind::Player.is_mob());
        assert!(!EntityKind::Player.is_object());
    }

    #[test]
    fn players_are_their_own_kind() {
        let mut player =
            PlayerEntity::new(1, "Pesk".into(), Location::new(0.5, 65.0, 0.5, 0.0, 0.0));
        assert_eq!(player.kind(), EntityKind::Player);
        assert_eq!(player.username(), "Pesk");

        let moved = Location::new(1.5, 65.0, 0.5, 90.0, 0.0);
        player.set_location(moved);
        assert_eq!(player.location(), moved);
    }

    #[test]
    fn wire_type_ids() {
        assert_eq!(EntityKind::Creeper.type_id(), Some(50));
        assert_eq!(EntityKind::Pig.type_id(), Some(90));
        assert_eq!(EntityKind::Boat.type_id(), Some(1));
        assert_eq!(EntityKind::Player.type_id(), None);
    }
}
