use crate::actors::Player;
use crate::data::ProgressionConfig;
use crate::data::items::{Item, ItemEffect, ItemKind};
use crate::error::GameError;

/// What consuming an inventory slot actually did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    pub kind: ItemKind,
    pub effect: ItemEffect,
}

/// Read-only inventory row for the external menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemSummary {
    pub index: usize,
    pub name: &'static str,
    pub glyph: char,
}

/// Adds experience and performs at most one level-up per call. On
/// crossing the threshold the counter resets to zero, so overshoot is
/// discarded rather than banked. Returns whether a level was gained.
pub fn gain_experience(player: &mut Player, amount: i32, config: &ProgressionConfig) -> bool {
    if player.experience + amount >= config.level_up_threshold {
        player.level += 1;
        player.experience = 0;
        player.stats.max_health += config.health_per_level;
        player.stats.health = player.stats.max_health;
        player.stats.attack += config.attack_per_level;
        player.stats.defense += config.defense_per_level;
        true
    } else {
        player.experience += amount;
        false
    }
}

/// Consumes the slot at `index`, applying its stat delta. Healing is
/// capped at max health; inert kinds are removed with no stat change.
pub fn apply_item(player: &mut Player, index: usize) -> Result<ItemUse, GameError> {
    let kind = player
        .inventory
        .get(index)
        .map(|item| item.kind)
        .ok_or(GameError::InvalidIndex { index })?;

    let effect = match kind.effect() {
        ItemEffect::Heal(amount) => ItemEffect::Heal(player.stats.heal(amount)),
        ItemEffect::Attack(amount) => {
            player.stats.attack += amount;
            ItemEffect::Attack(amount)
        }
        ItemEffect::Defense(amount) => {
            player.stats.defense += amount;
            ItemEffect::Defense(amount)
        }
        ItemEffect::None => ItemEffect::None,
    };
    player.inventory.remove(index)?;
    Ok(ItemUse { kind, effect })
}

/// Moves a floor item into the inventory, refusing when full. The
/// caller keeps the floor copy alive on refusal.
pub fn pick_up(player: &mut Player, item: Item) -> Result<(), GameError> {
    player.inventory.push(Item { pos: None, ..item })
}

pub fn open_inventory(player: &Player) -> Vec<ItemSummary> {
    player
        .inventory
        .iter()
        .enumerate()
        .map(|(index, item)| ItemSummary {
            index,
            name: item.kind.name(),
            glyph: item.kind.glyph(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameConfig;
    use bracket_geometry::prelude::Point;

    fn fresh_player() -> Player {
        Player::new(&GameConfig::default())
    }

    #[test]
    fn crossing_the_threshold_levels_once() {
        let mut player = fresh_player();
        player.experience = 90;
        player.stats.health = 40;

        let leveled = gain_experience(&mut player, 20, &ProgressionConfig::default());
        assert!(leveled);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(player.stats.max_health, 120);
        assert_eq!(player.stats.health, 120);
        assert_eq!(player.stats.attack, 15);
        assert_eq!(player.stats.defense, 7);
    }

    #[test]
    fn overshoot_is_discarded() {
        let mut player = fresh_player();
        let leveled = gain_experience(&mut player, 250, &ProgressionConfig::default());
        assert!(leveled);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn below_threshold_just_accumulates() {
        let mut player = fresh_player();
        assert!(!gain_experience(&mut player, 60, &ProgressionConfig::default()));
        assert_eq!(player.experience, 60);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn inventory_refuses_when_full() {
        let mut player = fresh_player();
        for _ in 0..10 {
            pick_up(
                &mut player,
                Item::on_floor(ItemKind::Currency, Point::new(1, 1)),
            )
            .unwrap();
        }

        let err = pick_up(
            &mut player,
            Item::on_floor(ItemKind::Food, Point::new(2, 2)),
        )
        .unwrap_err();
        assert_eq!(err, GameError::InventoryFull);
        assert_eq!(player.inventory.len(), 10);
    }

    #[test]
    fn picked_up_items_lose_their_floor_position() {
        let mut player = fresh_player();
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::PotionHeal, Point::new(3, 4)),
        )
        .unwrap();
        assert_eq!(player.inventory.get(0).unwrap().pos, None);
    }

    #[test]
    fn healing_caps_at_max_health() {
        let mut player = fresh_player();
        player.stats.health = 95;
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::PotionHeal, Point::new(1, 1)),
        )
        .unwrap();

        let used = apply_item(&mut player, 0).unwrap();
        assert_eq!(used.effect, ItemEffect::Heal(5));
        assert_eq!(player.stats.health, 100);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn stat_items_raise_attack_and_defense() {
        let mut player = fresh_player();
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::ScrollAttack, Point::new(1, 1)),
        )
        .unwrap();
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::PotionDefense, Point::new(1, 2)),
        )
        .unwrap();

        apply_item(&mut player, 0).unwrap();
        assert_eq!(player.stats.attack, 20);
        apply_item(&mut player, 0).unwrap();
        assert_eq!(player.stats.defense, 10);
    }

    #[test]
    fn inert_items_are_consumed_without_effect() {
        let mut player = fresh_player();
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::Trinket, Point::new(1, 1)),
        )
        .unwrap();

        let used = apply_item(&mut player, 0).unwrap();
        assert_eq!(used.effect, ItemEffect::None);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut player = fresh_player();
        let err = apply_item(&mut player, 0).unwrap_err();
        assert_eq!(err, GameError::InvalidIndex { index: 0 });
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn inventory_listing_matches_slots() {
        let mut player = fresh_player();
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::ScrollHeal, Point::new(1, 1)),
        )
        .unwrap();
        pick_up(
            &mut player,
            Item::on_floor(ItemKind::Weapon, Point::new(2, 1)),
        )
        .unwrap();

        let listing = open_inventory(&player);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].name, "healing scroll");
        assert_eq!(listing[1].glyph, ')');
        assert_eq!(listing[1].index, 1);
    }
}
