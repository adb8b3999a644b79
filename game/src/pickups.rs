use crate::events::{GameEvent, SoundCue};
use crate::geometry::Aabb;
use crate::level::{Entity, EntityKind, LevelData};

/// Score and health for the current playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub score: u32,
    pub health: i32,
}

/// Ids of every entity in `items` overlapping `bounds`.
pub fn hits(bounds: &Aabb, items: &[Entity]) -> Vec<u32> {
    items.iter().filter(|e| bounds.overlaps(&e.bounds)).map(|e| e.id).collect()
}

pub fn touches_any(bounds: &Aabb, items: &[Entity]) -> bool {
    items.iter().any(|e| bounds.overlaps(&e.bounds))
}

/// Collect every coin, heart and poison under the player, then apply them in
/// that order. Each item is removed as it is applied so it can never count
/// twice.
pub fn collect(bounds: &Aabb, level: &mut LevelData, stats: &mut Stats, events: &mut Vec<GameEvent>) {
    let batches: [(EntityKind, Vec<u32>, fn(&mut Stats)); 3] = [
        (EntityKind::Coin, hits(bounds, &level.coins), |s: &mut Stats| s.score += 1),
        (EntityKind::Heart, hits(bounds, &level.hearts), |s: &mut Stats| s.health += 1),
        (EntityKind::Poison, hits(bounds, &level.poisons), |s: &mut Stats| s.health -= 1),
    ];

    for (kind, ids, apply) in batches {
        for id in ids {
            if !level.remove(kind, id) {
                continue;
            }
            apply(stats);
            events.push(GameEvent::ItemRemoved { kind, id });
            events.push(GameEvent::Sound(SoundCue::Coin));
        }
    }
}
