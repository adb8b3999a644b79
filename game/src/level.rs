use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use level_format::TileMap;

use crate::error::{LoadError, LoadResult};
use crate::geometry::Aabb;

pub const PLATFORMS_LAYER: &str = "Platforms";
pub const COINS_LAYER: &str = "Coins";
pub const FOREGROUND_LAYER: &str = "Foreground";
pub const BACKGROUND_LAYER: &str = "Background";
pub const POISONS_LAYER: &str = "Poisons";
pub const DONT_TOUCH_LAYER: &str = "Don't Touch";
pub const HEARTS_LAYER: &str = "Hearts";

/// Which collection an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Wall,
    Coin,
    Heart,
    Poison,
    Hazard,
    Foreground,
    Background,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Wall,
        EntityKind::Coin,
        EntityKind::Heart,
        EntityKind::Poison,
        EntityKind::Hazard,
        EntityKind::Foreground,
        EntityKind::Background,
    ];

    pub fn layer_name(self) -> &'static str {
        match self {
            EntityKind::Wall => PLATFORMS_LAYER,
            EntityKind::Coin => COINS_LAYER,
            EntityKind::Heart => HEARTS_LAYER,
            EntityKind::Poison => POISONS_LAYER,
            EntityKind::Hazard => DONT_TOUCH_LAYER,
            EntityKind::Foreground => FOREGROUND_LAYER,
            EntityKind::Background => BACKGROUND_LAYER,
        }
    }
}

/// A positioned tile produced from a map layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique within one loaded level.
    pub id: u32,
    pub kind: EntityKind,
    pub glyph: char,
    pub bounds: Aabb,
}

/// Everything one level contributes to the running game. Each load produces a
/// fresh, independent copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelData {
    pub index: u32,
    pub name: String,
    pub walls: Vec<Entity>,
    pub coins: Vec<Entity>,
    pub hearts: Vec<Entity>,
    pub poisons: Vec<Entity>,
    pub hazards: Vec<Entity>,
    pub foreground: Vec<Entity>,
    pub background: Vec<Entity>,
    /// Right-most x the player must reach to finish the level.
    pub end_of_map: f32,
    pub background_color: Option<[u8; 3]>,
}

impl LevelData {
    pub fn entities(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Wall => &self.walls,
            EntityKind::Coin => &self.coins,
            EntityKind::Heart => &self.hearts,
            EntityKind::Poison => &self.poisons,
            EntityKind::Hazard => &self.hazards,
            EntityKind::Foreground => &self.foreground,
            EntityKind::Background => &self.background,
        }
    }

    fn entities_mut(&mut self, kind: EntityKind) -> &mut Vec<Entity> {
        match kind {
            EntityKind::Wall => &mut self.walls,
            EntityKind::Coin => &mut self.coins,
            EntityKind::Heart => &mut self.hearts,
            EntityKind::Poison => &mut self.poisons,
            EntityKind::Hazard => &mut self.hazards,
            EntityKind::Foreground => &mut self.foreground,
            EntityKind::Background => &mut self.background,
        }
    }

    /// Remove the entity with `id` from its collection. Returns whether it was
    /// still present.
    pub fn remove(&mut self, kind: EntityKind, id: u32) -> bool {
        let list = self.entities_mut(kind);
        let before = list.len();
        list.retain(|e| e.id != id);
        list.len() != before
    }
}

/// Where tile maps come from.
pub trait MapSource {
    fn read_map(&self, level: u32) -> LoadResult<TileMap>;
}

pub fn map_file_name(level: u32) -> String {
    format!("MapLevel{level}.toml")
}

/// Reads `MapLevel{n}.toml` files from a directory.
#[derive(Debug, Clone)]
pub struct DirMapSource {
    root: PathBuf,
}

impl DirMapSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.root.join(map_file_name(level))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MapSource for DirMapSource {
    fn read_map(&self, level: u32) -> LoadResult<TileMap> {
        let path = self.path_for(level);
        let content = fs::read_to_string(&path)
            .map_err(|source| LoadError::MissingAsset { path: path.clone(), source })?;
        TileMap::from_toml_str(&content).map_err(|source| LoadError::Parse { path, source })
    }
}

/// Maps held in memory, keyed by level index.
#[derive(Debug, Clone, Default)]
pub struct MemoryMapSource {
    maps: HashMap<u32, TileMap>,
}

impl MemoryMapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(mut self, level: u32, map: TileMap) -> Self {
        self.maps.insert(level, map);
        self
    }

    pub fn insert(&mut self, level: u32, map: TileMap) {
        self.maps.insert(level, map);
    }
}

impl MapSource for MemoryMapSource {
    fn read_map(&self, level: u32) -> LoadResult<TileMap> {
        self.maps.get(&level).cloned().ok_or(LoadError::UnknownLevel { level })
    }
}

/// Build the entity collections for `level`, scaling every tile by
/// `tile_scale`.
pub fn load_level<S: MapSource + ?Sized>(source: &S, level: u32, tile_scale: f32) -> LoadResult<LevelData> {
    let map = source.read_map(level)?;
    map.validate().map_err(|source| LoadError::Malformed { level, source })?;

    let cell = map.grid.tile_size * tile_scale;
    let rows = map.grid.rows as f32;
    let mut next_id = 0u32;
    let mut data = LevelData {
        index: level,
        name: map.meta.name.clone(),
        background_color: map.meta.background_color,
        ..Default::default()
    };

    for kind in EntityKind::ALL {
        let layer = map
            .layer(kind.layer_name())
            .ok_or(LoadError::MissingLayer { level, layer: kind.layer_name() })?;
        let list = data.entities_mut(kind);
        for c in layer.cells() {
            let center_x = (c.col as f32 + 0.5) * cell;
            let center_y = (rows - c.row as f32 - 0.5) * cell;
            list.push(Entity {
                id: next_id,
                kind,
                glyph: c.glyph,
                bounds: Aabb::new(center_x, center_y, cell, cell),
            });
            next_id += 1;
        }
    }

    data.end_of_map = (map.grid.columns as f32 - 1.0) * cell;

    tracing::info!(
        "loaded level {} '{}': {} walls, {} coins, {} hearts, {} poisons, {} hazards, end of map at {}",
        level,
        data.name,
        data.walls.len(),
        data.coins.len(),
        data.hearts.len(),
        data.poisons.len(),
        data.hazards.len(),
        data.end_of_map,
    );
    Ok(data)
}
