use serde::Deserialize;

/// Glyphs that mark an empty grid cell.
pub const EMPTY_CELLS: [char; 2] = ['.', ' '];

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Meta {
    pub name: String,
    /// Optional clear colour hint, `[r, g, b]`.
    #[serde(default)]
    pub background_color: Option<[u8; 3]>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
    // Source pixels per cell, before the tile scale is applied
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self { columns: 0, rows: 0, tile_size: default_tile_size() }
    }
}

fn default_tile_size() -> f32 { 128.0 }

/// One named layer. `data` holds `rows` strings, top row first.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub data: Vec<String>,
}

/// A non-empty cell of a layer, in grid coordinates (row 0 is the top row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    pub glyph: char,
}

impl Layer {
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.data.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, glyph)| !EMPTY_CELLS.contains(glyph))
                .map(move |(col, glyph)| Cell { col: col as u32, row: row as u32, glyph })
        })
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct TileMap {
    pub meta: Meta,
    pub grid: Grid,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("layer '{layer}' has {found} rows, grid declares {expected}")]
    RowCount { layer: String, expected: u32, found: usize },
    #[error("layer '{layer}' row {row} has {found} cells, grid declares {expected}")]
    RowWidth { layer: String, row: usize, expected: u32, found: usize },
}

impl TileMap {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<TileMap>(s)
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Check every layer against the declared grid dimensions.
    pub fn validate(&self) -> Result<(), FormatError> {
        for layer in &self.layers {
            if layer.data.len() != self.grid.rows as usize {
                return Err(FormatError::RowCount {
                    layer: layer.name.clone(),
                    expected: self.grid.rows,
                    found: layer.data.len(),
                });
            }
            for (row, line) in layer.data.iter().enumerate() {
                let width = line.chars().count();
                if width != self.grid.columns as usize {
                    return Err(FormatError::RowWidth {
                        layer: layer.name.clone(),
                        row,
                        expected: self.grid.columns,
                        found: width,
                    });
                }
            }
        }
        Ok(())
    }
}
