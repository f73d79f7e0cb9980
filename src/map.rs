use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::consts::TILE_SIZE;
use crate::error::MapError;

fn default_tile_size() -> f32 {
    TILE_SIZE
}

/// Static occupancy grid. Row-major, `map[row][col]`, 0 = open, 1 = wall.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridMap {
    pub map: Vec<Vec<u8>>,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

impl Default for GridMap {
    fn default() -> Self {
        GridMap {
            map: vec![
                vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
                vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
                vec![1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1],
                vec![1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
                vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
                vec![1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1],
                vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                vec![1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1],
                vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            ],
            tile_size: TILE_SIZE,
        }
    }
}

impl GridMap {
    /// Builds a map from raw rows and checks the load-time preconditions.
    pub fn new(map: Vec<Vec<u8>>, tile_size: f32) -> Result<Self, MapError> {
        let grid = GridMap { map, tile_size };
        grid.validate()?;
        Ok(grid)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, MapError> {
        let grid: Self = toml::from_str(contents)?;
        grid.validate()?;
        Ok(grid)
    }

    pub fn parse_from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            rows = grid.rows(),
            cols = grid.cols(),
            "loaded map"
        );
        Ok(grid)
    }

    /// Rectangular, only 0/1 cells, solid outer ring.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.tile_size.is_nan() || self.tile_size <= 0.0 {
            return Err(MapError::BadTileSize(self.tile_size));
        }

        let rows = self.map.len();
        let cols = self.map.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MapError::Empty);
        }

        for (row, cells) in self.map.iter().enumerate() {
            if cells.len() != cols {
                return Err(MapError::NotRectangular {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value > 1 {
                    return Err(MapError::InvalidCell { col, row, value });
                }
                let on_border = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                if on_border && value == 0 {
                    return Err(MapError::OpenBoundary { col, row });
                }
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.map.len()
    }

    pub fn cols(&self) -> usize {
        self.map.first().map_or(0, Vec::len)
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn world_width(&self) -> f32 {
        self.cols() as f32 * self.tile_size
    }

    pub fn world_height(&self) -> f32 {
        self.rows() as f32 * self.tile_size
    }

    /// Anything outside the grid reads as wall.
    pub fn get_tile(&self, x: usize, y: usize) -> u8 {
        self.map
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(1)
    }

    /// Is the world-space point inside a wall cell?
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        let col = (x / self.tile_size).floor();
        let row = (y / self.tile_size).floor();
        if col < 0.0 || row < 0.0 {
            return true;
        }
        self.get_tile(col as usize, row as usize) != 0
    }

    /// Centre of the first open cell in row-major order.
    pub fn first_open_cell_center(&self) -> Option<(f32, f32)> {
        self.map.iter().enumerate().find_map(|(row, cells)| {
            cells.iter().position(|&c| c == 0).map(|col| {
                (
                    (col as f32 + 0.5) * self.tile_size,
                    (row as f32 + 0.5) * self.tile_size,
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_passes_validation() {
        let grid = GridMap::default();
        assert!(grid.validate().is_ok());
        assert_eq!(grid.rows(), 11);
        assert_eq!(grid.cols(), 15);
        assert_eq!(grid.world_width(), 480.0);
        assert_eq!(grid.world_height(), 352.0);
    }

    #[test]
    fn is_wall_floors_world_coordinates() {
        let grid = GridMap::default();
        // (1, 1) is open, (5, 2) is a pillar
        assert!(!grid.is_wall(32.0, 32.0));
        assert!(!grid.is_wall(63.9, 63.9));
        assert!(grid.is_wall(5.0 * 32.0 + 1.0, 2.0 * 32.0 + 31.0));
        assert!(grid.is_wall(31.9, 40.0));
    }

    #[test]
    fn outside_the_grid_reads_as_wall() {
        let grid = GridMap::default();
        assert!(grid.is_wall(-0.5, 40.0));
        assert!(grid.is_wall(40.0, -1.0));
        assert!(grid.is_wall(480.0, 40.0));
        assert_eq!(grid.get_tile(100, 0), 1);
    }

    #[test]
    fn rejects_open_boundary() {
        let err = GridMap::new(vec![vec![1, 1, 1], vec![0, 0, 1], vec![1, 1, 1]], 32.0)
            .unwrap_err();
        assert!(matches!(err, MapError::OpenBoundary { col: 0, row: 1 }));
    }

    #[test]
    fn rejects_ragged_rows_and_bad_codes() {
        let ragged = GridMap::new(vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]], 32.0);
        assert!(matches!(
            ragged,
            Err(MapError::NotRectangular { row: 1, expected: 3, found: 2 })
        ));

        let bad = GridMap::new(vec![vec![1, 1, 1], vec![1, 2, 1], vec![1, 1, 1]], 32.0);
        assert!(matches!(bad, Err(MapError::InvalidCell { value: 2, .. })));

        assert!(matches!(GridMap::new(vec![], 32.0), Err(MapError::Empty)));
        assert!(matches!(
            GridMap::new(vec![vec![1]], 0.0),
            Err(MapError::BadTileSize(_))
        ));
    }

    #[test]
    fn parses_toml_with_default_tile_size() {
        let grid = GridMap::from_toml_str(
            "map = [\n  [1, 1, 1],\n  [1, 0, 1],\n  [1, 1, 1],\n]\n",
        )
        .unwrap();
        assert_eq!(grid.tile_size(), TILE_SIZE);
        assert_eq!(grid.first_open_cell_center(), Some((48.0, 48.0)));
    }
}
