use serde::{Deserialize, Serialize};

use super::pixel::PixelClass;

/// Row-major classification grid, `width * height` bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPixelGrid")]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

#[derive(Deserialize)]
struct RawPixelGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl TryFrom<RawPixelGrid> for PixelGrid {
    type Error = String;

    fn try_from(raw: RawPixelGrid) -> Result<Self, Self::Error> {
        let len = raw.cells.len();
        Self::new(raw.width, raw.height, raw.cells).ok_or_else(|| {
            format!(
                "pixel grid holds {len} cells, {}x{} expects {}",
                raw.width,
                raw.height,
                raw.width as u64 * raw.height as u64
            )
        })
    }
}

impl PixelGrid {
    /// Returns `None` when `cells` does not hold exactly `width * height` bytes.
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Flat index of the cell containing the fractional pixel position.
    pub fn index_at(&self, x: f64, y: f64) -> Option<usize> {
        let (x, y) = (x.floor(), y.floor());
        if !(x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn classify_at(&self, x: f64, y: f64) -> Option<PixelClass> {
        self.index_at(x, y)
            .and_then(|index| self.cells.get(index))
            .map(|&code| PixelClass::classify(code))
    }

    /// Iterates `(x, y, code)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &code)| (index as u32 % width, index as u32 / width, code))
    }
}

/// Inclusive pixel-space bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBox {
    pub fn from_pixel(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}
