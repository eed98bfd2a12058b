//! Tile partitioning for parallel rendering.
//!
//! The image is split into a fixed `tiles_per_row x tiles_per_row` grid.
//! Each tile is rendered independently by one worker.

/// A half-open pixel rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl RenderBounds {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }

    /// Pixel coordinates in scan order: rows top to bottom, x innermost.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..self.max_y).flat_map(move |y| (min_x..max_x).map(move |x| (x, y)))
    }
}

/// Compute the bounds of tile `tile_id` in a `tiles_per_row`-square grid.
///
/// Tile ids run row-major: `tile_x = id % tiles_per_row`,
/// `tile_y = id / tiles_per_row`. Edges are placed at
/// `i * size / tiles_per_row`, so the grid covers the image without gaps or
/// overlap even when the size is not an exact multiple.
pub fn tile_bounds(width: u32, height: u32, tiles_per_row: u32, tile_id: u32) -> RenderBounds {
    let tile_y = tile_id / tiles_per_row;
    let tile_x = tile_id % tiles_per_row;

    RenderBounds::new(
        grid_edge(tile_x, width, tiles_per_row),
        grid_edge(tile_y, height, tiles_per_row),
        grid_edge(tile_x + 1, width, tiles_per_row),
        grid_edge(tile_y + 1, height, tiles_per_row),
    )
}

/// All tile bounds in tile-id order.
pub fn generate_tiles(width: u32, height: u32, tiles_per_row: u32) -> Vec<RenderBounds> {
    (0..tiles_per_row * tiles_per_row)
        .map(|id| tile_bounds(width, height, tiles_per_row, id))
        .collect()
}

#[inline]
fn grid_edge(index: u32, size: u32, tiles_per_row: u32) -> u32 {
    (index as u64 * size as u64 / tiles_per_row as u64) as u32
}
