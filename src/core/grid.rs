//! Occupancy grid for the sand simulation
//!
//! Cells are addressed `(column, row)`; row 0 is the top of the canvas.

use bevy::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandGrid {
    width: u32,
    height: u32,
    // Column-major: cells[x * height + y]
    cells: Vec<bool>,
}

impl SandGrid {
    /// An empty grid of `width` columns and `height` rows
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    #[inline(always)]
    pub fn in_bounds(&self, coord: IVec2) -> bool {
        coord.x >= 0
            && (coord.x as u32) < self.width
            && coord.y >= 0
            && (coord.y as u32) < self.height
    }

    #[inline(always)]
    fn index(&self, coord: IVec2) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.x as usize * self.height as usize + coord.y as usize)
        } else {
            None
        }
    }

    /// Occupancy at `coord`, or `None` outside the grid
    #[inline(always)]
    pub fn get(&self, coord: IVec2) -> Option<bool> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// True only for an in-bounds empty cell
    #[inline(always)]
    pub fn is_empty_at(&self, coord: IVec2) -> bool {
        self.get(coord) == Some(false)
    }

    #[inline(always)]
    pub fn is_occupied(&self, coord: IVec2) -> bool {
        self.get(coord) == Some(true)
    }

    /// Write a cell. Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, coord: IVec2, occupied: bool) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Empty `from` and fill `to`. Both must be in bounds.
    pub(crate) fn move_particle(&mut self, from: IVec2, to: IVec2) {
        if let (Some(src), Some(dst)) = (self.index(from), self.index(to)) {
            self.cells[src] = false;
            self.cells[dst] = true;
        }
    }

    /// One column, top to bottom
    pub fn column(&self, x: u32) -> Option<&[bool]> {
        if x >= self.width {
            return None;
        }
        let start = (x * self.height) as usize;
        Some(&self.cells[start..start + self.height as usize])
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterator over every cell as (coordinate, occupied), column by column
    pub fn iter_cells(&self) -> impl Iterator<Item = (UVec2, bool)> + '_ {
        let height = self.height.max(1);
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let idx = idx as u32;
            (UVec2::new(idx / height, idx % height), cell)
        })
    }

    pub fn iter_occupied(&self) -> impl Iterator<Item = UVec2> + '_ {
        self.iter_cells()
            .filter_map(|(coord, occupied)| occupied.then_some(coord))
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let grid = SandGrid::new(3, 5);
        assert_eq!(grid.size(), UVec2::new(3, 5));
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.iter_cells().count(), 15);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut grid = SandGrid::new(2, 2);
        assert!(!grid.set(IVec2::new(-1, 0), true));
        assert!(!grid.set(IVec2::new(0, 2), true));
        assert!(!grid.set(IVec2::new(2, 0), true));
        assert_eq!(grid.get(IVec2::new(5, 5)), None);
        assert!(!grid.is_empty_at(IVec2::new(0, -1)));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn column_major_layout() {
        let mut grid = SandGrid::new(2, 3);
        grid.set(IVec2::new(1, 2), true);

        assert_eq!(grid.column(0), Some(&[false, false, false][..]));
        assert_eq!(grid.column(1), Some(&[false, false, true][..]));
        assert_eq!(grid.column(2), None);
        assert_eq!(grid.iter_occupied().collect::<Vec<_>>(), vec![UVec2::new(1, 2)]);
    }

    #[test]
    fn move_particle_swaps_flags() {
        let mut grid = SandGrid::new(2, 2);
        grid.set(IVec2::new(0, 0), true);
        grid.move_particle(IVec2::new(0, 0), IVec2::new(1, 1));

        assert!(grid.is_empty_at(IVec2::new(0, 0)));
        assert!(grid.is_occupied(IVec2::new(1, 1)));
        assert_eq!(grid.occupied_count(), 1);
    }
}
