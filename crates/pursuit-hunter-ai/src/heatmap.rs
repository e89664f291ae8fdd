//! Decaying grid of prey-presence evidence.
//!
//! Square grid, row-major, one cell per world sub-region. Values are never
//! negative: deposits only add, decay only scales by a factor in (0, 1].

use glam::DVec2;

use pursuit_core::types::{safe_divisor, WorldBounds};

#[derive(Debug, Clone, PartialEq)]
pub struct HeatMap {
    size: usize,
    cells: Vec<f64>,
}

impl HeatMap {
    /// Zeroed `size` x `size` grid. A zero size is bumped to 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Cells per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Heat at a cell; indices are clamped into the grid.
    pub fn get(&self, cx: usize, cy: usize) -> f64 {
        self.cells[self.index(cx, cy)]
    }

    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    fn index(&self, cx: usize, cy: usize) -> usize {
        let last = self.size - 1;
        cy.min(last) * self.size + cx.min(last)
    }

    /// Grid cell containing a world point, clamped to the grid.
    pub fn cell_of(&self, p: DVec2, bounds: WorldBounds) -> (usize, usize) {
        let n = self.size as f64;
        let cw = safe_divisor(bounds.width / n);
        let ch = safe_divisor(bounds.height / n);
        let last = (self.size - 1) as f64;
        // NaN saturates to 0 in the cast.
        let cx = (p.x / cw).floor().clamp(0.0, last) as usize;
        let cy = (p.y / ch).floor().clamp(0.0, last) as usize;
        (cx, cy)
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cx: usize, cy: usize, bounds: WorldBounds) -> DVec2 {
        let last = self.size - 1;
        let n = self.size as f64;
        DVec2::new(
            (cx.min(last) as f64 + 0.5) * bounds.width / n,
            (cy.min(last) as f64 + 0.5) * bounds.height / n,
        )
    }

    /// Stamp `amount` around the cell containing `p`, falling off as
    /// 1 / (1 + distance) within `radius` cells. Off-grid cells are skipped.
    pub fn deposit(&mut self, p: DVec2, bounds: WorldBounds, amount: f64, radius: i32, cap: f64) {
        if !(amount > 0.0) {
            return;
        }
        let (cx, cy) = self.cell_of(p, bounds);
        let r = radius.max(0);
        let n = self.size as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                let d = f64::from(dx * dx + dy * dy).sqrt();
                if d > f64::from(r) {
                    continue;
                }
                let nx = cx as i64 + i64::from(dx);
                let ny = cy as i64 + i64::from(dy);
                if nx < 0 || ny < 0 || nx >= n || ny >= n {
                    continue;
                }
                let i = ny as usize * self.size + nx as usize;
                self.cells[i] = (self.cells[i] + amount / (1.0 + d)).min(cap);
            }
        }
    }

    /// Scale every cell by `1 - min(rate * dt, max_per_tick)`.
    /// Cells that fall under `floor` are flushed to zero.
    pub fn decay(&mut self, dt: f64, rate: f64, max_per_tick: f64, floor: f64) {
        let fraction = (rate * dt).clamp(0.0, max_per_tick.clamp(0.0, 1.0));
        if !(fraction > 0.0) {
            return;
        }
        let keep = 1.0 - fraction;
        for cell in &mut self.cells {
            *cell *= keep;
            if *cell < floor {
                *cell = 0.0;
            }
        }
    }
}
