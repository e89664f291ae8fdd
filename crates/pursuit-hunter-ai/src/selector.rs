//! Heat-biased navigation target selection.
//!
//! Randomized hill-climbing: score a fixed number of random cells, keep the
//! best, then (HUNT only) climb toward hotter neighbors for a bounded number
//! of steps. Cost is independent of grid size.

use glam::DVec2;
use rand::Rng;

use pursuit_core::config::HunterConfig;
use pursuit_core::types::WorldBounds;

use crate::heatmap::HeatMap;

/// Pick a world-space navigation target.
///
/// With `prefer_hot` cells are scored by normalized heat alone and the best
/// sample climbs toward the local peak. Otherwise heat is blended with a
/// uniform draw and the best sample is kept as is. Both subtract an edge
/// penalty. When
/// `prefer_hot` is set and every sampled cell is cold there is no target,
/// and the world center is returned.
pub fn select_target<R: Rng + ?Sized>(
    heat: &HeatMap,
    bounds: WorldBounds,
    prefer_hot: bool,
    config: &HunterConfig,
    rng: &mut R,
) -> DVec2 {
    let n = heat.size();
    let max = heat.max();
    let norm = if max > 0.0 { max } else { 1.0 };
    let blend = if prefer_hot {
        0.0
    } else {
        config.search_random_blend
    };

    let mut best: Option<(f64, usize, usize)> = None;
    let mut found_heat = false;
    for _ in 0..config.target_sample_count.max(1) {
        let cx = rng.gen_range(0..n);
        let cy = rng.gen_range(0..n);
        let h = heat.get(cx, cy) / norm;
        found_heat |= h > 0.0;
        let noise: f64 = if blend > 0.0 { rng.gen() } else { 0.0 };
        let score = h * (1.0 - blend) + noise * blend - edge_penalty(cx, cy, n, config);
        if best.map_or(true, |(s, _, _)| score > s) {
            best = Some((score, cx, cy));
        }
    }

    let Some((_, mut cx, mut cy)) = best else {
        return bounds.center();
    };

    let steps = if prefer_hot { config.hill_climb_steps } else { 0 };
    let mut climbed = false;
    for _ in 0..steps {
        let here = heat.get(cx, cy) / norm - edge_penalty(cx, cy, n, config);
        let Some((nx, ny, score)) = hottest_neighbor(heat, cx, cy, norm, config) else {
            break;
        };
        if score <= here || heat.get(nx, ny) <= 0.0 {
            break;
        }
        cx = nx;
        cy = ny;
        climbed = true;
    }

    if prefer_hot && !found_heat && !climbed {
        return bounds.center();
    }
    heat.cell_center(cx, cy, bounds)
}

fn hottest_neighbor(
    heat: &HeatMap,
    cx: usize,
    cy: usize,
    norm: f64,
    config: &HunterConfig,
) -> Option<(usize, usize, f64)> {
    let n = heat.size() as i64;
    let mut best: Option<(usize, usize, f64)> = None;
    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = cx as i64 + dx;
            let ny = cy as i64 + dy;
            if nx < 0 || ny < 0 || nx >= n || ny >= n {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            let score = heat.get(nx, ny) / norm - edge_penalty(nx, ny, heat.size(), config);
            if best.map_or(true, |(_, _, s)| score > s) {
                best = Some((nx, ny, score));
            }
        }
    }
    best
}

/// Penalty rising smoothly from 0 (inside the margin band) to
/// `edge_penalty_weight` at the grid border.
pub fn edge_penalty(cx: usize, cy: usize, n: usize, config: &HunterConfig) -> f64 {
    let last = n.saturating_sub(1);
    let d = cx.min(cy).min(last.saturating_sub(cx)).min(last.saturating_sub(cy)) as f64;
    let margin = (n as f64 * config.edge_margin_fraction).max(1.0);
    let t = (d / margin).clamp(0.0, 1.0);
    let smooth = t * t * (3.0 - 2.0 * t);
    config.edge_penalty_weight * (1.0 - smooth)
}
