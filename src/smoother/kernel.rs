//! Box-kernel evaluation for a single output cell.
//!
//! The window is `(2h+1) x (2h+1)` centered on the cell and clipped to the
//! grid. The result is the mean over the cells that survive clipping, so the
//! divisor shrinks near edges and corners instead of padding with zeros.

use std::ops::RangeInclusive;

use super::grid::index_of;

/// Coordinates along one axis covered by the window around `c`, clipped to
/// `0..dim`.
#[inline]
fn clipped_span(dim: usize, halfwidth: usize, c: usize) -> RangeInclusive<usize> {
    c.saturating_sub(halfwidth)..=c.saturating_add(halfwidth).min(dim - 1)
}

/// Compute the smoothed value of cell `(x, y)`.
///
/// The window is clipped to the grid before scanning, then rows are visited
/// outer and columns inner, so the summation order is fixed for a given cell
/// and the cost never exceeds `dim * dim` reads however large `halfwidth` is.
///
/// Preconditions (caller contract): `dim > 0`, `x < dim`, `y < dim`,
/// `input.len() == dim * dim`.
#[inline]
pub fn evaluate(dim: usize, halfwidth: usize, x: usize, y: usize, input: &[f32]) -> f32 {
    debug_assert!(x < dim && y < dim, "cell ({x}, {y}) outside {dim}x{dim} grid");
    debug_assert_eq!(input.len(), dim * dim);

    let mut value = 0.0f32;
    let mut cellcount = 0u32;

    for ny in clipped_span(dim, halfwidth, y) {
        for nx in clipped_span(dim, halfwidth, x) {
            cellcount += 1;
            value += input[index_of(dim, nx, ny)];
        }
    }

    // The center cell is always inside both spans, so cellcount >= 1.
    value / cellcount as f32
}

/// Number of cells that contribute to `evaluate` at `(x, y)`.
///
/// `(2h+1)^2` in the interior, smaller near edges, never zero.
pub fn window_cell_count(dim: usize, halfwidth: usize, x: usize, y: usize) -> usize {
    clipped_span(dim, halfwidth, x).count() * clipped_span(dim, halfwidth, y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_grid(dim: usize) -> Vec<f32> {
        (0..dim * dim).map(|i| i as f32).collect()
    }

    #[test]
    fn test_evaluate_4x4_reference_cells() {
        let input = counting_grid(4);

        // Corner: {0, 1, 4, 5}
        assert_eq!(evaluate(4, 1, 0, 0, &input), 2.5);
        // Top edge: {0, 1, 2, 4, 5, 6}
        assert_eq!(evaluate(4, 1, 1, 0, &input), 3.0);
        // Interior: full 3x3 window
        assert_eq!(evaluate(4, 1, 1, 1, &input), 5.0);
        // Opposite corner: {10, 11, 14, 15}
        assert_eq!(evaluate(4, 1, 3, 3, &input), 12.5);
    }

    #[test]
    fn test_zero_halfwidth_is_identity() {
        let input = counting_grid(5);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(evaluate(5, 0, x, y, &input), input[index_of(5, x, y)]);
            }
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let input = vec![3.25];
        assert_eq!(evaluate(1, 0, 0, 0, &input), 3.25);
        assert_eq!(evaluate(1, 4, 0, 0, &input), 3.25);
        assert_eq!(window_cell_count(1, 4, 0, 0), 1);
    }

    #[test]
    fn test_window_larger_than_grid_averages_everything() {
        let input = counting_grid(3);
        let mean = input.iter().sum::<f32>() / 9.0;
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(evaluate(3, 5, x, y, &input), mean);
                assert_eq!(window_cell_count(3, 5, x, y), 9);
            }
        }
    }

    #[test]
    fn test_constant_grid_is_preserved() {
        let input = vec![1.5f32; 36];
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(evaluate(6, 2, x, y, &input), 1.5);
            }
        }
    }

    #[test]
    fn test_window_cell_count_interior_and_edges() {
        let dim = 10;
        for h in 0..4 {
            let full = (2 * h + 1) * (2 * h + 1);
            for y in 0..dim {
                for x in 0..dim {
                    let count = window_cell_count(dim, h, x, y);
                    let interior = x >= h && x + h < dim && y >= h && y + h < dim;
                    if interior {
                        assert_eq!(count, full, "({x}, {y}) h={h}");
                    } else {
                        assert!(count < full && count > 0, "({x}, {y}) h={h}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_window_cell_count_matches_divisor() {
        let dim = 7;
        let h = 2;
        let ones = vec![1.0f32; dim * dim];
        let mut marked = ones.clone();
        for y in 0..dim {
            for x in 0..dim {
                let count = window_cell_count(dim, h, x, y);
                // Single marked cell at the center: mean = 1 / count.
                marked.iter_mut().for_each(|v| *v = 0.0);
                marked[index_of(dim, x, y)] = 1.0;
                assert_eq!(evaluate(dim, h, x, y, &marked), 1.0 / count as f32);
                assert_eq!(evaluate(dim, h, x, y, &ones), 1.0);
            }
        }
    }

    #[test]
    fn test_huge_halfwidth_covers_whole_grid() {
        let input = counting_grid(4);

        assert_eq!(evaluate(4, usize::MAX, 1, 1, &input), 7.5);
        assert_eq!(evaluate(4, usize::MAX, 3, 0, &input), 7.5);
        assert_eq!(window_cell_count(4, usize::MAX, 1, 1), 16);
        assert_eq!(window_cell_count(4, usize::MAX, 0, 3), 16);
    }

    #[test]
    fn test_large_halfwidth_cost_bounded_by_grid() {
        let input = counting_grid(4);
        let start = std::time::Instant::now();

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(evaluate(4, i32::MAX as usize, x, y, &input), 7.5);
            }
        }

        assert!(
            start.elapsed() < std::time::Duration::from_secs(1),
            "took {:?}",
            start.elapsed()
        );
    }
}
