//! Single-threaded traversals.
//!
//! Both functions write `evaluate(x, y)` to `output[y * dim + x]`; they only
//! differ in loop nesting, which changes the memory access pattern but never
//! the result.

use super::grid::index_of;
use super::kernel::evaluate;

/// Smooth in row-major order (rows outer, columns inner).
pub fn smooth_row_major(dim: usize, halfwidth: usize, input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), dim * dim);
    debug_assert_eq!(output.len(), dim * dim);

    for y in 0..dim {
        for x in 0..dim {
            output[index_of(dim, x, y)] = evaluate(dim, halfwidth, x, y, input);
        }
    }
}

/// Smooth in column-major order (columns outer, rows inner).
pub fn smooth_column_major(dim: usize, halfwidth: usize, input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), dim * dim);
    debug_assert_eq!(output.len(), dim * dim);

    for x in 0..dim {
        for y in 0..dim {
            output[index_of(dim, x, y)] = evaluate(dim, halfwidth, x, y, input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_4x4() {
        let input: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let mut output = vec![0.0; 16];

        smooth_row_major(4, 1, &input, &mut output);

        assert_eq!(output[index_of(4, 0, 0)], 2.5);
        assert_eq!(output[index_of(4, 1, 0)], 3.0);
        assert_eq!(output[index_of(4, 1, 1)], 5.0);
        assert_eq!(output[index_of(4, 3, 3)], 12.5);
    }

    #[test]
    fn test_column_major_matches_row_major() {
        // Irregular input so a transposed write would show up.
        let dim = 13;
        let input: Vec<f32> = (0..dim * dim)
            .map(|i| ((i * 7919) % 101) as f32 * 0.37)
            .collect();

        for h in 0..4 {
            let mut by_rows = vec![0.0; dim * dim];
            let mut by_cols = vec![0.0; dim * dim];
            smooth_row_major(dim, h, &input, &mut by_rows);
            smooth_column_major(dim, h, &input, &mut by_cols);
            assert_eq!(by_rows, by_cols, "h={h}");
        }
    }

    #[test]
    fn test_every_cell_written() {
        let dim = 6;
        let input = vec![2.0f32; dim * dim];
        let mut output = vec![f32::NAN; dim * dim];

        smooth_column_major(dim, 1, &input, &mut output);

        assert!(output.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_input_untouched() {
        let dim = 5;
        let input: Vec<f32> = (0..dim * dim).map(|i| i as f32).collect();
        let snapshot = input.clone();
        let mut output = vec![0.0; dim * dim];

        smooth_row_major(dim, 2, &input, &mut output);

        assert_eq!(input, snapshot);
    }
}
