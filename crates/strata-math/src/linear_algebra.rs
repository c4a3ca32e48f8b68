//! Linear algebra utilities.

use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};

/// Pivots smaller than this are treated as zero.
const SINGULAR_TOLERANCE: f64 = 1e-14;

/// Solves the square linear system `a * x = b` with partial-pivot LU.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::invalid_input(format!(
            "matrix must be square, got {}x{}",
            n,
            a.ncols()
        )));
    }
    if n != b.len() {
        return Err(MathError::dimension_mismatch(n, b.len()));
    }

    let lu = a.clone().lu();
    let u = lu.u();
    if u.diagonal().iter().any(|d| d.abs() < SINGULAR_TOLERANCE) {
        return Err(MathError::SingularMatrix);
    }

    lu.solve(b).ok_or(MathError::SingularMatrix)
}
