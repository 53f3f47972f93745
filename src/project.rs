//! 2D projection of the term matrix for plotting

use std::cmp::Ordering;

use ndarray::{Array1, Array2, Axis};

const POWER_ITERATIONS: usize = 300;
const CONVERGENCE_TOL: f64 = 1e-10;
/// Eigenvalues at or below this carry no usable variance
const RANK_TOL: f64 = 1e-9;

/// Project matrix rows onto their top two principal components.
///
/// Coordinates preserve relative distances as well as a linear 2D
/// projection can; they have no other meaning. When the matrix has
/// fewer than two directions of variance (a single distinct document,
/// or all documents identical), the missing coordinate columns stay
/// zero instead of failing.
///
/// The projection is deterministic and independent of any clustering;
/// row order matches the input document order.
pub fn project_2d(matrix: &Array2<f64>) -> Array2<f64> {
    let n = matrix.nrows();
    let mut coords = Array2::zeros((n, 2));

    let Some(mean) = matrix.mean_axis(Axis(0)) else {
        return coords;
    };
    let mut centered = matrix.to_owned();
    for mut row in centered.rows_mut() {
        row -= &mean;
    }

    // Work in document space: the Gram matrix of the centered rows has
    // the left singular vectors as eigenvectors, so each coordinate
    // column is u * sigma without ever forming the (terms x terms)
    // covariance.
    let mut gram = centered.dot(&centered.t());

    for component in 0..2 {
        let Some((eigval, eigvec)) = dominant_eigenpair(&gram) else {
            break;
        };
        if eigval <= RANK_TOL {
            break;
        }

        let sigma = eigval.sqrt();
        for (row, &u) in eigvec.iter().enumerate() {
            coords[[row, component]] = u * sigma;
        }

        // Deflate before extracting the next component
        let outer = eigvec
            .clone()
            .insert_axis(Axis(1))
            .dot(&eigvec.clone().insert_axis(Axis(0)));
        gram.scaled_add(-eigval, &outer);
    }

    coords
}

/// Largest eigenpair of a symmetric positive semi-definite matrix by
/// power iteration. Returns None when the matrix has no usable mass.
fn dominant_eigenpair(gram: &Array2<f64>) -> Option<(f64, Array1<f64>)> {
    let n = gram.nrows();

    // Start from the column with the largest self-variance. A uniform
    // start vector would stall: the all-ones vector lies in the null
    // space of a centered Gram matrix.
    let start = (0..n).max_by(|&a, &b| {
        gram[[a, a]]
            .partial_cmp(&gram[[b, b]])
            .unwrap_or(Ordering::Equal)
    })?;
    let mut v = gram.column(start).to_owned();
    let norm = v.dot(&v).sqrt();
    if norm <= RANK_TOL {
        return None;
    }
    v /= norm;

    let mut eigval = 0.0;
    for _ in 0..POWER_ITERATIONS {
        let w = gram.dot(&v);
        let norm = w.dot(&w).sqrt();
        if norm <= RANK_TOL {
            return None;
        }
        let next = w / norm;
        let next_eigval = next.dot(&gram.dot(&next));
        let converged = (next_eigval - eigval).abs() <= CONVERGENCE_TOL * next_eigval.abs().max(1.0);
        v = next;
        eigval = next_eigval;
        if converged {
            break;
        }
    }

    Some((eigval, v))
}
