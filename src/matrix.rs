//! Dense `m x n` matrices.
//!
//! [`Matrix::rotation`] is the reference form of a 2D rotation. The
//! simulation itself rotates through the closed-form `Vec2::rotate`,
//! which a test here checks against it.

use crate::error::MathError;
use crate::vector::Vector;

/// A row-major `rows x cols` matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from row-major elements.
    ///
    /// The element count must be exactly `rows * cols`.
    pub fn new(rows: usize, cols: usize, elements: Vec<f64>) -> Result<Self, MathError> {
        if elements.len() != rows * cols {
            return Err(MathError::LengthMismatch {
                expected: rows * cols,
                found: elements.len(),
            });
        }
        Ok(Matrix { rows, cols, elements })
    }

    pub fn identity(size: usize) -> Self {
        let mut elements = vec![0.0; size * size];
        for i in 0..size {
            elements[i * size + i] = 1.0;
        }
        Matrix { rows: size, cols: size, elements }
    }

    /// Counter-clockwise rotation by `theta` radians.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Matrix {
            rows: 2,
            cols: 2,
            elements: vec![cos, -sin, sin, cos],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.elements[row * self.cols + col])
    }

    fn row(&self, row: usize) -> &[f64] {
        &self.elements[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix product `self * rhs`.
    ///
    /// Fails without computing anything when `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != rhs.rows {
            return Err(MathError::NonConformable {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        let mut elements = Vec::with_capacity(self.rows * rhs.cols);
        for i in 0..self.rows {
            let row = self.row(i);
            for j in 0..rhs.cols {
                elements.push(
                    row.iter()
                        .enumerate()
                        .map(|(k, a)| a * rhs.elements[k * rhs.cols + j])
                        .sum(),
                );
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            elements,
        })
    }

    /// Applies a square `N x N` matrix to a vector.
    pub fn transform<const N: usize>(&self, v: Vector<N>) -> Result<Vector<N>, MathError> {
        if self.cols != N || self.rows != N {
            return Err(MathError::NonConformable {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: N,
                rhs_cols: 1,
            });
        }
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.row(i).iter().zip(v.0.iter()).map(|(a, b)| a * b).sum();
        }
        Ok(Vector(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec2;

    #[test]
    fn non_conformable_product_fails() {
        let a = Matrix::new(2, 3, vec![1.0; 6]).unwrap();
        let b = Matrix::new(2, 2, vec![1.0; 4]).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(MathError::NonConformable {
                lhs_rows: 2,
                lhs_cols: 3,
                rhs_rows: 2,
                rhs_cols: 2,
            })
        );
    }

    #[test]
    fn rectangular_product() {
        let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::new(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
        let product = a.multiply(&b).unwrap();
        assert_eq!((product.rows(), product.cols()), (2, 1));
        assert_eq!(product.get(0, 0), Some(-2.0));
        assert_eq!(product.get(1, 0), Some(-2.0));
        assert_eq!(product.get(2, 0), None);
    }

    #[test]
    fn wrong_element_count_is_rejected() {
        assert!(Matrix::new(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn rotation_matches_vector_rotate() {
        let v = Vec2::new(3.0, -1.5);
        for theta in [0.0, 0.3, 1.7, -2.2, 6.0] {
            let by_matrix = Matrix::rotation(theta).transform(v).unwrap();
            assert!((by_matrix - v.rotate(theta)).magnitude() < 1e-12);
        }
    }

    #[test]
    fn rotations_compose() {
        let product = Matrix::rotation(0.4).multiply(&Matrix::rotation(0.6)).unwrap();
        let expected = Matrix::rotation(1.0);
        for i in 0..2 {
            for j in 0..2 {
                let diff = product.get(i, j).unwrap() - expected.get(i, j).unwrap();
                assert!(diff.abs() < 1e-12);
            }
        }
        assert_eq!(Matrix::identity(2).multiply(&expected).unwrap(), expected);
    }

    #[test]
    fn transform_requires_matching_size() {
        let m = Matrix::identity(3);
        assert!(m.transform(Vec2::X).is_err());
    }
}
