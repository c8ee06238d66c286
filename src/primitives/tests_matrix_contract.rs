// =========================================================================
// Matrix kernel contract: algebraic identities the normal-equation solver
// relies on.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn sample_3x4() -> Matrix<f64> {
    Matrix::from_vec(
        3,
        4,
        vec![1.0, -2.0, 3.5, 0.25, 4.0, 5.0, -6.0, 7.0, 0.5, 8.0, 9.0, -1.0],
    )
    .expect("valid")
}

/// Transpose involution: (A^T)^T = A, exactly.
#[test]
fn contract_transpose_involution() {
    let a = sample_3x4();
    assert_eq!(a.transpose().transpose(), a, "(A^T)^T != A");
}

/// Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn contract_transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    assert_eq!(a.transpose().shape(), (5, 3));
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4));
}

/// Identity is neutral: I * A = A * I = A
#[test]
fn contract_identity_neutral() {
    let a = sample_3x4();
    assert_eq!(Matrix::eye(3).matmul(&a).expect("3 == 3"), a);
    assert_eq!(a.matmul(&Matrix::eye(4)).expect("4 == 4"), a);
}

/// (AB)^T = B^T A^T
#[test]
fn contract_transpose_of_product() {
    let a = sample_3x4();
    let b = a.transpose();
    let lhs = a.matmul(&b).expect("3x4 * 4x3").transpose();
    let rhs = b.transpose().matmul(&a.transpose()).expect("3x4 * 4x3");
    for (x, y) in lhs.as_slice().iter().zip(rhs.as_slice()) {
        assert!((x - y).abs() < 1e-12);
    }
}

/// A^T A is symmetric
#[test]
fn contract_gram_matrix_symmetric() {
    let a = sample_3x4();
    let gram = a.transpose().matmul(&a).expect("4x3 * 3x4");
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(gram.get(i, j), gram.get(j, i));
        }
    }
}

/// A * A^-1 = I within 1e-9
#[test]
fn contract_inverse_right_identity() {
    let a = Matrix::from_vec(
        4,
        4,
        vec![
            5.0, 1.0, 0.5, 2.0, 1.0, 6.0, 1.5, 0.0, 0.5, 1.5, 7.0, 1.0, 2.0, 0.0, 1.0, 8.0,
        ],
    )
    .expect("valid");
    let product = a.matmul(&a.inverse().expect("diagonally dominant")).expect("4x4");
    let eye = Matrix::eye(4);
    for (x, y) in product.as_slice().iter().zip(eye.as_slice()) {
        assert!((x - y).abs() < 1e-9, "A * A^-1 deviates from I: {x} vs {y}");
    }
}

/// Mismatched multiply never yields a partial result.
#[test]
fn contract_matmul_mismatch_is_error() {
    let a = sample_3x4();
    assert!(a.matmul(&a).is_err());
}
