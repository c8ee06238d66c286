use super::*;

fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!((x - y).abs() < tol, "{x} != {y}");
    }
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 2), 6.0);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(RegressionError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("rows have equal width");
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.get(2, 1), 6.0);
}

#[test]
fn test_from_rows_ragged() {
    let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_eye() {
    let m = Matrix::eye(3);
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 1), 1.0);
    assert_eq!(m.get(2, 2), 1.0);
    assert_eq!(m.get(0, 1), 0.0);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get(0, 0), 1.0);
    assert_eq!(t.get(0, 1), 4.0);
    assert_eq!(t.get(2, 1), 6.0);
}

#[test]
fn test_row_and_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
    assert_eq!(m.column(1).as_slice(), &[2.0, 5.0]);
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 58
    assert_eq!(c.get(0, 0), 58.0);
    // c[0,1] = 1*8 + 2*10 + 3*12 = 64
    assert_eq!(c.get(0, 1), 64.0);
    assert_eq!(c.get(1, 0), 139.0);
    assert_eq!(c.get(1, 1), 154.0);
}

#[test]
fn test_matmul_column_vector() {
    // X^T Y shape: (2 x 3) * (3 x 1)
    let xt = Matrix::from_vec(2, 3, vec![1.0, 1.0, 1.0, 1.0, 2.0, 3.0]).expect("2x3");
    let y = Matrix::column_vector(&Vector::from_slice(&[5.0, 8.0, 11.0]));
    let xty = xt.matmul(&y).expect("3 == 3");
    assert_eq!(xty.shape(), (2, 1));
    assert_eq!(xty.get(0, 0), 24.0);
    assert_eq!(xty.get(1, 0), 54.0);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 2, vec![1.0; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert!(matches!(
        a.matmul(&b),
        Err(RegressionError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matvec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let result = m
        .matvec(&v)
        .expect("matrix columns match vector length: both 3");

    assert_eq!(result.len(), 2);
    assert_eq!(result[0], 14.0);
    assert_eq!(result[1], 32.0);
}

#[test]
fn test_matvec_dimension_error() {
    let m = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("2x3");
    let v = Vector::from_slice(&[1.0, 2.0]);
    assert!(m.matvec(&v).is_err());
}

#[test]
fn test_inverse_2x2() {
    // [[4, 7], [2, 6]]^-1 = 1/10 * [[6, -7], [-2, 4]]
    let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("2x2");
    let inv = m.inverse().expect("determinant is 10");
    let expected = Matrix::from_vec(2, 2, vec![0.6, -0.7, -0.2, 0.4]).expect("2x2");
    assert_close(&inv, &expected, 1e-12);
}

#[test]
fn test_inverse_identity() {
    let inv = Matrix::eye(4).inverse().expect("identity is invertible");
    assert_eq!(inv, Matrix::eye(4));
}

#[test]
fn test_inverse_3x3_roundtrip() {
    let m = Matrix::from_vec(3, 3, vec![2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0])
        .expect("3x3");
    let inv = m.inverse().expect("tridiagonal SPD matrix");
    let product = m.matmul(&inv).expect("square");
    assert_close(&product, &Matrix::eye(3), 1e-12);
}

#[test]
fn test_inverse_zero_row_is_singular() {
    let m = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0])
        .expect("3x3");
    assert!(matches!(
        m.inverse(),
        Err(RegressionError::SingularMatrix { pivot_row: 1 })
    ));
}

#[test]
fn test_inverse_zero_leading_pivot_without_row_swap() {
    // Invertible by a row swap, but elimination never swaps rows.
    let m = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).expect("2x2");
    assert!(matches!(
        m.inverse(),
        Err(RegressionError::SingularMatrix { pivot_row: 0 })
    ));
}

#[test]
fn test_inverse_tolerance() {
    let m = Matrix::from_vec(2, 2, vec![1e-14, 0.0, 0.0, 1.0]).expect("2x2");
    assert!(m.inverse().is_ok());
    assert!(matches!(
        m.inverse_with_tolerance(1e-12),
        Err(RegressionError::SingularMatrix { pivot_row: 0 })
    ));
}

#[test]
fn test_inverse_nan_pivot() {
    let m = Matrix::from_vec(1, 1, vec![f64::NAN]).expect("1x1");
    assert!(m.inverse().is_err());
}

#[test]
fn test_inverse_non_square() {
    let m = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("2x3");
    assert!(matches!(
        m.inverse(),
        Err(RegressionError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_inverse_empty() {
    let m = Matrix::zeros(0, 0);
    let inv = m.inverse().expect("0x0 inverts to 0x0");
    assert_eq!(inv.shape(), (0, 0));
}
