use conv_pool::demo::{run_demo, DemoConfig};
use conv_pool::geoalg::i32_math::matrix::Matrix;
use conv_pool::windows::{convolution2d::convolve, max_pooling::max_pool};

fn image() -> Matrix {
    Matrix::from_rows(vec![
        vec![1, 3, 2, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16]
    ]).unwrap()
}

#[test]
fn test_routines_match_walkthrough() {
    let mut out = Vec::new();
    let report = run_demo(&DemoConfig::default(), &mut out).unwrap();

    let edge_kernel = Matrix::from_rows(vec![vec![-1, 0], vec![0, 1]]).unwrap();
    let border_kernel = Matrix::from_rows(vec![vec![1, -1], vec![-1, 1]]).unwrap();

    assert_eq!(report.edge_map, convolve(&image(), &edge_kernel, 1).unwrap());
    assert_eq!(report.border_map, convolve(&image(), &border_kernel, 1).unwrap());
    assert_eq!(report.pooled, max_pool(&image(), 2, 2).unwrap());
}

#[test]
fn test_walkthrough_text() {
    let mut out = Vec::new();
    run_demo(&DemoConfig::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("[[ 1  3  2  4]\n [ 5  6  7  8]\n [ 9 10 11 12]\n [13 14 15 16]]"));
    assert!(text.contains("Window (output position [2, 2]):"));
    assert!(text.contains("[[5 4 6]\n [5 5 5]\n [5 5 5]]"));
    assert!(text.contains("[[-1  2 -1]\n [ 0  0  0]\n [ 0  0  0]]"));
}
