#![allow(non_snake_case)]

use cholup::{algebra::*, cholesky::*, io::ConfigurablePrintTarget};

fn test_print_solver() -> CholeskySolver<f64> {
    let settings = CholeskySettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    CholeskySolver::new(settings).unwrap()
}

fn test_print_matrix() -> Matrix<f64> {
    Matrix::from(&[[4., 2., 0.], [2., 5., 1.], [0., 1., 3.]])
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.factor(&test_print_matrix()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.factor(&test_print_matrix()).unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("cholup v"));
    assert!(result.contains("Terminated with status = Factored"));
}

#[test]
fn test_print_failure_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    let A = Matrix::from(&[[1., 2.], [2., 1.]]);
    assert!(solver.factor(&A).is_err());
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("Terminated with status = Failed"));
    assert!(result.contains("failed at column 1"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.factor(&test_print_matrix()).unwrap();
    solver.downdate(&[0., 0., 1.]).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("cholup v"));
    assert!(result.contains("downdate : min pivot"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.factor(&test_print_matrix()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("cholup v"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.factor(&test_print_matrix()).unwrap();
    // no output
    assert!(solver.get_print_buffer().is_err());
}
