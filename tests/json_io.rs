#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use cholup::{algebra::*, cholesky::*};
    use std::io::{Read, Seek, SeekFrom, Write};

    let A = Matrix::from(&[[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]]);
    let settings = CholeskySettingsBuilder::<f64>::default()
        .variant(CholeskyVariant::Supernodal)
        .partition(vec![1, 2])
        .build()
        .unwrap();

    // write the settings and the matrix to a file
    let mut file = tempfile::tempfile().unwrap();
    writeln!(file, "{}", settings.to_json().unwrap()).unwrap();
    writeln!(file, "{}", serde_json::to_string(&A).unwrap()).unwrap();

    // read them back
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    let mut lines = contents.lines();
    let settings2 = CholeskySettings::<f64>::from_json(lines.next().unwrap()).unwrap();
    let A2: Matrix<f64> = serde_json::from_str(lines.next().unwrap()).unwrap();

    assert_eq!(A, A2);
    assert_eq!(settings2.partition, Some(vec![1, 2]));
    assert_eq!(
        factorize(&A, &settings).unwrap(),
        factorize(&A2, &settings2).unwrap()
    );

    // malformed settings are reported, not defaulted
    assert!(CholeskySettings::<f64>::from_json(r#"{"variant":"Sideways"}"#).is_err());
}
