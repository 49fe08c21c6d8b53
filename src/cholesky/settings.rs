use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Algorithmic strategy used to compute a triangular factor.
///
/// All variants produce the same factor (up to rounding) since the
/// factor of an SPD matrix with non-negative diagonal is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CholeskyVariant {
    /// Row by row, each row from a triangular solve against the
    /// leading block of the factor computed so far.
    Up,
    /// Column by column, pulling in the contributions of all
    /// previously computed columns.
    #[default]
    Left,
    /// Left-looking, but accumulating only over the nonzero
    /// pattern of each row of the factor.
    LeftRestricted,
    /// In-place elimination, pushing each new column into the
    /// trailing Schur complement.
    Right,
    /// Blocked left-looking over contiguous supernodes.
    Supernodal,
}

impl std::fmt::Display for CholeskyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            CholeskyVariant::Up => "up-looking",
            CholeskyVariant::Left => "left-looking",
            CholeskyVariant::LeftRestricted => "left-looking (restricted)",
            CholeskyVariant::Right => "right-looking",
            CholeskyVariant::Supernodal => "supernodal",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for [`factorize`](crate::cholesky::factorize) and
/// [`CholeskySolver`](crate::cholesky::CholeskySolver)

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CholeskySettings<T: FloatT> {
    ///factorization algorithm
    #[builder(default = "CholeskyVariant::Left")]
    pub variant: CholeskyVariant,

    ///supernode sizes for the supernodal variant.  `None` means one column per supernode
    #[builder(default = "None", setter(strip_option))]
    pub partition: Option<Vec<usize>>,

    ///triangle of the returned factor.  `Triu` gives R = L', `Tril` gives L
    #[builder(default = "MatrixTriangle::Triu")]
    pub uplo: MatrixTriangle,

    ///reject inputs that are not symmetric
    #[builder(default = "true")]
    pub symmetry_check: bool,

    ///relative tolerance for the symmetry check
    #[builder(default = "(1e-12).as_T()")]
    pub symmetry_tol: T,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for CholeskySettings<T>
where
    T: FloatT,
{
    fn default() -> CholeskySettings<T> {
        CholeskySettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> CholeskySettings<T>
where
    T: FloatT,
{
    /// Checks that field values are legal.  A partition is checked
    /// against the matrix dimension only at factorization time.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_partition(&self.partition)?;
        validate_symmetry_tol(self.symmetry_tol)?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T> CholeskySettings<T>
where
    T: FloatT + Serialize + DeserializeOwned,
{
    /// Serialize settings to a json string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Read settings from a json string.  Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn validate_partition(partition: &Option<Vec<usize>>) -> Result<(), SettingsError> {
    match partition {
        Some(sizes) if sizes.iter().any(|&s| s == 0) => {
            Err(SettingsError::BadFieldValue("partition"))
        }
        _ => Ok(()),
    }
}

fn validate_symmetry_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    // also rejects NaN
    if tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("symmetry_tol"))
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for CholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> CholeskySettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref partition) = self.partition {
            validate_partition(partition)?;
        }
        if let Some(tol) = self.symmetry_tol {
            validate_symmetry_tol(tol)?;
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    CholeskySettingsBuilder::<f64>::default().build().unwrap();

    // a partition with a zero sized supernode
    assert!(CholeskySettingsBuilder::<f64>::default()
        .variant(CholeskyVariant::Supernodal)
        .partition(vec![2, 0, 1])
        .build()
        .is_err());

    // negative symmetry tolerance
    assert!(CholeskySettingsBuilder::<f64>::default()
        .symmetry_tol(-1.0)
        .build()
        .is_err());

    // direct field modification is caught by validate()
    let mut settings = CholeskySettings::<f64>::default();
    assert!(settings.validate().is_ok());
    settings.partition = Some(vec![0]);
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_defaults() {
    let settings = CholeskySettings::<f64>::default();
    assert_eq!(settings.variant, CholeskyVariant::Left);
    assert_eq!(settings.uplo, MatrixTriangle::Triu);
    assert!(settings.partition.is_none());
    assert!(settings.symmetry_check);
    assert!(!settings.verbose);
    assert_eq!(settings.symmetry_tol, 1e-12);
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_json() {
    let settings = CholeskySettingsBuilder::<f64>::default()
        .variant(CholeskyVariant::Supernodal)
        .partition(vec![2, 2])
        .uplo(MatrixTriangle::Tril)
        .build()
        .unwrap();

    let json = settings.to_json().unwrap();
    let back = CholeskySettings::<f64>::from_json(&json).unwrap();
    assert_eq!(back.variant, CholeskyVariant::Supernodal);
    assert_eq!(back.partition, Some(vec![2, 2]));
    assert_eq!(back.uplo, MatrixTriangle::Tril);

    // missing fields take defaults
    let partial = CholeskySettings::<f64>::from_json(r#"{"variant":"Right"}"#).unwrap();
    assert_eq!(partial.variant, CholeskyVariant::Right);
    assert_eq!(partial.uplo, MatrixTriangle::Triu);
    assert!(partial.symmetry_check);
}
