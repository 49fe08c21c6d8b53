#![allow(non_snake_case)]

use super::factorize::factorize_lower;
use super::updown::updown_in_place;
use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use std::io::Write;

/// A Cholesky factorization that can be updated and downdated in place.
///
/// The solver holds the lower triangular factor `L` of the most recently
/// factored matrix `A = L*L'`.  Rank one updates and downdates replace the
/// stored factor only when they succeed, so after any failure the solver
/// still holds a valid factor of the last successfully modified matrix.
///
/// ```
/// use cholup::algebra::*;
/// use cholup::cholesky::*;
///
/// let A = Matrix::<f64>::from(&[[4.0, 2.0], [2.0, 3.0]]);
/// let mut solver = CholeskySolver::new(CholeskySettings::default()).unwrap();
/// solver.factor(&A).unwrap();
///
/// let mut b = vec![6.0, 5.0];
/// solver.solve(&mut b).unwrap();
/// assert!((b[0] - 1.0).abs() < 1e-12 && (b[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct CholeskySolver<T: FloatT> {
    pub settings: CholeskySettings<T>,
    pub info: CholeskyInfo<T>,
    L: Option<Matrix<T>>,
    timers: Timers,
}

impl<T> CholeskySolver<T>
where
    T: FloatT,
{
    pub fn new(settings: CholeskySettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            info: CholeskyInfo::new(),
            L: None,
            timers: Timers::default(),
        })
    }

    /// Factors `A`, replacing any stored factor.  On failure no factor is stored.
    pub fn factor(&mut self, A: &Matrix<T>) -> Result<(), CholeskyError> {
        self.L = None;
        self.info.reset(&mut self.timers);
        self.info.configure(A.nrows(), &self.settings);

        // print output is best effort and never fails the factorization
        self.info.print_configuration(&self.settings).ok();

        let result;
        timeit! {self.timers => "factor"; {
            result = factorize_lower(A, &self.settings);
        }}
        self.info.finalize(&self.timers, "factor");

        let result = match result {
            Ok(L) => {
                self.info.record_factor(&L);
                self.L = Some(L);
                Ok(())
            }
            Err(e) => {
                self.info.status = CholeskyStatus::Failed;
                self.info.record_error(&e);
                Err(e)
            }
        };

        self.info.print_footer(&self.settings).ok();
        result
    }

    /// The stored lower triangular factor `L`
    pub fn factor_matrix(&self) -> Option<&Matrix<T>> {
        self.L.as_ref()
    }

    /// The stored factor in the triangle selected by `settings.uplo`
    pub fn triangular_factor(&self) -> Option<Matrix<T>> {
        self.L.as_ref().map(|L| match self.settings.uplo {
            MatrixTriangle::Tril => L.clone(),
            MatrixTriangle::Triu => L.transpose(),
        })
    }

    /// Replaces the stored factor with the factor of `A + w*w'`.
    /// Returns the solution `x` of `L*x = w` for the factor before the update.
    pub fn update(&mut self, w: &[T]) -> Result<Vec<T>, CholeskyError> {
        self.updown(w, UpdateDirection::Update)
    }

    /// Replaces the stored factor with the factor of `A - w*w'`.
    /// On failure the stored factor is unchanged.
    pub fn downdate(&mut self, w: &[T]) -> Result<Vec<T>, CholeskyError> {
        self.updown(w, UpdateDirection::Downdate)
    }

    pub fn updown(&mut self, w: &[T], direction: UpdateDirection) -> Result<Vec<T>, CholeskyError> {
        let L = self.L.as_ref().ok_or(CholeskyError::NotFactored)?;

        let mut Lnew = L.clone();
        let mut x = w.to_vec();

        self.timers.reset_timer("updown");
        let result;
        timeit! {self.timers => "updown"; {
            result = updown_in_place(&mut Lnew, &mut x, direction);
        }}
        self.info.finalize(&self.timers, "updown");

        let result = match result {
            Ok(()) => {
                self.info.record_factor(&Lnew);
                self.info.record_updown(direction);
                self.L = Some(Lnew);
                Ok(x)
            }
            Err(e) => {
                self.info.record_error(&e);
                Err(e)
            }
        };

        self.info.print_updown(&self.settings, direction).ok();
        result
    }

    /// Solves `A*x = b` in place by forward then backward substitution
    pub fn solve(&self, b: &mut [T]) -> Result<(), CholeskyError> {
        let L = self.factor_or_err()?;
        if b.len() != L.nrows() {
            return Err(CholeskyError::DimensionMismatch);
        }
        L.trsv(MatrixTriangle::Tril, MatrixShape::N, b);
        L.trsv(MatrixTriangle::Tril, MatrixShape::T, b);
        Ok(())
    }

    /// `log(det(A)) = 2*Σ log(L[k,k])`
    pub fn logdet(&self) -> Result<T, CholeskyError> {
        let L = self.factor_or_err()?;
        let two: T = (2.0).as_T();
        let s = L
            .diag()
            .iter()
            .fold(T::zero(), |acc, d| acc + d.logsafe());
        Ok(two * s)
    }

    /// Forms `L*L'` from the stored factor
    pub fn reconstruct(&self) -> Result<Matrix<T>, CholeskyError> {
        let L = self.factor_or_err()?;
        let mut A = Matrix::zeros(L.size());
        A.mul(L, &L.t(), T::one(), T::zero());
        Ok(A)
    }

    /// Writes the accumulated operation timings to the print target
    pub fn print_timers(&mut self) -> std::io::Result<()> {
        self.timers.print(self.info.stream())
    }

    fn factor_or_err(&self) -> Result<&Matrix<T>, CholeskyError> {
        self.L.as_ref().ok_or(CholeskyError::NotFactored)
    }
}

impl<T> ConfigurablePrintTarget for CholeskySolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cholesky::engines::test_matrices::*;

    fn solver() -> CholeskySolver<f64> {
        CholeskySolver::new(CholeskySettings::default()).unwrap()
    }

    #[test]
    fn test_solver_not_factored() {
        let mut s = solver();
        assert_eq!(s.info.status, CholeskyStatus::Unfactored);
        assert!(s.factor_matrix().is_none());
        assert_eq!(s.update(&[1.0]), Err(CholeskyError::NotFactored));
        assert_eq!(s.solve(&mut [1.0]), Err(CholeskyError::NotFactored));
        assert_eq!(s.logdet(), Err(CholeskyError::NotFactored));
        assert!(s.reconstruct().is_err());
    }

    #[test]
    fn test_solver_factor_and_solve() {
        let A = sparse_11x11();
        let mut s = solver();
        s.factor(&A).unwrap();

        assert_eq!(s.info.status, CholeskyStatus::Factored);
        assert_eq!(s.info.dim, 11);
        assert!(s.info.min_pivot > 0.0);
        assert!(s.info.max_pivot >= s.info.min_pivot);
        assert!(s.triangular_factor().unwrap().is_triu());
        assert!(s.factor_matrix().unwrap().is_tril());

        let x: Vec<f64> = (0..11).map(|i| i as f64 - 5.0).collect();
        // b = A*x
        let mut Ab = Matrix::zeros((11, 1));
        Ab.mul(&A, &Matrix::new_from_slice((11, 1), &x), 1.0, 0.0);
        let mut b = Ab.data;

        s.solve(&mut b).unwrap();
        assert!(b.norm_inf_diff(&x) < 1e-12);

        assert!(s.reconstruct().unwrap().data.norm_inf_diff(&A.data) < 1e-12);
        assert_eq!(s.solve(&mut [1.0, 2.0]), Err(CholeskyError::DimensionMismatch));
    }

    #[test]
    fn test_solver_logdet() {
        let mut s = solver();
        s.factor(&Matrix::from_diag(&[4.0, 9.0, 16.0])).unwrap();
        let expected = (4.0f64 * 9.0 * 16.0).ln();
        assert!((s.logdet().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_solver_update_downdate() {
        let mut s = solver();
        s.factor(&Matrix::from_diag(&[4.0, 9.0, 16.0])).unwrap();

        let x = s.update(&[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(x, vec![0.0, 0.0, 0.25]);
        assert!((s.factor_matrix().unwrap()[(2, 2)] - 17f64.sqrt()).abs() < 1e-14);
        assert_eq!(s.info.updates, 1);

        s.downdate(&[0.0, 0.0, 1.0]).unwrap();
        assert!((s.factor_matrix().unwrap()[(2, 2)] - 4.0).abs() < 1e-14);
        assert_eq!(s.info.downdates, 1);

        // a failed downdate leaves the factor in place
        let before = s.factor_matrix().unwrap().clone();
        assert_eq!(
            s.downdate(&[0.0, 0.0, 4.0]),
            Err(CholeskyError::NotPositiveDefinite { column: 2 })
        );
        assert_eq!(s.factor_matrix().unwrap(), &before);
        assert_eq!(s.info.status, CholeskyStatus::Factored);
        assert_eq!(s.info.downdates, 1);
        assert!(s.info.last_error.is_some());
    }

    #[test]
    fn test_solver_failed_factor() {
        let mut s = solver();
        s.factor(&Matrix::from_diag(&[4.0, 9.0])).unwrap();

        let A = Matrix::from(&[[1.0, 2.0], [2.0, 1.0]]);
        assert_eq!(
            s.factor(&A),
            Err(CholeskyError::NotPositiveDefinite { column: 1 })
        );
        assert_eq!(s.info.status, CholeskyStatus::Failed);
        assert!(s.factor_matrix().is_none());
    }

    #[test]
    fn test_solver_bad_settings() {
        let mut settings = CholeskySettings::<f64>::default();
        settings.symmetry_tol = -1.0;
        assert!(CholeskySolver::new(settings).is_err());
    }

    #[test]
    fn test_solver_verbose() {
        let mut settings = CholeskySettings::<f64>::default();
        settings.verbose = true;
        let mut s = CholeskySolver::new(settings).unwrap();
        s.print_to_buffer();

        s.factor(&spd_3x3()).unwrap();
        s.update(&[1.0, 0.0, 0.0]).unwrap();
        s.print_timers().unwrap();

        let out = s.get_print_buffer().unwrap();
        assert!(out.contains("dimension     = 3"));
        assert!(out.contains("variant       = left-looking"));
        assert!(out.contains("Terminated with status = Factored"));
        assert!(out.contains("update   : min pivot"));
        assert!(out.contains("factor     : "));
    }
}
