use super::{CholeskyError, CholeskySettings, CholeskyVariant, UpdateDirection};
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::timers::*;
use std::io::Write;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of the factor held by a [`CholeskySolver`](super::CholeskySolver)
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CholeskyStatus {
    /// No factorization has been attempted
    #[default]
    Unfactored,
    /// A valid factor is stored
    Factored,
    /// The most recent factorization failed and no factor is stored
    Failed,
}

impl std::fmt::Display for CholeskyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Statistics of the most recent factorization and of the
/// updates / downdates applied to it since
#[derive(Default, Debug)]
pub struct CholeskyInfo<T> {
    pub status: CholeskyStatus,
    /// error raised by the most recent failed operation, if any
    pub last_error: Option<CholeskyError>,
    pub dim: usize,
    pub variant: CholeskyVariant,
    pub nsupernodes: usize,
    /// time in seconds of the most recent factorization, update or downdate
    pub solve_time: f64,
    pub min_pivot: T,
    pub max_pivot: T,
    /// structural nonzeros of the lower factor
    pub nnz: usize,
    pub updates: u32,
    pub downdates: u32,

    stream: PrintTarget,
}

impl<T> CholeskyInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, timers: &mut Timers) {
        self.status = CholeskyStatus::Unfactored;
        self.last_error = None;
        self.solve_time = 0f64;
        self.min_pivot = T::zero();
        self.max_pivot = T::zero();
        self.nnz = 0;
        self.updates = 0;
        self.downdates = 0;

        timers.reset();
    }

    pub(crate) fn configure(&mut self, n: usize, settings: &CholeskySettings<T>) {
        self.dim = n;
        self.variant = settings.variant;
        self.nsupernodes = match (settings.variant, &settings.partition) {
            (CholeskyVariant::Supernodal, Some(sizes)) => sizes.len(),
            _ => n,
        };
    }

    // refresh factor statistics after a successful operation
    pub(crate) fn record_factor(&mut self, L: &Matrix<T>) {
        let d = L.diag();
        self.min_pivot = d.minimum();
        self.max_pivot = d.maximum();
        self.nnz = L.nnz();
        self.status = CholeskyStatus::Factored;
        self.last_error = None;
    }

    pub(crate) fn record_error(&mut self, e: &CholeskyError) {
        self.last_error = Some(e.clone());
    }

    pub(crate) fn record_updown(&mut self, direction: UpdateDirection) {
        match direction {
            UpdateDirection::Update => self.updates += 1,
            UpdateDirection::Downdate => self.downdates += 1,
        }
    }

    pub(crate) fn finalize(&mut self, timers: &Timers, key: &'static str) {
        self.solve_time = timers.elapsed(key).as_secs_f64();
    }

    pub(crate) fn stream(&mut self) -> &mut PrintTarget {
        &mut self.stream
    }

    pub(crate) fn print_configuration(
        &mut self,
        settings: &CholeskySettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "           cholup v{}  -  dense Cholesky factorization",
            crate::VERSION
        )?;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "problem:")?;
        writeln!(out, "  dimension     = {}", self.dim)?;
        writeln!(out, "  variant       = {}", self.variant)?;
        if self.variant == CholeskyVariant::Supernodal {
            writeln!(out, "  supernodes    = {}", self.nsupernodes)?;
        }
        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  output = {}, symmetry check = {}, tol = {:.1e}",
            _uplo_str(settings.uplo),
            _bool_on_off(settings.symmetry_check),
            settings.symmetry_tol
        )?;
        writeln!(out, "  precision: {} bit", _get_precision_string::<T>())?;
        writeln!(out)?;
        out.flush()
    }

    pub(crate) fn print_updown(
        &mut self,
        settings: &CholeskySettings<T>,
        direction: UpdateDirection,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        let name = match direction {
            UpdateDirection::Update => "update",
            UpdateDirection::Downdate => "downdate",
        };
        match self.last_error {
            None => writeln!(
                out,
                "{:<9}: min pivot = {:.4e}, max pivot = {:.4e}, time = {:?}",
                name,
                self.min_pivot,
                self.max_pivot,
                Duration::from_secs_f64(self.solve_time)
            ),
            Some(ref e) => writeln!(out, "{:<9}: {}", name, e),
        }
    }

    pub(crate) fn print_footer(&mut self, settings: &CholeskySettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        if let Some(ref e) = self.last_error {
            writeln!(out, "error = {}", e)?;
        } else {
            writeln!(
                out,
                "min pivot = {:.4e}, max pivot = {:.4e}, nnz(L) = {}",
                self.min_pivot, self.max_pivot, self.nnz
            )?;
        }
        writeln!(
            out,
            "factor time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()
    }
}

impl<T> ConfigurablePrintTarget for CholeskyInfo<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}

fn _uplo_str(uplo: MatrixTriangle) -> &'static str {
    match uplo {
        MatrixTriangle::Triu => "upper (R)",
        MatrixTriangle::Tril => "lower (L)",
    }
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

#[test]
fn test_info_print_configuration() {
    let mut info = CholeskyInfo::<f64>::new();
    info.print_to_buffer();

    let mut settings = CholeskySettings::<f64>::default();
    settings.variant = CholeskyVariant::Supernodal;
    settings.partition = Some(vec![2, 2]);
    info.configure(4, &settings);

    // nothing is printed unless verbose
    info.print_configuration(&settings).unwrap();
    assert!(info.get_print_buffer().unwrap().is_empty());

    settings.verbose = true;
    info.print_configuration(&settings).unwrap();
    let s = info.get_print_buffer().unwrap();
    assert!(s.contains("dimension     = 4"));
    assert!(s.contains("variant       = supernodal"));
    assert!(s.contains("supernodes    = 2"));
    assert!(s.contains("precision: 64 bit"));
}
