//! Batch processing of sensor packages.

use crate::{read_package, Error, Package, Result, WorkoutReport};
use serde::{Deserialize, Serialize};

/// What to do when a package fails to compute
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OnError {
    /// Stop at the first failure and return it
    #[default]
    Abort,
    /// Log the failure, record it, and continue with the next package
    Skip,
}

/// A package that could not be computed
#[derive(Debug)]
pub struct BatchFailure {
    /// Position of the package in the input
    pub index: usize,
    pub package: Package,
    pub error: Error,
}

/// Result of a batch run, in input order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<WorkoutReport>,
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Total number of packages seen
    pub fn total(&self) -> usize {
        self.reports.len() + self.failures.len()
    }

    /// Turn recorded failures into an error
    pub fn into_result(self) -> Result<Vec<WorkoutReport>> {
        if self.failures.is_empty() {
            Ok(self.reports)
        } else {
            Err(Error::Batch {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}

/// Compute a single package
pub fn process_package(package: &Package) -> Result<WorkoutReport> {
    let params = package.numbers()?;
    read_package(&package.code, &params)?.report()
}

/// Compute every package according to the failure policy
pub fn run_batch(packages: &[Package], on_error: OnError) -> Result<BatchSummary> {
    run_batch_with(packages, on_error, |_| Ok(()))
}

/// Like [`run_batch`], handing each report to `sink` as soon as it is computed.
///
/// With [`OnError::Abort`], reports before the failing package have already
/// reached the sink when the error is returned. A sink error always aborts.
pub fn run_batch_with<F>(packages: &[Package], on_error: OnError, mut sink: F) -> Result<BatchSummary>
where
    F: FnMut(&WorkoutReport) -> Result<()>,
{
    let mut summary = BatchSummary::default();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok(report) => {
                sink(&report)?;
                summary.reports.push(report);
            }
            Err(error) => match on_error {
                OnError::Abort => return Err(error),
                OnError::Skip => {
                    tracing::warn!(
                        "Skipping package #{} ({}): {}",
                        index + 1,
                        package.code,
                        error
                    );
                    summary.failures.push(BatchFailure {
                        index,
                        package: package.clone(),
                        error,
                    });
                }
            },
        }
    }

    tracing::debug!(
        "Batch done: {} ok, {} failed",
        summary.reports.len(),
        summary.failures.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_packages;

    fn with_bad_package() -> Vec<Package> {
        let mut packages = default_packages();
        packages.insert(1, Package::new("XYZ", &["1", "2", "3"]));
        packages
    }

    #[test]
    fn test_default_batch() {
        crate::logging::init_test();
        let summary = run_batch(&default_packages(), OnError::Abort).unwrap();
        let names: Vec<&str> = summary
            .reports
            .iter()
            .map(|r| r.activity_name.as_str())
            .collect();
        assert_eq!(names, vec!["Swimming", "Running", "SportsWalking"]);
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_abort_on_first_failure() {
        let err = run_batch(&with_bad_package(), OnError::Abort).unwrap_err();
        assert!(matches!(err, Error::UnknownActivity(_)));
    }

    #[test]
    fn test_skip_isolates_failures() {
        let summary = run_batch(&with_bad_package(), OnError::Skip).unwrap();
        assert_eq!(summary.reports.len(), 3);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].index, 1);
        assert_eq!(summary.failures[0].package.code, "XYZ");
        assert_eq!(summary.total(), 4);

        let err = summary.into_result().unwrap_err();
        assert!(matches!(err, Error::Batch { failed: 1, total: 4 }));
    }

    #[test]
    fn test_sink_sees_reports_before_abort() {
        let mut seen = Vec::new();
        let err = run_batch_with(&with_bad_package(), OnError::Abort, |report| {
            seen.push(report.activity_name.clone());
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, Error::UnknownActivity(_)));
        assert_eq!(seen, vec!["Swimming"]);
    }

    #[test]
    fn test_skip_isolates_non_numeric_package() {
        let packages = vec![
            Package::new("SWM", &["720", "1", "80", "25", "40"]),
            Package::new("RUN", &["abc", "1", "75"]),
            Package::new("WLK", &["9000", "1", "75", "180"]),
        ];

        let summary = run_batch(&packages, OnError::Skip).unwrap();
        let names: Vec<&str> = summary
            .reports
            .iter()
            .map(|r| r.activity_name.as_str())
            .collect();
        assert_eq!(names, vec!["Swimming", "SportsWalking"]);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].index, 1);
        assert!(matches!(
            summary.failures[0].error,
            Error::InvalidNumber { ref value, .. } if value == "abc"
        ));

        let err = run_batch(&packages, OnError::Abort).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { .. }));
    }

    #[test]
    fn test_process_zero_duration() {
        let package = Package::new("WLK", &["9000", "0", "75", "180"]);
        assert!(matches!(
            process_package(&package),
            Err(Error::DivisionByZero(_))
        ));
    }
}
