// src/simulation/runner.rs

//! Run supersession for interactive experiments.
//!
//! The lab pages show a "Simulating..." indicator during an artificial
//! delay, so a second click can race the first run's result onto the
//! screen if nothing guards it. The engine models the guard explicitly:
//! each run holds a [`RunToken`], starting a new run supersedes every
//! outstanding token, and completing with a stale token fails with
//! [`QulabError::RunSuperseded`]. Latest click wins; a stale result can
//! never be delivered.

use crate::core::QulabError;

/// Token identifying one experiment run. Obtained from
/// [`ExperimentRunner::begin`] and spent by [`ExperimentRunner::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken {
    generation: u64,
}

/// Issues and validates run tokens for one experiment surface.
///
/// Each lab page owns one runner; runners are independent, like the
/// pages' isolated state. The runner performs no scheduling itself — the
/// caller computes the result whenever it likes and presents the token
/// at completion time.
#[derive(Debug, Default)]
pub struct ExperimentRunner {
    generation: u64,
}

impl ExperimentRunner {
    /// Creates a runner with no runs issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run, superseding any token issued earlier.
    pub fn begin(&mut self) -> RunToken {
        self.generation += 1;
        RunToken { generation: self.generation }
    }

    /// Returns `true` if `token` belongs to the most recent run.
    pub fn is_current(&self, token: &RunToken) -> bool {
        token.generation == self.generation
    }

    /// Completes a run, passing `value` through if the token is still
    /// current.
    ///
    /// # Errors
    /// Returns `QulabError::RunSuperseded` if a newer run was begun
    /// after `token` was issued; the caller should discard `value`.
    pub fn complete<T>(&self, token: RunToken, value: T) -> Result<T, QulabError> {
        if self.is_current(&token) {
            Ok(value)
        } else {
            Err(QulabError::RunSuperseded {
                message: format!(
                    "run {} was superseded by run {}",
                    token.generation, self.generation
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_token_completes() -> Result<(), QulabError> {
        let mut runner = ExperimentRunner::new();
        let token = runner.begin();
        assert!(runner.is_current(&token));
        let value = runner.complete(token, 42)?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_new_run_supersedes_old_token() {
        let mut runner = ExperimentRunner::new();
        let first = runner.begin();
        let second = runner.begin();
        assert!(!runner.is_current(&first));

        let err = runner.complete(first, "stale").unwrap_err();
        assert!(matches!(err, QulabError::RunSuperseded { .. }));
        assert_eq!(runner.complete(second, "fresh").unwrap(), "fresh");
    }
}
