use thiserror::Error;

/// Errors that can occur while replicating a trial.
#[derive(Debug, Error)]
pub enum Error<E>
where
    E: std::error::Error + 'static,
{
    /// The requested replication count was zero.
    #[error("replication count must be at least 1")]
    InvalidCount,

    /// A trial invocation failed.
    ///
    /// Replication is fail-fast: the failure aborts the run immediately,
    /// with no partial results and no retry. The trial's own error is
    /// preserved as the source.
    #[error("trial {index} failed")]
    Trial {
        /// Zero-based index of the failed invocation.
        index: usize,
        #[source]
        source: E,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as StdError;

    use thiserror::Error as DeriveError;

    #[derive(Debug, DeriveError)]
    #[error("inner failure")]
    struct Inner;

    #[test]
    fn trial_errors_expose_their_source() {
        let error: Error<Inner> = Error::Trial {
            index: 4,
            source: Inner,
        };

        assert_eq!(error.to_string(), "trial 4 failed");
        assert_eq!(error.source().unwrap().to_string(), "inner failure");
    }
}
