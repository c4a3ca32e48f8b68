//! Per-instrument evaluation, on the rayon pool when configured.

use std::sync::Arc;

use crate::config::CalibrationConfig;
use crate::error::CalibrationResult;
use crate::instruments::CalibrationInstrument;

/// Evaluates `f` once per calibration instrument and gathers the results in
/// instrument order.
///
/// Instruments are priced in parallel only with the `parallel` feature and
/// when [`CalibrationConfig::should_parallelize`] accepts the instrument
/// count. The first error in instrument order is returned.
#[allow(unused_variables)]
pub(crate) fn evaluate_instruments<U, F>(
    instruments: &[Arc<dyn CalibrationInstrument>],
    config: &CalibrationConfig,
    f: F,
) -> CalibrationResult<Vec<U>>
where
    U: Send,
    F: Fn(&dyn CalibrationInstrument) -> CalibrationResult<U> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(instruments.len()) {
            let results: Vec<_> = instruments.par_iter().map(|i| f(i.as_ref())).collect();
            return results.into_iter().collect();
        }
    }

    instruments.iter().map(|i| f(i.as_ref())).collect()
}
