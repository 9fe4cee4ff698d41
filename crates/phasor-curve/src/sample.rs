//! Sampling curves over a sweep.

use phasor_core::{Result, Validate};
use phasor_math::Point2;
use rayon::prelude::*;
use tracing::debug;

use crate::config::CurveConfig;
use crate::curve::Curve;
use crate::polyline::Polyline;
use crate::sweep::Sweep;

/// Sample counts at or above this are evaluated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Evaluate `curve` at every angle of `sweep`, preserving sweep order.
///
/// Each point depends only on its own angle, so the parallel and sequential
/// paths produce identical output.
pub fn sample(curve: &dyn Curve, sweep: &Sweep) -> Result<Polyline> {
    sweep.validate()?;

    let angles = sweep.angles();
    let points: Vec<Point2> = if angles.len() >= PARALLEL_THRESHOLD {
        angles.par_iter().map(|&theta| curve.point_at(theta)).collect()
    } else {
        angles.iter().map(|&theta| curve.point_at(theta)).collect()
    };

    debug!(samples = sweep.samples, degrees = sweep.degrees, "sampled curve");
    Ok(Polyline::new(points))
}

/// Build the curve described by `config` and sample it.
pub fn generate(config: &CurveConfig) -> Result<Polyline> {
    let curve = config.build()?;
    sample(&curve, &config.sweep)
}
