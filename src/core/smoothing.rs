/// One exponential-smoothing step: closes `factor` of the remaining gap.
#[must_use]
pub fn smoothing_step(displayed: f64, target: f64, factor: f64) -> f64 {
    displayed + (target - displayed) * factor
}

#[must_use]
pub fn is_converged(displayed: f64, target: f64, epsilon: f64) -> bool {
    (target - displayed).abs() < epsilon
}

/// Number of smoothing steps needed before `gap` shrinks below `epsilon`.
///
/// Returns `None` when the parameters never converge (`factor` outside `(0, 1]`).
#[must_use]
pub fn steps_to_converge(gap: f64, factor: f64, epsilon: f64) -> Option<usize> {
    if !(factor > 0.0 && factor <= 1.0) || !gap.is_finite() || !(epsilon > 0.0) {
        return None;
    }
    let gap = gap.abs();
    if gap < epsilon {
        return Some(0);
    }
    if factor == 1.0 {
        return Some(1);
    }
    let retain = 1.0 - factor;
    let mut remaining = gap;
    let mut steps = 0;
    while remaining >= epsilon {
        remaining *= retain;
        steps += 1;
    }
    Some(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_closes_fraction_of_gap() {
        let next = smoothing_step(0.0, 0.4, 0.12);
        assert!((next - 0.048).abs() < 1e-12);
    }

    #[test]
    fn unit_gap_needs_about_fifty_five_steps() {
        assert_eq!(steps_to_converge(1.0, 0.12, 0.001), Some(55));
    }

    #[test]
    fn invalid_factor_never_converges() {
        assert_eq!(steps_to_converge(1.0, 0.0, 0.001), None);
        assert_eq!(steps_to_converge(1.0, 1.5, 0.001), None);
    }

    #[test]
    fn convergence_threshold_is_strict() {
        assert!(is_converged(0.3995, 0.4, 0.001));
        assert!(!is_converged(0.398, 0.4, 0.001));
    }
}
