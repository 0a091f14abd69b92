//! CPU burn computation.
//!
//! A fixed, synchronous, CPU-bound loop. The point is to consume a core for
//! the whole duration; the numeric result only exists so the work cannot be
//! optimized away and callers have something to report.

/// Run the burn loop: `iterations` additions of `sqrt(i)`.
pub fn burn(iterations: u64) -> f64 {
    let mut result = 0.0_f64;
    for i in 0..iterations {
        result += (i as f64).sqrt();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_is_deterministic() {
        assert_eq!(burn(1000), burn(1000));
    }

    #[test]
    fn test_burn_grows_with_iterations() {
        assert!(burn(2000) > burn(1000));
        assert_eq!(burn(0), 0.0);
    }
}
