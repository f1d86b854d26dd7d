use crate::models::TimeStep;
use crate::utils::SimulationError;

/// Smallest multiple of `a` that `b` divides, found by stepping through multiples of `a`.
fn lcm(a: TimeStep, b: TimeStep) -> Result<TimeStep, SimulationError> {
    let mut multiple = a;
    while multiple % b != 0 {
        multiple = multiple
            .checked_add(a)
            .ok_or(SimulationError::HyperperiodOverflow { a, b })?;
    }
    Ok(multiple)
}

/// Hyperperiod of a list of periods. Periods must be positive.
pub fn multiple_lcm(numbers: &[TimeStep]) -> Result<TimeStep, SimulationError> {
    let mut iter = numbers.iter();
    let first = match iter.next() {
        Some(&first) => first,
        None => return Ok(1),
    };
    iter.try_fold(first, |acc, &x| lcm(acc, x))
}
