/// Compares measured wall-clock time for the whole batch against the cost a
/// sequential run would have paid: the sum of every delay. Empty input sums
/// to zero, so an empty batch is never "faster".
pub fn parallel_faster(total_time: f64, delays: &[f64]) -> bool {
    let sequential_estimate: f64 = delays.iter().sum();
    total_time < sequential_estimate
}
