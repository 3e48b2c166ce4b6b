//! Ranking of contractors, vehicles and routes by amount paid

use super::types::PaymentFacts;

/// Sort by total paid, highest first
///
/// The sort is stable: entities with equal totals keep their input order.
///
/// # Example
/// ```
/// use freight_settlement_core_rs::statistics::{rank_by_total_paid, ContractorStat};
///
/// let ranked = rank_by_total_paid(vec![
///     ContractorStat::new("c1", "Alfa", 1, 10, 500),
///     ContractorStat::new("c2", "Beta", 2, 20, 900),
///     ContractorStat::new("c3", "Gama", 1, 5, 500),
/// ]);
/// let ids: Vec<_> = ranked.iter().map(|c| c.id.as_str()).collect();
/// assert_eq!(ids, ["c2", "c1", "c3"]);
/// ```
pub fn rank_by_total_paid<T: PaymentFacts>(mut entities: Vec<T>) -> Vec<T> {
    entities.sort_by(|a, b| b.total_paid().cmp(&a.total_paid()));
    entities
}

/// The `n` highest-paid entities, ties in input order
pub fn top_n<T: PaymentFacts>(entities: Vec<T>, n: usize) -> Vec<T> {
    let mut ranked = rank_by_total_paid(entities);
    ranked.truncate(n);
    ranked
}
