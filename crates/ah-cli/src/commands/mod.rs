pub mod interact;
pub mod roll;

use ah_dice::{CheckOutcome, CheckRequest, EntropyFactory, Resolver, SeededFactory};

/// Resolve with a seeded factory when a seed is given, fresh entropy otherwise.
fn resolve(resolver: &Resolver, request: &CheckRequest, seed: Option<u64>) -> Vec<CheckOutcome> {
    match seed {
        Some(seed) => resolver.resolve(request, &mut SeededFactory::new(seed)),
        None => resolver.resolve(request, &mut EntropyFactory),
    }
}
