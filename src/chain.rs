//! The strategy chain: run strategies in priority order and keep the best
//! yielding candidate set.

use crate::aliases::AliasTable;
use crate::block::RawBlock;
use crate::record::CandidateRecord;
use crate::strategy::Strategy;
use tracing::{debug, info};

/// Result of running the chain.
#[derive(Debug, Clone, Default)]
pub struct ChainOutcome {
    /// The strategy whose candidates were retained, if any yielded.
    pub strategy: Option<Strategy>,
    pub candidates: Vec<CandidateRecord>,
    /// Candidate count per strategy that actually ran, in run order.
    pub yields: Vec<(Strategy, usize)>,
}

impl ChainOutcome {
    /// Offer a strategy's result; only a strictly larger set replaces the
    /// current one, so ties keep the earlier strategy.
    fn offer(&mut self, strategy: Strategy, candidates: Vec<CandidateRecord>) {
        self.yields.push((strategy, candidates.len()));
        if candidates.len() > self.candidates.len() {
            self.strategy = Some(strategy);
            self.candidates = candidates;
        }
    }

    fn yield_of(&self, strategy: Strategy) -> Option<usize> {
        self.yields
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, n)| *n)
    }

    fn reached(&self, target: Option<usize>) -> bool {
        target.is_some_and(|target| self.candidates.len() >= target)
    }
}

/// Ordered set of strategies with best-result retention and early stop.
#[derive(Debug, Clone)]
pub struct StrategyChain {
    strategies: Vec<Strategy>,
}

impl Default for StrategyChain {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl StrategyChain {
    /// A chain over a custom strategy order.
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Run the chain over `blocks`.
    pub fn run(
        &self,
        blocks: &[RawBlock],
        table: &AliasTable,
        target: Option<usize>,
    ) -> ChainOutcome {
        self.run_with(target, |strategy| strategy.extract(blocks, table))
    }

    fn run_with<F>(&self, target: Option<usize>, mut extract: F) -> ChainOutcome
    where
        F: FnMut(Strategy) -> Vec<CandidateRecord>,
    {
        let mut outcome = ChainOutcome::default();

        for &strategy in &self.strategies {
            if let Some(primary) = strategy.fallback_for() {
                if outcome.yield_of(primary).is_some_and(|n| n > 0) {
                    debug!(%strategy, %primary, "skipping fallback strategy");
                    continue;
                }
            }

            let candidates = extract(strategy);
            debug!(%strategy, found = candidates.len(), "strategy finished");
            outcome.offer(strategy, candidates);

            if outcome.reached(target) {
                debug!(%strategy, target = ?target, "target reached, stopping chain");
                break;
            }
        }

        match outcome.strategy {
            Some(strategy) => info!(
                %strategy,
                candidates = outcome.candidates.len(),
                "retained candidate set"
            ),
            None => info!("no strategy produced candidates"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake(count: usize) -> Vec<CandidateRecord> {
        (0..count)
            .map(|i| CandidateRecord::new(Some(i as u32 + 1), format!("University {i}")))
            .collect()
    }

    fn counts(strategy: Strategy, per: [usize; 4]) -> usize {
        let idx = Strategy::ALL.iter().position(|s| *s == strategy).unwrap();
        per[idx]
    }

    #[test]
    fn larger_later_result_replaces_earlier() {
        let chain = StrategyChain::default();
        let outcome = chain.run_with(None, |s| fake(counts(s, [3, 0, 5, 0])));
        assert_eq!(outcome.strategy, Some(Strategy::LinkAnchor));
        assert_eq!(outcome.candidates.len(), 5);
    }

    #[test]
    fn ties_keep_the_earlier_strategy() {
        let chain = StrategyChain::default();
        let outcome = chain.run_with(None, |s| fake(counts(s, [0, 4, 4, 4])));
        assert_eq!(outcome.strategy, Some(Strategy::GenericRankingItem));
    }

    #[test]
    fn generic_items_only_run_when_list_items_yield_nothing() {
        let chain = StrategyChain::default();
        let mut ran = Vec::new();
        chain.run_with(None, |s| {
            ran.push(s);
            fake(counts(s, [2, 9, 1, 1]))
        });
        assert!(!ran.contains(&Strategy::GenericRankingItem));
    }

    #[test]
    fn stops_once_target_is_met() {
        let chain = StrategyChain::default();
        let mut ran = Vec::new();
        let outcome = chain.run_with(Some(3), |s| {
            ran.push(s);
            fake(counts(s, [0, 0, 3, 10]))
        });
        assert_eq!(outcome.strategy, Some(Strategy::LinkAnchor));
        assert_eq!(ran.last(), Some(&Strategy::LinkAnchor));
        assert_eq!(outcome.yields.len(), 3);
    }

    #[test]
    fn empty_everywhere_retains_nothing() {
        let chain = StrategyChain::default();
        let outcome = chain.run_with(Some(1), |_| Vec::new());
        assert_eq!(outcome.strategy, None);
        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.yields.len(), 4);
    }
}
