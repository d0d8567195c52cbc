//! Valuation engine: price/yield, risk, tenor, benchmark, in that order.

use std::sync::Arc;

use tracing::{debug, info_span};

use bondscope_traits::BenchmarkSource;

use crate::error::BondResult;
use crate::pricing::{price_from_yield, YieldSolver};
use crate::quote::{Quote, Resolution};
use crate::record::BondRecord;
use crate::risk::RiskMeasures;
use crate::spreads::BenchmarkResolver;
use crate::tenor::{Tenor, TenorCutoffs};
use crate::terms::BondTerms;

/// Turns bond terms plus one market quote into a [`BondRecord`].
///
/// The engine holds no per-bond state and can value any number of bonds.
/// Without a benchmark resolver, records carry no benchmark or spread.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    solver: YieldSolver,
    tenor_cutoffs: TenorCutoffs,
    resolver: Option<BenchmarkResolver>,
}

impl ValuationEngine {
    /// Creates an engine that looks benchmarks up in `source`.
    pub fn new(source: Arc<dyn BenchmarkSource>) -> Self {
        Self::without_benchmark().with_resolver(BenchmarkResolver::new(source))
    }

    /// Creates an engine that never looks up a benchmark.
    pub fn without_benchmark() -> Self {
        Self::default()
    }

    /// Replaces the yield solver.
    #[must_use]
    pub fn with_solver(mut self, solver: YieldSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Selects the long-end tenor cutoffs.
    #[must_use]
    pub fn with_tenor_cutoffs(mut self, cutoffs: TenorCutoffs) -> Self {
        self.tenor_cutoffs = cutoffs;
        self
    }

    /// Replaces the benchmark resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: BenchmarkResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Values `terms` at `quote`.
    ///
    /// # Errors
    ///
    /// Propagates numerical degeneracy from pricing and risk, and
    /// non-convergence when the solver is strict. A missing benchmark is not
    /// an error.
    pub fn value(&self, terms: BondTerms, quote: Quote) -> BondResult<BondRecord> {
        let span = info_span!("value", settlement = %terms.settlement(), maturity = %terms.maturity());
        let _enter = span.enter();

        let (price, ytm, resolution) = match quote {
            Quote::Yield(ytm) => (
                price_from_yield(&terms, ytm)?,
                ytm,
                Resolution::PriceFromYield,
            ),
            Quote::Price(price) => {
                let solved = self.solver.solve(&terms, price)?;
                (
                    price,
                    solved.yield_value,
                    Resolution::YieldFromPrice {
                        iterations: solved.iterations,
                        converged: solved.converged,
                    },
                )
            }
        };

        let risk = RiskMeasures::compute(&terms, ytm, price)?;
        let tenor = Tenor::classify(&terms, self.tenor_cutoffs);

        let benchmark = self
            .resolver
            .as_ref()
            .and_then(|resolver| resolver.resolve(tenor, terms.settlement()));

        debug!(price, ytm, %tenor, has_benchmark = benchmark.is_some(), "bond valued");

        Ok(BondRecord::new(
            terms, price, ytm, resolution, risk, tenor, benchmark,
        ))
    }
}
