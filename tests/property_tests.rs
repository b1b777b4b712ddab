use proptest::prelude::*;
use solarscope::analyzer::{rank, AnalysisResult, Band, BandingStrategy, Summary};
use solarscope::categories::Location;
use solarscope::insights::BuildingSolarInsights;

// Scores drawn from a small pool so ties are common.
prop_compose! {
    fn arb_result()(
        ok in prop::bool::weighted(0.8),
        score in prop::sample::select(vec![0.0, 12.5, 100.0, 250.0, 999.9]),
    ) -> AnalysisResult {
        let location = Location::new("site", 0.0, 0.0, "");
        if ok {
            let insights = BuildingSolarInsights::with_potential(1, 1.0, 1.0);
            AnalysisResult::succeeded(location, insights, score)
        } else {
            AnalysisResult::failed(location, "upstream failure")
        }
    }
}

fn arb_strategy() -> impl Strategy<Value = BandingStrategy> {
    prop_oneof![
        Just(BandingStrategy::QuantileRank),
        Just(BandingStrategy::MinMax)
    ]
}

proptest! {
    #[test]
    fn ranking_is_sorted_and_stable(
        results in prop::collection::vec(arb_result(), 0..40),
        strategy in arb_strategy(),
    ) {
        let ranking = rank(&results, strategy);

        prop_assert_eq!(ranking.len(), results.iter().filter(|r| r.success).count());
        for (i, r) in ranking.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
            prop_assert!(results[r.input_index].success);
        }
        for pair in ranking.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].input_index < pair[1].input_index);
            }
        }
    }

    #[test]
    fn bands_never_increase_down_the_ranking(
        results in prop::collection::vec(arb_result(), 1..40),
        strategy in arb_strategy(),
    ) {
        let level = |b: Band| match b {
            Band::High => 2,
            Band::Medium => 1,
            Band::Low => 0,
        };
        let ranking = rank(&results, strategy);
        for pair in ranking.windows(2) {
            prop_assert!(level(pair[0].band) >= level(pair[1].band));
        }
    }

    #[test]
    fn summary_counts_add_up(
        results in prop::collection::vec(arb_result(), 0..40),
        skipped in 0usize..5,
    ) {
        let ranking = rank(&results, BandingStrategy::default());
        let summary = Summary::new(&results, &ranking, skipped);

        prop_assert_eq!(summary.total, results.len() + skipped);
        prop_assert_eq!(summary.succeeded + summary.failed + summary.skipped, summary.total);
        prop_assert_eq!(summary.average_score.is_some(), summary.succeeded > 0);
        if let (Some(best), Some(worst)) = (&summary.best, &summary.worst) {
            prop_assert!(best.score >= worst.score);
        }
    }
}
