//! Property tests for the tranche engine and draw state machine.

use proptest::prelude::*;
use swiss_draw::{advance, Distribution, DrawRng, DrawState, ScriptedSource, TieBreak};

fn tie_break() -> impl Strategy<Value = TieBreak> {
    prop_oneof![
        Just(TieBreak::BestCase),
        Just(TieBreak::WorstCase),
        Just(TieBreak::Random),
    ]
}

fn distribution() -> impl Strategy<Value = Distribution> {
    prop::collection::vec(0u32..500, 1..12)
        .prop_map(|counts| Distribution::try_from(counts).unwrap())
}

proptest! {
    #[test]
    fn advance_conserves_population(
        d in distribution(),
        policy in tie_break(),
        coins in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let mut source = ScriptedSource::new(coins);
        let next = advance(&d, policy, &mut source);
        prop_assert_eq!(next.total(), d.total());
    }

    #[test]
    fn advance_grows_by_one_tranche(d in distribution(), policy in tie_break(), seed in any::<u64>()) {
        let mut rng = DrawRng::new(seed);
        let next = advance(&d, policy, &mut rng);
        prop_assert_eq!(next.len(), d.len() + 1);
    }

    #[test]
    fn advance_conserves_near_population_cap(
        parts in prop::collection::vec(any::<u32>(), 1..8),
        policy in tie_break(),
        seed in any::<u64>(),
    ) {
        let share = parts.len() as u32;
        let counts: Vec<u32> = parts.iter().map(|p| p / share).collect();
        let d = Distribution::try_from(counts).unwrap();
        let mut rng = DrawRng::new(seed);
        let next = advance(&d, policy, &mut rng);
        prop_assert_eq!(next.total(), d.total());
    }

    #[test]
    fn all_even_is_policy_independent(
        halves in prop::collection::vec(0u32..250, 1..12),
        seed in any::<u64>(),
    ) {
        let doubled: Vec<u32> = halves.iter().map(|h| h * 2).collect();
        let d = Distribution::try_from(doubled).unwrap();
        let mut rng = DrawRng::new(seed);
        let best = advance(&d, TieBreak::BestCase, &mut rng);
        let worst = advance(&d, TieBreak::WorstCase, &mut rng);
        let random = advance(&d, TieBreak::Random, &mut rng);
        prop_assert_eq!(&best, &worst);
        prop_assert_eq!(&best, &random);
    }

    #[test]
    fn undefeated_never_grows(participants in 1u32..2000, rounds in 1usize..12, seed in any::<u64>()) {
        let mut rng = DrawRng::new(seed);
        let mut state = DrawState::new(participants);
        for _ in 0..rounds {
            let next = state.advance_round(&mut rng);
            prop_assert!(next.tranches().get(0) <= state.tranches().get(0));
            state = next;
        }
    }

    #[test]
    fn revert_undoes_advance(
        participants in 1u32..2000,
        rounds in 1usize..10,
        policy in tie_break(),
        seed in any::<u64>(),
    ) {
        let mut rng = DrawRng::new(seed);
        let mut state = DrawState::new(participants).set_tie_break(policy);
        for _ in 0..rounds {
            state = state.advance_round(&mut rng);
        }
        let round_trip = state.advance_round(&mut rng).revert_round();
        prop_assert_eq!(round_trip, state);
    }

    #[test]
    fn history_matches_round(participants in 1u32..500, rounds in 0usize..10, seed in any::<u64>()) {
        let mut rng = DrawRng::new(seed);
        let mut state = DrawState::new(participants);
        for _ in 0..rounds {
            state = state.advance_round(&mut rng);
        }
        prop_assert_eq!(state.current.prior.len() as u32, state.round() - 1);
    }

    #[test]
    fn reconfigure_resets(
        participants in 1u32..500,
        rounds in 0usize..6,
        raw in ".{0,6}",
        policy in tie_break(),
    ) {
        let mut source = ScriptedSource::default();
        let mut state = DrawState::new(participants);
        for _ in 0..rounds {
            state = state.advance_round(&mut source);
        }

        let by_input = state.set_participant_count(raw);
        prop_assert_eq!(by_input.round(), 1);
        prop_assert!(by_input.current.prior.is_empty());
        prop_assert_eq!(by_input.tranches().len(), 1);

        let by_policy = state.set_tie_break(policy);
        prop_assert_eq!(by_policy.round(), 1);
        prop_assert!(by_policy.current.prior.is_empty());
        prop_assert_eq!(by_policy.tranches(), &Distribution::initial(participants));
    }
}
