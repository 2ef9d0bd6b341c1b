//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation sequences.

use hookstate::{
    state_machine, Condition, ConditionMode, Event, Handle, HandleEvent, Machine, State,
    Transition,
};
use proptest::prelude::*;
use std::cell::Cell;

#[derive(Default)]
struct Alpha;

#[derive(Default)]
struct Beta;

#[derive(Default)]
struct Gamma {
    pokes: u32,
}

#[derive(Default)]
struct Poke;

impl Event for Poke {}

state_machine! {
    enum Triad {
        Alpha,
        Beta,
        Gamma,
    }
    data: u32;
    events {
        Poke,
    }
}

// Host data counts hook invocations.
impl State<Triad> for Alpha {
    fn enter(&mut self, machine: &mut Handle<'_, Triad>) {
        *machine.data_mut() += 1;
    }

    fn exit(&mut self, machine: &mut Handle<'_, Triad>) {
        *machine.data_mut() += 1;
    }
}

impl State<Triad> for Beta {
    fn enter(&mut self, machine: &mut Handle<'_, Triad>) {
        *machine.data_mut() += 1;
    }
}

impl State<Triad> for Gamma {
    fn exit(&mut self, machine: &mut Handle<'_, Triad>) {
        *machine.data_mut() += 1;
    }
}

impl HandleEvent<Poke, Triad> for Gamma {
    fn handle_event(&mut self, _event: &Poke, _machine: &mut Handle<'_, Triad>) {
        self.pokes += 1;
    }
}

#[derive(Clone, Debug)]
enum Op {
    Go {
        target: u8,
        guard: Option<Vec<bool>>,
        mode: ConditionMode,
    },
    Poke,
}

prop_compose! {
    fn arbitrary_mode()(one in any::<bool>()) -> ConditionMode {
        if one { ConditionMode::OnePass } else { ConditionMode::AllPass }
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (
            0..3u8,
            prop::option::of(prop::collection::vec(any::<bool>(), 0..4)),
            arbitrary_mode()
        )
            .prop_map(|(target, guard, mode)| Op::Go { target, guard, mode }),
        Just(Op::Poke),
    ]
}

fn active_count(machine: &Machine<Triad>) -> usize {
    [
        machine.is_state::<Alpha>(),
        machine.is_state::<Beta>(),
        machine.is_state::<Gamma>(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

fn go(machine: &mut Machine<Triad>, target: u8, transition: Transition<'_>) -> bool {
    match target {
        0 => machine.apply::<Alpha>(transition),
        1 => machine.apply::<Beta>(transition),
        _ => machine.apply::<Gamma>(transition),
    }
}

fn expected_pass(guard: &[bool], mode: ConditionMode) -> bool {
    match mode {
        ConditionMode::AllPass => guard.iter().all(|b| *b),
        ConditionMode::OnePass => guard.iter().any(|b| *b),
    }
}

proptest! {
    #[test]
    fn condition_mode_matches_all_and_any(
        values in prop::collection::vec(any::<bool>(), 0..8),
        mode in arbitrary_mode()
    ) {
        let evaluated = Cell::new(0usize);
        let mut conditions: Vec<Condition> = values
            .iter()
            .map(|v| {
                let v = *v;
                let evaluated = &evaluated;
                Condition::new(move || {
                    evaluated.set(evaluated.get() + 1);
                    v
                })
            })
            .collect();

        let passed = mode.evaluate(&mut conditions);
        prop_assert_eq!(passed, expected_pass(&values, mode));

        // Short-circuit: evaluation stops at the first deciding value.
        let decisive = match mode {
            ConditionMode::AllPass => values.iter().position(|v| !*v),
            ConditionMode::OnePass => values.iter().position(|v| *v),
        };
        let expected_count = decisive.map_or(values.len(), |i| i + 1);
        drop(conditions);
        prop_assert_eq!(evaluated.get(), expected_count);
    }

    #[test]
    fn exactly_one_state_is_always_active(ops in prop::collection::vec(arbitrary_op(), 0..32)) {
        let mut machine = Machine::<Triad>::initial_state::<Alpha>(false);
        prop_assert_eq!(active_count(&machine), 1);

        for op in ops {
            match op {
                Op::Go { target, guard, mode } => {
                    let mut transition = Transition::new().condition_mode(mode);
                    if let Some(guard) = guard {
                        transition = transition.conditions(guard.into_iter().map(|v| move || v));
                    }
                    go(&mut machine, target, transition);
                }
                Op::Poke => {
                    machine.event::<Poke>();
                }
            }
            prop_assert_eq!(active_count(&machine), 1);
        }
    }

    #[test]
    fn failed_guard_leaves_machine_untouched(
        ops in prop::collection::vec(arbitrary_op(), 0..32)
    ) {
        let mut machine = Machine::<Triad>::initial_state::<Alpha>(false);

        for op in ops {
            let Op::Go { target, guard: Some(guard), mode } = op else {
                machine.event::<Poke>();
                continue;
            };

            let name = machine.active_name();
            let hooks = *machine.data();
            let records = machine.history().len();
            let pokes = machine.state::<Gamma>().map(|g| g.pokes);
            let action_ran = Cell::new(false);

            let transition = Transition::new()
                .conditions(guard.iter().copied().map(|v| move || v))
                .condition_mode(mode)
                .then(|| action_ran.set(true));
            let moved = go(&mut machine, target, transition);

            prop_assert_eq!(moved, expected_pass(&guard, mode));
            prop_assert_eq!(action_ran.get(), moved);
            if !moved {
                prop_assert_eq!(machine.active_name(), name);
                prop_assert_eq!(*machine.data(), hooks);
                prop_assert_eq!(machine.history().len(), records);
                prop_assert_eq!(machine.state::<Gamma>().map(|g| g.pokes), pokes);
            }
        }
    }

    #[test]
    fn history_follows_successful_transitions(targets in prop::collection::vec(0..3u8, 1..16)) {
        let mut machine = Machine::<Triad>::initial_state::<Alpha>(false);
        let mut expected = vec!["Alpha"];

        for target in targets {
            go(&mut machine, target, Transition::new());
            expected.push(machine.active_name());
        }

        prop_assert_eq!(machine.history().path(), expected);
    }
}
