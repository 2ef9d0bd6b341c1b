//! Media Player State Machine
//!
//! This example demonstrates guarded transitions and action positions.
//!
//! Key concepts:
//! - Guards that block a transition without side effects
//! - Actions running before, between or after exit/enter
//! - Events with payloads sent through `dispatch`
//!
//! Run with: cargo run --example media_player

use hookstate::{
    state_machine, ActionPosition, ConditionMode, Event, Handle, HandleEvent, MachineBuilder,
    State, Transition,
};
use std::cell::Cell;

#[derive(Default)]
struct Library {
    tracks: Vec<String>,
}

#[derive(Default)]
struct Stopped;

#[derive(Default)]
struct Playing {
    track: usize,
}

#[derive(Default)]
struct Paused;

struct Load {
    track: String,
}

impl Event for Load {}

state_machine! {
    enum Player {
        Stopped,
        Playing,
        Paused,
    }
    data: Library;
    events {
        Load,
    }
}

impl State<Player> for Stopped {
    fn enter(&mut self, _machine: &mut Handle<'_, Player>) {
        println!("  [Stopped] enter");
    }

    fn exit(&mut self, _machine: &mut Handle<'_, Player>) {
        println!("  [Stopped] exit");
    }
}

impl State<Player> for Playing {
    fn enter(&mut self, machine: &mut Handle<'_, Player>) {
        self.track = machine.data().tracks.len().saturating_sub(1);
        println!("  [Playing] enter: {:?}", machine.data().tracks.last());
    }

    fn exit(&mut self, _machine: &mut Handle<'_, Player>) {
        println!("  [Playing] exit at track #{}", self.track);
    }
}

impl State<Player> for Paused {}

impl HandleEvent<Load, Player> for Stopped {
    fn handle_event(&mut self, event: &Load, machine: &mut Handle<'_, Player>) {
        machine.data_mut().tracks.push(event.track.clone());
    }
}

impl HandleEvent<Load, Player> for Paused {
    fn handle_event(&mut self, event: &Load, machine: &mut Handle<'_, Player>) {
        machine.data_mut().tracks.push(event.track.clone());
    }
}

fn main() {
    println!("=== Media Player State Machine ===\n");

    let mut player = MachineBuilder::<Player>::new(Library::default())
        .history_limit(16)
        .execute_enter(true)
        .build::<Stopped>()
        .expect("valid configuration");

    let has_tracks = Cell::new(false);

    println!("Play with an empty library:");
    let moved = player.go_state_when::<Playing, _>([|| has_tracks.get()], ConditionMode::AllPass);
    println!("  transitioned: {moved}\n");

    player.dispatch(Load {
        track: "overture.flac".to_string(),
    });
    has_tracks.set(!player.data().tracks.is_empty());

    println!("Play after loading a track:");
    player.go_state_guarded::<Playing, _, _>(
        [|| has_tracks.get()],
        [|| println!("  (action) spinning up decoder")],
        ConditionMode::AllPass,
        ActionPosition::Before,
    );

    println!("\nPause:");
    player.go_state_then::<Paused, _>(
        [|| println!("  (action) buffering position")],
        ActionPosition::Between,
    );

    player.dispatch(Load {
        track: "finale.flac".to_string(),
    });

    println!("\nResume:");
    player.apply::<Playing>(
        Transition::new()
            .when(|| false)
            .when(|| true)
            .condition_mode(ConditionMode::OnePass)
            .then(|| println!("  (action) resumed"))
            .action_position(ActionPosition::After),
    );

    println!("\nJournal:");
    for record in player.history().records() {
        println!("  {} -> {}", record.from, record.to);
    }

    println!("\n=== Example Complete ===");
}
