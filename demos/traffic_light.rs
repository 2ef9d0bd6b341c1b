//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine driven by a single event.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Event handlers requesting the next state
//! - Host data updated from enter hooks
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use hookstate::{state_machine, Event, Handle, HandleEvent, Machine, State};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Red;

#[derive(Default)]
struct Green;

#[derive(Default)]
struct Yellow;

#[derive(Default)]
struct Timer;

impl Event for Timer {}

state_machine! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
    data: u32;
    events {
        Timer,
    }
}

impl State<TrafficLight> for Red {
    fn enter(&mut self, machine: &mut Handle<'_, TrafficLight>) {
        *machine.data_mut() += 1;
        println!("  Red    (Stop)    cycle {}", machine.data());
    }
}

impl State<TrafficLight> for Green {
    fn enter(&mut self, _machine: &mut Handle<'_, TrafficLight>) {
        println!("  Green  (Go!)");
    }
}

impl State<TrafficLight> for Yellow {
    fn enter(&mut self, _machine: &mut Handle<'_, TrafficLight>) {
        println!("  Yellow (Caution)");
    }
}

impl HandleEvent<Timer, TrafficLight> for Red {
    fn handle_event(&mut self, _event: &Timer, machine: &mut Handle<'_, TrafficLight>) {
        machine.go_state::<Green>().expect("default config defers requests");
    }
}

impl HandleEvent<Timer, TrafficLight> for Green {
    fn handle_event(&mut self, _event: &Timer, machine: &mut Handle<'_, TrafficLight>) {
        machine.go_state::<Yellow>().expect("default config defers requests");
    }
}

impl HandleEvent<Timer, TrafficLight> for Yellow {
    fn handle_event(&mut self, _event: &Timer, machine: &mut Handle<'_, TrafficLight>) {
        machine.go_state::<Red>().expect("default config defers requests");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = Machine::<TrafficLight>::initial_state::<Red>(true);

    for _ in 0..6 {
        light.event::<Timer>();
    }

    println!("\nVisited: {}", light.history().path().join(" -> "));
    println!("\n=== Example Complete ===");
}
