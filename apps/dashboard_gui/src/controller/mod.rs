//! Controller layer: UI events, reducer-like state transitions, and event dispatch.

pub mod events;
pub mod orchestration;
pub mod reducer;
