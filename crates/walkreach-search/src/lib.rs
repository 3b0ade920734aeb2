//! The two state machines that drive a walkreach session: the one-shot
//! search pipeline ([`SearchOrchestrator`]) and the continuous autocomplete
//! loop ([`AutocompleteController`]).
//!
//! Both follow the same last-submission-wins discipline: every submission
//! claims a new generation from a per-flow counter, and output is only ever
//! published while its generation is still the latest. The two flows share
//! a geocoder but never share cancellation state.

pub mod autocomplete;
pub mod orchestrator;

pub use autocomplete::{AutocompleteConfig, AutocompleteController, DropdownState};
pub use orchestrator::{SearchConfig, SearchOrchestrator, SearchState};
