//! Stemming engine.
//!
//! The engine turns one lowercase word into its root by stripping affixes and
//! checking every intermediate candidate against a [`Lexicon`]. The rule data
//! (prefix tables, suffix patterns, shape tests) lives under `src/rules/`; the
//! control flow that drives it lives here, split into focused submodules.
//!
//! ## How the parts work together
//!
//! ```text
//! word ─ lowercase ─┬─ < 3 chars ───────────────────────────────> word
//!                   ├─ Lexicon hit ─────────────────────────────> word
//!                   │
//!                   │  prefix_first(word)?            (rules/suffix.rs)
//!                   ├─ yes: remove_prefixes ─ strip_suffixes
//!                   └─ no:  strip_suffixes ─ remove_prefixes
//!                               │   (prefix.rs)      (suffix.rs)
//!                               v
//!                     any probe hit? ──────────────────────────> root
//!                               │ no
//!                               v
//!                     recombine (recombine.rs)
//!                       - re-attach removed suffixes one piece at a time
//!                       - probe, then prefix removal without the pairing guard
//!                               │
//!                               v
//!                     root, or the lowercased word
//! ```
//!
//! The greedy pass and recombination refuse nothing on their own: every
//! candidate they build is only accepted once the dictionary confirms it.
//! That makes the result safe by construction: the output is either a
//! dictionary word or the (lowercased) input.
//!
//! ## Responsibilities by module
//!
//! - `orchestrator.rs`: the cascade above, and [`Session`] which bundles the
//!   dictionary with the run trace so every probe is recorded in one place.
//! - `prefix.rs`: up to three prefix-removal rounds with recoding probes and
//!   the stop conditions (too short, disallowed pairing, repeated prefix).
//! - `suffix.rs`: the particle, possessive and derivational layers, and the
//!   record of what they removed.
//! - `recombine.rs`: last-resort re-attachment of removed suffixes.
//! - `trace.rs`: [`Branch`], [`Stage`], [`Stages`] and the per-probe
//!   [`StepSummary`] used by verbose runs.
//!
//! ## Debugging
//!
//! Every probe and every fired prefix rule emits a `tracing` event at TRACE
//! level under the `akarkata` target, e.g. `RUST_LOG=akarkata=trace`.
//!
//! [`Lexicon`]: crate::Lexicon
//! [`Session`]: orchestrator::Session

#[path = "engine/orchestrator.rs"]
mod orchestrator;
#[path = "engine/prefix.rs"]
mod prefix;
#[path = "engine/recombine.rs"]
mod recombine;
#[path = "engine/suffix.rs"]
mod suffix;
#[path = "engine/trace.rs"]
mod trace;

pub(crate) use orchestrator::{Session, stem};
pub use trace::{Branch, Stage, Stages, StepSummary};
pub(crate) use trace::Trace;
