//! # Krishi Advisor
//!
//! An offline farming advisory engine. A farmer's message is spell-checked,
//! matched against a curated knowledge base, checked against regional
//! crop-suitability tables and expanded into a long-form, structured answer
//! that can be formatted for a web frontend.
//!
//! The pipeline itself lives in the `krishi-advisor-core` crate; this crate
//! adds configuration, knowledge file discovery, logging and the `krishi`
//! CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────────────┐
//! │ krishi.toml  │──▶│ Advisor                               │
//! │ extra *.json │   │ spell ▶ knowledge ▶ generator ▶ format │
//! └──────────────┘   └──────────────────┬───────────────────┘
//!                                       ▼
//!                               ┌──────────────┐
//!                               │ CLI (krishi) │
//!                               └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! krishi ask "My wheat crop has yellow leaves"
//! krishi ask "Can I grow rice in Rajasthan?" --json
//! krishi search "aphids on mustard" --category pest_control
//! krishi spell "which fertlizer for my feild"
//! krishi check rice rajasthan
//! krishi stats
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | Knowledge data discovery |
//! | [`advisor`] | Chat pipeline and JSON envelope |
//! | [`ask`] | `krishi ask` |
//! | [`search`] | `krishi search` |
//! | [`spell`] | `krishi spell` |
//! | [`check`] | `krishi check` |
//! | [`stats`] | `krishi stats` |
//! | [`tip`] | `krishi tip` |
//! | [`format_cmd`] | `krishi format` |

pub mod advisor;
pub mod ask;
pub mod check;
pub mod config;
pub mod format_cmd;
pub mod loader;
pub mod search;
pub mod spell;
pub mod stats;
pub mod tip;
