//! Card input, validation, and request assembly for a browser-side equity calculator.
//!
//! The engine owns everything between a user picking cards and an HTTP request
//! leaving the page. Equity math lives in an external service.
//!
//! ## Modules
//!
//! - [`cards`]: Card codec, the only place raw card tokens are interpreted
//! - [`form`]: Slot registry, uniqueness validation, and the variant form controller
//! - [`dto`]: Request and response payloads exchanged with the equity service
//! - [`submit`]: Request builder, transport seam, and the submission lifecycle
//! - [`present`]: Display model derived from a service response
//!
//! With the `client` feature, [`wasm`] exposes the controller to JavaScript.
pub mod cards;
pub mod dto;
pub mod form;
pub mod present;
pub mod submit;

#[cfg(feature = "client")]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Opponent block identifier. Monotonic within a session, never reused.
pub type SequenceId = u32;
/// Equity as a percentage in `0.0..=100.0`.
pub type Equity = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// FORM SHAPE
// ============================================================================
/// Hole cards in Pot-Limit Omaha (4 card).
pub const PLO4_CARDS: usize = 4;
/// Hole cards in Pot-Limit Omaha (5 card).
pub const PLO5_CARDS: usize = 5;
/// Community card slots (flop, turn, river).
pub const BOARD_SLOTS: usize = 5;
/// Smallest non-empty board the service accepts.
pub const FLOP_CARDS: usize = 3;
/// Stud down-card slots per seat.
pub const STUD_DOWN_SLOTS: usize = 3;
/// Stud up-card slots per seat (3rd through 6th street).
pub const STUD_UP_SLOTS: usize = 4;

// ============================================================================
// EQUITY SERVICE
// ============================================================================
/// Where the equity service listens unless configured otherwise.
pub const API_BASE: &str = "http://localhost:8080";
/// Environment variable overriding [`API_BASE`].
pub const API_BASE_ENV: &str = "EQUITY_API_URL";
/// Omaha hand-vs-hand and hand-vs-range.
pub const OMAHA_EQUITY_PATH: &str = "/api/v1/equity";
/// Stud hand-vs-hand.
pub const STUD_EQUITY_PATH: &str = "/api/v1/stud/equity";
/// Stud hand-vs-several-opponents.
pub const STUD_RANGE_PATH: &str = "/api/v1/stud/range-equity";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable selecting the terminal log level.
#[cfg(feature = "cli")]
pub const LOG_LEVEL_ENV: &str = "EQUIFORM_LOG";

/// Initialize terminal logging. Level comes from `EQUIFORM_LOG`, INFO otherwise.
#[cfg(feature = "cli")]
pub fn log() -> Result<(), log::SetLoggerError> {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
