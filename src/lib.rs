mod config;
pub use config::{load_endpoints, ConfigError, Endpoint, ParseError};

pub mod checker;
pub mod domain;
pub mod model;
pub mod monitor;
pub mod output;

pub use checker::{HttpChecker, ProbeError, PROBE_TIMEOUT};
pub use monitor::{Monitor, RoundSummary, ROUND_INTERVAL};
