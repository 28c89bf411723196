//! Minimal thread-safe logging facade for cairn error reports.
//!
//! One [`Logger`] serves the whole process. It owns a replaceable [`Sink`]
//! and stamps every line with a local timestamp before handing it over;
//! a mutex keeps concurrent emissions line-granular. The sink defaults to
//! stdout and can be swapped exactly once with [`try_init`], so install a
//! custom sink before the first emission from any thread.
//!
//! ```no_run
//! use cairn_error::Error;
//!
//! cairn_log::try_init(cairn_log::StdoutSink).expect("installed before first emit");
//! cairn_log::emit("service starting")?;
//! cairn_log::emit_error(&Error::warning("cache cold"))?;
//! # Ok::<(), cairn_error::Error>(())
//! ```

pub mod facade;
pub mod result_ext;
pub mod sink;

pub use facade::{LogError, Logger, emit, emit_error, emit_error_at, emit_report, global, try_init};
pub use result_ext::LogResultExt;
pub use sink::{Sink, StdoutSink};

#[cfg(feature = "tracing")]
pub use sink::TracingSink;
