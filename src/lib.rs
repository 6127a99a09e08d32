// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# microlog

microlog is a compact, compile-time-configurable leveled logging library
for native applications.

# The problem

Most logging setups make two costs hard to control: the runtime cost of
messages nobody is reading, and the operational cost of changing what a
log line carries. microlog makes both explicit:

* A **compile-time floor** strips call sites below a chosen level out of
  the build entirely (`floor_*` cargo features, or `disabled` to remove
  the logger altogether).
* A **runtime threshold** raises and lowers verbosity while the program
  runs.
* A **call-site-local minimum** lets one subsystem opt back in below the
  global threshold for targeted debugging, without drowning the rest of
  the program.
* A **field vector** decides what each line carries (elapsed time, date,
  level tag, executable, pid, uid, user, source file/function/line), with
  one-call presets (`Default`, `Detailed`, `System`, `Debug`, `Verbose`).

# The API

```rust
# use std::sync::Arc;
# use microlog::{Logger, InMemorySink};
# microlog::set_global_logger(Arc::new(Logger::with_sink(InMemorySink::new())));
microlog::info!("processed {count} records", count = 42);
```

Each level has its own macro (`verbose!` through `fatal!`), plus
`log!(level, ...)` and `log_with!(level, local_min, ...)` for dynamic
levels and local overrides. The right-hand side of every `key = value`
pair is only evaluated when the message is actually emitted, and a call
site below the compile-time floor compiles to nothing.

For piecewise message bodies there is a streamed form whose line is
finished when it goes out of scope:

```rust
# use std::fmt::Write as _;
# use microlog::{Level, Logger, InMemorySink};
# let logger = Logger::with_sink(InMemorySink::new());
if let Some(mut entry) = microlog::entry!(logger, Level::Warning) {
    let _ = write!(entry, "slow path taken");
}
```

# Output

Lines go to a [`Sink`]: stderr by default, a log file after
[`Logger::open`] (append or truncate), or an [`InMemorySink`] in tests.
One line per message; enabled header fields appear in a fixed order, each
followed by two spaces, then `": "` and the message body.

# Health and statistics

A logger whose sink failed to open goes quiet rather than taking the host
down: calls below Critical silently no-op, while Critical and Fatal
attempts keep alerting on stderr. Every gate evaluation, emitted or not,
is counted in per-level [`Statistics`], printable on demand.

# Multithreading

The facility is passive and runs on its callers' threads. The sink is the
only shared resource needing exclusion; whole lines are formatted outside
the lock and written under it, so concurrent threads never interleave
partial lines. Threshold, fields and status are independent relaxed
atomics; mutating them concurrently with logging is allowed and may gate a
racing message under either value.
*/

mod compose;
mod entry;
mod fields;
mod file_sink;
mod global_logger;
mod identity;
mod inmemory_sink;
mod level;
mod logger;
mod macros;
mod record;
mod sink;
mod stats;
mod stderr_sink;

pub use compose::CallSite;
pub use entry::Entry;
pub use fields::{Fields, Preset};
pub use file_sink::FileSink;
pub use global_logger::{global_logger, set_global_logger};
pub use identity::{FixedIdentity, IdentityProvider, SystemIdentity};
pub use inmemory_sink::InMemorySink;
pub use level::{ACTIVE, Level, STATIC_FLOOR};
pub use logger::{Logger, MAX_RECORD_LEN};
pub use record::LogRecord;
pub use sink::{OpenError, Sink};
pub use stats::Statistics;
pub use stderr_sink::StderrSink;

pub use microlog_proc::{critical, detail, error, fatal, info, log, log_with, verbose, warn};

#[doc(hidden)]
pub mod hidden {
    pub use crate::global_logger::global_logger;
    pub use crate::macros::{Formatter, log_post, log_pre, log_with_pre};
}

extern crate self as microlog;
