//! Diagnostic channel setup. Operator-facing output goes through the
//! reporter; this subscriber only carries `RUST_LOG`-gated internals, e.g.
//! per-candidate resolution traces and ping spawn failures.

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .event_format(DiagFormatter)
        .init();
}

/// Renders diagnostics as short severity-symbol lines. Verbose levels
/// additionally carry the emitting module, so `RUST_LOG=debug` output stays
/// attributable when core and cli interleave.
pub struct DiagFormatter;

impl<S, N> FormatEvent<S, N> for DiagFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = *meta.level();

        write!(writer, "{} ", level_symbol(level))?;
        if level == Level::DEBUG || level == Level::TRACE {
            write!(writer, "{}: ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    if level == Level::ERROR {
        "[!]".red().bold()
    } else if level == Level::WARN {
        "[*]".yellow().bold()
    } else if level == Level::INFO {
        "[i]".cyan()
    } else {
        "[?]".dimmed()
    }
}
