//! Dual-destination fan-out shared by the built-in log functions

use crate::core::{same_sink, LogLevel, Result, SinkRef};
use futures::future::join_all;

/// Which of the first two destinations receive a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOut {
    pub primary: bool,
    pub secondary: bool,
}

impl FanOut {
    /// WARN and ERROR also go to the secondary destination when it is a
    /// different sink. If both sinks are interactive terminals the primary is
    /// then skipped, so a problem is never printed twice on one console.
    pub fn plan(level: LogLevel, destinations: &[SinkRef]) -> Self {
        let (dest0, dest1) = match destinations {
            [] => {
                return Self {
                    primary: false,
                    secondary: false,
                }
            }
            [only] => (only, None),
            [first, second, ..] => (first, Some(second)),
        };

        let secondary = level.routes_to_secondary()
            && dest1.is_some_and(|dest1| !same_sink(dest0, dest1));
        let both_interactive =
            dest0.is_terminal() && dest1.is_some_and(|dest1| dest1.is_terminal());

        Self {
            primary: !(secondary && both_interactive),
            secondary,
        }
    }

    /// Write `line` to the selected sinks and wait for every write.
    ///
    /// A failing write does not stop the other one; the first failure is
    /// returned once both have completed.
    pub async fn write(self, line: &[u8], destinations: &[SinkRef]) -> Result<()> {
        let selected = [self.primary, self.secondary]
            .into_iter()
            .zip(destinations)
            .filter_map(|(chosen, sink)| chosen.then_some(sink));

        join_all(selected.map(|sink| sink.write(line)))
            .await
            .into_iter()
            .collect::<Result<Vec<()>>>()?;
        Ok(())
    }
}

/// Plan and perform the fan-out for one formatted line.
pub async fn fan_out(level: LogLevel, line: &[u8], destinations: &[SinkRef]) -> Result<()> {
    FanOut::plan(level, destinations).write(line, destinations).await
}
