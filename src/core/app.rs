use crate::core::calculator;
use crate::core::pipeline::process_items;
use crate::core::{Clock, ConfigProvider, RunReport};
use crate::utils::error::Result;
use crate::utils::time::format_timestamp;
use std::io::Write;

pub struct Application<C: ConfigProvider, K: Clock> {
    config: C,
    clock: K,
}

impl<C: ConfigProvider, K: Clock> Application<C, K> {
    pub fn new(config: C, clock: K) -> Self {
        Self { config, clock }
    }

    /// Writes the full run to `out`. Any write failure aborts the run.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunReport> {
        writeln!(out, "Application starting...")?;
        writeln!(out, "Version: {}", self.config.version())?;

        let timestamp = format_timestamp(self.clock.now());
        writeln!(out, "Current time: {}", timestamp)?;

        writeln!(out)?;
        writeln!(out, "Processing items...")?;
        let processed = process_items(self.config.items(), self.config.min_item_length());
        tracing::info!("Processed {} of {} items", processed.len(), self.config.items().len());

        writeln!(out, "Processed items:")?;
        for item in processed.iter() {
            writeln!(out, "- {}", item)?;
        }

        let (a, b) = self.config.operands();
        let calculation = calculator::add(a, b);
        tracing::debug!("add({}, {}) = {}", a, b, calculation);
        writeln!(out)?;
        writeln!(out, "Calculation result: {}", calculation)?;

        writeln!(out, "Application completed.")?;
        out.flush()?;

        Ok(RunReport {
            timestamp,
            processed,
            calculation,
        })
    }
}
