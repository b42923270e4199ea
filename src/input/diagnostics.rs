//! Periodic diagnostic output for the mapper

use crate::input::types::MappingReport;

/// Fires once every `interval` ticks. An interval of 0 never fires.
#[derive(Debug, Clone)]
pub struct TickCounter {
    interval: u32,
    count: u64,
}

impl TickCounter {
    pub fn new(interval: u32) -> Self {
        Self { interval, count: 0 }
    }

    /// Advance by one tick; true when this tick is a multiple of the interval
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        self.interval != 0 && self.count % u64::from(self.interval) == 0
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Receives a report for every mapping pass the counter selects
pub trait DiagnosticSink {
    fn report(&mut self, report: &MappingReport);
}

/// Discards reports
impl DiagnosticSink for () {
    fn report(&mut self, _report: &MappingReport) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, report: &MappingReport) {
        (**self).report(report)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn report(&mut self, report: &MappingReport) {
        (**self).report(report)
    }
}

/// Prints one line per report to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn report(&mut self, report: &MappingReport) {
        println!("{}", report);
    }
}

/// Emits reports as `tracing` debug events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, report: &MappingReport) {
        tracing::debug!(
            raw_x = report.raw_x,
            raw_y = report.raw_y,
            viewport = %report.viewport,
            screen = %report.screen,
            x = report.x,
            y = report.y,
            "pointer mapped"
        );
    }
}

/// Keeps every report in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub reports: Vec<MappingReport>,
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, report: &MappingReport) {
        self.reports.push(*report);
    }
}
