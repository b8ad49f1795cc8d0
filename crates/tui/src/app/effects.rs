use super::*;

impl App {
    /// Drains completions queued by background tasks. Called once per loop
    /// tick, on the only thread that mutates state.
    pub fn process_events(&mut self) {
        let mut events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }

        for event in events {
            match event {
                AppAsyncEvent::AnalysisFinished {
                    generation,
                    report,
                    error,
                } => {
                    if generation != self.analysis_generation {
                        // The user reset while this request was in flight.
                        tracing::debug!(
                            generation,
                            current = self.analysis_generation,
                            "dropping stale analysis completion"
                        );
                        continue;
                    }

                    self.analyzing_since = None;

                    if let Some(error) = error {
                        self.phase = Phase::Idle;
                        let message = error.user_message();
                        self.report_error(message, error);
                    } else if let Some(report) = report {
                        tracing::info!(chars = report.len(), "analysis report received");
                        self.phase = Phase::Done;
                        self.scroll_offset = 0;
                        self.result = Some(AnalysisResult {
                            report,
                            received_at: Utc::now(),
                        });
                        self.clear_error();
                    } else {
                        // A completion always carries one of the two.
                        self.phase = Phase::Idle;
                    }
                }
            }
        }
    }
}
