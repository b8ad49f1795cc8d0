use super::*;

impl App {
    /// Every capture entry point (picker selection, typed path) funnels
    /// through here, so they share one admission policy.
    pub(super) fn admit_file(&mut self, path: PathBuf) {
        match SelectedFile::admit(path) {
            Ok(file) => {
                tracing::info!(name = %file.name, "file selected");
                self.selected_file = Some(file);
                self.clear_error();
            }
            Err(e) => {
                // A rejected candidate does not disturb an earlier selection.
                let message = e.user_message();
                self.report_error(message, e);
            }
        }
    }

    pub(super) fn submit_path_entry(&mut self) {
        let text = self.input.buffer.trim().to_string();
        self.input.clear();
        if text.is_empty() {
            return;
        }
        self.admit_file(PathBuf::from(text));
    }

    pub(super) fn clear_selected_file(&mut self) {
        self.selected_file = None;
        self.clear_error();
    }

    /// One request at a time: the Analyzing phase gates re-entry, so a
    /// second submission while one is in flight is impossible.
    pub(super) fn start_analysis(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        let Some(file) = self.selected_file.clone() else {
            // Submitting with nothing selected is a no-op.
            return;
        };

        self.phase = Phase::Analyzing;
        self.analyzing_since = Some(Instant::now());
        self.result = None;
        self.clear_error();

        let generation = self.analysis_generation;
        let endpoint = self.config.analysis.endpoint_url.clone();
        let client = self.client.clone();

        self.spawn_app_task(async move {
            match client.analyze(&endpoint, &file).await {
                Ok(report) => AppAsyncEvent::AnalysisFinished {
                    generation,
                    report: Some(report),
                    error: None,
                },
                Err(e) => AppAsyncEvent::AnalysisFinished {
                    generation,
                    report: None,
                    error: Some(e),
                },
            }
        });
    }

    /// "Analyze another": back to capture. An in-flight request keeps
    /// running but its completion will carry a stale generation.
    pub(super) fn reset(&mut self) {
        self.analysis_generation += 1;
        self.phase = Phase::Idle;
        self.result = None;
        self.selected_file = None;
        self.scroll_offset = 0;
        self.analyzing_since = None;
        self.clear_error();
    }

    pub(super) fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub(super) fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}
