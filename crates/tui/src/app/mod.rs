use crate::config::Config;
use crate::input::{InputMode, InputState};
use crate::keybinds::Keybinds;
use crate::picker::FilePicker;
use crate::ui::layout::LayoutState;
use anyhow::Result;
use chrono::Utc;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use datainsight_analysis::{AnalysisClient, SelectedFile};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::{App, Phase};
pub use types::{AnalysisResult, AppAsyncEvent};

impl App {
    pub(super) fn report_error(
        &mut self,
        user_message: impl Into<String>,
        detail: impl std::fmt::Display,
    ) {
        let user_message = user_message.into();
        let detail = detail.to_string();
        tracing::warn!("{user_message} ({detail})");
        self.last_error = Some(user_message);
        self.last_error_detail = Some(detail);
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
        self.last_error_detail = None;
        self.show_error_details = false;
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }
}
