use super::*;

/// The three mutually exclusive UI phases. `last_error` lives outside the
/// enum: an error can only be shown in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing,
    Done,
}

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub phase: Phase,
    pub selected_file: Option<SelectedFile>,
    pub result: Option<AnalysisResult>,
    pub last_error: Option<String>,
    pub last_error_detail: Option<String>,
    pub show_error_details: bool,
    pub show_help: bool,
    pub picker: FilePicker,
    pub input: InputState,
    pub keybinds: Keybinds,
    pub layout: LayoutState,
    pub scroll_offset: usize,
    pub analyzing_since: Option<Instant>,
    pub client: AnalysisClient,
    /// Bumped on reset; completions carrying an older value are discarded.
    pub analysis_generation: u64,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let picker = FilePicker::new(config.start_dir());

        Self {
            should_quit: false,
            config,
            phase: Phase::Idle,
            selected_file: None,
            result: None,
            last_error: None,
            last_error_detail: None,
            show_error_details: false,
            show_help: false,
            picker,
            input: InputState::new(),
            keybinds: Keybinds,
            layout: LayoutState::default(),
            scroll_offset: 0,
            analyzing_since: None,
            client: AnalysisClient::new(),
            analysis_generation: 0,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }
}
