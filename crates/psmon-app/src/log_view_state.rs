//! Scroll state for the event log view.

/// Scroll position and follow behaviour of the event log.
///
/// Line counts are only known at render time, so the widget reports them
/// through [`update_content_size`](Self::update_content_size) and applies any
/// follow or reveal request there.
#[derive(Debug, Clone)]
pub struct LogViewState {
    /// First visible line
    pub offset: usize,
    /// Follow new events to the bottom of the list
    pub auto_scroll: bool,
    /// Total rendered lines (rows plus expanded detail lines)
    pub total_lines: usize,
    /// Lines that fit in the viewport
    pub visible_lines: usize,
    /// Set when the event list was replaced while following
    follow_pending: bool,
    /// Bring the selected row into view at next render
    reveal_pending: bool,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogViewState {
    pub fn new() -> Self {
        Self::with_auto_scroll(true)
    }

    pub fn with_auto_scroll(auto_scroll: bool) -> Self {
        Self {
            offset: 0,
            auto_scroll,
            total_lines: 0,
            visible_lines: 0,
            follow_pending: false,
            reveal_pending: false,
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Called after a successful event-list replacement.
    pub fn on_content_replaced(&mut self) {
        if self.auto_scroll {
            self.follow_pending = true;
        }
    }

    pub fn follow_pending(&self) -> bool {
        self.follow_pending
    }

    /// Turn following on or off without moving the viewport.
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.auto_scroll = enabled;
        if !enabled {
            self.follow_pending = false;
        }
    }

    /// Ask the next render to bring the selected row into view.
    pub fn request_reveal(&mut self) {
        self.reveal_pending = true;
    }

    pub fn reveal_pending(&self) -> bool {
        self.reveal_pending
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.set_auto_scroll(false);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.set_auto_scroll(false);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Record the rendered size and apply pending follow/reveal requests.
    ///
    /// `selected_span` is the `[start, end)` line range of the selected row.
    pub fn update_content_size(
        &mut self,
        total: usize,
        visible: usize,
        selected_span: Option<(usize, usize)>,
    ) {
        self.total_lines = total;
        self.visible_lines = visible;

        if self.follow_pending {
            self.offset = self.max_offset();
            self.follow_pending = false;
        } else if self.reveal_pending {
            if let Some((start, end)) = selected_span {
                if start < self.offset {
                    self.offset = start;
                } else if end > self.offset + visible {
                    self.offset = end.saturating_sub(visible);
                }
            }
        }
        self.reveal_pending = false;
        self.offset = self.offset.min(self.max_offset());
    }
}
