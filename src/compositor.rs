//! Compositor: widget ownership, layout fan-out, the render/event loop.
//!
//! [`Compositor`] owns the top-level widgets and the root rect. Each loop
//! iteration clears the surface, renders every widget in order, flushes, then
//! waits for exactly one event: a terminal [`InputEvent`] or a [`DataEvent`]
//! from a producer. The event is applied and the loop starts over with a full
//! redraw, so bursts of input coalesce into fewer frames.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::event::{Action, DataEvent, InputEvent, KeyBindingRegistry};
use crate::geometry::Rect;
use crate::render::{CellStyle, Surface};
use crate::widget::{AnyWidget, Widget};
use crate::widgets::ListWidget;

// ---------------------------------------------------------------------------
// CompositorConfig
// ---------------------------------------------------------------------------

/// Configuration for the compositor and the process around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositorConfig {
    /// Ask the terminal to report mouse events.
    pub mouse: bool,
    /// Capacity of the producer → loop data channel.
    pub data_capacity: usize,
    /// Period of the demo line generator.
    pub feed_interval: Duration,
    /// Directory the log file is written to.
    pub log_dir: PathBuf,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            data_capacity: 1024,
            feed_interval: Duration::from_millis(1500),
            log_dir: std::env::temp_dir().join("termpane"),
        }
    }
}

impl CompositorConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `TERMPANE_MOUSE`, `TERMPANE_FEED_MS` and
    /// `TERMPANE_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an explicit variable source.
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup("TERMPANE_MOUSE") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => config.mouse = true,
                "0" | "false" | "off" | "no" => config.mouse = false,
                other => warn!(target: "termpane::config", value = other, "ignoring TERMPANE_MOUSE"),
            }
        }
        if let Some(raw) = lookup("TERMPANE_FEED_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.feed_interval = Duration::from_millis(ms),
                _ => warn!(target: "termpane::config", value = raw.as_str(), "ignoring TERMPANE_FEED_MS"),
            }
        }
        if let Some(dir) = lookup("TERMPANE_LOG_DIR").filter(|d| !d.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        config
    }

    /// Enable or disable mouse reporting (builder).
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set the data channel capacity (builder).
    pub fn with_data_capacity(mut self, capacity: usize) -> Self {
        self.data_capacity = capacity;
        self
    }

    /// Set the demo generator period (builder).
    pub fn with_feed_interval(mut self, interval: Duration) -> Self {
        self.feed_interval = interval;
        self
    }

    /// Set the log directory (builder).
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// Maps the root rect to one target rect per top-level widget, in order.
pub type Layout = Box<dyn Fn(Rect) -> Vec<Rect>>;

/// Owns the widget tree and drives the render/event loop.
pub struct Compositor {
    rect: Rect,
    widgets: Vec<AnyWidget>,
    focused: usize,
    layout: Option<Layout>,
    bindings: KeyBindingRegistry,
    config: CompositorConfig,
    running: bool,
}

impl Compositor {
    /// Create an empty compositor with the default key bindings.
    pub fn new(config: CompositorConfig) -> Self {
        Self {
            rect: Rect::default(),
            widgets: Vec::new(),
            focused: 0,
            layout: None,
            bindings: KeyBindingRegistry::with_defaults(),
            config,
            running: true,
        }
    }

    /// Install the function that places top-level widgets on resize.
    ///
    /// Without one, every top-level widget receives the whole root rect.
    pub fn with_layout(mut self, layout: impl Fn(Rect) -> Vec<Rect> + 'static) -> Self {
        self.layout = Some(Box::new(layout));
        self
    }

    /// Replace the key bindings.
    pub fn with_bindings(mut self, bindings: KeyBindingRegistry) -> Self {
        self.bindings = bindings;
        self
    }

    /// Add a top-level widget, drawn after (on top of) the existing ones.
    /// Returns its index.
    pub fn push(&mut self, widget: impl Into<AnyWidget>) -> usize {
        self.widgets.push(widget.into());
        self.widgets.len() - 1
    }

    /// Route navigation keys to the top-level widget at `index`.
    pub fn set_focus(&mut self, index: usize) {
        self.focused = index;
    }

    /// Index of the widget receiving navigation keys.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The root rect.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// All top-level widgets in render order.
    pub fn widgets(&self) -> &[AnyWidget] {
        &self.widgets
    }

    /// The top-level widget at `index`.
    pub fn widget(&self, index: usize) -> Option<&AnyWidget> {
        self.widgets.get(index)
    }

    /// The top-level widget at `index`, mutably.
    pub fn widget_mut(&mut self, index: usize) -> Option<&mut AnyWidget> {
        self.widgets.get_mut(index)
    }

    /// The configuration the compositor was built with.
    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Whether the loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop to stop after the current event.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Store the root rect and resize every top-level widget.
    pub fn resize(&mut self, root: Rect) {
        self.rect = root;
        let targets = match &self.layout {
            Some(layout) => layout(root),
            None => vec![root; self.widgets.len()],
        };
        if targets.len() != self.widgets.len() {
            warn!(
                target: "termpane::compositor",
                widgets = self.widgets.len(),
                rects = targets.len(),
                "layout size mismatch; unmatched widgets keep their rect"
            );
        }
        for (widget, rect) in self.widgets.iter_mut().zip(targets) {
            widget.resize(rect);
        }
        debug!(target: "termpane::compositor", ?root, "resized");
    }

    /// Render every top-level widget in order. Later widgets overdraw earlier ones.
    pub fn render(&self, surface: &mut dyn Surface) {
        for widget in &self.widgets {
            widget.render(surface);
        }
    }

    /// Clear the surface, render the whole tree and flush one frame.
    pub fn draw(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.fill(' ', CellStyle::DEFAULT);
        self.render(surface);
        surface.show()
    }

    /// Apply a terminal event to the widget tree.
    ///
    /// Resize events only update the tree; resizing the surface itself is the
    /// loop's job.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => match self.bindings.resolve(&key) {
                Some(action) => self.apply(action),
                None => debug!(target: "termpane::compositor", ?key, "unbound key"),
            },
            InputEvent::Resize(size) => self.resize(Rect::from_size(size)),
            // Mouse reporting is on, but nothing consumes mouse, focus or paste events yet.
            other => debug!(target: "termpane::compositor", event = ?other, "ignored event"),
        }
    }

    /// Perform a bound action.
    pub fn apply(&mut self, action: Action) {
        let step: fn(&mut ListWidget) = match action {
            Action::Quit => {
                info!(target: "termpane::compositor", "quit requested");
                self.running = false;
                return;
            }
            Action::Down => ListWidget::down,
            Action::Up => ListWidget::up,
            Action::First => ListWidget::first,
            Action::Last => ListWidget::last,
        };
        let focused = self.focused;
        let Some(list) = self
            .widgets
            .get_mut(focused)
            .and_then(AnyWidget::find_list_mut)
        else {
            debug!(target: "termpane::compositor", focused, ?action, "no list under focus");
            return;
        };
        step(list);
        debug!(
            target: "termpane::compositor",
            ?action,
            selected = list.selected(),
            offset = list.offset(),
            "navigated"
        );
    }

    /// Append a producer's line to its target list and scroll to it.
    pub fn handle_data(&mut self, event: DataEvent) {
        let DataEvent { target, line } = event;
        match self
            .widgets
            .get_mut(target)
            .and_then(AnyWidget::find_list_mut)
        {
            Some(list) => {
                list.push_line(line);
                list.last();
            }
            None => warn!(
                target: "termpane::compositor",
                widget = target,
                "data for widget without a list dropped"
            ),
        }
    }

    /// Run the render/event loop until quit, the input stream ends, or an I/O error.
    ///
    /// Each iteration draws one frame and then consumes exactly one event. When
    /// both kinds are ready, terminal input is taken first, so a busy producer
    /// never delays a quit key. Once every data sender is dropped the loop keeps
    /// serving terminal input.
    pub async fn run<E>(
        &mut self,
        surface: &mut dyn Surface,
        mut events: E,
        mut data: mpsc::Receiver<DataEvent>,
    ) -> Result<()>
    where
        E: Stream<Item = io::Result<InputEvent>> + Unpin,
    {
        self.running = true;
        self.resize(Rect::from_size(surface.size()));
        info!(target: "termpane::compositor", widgets = self.widgets.len(), root = ?self.rect, "render loop started");

        let mut data_open = true;
        while self.running {
            self.draw(surface)?;

            tokio::select! {
                biased;

                next = events.next() => match next {
                    Some(Ok(event)) => {
                        if let InputEvent::Resize(size) = event {
                            surface.resize(size);
                            surface.sync()?;
                        }
                        self.handle_input(event);
                    }
                    Some(Err(err)) => {
                        warn!(target: "termpane::compositor", %err, "input stream failed");
                        return Err(err.into());
                    }
                    None => {
                        info!(target: "termpane::compositor", "input stream closed");
                        self.running = false;
                    }
                },
                received = data.recv(), if data_open => match received {
                    Some(event) => self.handle_data(event),
                    None => {
                        debug!(target: "termpane::compositor", "all producers gone");
                        data_open = false;
                    }
                },
            }
        }

        info!(target: "termpane::compositor", "render loop stopped");
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, KeyEvent, Modifiers};
    use crate::geometry::Size;
    use crate::render::Grid;
    use crate::widgets::{BorderedWidget, ListWidget, TextWidget};

    fn list_compositor(lines: usize) -> Compositor {
        let mut c = Compositor::new(CompositorConfig::default());
        c.push(BorderedWidget::new(ListWidget::new(
            (0..lines).map(|i| format!("{i}")),
        )));
        c.resize(Rect::new(0, 0, 9, 4));
        c
    }

    fn focused_list(c: &Compositor) -> &ListWidget {
        c.widget(c.focused()).and_then(AnyWidget::find_list).unwrap()
    }

    // ── Config ───────────────────────────────────────────────────────

    #[test]
    fn config_defaults() {
        let config = CompositorConfig::new();
        assert!(config.mouse);
        assert_eq!(config.data_capacity, 1024);
        assert_eq!(config.feed_interval, Duration::from_millis(1500));
        assert!(config.log_dir.ends_with("termpane"));
    }

    #[test]
    fn config_builder() {
        let config = CompositorConfig::new()
            .with_mouse(false)
            .with_data_capacity(8)
            .with_feed_interval(Duration::from_millis(20))
            .with_log_dir("/tmp/x");
        assert!(!config.mouse);
        assert_eq!(config.data_capacity, 8);
        assert_eq!(config.feed_interval, Duration::from_millis(20));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn config_from_lookup() {
        let config = CompositorConfig::from_lookup(|key| match key {
            "TERMPANE_MOUSE" => Some("off".into()),
            "TERMPANE_FEED_MS" => Some("250".into()),
            "TERMPANE_LOG_DIR" => Some("/var/tmp/tp".into()),
            _ => None,
        });
        assert!(!config.mouse);
        assert_eq!(config.feed_interval, Duration::from_millis(250));
        assert_eq!(config.log_dir, PathBuf::from("/var/tmp/tp"));
    }

    #[test]
    fn config_from_lookup_ignores_garbage() {
        let config = CompositorConfig::from_lookup(|key| match key {
            "TERMPANE_MOUSE" => Some("maybe".into()),
            "TERMPANE_FEED_MS" => Some("0".into()),
            "TERMPANE_LOG_DIR" => Some("  ".into()),
            _ => None,
        });
        assert_eq!(config, CompositorConfig::default());
    }

    // ── Resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_without_layout_gives_root_to_all() {
        let mut c = Compositor::new(CompositorConfig::default());
        c.push(TextWidget::new("a"));
        c.push(TextWidget::new("b"));
        c.resize(Rect::new(0, 0, 19, 9));
        assert_eq!(c.rect(), Rect::new(0, 0, 19, 9));
        for w in c.widgets() {
            assert_eq!(w.rect(), Rect::new(0, 0, 19, 9));
        }
    }

    #[test]
    fn resize_uses_layout() {
        let mut c = Compositor::new(CompositorConfig::default()).with_layout(|root| {
            vec![
                Rect::new(root.x0, root.y0, root.x1, 0),
                Rect::new(root.x0, 1, root.x1, root.y1),
            ]
        });
        c.push(TextWidget::new("top"));
        c.push(BorderedWidget::new(TextWidget::new("body")));
        c.resize(Rect::new(0, 0, 9, 5));
        assert_eq!(c.widget(0).unwrap().rect(), Rect::new(0, 0, 9, 0));
        let AnyWidget::Bordered(b) = c.widget(1).unwrap() else {
            panic!("expected border");
        };
        assert_eq!(b.inner().rect(), Rect::new(1, 2, 8, 4));
    }

    #[test]
    fn short_layout_leaves_extra_widgets_alone() {
        let mut c = Compositor::new(CompositorConfig::default())
            .with_layout(|root| vec![root]);
        c.push(TextWidget::new("a"));
        c.push(TextWidget::new("b"));
        c.resize(Rect::new(0, 0, 4, 4));
        assert_eq!(c.widget(0).unwrap().rect(), Rect::new(0, 0, 4, 4));
        assert_eq!(c.widget(1).unwrap().rect(), Rect::default());
    }

    #[test]
    fn resize_event_recomputes_root() {
        let mut c = list_compositor(3);
        c.handle_input(InputEvent::Resize(Size::new(30, 12)));
        assert_eq!(c.rect(), Rect::new(0, 0, 29, 11));
        assert_eq!(c.widget(0).unwrap().rect(), Rect::new(0, 0, 29, 11));
    }

    // ── Keys ─────────────────────────────────────────────────────────

    #[test]
    fn navigation_keys_reach_focused_list() {
        let mut c = list_compositor(10);
        c.handle_input(InputEvent::Key(KeyEvent::char('j')));
        c.handle_input(InputEvent::Key(KeyEvent::char('j')));
        assert_eq!(focused_list(&c).selected(), 2);
        c.handle_input(InputEvent::Key(KeyEvent::char('k')));
        assert_eq!(focused_list(&c).selected(), 1);
        c.handle_input(InputEvent::Key(KeyEvent::new(Key::Char('G'), Modifiers::SHIFT)));
        // Inner viewport is 3 rows tall.
        assert_eq!(focused_list(&c).selected(), 9);
        assert_eq!(focused_list(&c).offset(), 7);
        c.handle_input(InputEvent::Key(KeyEvent::char('g')));
        assert_eq!(focused_list(&c).selected(), 0);
        assert!(c.is_running());
    }

    #[test]
    fn quit_keys_stop_loop() {
        let mut c = list_compositor(1);
        c.handle_input(InputEvent::Key(KeyEvent::char('q')));
        assert!(!c.is_running());

        let mut c = list_compositor(1);
        c.handle_input(InputEvent::Key(KeyEvent::new(Key::Char('c'), Modifiers::CTRL)));
        assert!(!c.is_running());
    }

    #[test]
    fn quit_action_needs_no_list() {
        let mut c = Compositor::new(CompositorConfig::default());
        c.apply(Action::Down);
        assert!(c.is_running());
        c.apply(Action::Quit);
        assert!(!c.is_running());
    }

    #[test]
    fn navigation_without_list_is_ignored() {
        let mut c = Compositor::new(CompositorConfig::default());
        c.push(TextWidget::new("x"));
        c.apply(Action::Down);
        c.set_focus(5);
        c.apply(Action::Last);
        assert!(c.is_running());
    }

    #[test]
    fn mouse_and_paste_are_ignored() {
        let mut c = list_compositor(3);
        c.handle_input(InputEvent::Paste("jjj".into()));
        c.handle_input(InputEvent::FocusLost);
        assert_eq!(focused_list(&c).selected(), 0);
    }

    // ── Data ─────────────────────────────────────────────────────────

    #[test]
    fn data_appends_and_follows() {
        let mut c = list_compositor(5);
        c.handle_data(DataEvent::append(0, "fresh"));
        let list = focused_list(&c);
        assert_eq!(list.lines().last().unwrap(), "fresh");
        assert_eq!(list.selected(), 5);
        assert_eq!(list.offset(), 3);
    }

    #[test]
    fn data_for_missing_target_is_dropped() {
        let mut c = list_compositor(1);
        c.handle_data(DataEvent::append(9, "lost"));
        assert_eq!(focused_list(&c).lines().len(), 1);
    }

    // ── Render ───────────────────────────────────────────────────────

    #[test]
    fn later_widgets_overdraw_earlier() {
        let mut c = Compositor::new(CompositorConfig::default());
        c.push(TextWidget::new("aaaa"));
        c.push(TextWidget::new("bb"));
        c.resize(Rect::new(0, 0, 3, 0));
        let mut grid = Grid::new(4, 1);
        c.render(&mut grid);
        // The second widget pads its rect with blanks.
        assert_eq!(crate::testing::snapshot::grid_to_string(&grid), "bb");
    }

    #[test]
    fn draw_clears_then_shows() {
        let c = list_compositor(2);
        let mut grid = Grid::new(10, 5);
        grid.set_content(9, 4, '#', CellStyle::DEFAULT);
        c.draw(&mut grid).unwrap();
        assert_eq!(grid.frames_shown(), 1);
        assert_eq!(grid.get_cell(9, 4).unwrap().ch, '┘');
        assert_eq!(grid.get_cell(1, 1).unwrap().ch, '0');
    }
}
