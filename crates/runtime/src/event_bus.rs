use foundation::{Theme, Viewport};

/// A change reported by the host between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HostSignal {
    Resized(Viewport),
    ThemeChanged(Theme),
}

/// Queue of host signals, filled by listener callbacks and drained at the
/// start of the next frame. Nothing here ever preempts a frame in progress.
#[derive(Debug, Default)]
pub struct SignalBus {
    signals: Vec<HostSignal>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
        }
    }

    pub fn emit(&mut self, signal: HostSignal) {
        self.signals.push(signal);
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn drain(&mut self) -> Vec<HostSignal> {
        std::mem::take(&mut self.signals)
    }
}

/// Host-observed state the renderer draws against.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HostState {
    pub viewport: Viewport,
    pub theme: Theme,
}

/// What changed when signals were folded into a [`HostState`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AppliedSignals {
    pub resized: bool,
    pub theme_changed: bool,
}

impl HostState {
    pub fn new(viewport: Viewport, theme: Theme) -> Self {
        Self { viewport, theme }
    }

    /// Fold signals in arrival order; the last one of each kind wins.
    ///
    /// A resize is reported even when the size is unchanged, since the
    /// surface still has to be re-measured.
    pub fn apply(&mut self, signals: impl IntoIterator<Item = HostSignal>) -> AppliedSignals {
        let mut applied = AppliedSignals::default();
        for signal in signals {
            match signal {
                HostSignal::Resized(viewport) => {
                    self.viewport = viewport;
                    applied.resized = true;
                }
                HostSignal::ThemeChanged(theme) => {
                    if self.theme != theme {
                        applied.theme_changed = true;
                    }
                    self.theme = theme;
                }
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::{HostSignal, HostState, SignalBus};
    use foundation::{Theme, Viewport};

    #[test]
    fn drain_clears_signals() {
        let mut bus = SignalBus::new();
        bus.emit(HostSignal::ThemeChanged(Theme::Dark));
        assert!(!bus.is_empty());
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn last_resize_wins() {
        let mut state = HostState::new(Viewport::css(1920.0, 1080.0), Theme::Light);
        let applied = state.apply([
            HostSignal::Resized(Viewport::css(1024.0, 768.0)),
            HostSignal::Resized(Viewport::css(800.0, 600.0)),
        ]);
        assert!(applied.resized);
        assert!(!applied.theme_changed);
        assert_eq!(state.viewport, Viewport::css(800.0, 600.0));
    }

    #[test]
    fn theme_flip_is_reported_even_when_net_unchanged() {
        let mut state = HostState::new(Viewport::default(), Theme::Light);
        let applied = state.apply([
            HostSignal::ThemeChanged(Theme::Dark),
            HostSignal::ThemeChanged(Theme::Light),
        ]);
        assert_eq!(state.theme, Theme::Light);
        assert!(applied.theme_changed);
    }
}
