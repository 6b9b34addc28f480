use foundation::FrameTime;

/// `amplitude · sin(frequency · t + phase) + baseline`, with `t` in
/// milliseconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pulse {
    pub amplitude: f64,
    pub frequency: f64,
    pub baseline: f64,
}

impl Pulse {
    pub const fn new(amplitude: f64, frequency: f64, baseline: f64) -> Self {
        Self {
            amplitude,
            frequency,
            baseline,
        }
    }

    pub fn at(&self, time: FrameTime, phase: f64) -> f64 {
        self.amplitude * (self.frequency * time.millis() + phase).sin() + self.baseline
    }

    pub fn min(&self) -> f64 {
        self.baseline - self.amplitude.abs()
    }

    pub fn max(&self) -> f64 {
        self.baseline + self.amplitude.abs()
    }
}

/// I-beam sections; phase is `0.01 · center.x`.
pub const I_BEAM: Pulse = Pulse::new(0.008, 0.001, 0.055);
/// Warren trusses; phase is `0.002 · origin.x`.
pub const WARREN_TRUSS: Pulse = Pulse::new(0.008, 0.0007, 0.04);
/// Box girders; phase is `0.01 · center.y`.
pub const BOX_GIRDER: Pulse = Pulse::new(0.008, 0.0009, 0.05);
/// Column sections; phase is `0.005 · center.x`.
pub const COLUMN: Pulse = Pulse::new(0.01, 0.0008, 0.045);
/// Dimension annotations, all in phase.
pub const ANNOTATION: Pulse = Pulse::new(0.01, 0.0006, 0.04);

const CABLE_WAVE: Pulse = Pulse::new(0.3, 0.0005, 0.7);
const CABLE_INDEX_PHASE: f64 = 0.15;
const MAIN_SPAN_PHASE: f64 = 2.0;

/// Which side of a tower a stay cable fans out to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Span {
    Back,
    Main,
}

/// Stroke alpha of stay cable `index` (1-based) at `time`.
///
/// Neighbouring cables are offset in phase so the fan shimmers instead of
/// pulsing as one. Stays within `[0.03, 0.045]`.
pub fn cable_alpha(time: FrameTime, index: usize, span: Span) -> f64 {
    let offset = match span {
        Span::Back => 0.0,
        Span::Main => MAIN_SPAN_PHASE,
    };
    let wave = CABLE_WAVE.at(time, index as f64 * CABLE_INDEX_PHASE + offset);
    0.02 + wave * 0.025
}
