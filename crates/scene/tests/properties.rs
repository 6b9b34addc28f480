use foundation::{FrameTime, Theme, Viewport};
use proptest::prelude::*;
use runtime::Frame;
use scene::layout::DETAILS;
use scene::motifs::Motif;
use scene::motifs::sections::Section;
use scene::{ANNOTATION, BOX_GIRDER, BlueprintScene, COLUMN, I_BEAM, Span, WARREN_TRUSS, cable_alpha};

const EPS: f64 = 1e-12;

proptest! {
    #[test]
    fn pulses_stay_within_designed_range(t in 0.0f64..1.0e8, phase in -1.0e4f64..1.0e4) {
        for pulse in [I_BEAM, WARREN_TRUSS, BOX_GIRDER, COLUMN, ANNOTATION] {
            let v = pulse.at(FrameTime(t), phase);
            prop_assert!(v >= pulse.min() - EPS && v <= pulse.max() + EPS);
            prop_assert!(v > 0.0);
        }
    }

    #[test]
    fn pulses_are_pure(t in 0.0f64..1.0e8, phase in -1.0e4f64..1.0e4) {
        let a = I_BEAM.at(FrameTime(t), phase);
        let b = I_BEAM.at(FrameTime(t), phase);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn cable_shimmer_is_bounded(t in 0.0f64..1.0e8, index in 1usize..=16, main in any::<bool>()) {
        let span = if main { Span::Main } else { Span::Back };
        let a = cable_alpha(FrameTime(t), index, span);
        prop_assert!((0.03 - EPS..=0.045 + EPS).contains(&a));
        prop_assert_eq!(a.to_bits(), cable_alpha(FrameTime(t), index, span).to_bits());
    }

    #[test]
    fn detail_anchors_scale_linearly(w in 100.0f64..4000.0, h in 100.0f64..4000.0, k in 1.0f64..4.0) {
        let base = Viewport::css(w, h);
        let scaled = Viewport::css(w * k, h * k);
        for placement in &DETAILS {
            let a = Section::place(placement, &base).anchor();
            let b = Section::place(placement, &scaled).anchor();
            prop_assert!((b.x - a.x * k).abs() < 1e-6);
            prop_assert!((b.y - a.y * k).abs() < 1e-6);
        }
    }

    #[test]
    fn detail_pulse_depends_only_on_time_and_anchor(w in 100.0f64..4000.0, h in 100.0f64..4000.0, t in 0.0f64..1.0e7) {
        let vp = Viewport::css(w, h);
        for placement in &DETAILS {
            let s = Section::place(placement, &vp);
            prop_assert_eq!(s.pulse(FrameTime(t)).to_bits(), s.pulse(FrameTime(t)).to_bits());
        }
    }

    #[test]
    fn every_stroke_is_finite_and_visible(
        w in 0.0f64..2560.0,
        h in 0.0f64..1440.0,
        t in 0.0f64..1.0e7,
        dark in any::<bool>(),
    ) {
        let frame = Frame::new(0, FrameTime(t), Viewport::css(w, h), Theme::from_dark_flag(dark));
        let recorded = BlueprintScene::new().record(&frame);
        for s in recorded.strokes() {
            prop_assert!(s.style.color.a > 0.0 && s.style.color.a < 0.2);
            for p in s.points() {
                prop_assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }
}
