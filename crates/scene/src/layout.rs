//! Fixed scene layout: viewport fractions and pixel sizes.
//!
//! Fractions are resolved against the current viewport every frame, so
//! nothing here caches dimensions.

/// A structural detail placed at a fraction of the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub fx: f64,
    pub fy: f64,
    pub kind: DetailKind,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DetailKind {
    IBeam { size: f64 },
    /// Anchored at its top-left corner rather than its center.
    WarrenTruss { width: f64, height: f64 },
    BoxGirder { width: f64, height: f64 },
    Column { size: f64 },
}

const fn at(fx: f64, fy: f64, kind: DetailKind) -> Placement {
    Placement { fx, fy, kind }
}

/// Structural details in draw order.
pub const DETAILS: [Placement; 9] = [
    at(0.12, 0.18, DetailKind::IBeam { size: 35.0 }),
    at(0.88, 0.12, DetailKind::IBeam { size: 28.0 }),
    at(0.75, 0.92, DetailKind::IBeam { size: 32.0 }),
    at(0.02, 0.38, DetailKind::WarrenTruss { width: 90.0, height: 28.0 }),
    at(0.78, 0.9, DetailKind::WarrenTruss { width: 130.0, height: 35.0 }),
    at(0.2, 0.9, DetailKind::BoxGirder { width: 55.0, height: 25.0 }),
    at(0.55, 0.06, DetailKind::BoxGirder { width: 45.0, height: 20.0 }),
    at(0.92, 0.35, DetailKind::Column { size: 28.0 }),
    at(0.05, 0.55, DetailKind::Column { size: 22.0 }),
];

pub mod bridge {
    pub const DECK_Y: f64 = 0.72;
    pub const TOWER_HEIGHT: f64 = 0.48;
    pub const TOWER_XS: [f64; 2] = [0.3, 0.7];
    pub const DECK_OVERHANG: f64 = 20.0;
    pub const DECK_LAYERS: [f64; 3] = [6.0, 10.0, 16.0];
    pub const RIB_PITCH: f64 = 20.0;
    pub const DECK_DEPTH: f64 = 16.0;
    pub const LEG_SPREAD: f64 = 30.0;
    pub const LEG_TOP_SPREAD: f64 = 4.0;
    pub const CAPITAL_HALF_WIDTH: f64 = 6.0;
    pub const PYLON_HEIGHT: f64 = 20.0;
    pub const CROSS_BEAMS: usize = 6;
    pub const BRACE_BAYS: usize = 5;
    /// Fraction of the leg spread lost between deck and top.
    pub const TAPER: f64 = 0.87;
    pub const CABLES_PER_FAN: usize = 16;
    pub const PIER_DEPTH: f64 = 55.0;
    pub const PIER_CAP_HALF_WIDTH: f64 = 15.0;
}

pub mod tower_a {
    pub const X: f64 = 0.9;
    pub const BASE: f64 = 0.88;
    pub const WIDTH: f64 = 50.0;
    pub const HEIGHT: f64 = 0.6;
    pub const FLOORS: usize = 24;
    pub const MECHANICAL_FLOORS: [usize; 3] = [6, 14, 22];
    pub const CORE_OFFSET: f64 = 8.0;
    pub const SPIRE: f64 = 40.0;
    pub const CROWN_HALF_WIDTH: f64 = 6.0;
    pub const CROWN_HEIGHT: f64 = 15.0;
}

pub mod tower_b {
    pub const X: f64 = 0.06;
    pub const BASE: f64 = 0.8;
    pub const WIDTH: f64 = 35.0;
    pub const HEIGHT: f64 = 0.4;
    /// Half-width at the top as a fraction of the full width.
    pub const TOP_HALF_WIDTH: f64 = 0.3;
    pub const BANDS: usize = 14;
    pub const BAND_TAPER: f64 = 0.4;
}

pub mod marks {
    pub const CORNER_SIZE: f64 = 25.0;
    pub const CORNER_MARGIN: f64 = 20.0;
    pub const CROSSHAIR_INNER: f64 = 10.0;
    pub const CROSSHAIR_OUTER: f64 = 40.0;
    pub const CROSSHAIR_RADIUS: f64 = 5.0;
}

#[cfg(test)]
mod tests {
    use super::{DETAILS, DetailKind};

    #[test]
    fn details_are_grouped_by_kind() {
        let kinds: Vec<&str> = DETAILS
            .iter()
            .map(|p| match p.kind {
                DetailKind::IBeam { .. } => "ibeam",
                DetailKind::WarrenTruss { .. } => "truss",
                DetailKind::BoxGirder { .. } => "girder",
                DetailKind::Column { .. } => "column",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "ibeam", "ibeam", "ibeam", "truss", "truss", "girder", "girder", "column",
                "column"
            ]
        );
    }

    #[test]
    fn all_placements_are_on_screen() {
        for p in DETAILS {
            assert!((0.0..=1.0).contains(&p.fx));
            assert!((0.0..=1.0).contains(&p.fy));
        }
    }
}
