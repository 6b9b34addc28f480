//! Offline rendering of the blueprint background.

use canvas::{FrameStats, RenderFrame};
use foundation::{FrameTime, Theme, Viewport};
use runtime::Frame;
use scene::BlueprintScene;
use serde::Serialize;

/// Frame parameters shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
    pub time_ms: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            dpr: 1.0,
            time_ms: 0.0,
            theme: Theme::Light,
        }
    }
}

impl RenderOptions {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.dpr)
    }

    pub fn frame(&self) -> Frame {
        Frame::new(0, FrameTime(self.time_ms), self.viewport(), self.theme)
    }
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(i)
        .ok_or_else(|| format!("{flag} requires a value"))?;
    raw.parse::<T>()
        .map_err(|_| format!("{flag} must be a number, got {raw:?}"))
}

/// Parse `[--width W] [--height H] [--dpr D] [--time MS] [--dark]`.
///
/// Anything that is not a flag is returned as a positional argument.
pub fn parse_render_args(args: &[String]) -> Result<(RenderOptions, Vec<String>), String> {
    let mut opts = RenderOptions::default();
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                opts.width = flag_value(args, i, "--width")?;
            }
            "--height" => {
                i += 1;
                opts.height = flag_value(args, i, "--height")?;
            }
            "--dpr" => {
                i += 1;
                opts.dpr = flag_value(args, i, "--dpr")?;
            }
            "--time" => {
                i += 1;
                opts.time_ms = flag_value(args, i, "--time")?;
            }
            "--dark" => opts.theme = Theme::Dark,
            s if s.starts_with("--") => return Err(format!("unknown arg: {s}")),
            s => positional.push(s.to_string()),
        }
        i += 1;
    }

    if !(opts.width > 0.0 && opts.height > 0.0) {
        return Err("width and height must be positive".to_string());
    }
    Ok((opts, positional))
}

pub fn render(opts: &RenderOptions) -> RenderFrame {
    BlueprintScene::new().record(&opts.frame())
}

pub fn render_svg(opts: &RenderOptions) -> String {
    canvas::svg::to_svg(&render(opts), &opts.viewport())
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub width: f64,
    pub height: f64,
    pub time_ms: f64,
    pub theme: &'static str,
    #[serde(flatten)]
    pub stats: FrameStats,
}

pub fn stats(opts: &RenderOptions) -> StatsReport {
    StatsReport {
        width: opts.width,
        height: opts.height,
        time_ms: opts.time_ms,
        theme: opts.theme.as_str(),
        stats: render(opts).stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderOptions, parse_render_args, render_svg, stats};
    use foundation::Theme;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn flags_and_positionals() {
        let (opts, rest) =
            parse_render_args(&args("out.svg --width 800 --height 600 --dark --time 1500")).unwrap();
        assert_eq!(rest, vec!["out.svg".to_string()]);
        assert_eq!(opts.width, 800.0);
        assert_eq!(opts.height, 600.0);
        assert_eq!(opts.time_ms, 1500.0);
        assert_eq!(opts.theme, Theme::Dark);
        assert_eq!(opts.dpr, 1.0);
    }

    #[test]
    fn missing_or_bad_values_are_errors() {
        assert_eq!(
            parse_render_args(&args("--width")).unwrap_err(),
            "--width requires a value"
        );
        assert!(parse_render_args(&args("--dpr two")).is_err());
        assert!(parse_render_args(&args("--height 0")).is_err());
        assert!(parse_render_args(&args("--verbose")).is_err());
    }

    #[test]
    fn stats_cover_every_layer() {
        let report = stats(&RenderOptions::default());
        assert_eq!(report.stats.clears, 1);
        assert_eq!(report.stats.strokes_per_layer.len(), 8);
        assert_eq!(report.stats.strokes_per_layer["center"], 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["strokes_per_layer"]["corners"], 4);
    }

    #[test]
    fn svg_has_one_group_per_layer() {
        let svg = render_svg(&RenderOptions {
            width: 640.0,
            height: 480.0,
            ..Default::default()
        });
        assert!(svg.starts_with("<svg"));
        for id in ["grid", "bridge", "annotations"] {
            assert!(svg.contains(&format!("<g id=\"{id}\"")), "missing {id}");
        }
    }
}
