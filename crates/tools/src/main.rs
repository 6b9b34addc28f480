use std::env;
use std::fs;
use std::path::PathBuf;

use tools::{parse_render_args, render_svg, stats};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "svg" => cmd_svg(args),
        "stats" => cmd_stats(args),
        _ => Err(usage()),
    }
}

fn cmd_svg(args: Vec<String>) -> Result<(), String> {
    // blueprint svg <out.svg> [--width W] [--height H] [--dpr D] [--time MS] [--dark]
    let (opts, positional) = parse_render_args(&args).map_err(|e| format!("{e}\n\n{}", usage()))?;
    let [out] = positional.as_slice() else {
        return Err(usage());
    };
    let out = PathBuf::from(out);

    let svg = render_svg(&opts);
    fs::write(&out, &svg).map_err(|e| format!("write {out:?}: {e}"))?;
    log::info!(
        "wrote {out:?} ({}x{}, t={}ms, {})",
        opts.width,
        opts.height,
        opts.time_ms,
        opts.theme.as_str()
    );
    Ok(())
}

fn cmd_stats(args: Vec<String>) -> Result<(), String> {
    let (opts, positional) = parse_render_args(&args).map_err(|e| format!("{e}\n\n{}", usage()))?;
    if let Some(extra) = positional.first() {
        return Err(format!("unexpected arg: {extra}\n\n{}", usage()));
    }

    let report = stats(&opts);
    let json = serde_json::to_string_pretty(&report).map_err(|e| format!("encode stats: {e}"))?;
    println!("{json}");
    Ok(())
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "blueprint".to_string());
    format!(
        "Usage:\n  {exe} svg <out.svg> [--width W] [--height H] [--dpr D] [--time MS] [--dark]\n  {exe} stats [--width W] [--height H] [--time MS] [--dark]\n\nNotes:\n- Sizes are CSS pixels; defaults are 1920x1080 at t=0, light theme.\n- `stats` prints stroke and segment counts per layer as JSON.\n"
    )
}
