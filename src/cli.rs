//! Headless command-line front end.
//!
//! Usage examples:
//!   deform_map_painter --stroke 0.5,0.5 --stroke 0.25,0.75,secondary
//!   deform_map_painter --load "maps/DeformMap.png" --mode scale-y --stroke 0.1,0.9
//!   deform_map_painter --width 1024 --height 512 --output-dir out/ --probe 0.5,0.5

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{info, warn};

use crate::deform_map::brush::{BrushEngineConfig, ScanStrategy};
use crate::deform_map::codec::{CodecConfig, PngCompression};
use crate::deform_map::persistence::{DEFAULT_BASE_NAME, SaveConfig, default_save_directory};
use crate::deform_map::pixel::NormalizedColor;
use crate::deform_map::session::{
    PaintMode, PaintSettings, PainterConfig, PainterSession, PointerButton, PointerEvent,
};


/// Paint a deformation map from pointer strokes and save it as PNG.
#[derive(Parser, Debug)]
#[command(name = "deform_map_painter", about = "Headless deformation map painter")]
pub struct CliArgs {
    /// Image to start from instead of a fresh texture.
    #[arg(short, long, value_name = "FILE")]
    pub load: Option<String>,

    /// Width of a fresh texture.
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Height of a fresh texture.
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Fill color of a fresh texture, normalized "r,g,b,a".
    #[arg(long, value_name = "R,G,B,A", value_parser = parse_color, default_value = "0.5,0.5,0,1")]
    pub fill: NormalizedColor,

    /// Axis the strokes paint into.
    #[arg(short, long, value_enum, default_value_t = PaintMode::ScaleX)]
    pub mode: PaintMode,

    /// Stroke strength; secondary strokes subtract it.
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub power: f32,

    /// Gaussian standard deviation in pixels.
    #[arg(long, default_value_t = 10.0)]
    pub sigma: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub clamp_min: f32,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub clamp_max: f32,

    /// Pointer stroke "u,v[,primary|secondary]" in normalized viewport coordinates.
    /// Repeat for several strokes; they are applied in order.
    #[arg(short, long = "stroke", value_name = "U,V[,BUTTON]", value_parser = parse_pointer_event)]
    pub strokes: Vec<PointerEvent>,

    /// Print the pixel readout at "u,v" after painting.
    #[arg(long, value_name = "U,V", value_parser = parse_uv)]
    pub probe: Option<(f32, f32)>,

    /// Directory to save into. Defaults to the application data directory.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File stem of the saved map.
    #[arg(long, default_value = DEFAULT_BASE_NAME)]
    pub base_name: String,

    /// Scan the whole texture for every stroke.
    #[arg(long)]
    pub full_scan: bool,

    /// Paint rows on the calling thread only.
    #[arg(long)]
    pub sequential: bool,

    /// Smallest PNG output at the cost of encode time.
    #[arg(long)]
    pub best_compression: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn painter_config(&self) -> PainterConfig {
        let engine = BrushEngineConfig::builder()
            .scan(if self.full_scan {
                ScanStrategy::Full
            } else {
                ScanStrategy::Bounded
            })
            .parallel(!self.sequential)
            .build();

        let codec = CodecConfig::builder()
            .compression(if self.best_compression {
                PngCompression::Best
            } else {
                PngCompression::Default
            })
            .build();

        let save = SaveConfig::builder()
            .directory(
                self.output_dir
                    .clone()
                    .unwrap_or_else(default_save_directory),
            )
            .base_name(self.base_name.clone())
            .build();

        let paint = PaintSettings {
            mode: self.mode,
            power: self.power,
            sigma: self.sigma,
            clamp_min: self.clamp_min,
            clamp_max: self.clamp_max,
            ..PaintSettings::default()
        };

        PainterConfig::builder()
            .initial_size(self.width, self.height)
            .initial_color(self.fill)
            .paint(paint)
            .engine(engine)
            .codec(codec)
            .save(save)
            .build()
    }
}

/// Runs one headless session and returns the path of the saved map.
pub fn run(args: &CliArgs) -> anyhow::Result<PathBuf> {
    let mut session = PainterSession::new(args.painter_config())
        .context("failed to create the initial texture")?;

    if let Some(path) = &args.load {
        session
            .load_texture(path)
            .with_context(|| session.status().to_string())?;
    }
    info!("Painting on {}x{} texture", session.width(), session.height());

    let mut applied = 0;
    for event in &args.strokes {
        if session.handle_pointer(event)? {
            applied += 1;
        } else {
            warn!("Skipping stroke outside the viewport: ({}, {})", event.u, event.v);
        }
    }
    info!("Applied {} of {} strokes", applied, args.strokes.len());

    if let Some((u, v)) = args.probe {
        match session.probe(u, v) {
            Some(probe) => println!("{}", probe),
            None => warn!("Probe ({}, {}) is outside the texture", u, v),
        }
    }

    let path = session.save_texture().context("failed to save the deformation map")?;
    Ok(path)
}

fn parse_floats<const N: usize>(value: &str) -> anyhow::Result<[f32; N]> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("expected {} comma-separated numbers, got {:?}", N, value);
    }

    let mut out = [0.0f32; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("{:?} is not a number", part))?;
    }
    Ok(out)
}

pub fn parse_color(value: &str) -> anyhow::Result<NormalizedColor> {
    Ok(NormalizedColor::from_array(parse_floats::<4>(value)?))
}

pub fn parse_uv(value: &str) -> anyhow::Result<(f32, f32)> {
    let [u, v] = parse_floats::<2>(value)?;
    Ok((u, v))
}

pub fn parse_pointer_event(value: &str) -> anyhow::Result<PointerEvent> {
    let (coords, button) = match value.rsplit_once(',') {
        Some((coords, tail)) if tail.trim().parse::<f32>().is_err() => (coords, Some(tail.trim())),
        _ => (value, None),
    };

    let button = match button {
        None | Some("primary") | Some("left") => PointerButton::Primary,
        Some("secondary") | Some("right") => PointerButton::Secondary,
        Some(other) => bail!("unknown pointer button {:?}", other),
    };

    let (u, v) = parse_uv(coords)?;
    Ok(PointerEvent::new(u, v, button))
}
