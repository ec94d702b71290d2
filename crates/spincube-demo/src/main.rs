use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use spincube_engine::device::GpuInit;
use spincube_engine::logging::init_logging;
use spincube_engine::scene::Spin;
use spincube_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::{CubeApp, CubeImage};

#[derive(Parser, Debug)]
#[command(name = "hello-cube", about = "Perspective-projected cube sample", version)]
struct Cli {
    /// Image to wrap around the cube (PNG/JPEG). Falls back to a
    /// checkerboard when the file cannot be read or decoded.
    #[arg(long, value_name = "PATH")]
    texture: Option<PathBuf>,

    /// Cube color as RRGGBB hex; ignored when --texture is given.
    #[arg(long, default_value = "ff0000", value_name = "HEX")]
    color: String,

    /// Draw a static cube instead of a spinning one.
    #[arg(long)]
    still: bool,

    /// Rotation speed in radians per second.
    #[arg(long, default_value_t = 1.0, value_name = "RAD_PER_S")]
    speed: f32,

    /// Window size in logical pixels.
    #[arg(long, default_value = "800x600", value_name = "WxH")]
    size: String,

    /// Window title.
    #[arg(long, default_value = "hello-cube")]
    title: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging("info");

    let (width, height) =
        parse_size(&cli.size).with_context(|| format!("invalid --size {:?}", cli.size))?;
    let tint =
        parse_color(&cli.color).with_context(|| format!("invalid --color {:?}", cli.color))?;

    let spin = if cli.still { Spin::still() } else { Spin::new(cli.speed) };

    let image = cli.texture.as_deref().map(|path| match load_rgba(path) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("{e:#}; using checkerboard texture");
            checkerboard(256, 32)
        }
    });

    let app = CubeApp::new(spin, tint, image);

    Runtime::run(
        RuntimeConfig {
            title: cli.title,
            initial_size: LogicalSize::new(width, height),
        },
        GpuInit::default(),
        app,
    )
}

fn load_rgba(path: &Path) -> Result<CubeImage> {
    let decoded =
        image::open(path).with_context(|| format!("failed to decode {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(CubeImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Two-tone checkerboard, the stand-in when no texture decodes.
fn checkerboard(size: u32, cell: u32) -> CubeImage {
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let even = ((x / cell) + (y / cell)) % 2 == 0;
            let [r, g, b] = if even { [0xe6, 0xe6, 0xe6] } else { [0x2a, 0x6f, 0x97] };
            pixels.extend_from_slice(&[r, g, b, 0xff]);
        }
    }

    CubeImage {
        width: size,
        height: size,
        pixels,
    }
}

fn parse_size(s: &str) -> Result<(f64, f64)> {
    let (w, h) = s.split_once(['x', 'X']).context("expected WIDTHxHEIGHT")?;
    let width: f64 = w.trim().parse().context("width is not a number")?;
    let height: f64 = h.trim().parse().context("height is not a number")?;
    anyhow::ensure!(width >= 1.0 && height >= 1.0, "window must be at least 1x1");
    Ok((width, height))
}

fn parse_color(s: &str) -> Result<[f32; 4]> {
    let hex = s.trim().trim_start_matches('#');
    anyhow::ensure!(hex.len() == 6, "expected six hex digits (RRGGBB)");
    let n = u32::from_str_radix(hex, 16).context("not valid hex")?;

    Ok([
        ((n >> 16) & 0xff) as f32 / 255.0,
        ((n >> 8) & 0xff) as f32 / 255.0,
        (n & 0xff) as f32 / 255.0,
        1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_accepts_both_separators() {
        assert_eq!(parse_size("800x600").unwrap(), (800.0, 600.0));
        assert_eq!(parse_size("1024X768").unwrap(), (1024.0, 768.0));
        assert_eq!(parse_size(" 640 x 480 ").unwrap(), (640.0, 480.0));
    }

    #[test]
    fn parse_size_rejects_garbage() {
        assert!(parse_size("800").is_err());
        assert!(parse_size("axb").is_err());
        assert!(parse_size("0x600").is_err());
    }

    #[test]
    fn parse_color_reads_hex_channels() {
        assert_eq!(parse_color("ff0000").unwrap(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(parse_color("#00ff00").unwrap(), [0.0, 1.0, 0.0, 1.0]);

        let grey = parse_color("808080").unwrap();
        assert!((grey[0] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_color_rejects_bad_input() {
        assert!(parse_color("fff").is_err());
        assert!(parse_color("zzzzzz").is_err());
        assert!(parse_color("ff00001").is_err());
    }

    #[test]
    fn checkerboard_fills_every_pixel() {
        let img = checkerboard(64, 8);
        assert_eq!(img.pixels.len(), 64 * 64 * 4);
        // Opposite corners of one cell boundary differ.
        let first = &img.pixels[0..4];
        let after_cell = &img.pixels[(8 * 4) as usize..(8 * 4 + 4) as usize];
        assert_ne!(first, after_cell);
    }
}
