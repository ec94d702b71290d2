use spincube_engine::core::{App, AppControl, FrameCtx};
use spincube_engine::input::Key;
use spincube_engine::render::{CubeRenderer, FpsOverlay, Texture2d};
use spincube_engine::scene::{Camera, Spin};
use spincube_engine::time::FpsCounter;

/// Decoded RGBA image destined for the cube texture.
pub struct CubeImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Maximum pointer-driven lean in radians.
const MAX_TILT: f32 = 0.35;

/// Seconds between FPS readout refreshes. Refreshing slower than the frame
/// rate keeps the number readable.
const FPS_REFRESH: f32 = 0.25;

/// The sample itself: spins a cube, follows the pointer, shows the frame
/// rate, quits on Escape. Space pauses the spin.
pub struct CubeApp {
    camera: Camera,
    spin: Spin,

    cube: CubeRenderer,
    overlay: FpsOverlay,

    /// Uploaded on the first frame, once a device exists.
    pending_image: Option<CubeImage>,

    fps: FpsCounter,
    fps_text: String,
    fps_refreshed_at: f32,
}

impl CubeApp {
    pub fn new(spin: Spin, tint: [f32; 4], image: Option<CubeImage>) -> Self {
        let mut cube = CubeRenderer::new();
        // A textured run leaves the tint white so the image shows as-is.
        cube.set_tint(if image.is_some() { [1.0; 4] } else { tint });

        Self {
            camera: Camera::default(),
            spin,
            cube,
            overlay: FpsOverlay::new(),
            pending_image: image,
            fps: FpsCounter::default(),
            fps_text: String::new(),
            fps_refreshed_at: 0.0,
        }
    }

    /// Yaw/pitch lean from the pointer's offset to the window center.
    ///
    /// With the pointer gone (or before the first move) the cube sits
    /// centered, which is also what a resize falls back to.
    fn pointer_tilt(&self, ctx: &FrameCtx<'_, '_>) -> (f32, f32) {
        let (w, h) = ctx.logical_size();
        if w <= 0.0 || h <= 0.0 {
            return (0.0, 0.0);
        }

        match ctx.input.pointer_pos {
            Some((x, y)) => {
                let dx = ((x / w) * 2.0 - 1.0).clamp(-1.0, 1.0);
                let dy = ((y / h) * 2.0 - 1.0).clamp(-1.0, 1.0);
                (dx * MAX_TILT, dy * MAX_TILT)
            }
            None => (0.0, 0.0),
        }
    }
}

impl App for CubeApp {
    fn on_start(&mut self) {
        match load_system_font() {
            Some(bytes) => {
                if let Err(e) = self.overlay.set_font(&bytes) {
                    log::warn!("FPS overlay disabled: {e:#}");
                }
            }
            None => log::warn!("FPS overlay disabled: no usable system font found"),
        }

        log::info!("cube app started");
    }

    fn on_stop(&mut self) {
        log::info!("cube app stopped");
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }
        if ctx.input_frame.keys_pressed.contains(&Key::Space) {
            self.spin.toggle_paused();
        }

        self.spin.advance(ctx.time.dt);

        self.fps.push(ctx.time.dt);
        if self.fps_text.is_empty() || ctx.time.elapsed - self.fps_refreshed_at >= FPS_REFRESH {
            self.fps_text = format!("{:.0} FPS", self.fps.fps());
            self.fps_refreshed_at = ctx.time.elapsed;
        }

        let projection = self.camera.projection(ctx.aspect_ratio());
        let view = self.camera.view();
        let (yaw, pitch) = self.pointer_tilt(ctx);
        let model = self.spin.model_with_tilt(yaw, pitch);

        let cube = &mut self.cube;
        let overlay = &mut self.overlay;
        let pending_image = &mut self.pending_image;
        let fps_text = &self.fps_text;

        ctx.render(wgpu::Color::BLACK, |rctx, target| {
            if let Some(img) = pending_image.take() {
                match Texture2d::from_rgba8(
                    rctx.device,
                    rctx.queue,
                    img.width,
                    img.height,
                    &img.pixels,
                ) {
                    Ok(tex) => cube.set_texture(tex),
                    Err(e) => log::warn!("cube texture rejected: {e:#}"),
                }
            }

            cube.render(rctx, target, projection, view, model);
            overlay.render(rctx, target, fps_text);
        })
    }
}

/// Common system font locations, tried in order.
fn load_system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
