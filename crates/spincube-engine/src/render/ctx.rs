/// Renderer-facing context for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub depth_format: wgpu::TextureFormat,

    /// Drawable size in physical pixels.
    pub width: u32,
    pub height: u32,

    /// OS scale factor (physical / logical pixels).
    pub scale_factor: f32,
}

impl<'a> RenderCtx<'a> {
    /// Width / height, guarded against a zero-height drawable mid-resize.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / (self.height.max(1)) as f32
    }
}

/// Target for drawing: the frame encoder plus color and depth views.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub depth_view: &'a wgpu::TextureView,
}
