use anyhow::Result;

/// RGBA8 texture with the sampler the cube pipeline binds alongside it.
///
/// Sampling is linear with clamp-to-edge addressing, matching what the
/// samples ask of the GL driver.
pub struct Texture2d {
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
    texture: wgpu::Texture,
}

impl Texture2d {
    /// Uploads straight-alpha RGBA8 pixels (row-major, no padding).
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "texture has zero size");
        anyhow::ensure!(
            pixels.len() as u64 == 4 * width as u64 * height as u64,
            "pixel data is {} bytes, expected {} for {width}x{height} rgba8",
            pixels.len(),
            4 * width as u64 * height as u64,
        );

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("spincube cube texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("spincube cube sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        Ok(Self {
            view,
            sampler,
            width,
            height,
            texture,
        })
    }

    /// 1×1 opaque white. Bound when no image texture is set so the flat-color
    /// variants run the same pipeline as the textured one.
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_rgba8(device, queue, 1, 1, &[0xff, 0xff, 0xff, 0xff])
            .expect("1x1 white pixel data is well-formed by construction")
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }
}
