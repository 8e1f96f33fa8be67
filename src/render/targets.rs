use super::helpers;
use wgpu;

/// Offscreen attachments sized to the surface.
///
/// - `color_*` is the multisampled color target, resolved into the swapchain
///   frame. Absent when multisampling is off.
/// - `depth_*` matches the color sample count.
pub(crate) struct RenderTargets {
    #[allow(dead_code)]
    pub(crate) color_tex: Option<wgpu::Texture>,
    pub(crate) color_view: Option<wgpu::TextureView>,
    #[allow(dead_code)]
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) sample_count: u32,
    color_format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let (color_tex, color_view) =
            Self::make_color(device, width, height, sample_count, color_format);
        let (depth_tex, depth_view) = helpers::create_render_texture(
            device,
            "depth_tex",
            width,
            height,
            sample_count,
            super::DEPTH_FORMAT,
        );
        Self {
            color_tex,
            color_view,
            depth_tex,
            depth_view,
            sample_count,
            color_format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.sample_count, self.color_format);
    }

    fn make_color(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
        format: wgpu::TextureFormat,
    ) -> (Option<wgpu::Texture>, Option<wgpu::TextureView>) {
        if sample_count <= 1 {
            return (None, None);
        }
        let (tex, view) =
            helpers::create_render_texture(device, "msaa_color", width, height, sample_count, format);
        (Some(tex), Some(view))
    }
}
