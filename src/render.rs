use crate::city::geometry::{self, Shape};
use crate::city::scene::Lighting;
use crate::city::CityApp;
use crate::constants::MSAA_SAMPLES;
use glam::Vec3;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod mesh;
mod pipelines;
mod targets;
use mesh::{GpuMesh, InstanceRaw};
use pipelines::SceneResources;
use targets::RenderTargets;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Buildings plus markers, with headroom
const MAX_INSTANCES: usize = 256;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointLightPacked {
    pos_range: [f32; 4],
    color_decay: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog_color: [f32; 4],
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
    lights: [PointLightPacked; 6],
}

impl SceneUniforms {
    fn from_app(app: &CityApp) -> Self {
        let atmosphere = &app.scene.atmosphere;
        let Lighting {
            ambient,
            ambient_intensity,
            sun_color,
            sun_intensity,
            sun_position,
            points,
        } = app.scene.lighting;
        let eye = app.camera.eye;
        let fog = atmosphere.fog_color.to_linear();
        let amb = ambient.to_linear().scaled(ambient_intensity);
        let sun = sun_color.to_linear().scaled(sun_intensity);
        let sun_dir = sun_position.normalize_or_zero();
        let lights = points.map(|p| {
            let c = p.color.to_linear().scaled(p.intensity);
            PointLightPacked {
                pos_range: [p.position.x, p.position.y, p.position.z, p.range],
                color_decay: [c.r, c.g, c.b, p.decay],
            }
        });
        Self {
            view_proj: app.camera.view_proj().to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, atmosphere.fog_density],
            fog_color: [fog.r, fog.g, fog.b, 1.0],
            ambient: [amb.r, amb.g, amb.b, 1.0],
            sun_dir: [sun_dir.x, sun_dir.y, sun_dir.z, 0.0],
            sun_color: [sun.r, sun.g, sun.b, 1.0],
            lights,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    targets: RenderTargets,
    scene: SceneResources,
    // Indexed like `Shape::ALL`
    shape_meshes: [GpuMesh; 3],
    marker_mesh: GpuMesh,
    star_buffer: wgpu::Buffer,
    star_count: u32,
    instance_buffer: wgpu::Buffer,
    instances: Vec<InstanceRaw>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, stars: &[Vec3]) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Browsers usually hand out a non-sRGB canvas; render through an sRGB view of it
        let view_format = format.add_srgb_suffix();
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if adapter
            .get_texture_format_features(view_format)
            .flags
            .sample_count_supported(MSAA_SAMPLES)
        {
            MSAA_SAMPLES
        } else {
            1
        };
        log::info!(
            "[gpu] format={:?} view={:?} msaa={} size={}x{}",
            format,
            view_format,
            sample_count,
            width,
            height
        );

        let targets = RenderTargets::new(&device, width, height, sample_count, view_format);
        let scene = pipelines::create_scene_resources(&device, view_format, sample_count);

        let shape_meshes = Shape::ALL.map(|shape| {
            GpuMesh::upload(&device, &format!("{:?}_mesh", shape), &shape.geometry())
        });
        let marker_mesh = GpuMesh::upload(&device, "marker_mesh", &geometry::marker_sphere());

        let star_positions: Vec<[f32; 3]> = stars.iter().map(|p| p.to_array()).collect();
        let star_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars"),
            contents: bytemuck::cast_slice(&star_positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (MAX_INSTANCES * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            scene,
            shape_meshes,
            marker_mesh,
            star_buffer,
            star_count: star_positions.len() as u32,
            instance_buffer,
            instances: Vec::with_capacity(MAX_INSTANCES),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, app: &CityApp) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms::from_app(app);
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        // Group building instances by shape so each mesh is one instanced draw
        self.instances.clear();
        let mut shape_ranges = [0u32..0u32, 0..0, 0..0];
        for (slot, shape) in Shape::ALL.iter().enumerate() {
            let start = self.instances.len() as u32;
            self.instances.extend(
                app.scene
                    .buildings
                    .iter()
                    .filter(|b| b.shape == *shape)
                    .map(InstanceRaw::from_building),
            );
            shape_ranges[slot] = start..self.instances.len() as u32;
        }
        let marker_start = self.instances.len() as u32;
        self.instances
            .extend(app.scene.markers.iter().map(InstanceRaw::from_marker));
        self.instances.truncate(MAX_INSTANCES);
        let marker_range = marker_start.min(self.instances.len() as u32)..self.instances.len() as u32;
        self.queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&self.instances),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let bg = app.scene.atmosphere.background.to_linear();
        let clear = wgpu::Color {
            r: bg.r as f64,
            g: bg.g as f64,
            b: bg.b as f64,
            a: 1.0,
        };
        let (color_view, resolve_target) = match &self.targets.color_view {
            Some(msaa) => (msaa, Some(&view)),
            None => (&view, None),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);

            rpass.set_pipeline(&self.scene.mesh_pipeline);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (mesh, range) in self.shape_meshes.iter().zip(shape_ranges) {
                draw_instanced(&mut rpass, mesh, range);
            }
            draw_instanced(&mut rpass, &self.marker_mesh, marker_range);

            rpass.set_pipeline(&self.scene.stars_pipeline);
            rpass.set_vertex_buffer(0, self.star_buffer.slice(..));
            rpass.draw(0..self.star_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_instanced(rpass: &mut wgpu::RenderPass<'_>, mesh: &GpuMesh, instances: std::ops::Range<u32>) {
    if instances.is_empty() {
        return;
    }
    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    rpass.draw_indexed(0..mesh.num_indices, 0, instances);
}
