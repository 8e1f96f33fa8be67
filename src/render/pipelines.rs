use super::helpers;
use super::mesh::{self, InstanceRaw};
use super::SceneUniforms;
use wgpu;

pub(crate) struct SceneResources {
    pub(crate) mesh_pipeline: wgpu::RenderPipeline,
    pub(crate) stars_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("city_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::city::CITY_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let mesh_pipeline = helpers::make_scene_pipeline(
        device,
        "mesh_pipeline",
        &pl,
        &shader,
        ("vs_mesh", "fs_mesh"),
        &[mesh::vertex_layout(), InstanceRaw::layout()],
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
        sample_count,
    );
    let stars_pipeline = helpers::make_scene_pipeline(
        device,
        "stars_pipeline",
        &pl,
        &shader,
        ("vs_stars", "fs_stars"),
        &[mesh::star_layout()],
        wgpu::PrimitiveTopology::PointList,
        color_format,
        sample_count,
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    SceneResources {
        mesh_pipeline,
        stars_pipeline,
        uniform_buffer,
        bind_group,
    }
}
