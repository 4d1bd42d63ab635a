/// WGSL shader for the sketch cube.
///
/// `u_time` drives the color cycle, `u_size` sets the stripe frequency and
/// `progress` blends from the normal-shaded base to the animated pattern.
pub const CUBE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    u_time: f32,
    u_size: f32,
    progress: f32,
    _pad: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) local_position: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = uniforms.model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (uniforms.model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_normal = normalize(world_normal);
    out.local_position = vertex.position;
    return out;
}

@fragment
fn fs_main(in: VertexOutput, @builtin(front_facing) front: bool) -> @location(0) vec4<f32> {
    var n = normalize(in.world_normal);
    if !front {
        n = -n;
    }
    let base = 0.5 + 0.5 * n;

    let phase = in.local_position * uniforms.u_size + vec3<f32>(0.0, 2.0, 4.0);
    let wave = 0.5 + 0.5 * cos(uniforms.u_time + phase);
    let stripes = 0.5 + 0.5 * sin(in.local_position.y * uniforms.u_size - uniforms.u_time * 3.0);
    let pattern = wave * (0.6 + 0.4 * stripes);

    let color = mix(base, pattern, uniforms.progress);
    return vec4<f32>(color, 1.0);
}
"#;
