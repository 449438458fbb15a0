//! Fixed fragment shader for 2D point lighting
//!
//! The source is compiled once at initialization. Uniform and field names here
//! are the only contract between the lighting subsystem and the shader.

/// Capacity of the shader's light array
pub const MAX_LIGHTS: usize = 64;

/// Light array uniform
pub const LIGHTS_UNIFORM: &str = "lights";
/// Active light count uniform
pub const LIGHT_COUNT_UNIFORM: &str = "lightCount";
/// Screen size uniform
pub const SCREEN_UNIFORM: &str = "screen";

/// Light struct field: position in pixels
pub const FIELD_POSITION: &str = "position";
/// Light struct field: RGB color
pub const FIELD_DIFFUSE: &str = "diffuse";
/// Light struct field: attenuation coefficient
pub const FIELD_POWER: &str = "power";

const POINT_LIGHT_FRAGMENT: &str = r"#version 330 core

#define MAX_LIGHTS 64

struct Light {
    vec2 position;
    vec3 diffuse;
    float power;
};

in vec2 v_uv;
out vec4 frag_color;

uniform sampler2D u_texture;
uniform Light lights[MAX_LIGHTS];
uniform uint lightCount;
uniform vec2 screen;

void main() {
    vec4 pixel = texture(u_texture, v_uv);
    vec2 norm_screen = gl_FragCoord.xy / screen;
    vec3 diffuse = vec3(0.0);

    for (uint i = 0u; i < lightCount; i++) {
        Light light = lights[i];
        vec2 norm_pos = light.position / screen;

        vec2 offset = norm_screen - norm_pos;
        offset.x *= screen.x / screen.y;

        float distance = length(offset);
        float attenuation = 1.0 / (1.0 + light.power * distance * distance);
        diffuse += light.diffuse * attenuation;
    }

    diffuse = clamp(diffuse, 0.0, 1.0);
    frag_color = pixel * vec4(diffuse, 1.0);
}
";

/// Shader program source handed to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    /// Program name, for logs and error messages
    pub name: &'static str,
    /// GLSL fragment stage
    pub fragment: &'static str,
}

impl ShaderSource {
    /// The point-light fragment shader
    pub const fn point_lights() -> Self {
        Self {
            name: "point_lights",
            fragment: POINT_LIGHT_FRAGMENT,
        }
    }
}
