use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const PARTICLE_COUNT: usize = 900;
const FRAME_MS: u32 = 33;
// Camera sits 10 units back, shell radius 4..6, like the original scene.
const CAMERA_DISTANCE: f64 = 10.0;
const FOCAL_LENGTH: f64 = 420.0;

struct Particle {
    x: f64,
    y: f64,
    z: f64,
}

fn spherical_shell(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let r = 4.0 + Math::random() * 2.0;
            let theta = 2.0 * std::f64::consts::PI * Math::random();
            let phi = (2.0 * Math::random() - 1.0).acos();
            Particle {
                x: r * phi.sin() * theta.cos(),
                y: r * phi.sin() * theta.sin(),
                z: r * phi.cos(),
            }
        })
        .collect()
}

fn draw_frame(
    context: &CanvasRenderingContext2d,
    particles: &[Particle],
    width: f64,
    height: f64,
    angle_x: f64,
    angle_y: f64,
) {
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str("#0861F2");

    let (sin_y, cos_y) = angle_y.sin_cos();
    let (sin_x, cos_x) = angle_x.sin_cos();
    let cx = width / 2.0;
    let cy = height / 2.0;

    for p in particles {
        // Rotate about the vertical axis, then tilt about the horizontal one.
        let x1 = p.x * cos_y - p.z * sin_y;
        let z1 = p.x * sin_y + p.z * cos_y;
        let y1 = p.y * cos_x - z1 * sin_x;
        let z2 = p.y * sin_x + z1 * cos_x;

        let depth = z2 + CAMERA_DISTANCE;
        if depth <= 0.1 {
            continue;
        }
        let scale = FOCAL_LENGTH / depth;
        let sx = cx + x1 * scale;
        let sy = cy + y1 * scale;

        // Fade points on the far side of the sphere.
        let alpha = (1.4 - depth / CAMERA_DISTANCE).clamp(0.12, 0.6);
        context.set_global_alpha(alpha);
        context.fill_rect(sx - 1.0, sy - 1.0, 2.0, 2.0);
    }
    context.set_global_alpha(1.0);
}

/// Full-viewport decorative particle sphere, slowly rotating. Pure eye candy,
/// no interactivity; the interval is dropped with the component.
#[function_component(SecurityMesh)]
pub fn security_mesh() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut interval = None;
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let window = web_sys::window().unwrap();
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|w| w.as_f64())
                        .unwrap_or(1280.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(720.0);
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);

                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<CanvasRenderingContext2d>()
                        .unwrap();

                    let particles = spherical_shell(PARTICLE_COUNT);
                    let mut angle_x: f64 = 0.0;
                    let mut angle_y: f64 = std::f64::consts::FRAC_PI_4;

                    interval = Some(Interval::new(FRAME_MS, move || {
                        angle_x += 0.0022;
                        angle_y += 0.0016;
                        draw_frame(&context, &particles, width, height, angle_x, angle_y);
                    }));
                }
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="mesh-background">
            <style>
            {r#"
                .mesh-background {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    opacity: 0.4;
                    pointer-events: none;
                }
                .mesh-background canvas { display: block; }
            "#}
            </style>
            <canvas ref={canvas_ref} />
        </div>
    }
}
