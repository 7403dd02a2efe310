//! Builds a model-view-projection chain, projects a few points, and animates a rotation.
//!
//! Usage: `cargo run --example transforms [<yaw-degrees>]`

use anyhow::Context;
use log::LevelFilter;
use ndv::*;

const STEPS: u32 = 4;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("ndv"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()?;

    let yaw = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("invalid yaw angle '{arg}'"))?,
        None => 30.0,
    };

    let rotation = Quatf::from_rotation_y(yaw.to_radians());
    let mut model = Mat4f::from_quat(rotation);
    model.scale(Vec3f::splat(0.5));
    // `look_at` places a camera looking down its +Z axis; OpenGL projections look down -Z.
    let camera = Mat4f::look_at(vec3(0.0, 2.0, 5.0), Vec3f::ZERO, Vec3f::Y);
    let view = Mat4f::scaling(vec3(-1.0, 1.0, -1.0)) * camera.inverse();
    let projection = Mat4f::perspective(60f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    let mvp = projection * view * model;
    log::debug!("model-view-projection matrix:\n{mvp:.3}");

    let inverse = mvp
        .checked_inverse()
        .context("model-view-projection matrix is singular")?;
    log::debug!("determinant: {}", mvp.determinant());

    let corners = [
        vec3(-1.0, -1.0, -1.0),
        vec3(1.0, -1.0, -1.0),
        vec3(1.0, 1.0, 1.0),
        vec3(-1.0, 1.0, 1.0),
    ];
    for corner in corners {
        let clip = mvp * corner.extend(1.0);
        if clip.w <= 0.0 {
            log::warn!("{corner:.2} is behind the camera");
            continue;
        }
        let ndc = clip.truncate() / clip.w;
        let back = inverse * clip;
        log::info!("{corner:.2} -> clip {clip:.3} -> ndc {ndc:.3} (round trip {back:.2})");
    }

    let start = Quatf::IDENTITY;
    let end = Quatf::from_rotation_xyz(0.0, yaw.to_radians(), 90f32.to_radians());
    for step in 0..=STEPS {
        let t = step as f32 / STEPS as f32;
        let q = start.slerp(end, t);
        log::info!("t={t:.2}: {q} rotates X to {:.3}", q * Vec3f::X);
    }

    Ok(())
}
