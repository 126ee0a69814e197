//! Canvas 2D backend: replays a [`Scene`] onto a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{DrawCommand, Scene, TextAlign};

/// Draw every command in order
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    for command in &scene.commands {
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Rect { pos, size, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::Text {
                text,
                pos,
                size_px,
                align,
                color,
            } => {
                ctx.set_font(&format!("{size_px}px Arial"));
                ctx.set_fill_style_str(&color.to_css());
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
    }
    ctx.set_text_align("left");
    Ok(())
}
