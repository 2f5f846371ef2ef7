//! Canvas 2D backend
//!
//! Paints a draw list onto an `HtmlCanvasElement` whose backing store is the
//! logical playfield size; CSS handles scaling to physical pixels.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::colors::css_rgba;
use super::scene::DrawCmd;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

const LABEL_FONT_FAMILY: &str = "Rajdhani, sans-serif";

pub struct CanvasRenderState {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderState {
    /// Size the canvas to the playfield and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { ctx })
    }

    /// Paint every command in order
    pub fn render(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        for cmd in cmds {
            match cmd {
                DrawCmd::Rect { pos, size, color } => {
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCmd::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    ctx.set_stroke_style_str(&css_rgba(*color));
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCmd::Polygon { points, color } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.begin_path();
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in rest {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                    ctx.close_path();
                    ctx.fill();
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.fill();
                }
                DrawCmd::Text {
                    pos,
                    text,
                    color,
                    size_px,
                } => {
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.set_font(&format!("{}px {}", size_px, LABEL_FONT_FAMILY));
                    ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }

        Ok(())
    }
}
