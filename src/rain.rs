//! Decorative falling-glyph animation on the home page canvas.
//!
//! One integer cursor per 16px column. Each tick washes the whole
//! canvas with a translucent backdrop (fading trails), draws one random
//! glyph per column at its cursor, then advances the cursor. A cursor
//! past the bottom edge resets to the top with a small probability, so
//! the columns desynchronize instead of restarting cleanly.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::theme;

const TICK_MS: u32 = 80;
const GLYPH_PX: u32 = 16;
const GLYPHS: [&str; 2] = ["₹", "$"];
// Visually tuned: keep falling past the edge unless random() clears this.
const RESET_HOLD: f64 = 0.975;

/// A running animation. Dropping it cancels the ticker, so the owner
/// restarts by replacing the value, which keeps at most one session
/// alive.
pub struct RainAnimation {
    _ticker: Interval,
}

impl RainAnimation {
    /// Size the canvas to the window, reset every column cursor to 1
    /// and start the tick timer.
    pub fn start(canvas: HtmlCanvasElement) -> Option<RainAnimation> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()? as u32;
        let height = window.inner_height().ok()?.as_f64()? as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let columns = (width / GLYPH_PX) as usize;
        let drops = Rc::new(RefCell::new(vec![1u32; columns]));

        let ticker = Interval::new(TICK_MS, move || {
            paint(&ctx, &canvas, &mut drops.borrow_mut());
        });
        Some(RainAnimation { _ticker: ticker })
    }
}

fn paint(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, drops: &mut [u32]) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    // Palette comes from the live body class, not a captured theme, so
    // a toggle recolors the frame already in flight.
    let palette = theme::current();

    ctx.set_fill_style_str(palette.backdrop_wash());
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(palette.rain_tint());
    ctx.set_font("16px monospace");

    for (col, cursor) in drops.iter_mut().enumerate() {
        let glyph = GLYPHS[pick_index(GLYPHS.len())];
        let x = (col as u32 * GLYPH_PX) as f64;
        let y = (*cursor * GLYPH_PX) as f64;
        let _ = ctx.fill_text(glyph, x, y);

        if y > height && js_sys::Math::random() > RESET_HOLD {
            *cursor = 0;
        }
        *cursor += 1;
    }
}

fn pick_index(len: usize) -> usize {
    ((js_sys::Math::random() * len as f64) as usize).min(len - 1)
}
