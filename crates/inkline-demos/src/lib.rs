//! Shared canvas application driven by the demo binaries.
//!
//! Each binary picks a stroke strategy; everything else — pointer sampling,
//! width adjustment, the render loop — is identical across the three demos.

use inkline_engine::core::{App, AppControl, FrameCtx};
use inkline_engine::input::{Key, MouseButton};
use inkline_engine::paint::Color;
use inkline_engine::render::stroke::StrokeRenderer;
use inkline_geom::{Polyline, Vec2};

pub const WINDOW_WIDTH: f64 = 1024.0;
pub const WINDOW_HEIGHT: f64 = 768.0;

const DEFAULT_STROKE_WIDTH: f32 = 10.0;
const MIN_STROKE_WIDTH: f32 = 1.0;
const MAX_STROKE_WIDTH: f32 = 64.0;

/// Mouse-drawing canvas: holds the growing point sequence and delegates
/// rasterization to the configured [`StrokeRenderer`].
pub struct CanvasApp<R> {
    line: Polyline,
    renderer: R,
    width: f32,
    background: Color,
}

impl<R: StrokeRenderer> CanvasApp<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            line: Polyline::new(),
            renderer,
            width: DEFAULT_STROKE_WIDTH,
            background: Color::BLACK,
        }
    }

    /// Appends the pointer position while the button is held, skipping
    /// repeats of the last sampled position.
    ///
    /// Returns whether a point was appended.
    fn sample_pointer(&mut self, held: bool, pos: Option<(f32, f32)>) -> bool {
        if !held {
            return false;
        }
        let Some((x, y)) = pos else { return false };
        self.line.push_distinct(Vec2::new(x, y))
    }

    /// Applies this frame's scroll to the stroke width, clamped.
    fn adjust_width(&mut self, wheel_lines: f32) {
        if wheel_lines == 0.0 {
            return;
        }
        let next = (self.width + wheel_lines).clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if next != self.width {
            self.width = next;
            log::debug!("stroke width set to {next}");
        }
    }
}

impl<R: StrokeRenderer> App for CanvasApp<R> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        self.adjust_width(ctx.input_frame.wheel_lines);
        self.sample_pointer(
            ctx.input.button_down(MouseButton::Left),
            ctx.input.pointer_pos,
        );

        if ctx.input_frame.buttons_released.contains(&MouseButton::Left) {
            log::debug!("stroke paused at {} points", self.line.len());
        }

        let CanvasApp { line, renderer, width, background } = self;
        let (width, background) = (*width, *background);

        ctx.render(background, |rctx, target| {
            renderer.draw(rctx, target, line.points(), width);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_engine::render::{RenderCtx, RenderTarget};

    /// Stand-in strategy: sampling logic is renderer-agnostic.
    struct NoopRenderer;

    impl StrokeRenderer for NoopRenderer {
        fn draw(
            &mut self,
            _ctx: &RenderCtx<'_>,
            _target: &mut RenderTarget<'_>,
            _points: &[Vec2],
            _width: f32,
        ) {
        }
    }

    fn app() -> CanvasApp<NoopRenderer> {
        CanvasApp::new(NoopRenderer)
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn samples_only_while_button_held() {
        let mut canvas = app();
        assert!(!canvas.sample_pointer(false, Some((10.0, 10.0))));
        assert!(canvas.sample_pointer(true, Some((10.0, 10.0))));
        assert_eq!(canvas.line.len(), 1);
    }

    #[test]
    fn repeated_position_is_sampled_once() {
        let mut canvas = app();
        assert!(canvas.sample_pointer(true, Some((5.0, 5.0))));
        assert!(!canvas.sample_pointer(true, Some((5.0, 5.0))));
        assert!(canvas.sample_pointer(true, Some((6.0, 5.0))));
        assert_eq!(canvas.line.len(), 2);
    }

    #[test]
    fn no_pointer_position_means_no_sample() {
        let mut canvas = app();
        assert!(!canvas.sample_pointer(true, None));
        assert!(canvas.line.is_empty());
    }

    // ── width adjustment ──────────────────────────────────────────────────

    #[test]
    fn wheel_adjusts_width_within_clamp() {
        let mut canvas = app();
        canvas.adjust_width(3.0);
        assert_eq!(canvas.width, DEFAULT_STROKE_WIDTH + 3.0);

        canvas.adjust_width(-1000.0);
        assert_eq!(canvas.width, MIN_STROKE_WIDTH);

        canvas.adjust_width(1000.0);
        assert_eq!(canvas.width, MAX_STROKE_WIDTH);
    }

    #[test]
    fn zero_scroll_is_a_no_op() {
        let mut canvas = app();
        canvas.adjust_width(0.0);
        assert_eq!(canvas.width, DEFAULT_STROKE_WIDTH);
    }
}
