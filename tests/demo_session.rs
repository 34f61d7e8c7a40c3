//! End-to-end sessions: events in, pixels out.

use cg_algorithms::line_bresenham::line_points;
use cg_algorithms::pixfmt_rgba::PixfmtRgba32;
use cg_algorithms::renderer_base::RendererBase;
use cg_algorithms::renderer_primitives::RendererPrimitives;
use cg_algorithms::rendering_buffer::RowAccessor;
use cg_algorithms::{
    DemoConfig, Event, MouseButton, PointI, ReflectPivot, Rgba8, TransformDemo, TransformParams,
};

const W: u32 = 800;
const H: u32 = 600;

fn config() -> DemoConfig {
    DemoConfig::new().size(W, H)
}

fn down(x: i32, y: i32) -> Event {
    Event::MouseDown {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn up(x: i32, y: i32) -> Event {
    Event::MouseUp {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn drag(x: i32, y: i32) -> Event {
    Event::MouseMove {
        x,
        y,
        buttons_down: true,
    }
}

struct Frame {
    buf: Vec<u8>,
}

impl Frame {
    fn new() -> Self {
        Self {
            buf: vec![0u8; (W * H * 4) as usize],
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let i = (y as usize * W as usize + x as usize) * 4;
        Rgba8::from_rgba_u8(self.buf[i], self.buf[i + 1], self.buf[i + 2], self.buf[i + 3])
    }

    /// Black pixels outside the control panel.
    fn line_pixels(&self, demo: &TransformDemo) -> Vec<PointI> {
        let panel = demo.panel().rect();
        let mut out = Vec::new();
        for y in 0..H as i32 {
            for x in 0..W as i32 {
                if panel.hit_test(x as f64, y as f64) {
                    continue;
                }
                if self.pixel(x, y) == Rgba8::BLACK {
                    out.push(PointI::new(x, y));
                }
            }
        }
        out
    }
}

#[test]
fn horizontal_segment_plots_every_pixel() {
    let mut demo = TransformDemo::new(config()).unwrap();
    let mut frame = Frame::new();
    demo.frame_into([down(500, 400), down(505, 400)], &mut frame.buf)
        .unwrap();

    let expected: Vec<PointI> = (500..=505).map(|x| PointI::new(x, 400)).collect();
    assert_eq!(frame.line_pixels(&demo), expected);
}

#[test]
fn diagonal_segment_plots_four_pixels() {
    let mut buf = vec![0u8; 10 * 10 * 4];
    let rbuf = RowAccessor::new(&mut buf, 10, 10, 40).unwrap();
    let mut ren = RendererBase::new(PixfmtRgba32::new(rbuf));
    let mut prim = RendererPrimitives::new(&mut ren);
    prim.set_line_color(Rgba8::BLACK);
    prim.line(PointI::new(0, 0), PointI::new(3, 3));

    let mut lit = Vec::new();
    for y in 0..10 {
        for x in 0..10 {
            if ren.pixel(x, y) == Rgba8::BLACK {
                lit.push(PointI::new(x, y));
            }
        }
    }
    assert_eq!(lit, line_points(PointI::new(0, 0), PointI::new(3, 3)));
    assert_eq!(lit.len(), 4);
}

#[test]
fn polyline_is_redrawn_every_frame_from_controls() {
    let mut demo = TransformDemo::new(config()).unwrap();
    let mut frame = Frame::new();
    demo.frame_into([down(500, 400), down(600, 400)], &mut frame.buf)
        .unwrap();
    assert_eq!(frame.pixel(550, 400), Rgba8::BLACK);

    // Drag the Y translation slider to its maximum.
    let track = demo.panel().translate_y.rect();
    let y = ((track.y1 + track.y2) / 2.0) as i32;
    let x_mid = ((track.x1 + track.x2) / 2.0) as i32;
    demo.frame_into(
        [down(x_mid, y), drag(track.x2 as i32 + 200, y), up(track.x2 as i32 + 200, y)],
        &mut frame.buf,
    )
    .unwrap();

    assert_eq!(demo.params().ty, 100);
    // the drag release far outside the panel did not add a point
    assert_eq!(demo.points().len(), 2);
    assert_eq!(frame.pixel(550, 400), Rgba8::WHITE);
    assert_eq!(frame.pixel(550, 500), Rgba8::BLACK);
    assert_eq!(demo.points(), &[PointI::new(500, 400), PointI::new(600, 400)]);
}

#[test]
fn clear_disables_drawing_until_two_new_points() {
    let mut demo = TransformDemo::new(config()).unwrap();
    let mut frame = Frame::new();
    demo.frame_into([down(500, 400), down(600, 450)], &mut frame.buf)
        .unwrap();
    assert!(!frame.line_pixels(&demo).is_empty());

    let button = demo.panel().clear.rect();
    let (bx, by) = (button.x1 as i32 + 4, button.y1 as i32 + 4);
    demo.frame_into([down(bx, by), up(bx, by)], &mut frame.buf)
        .unwrap();
    assert!(demo.points().is_empty());
    assert!(demo.transformed().is_empty());
    assert!(frame.line_pixels(&demo).is_empty());

    demo.frame_into([down(700, 500)], &mut frame.buf).unwrap();
    assert!(frame.line_pixels(&demo).is_empty());

    demo.frame_into([down(720, 500)], &mut frame.buf).unwrap();
    assert_eq!(frame.line_pixels(&demo).len(), 21);
}

#[test]
fn full_rotation_returns_to_start() {
    let mut demo = TransformDemo::new(config()).unwrap();
    demo.set_params(&TransformParams {
        angle: 360.0,
        ..TransformParams::IDENTITY
    });
    let mut frame = Frame::new();
    let clicks = [PointI::new(450, 300), PointI::new(700, 350), PointI::new(600, 550)];
    demo.frame_into(clicks.iter().map(|p| down(p.x, p.y)), &mut frame.buf)
        .unwrap();

    for (t, o) in demo.transformed().iter().zip(&clicks) {
        assert!((t.x - o.x).abs() <= 1 && (t.y - o.y).abs() <= 1, "{:?} vs {:?}", t, o);
    }
}

#[test]
fn origin_reflection_moves_shape_off_canvas() {
    let mut demo = TransformDemo::new(config()).unwrap();
    demo.set_params(&TransformParams {
        reflect_x: true,
        ..TransformParams::IDENTITY
    });
    let mut frame = Frame::new();
    demo.frame_into([down(500, 400), down(600, 420)], &mut frame.buf)
        .unwrap();

    assert_eq!(
        demo.transformed(),
        &[PointI::new(-500, 400), PointI::new(-600, 420)]
    );
    assert!(frame.line_pixels(&demo).is_empty());
}

#[test]
fn centroid_reflection_stays_on_canvas() {
    let mut demo = TransformDemo::new(config().reflect_pivot(ReflectPivot::Centroid)).unwrap();
    demo.set_params(&TransformParams {
        reflect_x: true,
        ..TransformParams::IDENTITY
    });
    let mut frame = Frame::new();
    demo.frame_into([down(500, 400), down(600, 420)], &mut frame.buf)
        .unwrap();

    assert_eq!(
        demo.transformed(),
        &[PointI::new(600, 400), PointI::new(500, 420)]
    );
    assert!(!frame.line_pixels(&demo).is_empty());
}

#[test]
fn quit_finishes_the_frame_then_stops() {
    let mut demo = TransformDemo::new(config()).unwrap();
    let mut frame = Frame::new();
    demo.frame_into([down(500, 400), Event::Quit, down(600, 400)], &mut frame.buf)
        .unwrap();
    assert!(!demo.is_running());
    assert_eq!(frame.pixel(550, 400), Rgba8::BLACK);
}

#[test]
fn short_buffer_is_rejected() {
    let mut demo = TransformDemo::new(config()).unwrap();
    let mut buf = vec![0u8; 16];
    let err = demo.frame_into(std::iter::empty(), &mut buf).unwrap_err();
    assert!(err.to_string().contains("too small"), "{}", err);
}
