#![cfg(target_endian = "little")]

use cairo::{Context, Format, ImageSurface};
use colorf::codec::{Bgra32, PixelCodec};
use colorf::color::{BLUE, RED, TRANSPARENT, WHITE};
use colorf::draw::{self, SurfaceError};
use colorf::{PremultipliedColor, StraightColor};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn first_pixel(surface: &mut ImageSurface) -> [u8; 4] {
    let data = surface.data().unwrap();
    [data[0], data[1], data[2], data[3]]
}

#[test]
fn opaque_source_paints_exact_bytes() {
    let (mut surface, ctx) = surface_with_context(1, 1);
    draw::set_source_color(&ctx, RED);
    ctx.paint().unwrap();
    drop(ctx);

    assert_eq!(first_pixel(&mut surface), [0, 0, 255, 255]);
}

#[test]
fn translucent_source_is_stored_premultiplied() {
    let (mut surface, ctx) = surface_with_context(1, 1);
    draw::set_source_color(&ctx, RED.with_alpha(0.5));
    ctx.paint().unwrap();
    drop(ctx);

    let [b, g, r, a] = first_pixel(&mut surface);
    assert_eq!((b, g), (0, 0));
    assert!(r.abs_diff(128) <= 1, "red byte {r}");
    assert!(a.abs_diff(128) <= 1, "alpha byte {a}");
    assert_eq!(r, a, "red must equal alpha for premultiplied full red");

    let px = draw::read_pixel(&mut surface, 0, 0).unwrap();
    let straight = StraightColor::from(px);
    assert!((straight.r() - 1.0).abs() < 1e-9);
    assert!((straight.a() - 0.5).abs() < 0.01);
}

#[test]
fn fill_color_replaces_instead_of_blending() {
    let (mut surface, ctx) = surface_with_context(2, 2);
    draw::fill_color(&ctx, WHITE).unwrap();
    draw::fill_color(&ctx, TRANSPARENT).unwrap();
    drop(ctx);

    let data = surface.data().unwrap();
    assert!(data.iter().all(|byte| *byte == 0));
}

#[test]
fn fill_color_restores_operator() {
    let (_surface, ctx) = surface_with_context(1, 1);
    draw::fill_color(&ctx, BLUE.with_alpha(0.25)).unwrap();
    assert_eq!(ctx.operator(), cairo::Operator::Over);
}

#[test]
fn write_then_read_pixel_round_trips() {
    let mut surface = ImageSurface::create(Format::ARgb32, 3, 2).unwrap();
    let color: PremultipliedColor = Bgra32.decode(&[40, 80, 120, 160]).unwrap();

    draw::write_pixel(&mut surface, 2, 1, color).unwrap();
    assert_eq!(draw::read_pixel(&mut surface, 2, 1).unwrap(), color);
    assert_eq!(
        draw::read_pixel(&mut surface, 0, 0).unwrap(),
        PremultipliedColor::default()
    );

    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    assert_eq!(&data[stride + 8..stride + 12], &[40, 80, 120, 160]);
}

#[test]
fn painted_pixels_composite_with_written_ones() {
    let mut surface = ImageSurface::create(Format::ARgb32, 1, 1).unwrap();
    draw::write_pixel(&mut surface, 0, 0, WHITE.premultiply()).unwrap();

    let ctx = Context::new(&surface).unwrap();
    draw::set_source_color(&ctx, BLUE);
    ctx.paint().unwrap();
    drop(ctx);

    assert_eq!(
        draw::read_pixel(&mut surface, 0, 0).unwrap(),
        BLUE.premultiply()
    );
}

#[test]
fn pixel_access_requires_exclusive_surface() {
    let (mut surface, ctx) = surface_with_context(1, 1);
    let err = draw::read_pixel(&mut surface, 0, 0).unwrap_err();
    assert!(matches!(err, SurfaceError::Borrow(_)), "{err}");
    drop(ctx);
    assert!(draw::read_pixel(&mut surface, 0, 0).is_ok());
}

#[test]
fn pixel_access_rejects_other_formats() {
    let mut surface = ImageSurface::create(Format::Rgb24, 1, 1).unwrap();
    let err = draw::write_pixel(&mut surface, 0, 0, RED).unwrap_err();
    assert!(matches!(err, SurfaceError::UnsupportedFormat(Format::Rgb24)));
}

#[test]
fn pixel_access_reports_out_of_bounds() {
    let mut surface = ImageSurface::create(Format::ARgb32, 2, 2).unwrap();
    let err = draw::read_pixel(&mut surface, 5, 0).unwrap_err();
    assert!(matches!(err, SurfaceError::Color(_)));
}
