use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use fractal_viewer::controllers::interactive::FrameData;
use fractal_viewer::presenters::surface::pixel_format::{copy_rgb_to_rgba, rgba_len_for_rgb};
use fractal_viewer::{FrameSurface, Palette, RenderRequest, Viewport, render};
use std::time::Duration;

const WIDTH: u32 = 1221;
const HEIGHT: u32 = 640;

fn bench_presenter_copy(c: &mut Criterion) {
    let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).expect("default viewport is valid");
    let image = render(
        &RenderRequest::mandelbrot(viewport, Palette::grayscale()),
        WIDTH,
        HEIGHT,
    )
    .expect("bench render succeeds");

    let mut group = c.benchmark_group("presenter_copy");
    group.throughput(Throughput::Bytes(image.buffer_size() as u64));

    let mut dst = vec![0; rgba_len_for_rgb(image.buffer_size())];
    group.bench_function("copy_rgb_to_rgba", |b| {
        b.iter(|| copy_rgb_to_rgba(black_box(image.buffer()), black_box(&mut dst)))
    });

    let mut surface = FrameSurface::new(WIDTH, HEIGHT);
    let mut frame = FrameData {
        generation: 0,
        image,
        render_duration: Duration::ZERO,
    };
    group.bench_function("frame_surface_blit", |b| {
        b.iter(|| {
            frame.generation += 1;
            surface.present_frame(black_box(&frame))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_presenter_copy);
criterion_main!(benches);
