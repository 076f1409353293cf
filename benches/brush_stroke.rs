use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deform_map_painter::deform_map::{
    BrushEngine, BrushEngineConfig, BrushStroke, Color4, GaussianBrushEngine, ImageCodec,
    CodecConfig, PixelBuffer, ScanStrategy,
};

fn benchmark_scan_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_by_strategy");

    let strategies = vec![
        (ScanStrategy::Full, false, "full_sequential"),
        (ScanStrategy::Full, true, "full_parallel"),
        (ScanStrategy::Bounded, false, "bounded_sequential"),
        (ScanStrategy::Bounded, true, "bounded_parallel"),
    ];

    let stroke = BrushStroke::builder()
        .center(256, 256)
        .sigma(10.0)
        .power(0.05)
        .build();

    for (scan, parallel, label) in strategies {
        let engine = GaussianBrushEngine::new(
            BrushEngineConfig::builder()
                .scan(scan)
                .parallel(parallel)
                .build(),
        );
        let mut buffer = PixelBuffer::new(512, 512, Color4::new(128, 128, 0, 255)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| engine.apply(black_box(&mut buffer), black_box(&stroke)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_sigma(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_by_sigma");
    let engine = GaussianBrushEngine::default();

    for sigma in [2.0f32, 10.0, 50.0] {
        let stroke = BrushStroke::builder()
            .center(512, 512)
            .sigma(sigma)
            .power(0.05)
            .build();
        let mut buffer = PixelBuffer::new(1024, 1024, Color4::new(128, 128, 0, 255)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(sigma), &stroke, |b, stroke| {
            b.iter(|| engine.apply(&mut buffer, black_box(stroke)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_png_encode(c: &mut Criterion) {
    let codec = ImageCodec::new(CodecConfig::default());
    let buffer = PixelBuffer::new(512, 512, Color4::new(128, 128, 0, 255)).unwrap();

    c.bench_function("png_encode_512", |b| {
        b.iter(|| codec.encode(black_box(&buffer)).unwrap());
    });
}

criterion_group!(benches, benchmark_scan_strategies, benchmark_sigma, benchmark_png_encode);
criterion_main!(benches);
