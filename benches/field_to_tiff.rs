use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ndarray::Array2;
use num_complex::Complex64;
use ptyviz_rs::image_pipeline::{
    complex_to_rgb, remove_phase_ramp, ComplexField, ConversionConfig, FieldToTiffPipeline,
    RampWeight, TiffCompression,
};
use std::io::Cursor;

fn generate_mock_field(width: usize, height: usize) -> ComplexField {
    ComplexField::new(Array2::from_shape_fn((height, width), |(y, x)| {
        let amplitude = 1.0 + ((x * y) % 17) as f64 / 17.0;
        Complex64::from_polar(amplitude, 0.05 * x as f64 - 0.02 * y as f64)
    }))
}

fn benchmark_encoding_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("complex_to_rgb_by_size");
    
    let sizes = vec![
        (128, 128, "128x128"),
        (512, 512, "512x512"),
        (1024, 1024, "1024x1024"),
    ];
    
    for (width, height, label) in sizes {
        let field = generate_mock_field(width, height);
        
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &field,
            |b, field| {
                b.iter(|| complex_to_rgb(black_box(field), None, None));
            },
        );
    }
    
    group.finish();
}

fn benchmark_ramp_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_phase_ramp");
    let field = generate_mock_field(512, 512);
    
    for (weight, label) in [(RampWeight::None, "unweighted"), (RampWeight::Modulus, "modulus")] {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &field,
            |b, field| {
                b.iter(|| remove_phase_ramp(black_box(field), weight, false));
            },
        );
    }
    
    group.finish();
}

fn benchmark_compression_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_methods");
    let field = generate_mock_field(512, 512);
    
    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateBalanced, "deflate"),
    ];
    
    for (compression, label) in compressions {
        let config = ConversionConfig::builder()
            .compression(compression)
            .build();
        let pipeline = FieldToTiffPipeline::new(config);
        let mut input = Vec::new();
        {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("field.tiff");
            pipeline.save_field(&field, &path).unwrap();
            input.extend(std::fs::read(&path).unwrap());
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &input,
            |b, data| {
                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = pipeline.convert(black_box(data), &mut output);
                });
            },
        );
    }
    
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encoding_sizes,
    benchmark_ramp_removal,
    benchmark_compression_methods
);
criterion_main!(benches);
