use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solpos::{Functions, Output, Request, TrigCache, calculate};
use std::hint::black_box;

fn reference_request() -> Request {
    let mut request = Request::new();
    request.year = Some(1999);
    request.month = Some(7);
    request.day = Some(22);
    request.hour = Some(9);
    request.minute = Some(45);
    request.second = Some(37);
    request.timezone = Some(-5.0);
    request.latitude = Some(33.65);
    request.longitude = Some(-84.43);
    request.pressure = 1006.0;
    request.temperature = 27.0;
    request.tilt = 33.65;
    request.aspect = 135.0;
    request
}

fn benchmark_function_masks(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_mask");
    let masks = [
        ("geometry", Functions::GEOMETRY),
        ("solar_azimuth", Functions::S_SOLAR_AZIMUTH.difference(Functions::DAY_OF_YEAR)),
        ("etr", Functions::S_ETR.difference(Functions::DAY_OF_YEAR)),
        ("all", Functions::DEFAULT),
    ];

    for (name, functions) in masks {
        let mut request = reference_request();
        request.functions = functions;
        let mut output = Output::new();
        let mut cache = TrigCache::new();

        group.bench_with_input(BenchmarkId::from_parameter(name), &request, |b, request| {
            b.iter(|| calculate(black_box(request), &mut output, &mut cache).unwrap());
        });
    }
    group.finish();
}

fn benchmark_time_series(c: &mut Criterion) {
    // Weather station pattern: one-minute samples over a day at a fixed site.
    let mut group = c.benchmark_group("time_series");
    group.throughput(Throughput::Elements(1440));

    group.bench_function("one_day_by_minute", |b| {
        let mut request = reference_request();
        request.interval = 60;
        let mut output = Output::new();
        let mut cache = TrigCache::new();

        b.iter(|| {
            let mut total = 0.0;
            for minute_of_day in 1..=1440 {
                request.hour = Some(minute_of_day / 60);
                request.minute = Some(minute_of_day % 60);
                request.second = Some(0);
                calculate(&request, &mut output, &mut cache).unwrap();
                total += output.etr().unwrap_or(0.0);
            }
            black_box(total)
        });
    });
    group.finish();
}

fn benchmark_coordinate_sweep(c: &mut Criterion) {
    // Resource mapping pattern: 1° grid at a fixed instant.
    let mut group = c.benchmark_group("coordinate_sweep");
    let coordinates: Vec<(f64, f64)> = (-60..=60)
        .step_by(5)
        .flat_map(|lat| (-180..180).step_by(5).map(move |lon| (f64::from(lat), f64::from(lon))))
        .collect();
    group.throughput(Throughput::Elements(coordinates.len() as u64));

    group.bench_function("grid_5deg", |b| {
        let mut request = reference_request();
        let mut output = Output::new();
        let mut cache = TrigCache::new();

        b.iter(|| {
            for &(latitude, longitude) in &coordinates {
                request.latitude = Some(latitude);
                request.longitude = Some(longitude);
                calculate(&request, &mut output, &mut cache).unwrap();
                black_box(output.azimuth());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_function_masks,
    benchmark_time_series,
    benchmark_coordinate_sweep
);
criterion_main!(benches);
