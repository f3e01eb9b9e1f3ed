use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use augbox_augment::annotation::Annotation;
use augbox_augment::rotate::rotate;
use augbox_augment::shift::shift;
use augbox_image::Image;

fn annotations(n: usize) -> Vec<Annotation> {
    (0..n)
        .map(|i| Annotation {
            class_id: i as u32,
            cx: 0.1 + 0.8 * (i as f64 / n as f64),
            cy: 0.5,
            w: 0.05,
            h: 0.05,
        })
        .collect()
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rotate");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image =
            Image::<f32, 3>::new([*width, *height].into(), vec![0f32; width * height * 3]).unwrap();
        let anns = annotations(16);

        group.bench_with_input(
            BenchmarkId::new("project", &parameter_string),
            &(&image, &anns),
            |b, i| {
                let (src, anns) = (i.0, i.1);
                b.iter(|| rotate(black_box(src), black_box(anns), black_box(33.0)))
            },
        );
    }
    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shift");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image =
            Image::<f32, 3>::new([*width, *height].into(), vec![0f32; width * height * 3]).unwrap();
        let anns = annotations(16);

        group.bench_with_input(
            BenchmarkId::new("project", &parameter_string),
            &(&image, &anns),
            |b, i| {
                let (src, anns) = (i.0, i.1);
                b.iter(|| {
                    shift(
                        black_box(src),
                        black_box(anns),
                        black_box(10.0),
                        black_box(-5.0),
                        black_box(0.035),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_rotate, bench_shift);
criterion_main!(benches);
