use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use question_calculator::interpreter::processor::{process, Question};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    let questions = [
        "2 + 3 * 4".to_string(),
        "x = 5\ny = x^2\n(y + x) / 3".to_string(),
        "0xFF + 0b101 - 12_000.5".to_string(),
        "cos(0) + sin(0) * max(2, 3)".to_string(),
        "a = 2\nb = a^10\nc = sqrt(b)\nmin(b, c) / a".to_string(),
    ];
    for text in questions {
        group.throughput(Throughput::Elements(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(&text), &text, |bencher, text| {
            bencher.iter(|| process(&Question::new(text.as_str())));
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
