use classify_lines::{ScanConfig, classify_bytes};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SAMPLE: &str = "# comment\n\nclass Sample\n  def run\n    sql = <<-SQL\n    SELECT *\n    # still heredoc\n    SQL\n    str = \"not # a comment\"\n  end\nend\n";

fn benchmark_classify(c: &mut Criterion) {
    let input: String = SAMPLE.repeat(200);
    c.bench_function("classify_ruby_2k_lines", |b| {
        b.iter(|| {
            let outcome = classify_bytes(black_box(input.as_bytes()), &ScanConfig::default());
            black_box(outcome);
        })
    });
}

criterion_group!(benches, benchmark_classify);
criterion_main!(benches);
