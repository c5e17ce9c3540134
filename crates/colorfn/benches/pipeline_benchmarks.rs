use colorfn::{
    AdjusterEdit, AdjusterSet, CanonicalColor, ColorFunctionEvaluator, ExpressionEvaluator,
    adjusters_string, contrast_color, function_string,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    let cases = [
        ("keyword", "rebeccapurple"),
        ("hex", "#b577f2"),
        ("hex8", "#ff0000bf"),
        ("rgba", "rgba(181, 119, 242, 0.6)"),
        ("hsla", "hsla(100, 19%, 20%, 0.6)"),
    ];

    for (name, input) in cases {
        group.bench_with_input(BenchmarkId::new("parse", name), &input, |b, input| {
            b.iter(|| CanonicalColor::parse(black_box(input)))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let evaluator = ColorFunctionEvaluator;

    let cases = [
        ("identity", "color(#b577f2)"),
        ("alpha", "color(#b577f2 alpha(60%))"),
        ("hsl_chain", "color(red hue(+ 40) saturation(80%) lightness(- 10%))"),
        ("tint_shade", "color(#b577f2 tint(20%) shade(10%))"),
        ("contrast", "color(rgb(20, 40, 80) contrast(0%))"),
        ("nested", "color(color(red lightness(50%)) hue(240))"),
    ];

    for (name, expression) in cases {
        group.bench_with_input(BenchmarkId::new("expression", name), &expression, |b, e| {
            b.iter(|| evaluator.evaluate(black_box(e)))
        });
    }
    group.finish();
}

fn bench_full_recompute(c: &mut Criterion) {
    // One edit's worth of work: seed, edit, serialize, evaluate, contrast
    c.bench_function("recompute_after_edit", |b| {
        b.iter(|| {
            let base = black_box("#b577f2");
            let mut adjusters = AdjusterSet::seed_from_color(base, &AdjusterSet::default())?;
            adjusters.apply_edit("alphaValue", &AdjusterEdit::SetValue("60".to_string()))?;
            let expression = function_string(base, &adjusters_string(&adjusters, false));
            let output = ColorFunctionEvaluator.evaluate(&expression)?;
            contrast_color(&output)
        })
    });
}

criterion_group!(benches, bench_canonicalize, bench_evaluate, bench_full_recompute);
criterion_main!(benches);
