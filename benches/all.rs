use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sentimeter::{AnalysisHistory, Lexicon, SentimentBand, SpellingModel};

const REVIEW: &str = "The first half was really wonderful and the acting was \
                      excellent, but the ending felt slow, predictable and \
                      very disappointing.";

fn scoring(c: &mut Criterion) {
    let lexicon = Lexicon::builtin();
    c.bench_function("score review", |b| b.iter(|| lexicon.score(black_box(REVIEW))));
}

fn classification(c: &mut Criterion) {
    c.bench_function("classify sweep", |b| {
        b.iter(|| {
            for i in -100..=100 {
                black_box(SentimentBand::from_polarity(f64::from(i) / 100.0));
            }
        })
    });
}

fn history(c: &mut Criterion) {
    let texts: Vec<String> = (0..100).map(|i| format!("text number {}", i)).collect();
    c.bench_function("record 100 texts", |b| {
        b.iter(|| {
            let mut history = AnalysisHistory::new();
            for text in &texts {
                history.record(text, 0.5, 0.5);
            }
            black_box(history.len())
        })
    });
}

fn correction(c: &mut Criterion) {
    let mut model = SpellingModel::new();
    model.train_on_text(REVIEW);
    c.bench_function("correct review", |b| {
        b.iter(|| model.correct(black_box("the frist half was relly wonderfull")))
    });
}

criterion_group!(benches, scoring, classification, history, correction);
criterion_main!(benches);
