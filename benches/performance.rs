use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use homebudget_core::{
    ledger::{compute_totals, EntryDraft, WeeklyLedger},
    storage::{JsonStore, LedgerStore},
};
use tempfile::tempdir;
use uuid::Uuid;

fn build_sample_week(entry_count: usize) -> WeeklyLedger {
    let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let mut ledger = WeeklyLedger::new(Uuid::new_v4(), monday)
        .with_opening(80.0, 400.0)
        .with_budget_issued(250.0);

    for idx in 0..entry_count {
        let date = monday + Duration::days((idx % 7) as i64);
        let amount = 1.0 + (idx % 100) as f64 * 0.37;
        let draft = match idx % 5 {
            0 => EntryDraft::withdrawal(date, amount),
            1 | 2 => EntryDraft::card(date, amount),
            _ => EntryDraft::cash(date, amount).with_yp_cash_in((idx % 3) as f64),
        };
        ledger
            .add_entry(draft.build().expect("valid draft"))
            .expect("entry in week");
    }
    ledger
}

fn bench_totals(c: &mut Criterion) {
    let ledger = build_sample_week(10_000);

    c.bench_function("compute_totals_10k", |b| {
        b.iter(|| {
            compute_totals(
                black_box(&ledger.entries),
                ledger.cash_carried_forward,
                ledger.card_carried_forward,
                ledger.budget_issued,
            )
        })
    });
}

fn bench_store(c: &mut Criterion) {
    let ledger = build_sample_week(1_000);
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(Some(dir.path().to_path_buf())).expect("store");

    c.bench_function("week_save_1k", |b| {
        b.iter(|| store.save(black_box(&ledger)).expect("save week"))
    });

    store.save(&ledger).expect("seed week");
    c.bench_function("week_open_next_1k", |b| {
        b.iter_batched(
            || dir.path().join("ledgers").join(ledger.home_id.to_string()),
            |home_dir| {
                let next = ledger.week_start + Duration::days(7);
                let path = home_dir.join(format!("{}.json", next.format("%Y-%m-%d")));
                let _ = std::fs::remove_file(&path);
                store.open_week(ledger.home_id, next).expect("open week")
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_totals, bench_store);
criterion_main!(benches);
