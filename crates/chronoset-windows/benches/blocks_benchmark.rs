// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chronoset_axes::CalendarDay;
use chronoset_core::Interval;
use chronoset_windows::IntervalCollection;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Builds a deterministic, partially overlapping interval load: starts
/// jump around a four-thousand-day range while lengths cycle through a
/// handful of widths, which yields a realistic mix of merges and gaps.
fn synthetic_windows(entries: usize) -> IntervalCollection<CalendarDay> {
    let intervals = (0..entries).map(|i| {
        let start = ((i * 37) % 4000) as i64;
        let length = (5 + (i * 13) % 40) as i64;
        Interval::closed(
            CalendarDay::from_epoch_days(start),
            CalendarDay::from_epoch_days(start + length),
        )
        .expect("synthetic interval bounds are ordered")
    });
    intervals.collect()
}

fn bench_with_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_blocks");
    for entries in [64_usize, 512, 4096] {
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &entries,
            |b, &entries| {
                let windows = synthetic_windows(entries);
                b.iter(|| black_box(&windows).with_blocks());
            },
        );
    }
    group.finish();
}

fn bench_with_gaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_gaps");
    for entries in [64_usize, 512, 4096] {
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &entries,
            |b, &entries| {
                let windows = synthetic_windows(entries);
                b.iter(|| black_box(&windows).with_gaps());
            },
        );
    }
    group.finish();
}

fn bench_plus(c: &mut Criterion) {
    let mut group = c.benchmark_group("plus");
    for entries in [64_usize, 512, 4096] {
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &entries,
            |b, &entries| {
                let windows = synthetic_windows(entries);
                let addition = Interval::closed(
                    CalendarDay::from_epoch_days(1999),
                    CalendarDay::from_epoch_days(2100),
                )
                .expect("addition bounds are ordered");
                b.iter(|| black_box(&windows).plus(black_box(addition)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_with_blocks, bench_with_gaps, bench_plus);
criterion_main!(benches);
