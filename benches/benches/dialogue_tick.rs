//! Benchmark suite for dialogue playback
//!
//! Measures the per-frame cost of revealing and animating a line, and the
//! cost of starting and force-revealing one.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emote_benches::{create_dialogue, generate_line, lengths};
use emote_types::{filter::filter_language, portrait::PortraitState};
use std::hint::black_box;

/// Benchmark one animation frame with every glyph on screen
fn bench_tick_full_line(c: &mut Criterion) {
	let mut group = c.benchmark_group("dialogue_tick");

	for (name, len) in [("short", lengths::SHORT), ("typical", lengths::TYPICAL), ("long", lengths::LONG)] {
		for state in [PortraitState::Normal, PortraitState::Angry, PortraitState::Smirk] {
			let mut dialogue = create_dialogue();
			dialogue.set_dialogue(&generate_line(len), state);
			dialogue.force_reveal(16.0);

			group.throughput(Throughput::Elements(len as u64));
			group.bench_function(BenchmarkId::new(format!("{name}/{state}"), len), |b| {
				b.iter(|| dialogue.tick(black_box(16.0)));
			});
		}
	}

	group.finish();
}

/// Benchmark starting a line and revealing it at once
fn bench_force_reveal(c: &mut Criterion) {
	let mut group = c.benchmark_group("dialogue_force_reveal");

	for len in [lengths::SHORT, lengths::TYPICAL, lengths::LONG] {
		let line = generate_line(len);
		let mut dialogue = create_dialogue();

		group.throughput(Throughput::Elements(len as u64));
		group.bench_with_input(BenchmarkId::from_parameter(len), &line, |b, line| {
			b.iter(|| {
				// alternate lines so the repeat short-circuit never fires
				dialogue.set_dialogue("", PortraitState::Normal);
				dialogue.set_dialogue(black_box(line), PortraitState::Sad);
				dialogue.force_reveal(16.0);
			});
		});
	}

	group.finish();
}

/// Benchmark the profanity filter alone
fn bench_filter(c: &mut Criterion) {
	let line = generate_line(lengths::LONG);
	c.bench_function("filter_language", |b| b.iter(|| filter_language(black_box(&line))));
}

criterion_group!(benches, bench_tick_full_line, bench_force_reveal, bench_filter);
criterion_main!(benches);
