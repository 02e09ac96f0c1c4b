use std::fs;
use std::hint::black_box;

use chrono::{DateTime, Utc};
use codex_transcript::collector::{Sources, collect_messages};
use codex_transcript::output::render_transcript;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;

const MESSAGES_PER_FILE: usize = 200;

/// Generate a sessions tree with `num_files` rollout files spread over day directories
fn generate_sessions(num_files: usize) -> TempDir {
    let dir = TempDir::new().unwrap();

    for f in 0..num_files {
        let day_dir = dir.path().join(format!("2024/01/{:02}", (f % 28) + 1));
        fs::create_dir_all(&day_dir).unwrap();

        let mut content = String::new();
        for m in 0..MESSAGES_PER_FILE {
            let role = if m % 2 == 0 { "user" } else { "assistant" };
            content.push_str(&format!(
                r#"{{"type":"response_item","timestamp":"2024-01-{:02}T{:02}:{:02}:00Z","payload":{{"type":"message","role":"{}","content":[{{"text":"message {} of file {}"}}]}}}}"#,
                (f % 28) + 1,
                m % 24,
                (m + f) % 60,
                role,
                m,
                f
            ));
            content.push('\n');
        }
        fs::write(day_dir.join(format!("rollout-{f}.jsonl")), content).unwrap();
    }

    dir
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_messages");

    for num_files in [10, 50, 200].iter() {
        let dir = generate_sessions(*num_files);
        let sources = Sources { sessions_root: dir.path().to_path_buf(), history_file: None };

        group.throughput(Throughput::Elements((*num_files * MESSAGES_PER_FILE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_files), num_files, |b, _| {
            b.iter(|| {
                let collection = collect_messages(black_box(&sources), DateTime::<Utc>::MIN_UTC);
                render_transcript(&collection.messages, 0)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_collect);
criterion_main!(benches);
