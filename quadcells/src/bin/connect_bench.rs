use quadcells::{Cell, CellsManager, Vec2};
use std::time::Instant;

fn build_row_grid(cells_target: usize) -> CellsManager {
    let mut m = CellsManager::new();
    // rows of rectangles with a 4px gap so every neighbour pair is a candidate
    let per_row = 50usize;
    for k in 0..cells_target {
        let (i, j) = (k % per_row, k / per_row);
        m.add_cell(Cell::at_point(Vec2::new(i as f32 * 104.0, j as f32 * 200.0)));
    }
    m
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut cells = 500usize;
    let mut rounds = 20usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--cells=") { if let Ok(v)=val.parse() { cells=v; } }
        else if let Some(val)=a.strip_prefix("--rounds=") { if let Ok(v)=val.parse() { rounds=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let mut m = build_row_grid(cells);
    let mut times_ms: Vec<f64> = Vec::with_capacity(rounds);
    let mut found = 0usize;
    for _ in 0..rounds {
        let t0 = Instant::now();
        found = m.get_available_connections().len();
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }

    let t0 = Instant::now();
    let mut connected = 0usize;
    for info in m.get_available_connections() {
        if m.connect_cells(&info).is_ok() { connected += 1; }
    }
    let connect_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let t0 = Instant::now();
    let insertions = m.get_available_insertions().len();
    let insert_ms = t0.elapsed().as_secs_f64() * 1000.0;

    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    println!("cells={} rounds={} candidates={} connected={} insertions={} median_ms={:.4} p90_ms={:.4} connect_ms={:.3} insertions_ms={:.3}", cells, rounds, found, connected, insertions, med, p90, connect_ms, insert_ms);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
