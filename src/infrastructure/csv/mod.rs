// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Turns fetched CSV text into the tabular response shape

mod tabulator;

pub use tabulator::tabulate;
