//! Benchmark crate for `zvec`. All content lives in `benches/`.
