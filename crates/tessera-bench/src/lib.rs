//! Benchmark profiles for the Tessera array engine.
//!
//! Shared shape/source fixtures used by the `create_ops` benches.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Shapes exercised by the creation benches, small to large.
pub fn bench_shapes() -> Vec<(&'static str, Vec<u32>)> {
    vec![
        ("1d_small", vec![64]),
        ("2d_image", vec![480, 640]),
        ("3d_volume", vec![32, 64, 64]),
        ("4d_batch", vec![8, 3, 128, 128]),
    ]
}

/// A deterministic source buffer of `len` bytes for from-bytes benches.
pub fn source_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
