//! Common test utilities
#![allow(dead_code)]

use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sift::dtype::Element;
use sift::runtime::Runtime;
use sift::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
use sift::runtime::host::{HostClient, HostDevice, HostRuntime};
use sift::runtime::ParallelismConfig;

/// Create a host (sequential reference) client and device for testing
pub fn create_host_client() -> (HostClient, HostDevice) {
    let device = HostDevice::new();
    let client = HostRuntime::default_client(&device);
    (client, device)
}

/// Create a CPU client and device for testing
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// CPU clients covering the parallel code paths
///
/// Small chunk sizes force multi-chunk compaction even for short inputs.
pub fn cpu_clients() -> Vec<(&'static str, CpuClient)> {
    let (client, _) = create_cpu_client();
    vec![
        ("default", client.clone()),
        (
            "1 thread, chunk 64",
            client
                .clone()
                .with_parallelism(ParallelismConfig::new(Some(1), Some(64))),
        ),
        (
            "4 threads, chunk 7",
            client
                .clone()
                .with_parallelism(ParallelismConfig::new(Some(4), Some(7))),
        ),
        (
            "global pool, chunk 1000",
            client.with_parallelism(ParallelismConfig::new(None, Some(1000))),
        ),
    ]
}

/// Problem sizes exercised by randomized tests
pub fn get_sizes() -> Vec<usize> {
    vec![
        0, 1, 2, 12, 63, 64, 211, 256, 344, 1024, 2048, 5000, 34567, 65536, 100000,
    ]
}

/// Element types used by the typed tests
pub trait TestElement: Element + SampleUniform {
    /// Widest range random data is drawn from
    fn full_range() -> (Self, Self);
}

macro_rules! impl_test_element_int {
    ($($t:ty),*) => {
        $(
            impl TestElement for $t {
                fn full_range() -> (Self, Self) {
                    (<$t>::MIN, <$t>::MAX)
                }
            }
        )*
    };
}

impl_test_element_int!(i8, u8, i16, u16, i32, u32, i64, u64);

// Float MIN..MAX overflows the sampler's scale, so floats use a finite window.
impl TestElement for f32 {
    fn full_range() -> (Self, Self) {
        (-1.0e6, 1.0e6)
    }
}

impl TestElement for f64 {
    fn full_range() -> (Self, Self) {
        (-1.0e12, 1.0e12)
    }
}

/// Seeded uniform random data in `[min, max]`
pub fn get_random_data<T: TestElement>(size: usize, min: T, max: T, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(min..=max)).collect()
}

/// Seeded random data over the type's full test range
pub fn get_full_range_data<T: TestElement>(size: usize, seed: u64) -> Vec<T> {
    let (min, max) = T::full_range();
    get_random_data(size, min, max, seed)
}

/// Seeded random integral values in `[0, 10]`, so equality hits are common
pub fn get_small_data<T: TestElement>(size: usize, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| T::from_f64(rng.random_range(0u32..=10) as f64))
        .collect()
}

/// Convert an integer literal to an element
pub fn elem<T: Element>(v: i32) -> T {
    T::from_f64(v as f64)
}

/// Build a vector of elements from integer literals
pub fn elems<T: Element>(values: &[i32]) -> Vec<T> {
    values.iter().map(|&v| elem(v)).collect()
}
