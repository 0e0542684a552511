use vecdot_simd::KernelTier;

/// Available backends for int8 dot products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Pure Rust portable implementation.
    Portable,
    /// SIMD-accelerated (AVX-512 VNNI, AVX2, NEON).
    Simd,
}

impl Backend {
    /// Get the currently active backend based on CPU features.
    pub fn current() -> Self {
        match vecdot_simd::active_kernel().tier {
            KernelTier::Portable => Backend::Portable,
            _ => Backend::Simd,
        }
    }

    /// Get a description of the selected int8 kernel.
    pub fn description() -> String {
        let tier = vecdot_simd::active_kernel().tier;
        match tier {
            KernelTier::Portable => "Portable (no SIMD)".to_string(),
            KernelTier::Neon => "ARM NEON (128-bit)".to_string(),
            KernelTier::Avx2 => "x86-64 AVX2 (256-bit)".to_string(),
            KernelTier::Avx512Vnni => "x86-64 AVX-512 VNNI (512-bit)".to_string(),
        }
    }
}

/// Get information about the library configuration.
pub fn version_info() -> String {
    let active = vecdot_simd::active_kernel();
    format!(
        "vecdot v{}\nBackend: {}\nKernel: {} (block {})\nCapabilities: {:?}",
        env!("CARGO_PKG_VERSION"),
        Backend::description(),
        active.kernel().name,
        active.block(),
        active.flags
    )
}
