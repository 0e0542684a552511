//! CPU feature detection for runtime SIMD dispatch.

use std::sync::OnceLock;

/// Environment variable that masks every detected feature.
pub const DISABLE_SIMD_ENV: &str = "VECDOT_DISABLE_SIMD";

/// Snapshot of the vector extensions usable for int8 dot products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityFlags {
    /// AVX2 (256-bit integer arithmetic).
    pub avx2: bool,
    /// AVX-512 foundation, byte/word ops and VNNI, all present together.
    pub avx512_vnni: bool,
    /// ARM NEON (128-bit).
    pub neon: bool,
}

impl CapabilityFlags {
    /// No hardware acceleration.
    pub const NONE: Self = Self {
        avx2: false,
        avx512_vnni: false,
        neon: false,
    };

    /// Combine the three AVX-512 features the VNNI kernel needs.
    ///
    /// Partial support counts as absent.
    pub fn vnni_set(avx512f: bool, avx512bw: bool, avx512vnni: bool) -> bool {
        avx512f && avx512bw && avx512vnni
    }

    /// Query the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                avx2: is_x86_feature_detected!("avx2"),
                avx512_vnni: Self::vnni_set(
                    is_x86_feature_detected!("avx512f"),
                    is_x86_feature_detected!("avx512bw"),
                    is_x86_feature_detected!("avx512vnni"),
                ),
                neon: false,
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                neon: std::arch::is_aarch64_feature_detected!("neon"),
                ..Self::NONE
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self::NONE
        }
    }

    /// Detect, honoring [`DISABLE_SIMD_ENV`].
    pub fn detect_with_env() -> Self {
        if simd_disabled_by_env() {
            log::info!("{DISABLE_SIMD_ENV} is set, ignoring CPU vector extensions");
            return Self::NONE;
        }
        Self::detect()
    }

    /// Whether any accelerated tier is usable.
    pub fn any(&self) -> bool {
        self.avx2 || self.avx512_vnni || self.neon
    }
}

fn simd_disabled_by_env() -> bool {
    std::env::var(DISABLE_SIMD_ENV).is_ok_and(|v| env_flag(&v))
}

fn env_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// Global cached capability snapshot.
static CAPABILITIES: OnceLock<CapabilityFlags> = OnceLock::new();

/// Get the detected capabilities (cached).
pub fn capabilities() -> CapabilityFlags {
    *CAPABILITIES.get_or_init(CapabilityFlags::detect_with_env)
}
