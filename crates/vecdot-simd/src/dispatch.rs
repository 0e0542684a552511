use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use vecdot_core::{DotI8, Kernel};

use crate::detect::{capabilities, CapabilityFlags};
use crate::kernels::{dot_i8_portable, PORTABLE_BLOCK};

/// Int8 kernel tiers, from least to most capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelTier {
    /// `wide`-based fallback, available everywhere.
    Portable,
    /// ARM NEON (128-bit).
    Neon,
    /// x86-64 AVX2 (256-bit integer multiply-add).
    Avx2,
    /// x86-64 AVX-512 VNNI (512-bit byte dot-product accumulate).
    Avx512Vnni,
}

impl KernelTier {
    /// Every tier in descending selection priority.
    pub const PRIORITY: [KernelTier; 4] = [
        KernelTier::Avx512Vnni,
        KernelTier::Avx2,
        KernelTier::Neon,
        KernelTier::Portable,
    ];

    /// Stable identifier, used as a benchmark and test label.
    pub fn name(&self) -> &'static str {
        match self {
            KernelTier::Portable => "dot_i8_portable",
            KernelTier::Neon => "dot_i8_neon",
            KernelTier::Avx2 => "dot_i8_avx2",
            KernelTier::Avx512Vnni => "dot_i8_vnni",
        }
    }

    /// Length granularity of the tier; input lengths must be a multiple
    /// of it.
    ///
    /// Every accelerated tier accepts multiples of 16, whatever its
    /// register width.
    pub fn block(&self) -> usize {
        match self {
            KernelTier::Portable => PORTABLE_BLOCK,
            KernelTier::Neon | KernelTier::Avx2 | KernelTier::Avx512Vnni => 16,
        }
    }

    /// Whether `flags` confirm every feature this tier needs.
    pub fn is_supported_by(&self, flags: &CapabilityFlags) -> bool {
        match self {
            KernelTier::Portable => true,
            KernelTier::Neon => flags.neon,
            KernelTier::Avx2 => flags.avx2,
            KernelTier::Avx512Vnni => flags.avx512_vnni,
        }
    }

    /// The tier's kernel, if the running CPU supports it.
    pub fn kernel(&self) -> Option<Kernel<DotI8>> {
        if !self.is_supported_by(&capabilities()) {
            return None;
        }
        let func = self.func()?;
        Some(Kernel::new(self.name(), func, self.block()))
    }

    /// Kernel function compiled for this target, without a CPU check.
    fn func(&self) -> Option<DotI8> {
        match self {
            KernelTier::Portable => Some(dot_i8_portable),
            #[cfg(target_arch = "aarch64")]
            KernelTier::Neon => Some(crate::kernels::neon::dot_i8_neon),
            #[cfg(target_arch = "x86_64")]
            KernelTier::Avx2 => Some(crate::kernels::avx2::dot_i8_avx2),
            #[cfg(target_arch = "x86_64")]
            KernelTier::Avx512Vnni => Some(crate::kernels::avx512::dot_i8_vnni),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

/// Pick the best tier `flags` allow.
///
/// Pure: the same flags always give the same tier, and all-false flags
/// give [`KernelTier::Portable`].
pub fn select(flags: &CapabilityFlags) -> KernelTier {
    KernelTier::PRIORITY
        .into_iter()
        .find(|tier| tier.is_supported_by(flags))
        .unwrap_or(KernelTier::Portable)
}

/// Lifecycle of the process-wide kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DispatchState {
    /// Nothing has requested a kernel yet.
    Unselected = 0,
    /// Detection is running.
    Selecting = 1,
    /// The active kernel is fixed for the rest of the process.
    Selected = 2,
}

/// The int8 kernel chosen for this process.
#[derive(Debug, Clone, Copy)]
pub struct ActiveKernel {
    /// Tier the kernel belongs to.
    pub tier: KernelTier,
    /// Flags the choice was made from.
    pub flags: CapabilityFlags,
    kernel: Kernel<DotI8>,
}

impl ActiveKernel {
    fn resolve() -> Self {
        STATE.store(DispatchState::Selecting as u8, Ordering::Release);

        let flags = capabilities();
        log::debug!("detected CPU capabilities: {flags:?}");
        Self::from_flags(flags)
    }

    /// Build the kernel `flags` select.
    ///
    /// A tier with no kernel compiled for this target degrades to the
    /// portable tier as a whole, so name, block width and body always
    /// belong together. Must only be called with flags the CPU backs.
    fn from_flags(flags: CapabilityFlags) -> Self {
        let selected = select(&flags);
        let (tier, func) = match selected.func() {
            Some(func) => (selected, func),
            None => (KernelTier::Portable, dot_i8_portable as DotI8),
        };
        let kernel = Kernel::new(tier.name(), func, tier.block());
        log::info!(
            "selected int8 dot kernel {} (block width {})",
            kernel.name,
            kernel.block
        );

        Self {
            tier,
            flags,
            kernel,
        }
    }

    /// The selected kernel.
    pub fn kernel(&self) -> Kernel<DotI8> {
        self.kernel
    }

    /// Length granularity callers must respect.
    pub fn block(&self) -> usize {
        self.kernel.block
    }

    /// Invoke the selected kernel.
    #[inline]
    pub fn call(&self, a: &[i8], b: &[i8]) -> i32 {
        (self.kernel.func)(a, b)
    }
}

static ACTIVE: OnceLock<ActiveKernel> = OnceLock::new();
static STATE: AtomicU8 = AtomicU8::new(DispatchState::Unselected as u8);

/// Get the process-wide int8 kernel, selecting it on first use.
pub fn active_kernel() -> &'static ActiveKernel {
    ACTIVE.get_or_init(ActiveKernel::resolve)
}

/// Current selection state.
pub fn dispatch_state() -> DispatchState {
    if ACTIVE.get().is_some() {
        return DispatchState::Selected;
    }
    match STATE.load(Ordering::Acquire) {
        1 => DispatchState::Selecting,
        _ => DispatchState::Unselected,
    }
}

/// Accelerated int8 kernels usable on this CPU, best first.
///
/// Unlike the scalar tables this list depends on the host and never
/// contains a kernel the CPU cannot run. The portable fallback is always
/// last.
pub fn simd_i8_kernels() -> Vec<Kernel<DotI8>> {
    KernelTier::PRIORITY
        .iter()
        .filter_map(|tier| tier.kernel())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecdot_core::dot_i8_naive;

    #[test]
    fn test_select_priority() {
        let all = CapabilityFlags {
            avx2: true,
            avx512_vnni: true,
            neon: false,
        };
        assert_eq!(select(&all), KernelTier::Avx512Vnni);

        let avx2_only = CapabilityFlags {
            avx2: true,
            ..CapabilityFlags::NONE
        };
        assert_eq!(select(&avx2_only), KernelTier::Avx2);

        let neon = CapabilityFlags {
            neon: true,
            ..CapabilityFlags::NONE
        };
        assert_eq!(select(&neon), KernelTier::Neon);

        assert_eq!(select(&CapabilityFlags::NONE), KernelTier::Portable);
    }

    #[test]
    fn test_select_partial_vnni_falls_back() {
        let flags = CapabilityFlags {
            avx2: true,
            avx512_vnni: CapabilityFlags::vnni_set(true, false, true),
            neon: false,
        };
        assert_eq!(select(&flags), KernelTier::Avx2);
    }

    #[test]
    fn test_select_deterministic() {
        let flags = capabilities();
        let first = select(&flags);
        for _ in 0..10 {
            assert_eq!(select(&flags), first);
        }
    }

    #[test]
    fn test_tier_blocks() {
        assert_eq!(KernelTier::Portable.block(), 8);
        assert_eq!(KernelTier::Neon.block(), 16);
        assert_eq!(KernelTier::Avx2.block(), 16);
        assert_eq!(KernelTier::Avx512Vnni.block(), 16);
    }

    #[test]
    fn test_missing_tier_degrades_to_portable() {
        // Flags for a tier with no kernel on this target.
        #[cfg(not(target_arch = "aarch64"))]
        let foreign = CapabilityFlags {
            neon: true,
            ..CapabilityFlags::NONE
        };
        #[cfg(target_arch = "aarch64")]
        let foreign = CapabilityFlags {
            avx2: true,
            ..CapabilityFlags::NONE
        };

        let active = ActiveKernel::from_flags(foreign);
        assert_eq!(active.tier, KernelTier::Portable);
        assert_eq!(active.kernel().name, "dot_i8_portable");
        assert_eq!(active.block(), PORTABLE_BLOCK);

        let a = [127i8; 16];
        assert_eq!(active.call(&a, &a), 258064);
    }

    #[test]
    fn test_active_kernel_labels_consistent() {
        let active = active_kernel();
        assert_eq!(active.kernel().name, active.tier.name());
        assert_eq!(active.block(), active.tier.block());
    }

    #[test]
    fn test_active_kernel() {
        let active = active_kernel();
        println!("Active kernel: {:?}", active);

        assert_eq!(dispatch_state(), DispatchState::Selected);
        assert_eq!(active.tier, select(&active.flags));
        assert!(std::ptr::eq(active, active_kernel()));

        let a = [127i8; 16];
        assert_eq!(active.call(&a, &a), 258064);
    }

    #[test]
    fn test_active_matches_naive() {
        let active = active_kernel();
        let a: Vec<i8> = (0..1536).map(|i| (i * 13 % 256) as u8 as i8).collect();
        let b: Vec<i8> = (0..1536).map(|i| (255 - i * 7 % 256) as u8 as i8).collect();
        let expected = dot_i8_naive(&a, &b);
        assert_eq!(active.call(&a, &b), expected);
        assert_eq!(active.call(&a, &b), expected);
    }

    #[test]
    fn test_simd_kernels_all_runnable() {
        let kernels = simd_i8_kernels();
        assert_eq!(kernels.last().map(|k| k.name), Some("dot_i8_portable"));

        let a: Vec<i8> = (0..128).map(|i| (i as i8).wrapping_mul(3)).collect();
        let expected = dot_i8_naive(&a, &a);
        for k in &kernels {
            assert_eq!(k.call(&a, &a), expected, "{}", k.name);
        }
    }

    #[test]
    fn test_unsupported_tier_has_no_kernel() {
        let caps = capabilities();
        for tier in KernelTier::PRIORITY {
            assert_eq!(tier.kernel().is_some(), tier.is_supported_by(&caps));
        }
    }
}
