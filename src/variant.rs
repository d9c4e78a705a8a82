use std::fmt;

/// A selectable compute mode of the renderer.
///
/// `CpuParallel` renders with one worker per logical core times two and is
/// reported available on multi-core hosts; `CpuScalar` is the
/// single-threaded fallback and is always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    CpuParallel,
    CpuScalar,
}

lazy_static! {
    static ref AVAILABLE: Vec<Variant> = probe();
}

/// Available variants, ordered by preference. Probed once per process.
pub fn variants() -> &'static [Variant] {
    &AVAILABLE
}

fn probe() -> Vec<Variant> {
    let mut available = Vec::new();
    if num_cpus::get() > 1 {
        available.push(Variant::CpuParallel);
    }
    available.push(Variant::CpuScalar);
    available
}

impl Variant {
    /// Picks the most preferred available variant. `variants()` always
    /// contains the scalar fallback, so selection cannot fail.
    pub fn select() -> Variant {
        variants()[0]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::CpuParallel => "cpu-parallel",
            Variant::CpuScalar => "cpu-scalar",
        }
    }

    pub fn num_threads(&self) -> u32 {
        match self {
            Variant::CpuParallel => num_cpus::get() as u32 * 2,
            Variant::CpuScalar => 1,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
