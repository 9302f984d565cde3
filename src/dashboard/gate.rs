/// Opens exactly once, after both data and rendering surfaces are available.
///
/// The two readiness signals may arrive in either order; each one is followed
/// by a call to [`ReadinessGate::try_open`], which re-checks every condition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessGate {
    has_data: bool,
    surfaces_ready: bool,
    opened: bool,
}

impl ReadinessGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_has_data(&mut self, has_data: bool) {
        self.has_data = has_data;
    }

    pub fn mark_surfaces_ready(&mut self) {
        self.surfaces_ready = true;
    }

    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.has_data
    }

    #[must_use]
    pub const fn surfaces_ready(&self) -> bool {
        self.surfaces_ready
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.opened
    }

    /// Open the gate if both signals have fired, it has never opened before,
    /// and `acquire` yields the resources the render needs.
    ///
    /// Returns the acquired resources only on the single successful opening.
    pub fn try_open<T>(&mut self, acquire: impl FnOnce() -> Option<T>) -> Option<T> {
        if self.opened || !self.has_data || !self.surfaces_ready {
            return None;
        }
        let resources = acquire()?;
        self.opened = true;
        Some(resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_closed_until_both_signals() {
        let mut gate = ReadinessGate::new();
        assert_eq!(gate.try_open(|| Some(())), None);

        gate.mark_surfaces_ready();
        assert_eq!(gate.try_open(|| Some(())), None);

        gate.set_has_data(true);
        assert_eq!(gate.try_open(|| Some(())), Some(()));
        assert!(gate.is_open());
    }

    #[test]
    fn opens_once() {
        let mut gate = ReadinessGate::new();
        gate.set_has_data(true);
        gate.mark_surfaces_ready();

        assert!(gate.try_open(|| Some(1)).is_some());
        assert!(gate.try_open(|| Some(2)).is_none());
    }

    #[test]
    fn failed_acquire_keeps_gate_closed() {
        let mut gate = ReadinessGate::new();
        gate.set_has_data(true);
        gate.mark_surfaces_ready();

        assert_eq!(gate.try_open(|| None::<()>), None);
        assert!(!gate.is_open());
        assert_eq!(gate.try_open(|| Some(())), Some(()));
    }
}
