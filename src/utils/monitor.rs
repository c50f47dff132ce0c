use std::cell::RefCell;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct PhaseTiming {
    pub phase: String,
    pub elapsed: Duration,
}

/// 記錄每個生成階段花費的時間
pub struct RunMonitor {
    start_time: Instant,
    phase_start: RefCell<Instant>,
    timings: RefCell<Vec<PhaseTiming>>,
    enabled: bool,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            phase_start: RefCell::new(now),
            timings: RefCell::new(Vec::new()),
            enabled,
        }
    }

    /// 結束目前階段並開始計時下一個階段
    pub fn log_phase(&self, phase: &str) {
        if !self.enabled {
            return;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(*self.phase_start.borrow());
        *self.phase_start.borrow_mut() = now;

        tracing::info!("📊 {} - Time: {:?}", phase, elapsed);
        self.timings.borrow_mut().push(PhaseTiming {
            phase: phase.to_string(),
            elapsed,
        });
    }

    pub fn log_final_stats(&self) {
        if !self.enabled {
            return;
        }
        tracing::info!(
            "📊 Final Stats - Total Time: {:?}, Phases: {}",
            self.start_time.elapsed(),
            self.timings.borrow().len()
        );
    }

    pub fn timings(&self) -> Vec<PhaseTiming> {
        self.timings.borrow().clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_records_nothing() {
        let monitor = RunMonitor::default();
        monitor.log_phase("enumerate");
        assert!(!monitor.is_enabled());
        assert!(monitor.timings().is_empty());
    }

    #[test]
    fn test_enabled_monitor_records_phases_in_order() {
        let monitor = RunMonitor::new(true);
        monitor.log_phase("enumerate");
        monitor.log_phase("generate_projects");
        let phases: Vec<String> = monitor.timings().into_iter().map(|t| t.phase).collect();
        assert_eq!(phases, vec!["enumerate", "generate_projects"]);
    }
}
