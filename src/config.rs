/// Configuration constants for mps-check

/// Random sample tensor
pub mod sample {
    pub const ROWS: usize = 5;
    pub const COLS: usize = 3;
    pub const LOW: f32 = 0.0; // inclusive
    pub const HIGH: f32 = 1.0; // exclusive
}

/// Accelerator probe
pub mod accelerator {
    pub const DEFAULT_ORDINAL: usize = 0;
    pub const CONSTANT_VALUE: f32 = 1.0;
    pub const NOT_FOUND_MESSAGE: &str = "MPS device not found.";
}

/// Debug log settings
pub mod logging {
    pub const ENABLE_VAR: &str = "MPS_CHECK_LOG";
    pub const FILE_VAR: &str = "MPS_CHECK_LOG_FILE";
    pub const DEFAULT_FILE: &str = "/tmp/mps-check.log";
}

/// Backends compiled into this binary
pub fn compiled_backends() -> Vec<&'static str> {
    let mut backends = vec!["cpu"];
    if cfg!(feature = "metal") {
        backends.push("metal");
    }
    backends
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_is_always_compiled() {
        assert_eq!(compiled_backends()[0], "cpu");
    }

    #[test]
    fn sample_bounds_are_half_open_unit_interval() {
        assert!(sample::LOW < sample::HIGH);
        assert_eq!(sample::ROWS * sample::COLS, 15);
    }
}
