#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket capacity before an insert triggers redistribution. A bucket
    /// transiently holds `max_objects + 1` objects right before the pass
    /// drains it.
    pub max_objects: usize,
    /// Split-depth cap. Redistribution at this depth is a no-op, so
    /// tightly clustered objects settle instead of recursing while the
    /// quadrant width shrinks toward zero.
    pub max_depth: u32,
}

impl Config {
    /// Deepest split level whose child slots are still addressable by
    /// 32-bit node ids (`4*id + 4` computed for a level-14 node stays
    /// below `u32::MAX`; one level deeper it does not).
    pub const MAX_DEPTH_LIMIT: u32 = 14;
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: 4,
            max_depth: 8,
        }
    }
}
