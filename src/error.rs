use thiserror::Error;

#[derive(Debug, Error)]
pub enum RingError {
    #[error("ring capacity must hold at least one element")]
    InvalidCapacity(usize),

    #[error("growth factor below 2 cannot enlarge the ring")]
    InvalidGrowthFactor(usize),
}
