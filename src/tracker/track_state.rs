/// Phase of the single tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// No detection has anchored the track yet
    #[default]
    Uninitialized,
    /// Matched a candidate on the last frame
    Tracked,
    /// Missing, still within the miss budget
    Coasting,
    /// Miss budget exceeded
    Lost,
}
