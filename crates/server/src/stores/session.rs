//! Generation session state machine.

use mockup_studio_core::ImageData;

/// Where the current generation session stands.
///
/// `Idle -> Generating -> {Succeeded, Failed}`; starting a new request from
/// any state moves back to `Generating` and clears previous results.
#[derive(Debug, Clone, Default)]
pub enum GenerationState {
    /// No generation has run since startup or the last reset.
    #[default]
    Idle,
    /// Gateway calls are in flight.
    Generating,
    /// Every gateway call succeeded; results are in mockup order.
    Succeeded(Vec<ImageData>),
    /// At least one gateway call failed; no partial results are kept.
    Failed(String),
}

/// The current generation session.
///
/// Generated images are ephemeral: they live only here, and only until the
/// next generation starts.
#[derive(Debug, Default)]
pub struct GenerationSession {
    state: GenerationState,
}

impl GenerationSession {
    /// Create a session in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Whether gateway calls are currently in flight.
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        matches!(self.state, GenerationState::Generating)
    }

    /// Start a new generation, clearing any previous results or error.
    pub fn begin(&mut self) {
        self.state = GenerationState::Generating;
    }

    /// Record a fully successful batch.
    pub fn succeed(&mut self, images: Vec<ImageData>) {
        self.state = GenerationState::Succeeded(images);
    }

    /// Record a failed batch. No partial results survive.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = GenerationState::Failed(message.into());
    }
}
