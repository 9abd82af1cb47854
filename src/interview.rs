use tracing::info;

/// Host-provided camera/microphone capability.
///
/// Nothing in this crate records or analyses media; the trait exists so the
/// panel can report whether a host could supply it.
pub trait MediaCapture {
    fn is_available(&self) -> bool;
    fn describe(&self) -> String;
}

/// Capture backend for terminals, which have no camera or microphone access.
pub struct NoCapture;

impl MediaCapture for NoCapture {
    fn is_available(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "Camera and microphone unavailable (no capture backend)".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// Figures shown on the interview panel. Fixed placeholders, not measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub eye_contact: &'static str,
    pub confidence: &'static str,
}

impl Metrics {
    pub const PLACEHOLDER: Metrics = Metrics {
        eye_contact: "82%",
        confidence: "Good",
    };

    pub const EMPTY: Metrics = Metrics {
        eye_contact: "--",
        confidence: "--",
    };
}

pub const TRACKED_ASPECTS: [&str; 4] = [
    "Eye contact and engagement",
    "Speaking pace and clarity",
    "Body language and posture",
    "Answer quality and structure",
];

pub struct MockInterview {
    state: SessionState,
    capture: Box<dyn MediaCapture>,
}

impl Default for MockInterview {
    fn default() -> Self {
        Self::new(Box::new(NoCapture))
    }
}

impl MockInterview {
    pub fn new(capture: Box<dyn MediaCapture>) -> Self {
        Self {
            state: SessionState::Idle,
            capture,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn start(&mut self) {
        if self.state == SessionState::Idle {
            info!(capture = self.capture.is_available(), "Mock interview started");
        }
        self.state = SessionState::Active;
    }

    pub fn stop(&mut self) {
        if self.state == SessionState::Active {
            info!("Mock interview ended");
        }
        self.state = SessionState::Idle;
    }

    pub fn metrics(&self) -> Metrics {
        match self.state {
            SessionState::Active => Metrics::PLACEHOLDER,
            SessionState::Idle => Metrics::EMPTY,
        }
    }

    pub fn capture_available(&self) -> bool {
        self.capture.is_available()
    }

    pub fn capture_status(&self) -> String {
        self.capture.describe()
    }
}
