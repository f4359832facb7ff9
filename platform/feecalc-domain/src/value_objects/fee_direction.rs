#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeDirection {
    Incoming,
    Outgoing,
}

impl FeeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incoming => "Incoming",
            Self::Outgoing => "Outgoing",
        }
    }
}
