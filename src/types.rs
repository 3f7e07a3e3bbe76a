/// Schemes with a registered default port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    /// Any other scheme, including the empty one of a relative reference
    #[default]
    Other,
}

impl SchemeType {
    /// Check if this scheme is one of the registered ones
    pub fn is_known(self) -> bool {
        self != Self::Other
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::Other => None,
        }
    }
}
