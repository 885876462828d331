use std::fmt;

/// Key holding the persisted theme ("light" / "dark").
pub const THEME_KEY: &str = "theme";
/// Key holding the number of finished countdowns as a decimal string.
pub const COMPLETED_COUNT_KEY: &str = "completedCount";
/// Key holding the name used for the last finished countdown.
pub const SAVED_NAME_KEY: &str = "savedName";

/// The three countdown lengths a session can be set to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountdownLength {
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl CountdownLength {
    pub const ALL: [CountdownLength; 3] = [Self::Ten, Self::Twenty, Self::Thirty];

    pub fn secs(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
        }
    }

    /// Anything other than 10, 20 or 30 is rejected.
    pub fn from_secs(secs: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|length| length.secs() == secs)
    }

    pub fn next(self) -> Self {
        match self {
            Self::Ten => Self::Twenty,
            Self::Twenty => Self::Thirty,
            Self::Thirty => Self::Ten,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Ten => Self::Thirty,
            Self::Twenty => Self::Ten,
            Self::Thirty => Self::Twenty,
        }
    }
}

impl fmt::Display for CountdownLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seconds", self.secs())
    }
}

/// Which screen the session is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
}
